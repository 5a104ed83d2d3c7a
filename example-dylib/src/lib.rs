use std::sync::atomic::{AtomicI32, Ordering};

#[no_mangle]
pub static EXAMPLE_VALUE: i32 = 42;

static CALLS: AtomicI32 = AtomicI32::new(0);

#[no_mangle]
pub extern "C" fn add(a: i32, b: i32) -> i32 {
    CALLS.fetch_add(1, Ordering::Relaxed);
    a + b
}

#[no_mangle]
pub extern "C" fn calls() -> i32 {
    CALLS.load(Ordering::Relaxed)
}

mod common;

use common::example_path;
use dlfcn_rs::{LoaderHandle, OpenFlags};

const OPENS: usize = 3;

fn is_resident(path: &str) -> bool {
    match LoaderHandle::dlopen(path, OpenFlags::RTLD_NOLOAD | OpenFlags::RTLD_LAZY) {
        Ok(resident) => {
            unsafe { resident.dlclose().unwrap() };
            true
        }
        Err(_) => false,
    }
}

// The only test in this binary, so nothing else holds a reference to libexample.
#[test]
fn test_reference_count() {
    let path = example_path();
    assert!(!is_resident(&path));

    let handles: Vec<LoaderHandle> = (0..OPENS)
        .map(|_| LoaderHandle::dlopen(&path, OpenFlags::RTLD_LAZY).unwrap())
        .collect();
    assert!(is_resident(&path));

    for handle in &handles[1..] {
        unsafe { handle.dlclose().unwrap() };
        assert!(handles[0].dlsym("add").is_ok());
        assert!(is_resident(&path));
    }

    unsafe { handles[0].dlclose().unwrap() };
    // musl never unloads; glibc unloads once the count reaches zero.
    #[cfg(all(target_os = "linux", target_env = "gnu"))]
    assert!(!is_resident(&path));

    // A balanced pair leaves nothing behind and the path opens again.
    let again = LoaderHandle::dlopen(&path, OpenFlags::RTLD_LAZY).unwrap();
    assert!(again.dlsym("add").is_ok());
    unsafe { again.dlclose().unwrap() };
}

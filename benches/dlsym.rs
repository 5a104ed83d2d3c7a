use criterion::{Criterion, criterion_group, criterion_main};
use dlfcn_rs::{LoaderHandle, OpenFlags};
use libloading::Library;

#[cfg(target_os = "macos")]
const PATH: &str = "/usr/lib/libSystem.B.dylib";
#[cfg(not(target_os = "macos"))]
const PATH: &str = "libm.so.6";

fn get_symbol(c: &mut Criterion) {
    let lib = LoaderHandle::dlopen(PATH, OpenFlags::RTLD_NOW | OpenFlags::RTLD_LOCAL).unwrap();
    let libloading = unsafe { Library::new(PATH).unwrap() };
    c.bench_function("dlfcn-rs:dlsym", |b| {
        b.iter(|| lib.dlsym("cos").unwrap());
    });
    c.bench_function("dlfcn-rs:get", |b| {
        b.iter(|| unsafe { lib.get::<unsafe extern "C" fn(f64) -> f64>("cos").unwrap() });
    });
    c.bench_function("libloading:get", |b| {
        b.iter(|| unsafe {
            let _cos = libloading
                .get::<unsafe extern "C" fn(f64) -> f64>("cos".as_bytes())
                .unwrap();
        });
    });
    unsafe { lib.dlclose().unwrap() };
}

criterion_group!(benches, get_symbol);
criterion_main!(benches);

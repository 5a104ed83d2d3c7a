#![allow(dead_code)]

use std::env::consts;
use std::path::PathBuf;

const TARGET_DIR: Option<&'static str> = option_env!("CARGO_TARGET_DIR");

const PACKAGE_NAME: [&str; 1] = ["example_dylib"];

/// A library every supported platform ships, and a symbol it exports.
#[cfg(all(target_os = "linux", target_env = "gnu"))]
pub const SYSTEM_LIB: &str = "libm.so.6";
#[cfg(all(target_os = "linux", not(target_env = "gnu")))]
pub const SYSTEM_LIB: &str = "libc.so";
#[cfg(target_os = "android")]
pub const SYSTEM_LIB: &str = "libm.so";
#[cfg(any(target_os = "macos", target_os = "ios"))]
pub const SYSTEM_LIB: &str = "/usr/lib/libSystem.B.dylib";
#[cfg(target_os = "freebsd")]
pub const SYSTEM_LIB: &str = "libm.so.5";

pub const SYSTEM_SYMBOL: &str = "cos";

pub const MISSING_LIB: &str = "/nonexistent/lib.so";

pub fn init_logger() {
    let _ = env_logger::try_init();
}

fn compile() {
    static ONCE: ::std::sync::Once = ::std::sync::Once::new();
    ONCE.call_once(|| {
        for name in PACKAGE_NAME {
            let mut cmd = std::process::Command::new(env!("CARGO"));
            cmd.arg("build").arg("-r").arg("-p").arg(name);
            assert!(
                cmd.status()
                    .expect("could not compile the test helpers!")
                    .success()
            );
        }
    });
}

/// Builds `example_dylib` once per process and returns the path of the resulting library.
pub fn example_path() -> String {
    init_logger();
    compile();
    let dir: PathBuf = TARGET_DIR
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("target"));
    let file_name = format!("{}example{}", consts::DLL_PREFIX, consts::DLL_SUFFIX);
    dir.join("release")
        .join(file_name)
        .to_str()
        .unwrap()
        .to_string()
}

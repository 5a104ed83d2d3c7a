//! Per-platform `<dlfcn.h>` tables.

cfg_if::cfg_if! {
    if #[cfg(all(target_os = "linux", target_env = "gnu"))] {
        mod glibc;
        pub(crate) use glibc::*;
    } else if #[cfg(any(target_os = "linux", target_os = "android"))] {
        mod linux;
        pub(crate) use linux::*;
    } else if #[cfg(any(target_os = "macos", target_os = "ios"))] {
        mod apple;
        pub(crate) use apple::*;
    } else if #[cfg(target_os = "freebsd")] {
        mod freebsd;
        pub(crate) use freebsd::*;
    } else {
        compile_error!("unsupported platform");
    }
}

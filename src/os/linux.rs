// musl and bionic have no RTLD_DEEPBIND and no dlmopen. 32-bit bionic keeps the historical
// values of RTLD_NOW, RTLD_GLOBAL and the pseudo-handles.
use core::ffi::c_int;

pub(crate) const RTLD_LAZY: c_int = 0x00001;
pub(crate) const RTLD_NOLOAD: c_int = 0x00004;
pub(crate) const RTLD_LOCAL: c_int = 0;
pub(crate) const RTLD_NODELETE: c_int = 0x01000;

cfg_if::cfg_if! {
    if #[cfg(all(target_os = "android", target_pointer_width = "32"))] {
        pub(crate) const RTLD_NOW: c_int = 0;
        pub(crate) const RTLD_GLOBAL: c_int = 0x00002;
        pub(crate) const RTLD_DEFAULT: usize = 0xffff_ffff;
        pub(crate) const RTLD_NEXT: usize = 0xffff_fffe;
    } else {
        pub(crate) const RTLD_NOW: c_int = 0x00002;
        pub(crate) const RTLD_GLOBAL: c_int = 0x00100;
        pub(crate) const RTLD_DEFAULT: usize = 0;
        pub(crate) const RTLD_NEXT: usize = usize::MAX;
    }
}

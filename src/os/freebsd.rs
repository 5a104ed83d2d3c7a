// Source for constants: FreeBSD include/dlfcn.h
use core::ffi::c_int;

pub(crate) const RTLD_LAZY: c_int = 1;
pub(crate) const RTLD_NOW: c_int = 2;
pub(crate) const RTLD_GLOBAL: c_int = 0x100;
pub(crate) const RTLD_LOCAL: c_int = 0;
pub(crate) const RTLD_NODELETE: c_int = 0x01000;
pub(crate) const RTLD_NOLOAD: c_int = 0x02000;
pub(crate) const RTLD_DEEPBIND: c_int = 0x40000;

pub(crate) const RTLD_NEXT: usize = -1isize as usize;
pub(crate) const RTLD_DEFAULT: usize = -2isize as usize;

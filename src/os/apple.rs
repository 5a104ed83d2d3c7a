// Source for constants: dyld include/dlfcn.h
use core::ffi::c_int;

pub(crate) const RTLD_LAZY: c_int = 0x1;
pub(crate) const RTLD_NOW: c_int = 0x2;
pub(crate) const RTLD_LOCAL: c_int = 0x4;
pub(crate) const RTLD_GLOBAL: c_int = 0x8;
pub(crate) const RTLD_NOLOAD: c_int = 0x10;
pub(crate) const RTLD_NODELETE: c_int = 0x80;

pub(crate) const RTLD_NEXT: usize = -1isize as usize;
pub(crate) const RTLD_DEFAULT: usize = -2isize as usize;

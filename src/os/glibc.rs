// Source for constants: glibc bits/dlfcn.h and dlfcn/dlfcn.h
use core::ffi::{c_char, c_int, c_long, c_void};

pub(crate) const RTLD_LAZY: c_int = 0x00001;
pub(crate) const RTLD_NOW: c_int = 0x00002;
pub(crate) const RTLD_NOLOAD: c_int = 0x00004;
pub(crate) const RTLD_DEEPBIND: c_int = 0x00008;
pub(crate) const RTLD_GLOBAL: c_int = 0x00100;
pub(crate) const RTLD_LOCAL: c_int = 0;
pub(crate) const RTLD_NODELETE: c_int = 0x01000;

pub(crate) const RTLD_DEFAULT: usize = 0;
pub(crate) const RTLD_NEXT: usize = usize::MAX;

pub(crate) type Lmid = c_long;

/// Initial namespace.
pub(crate) const LM_ID_BASE: Lmid = 0;
/// For `dlmopen`: request a new namespace.
pub(crate) const LM_ID_NEWLM: Lmid = -1;

/// `dlinfo` request: namespace id of the handle.
const RTLD_DI_LMID: c_int = 1;

unsafe extern "C" {
    fn dlmopen(lmid: Lmid, filename: *const c_char, flag: c_int) -> *mut c_void;
    fn dlinfo(handle: *mut c_void, request: c_int, info: *mut c_void) -> c_int;
}

#[inline]
pub(crate) unsafe fn open_in_namespace(
    lmid: Lmid,
    filename: *const c_char,
    flag: c_int,
) -> *mut c_void {
    unsafe { dlmopen(lmid, filename, flag) }
}

/// Returns `None` when `dlinfo` failed; the reason is pending in `dlerror`.
#[inline]
pub(crate) unsafe fn namespace_of(handle: *mut c_void) -> Option<Lmid> {
    let mut lmid: Lmid = LM_ID_BASE;
    let ret = unsafe { dlinfo(handle, RTLD_DI_LMID, (&raw mut lmid).cast()) };
    if ret != 0 { None } else { Some(lmid) }
}

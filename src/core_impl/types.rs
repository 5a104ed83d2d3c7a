use crate::os;
use core::{
    ffi::c_void,
    fmt::{Debug, Display},
};

/// An opaque reference to one loaded-library instance, as returned by `dlopen`.
///
/// The native loader reference-counts libraries: every successful open must be balanced by one
/// [`dlclose`](LoaderHandle::dlclose). Two opens of the same path commonly return the same value,
/// but that is loader-defined and must not be relied upon. This type owns nothing; dropping it does
/// not close the library.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct LoaderHandle(usize);

impl LoaderHandle {
    /// Pseudo-handle that searches every library loaded with `RTLD_GLOBAL`, in load order.
    pub const DEFAULT: LoaderHandle = LoaderHandle(os::RTLD_DEFAULT);
    /// Pseudo-handle that searches the libraries loaded after the calling object.
    pub const NEXT: LoaderHandle = LoaderHandle(os::RTLD_NEXT);

    /// Wraps a raw handle obtained elsewhere, e.g. from a direct `dlopen` call.
    ///
    /// # Safety
    /// `raw` must be a handle the native loader handed out and that has not been closed to zero,
    /// or one of the platform pseudo-handles.
    #[inline]
    pub unsafe fn from_raw(raw: *mut c_void) -> LoaderHandle {
        LoaderHandle(raw as usize)
    }

    /// Wraps a non-null `dlopen` result.
    #[inline]
    pub(crate) fn from_native(raw: *mut c_void) -> Option<LoaderHandle> {
        if raw.is_null() {
            None
        } else {
            Some(LoaderHandle(raw as usize))
        }
    }

    /// Returns the raw handle value, suitable for passing to native `dlsym`/`dlclose`.
    #[inline]
    pub fn as_raw(self) -> *mut c_void {
        self.0 as *mut c_void
    }

    /// Whether this is one of the search pseudo-handles rather than a library reference.
    #[inline]
    pub fn is_pseudo(self) -> bool {
        self == LoaderHandle::DEFAULT || self == LoaderHandle::NEXT
    }
}

impl Debug for LoaderHandle {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if *self == LoaderHandle::DEFAULT {
            write!(f, "LoaderHandle(RTLD_DEFAULT)")
        } else if *self == LoaderHandle::NEXT {
            write!(f, "LoaderHandle(RTLD_NEXT)")
        } else {
            write!(f, "LoaderHandle({:#x})", self.0)
        }
    }
}

/// The address of a resolved symbol. Never zero.
///
/// `dlsym` signals a miss with a null return, so a symbol that genuinely lives at address zero
/// (e.g. an absolute or weak undefined symbol) cannot be represented and resolves as an error.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct SymbolAddress(usize);

impl SymbolAddress {
    #[inline]
    pub(crate) fn from_native(raw: *mut c_void) -> Option<SymbolAddress> {
        if raw.is_null() {
            None
        } else {
            Some(SymbolAddress(raw as usize))
        }
    }

    #[inline]
    pub fn as_ptr(self) -> *const () {
        self.0 as *const ()
    }

    #[inline]
    pub fn addr(self) -> usize {
        self.0
    }
}

impl Debug for SymbolAddress {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "SymbolAddress({:#x})", self.0)
    }
}

impl Display for SymbolAddress {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

/// A link-map namespace id (`Lmid_t`).
///
/// Apart from [`BASE`](NamespaceId::BASE) and [`NEW`](NamespaceId::NEW), ids should come from
/// [`LoaderHandle::namespace`]. An id the loader does not know is not rejected here; `dlmopen`
/// reports it through `dlerror`.
#[cfg(all(target_os = "linux", target_env = "gnu"))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct NamespaceId(os::Lmid);

#[cfg(all(target_os = "linux", target_env = "gnu"))]
impl NamespaceId {
    /// The initial namespace, where the program and its startup dependencies live.
    pub const BASE: NamespaceId = NamespaceId(os::LM_ID_BASE);
    /// Asks `dlmopen` to create a new, empty namespace.
    pub const NEW: NamespaceId = NamespaceId(os::LM_ID_NEWLM);

    #[inline]
    pub const fn from_raw(raw: core::ffi::c_long) -> NamespaceId {
        NamespaceId(raw)
    }

    #[inline]
    pub const fn as_raw(self) -> core::ffi::c_long {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    #[test]
    fn null_is_never_a_handle() {
        assert!(LoaderHandle::from_native(core::ptr::null_mut()).is_none());
        assert!(SymbolAddress::from_native(core::ptr::null_mut()).is_none());
    }

    #[test]
    fn symbol_address_is_never_zero() {
        let lowest = SymbolAddress::from_native(1 as *mut c_void).unwrap();
        assert_eq!(lowest.addr(), 1);
    }

    #[test]
    fn pseudo_handles_match_libc() {
        assert_eq!(LoaderHandle::DEFAULT.as_raw(), libc::RTLD_DEFAULT);
        assert_eq!(LoaderHandle::NEXT.as_raw(), libc::RTLD_NEXT);
        assert!(LoaderHandle::DEFAULT.is_pseudo());
        assert!(LoaderHandle::NEXT.is_pseudo());
    }

    #[test]
    fn debug_format() {
        let handle = LoaderHandle::from_native(0x7f00_1000 as *mut c_void).unwrap();
        assert_eq!(format!("{handle:?}"), "LoaderHandle(0x7f001000)");
        assert!(!handle.is_pseudo());
        assert_eq!(format!("{:?}", LoaderHandle::DEFAULT), "LoaderHandle(RTLD_DEFAULT)");
        let sym = SymbolAddress::from_native(0x1234 as *mut c_void).unwrap();
        assert_eq!(format!("{sym}"), "0x1234");
        assert_eq!(sym.addr(), 0x1234);
    }

    #[cfg(all(target_os = "linux", target_env = "gnu"))]
    #[test]
    fn namespace_sentinels() {
        assert_eq!(NamespaceId::BASE.as_raw(), 0);
        assert_eq!(NamespaceId::NEW.as_raw(), -1);
        assert_ne!(NamespaceId::BASE, NamespaceId::NEW);
    }
}

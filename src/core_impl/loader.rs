use crate::{
    Error, OpenFlags, Result,
    core_impl::{
        channel::{drain_failure, lock_loader},
        types::LoaderHandle,
    },
};
use alloc::ffi::CString;
use core::ffi::c_char;

#[inline]
pub(crate) fn to_cpath(path: &str) -> Result<CString> {
    CString::new(path).map_err(|_| Error::InvalidPath)
}

fn open_impl(path: Option<&str>, flags: OpenFlags) -> Result<LoaderHandle> {
    let cpath = path.map(to_cpath).transpose()?;
    let filename: *const c_char = cpath.as_ref().map_or(core::ptr::null(), |p| p.as_ptr());
    let mode = flags.with_binding();
    let subject = path.unwrap_or("main program");
    log::info!("dlopen: Try to open [{}] with [{:?}]", subject, mode);

    let _guard = lock_loader!();
    let raw = unsafe { libc::dlopen(filename, mode.bits()) };
    let Some(handle) = LoaderHandle::from_native(raw) else {
        return Err(drain_failure("dlopen", subject));
    };
    log::debug!("dlopen: Opened [{}] as [{:?}]", subject, handle);
    Ok(handle)
}

impl LoaderHandle {
    /// Load a shared library from a specified path. It is the same as `dlopen`.
    ///
    /// Each successful call increments the library's reference count and must be balanced by
    /// one [`dlclose`](LoaderHandle::dlclose). A path without a `/` is searched for the way the
    /// native loader searches (`LD_LIBRARY_PATH`, the loader cache, default directories).
    /// When `flags` names neither `RTLD_LAZY` nor `RTLD_NOW`, `RTLD_LAZY` is used.
    ///
    /// The library's initializers run before this returns, with the loader lock of this crate
    /// held: they must not call back into this crate.
    ///
    /// # Example
    /// ```no_run
    /// # use dlfcn_rs::{LoaderHandle, OpenFlags};
    ///
    /// let path = "/path/to/library.so";
    /// let lib = LoaderHandle::dlopen(path, OpenFlags::RTLD_LOCAL).expect("Failed to load library");
    /// ```
    #[inline]
    pub fn dlopen(path: impl AsRef<str>, flags: OpenFlags) -> Result<LoaderHandle> {
        open_impl(Some(path.as_ref()), flags)
    }

    /// Get a handle to the main program. It is the same as `dlopen(NULL, flags)`.
    #[inline]
    pub fn dlopen_self(flags: OpenFlags) -> Result<LoaderHandle> {
        open_impl(None, flags)
    }

    /// Load a library with eager binding and global visibility, the usual mode for binding
    /// foreign functions by name.
    #[inline]
    pub fn open_library(path: impl AsRef<str>) -> Result<LoaderHandle> {
        Self::dlopen(path, OpenFlags::RTLD_NOW | OpenFlags::RTLD_GLOBAL)
    }

    /// Release one reference to the library. It is the same as `dlclose`.
    ///
    /// The library is unloaded once every reference is released and no other loaded library
    /// depends on it; that last step is decided by the native loader and cannot be observed here.
    /// A successful close does not mean the library is gone, and some loaders never report a
    /// failure at all.
    ///
    /// # Safety
    /// `self` must come from a successful open whose reference has not been released yet.
    /// Once the last reference is released, neither this handle nor copies of it, nor anything
    /// resolved through it, may be used again.
    pub unsafe fn dlclose(self) -> Result<()> {
        log::info!("dlclose: Closing [{:?}]", self);
        let _guard = lock_loader!();
        // Unreachable on glibc for valid handles; the drain is covered by the channel tests.
        if unsafe { libc::dlclose(self.as_raw()) } != 0 {
            return Err(drain_failure("dlclose", "handle"));
        }
        Ok(())
    }
}

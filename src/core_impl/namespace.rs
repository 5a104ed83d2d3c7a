//! Link-map namespaces (`dlmopen`, `dlinfo(RTLD_DI_LMID)`).

use crate::{
    OpenFlags, Result,
    core_impl::{
        channel::{drain_failure, lock_loader},
        loader::to_cpath,
        types::{LoaderHandle, NamespaceId},
    },
    error::loader_error,
    os,
};
use alloc::format;

impl LoaderHandle {
    /// Load a shared library into a link-map namespace. It is the same as `dlmopen`.
    ///
    /// [`NamespaceId::BASE`] loads into the initial namespace. [`NamespaceId::NEW`] creates a new
    /// namespace; it starts empty, so every dependency of the library must be resolvable from
    /// within it. Any other id must come from [`namespace`](LoaderHandle::namespace) and adds the
    /// library to that existing namespace.
    ///
    /// Like [`dlopen`](LoaderHandle::dlopen), each call takes a reference that must be balanced by
    /// [`dlclose`](LoaderHandle::dlclose). glibc allows only a small number of namespaces (16,
    /// some reserved); running out is reported as an error.
    ///
    /// An unknown id is forwarded and reported as an error. Some glibc releases (2.36) are then
    /// left in a state where the process deadlocks in `exit`.
    pub fn dlmopen(
        namespace: NamespaceId,
        path: impl AsRef<str>,
        flags: OpenFlags,
    ) -> Result<LoaderHandle> {
        let path = path.as_ref();
        let cpath = to_cpath(path)?;
        let mode = flags.with_binding();
        log::info!(
            "dlmopen: Try to open [{}] in namespace [{:?}] with [{:?}]",
            path,
            namespace,
            mode
        );

        let _guard = lock_loader!();
        let raw = unsafe { os::open_in_namespace(namespace.as_raw(), cpath.as_ptr(), mode.bits()) };
        let Some(handle) = LoaderHandle::from_native(raw) else {
            return Err(drain_failure("dlmopen", path));
        };
        Ok(handle)
    }

    /// The namespace this library was loaded into. It is the same as `dlinfo(RTLD_DI_LMID)`.
    ///
    /// The result can be passed to [`dlmopen`](LoaderHandle::dlmopen) to load more libraries
    /// next to this one.
    pub fn namespace(self) -> Result<NamespaceId> {
        if self.is_pseudo() {
            return Err(loader_error(format!("dlinfo: [{self:?}] is not a library handle")));
        }
        let _guard = lock_loader!();
        match unsafe { os::namespace_of(self.as_raw()) } {
            Some(lmid) => {
                log::debug!("dlinfo: [{:?}] is in namespace [{}]", self, lmid);
                Ok(NamespaceId::from_raw(lmid))
            }
            None => Err(drain_failure("dlinfo", "handle")),
        }
    }
}

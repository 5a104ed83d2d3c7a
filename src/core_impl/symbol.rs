use crate::{
    Result,
    core_impl::{
        channel::{drain_failure, lock_loader},
        types::{LoaderHandle, SymbolAddress},
    },
    error::invalid_symbol_name,
};
use alloc::ffi::CString;
use core::{fmt::Debug, marker::PhantomData, ops::Deref};

/// A resolved symbol viewed as a value of type `T`, typically a function pointer or a pointer to a
/// static variable.
pub struct Symbol<T> {
    addr: SymbolAddress,
    pd: PhantomData<T>,
}

impl<T> Deref for Symbol<T> {
    type Target = T;

    fn deref(&self) -> &T {
        unsafe { &*(&self.addr as *const SymbolAddress as *const T) }
    }
}

impl<T> Clone for Symbol<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Symbol<T> {}

impl<T> Debug for Symbol<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Symbol").field("addr", &self.addr).finish()
    }
}

impl<T> Symbol<T> {
    /// Consumes the symbol and returns the raw pointer.
    #[inline]
    pub fn into_raw(self) -> *const () {
        self.addr.as_ptr()
    }

    #[inline]
    pub fn address(&self) -> SymbolAddress {
        self.addr
    }
}

// Safety: Symbol can be sent between threads if T can
unsafe impl<T: Send> Send for Symbol<T> {}

// Safety: Symbol can be shared between threads if T can
unsafe impl<T: Sync> Sync for Symbol<T> {}

fn dlsym_impl(handle: LoaderHandle, name: &str) -> Result<SymbolAddress> {
    let cname = CString::new(name).map_err(|_| invalid_symbol_name(name))?;
    let _guard = lock_loader!();
    let raw = unsafe { libc::dlsym(handle.as_raw(), cname.as_ptr()) };
    // A symbol bound to address zero is indistinguishable from a miss and is reported as one.
    match SymbolAddress::from_native(raw) {
        Some(addr) => {
            log::debug!("dlsym: Found [{}] in [{:?}] at [{}]", name, handle, addr);
            Ok(addr)
        }
        None => Err(drain_failure("dlsym", name)),
    }
}

impl LoaderHandle {
    /// Resolve a symbol to its address. It is the same as `dlsym`.
    ///
    /// A library handle searches the library and the dependencies it pulled in when it was loaded.
    /// [`LoaderHandle::DEFAULT`] searches the global scope. The name is used as-is; no mangling is
    /// done.
    ///
    /// A symbol whose address is zero cannot be told apart from a miss and is returned as an
    /// error. The message is then either the loader's or, if it set none, one noting that the
    /// lookup failed without a loader message.
    #[inline]
    pub fn dlsym(self, name: &str) -> Result<SymbolAddress> {
        dlsym_impl(self, name)
    }

    /// Get a pointer to a function or static variable by symbol name.
    ///
    /// The symbol is interpreted as-is; no mangling is done. This means that symbols like `x::y` are
    /// most likely invalid.
    ///
    /// # Safety
    /// Users of this API must specify the correct type of the function or variable loaded, and must
    /// not use the symbol after the library is unloaded.
    ///
    /// # Examples
    /// ```no_run
    /// # use dlfcn_rs::{Symbol, LoaderHandle, OpenFlags};
    /// # let lib = LoaderHandle::dlopen("awesome.so", OpenFlags::RTLD_NOW).unwrap();
    /// unsafe {
    ///     let awesome_function: Symbol<unsafe extern "C" fn(f64) -> f64> =
    ///         lib.get("awesome_function").unwrap();
    ///     awesome_function(0.42);
    /// }
    /// ```
    /// A static variable may also be loaded and inspected:
    /// ```no_run
    /// # use dlfcn_rs::{Symbol, LoaderHandle, OpenFlags};
    /// # let lib = LoaderHandle::dlopen("awesome.so", OpenFlags::RTLD_NOW).unwrap();
    /// unsafe {
    ///     let awesome_variable: Symbol<*mut f64> = lib.get("awesome_variable").unwrap();
    ///     **awesome_variable = 42.0;
    /// };
    /// ```
    #[inline]
    pub unsafe fn get<T>(self, name: &str) -> Result<Symbol<T>> {
        const { assert!(size_of::<T>() == size_of::<*mut ()>()) };
        let addr = dlsym_impl(self, name)?;
        Ok(Symbol {
            addr,
            pd: PhantomData,
        })
    }
}

/// Look up a symbol in the global scope, i.e. the program and every library opened with
/// `RTLD_GLOBAL`. It is the same as `dlsym(RTLD_DEFAULT, name)`.
///
/// # Safety
/// Users of this API must specify the correct type of the function or variable loaded.
pub unsafe fn dlsym_default<T>(name: &str) -> Result<Symbol<T>> {
    log::info!("dlsym: Use RTLD_DEFAULT flag to find symbol [{}]", name);
    unsafe { LoaderHandle::DEFAULT.get(name) }
}

/// Look up the next definition of a symbol after the object that calls this function.
/// It is the same as `dlsym(RTLD_NEXT, name)`.
///
/// # Safety
/// Users of this API must specify the correct type of the function or variable loaded.
pub unsafe fn dlsym_next<T>(name: &str) -> Result<Symbol<T>> {
    log::info!("dlsym: Use RTLD_NEXT flag to find symbol [{}]", name);
    unsafe { LoaderHandle::NEXT.get(name) }
}

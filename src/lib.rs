//!A Rust library that exposes the platform dynamic loader (`dlopen`, `dlmopen`, `dlsym`, `dlclose`, `dlerror`)
//!behind a safe, error-propagating interface.
//!
//!This library serves three purposes:
//!1. Turn the stateful `dlerror` channel into a plain [`Result`]: every fallible call reads the loader's
//!   error immediately after the native call that may have set it, so a message is never lost or attributed
//!   to the wrong call.
//!2. Give handles, symbol addresses and namespace ids distinct types instead of raw integers.
//!3. Mirror the loader's mode bits and pseudo-handles per platform, so no platform inherits another's values.
//!
//!Currently, it supports Linux (glibc, musl), Android, macOS/iOS and FreeBSD. Link-map namespaces
//!(`dlmopen`) are only available on glibc.
//!
//! # Examples
//! ```no_run
//! # use dlfcn_rs::{LoaderHandle, OpenFlags};
//!
//! fn main(){
//!     let path = "./target/release/libexample.so";
//!     let libexample = LoaderHandle::dlopen(path, OpenFlags::RTLD_LOCAL | OpenFlags::RTLD_LAZY).unwrap();
//!
//!     let add = unsafe {
//!         libexample.get::<extern "C" fn(i32, i32) -> i32>("add").unwrap()
//!     };
//!     println!("{}", add(1,1));
//!     unsafe { libexample.dlclose().unwrap() };
//! }
//! ```
#![warn(
    clippy::unnecessary_lazy_evaluations,
    clippy::collapsible_if,
    clippy::explicit_iter_loop,
    clippy::manual_assert,
    clippy::needless_question_mark,
    clippy::needless_return,
    clippy::needless_update,
    clippy::redundant_clone,
    clippy::redundant_else,
    clippy::redundant_static_lifetimes
)]
#![no_std]

extern crate alloc;

mod core_impl;
mod error;
mod os;

use bitflags::bitflags;
use core::ffi::c_int;

pub use crate::core_impl::channel::dlerror;
pub use crate::core_impl::symbol::{Symbol, dlsym_default, dlsym_next};
pub use crate::core_impl::types::{LoaderHandle, SymbolAddress};
pub use crate::error::Error;

#[cfg(all(target_os = "linux", target_env = "gnu"))]
pub use crate::core_impl::types::NamespaceId;

bitflags! {
    /// Flags that control how dynamic libraries are loaded and resolved.
    ///
    /// The values are the ones of the target's `<dlfcn.h>`; they are not portable across platforms.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct OpenFlags: c_int {
        /// Symbols in this library are not made available to resolve references in subsequently loaded libraries.
        const RTLD_LOCAL = os::RTLD_LOCAL;
        /// Perform lazy binding: resolve symbols only as they are executed.
        const RTLD_LAZY = os::RTLD_LAZY;
        /// Resolve all symbols before `dlopen` returns.
        const RTLD_NOW = os::RTLD_NOW;
        /// Don't load the library, only succeed if it is already resident.
        const RTLD_NOLOAD = os::RTLD_NOLOAD;
        /// Prefer the search scope of this library over the global scope for symbol resolution.
        #[cfg(any(all(target_os = "linux", target_env = "gnu"), target_os = "freebsd"))]
        const RTLD_DEEPBIND = os::RTLD_DEEPBIND;
        /// Make symbols in this library available for symbol resolution in subsequently loaded libraries.
        const RTLD_GLOBAL = os::RTLD_GLOBAL;
        /// Do not unload the library during `dlclose`.
        const RTLD_NODELETE = os::RTLD_NODELETE;
    }
}

impl OpenFlags {
    /// Adds `RTLD_LAZY` when no binding mode was requested. glibc rejects a mode without one.
    #[inline]
    pub(crate) fn with_binding(self) -> Self {
        OpenFlags::from_bits_retain(binding_bits(
            self.bits(),
            OpenFlags::RTLD_LAZY.bits(),
            OpenFlags::RTLD_NOW.bits(),
        ))
    }
}

#[inline]
const fn binding_bits(mode: c_int, lazy: c_int, now: c_int) -> c_int {
    // Where RTLD_NOW is zero (32-bit bionic) a mode without RTLD_LAZY already means eager binding.
    if now == 0 || mode & (lazy | now) != 0 {
        mode
    } else {
        mode | lazy
    }
}

pub type Result<T> = core::result::Result<T, Error>;

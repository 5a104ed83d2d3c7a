//! The loader's error channel.
//!
//! `dlerror` keeps a single pending message and clears it once read. Every native call made by this
//! crate happens under [`LOADER`], and fallible calls read the channel before the lock is released.

use crate::{Error, error::loader_error};
use alloc::{format, string::String};
use core::ffi::CStr;
use spin::Mutex;

/// Serializes every call into the native loader together with the `dlerror` read that follows it.
pub(crate) static LOADER: Mutex<()> = Mutex::new(());

macro_rules! lock_loader {
    () => {{ $crate::core_impl::channel::LOADER.lock() }};
}
pub(crate) use lock_loader;

/// Reads and clears the pending loader message. Caller must hold [`LOADER`].
pub(crate) fn take_error() -> String {
    let msg = unsafe { libc::dlerror() };
    if msg.is_null() {
        return String::new();
    }
    unsafe { CStr::from_ptr(msg) }.to_string_lossy().into_owned()
}

/// Returns the most recent loader error message and clears it. Empty when nothing is pending.
///
/// The operations of this crate already drain the channel themselves, so this only reports errors
/// left by loader calls made outside of it.
pub fn dlerror() -> String {
    let _guard = lock_loader!();
    take_error()
}

/// Drains the channel after `op` returned its failure sentinel and wraps the message.
/// Caller must hold [`LOADER`].
#[cold]
#[inline(never)]
pub(crate) fn drain_failure(op: &str, subject: &str) -> Error {
    let msg = take_error();
    log::debug!("{}: [{}] failed: {}", op, subject, msg);
    if msg.is_empty() {
        // Some loaders return the sentinel without setting an error.
        loader_error(format!("{op}: [{subject}] failed without a loader message"))
    } else {
        loader_error(msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_without_message() {
        let _guard = lock_loader!();
        take_error();
        let err = drain_failure("dlclose", "handle");
        assert_eq!(
            err.message(),
            "dlclose: [handle] failed without a loader message"
        );
    }

    // glibc does not fail dlclose on a valid handle, so the close path is driven through the
    // same drain with a pending message left by a failed open.
    #[test]
    fn failure_takes_pending_message() {
        let _guard = lock_loader!();
        take_error();
        let raw = unsafe { libc::dlopen(c"/nonexistent/lib.so".as_ptr(), libc::RTLD_LAZY) };
        assert!(raw.is_null());
        let err = drain_failure("dlclose", "handle");
        assert!(err.message().contains("/nonexistent/lib.so"));
        assert!(take_error().is_empty());
    }
}

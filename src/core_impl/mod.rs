pub(crate) mod channel;
pub(crate) mod loader;
#[cfg(all(target_os = "linux", target_env = "gnu"))]
pub(crate) mod namespace;
pub(crate) mod symbol;
pub(crate) mod types;

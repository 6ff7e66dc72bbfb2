//! Operating system entropy layer
//!
//! Platform-specific access to the operating system's secure random
//! source. Each submodule exposes the same `sys_random` surface and the
//! right one is selected at compile time, keeping the rest of the crate
//! fully portable.
//!
//! Every random draw in this crate bottoms out here. The layer makes no
//! attempt to recover from a failing entropy source: there is nothing
//! sensible to fall back on, so failures panic.

#[cfg(target_os = "linux")]
pub(crate) mod linux;

#[cfg(target_os = "linux")]
pub(crate) use linux::*;

#[cfg(target_os = "macos")]
pub(crate) mod macos;

#[cfg(target_os = "macos")]
pub(crate) use macos::*;

#[cfg(target_os = "windows")]
pub(crate) mod windows;

#[cfg(target_os = "windows")]
pub(crate) use windows::*;

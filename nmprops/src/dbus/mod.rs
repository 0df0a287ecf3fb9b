//! D-Bus plumbing for NetworkManager objects.
//!
//! This module contains the generic property accessor, the signal
//! subscription handle and the `zbus` proxies used to locate objects.

mod accessor;
mod device;
mod main_nm;
mod subscription;

pub use accessor::PropertyAccessor;
pub use subscription::Subscription;

pub(crate) use device::NMDeviceProxy;
pub(crate) use main_nm::NMProxy;

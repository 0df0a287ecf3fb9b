//! Typed access to NetworkManager D-Bus objects.
//!
//! This crate provides two layers:
//!
//! - [`PropertyAccessor`], a thin wrapper around one remote object that reads
//!   properties as concrete Rust types, invokes methods and installs signal
//!   match rules.
//! - [`Dhcp4Config`], a binding for NetworkManager's
//!   `org.freedesktop.NetworkManager.DHCP4Config` objects, exposing the
//!   options handed out by the IPv4 DHCP server.
//!
//! # Example
//!
//! ```no_run
//! use nmprops::NetworkManager;
//!
//! # async fn example() -> nmprops::Result<()> {
//! let nm = NetworkManager::new().await?;
//!
//! for (iface, dhcp) in nm.list_dhcp4_configs().await? {
//!     let options = dhcp.options().await?;
//!     println!("{iface}: lease time {:?}", options.get("dhcp_lease_time"));
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! All operations return `Result<T, NmError>`. Reading a property whose
//! value has a different shape than requested yields
//! [`NmError::UnexpectedType`] rather than a panic. The one exception to
//! error propagation is [`Dhcp4Config::to_json`], which renders unreadable
//! options as an empty map.
//!
//! # Signals
//!
//! [`PropertyAccessor::subscribe`] and
//! [`PropertyAccessor::subscribe_namespace`] return a [`Subscription`]
//! stream. The match rule is removed from the bus when the subscription is
//! dropped.
//!
//! # Logging
//!
//! This crate uses the [`log`](https://docs.rs/log) facade for logging. To see
//! log output, add a logging implementation like `env_logger`.

// Internal implementation modules
mod dbus;
mod util;

// Public API modules
pub mod api;
pub mod types;

// Re-exported public API
pub use api::dhcp4_config::Dhcp4Config;
pub use api::models::{Dhcp4Options, Dhcp4Snapshot, NmError};
pub use api::network_manager::NetworkManager;
pub use dbus::{PropertyAccessor, Subscription};
pub use types::constants;

/// A specialized `Result` type for NetworkManager operations.
pub type Result<T> = std::result::Result<T, NmError>;

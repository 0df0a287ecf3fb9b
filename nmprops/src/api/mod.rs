//! Public API module.
//!
//! This module contains the high-level user-facing API for the `nmprops` crate.

pub mod dhcp4_config;
pub mod models;
pub mod network_manager;

//! Type definitions and constants.
//!
//! This module contains the NetworkManager names and paths used on the bus.

pub mod constants;

//! Helpers shared by the bus layer and the public API.

pub(crate) mod names;
pub(crate) mod net;
pub(crate) mod rules;
pub(crate) mod variant;

//! Address conversions for NetworkManager's packed integer formats.

use std::net::Ipv4Addr;

/// Unpacks an IPv4 address stored as a `u32` in network byte order.
///
/// NetworkManager writes the four octets straight into the integer, so on
/// the wire `192.0.2.1` arrives as `0x0102_00c0`.
pub(crate) fn ip4_from_u32(raw: u32) -> Ipv4Addr {
    Ipv4Addr::from(raw.to_le_bytes())
}

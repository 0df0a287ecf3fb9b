//! Splitting of fully qualified member names.

use zbus::names::{InterfaceName, MemberName};

use crate::Result;
use crate::api::models::NmError;

/// Splits `<interface>.<Member>` at the last dot and validates both halves.
///
/// `org.freedesktop.NetworkManager.DHCP4Config.Options` yields the
/// interface `org.freedesktop.NetworkManager.DHCP4Config` and the member
/// `Options`.
pub(crate) fn split_member(qualified: &str) -> Result<(InterfaceName<'_>, MemberName<'_>)> {
    let (interface, member) = qualified
        .rsplit_once('.')
        .filter(|(iface, member)| !iface.is_empty() && !member.is_empty())
        .ok_or_else(|| NmError::InvalidMemberName(qualified.to_string()))?;

    Ok((
        InterfaceName::try_from(interface)?,
        MemberName::try_from(member)?,
    ))
}

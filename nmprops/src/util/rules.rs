//! Construction of signal match rules.

use zbus::message::Type;
use zbus::{MatchRule, OwnedMatchRule};

use crate::Result;

/// `type='signal',interface=<interface>,path=<path>,member=<member>`
pub(crate) fn signal_rule(interface: &str, path: &str, member: &str) -> Result<OwnedMatchRule> {
    let rule = MatchRule::builder()
        .msg_type(Type::Signal)
        .interface(interface)?
        .path(path)?
        .member(member)?
        .build();
    Ok(rule.into())
}

/// `type='signal',path_namespace=<namespace>`
pub(crate) fn namespace_rule(namespace: &str) -> Result<OwnedMatchRule> {
    let rule = MatchRule::builder()
        .msg_type(Type::Signal)
        .path_namespace(namespace)?
        .build();
    Ok(rule.into())
}

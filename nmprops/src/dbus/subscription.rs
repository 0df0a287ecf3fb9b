//! Handle for a registered signal match rule.

use futures::stream::{Stream, StreamExt};
use log::debug;
use std::fmt;
use std::pin::Pin;
use std::task::{Context, Poll};
use zbus::{Connection, Message, MessageStream, OwnedMatchRule};

use crate::Result;

/// A live signal subscription.
///
/// The match rule stays installed on the bus for as long as this value is
/// alive. Dropping it (or calling [`cancel`](Self::cancel)) removes the rule.
///
/// `Subscription` is a [`Stream`] of the messages matching the rule:
///
/// ```ignore
/// use futures::StreamExt;
///
/// let mut sub = accessor.subscribe_namespace("/org/freedesktop/NetworkManager").await?;
/// while let Some(msg) = sub.next().await {
///     let msg = msg?;
///     println!("{:?}", msg.header().member());
/// }
/// ```
pub struct Subscription {
    rule: OwnedMatchRule,
    stream: MessageStream,
}

impl Subscription {
    /// Installs `rule` on the bus behind `conn`.
    ///
    /// # Errors
    ///
    /// Returns an error if the bus rejects the `AddMatch` request.
    pub(crate) async fn register(conn: &Connection, rule: OwnedMatchRule) -> Result<Self> {
        debug!("Adding match rule: {}", rule.to_string());
        let stream = MessageStream::for_match_rule(rule.clone(), conn, None).await?;
        Ok(Self { rule, stream })
    }

    /// The match rule as installed on the bus.
    pub fn rule(&self) -> &OwnedMatchRule {
        &self.rule
    }

    /// Removes the match rule from the bus.
    pub fn cancel(self) {
        debug!("Removing match rule: {}", self.rule.to_string());
        drop(self);
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("rule", &self.rule.to_string())
            .finish_non_exhaustive()
    }
}

impl Stream for Subscription {
    type Item = zbus::Result<Message>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.get_mut().stream.poll_next_unpin(cx)
    }
}

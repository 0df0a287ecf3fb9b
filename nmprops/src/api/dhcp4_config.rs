//! Binding for NetworkManager's `DHCP4Config` objects.

use log::{debug, warn};
use zbus::Connection;
use zvariant::OwnedObjectPath;

use crate::Result;
use crate::api::models::{Dhcp4Options, Dhcp4Snapshot};
use crate::dbus::PropertyAccessor;
use crate::types::constants::{property, service};
use crate::util::variant;

/// A DHCPv4 configuration object exported by NetworkManager.
///
/// NetworkManager exposes one such object per device holding a DHCPv4
/// lease, at paths like `/org/freedesktop/NetworkManager/DHCP4Config/3`.
/// The object is re-read on every call; nothing is cached locally.
///
/// # Example
///
/// ```no_run
/// use nmprops::Dhcp4Config;
/// use zvariant::OwnedObjectPath;
///
/// # async fn example() -> nmprops::Result<()> {
/// let conn = zbus::Connection::system().await?;
/// let path = OwnedObjectPath::try_from("/org/freedesktop/NetworkManager/DHCP4Config/3")?;
/// let dhcp = Dhcp4Config::new(&conn, path).await?;
///
/// for (name, value) in dhcp.options().await? {
///     println!("{name} = {value}");
/// }
/// println!("{}", dhcp.to_json().await?);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Dhcp4Config {
    accessor: PropertyAccessor,
}

impl Dhcp4Config {
    /// Binds to the DHCP4Config object at `path`.
    pub async fn new(conn: &Connection, path: OwnedObjectPath) -> Result<Self> {
        let accessor = PropertyAccessor::new(conn, service::NETWORK_MANAGER, path).await?;
        Ok(Self { accessor })
    }

    /// The object path this configuration is bound to.
    pub fn path(&self) -> &OwnedObjectPath {
        self.accessor.path()
    }

    /// Fetches the options returned by the IPv4 DHCP server.
    ///
    /// All entries come from a single property read. Each value is
    /// unwrapped from its variant into a plain JSON value.
    ///
    /// # Errors
    ///
    /// Returns an error if the property cannot be read. Callers that want
    /// the empty-map fallback can use `options().await.unwrap_or_default()`.
    pub async fn options(&self) -> Result<Dhcp4Options> {
        let raw = self
            .accessor
            .get_variant_map_property(property::DHCP4_CONFIG_OPTIONS)
            .await?;

        let options: Dhcp4Options = raw
            .iter()
            .map(|(name, value)| (name.clone(), variant::to_json(value)))
            .collect();

        debug!(
            "Read {} DHCPv4 options from {}",
            options.len(),
            self.path().as_str()
        );
        Ok(options)
    }

    /// Returns the current options, or an empty map if they cannot be read.
    pub async fn snapshot(&self) -> Dhcp4Snapshot {
        let options = self.options().await.unwrap_or_else(|e| {
            warn!(
                "Failed to read DHCPv4 options from {}: {e}",
                self.path().as_str()
            );
            Dhcp4Options::new()
        });
        Dhcp4Snapshot { options }
    }

    /// Serializes the current options as `{"Options":{...}}`.
    ///
    /// Read failures are not reported; they produce `{"Options":{}}`.
    pub async fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.snapshot().await)?)
    }
}

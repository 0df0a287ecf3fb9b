use log::{debug, warn};
use zbus::Connection;
use zbus::proxy::CacheProperties;
use zvariant::OwnedObjectPath;

use crate::Result;
use crate::api::dhcp4_config::Dhcp4Config;
use crate::api::models::NmError;
use crate::dbus::{NMDeviceProxy, NMProxy};
use crate::types::constants::path;

/// Entry point for reaching NetworkManager objects over D-Bus.
///
/// # Creating an Instance
///
/// ```no_run
/// use nmprops::NetworkManager;
///
/// # async fn example() -> nmprops::Result<()> {
/// let nm = NetworkManager::new().await?;
///
/// if let Some(dhcp) = nm.device_dhcp4_config("eth0").await? {
///     println!("{}", dhcp.to_json().await?);
/// }
/// # Ok(())
/// # }
/// ```
///
/// # Thread Safety
///
/// `NetworkManager` is `Clone` and can be shared across async tasks.
/// Each clone shares the same underlying D-Bus connection.
#[derive(Debug, Clone)]
pub struct NetworkManager {
    conn: Connection,
}

impl NetworkManager {
    /// Creates a new `NetworkManager` connected to the system D-Bus.
    pub async fn new() -> Result<Self> {
        let conn = Connection::system().await?;
        Ok(Self { conn })
    }

    /// Wraps an already established connection.
    pub fn with_connection(conn: Connection) -> Self {
        Self { conn }
    }

    /// Binds to the DHCP4Config object at a known path.
    pub async fn dhcp4_config(&self, path: OwnedObjectPath) -> Result<Dhcp4Config> {
        Dhcp4Config::new(&self.conn, path).await
    }

    /// Returns the DHCPv4 configuration of the device named `interface`.
    ///
    /// Returns `Ok(None)` if the device exists but holds no DHCPv4 lease.
    ///
    /// # Errors
    ///
    /// Returns [`NmError::DeviceNotFound`] if no device has that interface
    /// name.
    pub async fn device_dhcp4_config(&self, interface: &str) -> Result<Option<Dhcp4Config>> {
        for (name, config_path) in self.device_config_paths().await? {
            if name != interface {
                continue;
            }
            return match config_path {
                Some(p) => Ok(Some(self.dhcp4_config(p).await?)),
                None => Ok(None),
            };
        }
        Err(NmError::DeviceNotFound(interface.to_string()))
    }

    /// Lists `(interface, config)` for every device holding a DHCPv4 lease.
    pub async fn list_dhcp4_configs(&self) -> Result<Vec<(String, Dhcp4Config)>> {
        let mut configs = Vec::new();
        for (name, config_path) in self.device_config_paths().await? {
            if let Some(p) = config_path {
                configs.push((name, self.dhcp4_config(p).await?));
            }
        }
        Ok(configs)
    }

    /// Interface name and DHCP4Config path of every readable device.
    ///
    /// A device can vanish between `GetDevices` and the property reads; such
    /// devices are skipped.
    async fn device_config_paths(&self) -> Result<Vec<(String, Option<OwnedObjectPath>)>> {
        let nm = NMProxy::new(&self.conn).await?;
        let mut out = Vec::new();

        for dp in nm.get_devices().await? {
            match self.device_config_path(&dp).await {
                Ok(entry) => out.push(entry),
                Err(e) => warn!("Skipping device {dp}: {e}"),
            }
        }
        Ok(out)
    }

    async fn device_config_path(
        &self,
        dp: &OwnedObjectPath,
    ) -> Result<(String, Option<OwnedObjectPath>)> {
        let dev = NMDeviceProxy::builder(&self.conn)
            .path(dp.clone())?
            .cache_properties(CacheProperties::No)
            .build()
            .await?;

        let name = dev.interface().await?;
        let config = dev.dhcp4_config().await?;
        debug!("Device {name} at {dp} has DHCP4Config {config}");

        let config = (config.as_str() != path::NONE).then_some(config);
        Ok((name, config))
    }
}

//! Mock NetworkManager objects served over a peer-to-peer connection.
//!
//! The mocks carry the interface names and property signatures of the real
//! service, so the crate's proxies and accessors talk to them unchanged.

#![allow(dead_code)]

use std::collections::HashMap;
use std::os::unix::net::UnixStream;
use zbus::connection::Builder;
use zbus::{Connection, Guid, interface};
use zvariant::{OwnedObjectPath, Value};

pub const NM_PATH: &str = "/org/freedesktop/NetworkManager";
pub const ETH_PATH: &str = "/org/freedesktop/NetworkManager/Devices/2";
pub const WLAN_PATH: &str = "/org/freedesktop/NetworkManager/Devices/3";
/// Listed by `GetDevices` but not served, like a device that just went away.
pub const VANISHED_PATH: &str = "/org/freedesktop/NetworkManager/Devices/9";
pub const DHCP4_PATH: &str = "/org/freedesktop/NetworkManager/DHCP4Config/1";
pub const EMPTY_DHCP4_PATH: &str = "/org/freedesktop/NetworkManager/DHCP4Config/2";
pub const BROKEN_DHCP4_PATH: &str = "/org/freedesktop/NetworkManager/DHCP4Config/7";
pub const MISSING_DHCP4_PATH: &str = "/org/freedesktop/NetworkManager/DHCP4Config/99";
pub const IP4_PATH: &str = "/org/freedesktop/NetworkManager/IP4Config/1";
pub const IP6_PATH: &str = "/org/freedesktop/NetworkManager/IP6Config/1";
pub const AP_PATH: &str = "/org/freedesktop/NetworkManager/AccessPoint/5";

pub fn object_path(path: &str) -> OwnedObjectPath {
    OwnedObjectPath::try_from(path).expect("valid object path")
}

pub struct MockNetworkManager {
    pub devices: Vec<OwnedObjectPath>,
}

#[interface(name = "org.freedesktop.NetworkManager")]
impl MockNetworkManager {
    fn get_devices(&self) -> Vec<OwnedObjectPath> {
        self.devices.clone()
    }

    #[zbus(out_args("level", "domains"))]
    fn get_logging(&self) -> (String, String) {
        ("INFO".into(), "PLATFORM,DHCP4".into())
    }

    fn reload(&self, _flags: u32) {}
}

pub struct MockDevice {
    pub interface: String,
    pub dhcp4_config: OwnedObjectPath,
}

#[interface(name = "org.freedesktop.NetworkManager.Device")]
impl MockDevice {
    #[zbus(property)]
    fn interface(&self) -> String {
        self.interface.clone()
    }

    #[zbus(property, name = "Dhcp4Config")]
    fn dhcp4_config(&self) -> OwnedObjectPath {
        self.dhcp4_config.clone()
    }

    #[zbus(property)]
    fn managed(&self) -> bool {
        true
    }

    #[zbus(property)]
    fn state(&self) -> u32 {
        100
    }

    #[zbus(property)]
    fn available_connections(&self) -> Vec<OwnedObjectPath> {
        vec![
            object_path("/org/freedesktop/NetworkManager/Settings/1"),
            object_path("/org/freedesktop/NetworkManager/Settings/4"),
        ]
    }
}

pub struct MockDhcp4Config {
    pub options: Vec<(&'static str, &'static str)>,
}

#[interface(name = "org.freedesktop.NetworkManager.DHCP4Config")]
impl MockDhcp4Config {
    #[zbus(property)]
    fn options(&self) -> HashMap<String, Value<'static>> {
        self.options
            .iter()
            .map(|(k, v)| (k.to_string(), Value::from(*v)))
            .collect()
    }
}

/// A DHCP4Config object whose `Options` property has the wrong signature.
pub struct BrokenDhcp4Config;

#[interface(name = "org.freedesktop.NetworkManager.DHCP4Config")]
impl BrokenDhcp4Config {
    #[zbus(property)]
    fn options(&self) -> String {
        "dhcp_lease_time=3600".into()
    }
}

pub struct MockIp4Config;

#[interface(name = "org.freedesktop.NetworkManager.IP4Config")]
impl MockIp4Config {
    #[zbus(property)]
    fn addresses(&self) -> Vec<Vec<u32>> {
        vec![vec![0x0a00_000a, 24, 0x0100_000a]]
    }

    #[zbus(property)]
    fn nameservers(&self) -> Vec<u32> {
        // 192.0.2.53 and 198.51.100.53
        vec![0x3502_00c0, 0x3564_33c6]
    }

    #[zbus(property)]
    fn searches(&self) -> Vec<String> {
        vec!["example.com".into(), "lan".into()]
    }

    #[zbus(property)]
    fn address_data(&self) -> Vec<HashMap<String, Value<'static>>> {
        let mut entry = HashMap::new();
        entry.insert("address".to_string(), Value::from("10.0.0.10"));
        entry.insert("prefix".to_string(), Value::from(24u32));
        vec![entry]
    }
}

pub struct MockIp6Config;

#[interface(name = "org.freedesktop.NetworkManager.IP6Config")]
impl MockIp6Config {
    #[zbus(property)]
    fn nameservers(&self) -> Vec<Vec<u8>> {
        let mut server = vec![0u8; 16];
        server[0] = 0x20;
        server[1] = 0x01;
        server[15] = 0x01;
        vec![server]
    }
}

pub struct MockAccessPoint;

#[interface(name = "org.freedesktop.NetworkManager.AccessPoint")]
impl MockAccessPoint {
    #[zbus(property)]
    fn ssid(&self) -> Vec<u8> {
        b"HomeNet".to_vec()
    }

    #[zbus(property)]
    fn strength(&self) -> u8 {
        72
    }
}

/// Connects a client to a server that serves whatever `serve` registers.
///
/// The server connection is returned too; dropping it closes the peer.
pub async fn peer_pair<F>(serve: F) -> (Connection, Connection)
where
    F: FnOnce(Builder<'static>) -> zbus::Result<Builder<'static>>,
{
    let guid = Guid::generate();
    let (server_end, client_end) = UnixStream::pair().expect("socket pair");

    let server_builder = Builder::unix_stream(server_end)
        .server(guid)
        .expect("server guid")
        .p2p();
    let server = serve(server_builder).expect("serve mocks").build();
    let client = Builder::unix_stream(client_end).p2p().build();

    futures::try_join!(server, client).expect("peer handshake")
}

/// A mock NetworkManager with a leased `eth0`, an unconfigured `wlan0` and a
/// device that fails every read.
pub async fn network_manager_peer() -> (Connection, Connection) {
    peer_pair(|builder| {
        builder
            .serve_at(
                NM_PATH,
                MockNetworkManager {
                    devices: vec![
                        object_path(ETH_PATH),
                        object_path(VANISHED_PATH),
                        object_path(WLAN_PATH),
                    ],
                },
            )?
            .serve_at(
                ETH_PATH,
                MockDevice {
                    interface: "eth0".into(),
                    dhcp4_config: object_path(DHCP4_PATH),
                },
            )?
            .serve_at(
                WLAN_PATH,
                MockDevice {
                    interface: "wlan0".into(),
                    dhcp4_config: object_path("/"),
                },
            )?
            .serve_at(
                DHCP4_PATH,
                MockDhcp4Config {
                    options: vec![("dhcp_lease_time", "3600"), ("routers", "192.0.2.1")],
                },
            )?
            .serve_at(EMPTY_DHCP4_PATH, MockDhcp4Config { options: vec![] })?
            .serve_at(BROKEN_DHCP4_PATH, BrokenDhcp4Config)?
            .serve_at(IP4_PATH, MockIp4Config)?
            .serve_at(IP6_PATH, MockIp6Config)?
            .serve_at(AP_PATH, MockAccessPoint)
    })
    .await
}

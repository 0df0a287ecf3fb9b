//! Typed property access for a single remote object.
//!
//! A [`PropertyAccessor`] is bound to one `(service, path)` pair and reads
//! properties by their fully qualified name. Every read goes to the bus;
//! nothing is cached.

use log::{debug, warn};
use serde::Serialize;
use std::collections::HashMap;
use std::net::Ipv4Addr;
use zbus::fdo::PropertiesProxy;
use zbus::names::BusName;
use zbus::proxy::CacheProperties;
use zbus::{Connection, Message};
use zvariant::{DynamicDeserialize, DynamicType, OwnedObjectPath, OwnedValue};

use crate::Result;
use crate::api::models::NmError;
use crate::dbus::subscription::Subscription;
use crate::util::names::split_member;
use crate::util::net::ip4_from_u32;
use crate::util::rules::{namespace_rule, signal_rule};

/// Reads properties and invokes methods on one remote D-Bus object.
///
/// Property and method names are passed fully qualified, e.g.
/// `org.freedesktop.NetworkManager.Device.Interface`. A property whose value
/// does not have the requested shape yields [`NmError::UnexpectedType`];
/// nothing in this type panics.
///
/// # Example
///
/// ```no_run
/// use nmprops::PropertyAccessor;
/// use zvariant::OwnedObjectPath;
///
/// # async fn example() -> nmprops::Result<()> {
/// let conn = zbus::Connection::system().await?;
/// let path = OwnedObjectPath::try_from("/org/freedesktop/NetworkManager/Devices/2")?;
/// let device = PropertyAccessor::new(&conn, "org.freedesktop.NetworkManager", path).await?;
///
/// let name: String = device
///     .get_property("org.freedesktop.NetworkManager.Device.Interface")
///     .await?;
/// println!("{name}");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct PropertyAccessor {
    conn: Connection,
    service: BusName<'static>,
    path: OwnedObjectPath,
    properties: PropertiesProxy<'static>,
}

impl PropertyAccessor {
    /// Binds an accessor to `path` on `service` over an existing connection.
    pub async fn new(conn: &Connection, service: &str, path: OwnedObjectPath) -> Result<Self> {
        let service = BusName::try_from(service)?.into_owned();
        let properties = PropertiesProxy::builder(conn)
            .destination(service.clone())?
            .path(path.clone())?
            .cache_properties(CacheProperties::No)
            .build()
            .await?;

        Ok(Self {
            conn: conn.clone(),
            service,
            path,
            properties,
        })
    }

    /// The object path this accessor is bound to.
    pub fn path(&self) -> &OwnedObjectPath {
        &self.path
    }

    /// The bus name of the service owning the object.
    pub fn service(&self) -> &BusName<'static> {
        &self.service
    }

    /// Reads a property without checking its shape.
    pub async fn raw_property(&self, property: &str) -> Result<OwnedValue> {
        let (interface, member) = split_member(property)?;
        debug!("Reading property {property} on {}", self.path.as_str());
        Ok(self.properties.get(interface, member.as_str()).await?)
    }

    /// Reads a property and converts it to `T`.
    ///
    /// # Errors
    ///
    /// Returns [`NmError::UnexpectedType`] if the remote value does not have
    /// the shape of `T`, or a D-Bus error if the read itself fails.
    pub async fn get_property<T>(&self, property: &str) -> Result<T>
    where
        T: TryFrom<OwnedValue>,
    {
        let value = self.raw_property(property).await?;
        T::try_from(value).map_err(|_| {
            warn!(
                "Unexpected variant type for '{property}' on {}",
                self.path.as_str()
            );
            NmError::UnexpectedType {
                property: property.to_string(),
            }
        })
    }

    /// Reads an `o` property.
    pub async fn get_object_property(&self, property: &str) -> Result<OwnedObjectPath> {
        self.get_property(property).await
    }

    /// Reads an `ao` property.
    pub async fn get_object_list_property(&self, property: &str) -> Result<Vec<OwnedObjectPath>> {
        self.get_property(property).await
    }

    /// Reads a `b` property.
    pub async fn get_bool_property(&self, property: &str) -> Result<bool> {
        self.get_property(property).await
    }

    /// Reads an `s` property.
    pub async fn get_string_property(&self, property: &str) -> Result<String> {
        self.get_property(property).await
    }

    /// Reads an `as` property.
    pub async fn get_string_list_property(&self, property: &str) -> Result<Vec<String>> {
        self.get_property(property).await
    }

    /// Reads an `aay` property.
    pub async fn get_byte_arrays_property(&self, property: &str) -> Result<Vec<Vec<u8>>> {
        self.get_property(property).await
    }

    /// Reads a `y` property.
    pub async fn get_u8_property(&self, property: &str) -> Result<u8> {
        self.get_property(property).await
    }

    /// Reads a `u` property.
    pub async fn get_u32_property(&self, property: &str) -> Result<u32> {
        self.get_property(property).await
    }

    /// Reads an `au` property.
    pub async fn get_u32_list_property(&self, property: &str) -> Result<Vec<u32>> {
        self.get_property(property).await
    }

    /// Reads an `aau` property.
    pub async fn get_u32_arrays_property(&self, property: &str) -> Result<Vec<Vec<u32>>> {
        self.get_property(property).await
    }

    /// Reads an `au` property of IPv4 addresses in network byte order.
    ///
    /// NetworkManager packs each address into a `u32` whose in-memory
    /// (little-endian) bytes are the address octets.
    pub async fn get_ip4_list_property(&self, property: &str) -> Result<Vec<Ipv4Addr>> {
        let raw = self.get_u32_list_property(property).await?;
        Ok(raw.into_iter().map(ip4_from_u32).collect())
    }

    /// Reads an `a{sv}` property.
    pub async fn get_variant_map_property(
        &self,
        property: &str,
    ) -> Result<HashMap<String, OwnedValue>> {
        self.get_property(property).await
    }

    /// Reads an `aa{sv}` property.
    pub async fn get_variant_maps_property(
        &self,
        property: &str,
    ) -> Result<Vec<HashMap<String, OwnedValue>>> {
        self.get_property(property).await
    }

    /// Reads an `ay` property.
    pub async fn get_bytes_property(&self, property: &str) -> Result<Vec<u8>> {
        self.get_property(property).await
    }

    /// Invokes `method` and discards any reply body.
    ///
    /// `args` is the argument tuple, `&()` for none.
    pub async fn call<B>(&self, method: &str, args: &B) -> Result<()>
    where
        B: Serialize + DynamicType,
    {
        self.invoke(method, args).await?;
        Ok(())
    }

    /// Invokes `method` and deserializes its single return value.
    pub async fn call_with_return<B, R>(&self, method: &str, args: &B) -> Result<R>
    where
        B: Serialize + DynamicType,
        R: for<'d> DynamicDeserialize<'d>,
    {
        let reply = self.invoke(method, args).await?;
        Ok(reply.body().deserialize::<R>()?)
    }

    /// Invokes `method` and deserializes its two return values.
    pub async fn call_with_return2<B, R1, R2>(&self, method: &str, args: &B) -> Result<(R1, R2)>
    where
        B: Serialize + DynamicType,
        (R1, R2): for<'d> DynamicDeserialize<'d>,
    {
        self.call_with_return(method, args).await
    }

    async fn invoke<B>(&self, method: &str, args: &B) -> Result<Message>
    where
        B: Serialize + DynamicType,
    {
        let (interface, member) = split_member(method)?;
        debug!("Calling {method} on {}", self.path.as_str());
        Ok(self
            .conn
            .call_method(
                Some(self.service.clone()),
                self.path.clone(),
                Some(interface),
                member,
                args,
            )
            .await?)
    }

    /// Subscribes to `member` signals of `interface` emitted by this object.
    ///
    /// # Errors
    ///
    /// Returns an error if the match rule is malformed or the bus refuses it.
    pub async fn subscribe(&self, interface: &str, member: &str) -> Result<Subscription> {
        let rule = signal_rule(interface, self.path.as_str(), member)?;
        Subscription::register(&self.conn, rule).await
    }

    /// Subscribes to every signal emitted below `namespace`.
    pub async fn subscribe_namespace(&self, namespace: &str) -> Result<Subscription> {
        let rule = namespace_rule(namespace)?;
        Subscription::register(&self.conn, rule).await
    }
}

//! The LXC configuration model.
//!
//! Fields are plain public values. There is no optional wrapper for text,
//! numbers, or collections: a field equal to the zero value of its type is
//! unset and is left out of rendered output. This makes a legitimate `0`
//! (for example `pts = 0`) indistinguishable from "not configured".

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use ipnetwork::{Ipv4Network, Ipv6Network};
use lxcconf_common::constants::{
    DEFAULT_APPARMOR_PROFILE, DEFAULT_ARCH, DEFAULT_ID_MAP_CONTAINER_START,
    DEFAULT_ID_MAP_HOST_START, DEFAULT_ID_MAP_RANGE, DEFAULT_NETWORK_LINK, DEFAULT_NETWORK_TYPE,
};
use lxcconf_common::error::Result;
use lxcconf_common::types::{Arch, IdMap, NetworkType};
use serde::{Deserialize, Serialize};

use crate::registry::Field;

/// An LXC container configuration.
///
/// [`Config::default`] is the all-unset value. [`Config::new`] pre-populates
/// the commonly needed fields; it is a starting point, not a complete
/// configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// User/group ID mappings between the container and the host.
    pub id_map: Vec<IdMap>,
    /// Network virtualization type.
    pub network_type: Option<NetworkType>,
    /// Host interface used for real network traffic.
    pub network_link: String,
    /// Action applied to the network, e.g. `up`.
    pub network_flags: String,
    /// Interface name inside the container.
    pub network_name: String,
    /// Hardware address of the virtual interface.
    pub network_mac_address: String,
    /// IPv4 addresses assigned to the virtual interface.
    pub address_v4: Vec<Ipv4Network>,
    /// IPv6 addresses assigned to the virtual interface.
    pub address_v6: Vec<Ipv6Network>,
    /// Macvlan mode (`private`, `vepa` or `bridge`).
    pub macvlan_mode: String,
    /// `AppArmor` profile the container runs under.
    pub apparmor_profile: String,
    /// Root filesystem location.
    pub rootfs: PathBuf,
    /// Container hostname.
    pub utsname: String,
    /// Container architecture.
    pub arch: Option<Arch>,
    /// Configuration files to include.
    pub include: Vec<PathBuf>,
    /// Maximum number of pseudo ttys for a private devpts instance.
    pub pts: i64,
    /// Number of ttys made available to the container.
    pub tty: i64,
    /// fstab-format files holding mount information.
    pub mount: Vec<PathBuf>,
    /// Mount entry.
    pub mount_entry: i64,
    /// Capabilities dropped before starting the container.
    pub cap_drop: String,
    /// Cgroup settings keyed by controller file, e.g. `memory.limit_in_bytes`.
    ///
    /// Entries render in ascending key order.
    pub cgroup: BTreeMap<String, String>,
}

/// Borrowed view of a single [`Config`] field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    /// Free text.
    Text(&'a str),
    /// A filesystem path.
    Path(&'a Path),
    /// An enumerated token, `None` when unset.
    Token(Option<&'static str>),
    /// A count; signed values pass through verbatim.
    Integer(i64),
    /// ID mapping entries.
    IdMaps(&'a [IdMap]),
    /// Filesystem paths.
    Paths(&'a [PathBuf]),
    /// IPv4 networks.
    Ipv4(&'a [Ipv4Network]),
    /// IPv6 networks.
    Ipv6(&'a [Ipv6Network]),
    /// Key/value settings.
    Mapping(&'a BTreeMap<String, String>),
}

impl FieldValue<'_> {
    /// Returns `true` if the value is the zero value of its type.
    #[must_use]
    pub fn is_unset(&self) -> bool {
        match self {
            Self::Text(s) => s.is_empty(),
            Self::Path(p) => p.as_os_str().is_empty(),
            Self::Token(t) => t.is_none(),
            Self::Integer(n) => *n == 0,
            Self::IdMaps(v) => v.is_empty(),
            Self::Paths(v) => v.is_empty(),
            Self::Ipv4(v) => v.is_empty(),
            Self::Ipv6(v) => v.is_empty(),
            Self::Mapping(m) => m.is_empty(),
        }
    }
}

impl Config {
    /// Creates a configuration with the usual defaults filled in.
    ///
    /// Sets the `u`/`g` ID mappings `0 100000 100000`, a `veth` network
    /// on `lxcbr0`, the `unconfined` `AppArmor` profile and the `x86`
    /// architecture. Everything else is unset.
    #[must_use]
    pub fn new() -> Self {
        Self {
            id_map: vec![
                IdMap::user(
                    DEFAULT_ID_MAP_CONTAINER_START,
                    DEFAULT_ID_MAP_HOST_START,
                    DEFAULT_ID_MAP_RANGE,
                ),
                IdMap::group(
                    DEFAULT_ID_MAP_CONTAINER_START,
                    DEFAULT_ID_MAP_HOST_START,
                    DEFAULT_ID_MAP_RANGE,
                ),
            ],
            network_type: Some(DEFAULT_NETWORK_TYPE),
            network_link: DEFAULT_NETWORK_LINK.to_owned(),
            apparmor_profile: DEFAULT_APPARMOR_PROFILE.to_owned(),
            arch: Some(DEFAULT_ARCH),
            ..Self::default()
        }
    }

    /// Borrows the value of the given field.
    #[must_use]
    pub fn value(&self, field: Field) -> FieldValue<'_> {
        match field {
            Field::IdMap => FieldValue::IdMaps(&self.id_map),
            Field::NetworkType => FieldValue::Token(self.network_type.map(NetworkType::as_str)),
            Field::NetworkLink => FieldValue::Text(&self.network_link),
            Field::NetworkFlags => FieldValue::Text(&self.network_flags),
            Field::NetworkName => FieldValue::Text(&self.network_name),
            Field::NetworkMacAddress => FieldValue::Text(&self.network_mac_address),
            Field::AddressV4 => FieldValue::Ipv4(&self.address_v4),
            Field::AddressV6 => FieldValue::Ipv6(&self.address_v6),
            Field::MacVlanMode => FieldValue::Text(&self.macvlan_mode),
            Field::AppArmorProfile => FieldValue::Text(&self.apparmor_profile),
            Field::Rootfs => FieldValue::Path(&self.rootfs),
            Field::Utsname => FieldValue::Text(&self.utsname),
            Field::Arch => FieldValue::Token(self.arch.map(Arch::as_str)),
            Field::Include => FieldValue::Paths(&self.include),
            Field::Pts => FieldValue::Integer(self.pts),
            Field::Tty => FieldValue::Integer(self.tty),
            Field::Mount => FieldValue::Paths(&self.mount),
            Field::MountEntry => FieldValue::Integer(self.mount_entry),
            Field::CapDrop => FieldValue::Text(&self.cap_drop),
            Field::Cgroup => FieldValue::Mapping(&self.cgroup),
        }
    }

    /// Exports the model as pretty-printed JSON.
    ///
    /// This is the serde form of the struct, not the LXC file format.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

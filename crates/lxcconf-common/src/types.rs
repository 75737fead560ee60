//! Domain value types stored in an LXC configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{LxcConfError, Result};

/// Kind of network virtualization used for the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkType {
    /// A peer device pair, one end in the container and one on the bridge
    /// named by `lxc.network.link`.
    Veth,
    /// A VLAN interface linked with `lxc.network.link`.
    Vlan,
    /// A macvlan interface linked with `lxc.network.link`.
    Macvlan,
    /// An existing host interface moved into the container.
    Phys,
}

impl NetworkType {
    /// Returns the configuration-file token for this network type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Veth => "veth",
            Self::Vlan => "vlan",
            Self::Macvlan => "macvlan",
            Self::Phys => "phys",
        }
    }
}

impl fmt::Display for NetworkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NetworkType {
    type Err = LxcConfError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "veth" => Ok(Self::Veth),
            "vlan" => Ok(Self::Vlan),
            "macvlan" => Ok(Self::Macvlan),
            "phys" => Ok(Self::Phys),
            _ => Err(invalid("network type", s, "one of veth, vlan, macvlan, phys")),
        }
    }
}

/// Platform architecture of the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Arch {
    /// 32-bit x86.
    #[serde(rename = "x86")]
    X86,
    /// 32-bit x86, i686 naming.
    #[serde(rename = "i686")]
    I686,
    /// 64-bit x86.
    #[serde(rename = "x86_64")]
    X86_64,
    /// 64-bit x86, Debian naming.
    #[serde(rename = "amd64")]
    Amd64,
}

impl Arch {
    /// Returns the configuration-file token for this architecture.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::X86 => "x86",
            Self::I686 => "i686",
            Self::X86_64 => "x86_64",
            Self::Amd64 => "amd64",
        }
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Arch {
    type Err = LxcConfError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "x86" => Ok(Self::X86),
            "i686" => Ok(Self::I686),
            "x86_64" => Ok(Self::X86_64),
            "amd64" => Ok(Self::Amd64),
            _ => Err(invalid("architecture", s, "one of x86, i686, x86_64, amd64")),
        }
    }
}

/// Mode of a macvlan interface.
///
/// The configuration stores this as free text; convert with
/// `String::from(mode)` when assigning it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MacVlanMode {
    /// Devices on the same link cannot talk to each other.
    Private,
    /// Traffic is forwarded through the adjacent bridge.
    Vepa,
    /// Devices on the same link talk directly.
    Bridge,
}

impl MacVlanMode {
    /// Returns the configuration-file token for this mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Private => "private",
            Self::Vepa => "vepa",
            Self::Bridge => "bridge",
        }
    }
}

impl fmt::Display for MacVlanMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MacVlanMode {
    type Err = LxcConfError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "private" => Ok(Self::Private),
            "vepa" => Ok(Self::Vepa),
            "bridge" => Ok(Self::Bridge),
            _ => Err(invalid("macvlan mode", s, "one of private, vepa, bridge")),
        }
    }
}

impl From<MacVlanMode> for String {
    fn from(mode: MacVlanMode) -> Self {
        mode.as_str().to_owned()
    }
}

/// Whether an ID mapping covers user or group IDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IdMapKind {
    /// User IDs (`u`).
    User,
    /// Group IDs (`g`).
    Group,
}

impl IdMapKind {
    /// Returns the single-character token for this kind.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::User => 'u',
            Self::Group => 'g',
        }
    }
}

/// One `lxc.id_map` entry: `<u|g> <containerID> <hostID> <range>`.
///
/// The raw line is kept as-is. [`IdMap::new`] performs no checking, so a
/// malformed entry renders as malformed output; use [`str::parse`] when the
/// grammar should be enforced.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdMap(String);

impl IdMap {
    /// Wraps a raw mapping line without checking it.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Builds a mapping line from its four components.
    #[must_use]
    pub fn from_parts(kind: IdMapKind, container_id: u32, host_id: u32, range: u32) -> Self {
        Self(format!(
            "{} {container_id} {host_id} {range}",
            kind.as_char()
        ))
    }

    /// Builds a user-ID mapping.
    #[must_use]
    pub fn user(container_id: u32, host_id: u32, range: u32) -> Self {
        Self::from_parts(IdMapKind::User, container_id, host_id, range)
    }

    /// Builds a group-ID mapping.
    #[must_use]
    pub fn group(container_id: u32, host_id: u32, range: u32) -> Self {
        Self::from_parts(IdMapKind::Group, container_id, host_id, range)
    }

    /// Returns the raw mapping line.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the raw line is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for IdMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for IdMap {
    type Err = LxcConfError;

    /// Parses a mapping line, enforcing the four-token grammar.
    fn from_str(s: &str) -> Result<Self> {
        const EXPECTED: &str = "\"<u|g> <containerID> <hostID> <range>\"";

        let tokens: Vec<&str> = s.split_whitespace().collect();
        let [kind, container, host, range] = tokens.as_slice() else {
            return Err(invalid("id map", s, EXPECTED));
        };
        let kind = match *kind {
            "u" => IdMapKind::User,
            "g" => IdMapKind::Group,
            _ => return Err(invalid("id map", s, EXPECTED)),
        };
        let number = |t: &str| t.parse::<u32>().map_err(|_| invalid("id map", s, EXPECTED));
        Ok(Self::from_parts(kind, number(*container)?, number(*host)?, number(*range)?))
    }
}

fn invalid(field: &'static str, value: &str, expected: &'static str) -> LxcConfError {
    LxcConfError::InvalidValue {
        field,
        value: value.to_owned(),
        expected,
    }
}

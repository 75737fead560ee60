//! Default values applied by the default-populating constructor.

use crate::types::{Arch, NetworkType};

/// First container-side ID of the default user/group mapping.
pub const DEFAULT_ID_MAP_CONTAINER_START: u32 = 0;

/// First host-side ID of the default user/group mapping.
pub const DEFAULT_ID_MAP_HOST_START: u32 = 100_000;

/// Number of consecutive IDs covered by the default mapping.
pub const DEFAULT_ID_MAP_RANGE: u32 = 100_000;

/// Bridge the default `veth` pair is attached to.
pub const DEFAULT_NETWORK_LINK: &str = "lxcbr0";

/// Network type of the default configuration.
pub const DEFAULT_NETWORK_TYPE: NetworkType = NetworkType::Veth;

/// Architecture of the default configuration.
pub const DEFAULT_ARCH: Arch = Arch::X86;

/// `AppArmor` profile containers run under by default.
pub const DEFAULT_APPARMOR_PROFILE: &str = "unconfined";

/// Prefix shared by every configuration key.
pub const KEY_PREFIX: &str = "lxc.";

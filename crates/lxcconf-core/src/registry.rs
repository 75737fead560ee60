//! Static field registry.
//!
//! Pairs every configuration field with its output key and category.
//! The order of [`FIELDS`] is the order lines appear in rendered output.
//! The renderer reads `key` and `category`; `element_format` is descriptive
//! metadata for callers and is never used to format or check values.

/// Identifies one field of [`crate::Config`].
///
/// Variants are declared in output order; `field as usize` indexes
/// [`FIELDS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// `lxc.id_map`
    IdMap,
    /// `lxc.network.type`
    NetworkType,
    /// `lxc.network.link`
    NetworkLink,
    /// `lxc.network.flags`
    NetworkFlags,
    /// `lxc.network.name`
    NetworkName,
    /// `lxc.network.hwaddr`
    NetworkMacAddress,
    /// `lxc.network.ipv4`
    AddressV4,
    /// `lxc.network.ipv6`
    AddressV6,
    /// `lxc.network.macvlan.mode`
    MacVlanMode,
    /// `lxc.aa_profile`
    AppArmorProfile,
    /// `lxc.rootfs`
    Rootfs,
    /// `lxc.utsname`
    Utsname,
    /// `lxc.arch`
    Arch,
    /// `lxc.include`
    Include,
    /// `lxc.pts`
    Pts,
    /// `lxc.tty`
    Tty,
    /// `lxc.mount`
    Mount,
    /// `lxc.mount.entry`
    MountEntry,
    /// `lxc.cap.drop`
    CapDrop,
    /// `lxc.cgroup`
    Cgroup,
}

/// How a field's value maps onto output lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// A single value, one `key: value` line.
    Scalar,
    /// ID mapping entries, one line per element in sequence order.
    IdMapSequence,
    /// Key/value entries, one `key.subkey: value` line each.
    Mapping,
    /// Plain path or address lists. Suppressed unless
    /// [`crate::SequencePolicy::Expand`] is requested.
    PlainSequence,
}

/// Declaration-time metadata for one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// The field described.
    pub field: Field,
    /// Dotted configuration key emitted for the field.
    pub key: &'static str,
    /// Line layout of the field.
    pub category: Category,
    /// Grammar of each element, for structured sequences.
    ///
    /// Descriptive only: elements are rendered verbatim.
    pub element_format: Option<&'static str>,
}

const fn spec(field: Field, key: &'static str, category: Category) -> FieldSpec {
    FieldSpec {
        field,
        key,
        category,
        element_format: None,
    }
}

/// Every recognized field, in output order.
pub static FIELDS: [FieldSpec; 20] = [
    FieldSpec {
        field: Field::IdMap,
        key: "lxc.id_map",
        category: Category::IdMapSequence,
        element_format: Some("<u|g> <containerID> <hostID> <range>"),
    },
    spec(Field::NetworkType, "lxc.network.type", Category::Scalar),
    spec(Field::NetworkLink, "lxc.network.link", Category::Scalar),
    spec(Field::NetworkFlags, "lxc.network.flags", Category::Scalar),
    spec(Field::NetworkName, "lxc.network.name", Category::Scalar),
    spec(Field::NetworkMacAddress, "lxc.network.hwaddr", Category::Scalar),
    spec(Field::AddressV4, "lxc.network.ipv4", Category::PlainSequence),
    spec(Field::AddressV6, "lxc.network.ipv6", Category::PlainSequence),
    spec(Field::MacVlanMode, "lxc.network.macvlan.mode", Category::Scalar),
    spec(Field::AppArmorProfile, "lxc.aa_profile", Category::Scalar),
    spec(Field::Rootfs, "lxc.rootfs", Category::Scalar),
    spec(Field::Utsname, "lxc.utsname", Category::Scalar),
    spec(Field::Arch, "lxc.arch", Category::Scalar),
    spec(Field::Include, "lxc.include", Category::PlainSequence),
    spec(Field::Pts, "lxc.pts", Category::Scalar),
    spec(Field::Tty, "lxc.tty", Category::Scalar),
    spec(Field::Mount, "lxc.mount", Category::PlainSequence),
    spec(Field::MountEntry, "lxc.mount.entry", Category::Scalar),
    spec(Field::CapDrop, "lxc.cap.drop", Category::Scalar),
    spec(Field::Cgroup, "lxc.cgroup", Category::Mapping),
];

impl Field {
    /// Returns the registry entry for this field.
    #[must_use]
    pub fn spec(self) -> &'static FieldSpec {
        &FIELDS[self as usize]
    }

    /// Returns the dotted output key for this field.
    #[must_use]
    pub fn key(self) -> &'static str {
        self.spec().key
    }
}

/// Finds the registry entry with the given output key.
#[must_use]
pub fn lookup(key: &str) -> Option<&'static FieldSpec> {
    FIELDS.iter().find(|spec| spec.key == key)
}

//! # lxcconf-core
//!
//! Typed model of an LXC container configuration and its renderer.
//!
//! This crate provides:
//! - **Config**: one public field per recognized `lxc.*` key, with a
//!   default-populating constructor.
//! - **Registry**: a static table pairing each field with its output key
//!   and category, in output order.
//! - **Render**: a pure formatter producing `key: value` lines.
//!
//! A field whose value is the zero value of its type (empty string, empty
//! collection, `0`, `None`) is unset and never rendered.
//!
//! ```
//! use lxcconf_core::Config;
//!
//! let mut config = Config::new();
//! config.utsname = "web01".into();
//! assert!(config.render().contains("\nlxc.utsname: web01"));
//! ```

pub mod config;
pub mod registry;
pub mod render;

pub use config::{Config, FieldValue};
pub use ipnetwork::{Ipv4Network, Ipv6Network};
pub use lxcconf_common::error::{LxcConfError, Result};
pub use lxcconf_common::types::{Arch, IdMap, IdMapKind, MacVlanMode, NetworkType};
pub use registry::{Category, FIELDS, Field, FieldSpec};
pub use render::{RenderOptions, Rendered, SequencePolicy};

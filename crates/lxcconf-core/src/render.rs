//! Rendering a [`Config`] into LXC `key: value` lines.
//!
//! Every emitted line is prefixed with `\n`, so non-empty output starts with
//! a blank line and has no trailing newline. Values are written verbatim;
//! nothing is quoted, escaped, or validated.

use std::fmt;

use crate::config::{Config, FieldValue};
use crate::registry::{Category, FIELDS};

/// Treatment of [`Category::PlainSequence`] fields (`lxc.include`,
/// `lxc.mount`, `lxc.network.ipv4`, `lxc.network.ipv6`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SequencePolicy {
    /// Leave them out of the output entirely.
    #[default]
    Suppress,
    /// Emit one `key: element` line per element.
    Expand,
}

/// Options controlling [`Config::render_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Treatment of plain path and address lists.
    pub sequences: SequencePolicy,
}

impl RenderOptions {
    /// Options that emit every populated field, plain sequences included.
    #[must_use]
    pub const fn expanded() -> Self {
        Self {
            sequences: SequencePolicy::Expand,
        }
    }
}

/// Display adapter returned by [`Config::display_with`].
#[derive(Debug, Clone, Copy)]
pub struct Rendered<'a> {
    config: &'a Config,
    options: RenderOptions,
}

impl Config {
    /// Renders the configuration with default options.
    #[must_use]
    pub fn render(&self) -> String {
        self.render_with(RenderOptions::default())
    }

    /// Renders the configuration with the given options.
    #[must_use]
    pub fn render_with(&self, options: RenderOptions) -> String {
        let out = self.display_with(options).to_string();
        tracing::debug!(
            lines = out.matches('\n').count(),
            sequences = ?options.sequences,
            "rendered lxc configuration"
        );
        out
    }

    /// Returns a value that formats the configuration with the given options.
    #[must_use]
    pub const fn display_with(&self, options: RenderOptions) -> Rendered<'_> {
        Rendered {
            config: self,
            options,
        }
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.display_with(RenderOptions::default()), f)
    }
}

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for spec in &FIELDS {
            let value = self.config.value(spec.field);
            if value.is_unset() {
                continue;
            }
            if spec.category == Category::PlainSequence
                && self.options.sequences == SequencePolicy::Suppress
            {
                tracing::trace!(key = spec.key, "plain sequence suppressed");
                continue;
            }
            write_value(f, spec.key, value)?;
        }
        Ok(())
    }
}

fn write_value(f: &mut fmt::Formatter<'_>, key: &str, value: FieldValue<'_>) -> fmt::Result {
    match value {
        FieldValue::Text(s) => line(f, key, s),
        FieldValue::Path(p) => line(f, key, p.display()),
        FieldValue::Token(Some(t)) => line(f, key, t),
        FieldValue::Token(None) => Ok(()),
        FieldValue::Integer(n) => line(f, key, n),
        FieldValue::IdMaps(maps) => maps.iter().try_for_each(|m| line(f, key, m)),
        FieldValue::Paths(paths) => paths.iter().try_for_each(|p| line(f, key, p.display())),
        FieldValue::Ipv4(nets) => nets.iter().try_for_each(|n| line(f, key, n)),
        FieldValue::Ipv6(nets) => nets.iter().try_for_each(|n| line(f, key, n)),
        FieldValue::Mapping(entries) => entries
            .iter()
            .try_for_each(|(sub, v)| write!(f, "\n{key}.{sub}: {v}")),
    }
}

fn line(f: &mut fmt::Formatter<'_>, key: &str, value: impl fmt::Display) -> fmt::Result {
    write!(f, "\n{key}: {value}")
}

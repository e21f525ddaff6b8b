use super::types::StyleSpec;
use crate::errors::ConfigError;
use std::collections::BTreeMap;

/// Name of the style block backing units with no per-speaker style
pub const DEFAULT_STYLE_NAME: &str = "Default";

/// A resolved (style name, spec) pair for one display unit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedStyle<'a> {
    pub name: &'a str,
    pub spec: &'a StyleSpec,
}

/// Immutable per-document style lookup: one optional default plus
/// per-speaker overrides, resolved once per document build
#[derive(Debug, Clone, Default)]
pub struct StyleCatalog {
    default: Option<(String, StyleSpec)>,
    speakers: BTreeMap<String, (String, StyleSpec)>,
}

impl StyleCatalog {
    pub fn new(default: Option<StyleSpec>, speakers: BTreeMap<String, StyleSpec>) -> Self {
        Self {
            default: default.map(|spec| (DEFAULT_STYLE_NAME.to_string(), spec)),
            speakers: speakers
                .into_iter()
                .map(|(id, spec)| {
                    let name = speaker_style_name(&id);
                    (id, (name, spec))
                })
                .collect(),
        }
    }

    pub fn default_style(&self) -> Option<ResolvedStyle<'_>> {
        self.default.as_ref().map(|(name, spec)| ResolvedStyle {
            name: name.as_str(),
            spec,
        })
    }

    /// Resolve the style for a unit's speaker, falling back to the default.
    ///
    /// A unit that resolves to neither a per-speaker style nor a default is a
    /// configuration error, reported instead of silently substituting.
    pub fn resolve(&self, speaker: Option<&str>) -> Result<ResolvedStyle<'_>, ConfigError> {
        if let Some(id) = speaker {
            if let Some((name, spec)) = self.speakers.get(id) {
                return Ok(ResolvedStyle {
                    name: name.as_str(),
                    spec,
                });
            }
            return self.default_style().ok_or_else(|| {
                ConfigError::new(format!(
                    "no style configured for speaker {:?} and no default style to fall back to",
                    id
                ))
            });
        }

        self.default_style()
            .ok_or_else(|| ConfigError::new("no default style configured"))
    }
}

/// Style block name for a speaker id.
pub fn speaker_style_name(speaker_id: &str) -> String {
    format!("Speaker_{}", speaker_id)
}

use super::types::{StyleBlock, SubtitleDocument};
use crate::dialogue::build_unit_events;
use crate::errors::ConfigError;
use crate::grouping::DisplayUnit;
use crate::style::{style_line, StyleCatalog};
use crate::timing::word_intervals;
use log::{debug, info};
use std::collections::BTreeMap;

/// Assemble the final document for a set of display units.
///
/// Emits the default style block (when configured) plus every distinct
/// per-speaker style actually referenced by a unit, then all dialogue events
/// sorted by start time. A unit whose speaker resolves to no style and no
/// default is a configuration error.
pub fn assemble_document(
    units: &[DisplayUnit],
    catalog: &StyleCatalog,
    highlighting_enabled: bool,
) -> Result<SubtitleDocument, ConfigError> {
    let mut speaker_blocks: BTreeMap<String, String> = BTreeMap::new();
    let mut events = Vec::new();

    for unit in units {
        let style = catalog.resolve(unit.speaker())?;

        if style.name != crate::style::DEFAULT_STYLE_NAME {
            speaker_blocks
                .entry(style.name.to_string())
                .or_insert_with(|| style_line(style.name, style.spec));
        }

        let intervals = word_intervals(unit);
        let unit_events = build_unit_events(unit, &intervals, style, highlighting_enabled);
        debug!(
            "Unit [{} - {}] ({} words) -> {} events with style {}",
            unit.start(),
            unit.end(),
            unit.len(),
            unit_events.len(),
            style.name
        );
        events.extend(unit_events);
    }

    // Stable sort keeps each unit's per-word order for equal start times
    events.sort_by(|a, b| a.start.total_cmp(&b.start));

    let mut styles = Vec::with_capacity(1 + speaker_blocks.len());
    if let Some(default) = catalog.default_style() {
        styles.push(StyleBlock {
            name: default.name.to_string(),
            line: style_line(default.name, default.spec),
        });
    }
    styles.extend(
        speaker_blocks
            .into_iter()
            .map(|(name, line)| StyleBlock { name, line }),
    );

    info!(
        "Assembled document: {} style blocks, {} dialogue events from {} units",
        styles.len(),
        events.len(),
        units.len()
    );

    Ok(SubtitleDocument { styles, events })
}

//! Figure-level legend built from one designated panel.

use log::debug;

use crate::composer::{Layout, LegendEntry};

/// Collect the legend of a layout from its legend-source panel only.
///
/// Entries keep insertion order and repeated labels appear once. A marker
/// repeated on every panel therefore yields a single entry. Without a
/// designated source the legend is empty.
pub fn consolidate(layout: &Layout) -> Vec<LegendEntry> {
    let Some(source) = layout.legend_source() else {
        debug!("no legend source designated; legend is empty");
        return Vec::new();
    };
    let Ok(panel) = layout.panel(source) else {
        return Vec::new();
    };
    let mut entries: Vec<LegendEntry> = Vec::new();
    for entry in panel.legend_entries() {
        if entries.iter().any(|e| e.label == entry.label) {
            continue;
        }
        entries.push(entry.clone());
    }
    debug!("legend from panel {source}: {} entries", entries.len());
    entries
}

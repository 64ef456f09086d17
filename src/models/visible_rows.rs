use std::collections::HashMap;

/// Offers rendered per row before any expansion.
pub const DEFAULT_VISIBLE: usize = 3;

/// Offers added per "Show more" click.
pub const EXPAND_STEP: usize = 3;

/// Per-row visible-offer counts, carried in the page's `rows` query
/// parameter as `index:count` pairs (`rows=0:6,2:9`). Rows at the
/// default count are not stored.
///
/// Invariant: a stored count never exceeds the row's offer total
/// (expansion clamps) and is always above the default.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VisibleRows {
    counts: HashMap<usize, usize>,
}

impl VisibleRows {
    /// Decode the `rows` parameter. Malformed entries are dropped.
    pub fn parse(raw: Option<&str>) -> Self {
        let mut counts = HashMap::new();
        for entry in raw.unwrap_or_default().split(',') {
            let mut parts = entry.splitn(2, ':');
            let row = parts.next().and_then(|s| s.trim().parse::<usize>().ok());
            let count = parts.next().and_then(|s| s.trim().parse::<usize>().ok());
            if let (Some(row), Some(count)) = (row, count) {
                if count > DEFAULT_VISIBLE {
                    counts.insert(row, count);
                }
            }
        }
        Self { counts }
    }

    /// How many offers the row asks to show. Never below the default.
    pub fn count_for(&self, row: usize) -> usize {
        self.counts.get(&row).copied().unwrap_or(DEFAULT_VISIBLE)
    }

    /// How many offers actually render for a row holding `total`.
    /// Clamps, so a hand-edited query string cannot over-slice.
    pub fn visible_for(&self, row: usize, total: usize) -> usize {
        self.count_for(row).min(total)
    }

    /// A copy with `row` grown by one step, clamped to `total`.
    pub fn expanded(&self, row: usize, total: usize) -> Self {
        let mut next = self.clone();
        let grown = (next.count_for(row) + EXPAND_STEP).min(total);
        if grown > DEFAULT_VISIBLE {
            next.counts.insert(row, grown);
        } else {
            next.counts.remove(&row);
        }
        next
    }

    /// A copy with `row` back at the default count, regardless of how
    /// far it was expanded.
    pub fn collapsed(&self, row: usize) -> Self {
        let mut next = self.clone();
        next.counts.remove(&row);
        next
    }

    /// True when no row is expanded; such a state needs no `rows`
    /// parameter at all.
    pub fn is_default(&self) -> bool {
        self.counts.is_empty()
    }

    /// Encode for the `rows` query parameter. Entries are ordered by
    /// row index so links are deterministic.
    pub fn encode(&self) -> String {
        let mut entries: Vec<(usize, usize)> = self.counts.iter().map(|(r, c)| (*r, *c)).collect();
        entries.sort_unstable();
        entries
            .iter()
            .map(|(row, count)| format!("{row}:{count}"))
            .collect::<Vec<_>>()
            .join(",")
    }
}

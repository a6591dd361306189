//! Per-category counts and shares.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::round_half_up;
use crate::record::{EventType, Record};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryShare {
    pub event_type: EventType,
    pub label: String,
    pub count: u32,
    /// Share of all sets, rounded on its own. Shares of a breakdown do not
    /// necessarily add up to exactly 100.
    pub percent: i64,
}

fn count_by_type<'a, I>(records: I) -> BTreeMap<EventType, u32>
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut counts = BTreeMap::new();
    for record in records {
        *counts.entry(record.event_type()).or_insert(0) += 1;
    }
    counts
}

/// Count and share of each category present, in enumeration order.
pub fn event_breakdown<'a, I>(records: I) -> Vec<CategoryShare>
where
    I: IntoIterator<Item = &'a Record>,
{
    let counts = count_by_type(records);
    let total: u32 = counts.values().sum();
    if total == 0 {
        return Vec::new();
    }

    counts
        .into_iter()
        .map(|(event_type, count)| CategoryShare {
            event_type,
            label: event_type.label().to_string(),
            count,
            percent: round_half_up(count as f64 / total as f64 * 100.0),
        })
        .collect()
}

/// The category with strictly the most sets. Ties go to the category that
/// comes first in enumeration order.
pub fn most_practiced<'a, I>(records: I) -> Option<EventType>
where
    I: IntoIterator<Item = &'a Record>,
{
    let counts = count_by_type(records);
    let mut best: Option<(EventType, u32)> = None;
    for event_type in EventType::ALL {
        let count = counts.get(&event_type).copied().unwrap_or(0);
        if count == 0 {
            continue;
        }
        if best.map_or(true, |(_, best_count)| count > best_count) {
            best = Some((event_type, count));
        }
    }
    best.map(|(event_type, _)| event_type)
}

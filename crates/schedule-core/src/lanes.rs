//! Lane assignment for one day-group.
//!
//! Two tiers share the lane index space:
//!
//! * general rows take lanes `0..offset`, one each, in arrival order, with no
//!   overlap check;
//! * regular entries are packed greedily into lanes `offset..` so that no two
//!   entries on the same lane overlap, using the minimum number of lanes.
//!
//! Regulars are visited in `(start asc, duration desc)` order and placed on the
//! first lane whose last end is at or before their start. Processing intervals
//! by start time this way opens a new lane only when every open lane is busy,
//! so the regular lane count equals the largest number of regulars running at
//! the same instant.

use crate::entry::Entry;
use log::debug;

/// The part of an entry the packer looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaneInterval {
    pub start_minutes: i32,
    pub end_minutes: i32,
    pub is_general: bool,
}

impl LaneInterval {
    pub fn duration_minutes(&self) -> i32 {
        self.end_minutes - self.start_minutes
    }
}

impl From<&Entry> for LaneInterval {
    fn from(entry: &Entry) -> Self {
        Self {
            start_minutes: entry.start_minutes,
            end_minutes: entry.end_minutes,
            is_general: entry.is_general,
        }
    }
}

/// Lane indices parallel to the packed interval list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LaneAssignment {
    lanes: Vec<usize>,
    general_lanes: usize,
    regular_lanes: usize,
}

impl LaneAssignment {
    /// `lanes()[i]` is the lane of the i-th input interval.
    pub fn lanes(&self) -> &[usize] {
        &self.lanes
    }

    pub fn into_lanes(self) -> Vec<usize> {
        self.lanes
    }

    pub fn general_lane_count(&self) -> usize {
        self.general_lanes
    }

    pub fn regular_lane_count(&self) -> usize {
        self.regular_lanes
    }

    /// Distinct lanes in use across both tiers; 0 for an empty day.
    pub fn lane_count(&self) -> usize {
        self.general_lanes + self.regular_lanes
    }
}

/// Packs one day-group. Pure: the result depends only on the order and
/// values of `intervals`.
pub fn assign_lanes(intervals: &[LaneInterval]) -> LaneAssignment {
    let (generals, mut regulars): (Vec<usize>, Vec<usize>) =
        (0..intervals.len()).partition(|&idx| intervals[idx].is_general);

    let mut lanes = vec![0; intervals.len()];
    for (lane, &idx) in generals.iter().enumerate() {
        lanes[idx] = lane;
    }
    let offset = generals.len();

    // Stable sort keeps arrival order for full ties.
    regulars.sort_by(|&a, &b| {
        let (a, b) = (&intervals[a], &intervals[b]);
        a.start_minutes
            .cmp(&b.start_minutes)
            .then_with(|| b.duration_minutes().cmp(&a.duration_minutes()))
    });

    let mut lane_ends: Vec<i32> = Vec::new();
    for idx in regulars {
        let interval = &intervals[idx];
        match lane_ends
            .iter()
            .position(|&end| end <= interval.start_minutes)
        {
            Some(slot) => {
                lane_ends[slot] = interval.end_minutes;
                lanes[idx] = slot + offset;
            }
            None => {
                lanes[idx] = lane_ends.len() + offset;
                lane_ends.push(interval.end_minutes);
            }
        }
    }

    debug!(
        "packed {} intervals into {} general and {} regular lanes",
        intervals.len(),
        offset,
        lane_ends.len()
    );

    LaneAssignment {
        lanes,
        general_lanes: offset,
        regular_lanes: lane_ends.len(),
    }
}

/// Recomputes lanes for `entries` from scratch and returns new entries in the
/// same order. The input collection is left untouched.
pub fn repack(entries: &[Entry]) -> Vec<Entry> {
    let intervals: Vec<LaneInterval> = entries.iter().map(LaneInterval::from).collect();
    let assignment = assign_lanes(&intervals);
    entries
        .iter()
        .zip(assignment.lanes())
        .map(|(entry, &lane)| entry.with_lane(lane))
        .collect()
}

/// `1 + max lane`, or 0 when there are no entries.
pub fn lane_count(entries: &[Entry]) -> usize {
    entries
        .iter()
        .map(|entry| entry.lane + 1)
        .max()
        .unwrap_or(0)
}

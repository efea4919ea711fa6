use alloc::vec::Vec;

use crate::{Bounds, Orientation, Point, Slots};

/// Host layout at a point in time, all boxes in one shared coordinate space.
///
/// - `frame`: the container the list is translated within (offset `0` puts the list's leading
///   edge at the frame's leading edge)
/// - `list`: the translated list ("rotator") itself
/// - `items`: one box per rendered slot, in render order
/// - `selection`: the fixed selection window marker
/// - `prev_zone` / `next_zone`: click regions flanking the selection window
///
/// A default snapshot has no items and reads as "not laid out yet".
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutSnapshot {
    pub frame: Bounds,
    pub list: Bounds,
    pub items: Vec<Bounds>,
    pub selection: Bounds,
    pub prev_zone: Bounds,
    pub next_zone: Bounds,
}

impl LayoutSnapshot {
    pub fn is_laid_out(&self) -> bool {
        !self.items.is_empty()
    }
}

/// Pivot set plus scroll bounds derived from a [`LayoutSnapshot`].
///
/// Offsets follow the list translation: the offset that centers pivot `p` under the selection
/// window is `origin - p`, so the first pivot yields the numerically largest offset
/// (`scroll_min`) and the last pivot the smallest (`scroll_max`).
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Geometry {
    pivots: Vec<f32>,
    origin: f32,
    scroll_min: f32,
    scroll_max: f32,
}

impl Geometry {
    pub fn measure(snapshot: &LayoutSnapshot, orientation: Orientation) -> Self {
        let list_start = snapshot.list.start(orientation);
        let mut pivots: Vec<f32> = snapshot
            .items
            .iter()
            .map(|item| item.center(orientation) - list_start)
            .collect();
        pivots.sort_by(f32::total_cmp);

        let origin = snapshot.selection.center(orientation) - snapshot.frame.start(orientation);

        let (scroll_min, scroll_max) = match (pivots.first(), pivots.last()) {
            (Some(&min), Some(&max)) => (origin - min, origin - max),
            _ => (0.0, 0.0),
        };

        Self {
            pivots,
            origin,
            scroll_min,
            scroll_max,
        }
    }

    pub fn pivots(&self) -> &[f32] {
        &self.pivots
    }

    pub fn is_empty(&self) -> bool {
        self.pivots.is_empty()
    }

    /// The selection marker center, relative to the frame's leading edge.
    pub fn origin(&self) -> f32 {
        self.origin
    }

    /// Offset aligning the first pivot.
    pub fn scroll_min(&self) -> f32 {
        self.scroll_min
    }

    /// Offset aligning the last pivot.
    pub fn scroll_max(&self) -> f32 {
        self.scroll_max
    }

    pub fn clamp_offset(&self, offset: f32) -> f32 {
        offset.max(self.scroll_max).min(self.scroll_min)
    }

    /// Nearest logical index for a list offset.
    ///
    /// Ties resolve to the lowest pivot: a later pivot only wins when strictly closer. With no
    /// pivots the result is the first slot's index.
    pub fn index_for_offset(&self, slots: Slots, offset: f32) -> isize {
        let mut best: Option<f32> = None;
        let mut pivot_index = 0usize;
        for (i, &pivot) in self.pivots.iter().enumerate() {
            let diff = abs(pivot + offset - self.origin);
            if best.is_none_or(|b| b > diff) {
                pivot_index = i;
                best = Some(diff);
            }
        }
        slots.index_for_slot(pivot_index)
    }

    /// Offset that centers a logical index; out-of-range indexes resolve to the nearest bound.
    pub fn offset_for_index(&self, slots: Slots, index: isize) -> f32 {
        let slot = slots.slot_for_index(index);
        if self.pivots.is_empty() || slot < 0 {
            return self.scroll_min;
        }
        match self.pivots.get(slot as usize) {
            Some(&pivot) => self.origin - pivot,
            None => self.scroll_max,
        }
    }
}

/// Which neighbour a click zone selects.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Step {
    Previous,
    Next,
}

impl Step {
    pub fn delta(self) -> isize {
        match self {
            Self::Previous => -1,
            Self::Next => 1,
        }
    }
}

/// The two click regions flanking the selection window.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HitZones {
    pub prev: Bounds,
    pub next: Bounds,
}

impl HitZones {
    pub fn from_snapshot(snapshot: &LayoutSnapshot) -> Self {
        Self {
            prev: snapshot.prev_zone,
            next: snapshot.next_zone,
        }
    }

    /// Each zone is tested against its own box; the previous zone wins on overlap.
    pub fn hit(&self, p: Point) -> Option<Step> {
        if self.prev.contains(p) {
            Some(Step::Previous)
        } else if self.next.contains(p) {
            Some(Step::Next)
        } else {
            None
        }
    }
}

pub(crate) fn abs(v: f32) -> f32 {
    if v < 0.0 { -v } else { v }
}

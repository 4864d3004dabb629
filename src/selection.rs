//! Point selection
//!
//! A selection maps point index to a selected flag. A missing key reads as
//! unselected. Keys are kept ordered so group operations always walk the
//! selected points in ascending index order.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::geometry::{BoundingBox, Vec2};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Selection {
    flags: BTreeMap<usize, bool>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selection with exactly the given indices set
    pub fn from_indices(indices: impl IntoIterator<Item = usize>) -> Self {
        Self {
            flags: indices.into_iter().map(|i| (i, true)).collect(),
        }
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.flags.get(&index).copied().unwrap_or(false)
    }

    /// Selected indices in ascending order
    pub fn selected_indices(&self) -> Vec<usize> {
        self.flags
            .iter()
            .filter(|(_, &selected)| selected)
            .map(|(&idx, _)| idx)
            .collect()
    }

    pub fn count(&self) -> usize {
        self.flags.values().filter(|&&selected| selected).count()
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Raw index -> flag entries, including explicit `false` entries
    pub fn flags(&self) -> &BTreeMap<usize, bool> {
        &self.flags
    }

    /// True when both selections select the same indices, regardless of
    /// explicit `false` entries
    pub fn same_members(&self, other: &Selection) -> bool {
        self.flags
            .iter()
            .filter(|(_, &s)| s)
            .map(|(i, _)| i)
            .eq(other.flags.iter().filter(|(_, &s)| s).map(|(i, _)| i))
    }

    /// Click toggle. With `additive` (ctrl held) only `index` flips and the
    /// rest is kept; otherwise the result holds `index` alone, flipped.
    pub fn toggle_one(&self, index: usize, additive: bool) -> Selection {
        let flipped = !self.is_selected(index);
        if additive {
            let mut flags = self.flags.clone();
            flags.insert(index, flipped);
            Selection { flags }
        } else {
            Selection {
                flags: BTreeMap::from([(index, flipped)]),
            }
        }
    }

    /// Rectangle selection over `points`.
    ///
    /// A zero-area box means the pointer never moved, which clears the
    /// selection. Otherwise every point gets `contains` (or `current ||
    /// contains` when `additive`).
    pub fn box_select(&self, points: &[Vec2], bounds: &BoundingBox, additive: bool) -> Selection {
        if bounds.area() == 0.0 {
            return Selection::new();
        }

        let flags = points
            .iter()
            .enumerate()
            .map(|(idx, &p)| {
                let inside = bounds.contains(p);
                let selected = if additive {
                    self.is_selected(idx) || inside
                } else {
                    inside
                };
                (idx, selected)
            })
            .collect();
        Selection { flags }
    }
}

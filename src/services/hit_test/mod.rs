//! Pointer resolution against ordered region lists.
//!
//! First match in array order wins; callers order higher-priority regions
//! first or use the exclusion variant.

use std::collections::HashSet;

use crate::models::geometry::{Region, Vertex};

/// Index of the first region containing `point`, if any.
pub fn first_hit(regions: &[Region], point: Vertex) -> Option<usize> {
    regions.iter().position(|region| region.contains(point))
}

/// Like [`first_hit`], but indices in `excluded` are skipped entirely.
///
/// Used to suppress empty-cell clicks on cells already covered by an event
/// block.
pub fn first_hit_excluding(
    regions: &[Region],
    point: Vertex,
    excluded: &HashSet<usize>,
) -> Option<usize> {
    regions
        .iter()
        .enumerate()
        .find(|(i, region)| !excluded.contains(i) && region.contains(point))
        .map(|(i, _)| i)
}

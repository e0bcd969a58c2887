//! Order-preserving moves over one axis's sorted line values.
//!
//! Both functions operate on the values of an axis in grid order and keep
//! that slice ascending without ever re-sorting it: neighbours that would
//! be crossed are pushed out of the way instead.
//!
//! ```text
//! before:   A=10        B=20   C=21
//! drag A to 25:
//! after:                       A=25 B=26 C=27
//! ```

use crate::geometry::snap_value;

/// Spacing used when no grid cell is configured.
pub const DEFAULT_SPACING: f64 = 1.0;

/// Move `values[index]` to `target`, pushing neighbours that would collide.
///
/// Predecessors are walked nearest first against a frontier starting at
/// `target - spacing`; any value at or above the frontier is set to it and
/// the frontier steps down. The walk stops at the first value already below
/// the frontier. Successors are handled symmetrically with a frontier
/// starting at `target + spacing`, pushing any value below it.
///
/// Returns `true` if any value changed.
///
/// # Panics
///
/// Panics if `index` is out of bounds.
pub fn drag(values: &mut [f64], index: usize, target: f64, spacing: f64) -> bool {
    let mut changed = set(&mut values[index], target);

    let mut frontier = target - spacing;
    for v in values[..index].iter_mut().rev() {
        if *v < frontier {
            break;
        }
        changed |= set(v, frontier);
        frontier -= spacing;
    }

    let mut frontier = target + spacing;
    for v in &mut values[index + 1..] {
        if *v >= frontier {
            break;
        }
        changed |= set(v, frontier);
        frontier += spacing;
    }

    changed
}

/// Quantize every value to the nearest multiple of `cell`, keeping them
/// strictly ascending.
///
/// A value that would land on or below its predecessor is pushed to one
/// cell past it. The first value is floored at zero.
///
/// Returns `true` if any value changed.
pub fn quantize(values: &mut [f64], cell: f64) -> bool {
    let mut changed = false;
    let mut min = 0.0_f64;
    for v in values.iter_mut() {
        let snapped = snap_value(*v, cell).max(min);
        changed |= set(v, snapped);
        min = snapped + cell;
    }
    changed
}

/// Whether the values are in non-decreasing order.
#[must_use]
pub fn is_ascending(values: &[f64]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}

#[allow(clippy::float_cmp)] // exact comparison is the point: detect a real write
fn set(slot: &mut f64, value: f64) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}

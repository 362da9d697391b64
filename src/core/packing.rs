//! Greedy weight-bounded packing.
//!
//! Items arrive ranked heaviest first. Each pass scans the whole ranked list
//! and drops every unplaced item that still fits into the current container;
//! when the pass ends the container is closed and a new one is opened. This
//! approximates first-fit-decreasing without backtracking and is O(n^2) in
//! the worst case, which is fine for the tens of books a shipment holds.

use tracing::{debug, info};

use crate::core::constants::packing::DEFAULT_CAPACITY;
use crate::core::errors::PackingError;
use crate::core::ranking::rank;
use crate::core::traits::Packable;
use crate::core::types::{Container, PackingSummary};

/// Ranks and packs items into containers of a fixed capacity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GreedyPacker {
    capacity: f64,
}

impl Default for GreedyPacker {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl GreedyPacker {
    pub fn new(capacity: f64) -> Self {
        Self { capacity }
    }

    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Rank `items` by weight and pack them.
    ///
    /// Errors report the offending item's index in `items`, before ranking.
    pub fn pack<T: Packable + Clone>(&self, items: &[T]) -> Result<Vec<Container<T>>, PackingError> {
        validate(items, self.capacity)?;
        let ranked = rank(items);
        let containers = pack_validated(ranked, self.capacity);

        let summary = PackingSummary::from_containers(&containers);
        info!(
            containers = summary.container_count,
            items = summary.item_count,
            total_weight = summary.total_weight,
            capacity = self.capacity,
            "Packing complete"
        );
        Ok(containers)
    }
}

/// Pack an already ranked sequence into containers of `capacity`.
///
/// All items are checked before any packing starts; on failure no
/// containers are produced. Errors report indexes into `ranked`.
pub fn pack<T: Packable>(ranked: Vec<T>, capacity: f64) -> Result<Vec<Container<T>>, PackingError> {
    validate(&ranked, capacity)?;
    Ok(pack_validated(ranked, capacity))
}

/// Reject input the greedy loop could never finish.
///
/// An item heavier than the capacity (or NaN) never fits, so the loop would
/// rescan forever waiting for it.
pub fn validate<T: Packable>(items: &[T], capacity: f64) -> Result<(), PackingError> {
    if !capacity.is_finite() || capacity < 0.0 {
        return Err(PackingError::InvalidCapacity { capacity });
    }

    for (index, item) in items.iter().enumerate() {
        let weight = item.weight();
        if !weight.is_finite() {
            return Err(PackingError::NonFiniteWeight { index, weight });
        }
        if weight < 0.0 {
            return Err(PackingError::NegativeWeight { index, weight });
        }
        if weight > capacity {
            return Err(PackingError::ExceedsCapacity {
                index,
                weight,
                capacity,
            });
        }
        if item.is_placed() {
            return Err(PackingError::AlreadyPlaced { index });
        }
    }

    Ok(())
}

// Every item fits an empty container after validation, so each pass places
// at least one item and the loop runs at most `ranked.len()` times.
fn pack_validated<T: Packable>(ranked: Vec<T>, capacity: f64) -> Vec<Container<T>> {
    let mut slots: Vec<Option<T>> = ranked.into_iter().map(Some).collect();
    let mut remaining = slots.len();
    let mut containers = Vec::new();

    while remaining > 0 {
        let mut current = Container::new(containers.len() + 1);

        for slot in slots.iter_mut() {
            let fits = slot
                .as_ref()
                .is_some_and(|item| current.fits(item, capacity));
            if !fits {
                continue;
            }
            if let Some(mut item) = slot.take() {
                item.mark_placed();
                current.append(item);
                remaining -= 1;
            }
        }

        debug_assert!(!current.is_empty(), "a packing pass placed nothing");
        debug!(
            container = current.id,
            items = current.len(),
            total_weight = current.total_weight,
            remaining,
            "Closed container"
        );
        containers.push(current);
    }

    containers
}

use std::collections::HashSet;

use serde::Serialize;

use crate::domain::availability::{all_available, first_available};
use crate::domain::capacity_index::capacity_index;
use crate::domain::grid::{OccupancyGrid, TimeslotId};
use crate::domain::party_size::PartySize;
use crate::domain::utils::id::TableId;
use crate::error::Result;

/// A way to seat a party: one table, or two schema-adjacent tables joined together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum FitResult {
    Single {
        table: TableId,
        timeslot: TimeslotId,
    },
    Pair {
        first: TableId,
        second: TableId,
        timeslot: TimeslotId,
        #[serde(rename = "combinedCapacity")]
        combined_capacity: u32,
    },
}

impl FitResult {
    /// The grid cells (table, timeslot) this result would occupy.
    pub fn cells(&self) -> Vec<(&TableId, TimeslotId)> {
        match self {
            FitResult::Single { table, timeslot } => vec![(table, *timeslot)],
            FitResult::Pair { first, second, timeslot, .. } => vec![(first, *timeslot), (second, *timeslot)],
        }
    }
}

/// Finds the first table, in schema order, that can seat the party in some timeslot.
///
/// The table is paired with its earliest open timeslot. Tables that are large enough
/// but fully occupied are skipped. Returns `Ok(None)` if no single table fits; callers
/// may fall back to [`find_adjacent_pairs`].
pub fn find_one(grid: &OccupancyGrid, party_size: PartySize) -> Result<Option<FitResult>> {
    for (table_id, capacity) in capacity_index(grid).iter() {
        if capacity < party_size.get() {
            continue;
        }

        if let Some(timeslot) = first_available(grid, table_id)? {
            log::debug!("Party of {} fits at {} in timeslot {}.", party_size, table_id, timeslot);
            return Ok(Some(FitResult::Single { table: table_id.clone(), timeslot }));
        }
    }

    log::debug!("No single table can seat a party of {}.", party_size);
    Ok(None)
}

/// Lists every (table, timeslot) that can seat the party, followed by the adjacent pairs.
///
/// Singles come first, schema order outer and timeslot order inner. The pairs are
/// searched with the singles as already claimed cells, so a table never appears both
/// alone and joined in the same timeslot.
pub fn find_all(grid: &OccupancyGrid, party_size: PartySize) -> Result<Vec<FitResult>> {
    let mut results = Vec::new();

    for (table_id, capacity) in capacity_index(grid).iter() {
        if capacity < party_size.get() {
            continue;
        }

        for timeslot in all_available(grid, table_id)? {
            results.push(FitResult::Single { table: table_id.clone(), timeslot });
        }
    }

    let pairs = find_adjacent_pairs(grid, party_size, &results)?;

    log::debug!("Party of {}: {} single table option(s), {} joined option(s).", party_size, results.len(), pairs.len());

    results.extend(pairs);
    Ok(results)
}

/// Finds pairs of schema-adjacent tables (i, i+1) that together seat the party.
///
/// A pair is emitted for a timeslot when both tables are open, neither cell is
/// covered by `claimed`, and neither table was already joined to its other
/// neighbour in that timeslot. Earlier pairs win. Longer chains are not considered.
pub fn find_adjacent_pairs(grid: &OccupancyGrid, party_size: PartySize, claimed: &[FitResult]) -> Result<Vec<FitResult>> {
    let mut used: HashSet<(usize, TimeslotId)> = HashSet::new();
    for result in claimed {
        for (table_id, timeslot) in result.cells() {
            used.insert((grid.get_table(table_id)?.get_position(), timeslot));
        }
    }

    let mut pairs = Vec::new();

    for window in grid.get_tables().windows(2) {
        let (first, second) = (&window[0], &window[1]);
        let combined_capacity = first.get_capacity() + second.get_capacity();

        if combined_capacity < party_size.get() {
            continue;
        }

        for timeslot in all_available(grid, first.get_id())? {
            let first_cell = (first.get_position(), timeslot);
            let second_cell = (second.get_position(), timeslot);

            if !grid.is_open(timeslot, second.get_position()) || used.contains(&first_cell) || used.contains(&second_cell) {
                continue;
            }

            used.insert(first_cell);
            used.insert(second_cell);

            log::trace!("Joining {} and {} in timeslot {} seats {}.", first.get_id(), second.get_id(), timeslot, combined_capacity);
            pairs.push(FitResult::Pair { first: first.get_id().clone(), second: second.get_id().clone(), timeslot, combined_capacity });
        }
    }

    Ok(pairs)
}

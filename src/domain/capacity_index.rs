use std::collections::HashMap;

use crate::domain::grid::OccupancyGrid;
use crate::domain::utils::id::TableId;

/// Table identifier -> seating capacity, iterated in schema order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapacityIndex {
    entries: Vec<(TableId, u32)>,

    /// Lookup TableId -> position in `entries`.
    position_index: HashMap<TableId, usize>,
}

impl CapacityIndex {
    pub fn get(&self, table_id: &TableId) -> Option<u32> {
        self.position_index.get(table_id).map(|&position| self.entries[position].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&TableId, u32)> {
        self.entries.iter().map(|(id, capacity)| (id, *capacity))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Builds the capacity index of a grid.
///
/// Labels were validated when the grid was built, so this cannot fail.
pub fn capacity_index(grid: &OccupancyGrid) -> CapacityIndex {
    let entries: Vec<(TableId, u32)> = grid.get_tables().iter().map(|table| (table.get_id().clone(), table.get_capacity())).collect();
    let position_index = entries.iter().enumerate().map(|(position, (id, _))| (id.clone(), position)).collect();

    CapacityIndex { entries, position_index }
}

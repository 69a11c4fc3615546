use crate::domain::fit_search::FitResult;
use crate::domain::grid::{OccupancyGrid, SlotState, TimeslotId};
use crate::domain::utils::id::TableId;
use crate::error::Result;

/// What a cell of an annotated layout shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellMark {
    Open,
    Occupied,
    /// Offered as a single table.
    Selected,
    /// Offered as half of a joined pair.
    Joined,
}

impl CellMark {
    pub fn symbol(&self) -> char {
        match self {
            CellMark::Open => 'o',
            CellMark::Occupied => 'x',
            CellMark::Selected => '*',
            CellMark::Joined => '-',
        }
    }
}

impl From<SlotState> for CellMark {
    fn from(state: SlotState) -> Self {
        match state {
            SlotState::Open => CellMark::Open,
            SlotState::Occupied => CellMark::Occupied,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedRow {
    pub timeslot: TimeslotId,
    pub cells: Vec<CellMark>,
}

/// A display copy of an occupancy grid with the offered seatings marked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedGrid {
    pub tables: Vec<TableId>,
    pub rows: Vec<AnnotatedRow>,
}

impl AnnotatedGrid {
    fn mark(&mut self, timeslot: TimeslotId, position: usize, mark: CellMark) {
        if let Some(cell) = self.rows.iter_mut().find(|row| row.timeslot == timeslot).and_then(|row| row.cells.get_mut(position)) {
            // A cell offered on its own keeps that mark.
            if *cell != CellMark::Selected {
                *cell = mark;
            }
        }
    }
}

impl From<&OccupancyGrid> for AnnotatedGrid {
    fn from(grid: &OccupancyGrid) -> Self {
        AnnotatedGrid {
            tables: grid.get_tables().iter().map(|table| table.get_id().clone()).collect(),
            rows: grid
                .get_timeslots()
                .iter()
                .map(|slot| AnnotatedRow { timeslot: slot.get_id(), cells: slot.get_states().iter().map(|&state| CellMark::from(state)).collect() })
                .collect(),
        }
    }
}

/// Produces an annotated copy of `grid`: single matches are marked selected,
/// both cells of a pair match are marked joined. `grid` itself is not touched.
///
/// # Returns
/// `Error::InvalidTable` if a result names a table outside of the schema.
pub fn annotate(grid: &OccupancyGrid, results: &[FitResult]) -> Result<AnnotatedGrid> {
    let mut annotated = AnnotatedGrid::from(grid);

    for result in results {
        let mark = match result {
            FitResult::Single { .. } => CellMark::Selected,
            FitResult::Pair { .. } => CellMark::Joined,
        };

        for (table_id, timeslot) in result.cells() {
            let position = grid.get_table(table_id)?.get_position();
            annotated.mark(timeslot, position, mark);
        }
    }

    Ok(annotated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::domain::grid::SlotState::{Occupied as X, Open as O};

    fn grid() -> OccupancyGrid {
        OccupancyGrid::new(&["T1(2)", "T2(4)", "T3(2)"], vec![(1, vec![O, O, X]), (2, vec![O, O, O])]).unwrap()
    }

    #[test]
    fn test_annotate_marks_singles_and_pairs() {
        let grid = grid();
        let results = vec![
            FitResult::Single { table: TableId::new("T2(4)"), timeslot: 1 },
            FitResult::Pair { first: TableId::new("T2(4)"), second: TableId::new("T3(2)"), timeslot: 2, combined_capacity: 6 },
        ];

        let annotated = annotate(&grid, &results).unwrap();

        assert_eq!(annotated.rows[0].cells, vec![CellMark::Open, CellMark::Selected, CellMark::Occupied]);
        assert_eq!(annotated.rows[1].cells, vec![CellMark::Open, CellMark::Joined, CellMark::Joined]);
    }

    #[test]
    fn test_annotate_leaves_source_grid_untouched() {
        let grid = grid();
        let before = grid.get_timeslots().to_vec();

        annotate(&grid, &[FitResult::Single { table: TableId::new("T1(2)"), timeslot: 2 }]).unwrap();

        assert_eq!(grid.get_timeslots(), before.as_slice());
    }

    #[test]
    fn test_annotate_unknown_table() {
        let result = annotate(&grid(), &[FitResult::Single { table: TableId::new("T9(0)"), timeslot: 1 }]);
        assert!(matches!(result, Err(Error::InvalidTable(_))));
    }
}

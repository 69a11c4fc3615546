use crate::domain::grid::{OccupancyGrid, SlotState, TimeslotId};
use crate::domain::utils::id::TableId;
use crate::error::Result;

/// Returns the lowest-numbered timeslot in which `table_id` is open.
///
/// # Returns
/// `Ok(None)` if the table is occupied in every timeslot,
/// `Error::InvalidTable` if the table is not part of the schema.
pub fn first_available(grid: &OccupancyGrid, table_id: &TableId) -> Result<Option<TimeslotId>> {
    let position = grid.get_table(table_id)?.get_position();

    let slot = grid.get_timeslots().iter().find(|slot| slot.get_state(position) == Some(SlotState::Open)).map(|slot| slot.get_id());

    log::trace!("First open timeslot of {}: {:?}", table_id, slot);
    Ok(slot)
}

/// Returns every timeslot in which `table_id` is open, in increasing order.
///
/// An empty vector means the table is fully occupied; only an unknown table is an error.
pub fn all_available(grid: &OccupancyGrid, table_id: &TableId) -> Result<Vec<TimeslotId>> {
    let position = grid.get_table(table_id)?.get_position();

    Ok(grid
        .get_timeslots()
        .iter()
        .filter(|slot| slot.get_state(position) == Some(SlotState::Open))
        .map(|slot| slot.get_id())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::domain::grid::SlotState::{Occupied as X, Open as O};

    fn grid() -> OccupancyGrid {
        OccupancyGrid::new(
            &["T1(2)", "T2(4)", "T3(6)"],
            vec![(1, vec![X, O, X]), (2, vec![O, X, X]), (4, vec![X, O, X]), (6, vec![O, O, X])],
        )
        .unwrap()
    }

    #[test]
    fn test_first_available() {
        let grid = grid();
        assert_eq!(first_available(&grid, &TableId::new("T1(2)")).unwrap(), Some(2));
        assert_eq!(first_available(&grid, &TableId::new("T2(4)")).unwrap(), Some(1));
        assert_eq!(first_available(&grid, &TableId::new("T3(6)")).unwrap(), None);
    }

    #[test]
    fn test_all_available() {
        let grid = grid();
        assert_eq!(all_available(&grid, &TableId::new("T1(2)")).unwrap(), vec![2, 6]);
        assert_eq!(all_available(&grid, &TableId::new("T2(4)")).unwrap(), vec![1, 4, 6]);
        assert!(all_available(&grid, &TableId::new("T3(6)")).unwrap().is_empty());
    }

    #[test]
    fn test_unknown_table_is_invalid() {
        let grid = grid();
        let unknown = TableId::new("T9(0)");
        assert!(matches!(first_available(&grid, &unknown), Err(Error::InvalidTable(_))));
        assert!(matches!(all_available(&grid, &unknown), Err(Error::InvalidTable(_))));
    }
}

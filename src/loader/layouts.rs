use clap::ValueEnum;

use crate::api::grid_dto::GridDto;
use crate::domain::grid::OccupancyGrid;
use crate::error::Result;
use crate::loader::parser::parse_json_str;

const OPEN_LAYOUT: &str = include_str!("../data/open_layout.json");
const OCCUPIED_LAYOUT: &str = include_str!("../data/occupied_layout.json");

/// Layouts shipped with the crate: six tables over six timeslots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BuiltinLayout {
    /// Every table is free in every timeslot.
    Open,
    /// Partially booked restaurant.
    Occupied,
}

impl BuiltinLayout {
    fn source(&self) -> &'static str {
        match self {
            BuiltinLayout::Open => OPEN_LAYOUT,
            BuiltinLayout::Occupied => OCCUPIED_LAYOUT,
        }
    }

    pub fn load(&self) -> Result<OccupancyGrid> {
        let dto: GridDto = parse_json_str(self.source())?;
        log::debug!("Loaded built-in layout {:?}.", self);
        OccupancyGrid::from_dto(dto)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_layouts_are_well_formed() {
        for layout in [BuiltinLayout::Open, BuiltinLayout::Occupied] {
            let grid = layout.load().unwrap();
            assert_eq!(grid.get_num_of_tables(), 6, "{:?}", layout);
            assert_eq!(grid.get_timeslots().len(), 6, "{:?}", layout);
        }
    }
}

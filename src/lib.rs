use crate::api::grid_dto::GridDto;
use crate::domain::grid::OccupancyGrid;
use crate::error::Result;
use crate::loader::parser::parse_json_file;

pub mod api;
pub mod display;
pub mod domain;
pub mod error;
pub mod input;
pub mod loader;
pub mod logger;

/// Loads an occupancy grid from a JSON grid file.
pub fn load_grid(file_path: &str) -> Result<OccupancyGrid> {
    let grid_dto: GridDto = parse_json_file::<GridDto>(file_path)?;
    log::info!("Grid file '{}' parsed successfully.", file_path);

    let grid = OccupancyGrid::from_dto(grid_dto)?;
    log::info!("Occupancy grid with {} tables and {} timeslots constructed.", grid.get_num_of_tables(), grid.get_timeslots().len());

    Ok(grid)
}

pub mod grid_dto;

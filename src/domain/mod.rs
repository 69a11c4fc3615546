pub mod annotation;
pub mod availability;
pub mod capacity_index;
pub mod fit_search;
pub mod grid;
pub mod party_size;
pub mod table;
pub mod utils;

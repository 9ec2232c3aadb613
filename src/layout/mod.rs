pub mod grid;
pub mod paginate;

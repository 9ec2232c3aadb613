pub mod backend;
pub mod pdf;
pub mod text;

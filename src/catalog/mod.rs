pub mod http;
pub mod playlist;

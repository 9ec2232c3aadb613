pub mod photo;
pub mod qr;

pub mod cors;
pub mod payload;

pub mod input;
pub mod train;

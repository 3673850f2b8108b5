pub mod deal;
pub mod format;
pub mod mortgage;

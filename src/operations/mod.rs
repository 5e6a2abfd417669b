pub mod dash;
pub mod placement;

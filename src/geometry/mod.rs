pub mod segment;

pub use segment::{segments, Segment};

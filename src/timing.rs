pub mod curve;
pub mod duration;

pub mod deferred;
pub mod label;
pub mod target;

pub mod plan;
pub mod view;

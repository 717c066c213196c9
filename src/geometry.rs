pub mod measure;
pub mod resolver;

pub mod synth;
pub mod timeline;

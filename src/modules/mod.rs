pub mod generation;
pub mod lifecycle;
pub mod project;

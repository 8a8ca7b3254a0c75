pub mod assets;
pub mod models;
pub mod reveal;
pub mod section;

pub mod api;
pub mod config;
pub mod consts;
pub mod difficulty;
pub mod error;
pub mod geometry;
pub mod letters;
pub mod loader;
pub mod practice;
pub mod progress;
pub mod scorer;
pub mod session;
// cmd and reports belong to the binary (main.rs).

pub use letters::{all_letters, get_reference_path};
pub use scorer::{score, stars_from_accuracy};

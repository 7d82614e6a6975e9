pub mod audit;
pub mod letters;
pub mod practice;
pub mod progress;
pub mod score;

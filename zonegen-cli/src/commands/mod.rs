pub mod diff;
pub mod generate;

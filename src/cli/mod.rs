pub mod output;
pub mod setup;

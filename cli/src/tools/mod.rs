//! CLI demo tools

pub mod weather;

pub use weather::WeatherTool;

pub mod cities;
pub mod configuration;
pub mod console;
pub mod domain;
pub mod form;
pub mod sinks;
pub mod status;
pub mod telemetry;
pub mod utils;

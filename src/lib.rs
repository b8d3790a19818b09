//! Scoring and recommendation engine behind the STAR rating simulator.
//!
//! A presentation layer owns a [`values::MetricValueSet`] (usually through a
//! [`session::Session`]) and calls [`score`] and [`recommend`] after every
//! edit.

pub mod advisory;
pub mod baseline;
pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod report;
pub mod session;
pub mod telemetry;
pub mod types;
pub mod values;

pub use baseline::baseline;
pub use catalog::init_catalog;
pub use engine::recommend::recommend;
pub use engine::scoring::score;

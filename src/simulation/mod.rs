//! Standalone car simulation module
//!
//! This module contains all the core grid simulation logic. It runs
//! headlessly with no I/O of its own, so every behavior can be tested
//! without capturing terminal output.

mod car;
mod engine;
mod error;
mod field;
mod types;
mod world;

pub use car::SimCar;
pub use engine::StepEngine;
pub use error::SimError;
pub use field::SimField;
pub use types::{Command, CollisionRecord, Heading, Position};
pub use world::{CarOutcome, CarReport, SimReport, SimWorld};

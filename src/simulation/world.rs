//! Single-shot simulation runs and their result records
//!
//! `SimWorld` ties a field and an engine together for exactly one run
//! and hands back a structured report; all rendering belongs to the
//! caller.

use log::warn;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::car::SimCar;
use super::engine::StepEngine;
use super::error::SimError;
use super::field::SimField;
use super::types::{Command, CollisionRecord, Heading, Position};

/// How a car's run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarOutcome {
    /// Every command executed without incident
    Completed,
    /// Stopped by an attempted move off the field
    HitBoundary,
    /// Stopped by a collision with another car
    Collided,
}

/// Final state of one car after a run
#[derive(Debug, Clone)]
pub struct CarReport {
    pub name: String,
    pub position: Position,
    pub heading: Heading,
    pub outcome: CarOutcome,
}

/// The complete result of one simulation run
///
/// Carries both the per-car view and the collision log; the presentation
/// layer chooses which to show. Conventionally the collision log takes
/// precedence whenever it is non-empty.
#[derive(Debug, Clone)]
pub struct SimReport {
    /// Per-car results, in registration order
    pub cars: Vec<CarReport>,
    /// Every collision detected, in detection order
    pub collisions: Vec<CollisionRecord>,
}

impl SimReport {
    pub fn has_collisions(&self) -> bool {
        !self.collisions.is_empty()
    }
}

/// One full simulation: a field, its cars, and a single engine run
#[derive(Debug)]
pub struct SimWorld {
    field: SimField,
    engine: StepEngine,
}

impl SimWorld {
    /// Create a world with a fresh field and engine
    pub fn new(width: i32, height: i32) -> Result<Self, SimError> {
        Ok(Self {
            field: SimField::new(width, height)?,
            engine: StepEngine::new(),
        })
    }

    /// Build a world populated with randomly placed cars.
    ///
    /// Starting cells are distinct and the RNG is seeded, so the same
    /// seed reproduces the same scenario. A fleet larger than the field
    /// is clamped to the number of available cells.
    pub fn random_fleet(
        width: i32,
        height: i32,
        count: usize,
        command_len: usize,
        seed: u64,
    ) -> Result<Self, SimError> {
        let mut world = Self::new(width, height)?;
        let mut rng = StdRng::seed_from_u64(seed);

        let mut cells: Vec<Position> = (0..width)
            .flat_map(|x| (0..height).map(move |y| Position::new(x, y)))
            .collect();
        cells.shuffle(&mut rng);

        if count > cells.len() {
            warn!(
                "a {} x {} field only holds {} cars; clamping fleet of {}",
                width,
                height,
                cells.len(),
                count
            );
        }

        let headings = [Heading::North, Heading::East, Heading::South, Heading::West];
        let commands = [Command::Forward, Command::Left, Command::Right];

        for (index, position) in cells.into_iter().take(count).enumerate() {
            let heading = headings[rng.random_range(0..headings.len())];
            let sequence: Vec<Command> = (0..command_len)
                .map(|_| commands[rng.random_range(0..commands.len())])
                .collect();
            world.add_car(SimCar::new(
                format!("Car{}", index + 1),
                position,
                heading,
                sequence,
            ))?;
        }

        Ok(world)
    }

    /// Register a car on the field
    pub fn add_car(&mut self, car: SimCar) -> Result<(), SimError> {
        self.field.register(car)
    }

    /// Registered cars in registration order
    pub fn cars(&self) -> &[SimCar] {
        self.field.cars()
    }

    /// Run the simulation to completion.
    ///
    /// Consumes the world: a run is single-shot, and simulating again
    /// means building a fresh world.
    pub fn run(mut self) -> SimReport {
        self.engine.process(&mut self.field);
        let collisions = self.engine.into_collisions();

        let cars = self
            .field
            .cars()
            .iter()
            .map(|car| {
                let outcome = if collisions.iter().any(|record| record.name == car.name) {
                    CarOutcome::Collided
                } else if car.halted() {
                    CarOutcome::HitBoundary
                } else {
                    CarOutcome::Completed
                };
                CarReport {
                    name: car.name.clone(),
                    position: car.position(),
                    heading: car.heading(),
                    outcome,
                }
            })
            .collect();

        SimReport { cars, collisions }
    }
}

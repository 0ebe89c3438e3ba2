//! Lock-step command execution and collision detection
//!
//! The engine advances every registered car one command per step,
//! breadth-first over time: all cars execute their step-k command before
//! any car executes step k+1. Within one step, cars run in registration
//! order. Both orderings are load-bearing for collision outcomes.

use log::{debug, info};

use super::field::SimField;
use super::types::{Command, CollisionRecord};

/// Drives the synchronized execution of every car's command queue
#[derive(Debug, Default)]
pub struct StepEngine {
    collisions: Vec<CollisionRecord>,
}

impl StepEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collision records accumulated so far, in detection order
    pub fn collisions(&self) -> &[CollisionRecord] {
        &self.collisions
    }

    /// Consume the engine, yielding the full collision log
    pub fn into_collisions(self) -> Vec<CollisionRecord> {
        self.collisions
    }

    /// Run every car's command queue to completion.
    ///
    /// A car stops executing once it runs out of commands or is halted
    /// by a boundary violation or collision; halting is permanent for
    /// the rest of the run. Returns the collision records accumulated
    /// across all steps, in detection order.
    pub fn process(&mut self, field: &mut SimField) -> &[CollisionRecord] {
        let total_steps = field
            .cars()
            .iter()
            .map(|car| car.commands().len())
            .max()
            .unwrap_or(0);

        for step in 1..=total_steps {
            for index in 0..field.car_count() {
                let command = match field.car(index).next_command() {
                    Some(command) => command,
                    // Halted or out of commands; inert for the rest of the run.
                    None => continue,
                };

                // The attempt is spent even if the action halts the car.
                field.car_mut(index).advance_cursor();

                match command {
                    Command::Right => {
                        let turned = field.car(index).heading().clockwise();
                        field.car_mut(index).set_heading(turned);
                    }
                    Command::Left => {
                        let turned = field.car(index).heading().counter_clockwise();
                        field.car_mut(index).set_heading(turned);
                    }
                    Command::Forward => self.move_forward(field, index, step),
                }
            }
        }

        &self.collisions
    }

    /// Move one car a single cell forward, halting it on a boundary
    /// violation or collision. The car's position only changes when the
    /// candidate cell is in bounds and unoccupied.
    fn move_forward(&mut self, field: &mut SimField, index: usize, step: usize) {
        let car = field.car(index);
        let candidate = car.position().step(car.heading());

        // Boundary check first: an out-of-bounds cell can never be
        // occupied, and an out-of-bounds stop produces no record.
        if !field.contains(candidate) {
            debug!(
                "{} stopped at the field boundary at {} heading {}",
                car.name,
                car.position(),
                car.heading()
            );
            field.car_mut(index).halt();
            return;
        }

        // Scan the other cars' current cells in registration order; the
        // first occupant found forms the record, and both cars stop
        // where they are.
        let occupant = (0..field.car_count())
            .filter(|&other| other != index)
            .find(|&other| field.car(other).position() == candidate);

        if let Some(other) = occupant {
            let record = CollisionRecord::new(
                field.car(index).name.clone(),
                field.car(other).name.clone(),
                candidate,
                step,
            );
            info!(
                "collision between {} and {} at {} on step {}",
                record.name, record.other_name, candidate, step
            );
            let mirrored = record.mirrored();
            self.collisions.push(record);
            self.collisions.push(mirrored);
            field.car_mut(index).halt();
            field.car_mut(other).halt();
            return;
        }

        field.car_mut(index).set_position(candidate);
    }
}

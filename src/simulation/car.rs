//! The car model for the grid simulation
//!
//! A car is inert data: identity, pose, and its command queue. It never
//! commands its own motion; the step engine owns all movement, boundary,
//! and collision decisions.

use super::types::{Command, Heading, Position};

/// A single car on the simulation field
#[derive(Debug, Clone)]
pub struct SimCar {
    pub name: String,
    /// Starting cell, kept for reporting
    pub initial_position: Position,
    /// Starting heading, kept for reporting
    pub initial_heading: Heading,
    position: Position,
    heading: Heading,
    commands: Vec<Command>,
    cursor: usize,
    halted: bool,
}

impl SimCar {
    pub fn new(
        name: impl Into<String>,
        position: Position,
        heading: Heading,
        commands: Vec<Command>,
    ) -> Self {
        Self {
            name: name.into(),
            initial_position: position,
            initial_heading: heading,
            position,
            heading,
            commands,
            cursor: 0,
            halted: false,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Index of the next command to execute; never exceeds the queue length
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether the car was stopped by a boundary violation or collision
    pub fn halted(&self) -> bool {
        self.halted
    }

    /// The next queued command, or `None` once the car is inert
    /// (halted or out of commands)
    pub fn next_command(&self) -> Option<Command> {
        if self.halted {
            return None;
        }
        self.commands.get(self.cursor).copied()
    }

    /// The command queue in the single-letter form the shell prints
    pub fn commands_display(&self) -> String {
        self.commands.iter().map(|command| command.to_string()).collect()
    }

    pub(crate) fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    pub(crate) fn set_heading(&mut self, heading: Heading) {
        self.heading = heading;
    }

    /// Consume the current command slot; saturates at the queue end
    pub(crate) fn advance_cursor(&mut self) {
        if self.cursor < self.commands.len() {
            self.cursor += 1;
        }
    }

    /// Stop the car for the remainder of the run; never reset
    pub(crate) fn halt(&mut self) {
        self.halted = true;
    }
}

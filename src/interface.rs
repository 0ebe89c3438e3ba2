//! Interactive text interface for the car simulation
//!
//! Owns all prompting, input parsing, and result rendering. Invalid
//! input is re-prompted here and never reaches the simulation module.

use std::io::{self, Write};

use anyhow::{Context, Result};

use car_sim::simulation::{
    CarOutcome, Command, Heading, Position, SimCar, SimReport, SimWorld,
};

/// Run the interactive prompt loop until the user exits
pub fn run() -> Result<()> {
    loop {
        let (width, height) = prompt_dimensions()?;
        let mut world = match SimWorld::new(width, height) {
            Ok(world) => world,
            Err(error) => {
                println!("{error}");
                continue;
            }
        };

        loop {
            println!();
            println!("Please choose from the following options:");
            println!("[1] Add a car to field");
            println!("[2] Run simulation");
            match prompt_line("Enter your choice (1-2): ")?.trim() {
                "1" => {
                    let car = prompt_car()?;
                    if let Err(error) = world.add_car(car) {
                        println!("{error}");
                    }
                }
                "2" => {
                    print_car_list(world.cars());
                    let report = world.run();
                    print_report(&report);
                    if prompt_start_over()? {
                        break;
                    }
                    return Ok(());
                }
                _ => println!("Invalid choice. Please select 1 or 2."),
            }
        }
    }
}

/// Print the registered cars with their initial positions and commands
pub fn print_car_list(cars: &[SimCar]) {
    println!();
    println!("Your current list of cars are:");
    for car in cars {
        println!(
            "- {}, {} {}, {}",
            car.name,
            car.initial_position,
            car.initial_heading,
            car.commands_display()
        );
    }
}

/// Print the outcome of a run.
///
/// The collision log takes precedence over per-car results whenever any
/// collision occurred.
pub fn print_report(report: &SimReport) {
    println!();
    println!("After simulation, the result is:");
    if report.has_collisions() {
        for record in &report.collisions {
            println!(
                "- {}, collides with {} at {} at step {}",
                record.name, record.other_name, record.position, record.step
            );
        }
    } else {
        for car in &report.cars {
            let note = match car.outcome {
                CarOutcome::HitBoundary => " (stopped at the field boundary)",
                _ => "",
            };
            println!("- {}, {} {}{}", car.name, car.position, car.heading, note);
        }
    }
}

/// Prompt for field dimensions until two integers are supplied
fn prompt_dimensions() -> Result<(i32, i32)> {
    loop {
        let line =
            prompt_line("Please enter the width and height of the simulation field in 'x y' format: ")?;
        let parts: Vec<&str> = line.split_whitespace().collect();
        let parsed = match parts.as_slice() {
            [width, height] => width.parse::<i32>().ok().zip(height.parse::<i32>().ok()),
            _ => None,
        };
        match parsed {
            Some((width, height)) => return Ok((width, height)),
            None => {
                println!("Invalid input. Please only enter integers separated by space (e.g., '5 5')")
            }
        }
    }
}

/// Prompt for one complete car definition, re-asking on any invalid field
fn prompt_car() -> Result<SimCar> {
    loop {
        let name = prompt_line("Please enter the name of the car: ")?.trim().to_string();
        if name.is_empty() {
            println!("Car name cannot be empty.");
            continue;
        }

        let position_line = prompt_line(&format!(
            "Please enter initial position of car {name} in 'x y Direction' format (e.g., '1 2 N'): "
        ))?;
        let parts: Vec<&str> = position_line.split_whitespace().collect();
        if parts.len() != 3 {
            println!("Invalid position format. Please enter 'x y Direction'.");
            continue;
        }

        let (x, y) = match (parts[0].parse::<i32>(), parts[1].parse::<i32>()) {
            (Ok(x), Ok(y)) => (x, y),
            _ => {
                println!("Invalid input. Please enter valid numbers for position.");
                continue;
            }
        };

        let heading = match parse_heading(parts[2]) {
            Some(heading) => heading,
            None => {
                println!("Invalid direction. Please use one of N, E, S, W.");
                continue;
            }
        };

        let commands_line = prompt_line(&format!("Please enter the commands for car {name}: "))?;
        let commands = match Command::parse_sequence(commands_line.trim()) {
            Ok(commands) => commands,
            Err(_) => {
                println!("Invalid commands. Please only use 'F', 'R', and 'L'.");
                continue;
            }
        };

        return Ok(SimCar::new(name, Position::new(x, y), heading, commands));
    }
}

/// Offer the post-run menu; true means start over with a fresh field
fn prompt_start_over() -> Result<bool> {
    loop {
        println!();
        println!("Please choose from the following options:");
        println!("[1] Start over");
        println!("[2] Exit");
        match prompt_line("Enter your choice (1-2): ")?.trim() {
            "1" => {
                println!();
                println!("Simulation reset successfully. You can start over.");
                return Ok(true);
            }
            "2" => {
                println!("Thank you for running the simulation. Goodbye!");
                return Ok(false);
            }
            _ => println!("Invalid choice. Please select 1 or 2."),
        }
    }
}

/// A heading is a single letter; anything longer is rejected outright
fn parse_heading(token: &str) -> Option<Heading> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(symbol), None) => Heading::from_symbol(symbol).ok(),
        _ => None,
    }
}

fn prompt_line(prompt: &str) -> Result<String> {
    print!("{prompt}");
    io::stdout().flush().context("failed to flush prompt")?;

    let mut line = String::new();
    let bytes = io::stdin()
        .read_line(&mut line)
        .context("failed to read input")?;
    if bytes == 0 {
        anyhow::bail!("input stream closed");
    }
    Ok(line)
}

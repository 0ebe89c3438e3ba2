//! Step engine semantics tests
//!
//! Exercises the engine and field directly, below the `SimWorld`
//! surface: command consumption, boundary precedence, collision
//! tie-breaks, and the lock-step ordering across cars.

use car_sim::simulation::{Command, Heading, Position, SimCar, SimField, StepEngine};

fn car(name: &str, x: i32, y: i32, heading: Heading, commands: &str) -> SimCar {
    SimCar::new(
        name,
        Position::new(x, y),
        heading,
        Command::parse_sequence(commands).expect("test commands are valid"),
    )
}

#[test]
fn heading_cycle_is_clockwise() {
    assert_eq!(Heading::North.clockwise(), Heading::East);
    assert_eq!(Heading::East.clockwise(), Heading::South);
    assert_eq!(Heading::South.clockwise(), Heading::West);
    assert_eq!(Heading::West.clockwise(), Heading::North);

    assert_eq!(Heading::North.counter_clockwise(), Heading::West);
    assert_eq!(Heading::West.counter_clockwise(), Heading::South);
    assert_eq!(Heading::South.counter_clockwise(), Heading::East);
    assert_eq!(Heading::East.counter_clockwise(), Heading::North);
}

#[test]
fn four_right_turns_restore_the_heading() {
    for heading in [Heading::North, Heading::East, Heading::South, Heading::West] {
        let mut field = SimField::new(5, 5).unwrap();
        field.register(car("Spinner", 2, 2, heading, "RRRR")).unwrap();

        let mut engine = StepEngine::new();
        engine.process(&mut field);

        assert_eq!(field.cars()[0].heading(), heading);
        assert_eq!(field.cars()[0].position(), Position::new(2, 2));
    }
}

#[test]
fn four_left_turns_restore_the_heading() {
    for heading in [Heading::North, Heading::East, Heading::South, Heading::West] {
        let mut field = SimField::new(5, 5).unwrap();
        field.register(car("Spinner", 2, 2, heading, "LLLL")).unwrap();

        let mut engine = StepEngine::new();
        engine.process(&mut field);

        assert_eq!(field.cars()[0].heading(), heading);
    }
}

#[test]
fn forward_off_the_edge_halts_without_moving() {
    // One case per edge, each facing outward.
    let cases = [
        (0, 0, Heading::South),
        (0, 0, Heading::West),
        (9, 9, Heading::North),
        (9, 9, Heading::East),
    ];
    for (x, y, heading) in cases {
        let mut field = SimField::new(10, 10).unwrap();
        field.register(car("Edge", x, y, heading, "F")).unwrap();

        let mut engine = StepEngine::new();
        let records = engine.process(&mut field);
        assert!(records.is_empty());

        let edge = &field.cars()[0];
        assert!(edge.halted());
        assert_eq!(edge.position(), Position::new(x, y));
    }
}

#[test]
fn a_halting_move_still_consumes_its_command() {
    let mut field = SimField::new(10, 10).unwrap();
    field
        .register(car("Edge", 0, 0, Heading::South, "FFF"))
        .unwrap();

    let mut engine = StepEngine::new();
    engine.process(&mut field);

    // Halted on step 1: the command that caused it was spent, the rest
    // were never read.
    assert_eq!(field.cars()[0].cursor(), 1);
    assert!(field.cars()[0].halted());
}

#[test]
fn collision_produces_two_mirrored_records() {
    let mut field = SimField::new(10, 10).unwrap();
    field
        .register(car("Mover", 1, 1, Heading::East, "F"))
        .unwrap();
    field
        .register(car("Parked", 2, 1, Heading::North, ""))
        .unwrap();

    let mut engine = StepEngine::new();
    let records = engine.process(&mut field).to_vec();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].name, "Mover");
    assert_eq!(records[0].other_name, "Parked");
    assert_eq!(records[1].name, "Parked");
    assert_eq!(records[1].other_name, "Mover");
    for record in &records {
        assert_eq!(record.position, Position::new(2, 1));
        assert_eq!(record.step, 1);
    }

    // The mover is frozen at its pre-move cell; the parked car never moved.
    assert_eq!(field.cars()[0].position(), Position::new(1, 1));
    assert_eq!(field.cars()[1].position(), Position::new(2, 1));
    assert!(field.cars()[0].halted());
    assert!(field.cars()[1].halted());
}

#[test]
fn swapping_cars_collide_instead_of_passing_through() {
    let mut field = SimField::new(10, 10).unwrap();
    field
        .register(car("Eastbound", 0, 0, Heading::East, "F"))
        .unwrap();
    field
        .register(car("Westbound", 1, 0, Heading::West, "F"))
        .unwrap();

    let mut engine = StepEngine::new();
    let records = engine.process(&mut field).to_vec();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].name, "Eastbound");
    assert_eq!(records[0].position, Position::new(1, 0));
    assert_eq!(records[0].step, 1);

    assert!(field.cars().iter().all(SimCar::halted));
    assert_eq!(field.cars()[0].position(), Position::new(0, 0));
    assert_eq!(field.cars()[1].position(), Position::new(1, 0));
}

#[test]
fn steps_advance_breadth_first_across_cars() {
    // Northbound reaches (0,1) on step 1 and Southbound runs into it
    // during the same step. Finishing one car's whole route before the
    // next starts would produce a different collision.
    let mut field = SimField::new(10, 10).unwrap();
    field
        .register(car("Northbound", 0, 0, Heading::North, "FF"))
        .unwrap();
    field
        .register(car("Southbound", 0, 2, Heading::South, "F"))
        .unwrap();

    let mut engine = StepEngine::new();
    let records = engine.process(&mut field).to_vec();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].name, "Southbound");
    assert_eq!(records[0].other_name, "Northbound");
    assert_eq!(records[0].position, Position::new(0, 1));
    assert_eq!(records[0].step, 1);
}

#[test]
fn collision_scan_reports_the_first_match_in_registration_order() {
    // Two parked cars share the target cell (starting positions are the
    // caller's responsibility); only the first-registered one is
    // reported, and the other is left untouched.
    let mut field = SimField::new(10, 10).unwrap();
    field.register(car("First", 3, 3, Heading::North, "")).unwrap();
    field
        .register(car("Second", 3, 3, Heading::North, ""))
        .unwrap();
    field.register(car("Mover", 3, 2, Heading::North, "F")).unwrap();

    let mut engine = StepEngine::new();
    let records = engine.process(&mut field).to_vec();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].name, "Mover");
    assert_eq!(records[0].other_name, "First");
    assert!(field.cars()[0].halted());
    assert!(!field.cars()[1].halted());
}

#[test]
fn halted_cars_block_later_traffic() {
    // Blocker halts at the north edge on step 1, then Chaser drives
    // into its cell two steps later.
    let mut field = SimField::new(5, 5).unwrap();
    field
        .register(car("Blocker", 2, 4, Heading::North, "F"))
        .unwrap();
    field
        .register(car("Chaser", 2, 1, Heading::North, "FFF"))
        .unwrap();

    let mut engine = StepEngine::new();
    let records = engine.process(&mut field).to_vec();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].name, "Chaser");
    assert_eq!(records[0].other_name, "Blocker");
    assert_eq!(records[0].position, Position::new(2, 4));
    assert_eq!(records[0].step, 3);
}

#[test]
fn exhausted_cars_sit_still_while_others_finish() {
    let mut field = SimField::new(10, 10).unwrap();
    field.register(car("Short", 0, 0, Heading::North, "F")).unwrap();
    field.register(car("Long", 5, 5, Heading::North, "FFF")).unwrap();

    let mut engine = StepEngine::new();
    engine.process(&mut field);

    assert_eq!(field.cars()[0].position(), Position::new(0, 1));
    assert_eq!(field.cars()[0].cursor(), 1);
    assert!(!field.cars()[0].halted());
    assert_eq!(field.cars()[1].position(), Position::new(5, 8));
}

#[test]
fn processing_an_empty_field_is_a_no_op() {
    let mut field = SimField::new(3, 3).unwrap();
    let mut engine = StepEngine::new();
    assert!(engine.process(&mut field).is_empty());
}

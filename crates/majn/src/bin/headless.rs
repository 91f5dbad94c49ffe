//! # MAJN Headless
//!
//! Runs a scripted session without a window and prints what happened:
//! walk forward, strafe, sink onto the ground, look down, then break and
//! place a block.
//!
//! Usage: `majn_headless [config.toml]`

use std::process::ExitCode;
use std::time::Instant;

use majn::{EngineConfig, MoveKey, Session};
use majn_world::BlockType;

/// One scripted phase: a held key for a number of frames.
struct Phase {
    name: &'static str,
    key: MoveKey,
    frames: u32,
}

const SCRIPT: [Phase; 3] = [
    Phase {
        name: "Walk forward",
        key: MoveKey::Forward,
        frames: 40,
    },
    Phase {
        name: "Strafe right",
        key: MoveKey::Right,
        frames: 20,
    },
    Phase {
        name: "Sink",
        key: MoveKey::Down,
        frames: 40,
    },
];

fn main() -> ExitCode {
    let config = match std::env::args().nth(1) {
        Some(path) => match EngineConfig::load(&path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("majn_headless: {err}");
                return ExitCode::FAILURE;
            }
        },
        None => EngineConfig::default(),
    };

    let mut session = match Session::new(&config) {
        Ok(session) => session,
        Err(err) => {
            eprintln!("majn_headless: {err}");
            return ExitCode::FAILURE;
        }
    };

    println!("╔══════════════════════════════════════════════════════════════════╗");
    println!("║           MAJN HEADLESS SESSION                                  ║");
    println!("╚══════════════════════════════════════════════════════════════════╝");
    println!();
    print_lines(&session);

    let start = Instant::now();

    for phase in &SCRIPT {
        session.handle_key(phase.key, true);
        let mut blocked_frames = 0u32;
        for _ in 0..phase.frames {
            if session.tick().is_some_and(|outcome| outcome.is_blocked()) {
                blocked_frames += 1;
            }
        }
        session.handle_key(phase.key, false);

        let [x, y, z] = session.mover().position();
        println!();
        println!(
            "{:<14} {:>3} frames, {:>3} blocked -> ({x:.2}, {y:.2}, {z:.2})",
            phase.name, phase.frames, blocked_frames
        );
    }

    // Look straight down; the pitch limit stops it short of vertical.
    session.handle_mouse(0.0, 0.0);
    session.handle_mouse(0.0, 10_000.0);

    println!();
    match session.target_block() {
        Some(hit) => println!(
            "Target: {:?} via {:?} face at {:.2}",
            hit.voxel, hit.face, hit.distance
        ),
        None => println!("Target: nothing in reach"),
    }
    println!("Break:  {}", session.break_target());
    println!("Place:  {}", session.place_target(BlockType::Grass));

    let visible = session.visible_chunks().len();
    let elapsed = start.elapsed();

    println!();
    print_lines(&session);
    println!("Visible chunks: {visible}");
    println!("Frames: {} in {elapsed:?}", session.frame());

    ExitCode::SUCCESS
}

fn print_lines(session: &Session) {
    for line in session.debug_lines() {
        println!("  {line}");
    }
}

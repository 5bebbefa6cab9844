// main.rs
//
// Demo binary: runs the planetary train for a few hundred ticks and writes
// every twelfth frame to svg/ as a standalone SVG file. A tap timetable is
// scripted into the run so the output walks through all three carrier-frame
// modes, plus one long press to show that holds change nothing.
//
// Run with RUST_LOG=debug for the tap-by-tap story.

use geartrain::{GearTrain, Viewport};
use log::info;
use std::fs;
use std::time::Duration;

const TICKS: u32 = 480;
const FRAME_EVERY: u32 = 12;
const MILLIS_PER_TICK: u64 = 16;

fn main() {
    env_logger::init();

    let _ = fs::create_dir_all("svg");

    // a phone-ish portrait surface
    let viewport = Viewport::new(414.0, 896.0);
    let mut train = GearTrain::planetary(&viewport).unwrap();

    // (tick, press length in ms); the 900ms press is a hold
    let presses = [(120_u32, 40_u64), (240, 40), (300, 900), (360, 40)];

    for tick in 0..TICKS {
        train.tick();

        for &(at, held) in &presses {
            if tick == at {
                let now = Duration::from_millis(u64::from(tick) * MILLIS_PER_TICK);
                train.touch_start(now);
                let gesture = train.touch_end(now + Duration::from_millis(held));
                info!(
                    "tick {tick}: {gesture:?} -> frame mode {:?}",
                    train.frame_mode()
                );
            }
        }

        if tick % FRAME_EVERY == 0 {
            let name = format!("svg/frame_{tick:04}.svg");
            let _ = train.scene().save_svg(&name, &viewport);
        }
    }

    println!(
        "wrote {} frames to svg/ ({} gears, {} path commands each)",
        TICKS / FRAME_EVERY,
        train.gears().len(),
        train
            .outlines()
            .iter()
            .map(geartrain::path::ClosedPath::len)
            .sum::<usize>()
    );
}

//! Platform Motion Demo
//!
//! Headless traversal of a sample level.
//! Runs a scripted input sequence, logs transitions, then replays the same
//! recording and checks the digests match.
//!
//! Pass a JSON config path as the first argument to override the defaults.

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use platform_motion::{
    Config, LevelCollisionIndex, MotionController, MotionInput, Rect, TileGrid,
    TICK_RATE, VERSION,
    motion::{events::MotionEventData, replay},
};

/// Sample level: `1` solid ground and walls, `2` one-way ledges.
const DEMO_LEVEL: &str = "
1..............................1
1..............................1
1..............................1
1..............................1
1.........2222.................1
1..............................1
1..............................1
1....2222.........2222.........1
1..............................1
1..............................1
1..............111.............1
1..............111.............1
11111111111111111111111111111111
";

/// Demo length in ticks (10 seconds).
const DEMO_TICKS: u32 = 600;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    info!("Platform Motion v{}", VERSION);
    info!("Tick Rate: {} Hz", TICK_RATE);

    let mut config = match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config {path}"))?;
            Config::from_json_str(&json).with_context(|| format!("invalid config {path}"))?
        }
        None => Config::default(),
    };
    config.level.one_way_tile_ids.insert(2);
    config.validate()?;

    demo_traversal(&config)
}

/// Scripted inputs: run right, hop onto a ledge, drop back down, turn around.
fn scripted_input(t: u32) -> MotionInput {
    match t {
        0..=59 => MotionInput::right(),
        60 => MotionInput::right().with_jump(),
        61..=90 => MotionInput::right(),
        91..=150 => MotionInput::IDLE,
        151..=160 => MotionInput::down(),
        161..=260 => MotionInput::left(),
        261 => MotionInput::left().with_jump(),
        262..=300 => MotionInput::left(),
        _ if t % 90 == 0 => MotionInput::right().with_jump(),
        _ if (t / 90) % 2 == 0 => MotionInput::right(),
        _ => MotionInput::left(),
    }
}

fn demo_traversal(config: &Config) -> anyhow::Result<()> {
    info!("=== Building Level ===");
    let grid = TileGrid::from_ascii(DEMO_LEVEL, config.level.empty_tile_id)?;
    let index = LevelCollisionIndex::build(&grid, &config.level);
    info!(
        "{} tiles merged into {} solid + {} one-way rectangles",
        grid.non_empty_count(),
        index.solid_collisions().len(),
        index.one_way_platform_collisions().len()
    );

    let tile = config.level.tile_size;
    let start = Rect::new(tile * 2.0, tile * 12.0 - 24.0, 12.0, 24.0);
    let mut hitbox = start;
    let mut controller = MotionController::new(config.motion.clone(), &hitbox, &index);

    info!("=== Running {} ticks ===", DEMO_TICKS);
    let inputs: Vec<MotionInput> = (0..DEMO_TICKS).map(scripted_input).collect();
    let mut total_events = 0;

    for input in &inputs {
        controller.step(*input, &mut hitbox, &index);

        for event in controller.take_events() {
            total_events += 1;
            match event.data {
                MotionEventData::Jumped { coyote } => {
                    info!("Tick {}: jump{}", event.tick, if coyote { " (coyote)" } else { "" });
                }
                MotionEventData::Landed { surface, impact_speed } => {
                    info!("Tick {}: landed on {:?} at {:.2} px/tick", event.tick, surface, impact_speed);
                }
                MotionEventData::DroppedThrough => {
                    info!("Tick {}: dropped through platform", event.tick);
                }
                MotionEventData::CeilingBump => {
                    info!("Tick {}: bumped ceiling", event.tick);
                }
                _ => {}
            }
        }

        if controller.tick() % TICK_RATE == 0 {
            info!(
                "Tick {}: pos {} vel {} in_air={} moving={}",
                controller.tick(),
                hitbox.origin(),
                controller.velocity(),
                controller.in_air(),
                controller.is_moving()
            );
        }
    }

    let snapshot = controller.snapshot(&hitbox);
    info!("=== Results ===");
    info!("Final hitbox: {:?}", snapshot.hitbox);
    info!("Final snapshot digest: {}", hex::encode(snapshot.digest()));
    info!("Total events: {}", total_events);

    // Replay the recording from scratch and compare
    info!("=== Verifying Replay ===");
    let first = replay(&config.motion, &index, start, &inputs);
    let second = replay(&config.motion, &index, start, &inputs);
    info!("Replay digest: {}", hex::encode(first.digest));

    if first.digest == second.digest && first.hitbox == hitbox {
        info!("REPLAY VERIFIED: digests match");
    } else {
        info!("REPLAY MISMATCH: digests differ");
    }

    Ok(())
}

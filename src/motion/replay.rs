//! Input Replay
//!
//! Runs a recorded input sequence through a fresh controller. Identical
//! recordings on identical levels yield identical digests, which makes
//! recordings usable as regression fixtures for feel tuning.

use crate::core::hash::{SnapshotDigest, SnapshotHasher};
use crate::core::rect::Rect;
use crate::level::collision_index::LevelCollisionIndex;
use super::config::MotionConfig;
use super::controller::MotionController;
use super::events::MotionEvent;
use super::input::MotionInput;
use super::snapshot::MotionSnapshot;

/// Outcome of a replay.
#[derive(Clone, Debug)]
pub struct ReplayResult {
    /// Hitbox after the last tick
    pub hitbox: Rect,
    /// State after the last tick
    pub final_snapshot: MotionSnapshot,
    /// Every event, in order
    pub events: Vec<MotionEvent>,
    /// Digest over every per-tick snapshot
    pub digest: SnapshotDigest,
}

/// Replay `inputs` from `start` on a new controller.
pub fn replay(
    config: &MotionConfig,
    index: &LevelCollisionIndex,
    start: Rect,
    inputs: &[MotionInput],
) -> ReplayResult {
    let mut hitbox = start;
    let mut controller = MotionController::new(config.clone(), &hitbox, index);
    let mut hasher = SnapshotHasher::for_replay();
    let mut events = Vec::new();

    hasher.update_u32(inputs.len() as u32);
    for input in inputs {
        controller.step(*input, &mut hitbox, index);
        controller.snapshot(&hitbox).hash_into(&mut hasher);
        events.extend(controller.take_events());
    }

    ReplayResult {
        hitbox,
        final_snapshot: controller.snapshot(&hitbox),
        events,
        digest: hasher.finalize(),
    }
}

/// Replay a packed recording (one `MotionInput::to_bits` byte per tick).
pub fn replay_bits(
    config: &MotionConfig,
    index: &LevelCollisionIndex,
    start: Rect,
    recording: &[u8],
) -> ReplayResult {
    let inputs: Vec<MotionInput> = recording.iter().copied().map(MotionInput::from_bits).collect();
    replay(config, index, start, &inputs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat_floor() -> LevelCollisionIndex {
        LevelCollisionIndex::from_rects(vec![Rect::new(-1000.0, 100.0, 2000.0, 16.0)], vec![])
    }

    fn scripted_inputs() -> Vec<MotionInput> {
        (0..120u32)
            .map(|t| match t % 40 {
                0 => MotionInput::right().with_jump(),
                1..=19 => MotionInput::right(),
                25..=30 => MotionInput::left(),
                _ => MotionInput::IDLE,
            })
            .collect()
    }

    #[test]
    fn test_replay_determinism() {
        let config = MotionConfig::default();
        let index = flat_floor();
        let start = Rect::new(0.0, 76.0, 12.0, 24.0);

        let a = replay(&config, &index, start, &scripted_inputs());
        let b = replay(&config, &index, start, &scripted_inputs());

        assert_eq!(a.digest, b.digest);
        assert_eq!(a.hitbox, b.hitbox);
        assert_eq!(a.events, b.events);
        assert_eq!(a.final_snapshot.tick, 120);
    }

    #[test]
    fn test_different_inputs_change_digest() {
        let config = MotionConfig::default();
        let index = flat_floor();
        let start = Rect::new(0.0, 76.0, 12.0, 24.0);

        let moved = replay(&config, &index, start, &[MotionInput::right(); 10]);
        let idle = replay(&config, &index, start, &[MotionInput::IDLE; 10]);
        assert_ne!(moved.digest, idle.digest);
    }

    #[test]
    fn test_packed_recording_matches() {
        let config = MotionConfig::default();
        let index = flat_floor();
        let start = Rect::new(0.0, 76.0, 12.0, 24.0);
        let inputs = scripted_inputs();
        let bits: Vec<u8> = inputs.iter().map(|i| i.to_bits()).collect();

        let direct = replay(&config, &index, start, &inputs);
        let packed = replay_bits(&config, &index, start, &bits);
        assert_eq!(direct.digest, packed.digest);
    }
}

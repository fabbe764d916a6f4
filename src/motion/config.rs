//! Motion tuning constants.
//!
//! Units are pixels and ticks. Every field is plain data so levels or
//! characters can ship their own feel in JSON.

use serde::{Serialize, Deserialize};

/// Tuning for the motion controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    // ========================================================================
    // Body
    // ========================================================================
    /// Body mass. Forces are mass-scaled so tuning values act as accelerations.
    pub mass: f32,

    // ========================================================================
    // Gravity
    // ========================================================================
    /// Downward acceleration while airborne (px/tick²).
    pub gravity: f32,

    /// Gravity factor while down is held in the air.
    pub fast_fall_multiplier: f32,

    /// |vy| below this counts as the apex of an arc.
    pub apex_threshold: f32,

    /// Gravity factor at the apex (< 1 gives a brief hang).
    pub apex_gravity_multiplier: f32,

    // ========================================================================
    // Horizontal
    // ========================================================================
    /// Horizontal acceleration from input (px/tick²).
    pub acceleration: f32,

    /// Input acceleration factor at the apex, for air control.
    pub apex_acceleration_multiplier: f32,

    /// Horizontal speed cap (px/tick).
    pub max_speed_x: f32,

    /// X velocity factor per grounded tick.
    pub ground_friction: f32,

    /// X velocity factor per airborne tick.
    pub air_resistance: f32,

    /// Below this |vx| with no horizontal input, X velocity snaps to zero.
    pub stop_speed: f32,

    // ========================================================================
    // Vertical caps
    // ========================================================================
    /// Upward speed cap (px/tick).
    pub max_rise_speed: f32,

    /// Downward speed cap (px/tick).
    pub max_fall_speed: f32,

    // ========================================================================
    // Jump
    // ========================================================================
    /// Launch speed set on the jump tick (px/tick, upward).
    pub jump_force: f32,

    /// Upward sustain force while the jump force is alive.
    pub jump_hold_force: f32,

    /// Lifetime of the sustain force (ticks).
    pub jump_max_time_frames: u32,

    /// Factor applied to upward velocity when the jump is released early.
    pub jump_cut_multiplier: f32,

    /// Ticks after leaving the ground during which a jump is still accepted.
    pub coyote_time_frames: u32,

    /// Vertical speed after bumping a ceiling (px/tick, downward).
    pub fall_speed_after_collision: f32,

    // ========================================================================
    // One-way platforms
    // ========================================================================
    /// Ticks during which one-way collision is ignored after a drop-through.
    pub drop_through_grace_frames: u32,

    /// Downward speed given on drop-through (px/tick).
    pub drop_through_impulse: f32,

    /// Sweep step is `max(1, |dy| / one_way_sweep_divisor)` pixels.
    pub one_way_sweep_divisor: f32,

    // ========================================================================
    // Sensors
    // ========================================================================
    /// Thickness of the ground, ceiling and drop sensors (px).
    pub sensor_depth: f32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            mass: 1.0,

            gravity: 0.5,
            fast_fall_multiplier: 1.6,
            apex_threshold: 1.0,
            apex_gravity_multiplier: 0.5,

            acceleration: 0.8,
            apex_acceleration_multiplier: 1.3,
            max_speed_x: 4.0,
            ground_friction: 0.85,
            air_resistance: 0.95,
            stop_speed: 0.05,

            max_rise_speed: 10.0,
            max_fall_speed: 10.0,

            jump_force: 8.0,
            jump_hold_force: 0.25,
            jump_max_time_frames: 20,
            jump_cut_multiplier: 0.5,
            coyote_time_frames: 6,
            fall_speed_after_collision: 1.0,

            drop_through_grace_frames: 10,
            drop_through_impulse: 2.0,
            one_way_sweep_divisor: 10.0,

            sensor_depth: 1.0,
        }
    }
}

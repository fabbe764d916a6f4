//! Motion Controller
//!
//! The per-tick platformer state machine. Each `update` runs the same ten
//! phases in the same order; later phases rely on what earlier ones wrote, so
//! the order is part of the behavior.
//!
//! ```text
//!  1. drop-through      6. resistances
//!  2. jump + coyote     7. velocity clamps
//!  3. gravity           8. collision resolution
//!  4. input force       9. apply motion
//!  5. integrate        10. cleanup, ground truth
//! ```
//!
//! `in_air` is provisional until phase 10, where it is recomputed from a
//! ground sensor under the hitbox. Whatever earlier phases assumed, that
//! reading wins.

use tracing::debug;

use crate::core::rect::Rect;
use crate::core::vec2::Vector2D;
use crate::level::collision_index::LevelCollisionIndex;
use crate::physics::body::PhysicsBody;
use crate::physics::force::ForceType;
use super::config::MotionConfig;
use super::events::{MotionEvent, MotionEventData, Surface};
use super::input::MotionInput;
use super::snapshot::MotionSnapshot;

/// Slack for "touching" comparisons between edges.
const CONTACT_EPSILON: f32 = 0.01;

/// |vx| above this counts as moving.
const MOVING_THRESHOLD_X: f32 = 0.1;

/// |vy| above this counts as moving.
const MOVING_THRESHOLD_Y: f32 = 0.5;

/// Ground under the hitbox, as read by the sensor.
#[derive(Clone, Copy, Debug)]
struct Ground {
    surface: Surface,
    /// Top edge of the surface the hitbox rests on.
    top: f32,
}

/// Result of phase 8: where the hitbox should end up.
#[derive(Clone, Copy, Debug)]
struct Resolution {
    x: f32,
    y: f32,
}

/// Platformer motion for one body.
///
/// One instance per traversal; recreate it when the level changes.
#[derive(Clone, Debug)]
pub struct MotionController {
    config: MotionConfig,
    body: PhysicsBody,
    input: MotionInput,
    in_air: bool,
    is_jumping: bool,
    coyote_time_counter: u32,
    drop_through_grace_frames: u32,
    tick: u32,
    events: Vec<MotionEvent>,
}

impl MotionController {
    /// Create a controller for a body whose hitbox starts at `hitbox`.
    ///
    /// Grounding is probed immediately so a body spawned on the floor can
    /// jump on its first tick.
    pub fn new(config: MotionConfig, hitbox: &Rect, index: &LevelCollisionIndex) -> Self {
        let body = PhysicsBody::new(hitbox.origin(), config.mass);
        let mut controller = Self {
            config,
            body,
            input: MotionInput::IDLE,
            in_air: true,
            is_jumping: false,
            coyote_time_counter: 0,
            drop_through_grace_frames: 0,
            tick: 0,
            events: Vec::new(),
        };

        // Only a body already in contact starts grounded; one hovering inside
        // the sensor band falls onto the surface on its first tick.
        if let Some(ground) = controller.probe_ground(hitbox, index) {
            if ground.top - hitbox.bottom() <= CONTACT_EPSILON {
                controller.in_air = false;
                controller.coyote_time_counter = controller.config.coyote_time_frames;
            }
        }

        debug!(
            x = hitbox.x,
            y = hitbox.y,
            grounded = !controller.in_air,
            "motion controller created"
        );

        controller
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    /// Tuning in use.
    #[inline]
    pub fn config(&self) -> &MotionConfig {
        &self.config
    }

    /// The underlying body.
    #[inline]
    pub fn body(&self) -> &PhysicsBody {
        &self.body
    }

    /// Mutable body, for collaborators adding dash or knockback forces.
    #[inline]
    pub fn body_mut(&mut self) -> &mut PhysicsBody {
        &mut self.body
    }

    /// Current velocity.
    #[inline]
    pub fn velocity(&self) -> Vector2D {
        self.body.velocity
    }

    /// Airborne per the last ground sensor reading.
    #[inline]
    pub fn in_air(&self) -> bool {
        self.in_air
    }

    /// A jump is in progress.
    #[inline]
    pub fn is_jumping(&self) -> bool {
        self.is_jumping
    }

    /// Moving fast enough for a run/fall animation.
    #[inline]
    pub fn is_moving(&self) -> bool {
        self.body.velocity.x.abs() > MOVING_THRESHOLD_X
            || self.body.velocity.y.abs() > MOVING_THRESHOLD_Y
    }

    /// Coyote frames left.
    #[inline]
    pub fn coyote_time_counter(&self) -> u32 {
        self.coyote_time_counter
    }

    /// One-way grace frames left.
    #[inline]
    pub fn drop_through_grace_frames(&self) -> u32 {
        self.drop_through_grace_frames
    }

    /// Input snapshot used by the next update.
    #[inline]
    pub fn input(&self) -> MotionInput {
        self.input
    }

    /// Ticks simulated so far.
    #[inline]
    pub fn tick(&self) -> u32 {
        self.tick
    }

    /// Set the input snapshot for the next update.
    #[inline]
    pub fn set_input(&mut self, input: MotionInput) {
        self.input = input;
    }

    /// Drain pending events. Call once per tick.
    pub fn take_events(&mut self) -> Vec<MotionEvent> {
        std::mem::take(&mut self.events)
    }

    /// Observable state paired with the caller's hitbox.
    pub fn snapshot(&self, hitbox: &Rect) -> MotionSnapshot {
        MotionSnapshot {
            tick: self.tick,
            hitbox: *hitbox,
            velocity: self.body.velocity,
            in_air: self.in_air,
            is_jumping: self.is_jumping,
            is_moving: self.is_moving(),
            coyote_time_counter: self.coyote_time_counter,
            drop_through_grace_frames: self.drop_through_grace_frames,
        }
    }

    // =========================================================================
    // CALLER HOOKS
    // =========================================================================

    /// Shorten a jump on early release.
    ///
    /// Scales upward velocity by the jump-cut multiplier and drops the sustain
    /// force. Does nothing unless the body is rising from a jump.
    pub fn cut_jump(&mut self) {
        if !self.is_jumping || self.body.velocity.y >= 0.0 {
            return;
        }
        self.body.velocity.y *= self.config.jump_cut_multiplier;
        self.body.remove_forces_of_type(ForceType::Jump);
        self.push_event(MotionEventData::JumpCut);
    }

    /// Set input and run one tick.
    pub fn step(&mut self, input: MotionInput, hitbox: &mut Rect, index: &LevelCollisionIndex) {
        self.set_input(input);
        self.update(hitbox, index);
    }

    // =========================================================================
    // TICK
    // =========================================================================

    /// Run one fixed-timestep tick and move `hitbox`.
    pub fn update(&mut self, hitbox: &mut Rect, index: &LevelCollisionIndex) {
        self.tick = self.tick.wrapping_add(1);
        self.body.position = hitbox.origin();
        self.drop_through_grace_frames = self.drop_through_grace_frames.saturating_sub(1);

        // 1. Drop through a one-way platform
        self.check_drop_through(hitbox, index);

        // 2. Jump input and coyote time
        self.handle_jump(hitbox, index);

        // 3. Gravity
        self.apply_gravity();

        // 4. Horizontal input force
        self.apply_input_force();

        // 5. Integrate forces into velocity
        self.body.apply_forces();
        let acceleration = self.body.acceleration;
        self.body.velocity += acceleration;

        // 6. Resistances
        self.apply_resistances();

        // 7. Velocity clamps
        self.body.clamp_velocity(
            self.config.max_speed_x,
            self.config.max_rise_speed,
            self.config.max_fall_speed,
        );

        // 8. Collision resolution
        let resolution = self.resolve_collisions(hitbox, index);

        // 9. Apply motion
        hitbox.x = resolution.x;
        hitbox.y = resolution.y;
        self.body.position = hitbox.origin();

        // 10. Cleanup and ground truth
        self.cleanup(hitbox, index);
    }

    /// Phase 1: down on a one-way platform starts a drop.
    fn check_drop_through(&mut self, hitbox: &Rect, index: &LevelCollisionIndex) {
        if !self.input.down || self.in_air || self.drop_through_grace_frames > 0 {
            return;
        }

        let sensor = hitbox.sensor_below(self.config.sensor_depth);
        if !index.collides_one_way(&sensor) {
            return;
        }

        self.in_air = true;
        self.body.velocity.y = self.config.drop_through_impulse;
        self.drop_through_grace_frames = self.config.drop_through_grace_frames;
        // Dropping is not walking off a ledge: no coyote jump back up.
        self.coyote_time_counter = 0;
        self.push_event(MotionEventData::DroppedThrough);
    }

    /// Phase 2: start or cancel jumps, then advance the coyote counter.
    fn handle_jump(&mut self, hitbox: &Rect, index: &LevelCollisionIndex) {
        let grounded = !self.in_air;
        let ceiling = index.collides_solid(&hitbox.sensor_above(self.config.sensor_depth));

        let mut jumped = false;
        if self.input.jump {
            let can_jump = !self.is_jumping
                && (grounded || self.coyote_time_counter > 0)
                && !ceiling;
            if can_jump {
                self.start_jump(!grounded);
                jumped = true;
            }
        }

        if self.is_jumping && ceiling && self.body.velocity.y <= 0.0 {
            self.bump_ceiling();
        }

        if jumped {
            self.coyote_time_counter = 0;
        } else if grounded {
            self.coyote_time_counter = self.config.coyote_time_frames;
        } else {
            self.coyote_time_counter = self.coyote_time_counter.saturating_sub(1);
        }
    }

    fn start_jump(&mut self, coyote: bool) {
        self.is_jumping = true;
        self.in_air = true;
        self.body.velocity.y = -self.config.jump_force;
        self.body.remove_forces_of_type(ForceType::Jump);
        self.body.add_timed_force(
            Vector2D::new(0.0, -self.config.jump_hold_force * self.body.mass()),
            ForceType::Jump,
            self.config.jump_max_time_frames,
        );
        self.push_event(MotionEventData::Jumped { coyote });
    }

    /// Phase 3: gravity only while airborne.
    fn apply_gravity(&mut self) {
        if !self.in_air {
            self.body.remove_forces_of_type(ForceType::Gravity);
            return;
        }

        let mut multiplier = 1.0;
        if self.input.down {
            multiplier *= self.config.fast_fall_multiplier;
        }
        if self.at_apex() {
            multiplier *= self.config.apex_gravity_multiplier;
        }

        let pull = self.config.gravity * multiplier * self.body.mass();
        self.body.replace_force_of_type(Vector2D::new(0.0, pull), ForceType::Gravity);
    }

    /// Phase 4: steering force when exactly one direction is held.
    fn apply_input_force(&mut self) {
        let direction = self.input.horizontal();
        if direction == 0 {
            self.body.remove_forces_of_type(ForceType::Input);
            return;
        }

        let mut acceleration = self.config.acceleration;
        if self.in_air && self.at_apex() {
            acceleration *= self.config.apex_acceleration_multiplier;
        }

        let push = direction as f32 * acceleration * self.body.mass();
        self.body.replace_force_of_type(Vector2D::new(push, 0.0), ForceType::Input);
    }

    /// Phase 6: friction on the ground, drag in the air. X only.
    fn apply_resistances(&mut self) {
        let factor = if self.in_air {
            self.config.air_resistance
        } else {
            self.config.ground_friction
        };
        self.body.apply_resistance_xy(factor, 1.0);

        if self.input.horizontal() == 0 && self.body.velocity.x.abs() < self.config.stop_speed {
            self.body.stop_x();
        }
    }

    /// Phase 8: resolve X against solids, then Y against solids and one-way
    /// platforms.
    fn resolve_collisions(&mut self, hitbox: &Rect, index: &LevelCollisionIndex) -> Resolution {
        let x = self.resolve_horizontal(hitbox, index);
        let column = hitbox.with_origin(x, hitbox.y);
        let y = self.resolve_vertical(&column, index);
        Resolution { x, y }
    }

    fn resolve_horizontal(&mut self, hitbox: &Rect, index: &LevelCollisionIndex) -> f32 {
        let dx = self.body.velocity.x;
        let mut target_x = hitbox.x + dx;
        if dx == 0.0 {
            return target_x;
        }

        let moved = hitbox.with_origin(target_x, hitbox.y);
        let mut blocked = false;
        for wall in index.solid_overlaps(&moved) {
            if dx > 0.0 && wall.x >= hitbox.right() - CONTACT_EPSILON {
                target_x = target_x.min(wall.x - hitbox.w);
                blocked = true;
            } else if dx < 0.0 && wall.right() <= hitbox.x + CONTACT_EPSILON {
                target_x = target_x.max(wall.right());
                blocked = true;
            }
        }

        if blocked {
            self.body.stop_x();
        }
        target_x
    }

    fn resolve_vertical(&mut self, column: &Rect, index: &LevelCollisionIndex) -> f32 {
        let dy = self.body.velocity.y;
        let mut target_y = column.y + dy;
        if dy == 0.0 {
            return target_y;
        }

        let moved = column.with_origin(column.x, target_y);
        let mut floor = false;
        let mut ceiling = false;
        for block in index.solid_overlaps(&moved) {
            if dy > 0.0 && block.y >= column.bottom() - CONTACT_EPSILON {
                target_y = target_y.min(block.y - column.h);
                floor = true;
            } else if dy < 0.0 && block.bottom() <= column.y + CONTACT_EPSILON {
                target_y = target_y.max(block.bottom());
                ceiling = true;
            }
        }

        if floor {
            self.land(Surface::Solid, dy);
            return target_y;
        }
        if ceiling {
            self.bump_ceiling();
            return target_y;
        }

        if dy > 0.0 && self.one_way_enabled() {
            if let Some(top) = self.sweep_one_way(column, dy, index) {
                self.land(Surface::OneWay, dy);
                return top - column.h;
            }
        }

        target_y
    }

    /// Sub-stepped downward sweep against one-way platforms.
    ///
    /// Only platforms whose top the hitbox was at or above when the tick
    /// started can catch it. Returns the top edge of the platform hit first.
    fn sweep_one_way(&self, column: &Rect, dy: f32, index: &LevelCollisionIndex) -> Option<f32> {
        let step = (dy / self.config.one_way_sweep_divisor).max(1.0);
        let start_bottom = column.bottom();
        let mut offset = 0.0;

        while offset < dy {
            offset = (offset + step).min(dy);
            let probe = column.translated(0.0, offset);
            let hit = index
                .one_way_overlaps(&probe)
                .filter(|platform| start_bottom <= platform.y + CONTACT_EPSILON)
                .map(|platform| platform.y)
                .reduce(f32::min);
            if hit.is_some() {
                return hit;
            }
        }

        None
    }

    /// Phase 10: expire forces and re-derive `in_air` from the ground sensor.
    fn cleanup(&mut self, hitbox: &mut Rect, index: &LevelCollisionIndex) {
        self.body.purge_expired_forces();

        match self.probe_ground(hitbox, index) {
            Some(ground) => {
                if self.in_air || self.body.velocity.y > 0.0 {
                    self.land(ground.surface, self.body.velocity.y);
                }
                self.is_jumping = false;
                hitbox.y = ground.top - hitbox.h;
                self.body.position = hitbox.origin();
            }
            None => {
                if !self.in_air {
                    self.in_air = true;
                    self.push_event(MotionEventData::LeftGround);
                }
            }
        }
    }

    // =========================================================================
    // HELPERS
    // =========================================================================

    /// Ground under the hitbox, if any.
    ///
    /// A solid overlapping the sensor always counts; when none of them has
    /// its top at or below the hitbox bottom the hitbox is left where it is.
    /// One-way platforms count only for a body that is not rising.
    fn probe_ground(&self, hitbox: &Rect, index: &LevelCollisionIndex) -> Option<Ground> {
        let sensor = hitbox.sensor_below(self.config.sensor_depth);
        let bottom = hitbox.bottom();

        if index.collides_solid(&sensor) {
            let top = index
                .solid_overlaps(&sensor)
                .map(|block| block.y)
                .filter(|&top| top >= bottom - CONTACT_EPSILON)
                .reduce(f32::min)
                .unwrap_or(bottom);
            return Some(Ground { surface: Surface::Solid, top });
        }

        if !self.one_way_enabled() || self.body.velocity.y < 0.0 {
            return None;
        }
        index
            .one_way_overlaps(&sensor)
            .map(|platform| platform.y)
            .filter(|&top| bottom <= top + CONTACT_EPSILON)
            .reduce(f32::min)
            .map(|top| Ground { surface: Surface::OneWay, top })
    }

    /// One-way platforms are ignored during drop-through grace and while
    /// rising without down held.
    fn one_way_enabled(&self) -> bool {
        if self.drop_through_grace_frames > 0 {
            return false;
        }
        let ascending = self.body.velocity.y < 0.0;
        !(ascending && !self.input.down)
    }

    #[inline]
    fn at_apex(&self) -> bool {
        self.body.velocity.y.abs() < self.config.apex_threshold
    }

    fn land(&mut self, surface: Surface, impact_speed: f32) {
        let was_in_air = self.in_air;
        self.body.stop_y();
        self.in_air = false;
        self.is_jumping = false;
        self.coyote_time_counter = self.config.coyote_time_frames;
        self.body.remove_forces_of_type(ForceType::Jump);
        self.body.remove_forces_of_type(ForceType::Gravity);
        if was_in_air {
            self.push_event(MotionEventData::Landed { surface, impact_speed });
        }
    }

    fn bump_ceiling(&mut self) {
        self.body.velocity.y = self.config.fall_speed_after_collision;
        self.is_jumping = false;
        self.body.remove_forces_of_type(ForceType::Jump);
        self.push_event(MotionEventData::CeilingBump);
    }

    fn push_event(&mut self, data: MotionEventData) {
        #[cfg(feature = "debug-tracing")]
        tracing::trace!(tick = self.tick, ?data, "motion transition");
        self.events.push(MotionEvent::new(self.tick, data));
    }
}

//! Physics Body
//!
//! Point-mass body that accumulates forces into acceleration and integrates
//! velocity and position once per tick.
//!
//! Acceleration is recomputed from scratch on every `apply_forces` call and is
//! never carried over between ticks.

use serde::{Serialize, Deserialize};

use crate::core::vec2::Vector2D;
use super::force::{Force, ForceType};

/// A body driven by forces.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PhysicsBody {
    /// Position (top-left of the owner's hitbox)
    pub position: Vector2D,
    /// Velocity in pixels per tick
    pub velocity: Vector2D,
    /// Acceleration of the current tick
    pub acceleration: Vector2D,
    /// Mass, always > 0
    mass: f32,
    /// Forces acting on the body (unordered)
    forces: Vec<Force>,
}

impl PhysicsBody {
    /// Create a body at rest.
    ///
    /// `mass` must be positive; configuration validation guarantees it.
    pub fn new(position: Vector2D, mass: f32) -> Self {
        debug_assert!(mass > 0.0, "mass must be positive");
        Self {
            position,
            velocity: Vector2D::ZERO,
            acceleration: Vector2D::ZERO,
            mass,
            forces: Vec::with_capacity(4),
        }
    }

    /// Body mass.
    #[inline]
    pub fn mass(&self) -> f32 {
        self.mass
    }

    /// All forces, active or not.
    #[inline]
    pub fn forces(&self) -> &[Force] {
        &self.forces
    }

    /// Number of forces currently held.
    #[inline]
    pub fn force_count(&self) -> usize {
        self.forces.len()
    }

    // =========================================================================
    // FORCE MANAGEMENT
    // =========================================================================

    /// Add a permanent force.
    pub fn add_force(&mut self, vector: Vector2D, kind: ForceType) {
        self.forces.push(Force::permanent(vector, kind));
    }

    /// Add a force that expires after `frames` ticks.
    pub fn add_timed_force(&mut self, vector: Vector2D, kind: ForceType, frames: u32) {
        self.forces.push(Force::timed(vector, kind, frames));
    }

    /// Drop every force of the given type.
    pub fn remove_forces_of_type(&mut self, kind: ForceType) {
        self.forces.retain(|f| f.kind != kind);
    }

    /// Replace all forces of a type with a single permanent one.
    ///
    /// This is the path for continuous forces (gravity, input) that are
    /// re-derived every tick; it keeps at most one force per slot.
    pub fn replace_force_of_type(&mut self, vector: Vector2D, kind: ForceType) {
        self.remove_forces_of_type(kind);
        self.add_force(vector, kind);
    }

    /// Whether an active force of the type is present.
    pub fn has_force_of_type(&self, kind: ForceType) -> bool {
        self.forces.iter().any(|f| f.kind == kind && f.is_active())
    }

    /// Sum of all active forces of the type.
    pub fn total_force_of_type(&self, kind: ForceType) -> Vector2D {
        self.forces
            .iter()
            .filter(|f| f.kind == kind && f.is_active())
            .fold(Vector2D::ZERO, |acc, f| acc + f.vector)
    }

    // =========================================================================
    // INTEGRATION
    // =========================================================================

    /// Recompute acceleration from active forces.
    pub fn apply_forces(&mut self) {
        let inv_mass = 1.0 / self.mass;
        self.acceleration = Vector2D::ZERO;
        for force in self.forces.iter().filter(|f| f.is_active()) {
            self.acceleration += force.vector * inv_mass;
        }
    }

    /// Advance every force timer by one tick and drop the expired ones.
    pub fn purge_expired_forces(&mut self) {
        self.forces.retain_mut(|f| f.update());
    }

    /// Full integration step: forces, velocity, position, then force expiry.
    pub fn update_physics(&mut self) {
        self.apply_forces();
        self.velocity += self.acceleration;
        self.position += self.velocity;
        self.purge_expired_forces();
    }

    // =========================================================================
    // VELOCITY UTILITIES
    // =========================================================================

    /// Clamp the velocity magnitude, preserving direction.
    pub fn limit_velocity(&mut self, max: f32) {
        self.velocity.limit(max);
    }

    /// Clamp each velocity component independently to `±max`.
    ///
    /// A negative cap pins the component to that cap instead of panicking.
    pub fn limit_velocity_xy(&mut self, max_x: f32, max_y: f32) {
        self.velocity.x = self.velocity.x.max(-max_x).min(max_x);
        self.velocity.y = self.velocity.y.max(-max_y).min(max_y);
    }

    /// Clamp X symmetrically and Y asymmetrically: rising (negative Y) is
    /// capped at `max_rise`, falling at `max_fall`.
    pub fn clamp_velocity(&mut self, max_x: f32, max_rise: f32, max_fall: f32) {
        self.velocity.x = self.velocity.x.max(-max_x).min(max_x);
        if self.velocity.y < 0.0 {
            self.velocity.y = self.velocity.y.max(-max_rise);
        } else {
            self.velocity.y = self.velocity.y.min(max_fall);
        }
    }

    /// Scale velocity uniformly.
    pub fn apply_resistance(&mut self, factor: f32) {
        self.velocity *= factor;
    }

    /// Scale velocity per axis.
    pub fn apply_resistance_xy(&mut self, factor_x: f32, factor_y: f32) {
        self.velocity.x *= factor_x;
        self.velocity.y *= factor_y;
    }

    /// Zero the velocity.
    pub fn stop(&mut self) {
        self.velocity = Vector2D::ZERO;
    }

    /// Zero horizontal velocity.
    pub fn stop_x(&mut self) {
        self.velocity.x = 0.0;
    }

    /// Zero vertical velocity.
    pub fn stop_y(&mut self) {
        self.velocity.y = 0.0;
    }
}

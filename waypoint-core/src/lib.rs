#![cfg_attr(not(feature = "std"), no_std)]

use core::time::Duration;

#[cfg(feature = "std")]
pub mod setup;

#[cfg(feature = "std")]
pub use setup::{spawn_groups, Quadrant};

/// A 2D vector used for positions and displacements
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector2D {
    pub x: f64,
    pub y: f64,
}

impl Vector2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    pub fn magnitude(&self) -> f64 {
        #[cfg(feature = "std")]
        {
            (self.x * self.x + self.y * self.y).sqrt()
        }
        #[cfg(not(feature = "std"))]
        {
            libm::sqrt(self.x * self.x + self.y * self.y)
        }
    }

    pub fn normalize(&self) -> Self {
        let mag = self.magnitude();
        if mag > 0.0 {
            Self {
                x: self.x / mag,
                y: self.y / mag,
            }
        } else {
            Self::zero()
        }
    }

    pub fn distance(&self, other: &Vector2D) -> f64 {
        (*other - *self).magnitude()
    }
}

impl core::ops::Add for Vector2D {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl core::ops::Sub for Vector2D {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl core::ops::Mul<f64> for Vector2D {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
        }
    }
}

/// A point that travels in a straight line toward a fixed target
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    position: Vector2D,
    target: Vector2D,
    moving: bool,
}

impl Entity {
    /// An entity whose start already equals its target begins arrived.
    pub fn new(start: Vector2D, target: Vector2D) -> Self {
        Self {
            position: start,
            target,
            moving: start != target,
        }
    }

    pub fn position(&self) -> Vector2D {
        self.position
    }

    pub fn target(&self) -> Vector2D {
        self.target
    }

    pub fn is_moving(&self) -> bool {
        self.moving
    }

    pub fn distance_to_target(&self) -> f64 {
        self.position.distance(&self.target)
    }

    /// Moves one tick toward the target.
    ///
    /// When the remaining distance is at most `step` the entity lands on the
    /// target and stops; otherwise it moves exactly `step` along the
    /// direction to the target. A step too small to change the position at
    /// all also lands on the target, so the entity always arrives. Calling
    /// this after arrival does nothing.
    pub fn advance(&mut self, step: f64) {
        if !self.moving {
            return;
        }

        let remaining = self.target - self.position;
        let distance = remaining.magnitude();
        let next = self.position + remaining.normalize() * step;

        if distance <= step || next == self.position {
            self.position = self.target;
            self.moving = false;
        } else {
            self.position = next;
        }
    }
}

/// Configuration for the simulation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimConfig {
    pub width: f64,
    pub height: f64,
    /// Maximum distance an entity covers in one tick
    pub step: f64,
    /// Entities per group
    pub entity_count: usize,
    /// Pause after each tick
    pub pace: Duration,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: 10.0,
            height: 10.0,
            step: 1.0,
            entity_count: 5,
            pace: Duration::from_millis(500),
        }
    }
}

//! Random placement of entities inside a region of the plane.

use rand::Rng;

use crate::{Entity, SimConfig, Vector2D};

/// Half-open rectangle `[x_min, x_max) x [y_min, y_max)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quadrant {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Quadrant {
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// The quadrant touching the origin.
    pub fn lower_left(width: f64, height: f64) -> Self {
        Self::new(0.0, width / 2.0, 0.0, height / 2.0)
    }

    /// The quadrant diagonally opposite the origin.
    pub fn upper_right(width: f64, height: f64) -> Self {
        Self::new(width / 2.0, width, height / 2.0, height)
    }

    pub fn contains(&self, point: Vector2D) -> bool {
        point.x >= self.x_min
            && point.x < self.x_max
            && point.y >= self.y_min
            && point.y < self.y_max
    }

    /// Draws a point uniformly from the quadrant.
    pub fn random_point<R: Rng + ?Sized>(&self, rng: &mut R) -> Vector2D {
        let point = Vector2D::new(
            rng.gen_range(self.x_min..self.x_max),
            rng.gen_range(self.y_min..self.y_max),
        );
        debug_assert!(self.contains(point));
        point
    }

    /// An entity with start and target both drawn from this quadrant.
    pub fn random_entity<R: Rng + ?Sized>(&self, rng: &mut R) -> Entity {
        let start = self.random_point(rng);
        let target = self.random_point(rng);
        Entity::new(start, target)
    }
}

/// Builds both groups, one entity of each per iteration.
///
/// The first group lives in the lower-left quadrant of the configured plane,
/// the second in the upper-right one.
pub fn spawn_groups<R: Rng + ?Sized>(
    config: &SimConfig,
    rng: &mut R,
) -> (Vec<Entity>, Vec<Entity>) {
    let lower = Quadrant::lower_left(config.width, config.height);
    let upper = Quadrant::upper_right(config.width, config.height);

    let mut first = Vec::with_capacity(config.entity_count);
    let mut second = Vec::with_capacity(config.entity_count);

    for _ in 0..config.entity_count {
        first.push(lower.random_entity(rng));
        second.push(upper.random_entity(rng));
    }

    (first, second)
}

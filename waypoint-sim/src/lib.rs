//! Two-group waypoint simulation: a shared console and the workers that
//! drive each group toward its targets.

pub mod cli;
pub mod console;
pub mod runner;

pub use cli::Settings;
pub use console::{Console, TraceFormat};
pub use runner::{run, run_group, RunSummary};

use waypoint_core::Entity;
use waypoint_shared::{GroupKind, Position, Report};

/// Describes an entity's current state as a trace record
pub trait Describe {
    fn report(&self, group: GroupKind) -> Report;
}

impl Describe for Entity {
    fn report(&self, group: GroupKind) -> Report {
        let position = self.position();
        Report::new(group, Position::new(position.x, position.y), self.is_moving())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use waypoint_core::Vector2D;

    #[test]
    fn test_entity_report() {
        let mut entity = Entity::new(Vector2D::new(0.0, 0.0), Vector2D::new(0.5, 0.0));
        assert_eq!(
            entity.report(GroupKind::Legal).to_string(),
            "Legal at (0, 0) moving: yes"
        );

        entity.advance(1.0);
        assert_eq!(
            entity.report(GroupKind::Physical).to_string(),
            "Physical at (0.5, 0) moving: no"
        );
    }
}

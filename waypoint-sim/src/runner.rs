use std::io::{self, Write};
use std::thread::{self, Scope, ScopedJoinHandle};

use anyhow::{anyhow, Context, Result};
use waypoint_core::{Entity, SimConfig};
use waypoint_shared::{GroupKind, COMPLETION_LINE};

use crate::{Console, Describe};

/// Steps taken by each group during a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    pub legal_steps: u64,
    pub physical_steps: u64,
}

impl RunSummary {
    pub fn total_steps(&self) -> u64 {
        self.legal_steps + self.physical_steps
    }
}

/// Drives one group to completion.
///
/// Entities are drained strictly in order: each one is advanced, reported and
/// paced until it arrives before the next one starts. Returns the number of
/// steps taken.
pub fn run_group<W: Write>(
    group: GroupKind,
    entities: &mut [Entity],
    config: &SimConfig,
    console: &Console<W>,
) -> io::Result<u64> {
    let mut steps = 0;

    for (index, entity) in entities.iter_mut().enumerate() {
        let mut entity_steps = 0;

        while entity.is_moving() {
            entity.advance(config.step);
            console.emit(&entity.report(group))?;
            entity_steps += 1;
            thread::sleep(config.pace);
        }

        log::debug!("{} entity {} arrived after {} steps", group, index, entity_steps);
        steps += entity_steps;
    }

    log::info!("{} group finished after {} steps", group, steps);
    Ok(steps)
}

/// Runs both groups on their own threads, then prints the completion line.
pub fn run<W: Write + Send>(
    legal: &mut [Entity],
    physical: &mut [Entity],
    config: &SimConfig,
    console: &Console<W>,
) -> Result<RunSummary> {
    let summary = thread::scope(|s| -> Result<RunSummary> {
        let legal_handle = spawn_worker(s, GroupKind::Legal, legal, config, console)?;
        let physical_handle = spawn_worker(s, GroupKind::Physical, physical, config, console)?;

        // Join both before looking at either result.
        let legal_steps = join_worker(GroupKind::Legal, legal_handle);
        let physical_steps = join_worker(GroupKind::Physical, physical_handle);

        Ok(RunSummary {
            legal_steps: legal_steps?,
            physical_steps: physical_steps?,
        })
    })?;

    console
        .write_line(COMPLETION_LINE)
        .context("Failed to write completion line")?;

    Ok(summary)
}

fn spawn_worker<'scope, W: Write + Send>(
    scope: &'scope Scope<'scope, '_>,
    group: GroupKind,
    entities: &'scope mut [Entity],
    config: &'scope SimConfig,
    console: &'scope Console<W>,
) -> Result<ScopedJoinHandle<'scope, io::Result<u64>>> {
    log::debug!("Starting {} worker with {} entities", group, entities.len());

    thread::Builder::new()
        .name(group.label().to_lowercase())
        .spawn_scoped(scope, move || run_group(group, entities, config, console))
        .with_context(|| format!("Failed to spawn {} worker", group))
}

fn join_worker(group: GroupKind, handle: ScopedJoinHandle<'_, io::Result<u64>>) -> Result<u64> {
    handle
        .join()
        .map_err(|_| anyhow!("{} worker panicked", group))?
        .with_context(|| format!("{} worker failed to write trace", group))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use waypoint_core::Vector2D;

    fn fast_config(step: f64) -> SimConfig {
        SimConfig {
            step,
            pace: Duration::ZERO,
            ..SimConfig::default()
        }
    }

    fn output(console: Console<Vec<u8>>) -> Vec<String> {
        String::from_utf8(console.into_inner())
            .unwrap()
            .lines()
            .map(str::to_owned)
            .collect()
    }

    #[test]
    fn test_run_group_reports_every_step() {
        let mut entities = vec![Entity::new(Vector2D::zero(), Vector2D::new(3.0, 0.0))];
        let console = Console::new(Vec::new(), Default::default());

        let steps =
            run_group(GroupKind::Legal, &mut entities, &fast_config(1.0), &console).unwrap();

        assert_eq!(steps, 3);
        assert!(!entities[0].is_moving());
        assert_eq!(
            output(console),
            vec![
                "Legal at (1, 0) moving: yes",
                "Legal at (2, 0) moving: yes",
                "Legal at (3, 0) moving: no",
            ]
        );
    }

    #[test]
    fn test_run_group_drains_entities_in_order() {
        let mut entities = vec![
            Entity::new(Vector2D::zero(), Vector2D::new(0.0, 2.0)),
            Entity::new(Vector2D::new(5.0, 5.0), Vector2D::new(5.0, 5.0)),
            Entity::new(Vector2D::new(1.0, 1.0), Vector2D::new(1.5, 1.0)),
        ];
        let console = Console::new(Vec::new(), Default::default());

        let steps =
            run_group(GroupKind::Physical, &mut entities, &fast_config(1.0), &console).unwrap();

        assert_eq!(steps, 3);
        assert!(entities.iter().all(|e| !e.is_moving()));
        assert_eq!(
            output(console),
            vec![
                "Physical at (0, 1) moving: yes",
                "Physical at (0, 2) moving: no",
                "Physical at (1.5, 1) moving: no",
            ]
        );
    }

    #[test]
    fn test_run_prints_completion_line_last() {
        let mut legal = vec![Entity::new(Vector2D::zero(), Vector2D::new(2.0, 0.0))];
        let mut physical = vec![Entity::new(
            Vector2D::new(6.0, 6.0),
            Vector2D::new(6.0, 9.0),
        )];
        let console = Console::new(Vec::new(), Default::default());

        let summary = run(&mut legal, &mut physical, &fast_config(1.0), &console).unwrap();

        assert_eq!(
            summary,
            RunSummary {
                legal_steps: 2,
                physical_steps: 3
            }
        );
        assert_eq!(summary.total_steps(), 5);

        let lines = output(console);
        assert_eq!(lines.len(), 6);
        assert_eq!(lines.last().map(String::as_str), Some(COMPLETION_LINE));
    }

    #[test]
    fn test_run_with_empty_groups() {
        let console = Console::new(Vec::new(), Default::default());

        let summary = run(&mut [], &mut [], &fast_config(1.0), &console).unwrap();

        assert_eq!(summary, RunSummary::default());
        assert_eq!(output(console), vec![COMPLETION_LINE]);
    }
}

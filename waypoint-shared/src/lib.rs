#![cfg_attr(not(feature = "std"), no_std)]

use core::fmt;

use serde::{Deserialize, Serialize};

/// Line printed once both groups have finished
pub const COMPLETION_LINE: &str = "Simulation completed!";

/// A 2D position on the simulation plane
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One of the two independent entity groups
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum GroupKind {
    Legal,
    Physical,
}

impl GroupKind {
    pub const ALL: [GroupKind; 2] = [GroupKind::Legal, GroupKind::Physical];

    /// Label used in trace output
    pub fn label(&self) -> &'static str {
        match self {
            GroupKind::Legal => "Legal",
            GroupKind::Physical => "Physical",
        }
    }
}

impl fmt::Display for GroupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// State of a single entity after one simulation step
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Report {
    pub group: GroupKind,
    pub position: Position,
    pub moving: bool,
}

impl Report {
    pub fn new(group: GroupKind, position: Position, moving: bool) -> Self {
        Self {
            group,
            position,
            moving,
        }
    }

    #[cfg(feature = "std")]
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Renders `<Label> at (<x>, <y>) moving: <yes|no>`
impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at ({}, {}) moving: {}",
            self.group,
            self.position.x,
            self.position.y,
            if self.moving { "yes" } else { "no" }
        )
    }
}

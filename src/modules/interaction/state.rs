//! Gesture phases, pointer events and the commands the controller emits.

use crate::data::Point;

/// What a drag moves, resolved once on the first move after a pick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragTarget {
    /// A single anchor
    Anchor(usize),
    /// The coincident first and last anchors of a closed path
    ClosedEndpoints,
    /// The pick landed on a marker but no anchor was within tolerance
    Nothing,
}

/// Where the controller is within one press/release cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Pressed,
    Picked,
    Dragging(DragTarget),
}

/// Raw pointer notifications delivered by the event source
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Press { pos: Point, in_bounds: bool },
    Release { pos: Point, in_bounds: bool },
    Move { pos: Point, in_bounds: bool },
    /// The press landed on an existing anchor marker
    Hit { marker_index: usize },
}

impl PointerEvent {
    pub fn in_bounds(&self) -> bool {
        match self {
            Self::Press { in_bounds, .. }
            | Self::Release { in_bounds, .. }
            | Self::Move { in_bounds, .. } => *in_bounds,
            Self::Hit { .. } => true,
        }
    }
}

/// Side effects requested by a transition
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    AddAnchor(Point),
    DeleteAnchor(isize),
    ReplaceAnchor(isize, Point),
    Redraw,
}

/// Result of dispatching one event
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub next: Phase,
    pub closed: bool,
    pub commands: Vec<Command>,
}

impl Transition {
    /// A transition that changes nothing
    pub fn stay(phase: Phase, closed: bool) -> Self {
        Self {
            next: phase,
            closed,
            commands: Vec::new(),
        }
    }

    pub fn to(next: Phase, closed: bool, commands: Vec<Command>) -> Self {
        Self {
            next,
            closed,
            commands,
        }
    }

    pub fn requests_redraw(&self) -> bool {
        self.commands.contains(&Command::Redraw)
    }
}

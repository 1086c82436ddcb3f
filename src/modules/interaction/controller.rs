//! The point-editing gesture state machine
//!
//! Two gestures are recognised:
//!
//! - select: press => release
//! - drag: press => hit => move => ... => release
//!
//! A select on empty canvas appends an anchor. A select on an existing anchor
//! deletes it, except for the start anchor, which closes the path (the start
//! is copied as a new last anchor) or, when already closed, reopens it by
//! dropping both the first and the last anchor. A drag moves the anchor under
//! the pointer; on a closed path dragging the start anchor moves the first and
//! last anchor together.
//!
//! [`InteractionController::dispatch`] is pure: it reads the model and returns
//! the next phase together with the commands to run. [`InteractionController::handle`]
//! commits the transition and applies the model commands, leaving
//! [`Command::Redraw`] to the caller.

use super::state::{Command, DragTarget, Phase, PointerEvent, Transition};
use crate::config::CanvasConfig;
use crate::constants::DEFAULT_TOLERANCE;
use crate::data::curve_model::HitTest;
use crate::data::{CurveModel, Point};
use crate::error::CanvasResult;
use log::{debug, info};

#[derive(Debug, Clone)]
pub struct InteractionController {
    phase: Phase,
    closed: bool,
    tolerance: f64,
    hit_test: HitTest,
}

impl Default for InteractionController {
    fn default() -> Self {
        Self::new(DEFAULT_TOLERANCE, HitTest::default())
    }
}

impl InteractionController {
    pub fn new(tolerance: f64, hit_test: HitTest) -> Self {
        Self {
            phase: Phase::Idle,
            closed: false,
            tolerance,
            hit_test,
        }
    }

    pub fn from_config(config: &CanvasConfig) -> Self {
        Self::new(config.tolerance, config.hit_test)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    pub fn hit_test(&self) -> HitTest {
        self.hit_test
    }

    /// Drop back to idle, keeping the closed-path marker
    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
    }

    /// Clear the closed-path marker when the model no longer has coincident endpoints.
    /// Runs after every handled event and after direct edits of the anchors.
    pub fn sync_with(&mut self, model: &CurveModel) {
        if self.closed && (model.len() < 2 || model.first() != model.last()) {
            info!("path endpoints diverged; marking path as open");
            self.closed = false;
        }
    }

    /// Compute the transition for `event` without touching any state
    pub fn dispatch(&self, event: &PointerEvent, model: &CurveModel) -> Transition {
        if !event.in_bounds() {
            return Transition::stay(self.phase, self.closed);
        }

        match (self.phase, *event) {
            // a new press always starts a fresh cycle
            (_, PointerEvent::Press { .. }) => Transition::to(Phase::Pressed, self.closed, vec![]),

            (Phase::Pressed, PointerEvent::Hit { .. }) => {
                Transition::to(Phase::Picked, self.closed, vec![])
            }
            (_, PointerEvent::Hit { .. }) => Transition::stay(self.phase, self.closed),

            (Phase::Picked, PointerEvent::Move { pos, .. }) => {
                let target = self.resolve_drag_target(pos, model);
                Transition::to(
                    Phase::Dragging(target),
                    self.closed,
                    drag_commands(target, pos),
                )
            }
            (Phase::Dragging(target), PointerEvent::Move { pos, .. }) => {
                Transition::to(self.phase, self.closed, drag_commands(target, pos))
            }
            (_, PointerEvent::Move { .. }) => Transition::stay(self.phase, self.closed),

            (Phase::Pressed, PointerEvent::Release { pos, .. }) => self.select(pos, false, model),
            (Phase::Picked, PointerEvent::Release { pos, .. }) => self.select(pos, true, model),
            (Phase::Dragging(_), PointerEvent::Release { .. }) => {
                Transition::to(Phase::Idle, self.closed, vec![])
            }
            (Phase::Idle, PointerEvent::Release { .. }) => Transition::stay(Phase::Idle, self.closed),
        }
    }

    /// Commit the transition for `event` and apply its model commands.
    ///
    /// The returned commands still contain [`Command::Redraw`] for the caller.
    pub fn handle(
        &mut self,
        event: &PointerEvent,
        model: &mut CurveModel,
    ) -> CanvasResult<Vec<Command>> {
        let transition = self.dispatch(event, model);

        if transition.next != self.phase {
            debug!("{:?} -> {:?} on {:?}", self.phase, transition.next, event);
        }
        if transition.closed != self.closed {
            if transition.closed {
                info!("path closed with {} anchors", model.len() + 1);
            } else {
                info!("path reopened");
            }
        }
        self.phase = transition.next;
        self.closed = transition.closed;

        for command in &transition.commands {
            debug!("apply {:?}", command);
            apply(command, model)?;
        }
        // an anchor appended after the closing copy opens the path again
        self.sync_with(model);

        Ok(transition.commands)
    }

    fn resolve_drag_target(&self, pos: Point, model: &CurveModel) -> DragTarget {
        if self.closed && model.is_first_anchor(pos.x, pos.y, self.tolerance, self.hit_test) {
            return DragTarget::ClosedEndpoints;
        }
        match model.find_nearest_with(pos.x, pos.y, self.tolerance, self.hit_test) {
            Some(index) => DragTarget::Anchor(index),
            None => DragTarget::Nothing,
        }
    }

    fn select(&self, pos: Point, picked: bool, model: &CurveModel) -> Transition {
        let mut closed = self.closed;
        let mut commands = Vec::new();

        if !picked {
            commands.push(Command::AddAnchor(pos));
        } else if model.is_first_anchor(pos.x, pos.y, self.tolerance, self.hit_test) {
            if closed {
                commands.push(Command::DeleteAnchor(0));
                commands.push(Command::DeleteAnchor(-1));
                closed = false;
            } else if let Some(first) = model.first() {
                commands.push(Command::AddAnchor(first));
                closed = true;
            }
        } else if let Some(index) =
            model.find_nearest_with(pos.x, pos.y, self.tolerance, self.hit_test)
        {
            commands.push(Command::DeleteAnchor(index as isize));
        }

        commands.push(Command::Redraw);
        Transition::to(Phase::Idle, closed, commands)
    }
}

fn drag_commands(target: DragTarget, pos: Point) -> Vec<Command> {
    match target {
        DragTarget::Anchor(index) => vec![Command::ReplaceAnchor(index as isize, pos), Command::Redraw],
        DragTarget::ClosedEndpoints => vec![
            Command::ReplaceAnchor(0, pos),
            Command::ReplaceAnchor(-1, pos),
            Command::Redraw,
        ],
        DragTarget::Nothing => vec![Command::Redraw],
    }
}

fn apply(command: &Command, model: &mut CurveModel) -> CanvasResult<()> {
    match *command {
        Command::AddAnchor(p) => model.add_anchor(p.x, p.y),
        Command::DeleteAnchor(index) => {
            model.delete_anchor_at(index)?;
        }
        Command::ReplaceAnchor(index, p) => model.replace_anchor_at(index, p.x, p.y)?,
        Command::Redraw => {}
    }
    Ok(())
}

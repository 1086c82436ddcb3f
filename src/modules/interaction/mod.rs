//! Pointer-driven editing of the anchor list
//!
//! - [controller](controller/index.html) - the press / hit / move / release state machine
//! - [state](state/index.html) - phases, pointer events and commands

pub mod controller;
pub mod state;

pub use controller::InteractionController;
pub use state::{Command, DragTarget, Phase, PointerEvent, Transition};

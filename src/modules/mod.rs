//! Modules for evaluating, editing and rendering a Bézier curve
//!
//! - [eval](eval/index.html) - Bernstein evaluation of the anchor list
//! - [interaction](interaction/index.html) - the gesture state machine
//! - [render](render/index.html) - the rendering collaborator and its bitmap implementation
//! - [session](session/index.html) - gesture scripts and event sources

pub mod eval;
pub mod interaction;
pub mod render;
pub mod session;

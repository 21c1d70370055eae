//! Timer-driven carousel index selection.
//!
//! The home page hero and the about page testimonials each own one
//! [`RotationController`]. It advances automatically, pauses on manual
//! navigation or hover, and resumes after a cooldown.

pub mod controller;
pub mod state;

pub use controller::RotationController;
pub use state::{HoverRelease, RotationState, RotationTiming};

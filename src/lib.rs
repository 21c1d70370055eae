//! Headless core of the HRM showcase.
//!
//! The window, drawing and input mapping live in the binary. Everything with
//! state or timing lives here and reads time through [`clock::Clock`]:
//! - [`rotation`]: auto-advancing carousels with pause, cooldown and hover.
//! - [`gallery`]: category filter, likes and the lightbox.
//! - [`contact`]: form checks, `mailto:` composition and the simulated send.

pub mod assets;
pub mod clock;
pub mod config;
pub mod constants;
pub mod contact;
pub mod content;
pub mod error;
pub mod gallery;
pub mod rotation;

pub use error::{Error, Result};

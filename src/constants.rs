use std::time::Duration;

pub const RENDER_WIDTH: i32 = 1280;           // Logical width of the showcase window
pub const RENDER_HEIGHT: i32 = 720;           // Logical height of the showcase window
pub const FPS: u32 = 60;                      // Frames per second
pub const FRAME_TIME: f32 = 1.0 / FPS as f32; // Time per frame (seconds)

pub const AUTO_ADVANCE_INTERVAL: Duration = Duration::from_millis(5000); // Carousel tick period
pub const MANUAL_COOLDOWN: Duration = Duration::from_millis(8000);       // Pause after manual navigation

pub const CROSSFADE_DURATION: f32 = 0.8;      // Hero image crossfade (seconds)
pub const KEN_BURNS_DURATION: f32 = 5.0;      // Slow pan while a hero image is shown (seconds)

pub const CONTACT_RECIPIENT: &str = "hrm@lawcollege.lk";
pub const CONTACT_SEND_DELAY: Duration = Duration::from_millis(1500);  // Simulated "Sending..." phase
pub const CONTACT_RESET_DELAY: Duration = Duration::from_millis(3000); // Success banner before the form clears

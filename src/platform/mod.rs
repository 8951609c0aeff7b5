//! Platform abstraction layer
//!
//! Handles the native side of:
//! - Time (wall-clock frame deltas)
//! - Input events (movement keys, quit request)

pub mod input;
pub mod time;

pub use input::{InputState, MovementKeys};
pub use time::FrameClock;

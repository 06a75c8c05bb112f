//! Session state and image intake

/// Loading uploads from disk
pub mod intake;
/// The held image and print availability
pub mod state;

pub use state::{ImageReference, SessionState};

/// Easing curves applied to phase progress.
pub mod ease;

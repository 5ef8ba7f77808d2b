//! Shuffled flashcard study sessions

pub mod session;

pub use session::{shuffle, StudySession, ToggleOutcome};

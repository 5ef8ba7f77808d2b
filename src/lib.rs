//! Core library for recite, a personal English-sentence review tool.
//!
//! Entries live in a spreadsheet behind an Apps Script web app; the library
//! loads them wholesale and derives every view in memory: day-key grouping,
//! the month calendar, and shuffled flashcard study sessions.

pub mod calendar;
pub mod config;
pub mod entries;
pub mod remote;
pub mod study;

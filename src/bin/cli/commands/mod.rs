pub mod add;
pub mod calendar;
pub mod config;
pub mod list;
pub mod stats;
pub mod study;

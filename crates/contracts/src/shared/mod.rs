pub mod calendar;
pub mod indicators;

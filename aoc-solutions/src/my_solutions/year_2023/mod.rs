//! Advent of Code 2023

pub mod day_19;
pub mod day_25;
pub mod day_5;
pub mod day_7;

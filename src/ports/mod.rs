//! Ports (trait boundaries) between the game core and its drivers.

pub mod strategy;

pub use strategy::Strategy;

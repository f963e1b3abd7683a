//! Game pipelines: strategy implementations and head-to-head evaluation

pub mod evaluation;
pub mod strategies;

pub use evaluation::{Evaluation, EvaluationSummary, play_game};
pub use strategies::{OptimalStrategy, RandomStrategy};

pub use crate::ports::Strategy;

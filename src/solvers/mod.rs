//! Topic solvers
//!
//! Each solver is a pure, synchronous function from question text to a
//! fully-populated display-field record. Solvers never return errors:
//! the interest solver reports insufficient extraction through an `error`
//! field on the record, the trigonometry solver falls back to a default
//! side pair.

pub mod interest;
pub mod trigonometry;

use crate::models::{Solution, Topic};

/// Dispatch a question to the solver for its topic
pub fn solve(topic: Topic, question: &str) -> Solution {
    match topic {
        Topic::Trigonometry => Solution::Trigonometry(trigonometry::solve(question)),
        Topic::CompoundInterest => Solution::CompoundInterest(interest::solve(question)),
    }
}

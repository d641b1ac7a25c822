//! Compound interest solver
//!
//! Extracts principal/amount/time/rate from the question text with ordered
//! regex patterns, infers which quantity is missing, computes it with the
//! closed-form compound-interest formulas, and fills a display-field record
//! for the worked solution.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, warn};

use crate::fraction::{best_rational, fraction_strings, int_pow};
use crate::models::InterestSolution;

lazy_static! {
    /// Principal patterns, priority order: first match wins
    static ref PRINCIPAL_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"₹\s*(\d+(?:,\d+)*)\s+becomes").unwrap(),
        Regex::new(r"principal\s*(?:of|is|:|=)?\s*(?:₹|rs\.?|rupees?)?\s*(\d+(?:,\d+)*)").unwrap(),
        Regex::new(r"sum\s*(?:of|is|:|=)?\s*(?:₹|rs\.?|rupees?)?\s*(\d+(?:,\d+)*)").unwrap(),
        Regex::new(r"invest(?:ed|s)?\s*(?:₹|rs\.?)?\s*(\d+(?:,\d+)*)").unwrap(),
    ];
    static ref AMOUNT_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"becomes\s*(?:₹|rs\.?)?\s*(\d+(?:,\d+)*)").unwrap(),
        Regex::new(r"(?:grows to|amounts to)\s*(?:₹|rs\.?)?\s*(\d+(?:,\d+)*)").unwrap(),
        Regex::new(r"final\s*amount\s*(?:is|:|=)?\s*(?:₹|rs\.?)?\s*(\d+(?:,\d+)*)").unwrap(),
    ];
    static ref TIME_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"(?:in|after|for)\s*(\d+)\s*years?").unwrap(),
        Regex::new(r"(\d+)\s*years?").unwrap(),
    ];
    static ref RATE_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"(\d+(?:\.\d+)?)\s*%").unwrap(),
        Regex::new(r"rate\s*(?:of|is|:|=)?\s*(\d+(?:\.\d+)?)").unwrap(),
        Regex::new(r"(\d+(?:\.\d+)?)\s*percent").unwrap(),
    ];
}

/// Solve a compound interest word problem.
///
/// Exactly one of {rate, amount, principal} may be missing, with time
/// always required. Anything else yields the default record with the
/// `error` field set; this function never fails.
pub fn solve(question: &str) -> InterestSolution {
    let question_lower = question.to_lowercase();

    let principal = extract_principal(&question_lower);
    let amount = extract_amount(&question_lower);
    let time_years = extract_time(&question_lower);
    let rate = extract_rate(&question_lower);

    debug!(
        ?principal,
        ?amount,
        ?time_years,
        ?rate,
        "extracted interest quantities"
    );

    match (principal, amount, time_years, rate) {
        (Some(principal), Some(amount), Some(time), None) => {
            debug!("finding rate");
            let rate = calculate_rate(principal, amount, time);
            let amount_2_years = calculate_amount(principal, rate, 2);
            prepare_rate_solution(principal, amount, time, rate, amount_2_years)
        }
        (Some(principal), None, Some(time), Some(rate)) => {
            debug!("finding amount");
            let amount = calculate_amount(principal, rate, time);
            let ci = amount - principal;
            let amount_2_years = calculate_amount(principal, rate, 2);
            prepare_ci_solution(principal, rate, time, amount, ci, amount_2_years)
        }
        (None, Some(amount), Some(time), Some(rate)) => {
            debug!("finding principal");
            let principal = calculate_principal(amount, rate, time);
            let amount_2_years = calculate_amount(principal, rate, 2);
            prepare_principal_solution(principal, amount, rate, time, amount_2_years)
        }
        _ => {
            debug!(
                ?principal,
                ?amount,
                ?time_years,
                ?rate,
                "insufficient data"
            );
            InterestSolution {
                error: Some("Unable to extract sufficient information from question".to_string()),
                ..Default::default()
            }
        }
    }
}

//
// ================= Extraction =================
//

/// First capture of the first matching pattern, thousands separators stripped
fn first_number(patterns: &[Regex], text: &str) -> Option<f64> {
    patterns.iter().find_map(|re| {
        re.captures(text)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().replace(',', "").parse::<f64>().ok())
    })
}

fn extract_principal(text: &str) -> Option<f64> {
    first_number(&PRINCIPAL_PATTERNS, text)
}

fn extract_amount(text: &str) -> Option<f64> {
    first_number(&AMOUNT_PATTERNS, text)
}

fn extract_time(text: &str) -> Option<u32> {
    TIME_PATTERNS.iter().find_map(|re| {
        re.captures(text)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse::<u32>().ok())
    })
}

fn extract_rate(text: &str) -> Option<f64> {
    first_number(&RATE_PATTERNS, text)
}

//
// ================= Formulas =================
//

/// A = P(1 + r/100)^t
fn calculate_amount(principal: f64, rate: f64, time: u32) -> f64 {
    principal * (1.0 + rate / 100.0).powi(time as i32)
}

/// r = ((A/P)^(1/t) - 1) * 100
fn calculate_rate(principal: f64, amount: f64, time: u32) -> f64 {
    ((amount / principal).powf(1.0 / time as f64) - 1.0) * 100.0
}

/// P = A / (1 + r/100)^t
fn calculate_principal(amount: f64, rate: f64, time: u32) -> f64 {
    amount / (1.0 + rate / 100.0).powi(time as i32)
}

//
// ================= Display Formatting =================
//

/// Integer string when the rate is whole, two decimals otherwise
fn format_rate(rate: f64) -> String {
    if rate == rate.trunc() {
        format!("{}", rate as i64)
    } else {
        format!("{:.2}", rate)
    }
}

/// Fill the root-approximation fields from a growth value and time exponent.
///
/// The fraction itself is always set; the component-wise integer powers and
/// the rate step stay at their defaults when the power overflows.
fn fill_root_fields(solution: &mut InterestSolution, value: f64, time: u32) {
    let (num, den) = best_rational(value, 99);
    solution.root_num = num.to_string();
    solution.root_den = den.to_string();

    match (int_pow(num, time), int_pow(den as i64, time)) {
        (Some(num_powed), Some(den_powed)) => {
            solution.root_num_powed = num_powed.to_string();
            solution.root_den_powed = den_powed.to_string();
            solution.rate_calc = format!("{}/{}", num - den as i64, den);
        }
        _ => {
            warn!(num, den, time, "integer power overflow, keeping defaults");
        }
    }
}

fn prepare_rate_solution(
    principal: f64,
    amount: f64,
    time: u32,
    rate: f64,
    amount_2_years: f64,
) -> InterestSolution {
    let mut solution = InterestSolution::default();

    solution.principal = format!("{}", principal as i64);
    solution.time_years = time.to_string();
    solution.amount = format!("{}", amount as i64);
    solution.ci = format!("{}", (amount - principal) as i64);
    solution.rate = format_rate(rate);
    solution.rate_percent = format!("{:.2}", rate);
    solution.final_rate = format!("{:.2}%", rate);
    solution.amount_2_years = format!("{}", amount_2_years.round() as i64);

    let (step1, step2) = fraction_strings(amount, principal);
    solution.fraction_step1 = step1;
    solution.fraction_step2 = step2;

    let growth_factor = amount / principal;
    let root_value = growth_factor.powf(1.0 / time as f64);
    fill_root_fields(&mut solution, root_value, time);

    solution
}

fn prepare_ci_solution(
    principal: f64,
    rate: f64,
    time: u32,
    amount: f64,
    ci: f64,
    amount_2_years: f64,
) -> InterestSolution {
    let mut solution = InterestSolution::default();

    solution.principal = format!("{}", principal as i64);
    solution.time_years = time.to_string();
    solution.rate_percent = format!("{:.2}", rate);
    solution.rate = format_rate(rate);
    solution.amount = format!("{}", amount.round() as i64);
    solution.ci = format!("{}", ci.round() as i64);
    solution.amount_2_years = format!("{}", amount_2_years.round() as i64);
    solution.final_rate = format!("{:.2}%", rate);

    let (step1, step2) = fraction_strings(amount, principal);
    solution.fraction_step1 = step1;
    solution.fraction_step2 = step2;

    // The growth factor (100 + r)/100 shown directly, powers raised to time
    solution.root_num = format!("{}", (100.0 + rate) as i64);
    solution.root_den = "100".to_string();
    let num_powed = (100.0 + rate).powi(time as i32);
    match (to_exact_int(num_powed), int_pow(100, time)) {
        (Some(num_powed), Some(den_powed)) => {
            solution.root_num_powed = num_powed.to_string();
            solution.root_den_powed = den_powed.to_string();
            solution.rate_calc = format!("{}/100", rate as i64);
        }
        _ => {
            warn!(rate, time, "growth power overflow, keeping defaults");
        }
    }

    solution
}

fn prepare_principal_solution(
    principal: f64,
    amount: f64,
    rate: f64,
    time: u32,
    amount_2_years: f64,
) -> InterestSolution {
    let mut solution = InterestSolution::default();

    solution.principal = format!("{}", principal.round() as i64);
    solution.time_years = time.to_string();
    solution.rate_percent = format!("{:.2}", rate);
    solution.rate = format_rate(rate);
    solution.amount = format!("{}", amount as i64);
    solution.ci = format!("{}", (amount - principal) as i64);
    solution.amount_2_years = format!("{}", amount_2_years.round() as i64);
    solution.final_rate = format!("{:.2}%", rate);

    let (step1, step2) = fraction_strings(amount, principal);
    solution.fraction_step1 = step1;
    solution.fraction_step2 = step2;

    let growth_factor = 1.0 + rate / 100.0;
    fill_root_fields(&mut solution, growth_factor, time);

    solution
}

/// Truncate a float to i64 only when it fits exactly enough to display
fn to_exact_int(value: f64) -> Option<i64> {
    if value.is_finite() && value.abs() < i64::MAX as f64 {
        Some(value as i64)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_principal_priority() {
        // "sum of" outranks "invested", which would grab the rate's 10
        let q = "a sum of 1000 is invested at 10% for 2 years";
        assert_eq!(extract_principal(q), Some(1000.0));
    }

    #[test]
    fn test_extract_with_thousands_separator() {
        assert_eq!(extract_principal("principal of ₹ 1,00,000 at 5%"), Some(100_000.0));
        assert_eq!(extract_amount("grows to rs. 12,100 in time"), Some(12_100.0));
    }

    #[test]
    fn test_extract_time_and_rate() {
        let q = "in 3 years at a rate of 8";
        assert_eq!(extract_time(q), Some(3));
        assert_eq!(extract_rate(q), Some(8.0));
        assert_eq!(extract_rate("grows at 7.5% annually"), Some(7.5));
    }

    #[test]
    fn test_solve_for_amount() {
        let solution =
            solve("A sum of 1000 is invested at 10% compounded annually for 2 years. Find the amount.");

        assert!(solution.error.is_none());
        assert_eq!(solution.principal, "1000");
        assert_eq!(solution.time_years, "2");
        assert_eq!(solution.amount, "1210");
        assert_eq!(solution.ci, "210");
        assert_eq!(solution.rate, "10");
        assert_eq!(solution.rate_percent, "10.00");
        assert_eq!(solution.final_rate, "10.00%");
        assert_eq!(solution.amount_2_years, "1210");
        assert_eq!(solution.fraction_step1, "1210/1000");
        assert_eq!(solution.fraction_step2, "121/100");
        assert_eq!(solution.root_num, "110");
        assert_eq!(solution.root_den, "100");
        assert_eq!(solution.root_num_powed, "12100");
        assert_eq!(solution.root_den_powed, "10000");
        assert_eq!(solution.rate_calc, "10/100");
    }

    #[test]
    fn test_solve_for_rate() {
        let solution = solve("₹1000 becomes ₹1210 in 2 years. Find the rate of compound interest.");

        assert!(solution.error.is_none());
        assert_eq!(solution.principal, "1000");
        assert_eq!(solution.amount, "1210");
        assert_eq!(solution.time_years, "2");
        assert_eq!(solution.ci, "210");
        assert_eq!(solution.rate_percent, "10.00");
        assert_eq!(solution.final_rate, "10.00%");
        assert_eq!(solution.fraction_step1, "1210/1000");
        assert_eq!(solution.fraction_step2, "121/100");
        // sqrt(121/100) approximated as 11/10, squared back to 121/100
        assert_eq!(solution.root_num, "11");
        assert_eq!(solution.root_den, "10");
        assert_eq!(solution.root_num_powed, "121");
        assert_eq!(solution.root_den_powed, "100");
        assert_eq!(solution.rate_calc, "1/10");
    }

    #[test]
    fn test_solve_for_principal() {
        let solution = solve("What sum becomes 1210 in 2 years at 10% compound interest?");

        assert!(solution.error.is_none());
        assert_eq!(solution.principal, "1000");
        assert_eq!(solution.amount, "1210");
        assert_eq!(solution.time_years, "2");
        assert_eq!(solution.rate, "10");
        assert_eq!(solution.root_num, "11");
        assert_eq!(solution.root_den, "10");
        assert_eq!(solution.rate_calc, "1/10");
    }

    #[test]
    fn test_solve_three_year_cube_root() {
        let solution = solve("What principal becomes 1331 in 3 years at 10% compound interest?");

        assert!(solution.error.is_none());
        assert_eq!(solution.principal, "1000");
        assert_eq!(solution.root_num, "11");
        assert_eq!(solution.root_den, "10");
        assert_eq!(solution.root_num_powed, "1331");
        assert_eq!(solution.root_den_powed, "1000");
    }

    #[test]
    fn test_insufficient_information_keeps_defaults() {
        // Principal and amount present, but no time and no rate
        let solution = solve("principal 1000 becomes 1210");

        assert!(solution.error.is_some());
        let defaults = InterestSolution::default();
        assert_eq!(solution.principal, defaults.principal);
        assert_eq!(solution.amount, defaults.amount);
        assert_eq!(solution.fraction_step1, defaults.fraction_step1);
        assert_eq!(solution.rate_calc, defaults.rate_calc);
    }

    #[test]
    fn test_all_four_present_is_an_error() {
        let solution = solve("principal 1000 becomes 1210 in 2 years at 10%");
        assert!(solution.error.is_some());
    }

    #[test]
    fn test_idempotent() {
        let q = "₹1000 becomes ₹1210 in 2 years. Find the rate.";
        assert_eq!(solve(q), solve(q));
    }
}

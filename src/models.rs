//! Core data models for the math tutor service

use askama::Template;
use serde::{Deserialize, Serialize};

//
// ================= Topic =================
//

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    Trigonometry,
    CompoundInterest,
}

impl Topic {
    /// Stable label used in the response body and for template selection
    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::Trigonometry => "trigonometry",
            Topic::CompoundInterest => "compound_interest",
        }
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

//
// ================= Interest Solution =================
//

/// Display fields for a compound-interest worked solution.
///
/// Every field is pre-formatted for direct template substitution. The
/// `Default` impl populates each key with a placeholder sentinel so the
/// record is always complete, even when a computation sub-step fails and
/// only part of it gets overwritten.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Template)]
#[template(path = "compound_interest.html")]
pub struct InterestSolution {
    pub principal: String,
    pub time_years: String,
    pub amount: String,
    /// Compound interest earned (amount - principal)
    pub ci: String,
    pub rate: String,
    pub rate_percent: String,
    pub final_rate: String,
    /// Raw amount/principal ratio, e.g. "1210/1000"
    pub fraction_step1: String,
    /// The same ratio reduced by gcd, e.g. "121/100"
    pub fraction_step2: String,
    /// Best rational approximation of the growth-factor root
    pub root_num: String,
    pub root_den: String,
    /// Component-wise integer powers of the root fraction, raised to time
    pub root_num_powed: String,
    pub root_den_powed: String,
    /// The rate expressed as a fraction step, e.g. "10/100"
    pub rate_calc: String,
    /// Amount after exactly 2 years at the resolved rate
    pub amount_2_years: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Default for InterestSolution {
    fn default() -> Self {
        Self {
            principal: "0".into(),
            time_years: "0".into(),
            amount: "0".into(),
            ci: "0".into(),
            rate: "0".into(),
            rate_percent: "0".into(),
            final_rate: "0%".into(),
            fraction_step1: "1/1".into(),
            fraction_step2: "1/1".into(),
            root_num: "1".into(),
            root_den: "1".into(),
            root_num_powed: "1".into(),
            root_den_powed: "1".into(),
            rate_calc: "0/1".into(),
            amount_2_years: "0".into(),
            error: None,
        }
    }
}

//
// ================= Trigonometry Solution =================
//

/// Display fields for a right-triangle worked solution.
///
/// Sides are labelled AB/BC (the two extracted legs, in extraction order)
/// and AC (the computed hypotenuse).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Template)]
#[template(path = "trigonometry.html")]
pub struct TrigonometrySolution {
    pub ab_length: String,
    pub bc_length: String,
    pub ac_length: String,
    /// Worked subtraction line, e.g. "25 - 24 = 1"
    pub ac_minus_bc: String,
    /// Pythagorean identity line, e.g. "25² - 24² = 7²"
    pub triplet_info: String,
    pub triplet_text: String,
    pub sec_c_value: String,
    pub cot_a_value: String,
    /// sec C + cot A as a reduced fraction
    pub final_answer: String,
}

//
// ================= Solution Dispatch =================

/// A solved question: the topic label plus its display-field record.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Solution {
    Trigonometry(TrigonometrySolution),
    CompoundInterest(InterestSolution),
}

impl Solution {
    pub fn topic(&self) -> Topic {
        match self {
            Solution::Trigonometry(_) => Topic::Trigonometry,
            Solution::CompoundInterest(_) => Topic::CompoundInterest,
        }
    }

    /// Render the topic-specific worked-solution HTML fragment
    pub fn render_html(&self) -> askama::Result<String> {
        match self {
            Solution::Trigonometry(s) => s.render(),
            Solution::CompoundInterest(s) => s.render(),
        }
    }
}

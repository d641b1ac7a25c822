//! Rational-approximation helpers shared by the solvers
//!
//! Worked solutions display ratios and roots as fractions. The search is a
//! deliberate brute force over small denominators: reproducible, and exact
//! for the textbook values these problems use.

/// Greatest common divisor (Euclid, on absolute values)
pub fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a.abs(), b.abs());
    while b != 0 {
        let t = b;
        b = a % b;
        a = t;
    }
    a
}

/// Best rational approximation of `value` with denominator in `1..=max_den`.
///
/// For each candidate denominator the nearest numerator is found by
/// rounding; candidates with a non-positive numerator are skipped. The
/// strict less-than comparison keeps the first (smallest-denominator)
/// minimum, so output is reproducible. Falls back to 1/1 when no candidate
/// qualifies.
pub fn best_rational(value: f64, max_den: u32) -> (i64, u32) {
    let mut best = (1i64, 1u32);
    let mut min_error = f64::INFINITY;

    for den in 1..=max_den {
        let num = (value * den as f64).round() as i64;
        if num <= 0 {
            continue;
        }
        let error = (value - num as f64 / den as f64).abs();
        if error < min_error {
            min_error = error;
            best = (num, den);
        }
    }

    best
}

/// Reduce a fraction by its gcd. A zero denominator is left untouched.
pub fn reduce(num: i64, den: i64) -> (i64, i64) {
    if den == 0 {
        return (num, den);
    }
    let g = gcd(num, den);
    if g == 0 {
        (num, den)
    } else {
        (num / g, den / g)
    }
}

/// Raw and gcd-reduced fraction strings for `round(num)/round(den)`.
///
/// A rounded-to-zero denominator yields the literal "1/1" for both forms
/// rather than an error.
pub fn fraction_strings(numerator: f64, denominator: f64) -> (String, String) {
    let num_int = numerator.round() as i64;
    let den_int = denominator.round() as i64;

    if den_int == 0 {
        return ("1/1".to_string(), "1/1".to_string());
    }

    let (reduced_num, reduced_den) = reduce(num_int, den_int);
    (
        format!("{}/{}", num_int, den_int),
        format!("{}/{}", reduced_num, reduced_den),
    )
}

/// Checked integer power; `None` on overflow so callers can keep defaults
pub fn int_pow(base: i64, exp: u32) -> Option<i64> {
    base.checked_pow(exp)
}

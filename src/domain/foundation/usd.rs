//! US dollar amount value object used for display.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A dollar amount. Displays as whole dollars with thousands separators.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Usd(f64);

impl Usd {
    /// Wraps a raw dollar amount.
    pub fn new(value: f64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Usd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.0.is_finite() {
            return write!(f, "{}", self.0);
        }

        let rounded = self.0.round();
        let sign = if rounded < 0.0 { "-" } else { "" };
        let digits = format!("{:.0}", rounded.abs());

        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }

        write!(f, "{}${}", sign, grouped)
    }
}

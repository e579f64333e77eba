//! Average score and GPA computation.
//!
//! Averages are exact two-digit decimals held as integer hundredths, so a
//! reported `1.50` is really one and a half and never `1.4999999`.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// An average score, quantized to two fractional digits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Average {
    hundredths: i64,
}

impl Average {
    /// `0.00`, reported for students with no scores.
    pub const ZERO: Average = Average { hundredths: 0 };

    pub const fn from_hundredths(hundredths: i64) -> Self {
        Self { hundredths }
    }

    pub const fn hundredths(self) -> i64 {
        self.hundredths
    }

    /// Arithmetic mean of `scores`, rounded half away from zero to two
    /// decimal places. An empty slice averages to `0.00`.
    pub fn of(scores: &[i64]) -> Self {
        if scores.is_empty() {
            return Self::ZERO;
        }

        let total: i128 = scores.iter().map(|&s| i128::from(s)).sum();
        let count = scores.len() as i128;
        let scaled = total * 100;

        let mut quotient = scaled / count;
        let remainder = scaled % count;
        if remainder.abs() * 2 >= count {
            quotient += scaled.signum();
        }

        let hundredths = i64::try_from(quotient).unwrap_or(if quotient < 0 {
            i64::MIN
        } else {
            i64::MAX
        });
        Self { hundredths }
    }
}

impl fmt::Display for Average {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.hundredths < 0 { "-" } else { "" };
        let abs = self.hundredths.unsigned_abs();
        write!(f, "{sign}{}.{:02}", abs / 100, abs % 100)
    }
}

/// Text that is not a decimal with at most two fractional digits.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid average: {input:?}")]
pub struct ParseAverageError {
    input: String,
}

impl FromStr for Average {
    type Err = ParseAverageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseAverageError {
            input: s.to_string(),
        };
        let trimmed = s.trim();
        let (negative, digits) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };
        let (whole, frac) = digits.split_once('.').unwrap_or((digits, ""));

        if whole.is_empty()
            || frac.len() > 2
            || !whole.bytes().all(|b| b.is_ascii_digit())
            || !frac.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }

        let whole: i64 = whole.parse().map_err(|_| invalid())?;
        let frac: i64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<i64>().map_err(|_| invalid())? * 10,
            _ => frac.parse().map_err(|_| invalid())?,
        };

        let magnitude = whole
            .checked_mul(100)
            .and_then(|w| w.checked_add(frac))
            .ok_or_else(invalid)?;
        Ok(Self::from_hundredths(if negative {
            -magnitude
        } else {
            magnitude
        }))
    }
}

/// Lower bounds (in hundredths) of GPA bands 1 through 5.
const GPA_THRESHOLDS: [i64; 5] = [4000, 6000, 7000, 8000, 9000];

/// Map an average onto the integer GPA scale 0..=5.
///
/// | average     | gpa |
/// |-------------|-----|
/// | < 40        | 0   |
/// | 40 – 59.99  | 1   |
/// | 60 – 69.99  | 2   |
/// | 70 – 79.99  | 3   |
/// | 80 – 89.99  | 4   |
/// | ≥ 90        | 5   |
pub fn gpa_band(average: Average) -> u8 {
    GPA_THRESHOLDS
        .iter()
        .take_while(|&&bound| average.hundredths() >= bound)
        .count() as u8
}

// SPDX-License-Identifier: MPL-2.0
//! Parsing and re-serializing the formatted numbers shown by stat counters.
//!
//! A counter's text carries its own formatting: an optional leading `+`, an
//! integer or one-decimal value, an optional `K` (thousands) marker and an
//! optional `%`. Markers are detected by plain substring search, so a text
//! carrying both `K` and `%` keeps both.

use std::fmt;
use std::str::FromStr;

const SIGN: char = '+';
const THOUSANDS: char = 'K';
const PERCENT: char = '%';
const DECIMAL_SEPARATOR: char = '.';

/// A number parsed from a counter's display text, with its formatting flags.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormattedNumber {
    magnitude: f64,
    is_integer: bool,
    has_sign: bool,
    has_suffix_k: bool,
    has_suffix_percent: bool,
}

/// The display text does not hold a number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    text: String,
}

impl ParseError {
    /// Returns the text that failed to parse.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "not a formatted number: {:?}", self.text)
    }
}

impl std::error::Error for ParseError {}

/// Parses a counter's display text.
///
/// `+`, `K` and `%` are detected anywhere in the text and stripped; the
/// remainder is read as a float when it contains a `.`, otherwise as an
/// integer. Surrounding whitespace is ignored.
pub fn parse(text: &str) -> Result<FormattedNumber, ParseError> {
    let error = || ParseError {
        text: text.to_string(),
    };

    let residue: String = text
        .chars()
        .filter(|c| !matches!(*c, SIGN | THOUSANDS | PERCENT))
        .collect();
    let residue = residue.trim();

    let (magnitude, is_integer) = if residue.contains(DECIMAL_SEPARATOR) {
        let value = residue.parse::<f64>().map_err(|_| error())?;
        (value, false)
    } else {
        let value = residue.parse::<i64>().map_err(|_| error())?;
        #[allow(clippy::cast_precision_loss)]
        // Counter values are display figures, far below 2^53.
        (value as f64, true)
    };

    if !magnitude.is_finite() {
        return Err(error());
    }

    Ok(FormattedNumber {
        magnitude,
        is_integer,
        has_sign: text.contains(SIGN),
        has_suffix_k: text.contains(THOUSANDS),
        has_suffix_percent: text.contains(PERCENT),
    })
}

impl FormattedNumber {
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    /// True when the source text had no decimal point.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.is_integer
    }

    #[must_use]
    pub fn has_sign(&self) -> bool {
        self.has_sign
    }

    #[must_use]
    pub fn has_suffix_k(&self) -> bool {
        self.has_suffix_k
    }

    #[must_use]
    pub fn has_suffix_percent(&self) -> bool {
        self.has_suffix_percent
    }

    /// Formats `value` with this number's flags: sign, value, `K`, `%`.
    ///
    /// Integers are rounded to the nearest whole number (halves round up),
    /// other values get exactly one decimal.
    #[must_use]
    pub fn format(&self, value: f64) -> String {
        let mut out = String::new();
        if self.has_sign {
            out.push(SIGN);
        }
        if self.is_integer {
            #[allow(clippy::cast_possible_truncation)]
            let rounded = (value + 0.5).floor() as i64;
            out.push_str(&rounded.to_string());
        } else {
            out.push_str(&format!("{value:.1}"));
        }
        if self.has_suffix_k {
            out.push(THOUSANDS);
        }
        if self.has_suffix_percent {
            out.push(PERCENT);
        }
        out
    }
}

impl fmt::Display for FormattedNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(self.magnitude))
    }
}

impl FromStr for FormattedNumber {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

//! Chilean RUT (Rol Único Tributario) handling.
//!
//! A RUT is a numeric body followed by a check character (`0`-`9` or `K`)
//! computed with the modulo-11 algorithm. The free functions here are total:
//! they accept any string and never panic. [`Rut`] is the validated value
//! object used wherever a RUT is stored.

use serde::{Deserialize, Serialize};

use crate::{DomainError, ValueObject};

/// Strip everything except ASCII digits and `K`/`k`, preserving case.
fn strip(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit() || *c == 'k' || *c == 'K')
        .collect()
}

/// Remove formatting from a RUT: keeps digits and `K`, upper-cased.
///
/// `"12.345.678-k"` becomes `"12345678K"`.
pub fn clean(raw: &str) -> String {
    strip(raw).to_ascii_uppercase()
}

/// Expected check character for a digit-only body.
///
/// Returns `None` for an empty body or one containing anything but digits.
pub fn compute_check_digit(body: &str) -> Option<char> {
    if body.is_empty() {
        return None;
    }

    let mut sum: u32 = 0;
    let mut weight: u32 = 2;
    for c in body.chars().rev() {
        let digit = c.to_digit(10)?;
        // Reduced every step so arbitrarily long input cannot overflow.
        sum = (sum + digit * weight) % 11;
        weight = if weight == 7 { 2 } else { weight + 1 };
    }

    match 11 - sum {
        11 => Some('0'),
        10 => Some('K'),
        d => char::from_digit(d, 10),
    }
}

/// Canonically format a RUT: `"123456785"` becomes `"12.345.678-5"`.
///
/// Input with fewer than two usable characters is returned stripped but
/// otherwise unchanged.
pub fn format(raw: &str) -> String {
    let stripped = strip(raw);
    if stripped.len() < 2 {
        return stripped;
    }

    // Only ASCII survives `strip`, so byte indexing is char indexing.
    let (body, check) = stripped.split_at(stripped.len() - 1);
    format!("{}-{}", group_thousands(body), check.to_ascii_uppercase())
}

/// Check a RUT against its modulo-11 check character (case-insensitive).
pub fn validate(raw: &str) -> bool {
    let stripped = strip(raw);
    if stripped.len() < 2 {
        return false;
    }

    let (body, check) = stripped.split_at(stripped.len() - 1);
    match compute_check_digit(body) {
        Some(expected) => check.chars().next().map(|c| c.to_ascii_uppercase()) == Some(expected),
        None => false,
    }
}

/// Insert `.` every three digits, counted from the right of each digit run.
///
/// A stray `K` breaks the run and is never counted, so `"12K3"` stays as is.
fn group_thousands(body: &str) -> String {
    let bytes = body.as_bytes();

    // run[i]: number of consecutive digits starting at i.
    let mut run = vec![0usize; bytes.len() + 1];
    for i in (0..bytes.len()).rev() {
        if bytes[i].is_ascii_digit() {
            run[i] = run[i + 1] + 1;
        }
    }

    let mut out = String::with_capacity(bytes.len() + bytes.len() / 3);
    for (i, &b) in bytes.iter().enumerate() {
        if i > 0 && run[i] > 0 && run[i] % 3 == 0 {
            out.push('.');
        }
        out.push(char::from(b));
    }
    out
}

/// A validated RUT.
///
/// Leading zeros in the body are dropped, so `"012345678-5"` and
/// `"12.345.678-5"` parse to the same value. Serialized as the canonical
/// formatted string; deserialization validates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rut {
    body: String,
    check: char,
}

impl Rut {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        if !validate(raw) {
            return Err(DomainError::validation(format!("invalid RUT '{raw}'")));
        }

        let cleaned = clean(raw);
        let (body, check) = cleaned.split_at(cleaned.len() - 1);
        let trimmed = body.trim_start_matches('0');
        let body = if trimmed.is_empty() { "0" } else { trimmed };

        Ok(Self {
            body: body.to_string(),
            check: check.chars().next().unwrap_or('0'),
        })
    }

    /// Numeric body without separators.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Upper-case check character.
    pub fn check_digit(&self) -> char {
        self.check
    }

    /// Canonical form, e.g. `12.345.678-5`.
    pub fn formatted(&self) -> String {
        format!("{}-{}", group_thousands(&self.body), self.check)
    }
}

impl ValueObject for Rut {}

impl core::fmt::Display for Rut {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.formatted())
    }
}

impl core::str::FromStr for Rut {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Rut {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Rut> for String {
    fn from(value: Rut) -> Self {
        value.formatted()
    }
}

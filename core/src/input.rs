use crate::error::{LedgerError, Result};
use crate::model::summary::calculate_hours_saved;

/// A validated pair of form values, ready to be recorded.
///
/// Only obtainable through [`EntryInput::new`] or [`EntryInput::parse`], so
/// the hours it derives are always finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntryInput {
    automated_tests: u64,
    hours_per_test: f64,
}

impl EntryInput {
    pub fn new(automated_tests: u64, hours_per_test: f64) -> Result<Self> {
        if !hours_per_test.is_finite() || hours_per_test < 0.0 {
            return Err(LedgerError::InvalidInput {
                field: "manual test time",
                value: hours_per_test.to_string(),
                reason: "must be a non-negative number",
            });
        }
        if !calculate_hours_saved(automated_tests, hours_per_test).is_finite() {
            return Err(LedgerError::InvalidInput {
                field: "manual test time",
                value: hours_per_test.to_string(),
                reason: "gives more hours saved than can be stored",
            });
        }
        Ok(Self { automated_tests, hours_per_test })
    }

    pub fn automated_tests(&self) -> u64 {
        self.automated_tests
    }

    pub fn hours_per_test(&self) -> f64 {
        self.hours_per_test
    }

    pub fn hours_saved(&self) -> f64 {
        calculate_hours_saved(self.automated_tests, self.hours_per_test)
    }

    /// Parses the two raw form fields. Nothing is coerced: blank or
    /// non-numeric text is rejected rather than read as zero.
    pub fn parse(tests: &str, hours_per_test: &str) -> Result<Self> {
        let automated_tests = parse_tests(tests)?;
        let hours = parse_hours(hours_per_test)?;
        Self::new(automated_tests, hours)
    }
}

fn parse_tests(raw: &str) -> Result<u64> {
    const FIELD: &str = "automated tests";
    let value = raw.trim();
    if value.is_empty() {
        return Err(invalid(FIELD, raw, "is required"));
    }
    if let Ok(n) = value.parse::<u64>() {
        return Ok(n);
    }
    // "12.0" is still a whole count; "12.5" or "-3" are not.
    // `u64::MAX as f64` rounds up to 2^64.
    match value.parse::<f64>() {
        Ok(f) if !f.is_finite() => Err(invalid(FIELD, raw, "is not a number")),
        Ok(f) if f < 0.0 => Err(invalid(FIELD, raw, "must not be negative")),
        Ok(f) if f.fract() != 0.0 => Err(invalid(FIELD, raw, "must be a whole number")),
        Ok(f) if f >= u64::MAX as f64 => Err(invalid(FIELD, raw, "is too large")),
        Ok(f) => Ok(f as u64),
        Err(_) => Err(invalid(FIELD, raw, "is not a number")),
    }
}

fn parse_hours(raw: &str) -> Result<f64> {
    const FIELD: &str = "manual test time";
    let value = raw.trim();
    if value.is_empty() {
        return Err(invalid(FIELD, raw, "is required"));
    }
    match value.parse::<f64>() {
        Ok(f) if !f.is_finite() => Err(invalid(FIELD, raw, "is not a number")),
        Ok(f) if f < 0.0 => Err(invalid(FIELD, raw, "must not be negative")),
        Ok(f) => Ok(f),
        Err(_) => Err(invalid(FIELD, raw, "is not a number")),
    }
}

fn invalid(field: &'static str, raw: &str, reason: &'static str) -> LedgerError {
    LedgerError::InvalidInput {
        field,
        value: raw.to_string(),
        reason,
    }
}

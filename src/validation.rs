//! Input validation for planning runs.
//!
//! Checks lectures and preferences before planning. Detects:
//! - Non-positive slot size
//! - Empty availability window
//! - Minute fields outside a day
//! - Inverted block bounds or lectures
//! - Negative multipliers, sizes, and weights
//!
//! Validation is advisory: the planner accepts any input and handles
//! degenerate values by policy (zero durations, unmet targets). Use this to
//! tell the user why a plan came out empty.

use crate::models::{Lecture, Minute, PlanInput, Preferences, MINUTES_PER_DAY};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// `slot_minutes` is zero or negative.
    NonPositiveSlot,
    /// `earliest_start >= latest_end`.
    EmptyWindow,
    /// A minute-of-day field lies outside 0..=1440.
    MinuteOutOfRange,
    /// `min_block > max_block`.
    InvertedBlockBounds,
    /// A lecture has a negative multiplier.
    NegativeMultiplier,
    /// A lecture ends before it starts.
    InvertedLecture,
    /// A size, count, or weight is negative.
    NegativeSetting,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a planning input.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(input: &PlanInput) -> ValidationResult {
    let mut errors = Vec::new();

    validate_preferences(&input.prefs, &mut errors);
    for (i, lecture) in input.lectures.iter().enumerate() {
        validate_lecture(i, lecture, &mut errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_preferences(prefs: &Preferences, errors: &mut Vec<ValidationError>) {
    let minute_fields = [
        ("earliest_start", prefs.earliest_start),
        ("latest_end", prefs.latest_end),
        ("sleep_start", prefs.sleep_start),
        ("sleep_end", prefs.sleep_end),
    ];
    for (name, value) in minute_fields {
        check_minute(name, value, errors);
    }

    if prefs.slot_minutes <= 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NonPositiveSlot,
            format!("slot_minutes must be positive, got {}", prefs.slot_minutes),
        ));
    }

    if prefs.earliest_start >= prefs.latest_end {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyWindow,
            format!(
                "earliest_start ({}) must be before latest_end ({})",
                prefs.earliest_start, prefs.latest_end
            ),
        ));
    }

    let sizes = [
        ("min_block", prefs.min_block),
        ("max_block", prefs.max_block),
        ("buffer_minutes", prefs.buffer_minutes),
    ];
    for (name, value) in sizes {
        if value < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeSetting,
                format!("{name} must not be negative, got {value}"),
            ));
        }
    }

    if prefs.min_block > prefs.max_block {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvertedBlockBounds,
            format!(
                "min_block ({}) exceeds max_block ({})",
                prefs.min_block, prefs.max_block
            ),
        ));
    }

    let weights = [
        ("weight_spread", prefs.weight_spread),
        ("weight_late", prefs.weight_late),
        ("weight_day_overload", prefs.weight_day_overload),
        ("weight_gap_bonus", prefs.weight_gap_bonus),
    ];
    for (name, value) in weights {
        if value.is_nan() || value < 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeSetting,
                format!("{name} must be a non-negative number, got {value}"),
            ));
        }
    }
}

fn validate_lecture(index: usize, lecture: &Lecture, errors: &mut Vec<ValidationError>) {
    let label = format!("lecture #{} ({})", index + 1, lecture.course());

    check_minute(&format!("{label} start"), lecture.start, errors);
    check_minute(&format!("{label} end"), lecture.end, errors);

    if lecture.end < lecture.start {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvertedLecture,
            format!(
                "{label} ends ({}) before it starts ({})",
                lecture.end, lecture.start
            ),
        ));
    }

    if lecture.multiplier.is_nan() || lecture.multiplier < 0.0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NegativeMultiplier,
            format!("{label} multiplier must be ≥ 0, got {}", lecture.multiplier),
        ));
    }
}

fn check_minute(name: &str, value: Minute, errors: &mut Vec<ValidationError>) {
    if !(0..=MINUTES_PER_DAY).contains(&value) {
        errors.push(ValidationError::new(
            ValidationErrorKind::MinuteOutOfRange,
            format!("{name} ({value}) is outside 0..={MINUTES_PER_DAY}"),
        ));
    }
}

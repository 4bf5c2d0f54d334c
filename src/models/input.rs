//! Planning input document.

use serde::{Deserialize, Serialize};

use super::lecture::Lecture;
use super::preferences::Preferences;

/// Lectures plus preferences: everything one planning run consumes.
///
/// Serialized as `{"lectures": [...], "prefs": {...}}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanInput {
    /// Weekly lectures.
    #[serde(default)]
    pub lectures: Vec<Lecture>,
    /// Planning preferences.
    #[serde(default)]
    pub prefs: Preferences,
}

impl PlanInput {
    /// Creates an input from lectures and preferences.
    pub fn new(lectures: Vec<Lecture>, prefs: Preferences) -> Self {
        Self { lectures, prefs }
    }

    /// Adds a lecture.
    pub fn with_lecture(mut self, lecture: Lecture) -> Self {
        self.lectures.push(lecture);
        self
    }

    /// Replaces the preferences.
    pub fn with_prefs(mut self, prefs: Preferences) -> Self {
        self.prefs = prefs;
        self
    }
}

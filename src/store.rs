//! JSON persistence of the planning input.
//!
//! The document is `{"lectures": [...], "prefs": {...}}`. The planner never
//! touches the file itself; callers load an input, plan, and save edits.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use crate::error::StoreError;
use crate::models::PlanInput;

/// Default data file name.
pub const DEFAULT_DATA_FILE: &str = "data.json";

/// Writes `input` as pretty-printed JSON.
pub fn save_input(path: impl AsRef<Path>, input: &PlanInput) -> Result<(), StoreError> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(input)?;
    fs::write(path, json)?;
    debug!(path = %path.display(), lectures = input.lectures.len(), "saved plan input");
    Ok(())
}

/// Reads an input document. Returns `Ok(None)` if the file does not exist.
pub fn load_input(path: impl AsRef<Path>) -> Result<Option<PlanInput>, StoreError> {
    let path = path.as_ref();
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    let input: PlanInput = serde_json::from_str(&text)?;
    debug!(path = %path.display(), lectures = input.lectures.len(), "loaded plan input");
    Ok(Some(input))
}

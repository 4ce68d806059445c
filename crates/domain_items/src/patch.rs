//! Partial-update semantics for items
//!
//! Staff edits arrive as an arbitrary subset of fields, and the meaning of
//! an empty string differs per field:
//!
//! - `name`, `location`, `date`: blank after trimming means "no change";
//! - `category`, `description`: blank after trimming explicitly clears the
//!   field to absent;
//! - a present but malformed date fails the whole update, leaving the item
//!   untouched.

use chrono::NaiveDate;

use core_kernel::parse_wire_date;

use crate::error::ItemError;

/// A validated partial update
///
/// Outer `None` means the field was absent or blank ("no change"); for the
/// clearable fields the inner `Option` distinguishes "set" from "clear".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub found_location: Option<String>,
    pub found_date: Option<NaiveDate>,
    pub category: Option<Option<String>>,
    pub description: Option<Option<String>>,
    pub approved: Option<bool>,
}

impl ItemPatch {
    /// Builds a patch from raw request fields, validating before anything
    /// is written.
    pub fn from_fields(
        name: Option<&str>,
        location: Option<&str>,
        date: Option<&str>,
        category: Option<&str>,
        description: Option<&str>,
        approved: Option<bool>,
    ) -> Result<Self, ItemError> {
        let found_date = match date.map(str::trim) {
            Some("") | None => None,
            Some(raw) => Some(parse_wire_date(raw)?),
        };

        Ok(Self {
            name: overwrite(name),
            found_location: overwrite(location),
            found_date,
            category: clearable(category),
            description: clearable(description),
            approved,
        })
    }

    /// Whether the patch changes anything at all
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Blank input means "keep the stored value"
fn overwrite(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Blank input means "clear the stored value"
fn clearable(raw: Option<&str>) -> Option<Option<String>> {
    raw.map(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

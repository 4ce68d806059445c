//! Validated item creation input
//!
//! Raw request fields go through `ItemDraft` before anything touches the
//! store: required fields are checked after trimming, the found date is
//! parsed, and blank optional fields normalize to absent. Validation always
//! happens before the first write.

use chrono::NaiveDate;

use core_kernel::parse_wire_date;

use crate::error::ItemError;

/// A validated, normalized set of fields for creating an item
#[derive(Debug, Clone)]
pub struct ItemDraft {
    pub name: String,
    pub found_location: String,
    pub found_date: NaiveDate,
    pub category: Option<String>,
    pub description: Option<String>,
}

impl ItemDraft {
    /// Builds a draft from raw request fields.
    ///
    /// `name`, `location`, and `date` are required; a missing field and a
    /// blank-after-trim field are treated the same way, matching how the
    /// public form has always behaved.
    pub fn new(
        name: Option<&str>,
        location: Option<&str>,
        date: Option<&str>,
    ) -> Result<Self, ItemError> {
        let name = required(name).ok_or(ItemError::MissingField("name"))?;
        let location = required(location).ok_or(ItemError::MissingField("location"))?;
        let date = required(date).ok_or(ItemError::MissingField("date"))?;
        let found_date = parse_wire_date(&date)?;

        Ok(Self {
            name,
            found_location: location,
            found_date,
            category: None,
            description: None,
        })
    }

    /// Attaches a category; blank input stays absent.
    pub fn with_category(mut self, category: Option<&str>) -> Self {
        self.category = optional(category);
        self
    }

    /// Attaches a description; blank input stays absent.
    pub fn with_description(mut self, description: Option<&str>) -> Self {
        self.description = optional(description);
        self
    }
}

fn required(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn optional(raw: Option<&str>) -> Option<String> {
    required(raw)
}

//! Validated claim creation input

use crate::claim::Affiliation;
use crate::error::ClaimError;

/// A validated, normalized set of fields for submitting a claim
#[derive(Debug, Clone)]
pub struct ClaimDraft {
    pub claimant_name: String,
    pub affiliation: Option<Affiliation>,
    pub identifier: String,
    pub contact: String,
    pub details: String,
}

impl ClaimDraft {
    /// Builds a draft from raw request fields.
    ///
    /// Name and details are required (blank after trimming counts as
    /// missing). Identifier and contact are stored as empty strings when
    /// absent.
    pub fn new(name: Option<&str>, details: Option<&str>) -> Result<Self, ClaimError> {
        let claimant_name = required(name).ok_or(ClaimError::MissingField("nome"))?;
        let details = required(details).ok_or(ClaimError::MissingField("detalhes"))?;

        Ok(Self {
            claimant_name,
            affiliation: None,
            identifier: String::new(),
            contact: String::new(),
            details,
        })
    }

    /// Parses and attaches an affiliation.
    ///
    /// Blank input stays absent; an unknown label is rejected at the
    /// boundary instead of being stored verbatim.
    pub fn with_affiliation(mut self, raw: Option<&str>) -> Result<Self, ClaimError> {
        self.affiliation = match raw.map(str::trim).filter(|s| !s.is_empty()) {
            None => None,
            Some(label) => Some(
                Affiliation::from_wire(label)
                    .ok_or_else(|| ClaimError::UnknownAffiliation(label.to_string()))?,
            ),
        };
        Ok(self)
    }

    /// Attaches an identifier; absent input becomes the empty string.
    pub fn with_identifier(mut self, raw: Option<&str>) -> Self {
        self.identifier = raw.map(str::trim).unwrap_or_default().to_string();
        self
    }

    /// Attaches contact info; absent input becomes the empty string.
    pub fn with_contact(mut self, raw: Option<&str>) -> Self {
        self.contact = raw.map(str::trim).unwrap_or_default().to_string();
        self
    }
}

fn required(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

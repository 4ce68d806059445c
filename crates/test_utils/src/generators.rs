//! Randomized test data
//!
//! Thin wrappers over `fake` for the handful of free-text fields the
//! system stores.

use fake::faker::internet::en::FreeEmail;
use fake::faker::lorem::en::Sentence;
use fake::faker::name::en::Name;
use fake::Fake;

use domain_claims::Affiliation;

/// A random claimant name
pub fn random_claimant_name() -> String {
    Name().fake()
}

/// A random contact e-mail
pub fn random_contact() -> String {
    FreeEmail().fake()
}

/// A random free-text ownership proof
pub fn random_details() -> String {
    Sentence(3..8).fake()
}

/// Cycles through every affiliation value
pub fn all_affiliations() -> [Affiliation; 5] {
    [
        Affiliation::Student,
        Affiliation::Staff,
        Affiliation::Contractor,
        Affiliation::Visitor,
        Affiliation::Other,
    ]
}

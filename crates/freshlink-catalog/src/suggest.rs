//! Search-box suggestions for the vendors pages.

use serde::Serialize;

use freshlink_core::listing::{ListingId, Vendor};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    Vendor,
    Location,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub kind: SuggestionKind,
    pub text: String,
    /// Set for vendor suggestions only.
    pub vendor_id: Option<ListingId>,
}

/// Vendor names and distinct locations containing `term`, case-insensitively.
///
/// Vendor matches come first, in catalog order, then locations. A blank term
/// suggests nothing.
#[must_use]
pub fn suggest(vendors: &[Vendor], term: &str, limit: usize) -> Vec<Suggestion> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() || limit == 0 {
        return Vec::new();
    }

    let by_name = vendors
        .iter()
        .filter(|v| v.name.to_lowercase().contains(&needle))
        .map(|v| Suggestion {
            kind: SuggestionKind::Vendor,
            text: v.name.clone(),
            vendor_id: Some(v.id),
        });

    let mut locations: Vec<&str> = Vec::new();
    for vendor in vendors {
        let location = vendor.location.as_str();
        if location.to_lowercase().contains(&needle) && !locations.contains(&location) {
            locations.push(location);
        }
    }
    let by_location = locations.into_iter().map(|location| Suggestion {
        kind: SuggestionKind::Location,
        text: location.to_string(),
        vendor_id: None,
    });

    by_name.chain(by_location).take(limit).collect()
}

//! Filter/sort pipeline: `(catalog, query) -> ordered results`.
//!
//! Pure: the catalog is never mutated and identical inputs give identical
//! output. Sorting is stable, so records with equal keys keep catalog order.

use std::cmp::Ordering;

use freshlink_core::listing::Listing;
use freshlink_core::query::{QueryDescriptor, SortKey, StatusFilter, POPULAR_MIN_RATING};

use crate::page_kind::PageKind;

/// Filter and sort `catalog` for the given page.
#[must_use]
pub fn apply<L: Listing>(catalog: &[L], query: &QueryDescriptor, kind: PageKind) -> Vec<L> {
    let needle = query.needle();
    let category = query.category_filter();

    let mut results: Vec<L> = catalog
        .iter()
        .filter(|listing| needle.as_deref().is_none_or(|n| listing.matches_term(n)))
        .filter(|listing| category.is_none_or(|c| listing.category() == Some(c)))
        .filter(|listing| passes_flags(*listing, query))
        .filter(|listing| listing.price().is_none_or(|p| query.price.matches(p)))
        .filter(|listing| {
            kind.distance_cap_km()
                .is_none_or(|cap| listing.distance_km() <= cap)
        })
        .cloned()
        .collect();

    let key = effective_sort(query.sort, kind);
    let sponsored_first = kind.sponsored_first();
    results.sort_by(|a, b| {
        let promoted = if sponsored_first {
            b.is_sponsored().cmp(&a.is_sponsored())
        } else {
            Ordering::Equal
        };
        promoted.then_with(|| compare(a, b, key))
    });

    tracing::debug!(
        page = %kind,
        total = catalog.len(),
        matched = results.len(),
        sort = %key,
        "listing pipeline run"
    );

    results
}

/// The key actually used for ordering. `relevance` and keys the page does not
/// offer fall back to descending rating.
#[must_use]
pub fn effective_sort(requested: SortKey, kind: PageKind) -> SortKey {
    if requested == SortKey::Relevance || !kind.supports_sort(requested) {
        SortKey::Rating
    } else {
        requested
    }
}

fn passes_flags<L: Listing>(listing: &L, query: &QueryDescriptor) -> bool {
    if query.organic_only && !listing.is_organic() {
        return false;
    }
    if query.open_only && !listing.is_available() {
        return false;
    }
    match query.status {
        StatusFilter::All => true,
        StatusFilter::Open => listing.is_available(),
        StatusFilter::Popular => listing.rating() >= POPULAR_MIN_RATING,
    }
}

fn compare<L: Listing>(a: &L, b: &L, key: SortKey) -> Ordering {
    match key {
        SortKey::PriceLow => compare_present(a.price(), b.price()),
        SortKey::PriceHigh => compare_present(b.price(), a.price()),
        SortKey::Distance => a.distance_km().total_cmp(&b.distance_km()),
        SortKey::Newest => b.id().cmp(&a.id()),
        SortKey::Name => compare_names(a.name(), b.name()),
        SortKey::Products => compare_present(b.product_count(), a.product_count()),
        SortKey::Reviews => b.review_count().cmp(&a.review_count()),
        SortKey::Rating | SortKey::Relevance => b.rating().total_cmp(&a.rating()),
    }
}

/// Orders two optional keys; a missing key on either side compares equal.
fn compare_present<T: Ord>(a: Option<T>, b: Option<T>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        _ => Ordering::Equal,
    }
}

/// Accent- and case-insensitive name ordering, close to a pt-BR collation.
fn compare_names(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.cmp(b))
}

fn collation_key(name: &str) -> String {
    name.chars()
        .flat_map(char::to_lowercase)
        .map(|c| match c {
            'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
            'é' | 'è' | 'ê' | 'ë' => 'e',
            'í' | 'ì' | 'î' | 'ï' => 'i',
            'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
            'ú' | 'ù' | 'û' | 'ü' => 'u',
            'ç' => 'c',
            'ñ' => 'n',
            other => other,
        })
        .collect()
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod tests;

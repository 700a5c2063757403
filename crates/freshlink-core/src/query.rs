use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Category sentinel that disables category filtering.
pub const ALL_CATEGORIES: &str = "all";

/// Sort keys offered across the listing pages. Each page supports a subset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Relevance,
    PriceLow,
    PriceHigh,
    Rating,
    Distance,
    Newest,
    Name,
    Products,
    Reviews,
}

impl SortKey {
    pub const ALL: [SortKey; 9] = [
        SortKey::Relevance,
        SortKey::PriceLow,
        SortKey::PriceHigh,
        SortKey::Rating,
        SortKey::Distance,
        SortKey::Newest,
        SortKey::Name,
        SortKey::Products,
        SortKey::Reviews,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Relevance => "relevance",
            SortKey::PriceLow => "price_low",
            SortKey::PriceHigh => "price_high",
            SortKey::Rating => "rating",
            SortKey::Distance => "distance",
            SortKey::Newest => "newest",
            SortKey::Name => "name",
            SortKey::Products => "products",
            SortKey::Reviews => "reviews",
        }
    }

    /// pt-BR label shown in the sort dropdown.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            SortKey::Relevance => "Relevância",
            SortKey::PriceLow => "Menor preço",
            SortKey::PriceHigh => "Maior preço",
            SortKey::Rating => "Melhor avaliados",
            SortKey::Distance => "Mais próximos",
            SortKey::Newest => "Mais recentes",
            SortKey::Name => "Nome A-Z",
            SortKey::Products => "Mais produtos",
            SortKey::Reviews => "Mais avaliações",
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s.trim())
            .ok_or_else(|| format!("unknown sort key '{s}'"))
    }
}

/// Fixed price buckets offered by the products page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriceBucket {
    #[default]
    #[serde(rename = "all")]
    All,
    #[serde(rename = "up-to-50")]
    UpTo50,
    #[serde(rename = "50-to-150")]
    From50To150,
    #[serde(rename = "150-to-300")]
    From150To300,
    #[serde(rename = "above-300", alias = "above-500")]
    Above300,
}

impl PriceBucket {
    pub const ALL: [PriceBucket; 5] = [
        PriceBucket::All,
        PriceBucket::UpTo50,
        PriceBucket::From50To150,
        PriceBucket::From150To300,
        PriceBucket::Above300,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            PriceBucket::All => "all",
            PriceBucket::UpTo50 => "up-to-50",
            PriceBucket::From50To150 => "50-to-150",
            PriceBucket::From150To300 => "150-to-300",
            PriceBucket::Above300 => "above-300",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            PriceBucket::All => "Todos os preços",
            PriceBucket::UpTo50 => "Até R$ 50",
            PriceBucket::From50To150 => "R$ 50 a R$ 150",
            PriceBucket::From150To300 => "R$ 150 a R$ 300",
            PriceBucket::Above300 => "Mais de R$ 300",
        }
    }

    /// Half-open `[min, max)` bounds; `None` means unbounded above.
    #[must_use]
    pub fn bounds(self) -> (Decimal, Option<Decimal>) {
        match self {
            PriceBucket::All => (Decimal::ZERO, None),
            PriceBucket::UpTo50 => (Decimal::ZERO, Some(Decimal::from(50))),
            PriceBucket::From50To150 => (Decimal::from(50), Some(Decimal::from(150))),
            PriceBucket::From150To300 => (Decimal::from(150), Some(Decimal::from(300))),
            PriceBucket::Above300 => (Decimal::from(300), None),
        }
    }

    #[must_use]
    pub fn contains(self, price: Decimal) -> bool {
        let (min, max) = self.bounds();
        price >= min && max.is_none_or(|max| price < max)
    }
}

impl FromStr for PriceBucket {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "above-500" => Ok(PriceBucket::Above300),
            other => PriceBucket::ALL
                .into_iter()
                .find(|bucket| bucket.as_str() == other)
                .ok_or_else(|| format!("unknown price range '{s}'")),
        }
    }
}

/// Price bucket plus the raw text of the custom min/max inputs.
///
/// Custom bounds are kept as typed so an empty box and a garbage box can both
/// be represented; both mean "unspecified".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceFilter {
    #[serde(default)]
    pub bucket: PriceBucket,
    #[serde(default)]
    pub custom_min: String,
    #[serde(default)]
    pub custom_max: String,
}

impl PriceFilter {
    /// Inclusive custom bounds, or `None` when both inputs are empty.
    ///
    /// A non-numeric bound falls back to `0` (min) or unbounded (max).
    #[must_use]
    pub fn custom_bounds(&self) -> Option<(Decimal, Option<Decimal>)> {
        if self.custom_min.trim().is_empty() && self.custom_max.trim().is_empty() {
            return None;
        }
        let min = parse_price_input(&self.custom_min).unwrap_or(Decimal::ZERO);
        let max = parse_price_input(&self.custom_max);
        Some((min, max))
    }

    #[must_use]
    pub fn matches(&self, price: Decimal) -> bool {
        if !self.bucket.contains(price) {
            return false;
        }
        match self.custom_bounds() {
            Some((min, max)) => price >= min && max.is_none_or(|max| price <= max),
            None => true,
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.bucket != PriceBucket::All || self.custom_bounds().is_some()
    }
}

/// Parse a user-typed price. Accepts a decimal comma (`"12,50"`).
#[must_use]
pub fn parse_price_input(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Decimal::from_str(&trimmed.replace(',', ".")).ok()
}

/// Vendor status selector on the vendors page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    #[serde(alias = "")]
    All,
    Open,
    /// Vendors rated at least [`POPULAR_MIN_RATING`].
    Popular,
}

/// Minimum rating for the "popular" vendor status filter.
pub const POPULAR_MIN_RATING: f64 = 4.5;

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" | "all" => Ok(StatusFilter::All),
            "open" => Ok(StatusFilter::Open),
            "popular" => Ok(StatusFilter::Popular),
            other => Err(format!("unknown status filter '{other}'")),
        }
    }
}

/// Every search, filter and sort selection active on a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryDescriptor {
    #[serde(default)]
    pub term: String,
    #[serde(default = "default_category")]
    pub category: String,
    pub sort: SortKey,
    #[serde(default)]
    pub price: PriceFilter,
    #[serde(default)]
    pub organic_only: bool,
    #[serde(default)]
    pub open_only: bool,
    #[serde(default)]
    pub status: StatusFilter,
}

fn default_category() -> String {
    ALL_CATEGORIES.to_string()
}

impl QueryDescriptor {
    /// A descriptor that matches everything, sorted by `sort`.
    #[must_use]
    pub fn new(sort: SortKey) -> Self {
        Self {
            term: String::new(),
            category: default_category(),
            sort,
            price: PriceFilter::default(),
            organic_only: false,
            open_only: false,
            status: StatusFilter::All,
        }
    }

    /// Lowercased, trimmed search needle, or `None` when the term is blank.
    #[must_use]
    pub fn needle(&self) -> Option<String> {
        let trimmed = self.term.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_lowercase())
    }

    /// The active category slug, or `None` for the `all` sentinel.
    #[must_use]
    pub fn category_filter(&self) -> Option<&str> {
        let category = self.category.trim();
        (!category.is_empty() && category != ALL_CATEGORIES).then_some(category)
    }

    /// `true` when any filter narrows the catalog. Sorting does not count.
    #[must_use]
    pub fn has_filters(&self) -> bool {
        self.needle().is_some()
            || self.category_filter().is_some()
            || self.price.is_active()
            || self.organic_only
            || self.open_only
            || self.status != StatusFilter::All
    }

    /// Reset every filter but keep the sort selection.
    pub fn clear_filters(&mut self) {
        *self = Self::new(self.sort);
    }

    /// Reset the bucket and both custom bounds.
    pub fn clear_price(&mut self) {
        self.price = PriceFilter::default();
    }
}

//! Display helpers for listing cards: star glyphs, BRL currency and badges.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::listing::MAX_RATING;

/// Number of star slots on a card.
pub const STAR_SLOTS: usize = 5;

/// Separator between the currency symbol and the amount (pt-BR uses a no-break space).
const CURRENCY_SEPARATOR: char = '\u{a0}';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StarGlyph {
    Full,
    Half,
    Empty,
}

impl StarGlyph {
    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            StarGlyph::Full => '★',
            StarGlyph::Half => '⯪',
            StarGlyph::Empty => '☆',
        }
    }
}

/// `floor(rating)` full stars, one half star when the rating has a fractional
/// part, then empty stars up to five slots.
#[must_use]
pub fn rating_stars(rating: f64) -> [StarGlyph; STAR_SLOTS] {
    let clamped = if rating.is_nan() {
        0.0
    } else {
        rating.clamp(0.0, MAX_RATING)
    };
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let full = clamped.floor() as usize;
    let has_half = clamped.fract() != 0.0;

    let mut stars = [StarGlyph::Empty; STAR_SLOTS];
    for (slot, star) in stars.iter_mut().enumerate() {
        if slot < full {
            *star = StarGlyph::Full;
        } else if slot == full && has_half {
            *star = StarGlyph::Half;
        }
    }
    stars
}

#[must_use]
pub fn render_stars(rating: f64) -> String {
    rating_stars(rating).iter().map(|s| s.symbol()).collect()
}

/// One-decimal rating label, e.g. `4.8`.
#[must_use]
pub fn rating_label(rating: f64) -> String {
    format!("{rating:.1}")
}

/// Distance badge, e.g. `0.8km`.
#[must_use]
pub fn distance_label(distance_km: f64) -> String {
    format!("{distance_km}km")
}

#[must_use]
pub fn open_label(is_open: bool) -> &'static str {
    if is_open {
        "Aberto"
    } else {
        "Fechado"
    }
}

#[must_use]
pub fn discount_label(percent: u8) -> String {
    format!("-{percent}%")
}

/// Format an amount as Brazilian Real: `R$ 1.234,56`.
///
/// Rounds half away from zero to two decimals, groups thousands with `.` and
/// uses `,` as the decimal separator.
#[must_use]
pub fn format_brl(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let plain = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!(
        "{sign}R${CURRENCY_SEPARATOR}{},{frac_part}",
        group_thousands(int_part)
    )
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    use StarGlyph::{Empty, Full, Half};

    #[test]
    fn stars_for_whole_rating() {
        assert_eq!(rating_stars(4.0), [Full, Full, Full, Full, Empty]);
    }

    #[test]
    fn stars_for_fractional_rating_add_one_half() {
        assert_eq!(rating_stars(4.8), [Full, Full, Full, Full, Half]);
        assert_eq!(rating_stars(2.3), [Full, Full, Half, Empty, Empty]);
    }

    #[test]
    fn stars_for_extremes() {
        assert_eq!(rating_stars(0.0), [Empty; 5]);
        assert_eq!(rating_stars(5.0), [Full; 5]);
        assert_eq!(rating_stars(7.0), [Full; 5]);
    }

    #[test]
    fn render_stars_uses_symbols() {
        assert_eq!(render_stars(3.5), "★★★⯪☆");
    }

    #[test]
    fn brl_uses_decimal_comma_and_symbol_prefix() {
        assert_eq!(format_brl(Decimal::new(850, 2)), "R$\u{a0}8,50");
        assert_eq!(format_brl(Decimal::from(3)), "R$\u{a0}3,00");
    }

    #[test]
    fn brl_groups_thousands_with_dots() {
        assert_eq!(format_brl(Decimal::new(123_456_789, 2)), "R$\u{a0}1.234.567,89");
        assert_eq!(format_brl(Decimal::new(100_000, 2)), "R$\u{a0}1.000,00");
    }

    #[test]
    fn brl_rounds_half_away_from_zero() {
        assert_eq!(format_brl(Decimal::new(1_005, 3)), "R$\u{a0}1,01");
        assert_eq!(format_brl(Decimal::new(-250, 2)), "-R$\u{a0}2,50");
    }

    #[test]
    fn labels() {
        assert_eq!(rating_label(4.8), "4.8");
        assert_eq!(rating_label(5.0), "5.0");
        assert_eq!(distance_label(0.8), "0.8km");
        assert_eq!(open_label(false), "Fechado");
        assert_eq!(discount_label(15), "-15%");
    }
}

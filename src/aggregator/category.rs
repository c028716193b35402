//! Category discovery and color assignment.
//!
//! Each distinct category value gets a color from its position in the
//! first-seen category order. Events with a duration but no resolvable
//! category get a random color instead, so their color is not stable
//! between loads.

use crate::parser::schema::{EventRecord, Scalar};
use crate::utils::config::{CATEGORY_INDEX_FIELD, CATEGORY_NAME_FIELD};
use indexmap::IndexSet;
use log::debug;
use rand::Rng;
use serde::{Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Largest value representable in a 24-bit RGB color
const MAX_RGB: u32 = 0xFF_FFFF;

/// Which event field a category value was read from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CategoryKind {
    /// `catIdx`: index into the document's category list
    Index,
    /// `category`: the category name itself
    Name,
}

impl CategoryKind {
    /// Event field holding values of this kind
    pub fn field(self) -> &'static str {
        match self {
            CategoryKind::Index => CATEGORY_INDEX_FIELD,
            CategoryKind::Name => CATEGORY_NAME_FIELD,
        }
    }
}

/// A category value tagged with the field it came from
///
/// Values compare by type as well as content: the number `1` and the
/// string `"1"` are different categories, while `1` and `1.0` are the same.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryValue {
    pub kind: CategoryKind,
    pub value: Scalar,
}

impl CategoryValue {
    /// Resolve a record's category, preferring `catIdx` over `category`
    pub fn of(record: &EventRecord) -> Option<Self> {
        Self::from_field(record, CategoryKind::Index)
            .or_else(|| Self::from_field(record, CategoryKind::Name))
    }

    /// Read the category from one specific field
    pub fn from_field(record: &EventRecord, kind: CategoryKind) -> Option<Self> {
        record.get(kind.field()).map(|value| Self {
            kind,
            value: value.clone(),
        })
    }

    fn identity(&self) -> (CategoryKind, ScalarKey<'_>) {
        let key = match &self.value {
            Scalar::Number(n) => {
                // -0.0 and 0.0 are one category
                let v = n.as_f64().unwrap_or_default();
                ScalarKey::Number(if v == 0.0 { 0 } else { v.to_bits() })
            }
            Scalar::Text(s) => ScalarKey::Text(s),
        };
        (self.kind, key)
    }
}

#[derive(PartialEq, Eq, Hash)]
enum ScalarKey<'a> {
    Number(u64),
    Text(&'a str),
}

impl PartialEq for CategoryValue {
    fn eq(&self, other: &Self) -> bool {
        self.identity() == other.identity()
    }
}

impl Eq for CategoryValue {}

impl Hash for CategoryValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity().hash(state);
    }
}

impl fmt::Display for CategoryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// A 24-bit display color, rendered as `#rrggbb`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor(u32);

impl HexColor {
    /// Map a scalar in [0, 1] onto the 24-bit color space
    pub fn from_unit(value: f64) -> Self {
        let value = if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0) };
        let scaled = (value * f64::from(MAX_RGB)).round() as u32;
        HexColor(scaled.min(MAX_RGB))
    }

    pub fn from_rgb(rgb: u32) -> Self {
        HexColor(rgb & MAX_RGB)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Color for the category at `index` out of `count` distinct categories.
///
/// Uses the position `(index + 1) / (count + 1)` so no category lands on
/// black or white.
pub fn category_color(index: usize, count: usize) -> HexColor {
    HexColor::from_unit((index + 1) as f64 / (count + 1) as f64)
}

/// Unstable fallback color for events with no resolvable category
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> HexColor {
    HexColor::from_unit(rng.gen::<f64>())
}

/// Distinct category values in first-seen document order
///
/// Colors are looked up through a single document-wide key: `catIdx` if any
/// record carries it, otherwise `category`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CategorySet {
    values: IndexSet<CategoryValue>,
    key: Option<CategoryKind>,
}

impl CategorySet {
    /// Scan records in document order and collect their categories
    pub fn from_records(records: &[EventRecord]) -> Self {
        let values: IndexSet<CategoryValue> =
            records.iter().filter_map(CategoryValue::of).collect();
        let key = [CategoryKind::Index, CategoryKind::Name]
            .into_iter()
            .find(|kind| records.iter().any(|r| r.contains_key(kind.field())));
        debug!("Found {} distinct categories (key {:?})", values.len(), key);
        Self { values, key }
    }

    /// The document-wide category field, if any record has one
    pub fn key(&self) -> Option<CategoryKind> {
        self.key
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn index_of(&self, value: &CategoryValue) -> Option<usize> {
        self.values.get_index_of(value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryValue> {
        self.values.iter()
    }

    /// Deterministic color for a record, if it carries the document's
    /// category field and that value is in the set
    pub fn resolve_color(&self, record: &EventRecord) -> Option<HexColor> {
        let value = CategoryValue::from_field(record, self.key?)?;
        let index = self.index_of(&value)?;
        Some(category_color(index, self.len()))
    }

    /// Color for a record, falling back to a random color
    pub fn assign_color<R: Rng + ?Sized>(&self, record: &EventRecord, rng: &mut R) -> HexColor {
        match self.resolve_color(record) {
            Some(color) => color,
            None => {
                let color = random_color(rng);
                debug!("No resolvable category for event, using random color {}", color);
                color
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::schema::Scalar;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn record(pairs: &[(&str, Scalar)]) -> EventRecord {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_hex_color_is_zero_padded() {
        assert_eq!(HexColor::from_unit(0.0).to_string(), "#000000");
        assert_eq!(HexColor::from_rgb(0xff).to_string(), "#0000ff");
        assert_eq!(HexColor::from_unit(1.0).to_string(), "#ffffff");
    }

    #[test]
    fn test_category_color_positions() {
        assert_eq!(category_color(0, 2).to_string(), "#555555");
        assert_eq!(category_color(1, 2).to_string(), "#aaaaaa");
        assert_eq!(category_color(0, 1).to_string(), "#800000");
    }

    #[test]
    fn test_catidx_wins_over_category() {
        let r = record(&[("category", "Qt".into()), ("catIdx", 8u64.into())]);
        let value = CategoryValue::of(&r).unwrap();
        assert_eq!(value.kind, CategoryKind::Index);
        assert_eq!(value.value, Scalar::from(8u64));
    }

    #[test]
    fn test_category_set_first_seen_order() {
        let records = vec![
            record(&[("category", "b".into())]),
            record(&[("category", "a".into())]),
            record(&[("category", "b".into())]),
            record(&[("name", "no category".into())]),
        ];
        let set = CategorySet::from_records(&records);
        let values: Vec<String> = set.iter().map(|v| v.to_string()).collect();
        assert_eq!(values, vec!["b", "a"]);
    }

    #[test]
    fn test_index_and_name_never_collide() {
        let records = vec![
            record(&[("catIdx", 1u64.into())]),
            record(&[("category", "1".into())]),
        ];
        let set = CategorySet::from_records(&records);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_number_and_text_values_are_distinct() {
        let records = vec![
            record(&[("catIdx", 1u64.into())]),
            record(&[("catIdx", "1".into())]),
            record(&[("catIdx", Scalar::Number(serde_json::Number::from_f64(1.0).unwrap()))]),
        ];
        let set = CategorySet::from_records(&records);
        assert_eq!(set.len(), 2);
        assert_eq!(set.resolve_color(&records[0]).unwrap().to_string(), "#555555");
        assert_eq!(set.resolve_color(&records[1]).unwrap().to_string(), "#aaaaaa");
        assert_eq!(set.resolve_color(&records[2]), set.resolve_color(&records[0]));
    }

    #[test]
    fn test_mixed_keys_resolve_through_catidx_only() {
        let records = vec![
            record(&[("duration", 5u64.into()), ("catIdx", 1u64.into())]),
            record(&[("duration", 3u64.into()), ("category", "x".into())]),
        ];
        let set = CategorySet::from_records(&records);
        assert_eq!(set.key(), Some(CategoryKind::Index));
        assert_eq!(set.len(), 2);
        assert_eq!(set.resolve_color(&records[0]).unwrap().to_string(), "#555555");
        assert!(set.resolve_color(&records[1]).is_none());
    }

    #[test]
    fn test_name_key_when_no_catidx() {
        let records = vec![record(&[("category", "Qt".into())])];
        let set = CategorySet::from_records(&records);
        assert_eq!(set.key(), Some(CategoryKind::Name));
        assert_eq!(set.resolve_color(&records[0]).unwrap().to_string(), "#800000");
        assert_eq!(CategorySet::from_records(&[]).key(), None);
    }

    #[test]
    fn test_unresolved_category_uses_rng() {
        let set = CategorySet::default();
        let r = record(&[("duration", 5u64.into())]);

        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        assert_eq!(set.assign_color(&r, &mut a), set.assign_color(&r, &mut b));
        assert!(set.resolve_color(&r).is_none());
    }
}

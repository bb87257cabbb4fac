use std::cmp::Ordering;
use std::fmt::Debug;

/// How a field is projected into a table cell.
///
/// Every field declares its role up front; nothing is inferred from the
/// runtime value or from the key string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRole {
    /// Boolean flag, shown as a check indicator
    Flag,
    /// URL, shown as a link affordance when non-empty
    ExternalLink,
    /// File name, shown as a file affordance when non-empty
    FileReference,
    /// Money amount, two decimals with locale grouping
    Currency,
    /// ISO date string, shown as "day month"
    Date,
    Plain,
}

/// Raw value of a single record field, borrowed from the record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Number(f64),
    Integer(i64),
    Flag(bool),
}

impl FieldValue<'_> {
    /// Three-way comparison on the raw value.
    ///
    /// Values of different kinds never occur for the same field; they
    /// compare equal so a stable sort leaves them in input order.
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (FieldValue::Text(a), FieldValue::Text(b)) => a.cmp(b),
            (FieldValue::Number(a), FieldValue::Number(b)) => {
                a.partial_cmp(b).unwrap_or(Ordering::Equal)
            }
            (FieldValue::Integer(a), FieldValue::Integer(b)) => a.cmp(b),
            (FieldValue::Flag(a), FieldValue::Flag(b)) => a.cmp(b),
            _ => Ordering::Equal,
        }
    }

    /// Plain string form, used for search, export and plain cells.
    pub fn to_plain_string(&self) -> String {
        match self {
            FieldValue::Text(s) => (*s).to_string(),
            FieldValue::Number(n) => n.to_string(),
            FieldValue::Integer(n) => n.to_string(),
            FieldValue::Flag(b) => b.to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, FieldValue::Text(s) if s.is_empty())
    }
}

/// A closed set of projectable fields for one record type.
pub trait FieldSpec: Copy + Eq + Debug + 'static {
    /// All fields in declaration order
    const ALL: &'static [Self];

    /// Key used in persisted column settings
    fn key(self) -> &'static str;

    fn label(self) -> &'static str;

    fn role(self) -> FieldRole;

    fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.key() == key)
    }
}

/// Capability shared by every entity the table engine can render:
/// a stable string identity plus typed access to its fields.
pub trait Record: Clone {
    type Field: FieldSpec;

    fn id(&self) -> &str;

    /// Assign the identity. Only called when the record is created, or
    /// when it was loaded without one.
    fn set_id(&mut self, id: String);

    fn value(&self, field: Self::Field) -> FieldValue<'_>;

    /// Plain string forms of every field, id included.
    fn search_values(&self) -> Vec<String> {
        let mut values = Vec::with_capacity(Self::Field::ALL.len() + 1);
        values.push(self.id().to_string());
        for field in Self::Field::ALL {
            values.push(self.value(*field).to_plain_string());
        }
        values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_text_is_case_sensitive() {
        assert_eq!(FieldValue::Text("B").compare(&FieldValue::Text("a")), Ordering::Less);
        assert_eq!(FieldValue::Text("a").compare(&FieldValue::Text("a")), Ordering::Equal);
    }

    #[test]
    fn test_compare_numbers_and_flags() {
        assert_eq!(FieldValue::Number(1.5).compare(&FieldValue::Number(10.0)), Ordering::Less);
        assert_eq!(FieldValue::Integer(2024).compare(&FieldValue::Integer(2023)), Ordering::Greater);
        assert_eq!(FieldValue::Flag(false).compare(&FieldValue::Flag(true)), Ordering::Less);
        assert_eq!(FieldValue::Number(f64::NAN).compare(&FieldValue::Number(1.0)), Ordering::Equal);
    }

    #[test]
    fn test_plain_string_form() {
        assert_eq!(FieldValue::Number(1500.0).to_plain_string(), "1500");
        assert_eq!(FieldValue::Number(12.75).to_plain_string(), "12.75");
        assert_eq!(FieldValue::Integer(2024).to_plain_string(), "2024");
        assert_eq!(FieldValue::Flag(true).to_plain_string(), "true");
        assert_eq!(FieldValue::Text("abc").to_plain_string(), "abc");
    }

    #[test]
    fn test_is_empty_only_for_blank_text() {
        assert!(FieldValue::Text("").is_empty());
        assert!(!FieldValue::Text(" ").is_empty());
        assert!(!FieldValue::Number(0.0).is_empty());
        assert!(!FieldValue::Flag(false).is_empty());
    }
}

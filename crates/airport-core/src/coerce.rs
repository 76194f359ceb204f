//! String ⇄ integer adapters for form fields.
//!
//! Text inputs and multi-selects produce strings while the models hold
//! integers. A [`FieldAdapter`] parses the control's value into the model
//! type and formats the model value back for the control:
//!
//! - [`IntField`]: one string ⇄ one integer
//! - [`IntListField`]: a list of strings ⇄ a list of integers
//!
//! `parse(format(n)) == n` for every integer, and `format(parse(s)) == s` for
//! every canonical decimal string; leading zeros are accepted and normalized
//! away.
//!
//! ```rust
//! use airport_core::coerce::{FieldAdapter, IntField, IntListField};
//!
//! let capacity = IntField::<u32>::new("capacity");
//! assert_eq!(capacity.parse(&" 0180 ".to_string()).unwrap(), 180);
//! assert_eq!(capacity.format(&180), "180");
//!
//! let stewards = IntListField::<u64>::new("stewardIds");
//! let raw = vec!["3".to_string(), "14".to_string()];
//! assert_eq!(stewards.parse(&raw).unwrap(), vec![3, 14]);
//! ```

use std::{fmt::Display, marker::PhantomData, str::FromStr};

use crate::error::{ClientError, Result};

/// Two-way conversion between a UI control value and a model value.
pub trait FieldAdapter {
    /// Value as produced by the control
    type View;
    /// Value as stored in the model
    type Model;

    /// Control → model.
    fn parse(&self, view: &Self::View) -> Result<Self::Model>;

    /// Model → control.
    fn format(&self, model: &Self::Model) -> Self::View;
}

/// Scalar adapter: `String ⇄ T`.
#[derive(Debug, Clone)]
pub struct IntField<T> {
    field: &'static str,
    _model: PhantomData<T>,
}

impl<T> IntField<T> {
    /// Creates an adapter; `field` names the form field in error messages.
    pub fn new(field: &'static str) -> Self {
        Self {
            field,
            _model: PhantomData,
        }
    }
}

impl<T> FieldAdapter for IntField<T>
where
    T: FromStr + Display,
    T::Err: Display,
{
    type View = String;
    type Model = T;

    fn parse(&self, view: &String) -> Result<T> {
        parse_int(self.field, view)
    }

    fn format(&self, model: &T) -> String {
        model.to_string()
    }
}

/// List adapter: `Vec<String> ⇄ Vec<T>`, order preserved.
#[derive(Debug, Clone)]
pub struct IntListField<T> {
    field: &'static str,
    _model: PhantomData<T>,
}

impl<T> IntListField<T> {
    pub fn new(field: &'static str) -> Self {
        Self {
            field,
            _model: PhantomData,
        }
    }
}

impl<T> FieldAdapter for IntListField<T>
where
    T: FromStr + Display,
    T::Err: Display,
{
    type View = Vec<String>;
    type Model = Vec<T>;

    fn parse(&self, view: &Vec<String>) -> Result<Vec<T>> {
        view.iter().map(|raw| parse_int(self.field, raw)).collect()
    }

    fn format(&self, model: &Vec<T>) -> Vec<String> {
        model.iter().map(ToString::to_string).collect()
    }
}

fn parse_int<T>(field: &str, raw: &str) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ClientError::invalid_input(field).with_reason("a number is required"));
    }
    trimmed.parse().map_err(|e: T::Err| {
        ClientError::invalid_input(field).with_reason(format!("'{trimmed}' is not a valid number: {e}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_round_trip_from_model() {
        let adapter = IntField::<i64>::new("id");
        for n in [0, 1, -1, 42, 1_000_000, i64::MAX, i64::MIN] {
            assert_eq!(adapter.parse(&adapter.format(&n)).unwrap(), n);
        }
    }

    #[test]
    fn test_scalar_round_trip_from_canonical_text() {
        let adapter = IntField::<i64>::new("id");
        for s in ["0", "7", "-15", "180", "9223372036854775807"] {
            let s = s.to_string();
            assert_eq!(adapter.format(&adapter.parse(&s).unwrap()), s);
        }
    }

    #[test]
    fn test_leading_zeros_are_normalized() {
        let adapter = IntField::<u32>::new("capacity");
        let parsed = adapter.parse(&"007".to_string()).unwrap();
        assert_eq!(parsed, 7);
        assert_eq!(adapter.format(&parsed), "7");
    }

    #[test]
    fn test_rejects_non_numbers() {
        let adapter = IntField::<u32>::new("capacity");
        for bad in ["", "   ", "12abc", "1.5", "-3", "ten"] {
            let err = adapter.parse(&bad.to_string()).unwrap_err();
            assert!(
                matches!(&err, ClientError::InvalidInput { field, .. } if field == "capacity"),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_list_round_trip() {
        let adapter = IntListField::<u64>::new("stewardIds");
        let ids = vec![4, 1, 9];
        let view = adapter.format(&ids);
        assert_eq!(view, vec!["4", "1", "9"]);
        assert_eq!(adapter.parse(&view).unwrap(), ids);

        let empty: Vec<u64> = Vec::new();
        assert!(adapter.format(&empty).is_empty());
        assert!(adapter.parse(&Vec::new()).unwrap().is_empty());
    }

    #[test]
    fn test_list_fails_on_any_bad_entry() {
        let adapter = IntListField::<u64>::new("stewardIds");
        let view = vec!["1".to_string(), "x".to_string(), "3".to_string()];
        assert!(matches!(
            adapter.parse(&view),
            Err(ClientError::InvalidInput { .. })
        ));
    }
}

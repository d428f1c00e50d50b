//! Per-cell type probing and per-field type widening.
//!
//! A field's type is a one-way state machine over `Integer -> Float -> String`.
//! Each observed value is probed on its own, and the probe result is combined
//! with the field's current type by [`widen`]. `String` is terminal.

use crate::field::FieldType;

/// Classifies a single literal by the narrowest type that parses it.
///
/// Tries a base-10 signed 64-bit integer first, then a floating point
/// literal, and falls back to `String`. The result depends only on the text:
/// no trimming, no locale handling. Empty input is a `String`.
pub fn probe(value: &str) -> FieldType {
    if value.parse::<i64>().is_ok() {
        FieldType::Integer
    } else if value.parse::<f64>().is_ok() {
        FieldType::Float
    } else {
        FieldType::String
    }
}

/// Returns the type a field moves to after observing a value that probed as
/// `observed`.
///
/// | current  | Integer | Float  | String |
/// |----------|---------|--------|--------|
/// | Unknown  | Integer | Float  | String |
/// | Integer  | Integer | Float  | String |
/// | Float    | Float   | Float  | String |
/// | String   | String  | String | String |
pub fn widen(current: FieldType, observed: FieldType) -> FieldType {
    match current {
        FieldType::Unknown | FieldType::Integer => observed,
        FieldType::Float => {
            if observed == FieldType::String {
                FieldType::String
            } else {
                FieldType::Float
            }
        }
        FieldType::String => FieldType::String,
    }
}

/// Folds one row of cells into the running field types.
///
/// Terminal fields are not probed.
pub(crate) fn observe_row<'a, I>(types: &mut [FieldType], cells: I)
where
    I: IntoIterator<Item = &'a str>,
{
    for (field_type, cell) in types.iter_mut().zip(cells) {
        if field_type.is_terminal() {
            continue;
        }
        *field_type = widen(*field_type, probe(cell));
    }
}

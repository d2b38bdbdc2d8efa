//! Numeric encoding shared by every union with a number branch.
//!
//! Numbers are held as `f64`. Integral values inside the exactly-representable
//! range are written without a fractional part so that `3` decodes and
//! re-encodes as `3`, not `3.0`.

use serde::Serializer;

/// Largest integer `f64` represents without loss (2^53).
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Write a number in its most compact JSON form.
///
/// Non-finite values have no JSON representation; `serde_json` writes them as `null`.
pub fn serialize_f64<S>(value: f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if value.is_finite() && value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
        serializer.serialize_i64(value as i64)
    } else {
        serializer.serialize_f64(value)
    }
}

/// The JSON value `serialize_f64` would write.
pub fn to_value(value: f64) -> serde_json::Value {
    if value.is_finite() && value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
        serde_json::Value::from(value as i64)
    } else {
        serde_json::Number::from_f64(value)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null)
    }
}

/// `serialize_with` adapter for plain `f64` fields.
pub fn serialize<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serialize_f64(*value, serializer)
}

/// `serialize_with` adapter for optional `f64` fields.
pub mod option {
    use serde::Serializer;

    pub fn serialize<S>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(v) => super::serialize_f64(*v, serializer),
            None => serializer.serialize_none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(value: f64) -> String {
        let mut out = Vec::new();
        let mut ser = serde_json::Serializer::new(&mut out);
        serialize_f64(value, &mut ser).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_integral_values_have_no_fraction() {
        assert_eq!(encode(3.0), "3");
        assert_eq!(encode(-42.0), "-42");
        assert_eq!(encode(0.0), "0");
    }

    #[test]
    fn test_fractional_values_are_kept() {
        assert_eq!(encode(0.25), "0.25");
        assert_eq!(encode(-1.5), "-1.5");
    }

    #[test]
    fn test_huge_values_stay_floating() {
        let encoded = encode(1e300);
        assert_eq!(encoded, "1e+300");
        assert_eq!(encoded.parse::<f64>().unwrap(), 1e300);
    }

    #[test]
    fn test_non_finite_is_null() {
        assert_eq!(encode(f64::NAN), "null");
        assert_eq!(to_value(f64::INFINITY), serde_json::Value::Null);
    }

    #[test]
    fn test_to_value_matches_serializer() {
        assert_eq!(to_value(1.0).to_string(), encode(1.0));
        assert_eq!(to_value(0.5).to_string(), encode(0.5));
    }
}

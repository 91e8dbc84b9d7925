//! HeartRails Geo API Wire Models
//!
//! 外部APIのレスポンス形式とDomain形式への変換

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::domain::entities::LocationRecord;
use crate::domain::repositories::GeocodeError;

/// `{"response": {...}}` envelope
#[derive(Debug, Deserialize)]
struct SearchByPostalResponse {
    #[serde(default)]
    response: SearchByPostalBody,
}

#[derive(Debug, Default, Deserialize)]
struct SearchByPostalBody {
    /// Missing when nothing matched
    #[serde(default)]
    location: Vec<LocationJson>,
    /// e.g. "Postal code does not exist."
    #[serde(default)]
    error: Option<String>,
}

/// One candidate as sent by the API (coordinates arrive as text)
#[derive(Debug, Deserialize)]
struct LocationJson {
    #[serde(default, deserialize_with = "null_as_empty")]
    prefecture: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    city: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    town: String,
    #[serde(default)]
    x: Option<Value>,
    #[serde(default)]
    y: Option<Value>,
    #[serde(default, deserialize_with = "null_as_empty")]
    postal: String,
}

impl LocationJson {
    /// JSON形式からDomain形式に変換
    fn into_domain(self) -> LocationRecord {
        LocationRecord {
            longitude: parse_coordinate(self.x.as_ref()),
            latitude: parse_coordinate(self.y.as_ref()),
            prefecture: self.prefecture,
            city: self.city,
            town: self.town,
            postal_code: self.postal,
        }
    }
}

/// `null` text fields read as ""
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts "139.76" as well as 139.76; anything else is None
fn parse_coordinate(value: Option<&Value>) -> Option<f64> {
    let parsed = match value? {
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Number(n) => n.as_f64(),
        _ => None,
    };
    parsed.filter(|v| v.is_finite())
}

/// Parse a searchByPostal response body into domain records
///
/// An `error` reply or a missing `location` array yields no records.
pub fn parse_search_response(body: &str) -> Result<Vec<LocationRecord>, GeocodeError> {
    let parsed: SearchByPostalResponse =
        serde_json::from_str(body).map_err(|e| GeocodeError::Malformed(e.to_string()))?;

    if let Some(message) = &parsed.response.error {
        log::debug!("Geocode API reported: {}", message);
    }

    Ok(parsed
        .response
        .location
        .into_iter()
        .map(LocationJson::into_domain)
        .collect())
}

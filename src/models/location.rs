use std::fmt;
use serde::de::{IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use crate::models::error::ApiError;

/// Latest GPS report of a single vehicle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub vehicle_id: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Unix seconds, as reported by the vehicle.
    pub timestamp: i64,
}

/// Body of `POST /location`.
///
/// Missing and `null` fields both decode to their zero value, so "absent"
/// is only detectable through [`LocationPayload::validate`]. Keys match
/// case-insensitively and a repeated key overwrites the earlier value.
#[derive(Debug, Default)]
pub struct LocationPayload {
    pub vehicle_id: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub timestamp: Option<i64>,
}

impl<'de> Deserialize<'de> for LocationPayload {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(PayloadVisitor)
    }
}

struct PayloadVisitor;

impl<'de> Visitor<'de> for PayloadVisitor {
    type Value = LocationPayload;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a location object")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut payload = LocationPayload::default();
        while let Some(key) = map.next_key::<String>()? {
            match key.to_ascii_lowercase().as_str() {
                "vehicle_id" => assign(&mut payload.vehicle_id, map.next_value()?),
                "latitude" => assign(&mut payload.latitude, map.next_value()?),
                "longitude" => assign(&mut payload.longitude, map.next_value()?),
                "timestamp" => assign(&mut payload.timestamp, map.next_value()?),
                _ => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }
        Ok(payload)
    }
}

// `null` leaves the field as it was.
fn assign<T>(field: &mut Option<T>, value: Option<T>) {
    if value.is_some() {
        *field = value;
    }
}

impl LocationPayload {
    /// Decodes the first JSON value of `body`. Anything after it is ignored.
    pub fn from_slice(body: &[u8]) -> Result<Self, ApiError> {
        serde_json::Deserializer::from_slice(body)
            .into_iter::<Option<LocationPayload>>()
            .next()
            .ok_or(ApiError::InvalidBody)?
            .map(Option::unwrap_or_default)
            .map_err(|_| ApiError::InvalidBody)
    }

    pub fn validate(self) -> Result<Location, ApiError> {
        let vehicle_id = self.vehicle_id.unwrap_or_default();
        if vehicle_id.is_empty() {
            return Err(ApiError::MissingVehicleId);
        }

        let latitude = self.latitude.unwrap_or_default();
        let longitude = self.longitude.unwrap_or_default();
        // (0, 0) doubles as "not supplied", which also rejects the real point in the Gulf of Guinea.
        if latitude == 0.0 && longitude == 0.0 {
            return Err(ApiError::MissingCoordinates);
        }

        Ok(Location {
            vehicle_id,
            latitude,
            longitude,
            timestamp: self.timestamp.unwrap_or_default(),
        })
    }
}

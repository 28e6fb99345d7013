//! Showroom inventory records.
//!
//! [`Car`] is the canonical record shape, used both on the wire and in
//! stored collections. Write payloads are split into [`CreateCar`] and
//! [`UpdateCar`] because the two endpoints accept different levels of
//! looseness: creation tolerates junk in the numeric fields (coerced to
//! zero), while updates are strictly typed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::CarId;

/// Body style of a car.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CarType {
    /// Two-door fixed-roof car.
    #[default]
    Coupe,
    /// Battery-electric model.
    Electric,
    /// Limited-run flagship.
    Hypercar,
    /// Open-top model.
    Convertible,
    /// Sport utility vehicle.
    #[serde(rename = "SUV")]
    Suv,
}

/// Technical specifications attached to a car.
///
/// Every field is optional; older records only carry a subset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarSpecs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuel: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engine: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transmission: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<String>,
}

/// A car in the showroom inventory.
///
/// Display fields (`price`, `horsepower`, `acceleration`, ...) are
/// preformatted strings owned by whoever writes the record; the paired
/// `*_value` fields carry the machine-readable numbers used for sorting
/// and aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    pub id: CarId,
    pub name: String,
    pub brand: String,
    pub tagline: String,
    /// Display price, e.g. `"$145,000"`.
    pub price: String,
    /// Numeric price in whole dollars.
    pub price_value: u64,
    pub image: String,
    /// Display 0-60 time, e.g. `"3.2s"`.
    pub acceleration: String,
    /// Display horsepower, e.g. `"650 HP"`.
    pub horsepower: String,
    /// Numeric horsepower.
    pub horsepower_value: u32,
    pub top_speed: String,
    pub description: String,
    pub featured: bool,
    #[serde(rename = "type")]
    pub car_type: CarType,
    #[serde(default)]
    pub specs: CarSpecs,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating a car.
///
/// Only `name` is required. The numeric fields are deliberately typed as
/// raw JSON values: clients have historically sent strings or nothing at
/// all here, and those payloads must still produce a record (with the
/// number treated as zero) rather than a validation error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCar {
    /// Explicit ID. Generated from a timestamp when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<CarId>,
    pub name: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub price_value: Value,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub acceleration: String,
    #[serde(default)]
    pub horsepower: String,
    #[serde(default)]
    pub horsepower_value: Value,
    #[serde(default)]
    pub top_speed: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(default, rename = "type")]
    pub car_type: CarType,
    #[serde(default)]
    pub specs: CarSpecs,
}

impl CreateCar {
    /// Numeric price, with non-numeric input coerced to zero.
    #[must_use]
    pub fn coerced_price_value(&self) -> u64 {
        coerce_non_negative(&self.price_value)
    }

    /// Numeric horsepower, with non-numeric input coerced to zero.
    #[must_use]
    pub fn coerced_horsepower_value(&self) -> u32 {
        u32::try_from(coerce_non_negative(&self.horsepower_value)).unwrap_or(0)
    }
}

/// Coerce a loose JSON value into a non-negative integer.
///
/// Anything that is not already a non-negative JSON integer (strings,
/// floats, negatives, null, objects) counts as absent and maps to zero.
fn coerce_non_negative(value: &Value) -> u64 {
    value.as_u64().unwrap_or(0)
}

/// Payload for updating a car.
///
/// Every field is optional; omitted fields keep their stored value. The ID
/// itself is not updatable, the path parameter names the record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCar {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_value: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acceleration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horsepower: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horsepower_value: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_speed: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub car_type: Option<CarType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specs: Option<CarSpecs>,
}

impl UpdateCar {
    /// Merge the present fields into an existing record.
    ///
    /// Timestamps are left alone; whoever persists the record stamps them.
    pub fn apply(self, car: &mut Car) {
        if let Some(name) = self.name {
            car.name = name;
        }
        if let Some(brand) = self.brand {
            car.brand = brand;
        }
        if let Some(tagline) = self.tagline {
            car.tagline = tagline;
        }
        if let Some(price) = self.price {
            car.price = price;
        }
        if let Some(price_value) = self.price_value {
            car.price_value = price_value;
        }
        if let Some(image) = self.image {
            car.image = image;
        }
        if let Some(acceleration) = self.acceleration {
            car.acceleration = acceleration;
        }
        if let Some(horsepower) = self.horsepower {
            car.horsepower = horsepower;
        }
        if let Some(horsepower_value) = self.horsepower_value {
            car.horsepower_value = horsepower_value;
        }
        if let Some(top_speed) = self.top_speed {
            car.top_speed = top_speed;
        }
        if let Some(description) = self.description {
            car.description = description;
        }
        if let Some(featured) = self.featured {
            car.featured = featured;
        }
        if let Some(car_type) = self.car_type {
            car.car_type = car_type;
        }
        if let Some(specs) = self.specs {
            car.specs = specs;
        }
    }
}

/// Response body for a successful car deletion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteCarResponse {
    pub success: bool,
    pub message: String,
    pub id: CarId,
}

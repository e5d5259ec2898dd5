use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{CoreError, CoreResult};

/// City identifier shared by airports and flights.
///
/// Cities are matched by value, never by reference: an airport serves a
/// flight when both carry an equal `City`. Input is trimmed and upper-cased
/// so `"delhi"` and `" DELHI "` name the same city.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct City(String);

impl City {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(name.as_ref().trim().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for City {
    fn from(value: String) -> Self {
        City::new(value)
    }
}

impl From<&str> for City {
    fn from(value: &str) -> Self {
        City::new(value)
    }
}

impl From<City> for String {
    fn from(city: City) -> Self {
        city.0
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An airport, keyed by its unique name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "AirportRecord")]
pub struct Airport {
    pub name: String,
    pub city: City,
    pub terminals: u32,
}

impl Airport {
    pub fn new(name: impl Into<String>, city: impl Into<City>, terminals: u32) -> CoreResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CoreError::ValidationError("airport name must not be empty".to_string()));
        }
        if terminals == 0 {
            return Err(CoreError::ValidationError(format!(
                "airport {} must have at least one terminal",
                name
            )));
        }

        Ok(Self {
            name,
            city: city.into(),
            terminals,
        })
    }
}

// Wire shape; every decoded airport goes through `Airport::new`.
#[derive(Deserialize)]
struct AirportRecord {
    name: String,
    city: City,
    terminals: u32,
}

impl TryFrom<AirportRecord> for Airport {
    type Error = CoreError;

    fn try_from(record: AirportRecord) -> Result<Self, Self::Error> {
        Airport::new(record.name, record.city, record.terminals)
    }
}

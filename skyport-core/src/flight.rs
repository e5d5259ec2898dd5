use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{City, CoreError, CoreResult};

pub type FlightId = i32;

/// A direct flight between two cities on a given day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "FlightRecord")]
pub struct Flight {
    pub id: FlightId,
    pub from_city: City,
    pub to_city: City,
    pub date: NaiveDate, // Day of operation, no time component
    pub duration_hours: f64,
    pub max_capacity: u32,
}

impl Flight {
    pub fn new(
        id: FlightId,
        from_city: impl Into<City>,
        to_city: impl Into<City>,
        date: NaiveDate,
        duration_hours: f64,
        max_capacity: u32,
    ) -> CoreResult<Self> {
        if !duration_hours.is_finite() || duration_hours < 0.0 {
            return Err(CoreError::ValidationError(format!(
                "flight {} has invalid duration {}",
                id, duration_hours
            )));
        }

        Ok(Self {
            id,
            from_city: from_city.into(),
            to_city: to_city.into(),
            date,
            duration_hours,
            max_capacity,
        })
    }

    /// True when the flight departs from or lands in `city`.
    pub fn touches(&self, city: &City) -> bool {
        &self.from_city == city || &self.to_city == city
    }
}

#[derive(Deserialize)]
struct FlightRecord {
    id: FlightId,
    from_city: City,
    to_city: City,
    date: NaiveDate,
    duration_hours: f64,
    max_capacity: u32,
}

impl TryFrom<FlightRecord> for Flight {
    type Error = CoreError;

    fn try_from(r: FlightRecord) -> Result<Self, Self::Error> {
        Flight::new(r.id, r.from_city, r.to_city, r.date, r.duration_hours, r.max_capacity)
    }
}

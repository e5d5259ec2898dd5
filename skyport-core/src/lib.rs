pub mod airport;
pub mod flight;
pub mod passenger;
pub mod fare;
pub mod outcome;
pub mod repository;

pub use airport::{Airport, City};
pub use fare::FareSchedule;
pub use flight::{Flight, FlightId};
pub use outcome::Outcome;
pub use passenger::{Passenger, PassengerId};
pub use repository::BookingRepository;

/// Sentinel reported to callers when no direct flight connects two cities.
pub const NO_ROUTE: f64 = -1.0;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

pub type CoreResult<T> = Result<T, CoreError>;

/// Recoverable outcomes of booking operations. None of these abort the store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookingError {
    #[error("{kind} not found: {id}")]
    NotFound {
        kind: &'static str,
        id: String,
    },

    #[error("Flight {flight_id} is full: capacity {capacity}")]
    CapacityExceeded {
        flight_id: FlightId,
        capacity: u32,
    },

    #[error("Passenger {passenger_id} already holds a seat on flight {flight_id}")]
    DuplicateBooking {
        flight_id: FlightId,
        passenger_id: PassengerId,
    },

    #[error("Passenger {passenger_id} has no booking on flight {flight_id}")]
    NoSuchBooking {
        flight_id: FlightId,
        passenger_id: PassengerId,
    },
}

impl BookingError {
    pub fn flight_not_found(flight_id: FlightId) -> Self {
        BookingError::NotFound {
            kind: "Flight",
            id: flight_id.to_string(),
        }
    }
}

pub type BookingResult<T> = Result<T, BookingError>;

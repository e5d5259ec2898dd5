use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use skyport_core::{
    Airport, BookingRepository, BookingResult, City, Flight, FlightId, Outcome, Passenger,
    PassengerId, NO_ROUTE,
};
use skyport_store::BookingStore;

/// One line of a command script, tagged by `op`.
#[derive(Debug, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Command {
    AddAirport(Airport),
    AddFlight(Flight),
    AddPassenger(Passenger),
    LargestAirport,
    ShortestDuration { from: City, to: City },
    PeopleOn { date: NaiveDate, airport: String },
    Fare { flight_id: FlightId },
    Book { flight_id: FlightId, passenger_id: PassengerId },
    Cancel { flight_id: FlightId, passenger_id: PassengerId },
    BookingsOf { passenger_id: PassengerId },
    OriginAirport { flight_id: FlightId },
    Revenue { flight_id: FlightId },
}

#[derive(Debug, Serialize, PartialEq)]
pub struct CommandReport {
    pub op: &'static str,
    pub result: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CommandReport {
    fn value(op: &'static str, result: Value) -> Self {
        Self { op, result, error: None }
    }

    fn outcome(op: &'static str, result: BookingResult<()>) -> Self {
        Self {
            op,
            result: json!(Outcome::from(&result)),
            error: result.err().map(|e| e.to_string()),
        }
    }
}

impl Command {
    pub fn op(&self) -> &'static str {
        match self {
            Command::AddAirport(_) => "add_airport",
            Command::AddFlight(_) => "add_flight",
            Command::AddPassenger(_) => "add_passenger",
            Command::LargestAirport => "largest_airport",
            Command::ShortestDuration { .. } => "shortest_duration",
            Command::PeopleOn { .. } => "people_on",
            Command::Fare { .. } => "fare",
            Command::Book { .. } => "book",
            Command::Cancel { .. } => "cancel",
            Command::BookingsOf { .. } => "bookings_of",
            Command::OriginAirport { .. } => "origin_airport",
            Command::Revenue { .. } => "revenue",
        }
    }

    pub fn execute(self, store: &mut BookingStore) -> CommandReport {
        let op = self.op();
        match self {
            Command::AddAirport(airport) => {
                store.add_airport(airport);
                CommandReport::outcome(op, Ok(()))
            }
            Command::AddFlight(flight) => {
                store.add_flight(flight);
                CommandReport::outcome(op, Ok(()))
            }
            Command::AddPassenger(passenger) => {
                store.add_passenger(passenger);
                CommandReport::outcome(op, Ok(()))
            }
            Command::LargestAirport => CommandReport::value(op, json!(store.largest_airport_name())),
            Command::ShortestDuration { from, to } => {
                let hours = store.shortest_direct_duration(&from, &to).unwrap_or(NO_ROUTE);
                CommandReport::value(op, json!(hours))
            }
            Command::PeopleOn { date, airport } => {
                CommandReport::value(op, json!(store.people_at_airport_on(date, &airport)))
            }
            Command::Fare { flight_id } => CommandReport::value(op, json!(store.flight_fare(flight_id))),
            Command::Book { flight_id, passenger_id } => {
                CommandReport::outcome(op, store.book_ticket(flight_id, passenger_id))
            }
            Command::Cancel { flight_id, passenger_id } => {
                CommandReport::outcome(op, store.cancel_ticket(flight_id, passenger_id))
            }
            Command::BookingsOf { passenger_id } => {
                CommandReport::value(op, json!(store.count_bookings_by_passenger(passenger_id)))
            }
            Command::OriginAirport { flight_id } => {
                CommandReport::value(op, json!(store.origin_airport_name(flight_id)))
            }
            Command::Revenue { flight_id } => {
                CommandReport::value(op, json!(store.revenue_for_flight(flight_id)))
            }
        }
    }
}

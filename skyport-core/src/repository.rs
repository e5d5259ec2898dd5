use chrono::NaiveDate;

use crate::{Airport, BookingResult, City, Flight, FlightId, Passenger, PassengerId};

/// Data access contract for airports, flights, passengers and bookings.
///
/// Lookups on unknown keys are ordinary outcomes: queries answer with
/// `None`, zero or an empty result, and mutations with a `BookingError`.
pub trait BookingRepository {
    /// Register an airport, replacing any airport with the same name.
    fn add_airport(&mut self, airport: Airport) -> Option<Airport>;

    /// Register a flight, returning the one it replaced.
    fn add_flight(&mut self, flight: Flight) -> Option<Flight>;

    /// Register a passenger, returning the one it replaced.
    fn add_passenger(&mut self, passenger: Passenger) -> Option<Passenger>;

    /// Name of the airport with most terminals; ties go to the smallest name.
    fn largest_airport_name(&self) -> Option<String>;

    /// Shortest duration among direct flights from `from` to `to`.
    fn shortest_direct_duration(&self, from: &City, to: &City) -> Option<f64>;

    /// Passengers booked on flights departing or arriving at the airport's
    /// city on `date`.
    fn people_at_airport_on(&self, date: NaiveDate, airport_name: &str) -> usize;

    /// Fare quoted to the next passenger of a flight.
    fn flight_fare(&self, flight_id: FlightId) -> Option<u64>;

    fn book_ticket(&mut self, flight_id: FlightId, passenger_id: PassengerId) -> BookingResult<()>;

    fn cancel_ticket(&mut self, flight_id: FlightId, passenger_id: PassengerId) -> BookingResult<()>;

    /// Bookings held by a passenger across all flights.
    fn count_bookings_by_passenger(&self, passenger_id: PassengerId) -> usize;

    /// Name of an airport located in the flight's origin city.
    fn origin_airport_name(&self, flight_id: FlightId) -> Option<String>;

    /// Sum of fares paid by everyone currently booked on the flight.
    fn revenue_for_flight(&self, flight_id: FlightId) -> u64;
}

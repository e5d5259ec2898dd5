use chrono::NaiveDate;
use skyport_core::{
    Airport, BookingError, BookingRepository, BookingResult, City, FareSchedule, Flight, FlightId,
    Passenger, PassengerId,
};
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, info, warn};

/// In-memory airport, flight and passenger registry with per-flight bookings.
///
/// Airports live in a `BTreeMap` so every scan visits names in ascending
/// order, which makes name tie-breaks deterministic.
#[derive(Debug, Default)]
pub struct BookingStore {
    airports: BTreeMap<String, Airport>,
    flights: HashMap<FlightId, Flight>,
    passengers: HashMap<PassengerId, Passenger>,
    // Insertion order of bookings per flight, no duplicates
    bookings: HashMap<FlightId, Vec<PassengerId>>,
    fares: FareSchedule,
}

impl BookingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fares(fares: FareSchedule) -> Self {
        Self {
            fares,
            ..Self::default()
        }
    }

    pub fn fares(&self) -> &FareSchedule {
        &self.fares
    }

    pub fn airport(&self, name: &str) -> Option<&Airport> {
        self.airports.get(name)
    }

    pub fn flight(&self, flight_id: FlightId) -> Option<&Flight> {
        self.flights.get(&flight_id)
    }

    pub fn passenger(&self, passenger_id: PassengerId) -> Option<&Passenger> {
        self.passengers.get(&passenger_id)
    }

    /// Passengers booked on a flight, in booking order.
    pub fn passengers_on(&self, flight_id: FlightId) -> &[PassengerId] {
        self.bookings
            .get(&flight_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn booked_count(&self, flight_id: FlightId) -> usize {
        self.passengers_on(flight_id).len()
    }
}

impl BookingRepository for BookingStore {
    fn add_airport(&mut self, airport: Airport) -> Option<Airport> {
        debug!(airport = %airport.name, city = %airport.city, terminals = airport.terminals, "Registering airport");
        self.airports.insert(airport.name.clone(), airport)
    }

    fn add_flight(&mut self, flight: Flight) -> Option<Flight> {
        debug!(flight_id = flight.id, from = %flight.from_city, to = %flight.to_city, "Registering flight");
        self.flights.insert(flight.id, flight)
    }

    fn add_passenger(&mut self, passenger: Passenger) -> Option<Passenger> {
        debug!(passenger_id = passenger.id, "Registering passenger");
        self.passengers.insert(passenger.id, passenger)
    }

    fn largest_airport_name(&self) -> Option<String> {
        // Ascending name order: a later airport only wins with strictly more terminals
        let mut largest: Option<&Airport> = None;
        for airport in self.airports.values() {
            match largest {
                Some(current) if airport.terminals <= current.terminals => {}
                _ => largest = Some(airport),
            }
        }
        largest.map(|airport| airport.name.clone())
    }

    fn shortest_direct_duration(&self, from: &City, to: &City) -> Option<f64> {
        self.flights
            .values()
            .filter(|flight| &flight.from_city == from && &flight.to_city == to)
            .map(|flight| flight.duration_hours)
            .min_by(|a, b| a.total_cmp(b))
    }

    fn people_at_airport_on(&self, date: NaiveDate, airport_name: &str) -> usize {
        let Some(airport) = self.airports.get(airport_name) else {
            debug!(airport = airport_name, "Unknown airport, no traffic");
            return 0;
        };

        self.flights
            .values()
            .filter(|flight| flight.date == date && flight.touches(&airport.city))
            .map(|flight| self.booked_count(flight.id))
            .sum()
    }

    fn flight_fare(&self, flight_id: FlightId) -> Option<u64> {
        if !self.flights.contains_key(&flight_id) {
            return None;
        }
        Some(self.fares.fare_for(self.booked_count(flight_id)))
    }

    fn book_ticket(&mut self, flight_id: FlightId, passenger_id: PassengerId) -> BookingResult<()> {
        let capacity = match self.flights.get(&flight_id) {
            Some(flight) => flight.max_capacity,
            None => {
                warn!(flight_id, passenger_id, "Booking rejected: unknown flight");
                return Err(BookingError::flight_not_found(flight_id));
            }
        };

        // Capacity is checked before duplicates
        let current = self.passengers_on(flight_id);

        if current.len() >= capacity as usize {
            warn!(flight_id, passenger_id, capacity, "Booking rejected: flight is full");
            return Err(BookingError::CapacityExceeded { flight_id, capacity });
        }

        if current.contains(&passenger_id) {
            warn!(flight_id, passenger_id, "Booking rejected: duplicate");
            return Err(BookingError::DuplicateBooking { flight_id, passenger_id });
        }

        let booked = self.bookings.entry(flight_id).or_default();
        booked.push(passenger_id);
        info!(flight_id, passenger_id, seats_taken = booked.len(), "Ticket booked");
        Ok(())
    }

    fn cancel_ticket(&mut self, flight_id: FlightId, passenger_id: PassengerId) -> BookingResult<()> {
        if !self.flights.contains_key(&flight_id) {
            warn!(flight_id, passenger_id, "Cancellation rejected: unknown flight");
            return Err(BookingError::flight_not_found(flight_id));
        }

        let booked = self.bookings.get_mut(&flight_id);
        let position = booked
            .as_ref()
            .and_then(|list| list.iter().position(|id| *id == passenger_id));

        match (booked, position) {
            (Some(list), Some(index)) => {
                list.remove(index);
                info!(flight_id, passenger_id, seats_taken = list.len(), "Ticket cancelled");
                Ok(())
            }
            _ => {
                warn!(flight_id, passenger_id, "Cancellation rejected: no such booking");
                Err(BookingError::NoSuchBooking { flight_id, passenger_id })
            }
        }
    }

    fn count_bookings_by_passenger(&self, passenger_id: PassengerId) -> usize {
        self.bookings
            .values()
            .filter(|list| list.contains(&passenger_id))
            .count()
    }

    fn origin_airport_name(&self, flight_id: FlightId) -> Option<String> {
        let flight = self.flights.get(&flight_id)?;
        self.airports
            .values()
            .find(|airport| airport.city == flight.from_city)
            .map(|airport| airport.name.clone())
    }

    fn revenue_for_flight(&self, flight_id: FlightId) -> u64 {
        self.fares.revenue_for(self.booked_count(flight_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    fn flight(id: FlightId, from: &str, to: &str, hours: f64, capacity: u32) -> Flight {
        Flight::new(id, from, to, day(1), hours, capacity).unwrap()
    }

    #[test]
    fn test_largest_airport_tie_break() {
        let mut store = BookingStore::new();
        assert_eq!(store.largest_airport_name(), None);

        store.add_airport(Airport::new("Kempegowda", "Bangalore", 2).unwrap());
        store.add_airport(Airport::new("Indira Gandhi", "Delhi", 3).unwrap());
        store.add_airport(Airport::new("Chhatrapati Shivaji", "Mumbai", 3).unwrap());

        assert_eq!(store.largest_airport_name().as_deref(), Some("Chhatrapati Shivaji"));

        store.add_airport(Airport::new("Zzz", "Jaipur", 4).unwrap());
        assert_eq!(store.largest_airport_name().as_deref(), Some("Zzz"));
    }

    #[test]
    fn test_add_airport_overwrites_silently() {
        let mut store = BookingStore::new();
        assert!(store.add_airport(Airport::new("CCU", "Kolkata", 1).unwrap()).is_none());

        let replaced = store.add_airport(Airport::new("CCU", "Kolkata", 2).unwrap());
        assert_eq!(replaced.map(|a| a.terminals), Some(1));
        assert_eq!(store.airport("CCU").unwrap().terminals, 2);
    }

    #[test]
    fn test_shortest_direct_duration() {
        let mut store = BookingStore::new();
        store.add_flight(flight(1, "Delhi", "Mumbai", 2.5, 10));
        store.add_flight(flight(2, "Delhi", "Mumbai", 1.0, 10));
        store.add_flight(flight(3, "Mumbai", "Delhi", 0.5, 10));

        let delhi = City::new("Delhi");
        let mumbai = City::new("Mumbai");
        assert_eq!(store.shortest_direct_duration(&delhi, &mumbai), Some(1.0));
        assert_eq!(store.shortest_direct_duration(&mumbai, &delhi), Some(0.5));
        assert_eq!(store.shortest_direct_duration(&delhi, &City::new("Kanpur")), None);
    }

    #[test]
    fn test_capacity_and_fare() {
        let mut store = BookingStore::new();
        store.add_flight(flight(1, "Delhi", "Mumbai", 2.0, 2));

        assert_eq!(store.flight_fare(1), Some(3000));
        store.book_ticket(1, 101).unwrap();
        store.book_ticket(1, 102).unwrap();
        assert_eq!(store.flight_fare(1), Some(3100));

        let result = store.book_ticket(1, 103);
        assert_eq!(result, Err(BookingError::CapacityExceeded { flight_id: 1, capacity: 2 }));
        assert_eq!(store.passengers_on(1), &[101, 102]);
    }

    #[test]
    fn test_rejected_booking_leaves_no_trace() {
        let mut store = BookingStore::new();
        store.add_flight(flight(1, "Delhi", "Mumbai", 2.0, 0));

        let result = store.book_ticket(1, 7);

        assert_eq!(result, Err(BookingError::CapacityExceeded { flight_id: 1, capacity: 0 }));
        assert!(!store.bookings.contains_key(&1));
    }

    #[test]
    fn test_full_flight_reports_capacity_before_duplicate() {
        let mut store = BookingStore::new();
        store.add_flight(flight(1, "Delhi", "Mumbai", 2.0, 1));
        store.book_ticket(1, 7).unwrap();

        assert!(matches!(store.book_ticket(1, 7), Err(BookingError::CapacityExceeded { .. })));
    }

    #[test]
    fn test_duplicate_booking_rejected() {
        let mut store = BookingStore::new();
        store.add_flight(flight(1, "Delhi", "Mumbai", 2.0, 5));

        store.book_ticket(1, 7).unwrap();
        let result = store.book_ticket(1, 7);

        assert!(matches!(result, Err(BookingError::DuplicateBooking { .. })));
        assert_eq!(store.passengers_on(1).len(), 1);
    }

    #[test]
    fn test_unknown_flight() {
        let mut store = BookingStore::new();

        assert_eq!(store.flight_fare(42), None);
        assert_eq!(store.revenue_for_flight(42), 0);
        assert_eq!(store.origin_airport_name(42), None);
        assert_eq!(store.book_ticket(42, 1), Err(BookingError::flight_not_found(42)));
        assert_eq!(store.cancel_ticket(42, 1), Err(BookingError::flight_not_found(42)));
        assert!(store.passengers_on(42).is_empty());
    }

    #[test]
    fn test_cancel_ticket() {
        let mut store = BookingStore::new();
        store.add_flight(flight(1, "Delhi", "Mumbai", 2.0, 5));

        assert!(matches!(store.cancel_ticket(1, 7), Err(BookingError::NoSuchBooking { .. })));

        store.book_ticket(1, 7).unwrap();
        store.book_ticket(1, 8).unwrap();
        store.cancel_ticket(1, 7).unwrap();

        assert_eq!(store.passengers_on(1), &[8]);
        assert!(store.cancel_ticket(1, 7).is_err());
    }

    #[test]
    fn test_people_at_airport_on_date() {
        let mut store = BookingStore::new();
        store.add_airport(Airport::new("IGI", "Delhi", 3).unwrap());
        store.add_flight(flight(1, "Delhi", "Mumbai", 2.0, 5));
        store.add_flight(flight(2, "Kolkata", "Delhi", 2.0, 5));
        store.add_flight(Flight::new(3, "Delhi", "Jaipur", day(2), 1.0, 5).unwrap());
        store.add_flight(flight(4, "Delhi", "Kanpur", 1.0, 5)); // never booked

        store.book_ticket(1, 1).unwrap();
        store.book_ticket(1, 2).unwrap();
        store.book_ticket(2, 3).unwrap();
        store.book_ticket(3, 4).unwrap();

        assert_eq!(store.people_at_airport_on(day(1), "IGI"), 3);
        assert_eq!(store.people_at_airport_on(day(2), "IGI"), 1);
        assert_eq!(store.people_at_airport_on(day(1), "Unknown"), 0);
    }

    #[test]
    fn test_bookings_by_passenger() {
        let mut store = BookingStore::new();
        store.add_flight(flight(1, "Delhi", "Mumbai", 2.0, 5));
        store.add_flight(flight(2, "Mumbai", "Delhi", 2.0, 5));

        store.book_ticket(1, 9).unwrap();
        store.book_ticket(2, 9).unwrap();
        store.book_ticket(2, 10).unwrap();

        assert_eq!(store.count_bookings_by_passenger(9), 2);
        assert_eq!(store.count_bookings_by_passenger(10), 1);
        assert_eq!(store.count_bookings_by_passenger(11), 0);
    }

    #[test]
    fn test_origin_airport_name() {
        let mut store = BookingStore::new();
        store.add_flight(flight(1, "Mumbai", "Delhi", 2.0, 5));
        assert_eq!(store.origin_airport_name(1), None);

        store.add_airport(Airport::new("Santacruz", "mumbai", 1).unwrap());
        store.add_airport(Airport::new("Chhatrapati Shivaji", "Mumbai", 2).unwrap());
        store.add_airport(Airport::new("IGI", "Delhi", 3).unwrap());

        assert_eq!(store.origin_airport_name(1).as_deref(), Some("Chhatrapati Shivaji"));
    }

    #[test]
    fn test_revenue_tracks_bookings() {
        let mut store = BookingStore::new();
        store.add_flight(flight(1, "Delhi", "Mumbai", 2.0, 10));

        store.book_ticket(1, 1).unwrap();
        store.book_ticket(1, 2).unwrap();
        store.book_ticket(1, 3).unwrap();
        assert_eq!(store.revenue_for_flight(1), 9150);

        store.cancel_ticket(1, 2).unwrap();
        assert_eq!(store.revenue_for_flight(1), 6050);
    }

    #[test]
    fn test_custom_fares() {
        let mut store = BookingStore::with_fares(FareSchedule::new(1000, 100));
        store.add_flight(flight(1, "Delhi", "Mumbai", 2.0, 10));
        store.book_ticket(1, 1).unwrap();

        assert_eq!(store.flight_fare(1), Some(1100));
        assert_eq!(store.revenue_for_flight(1), 1000);
    }
}

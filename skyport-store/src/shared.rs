use chrono::NaiveDate;
use skyport_core::{
    Airport, BookingRepository, BookingResult, City, Flight, FlightId, Passenger, PassengerId,
};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::BookingStore;

/// Cloneable handle for serving one `BookingStore` to concurrent callers.
///
/// A single lock guards all four maps, so there is no acquisition order to
/// get wrong. Every mutation leaves the maps consistent before it can panic,
/// which makes it safe to keep using a poisoned lock.
#[derive(Debug, Clone, Default)]
pub struct SharedBookingStore {
    inner: Arc<RwLock<BookingStore>>,
}

impl SharedBookingStore {
    pub fn new(store: BookingStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, BookingStore> {
        self.inner.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, BookingStore> {
        self.inner.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn add_airport(&self, airport: Airport) -> Option<Airport> {
        self.write().add_airport(airport)
    }

    pub fn add_flight(&self, flight: Flight) -> Option<Flight> {
        self.write().add_flight(flight)
    }

    pub fn add_passenger(&self, passenger: Passenger) -> Option<Passenger> {
        self.write().add_passenger(passenger)
    }

    pub fn largest_airport_name(&self) -> Option<String> {
        self.read().largest_airport_name()
    }

    pub fn shortest_direct_duration(&self, from: &City, to: &City) -> Option<f64> {
        self.read().shortest_direct_duration(from, to)
    }

    pub fn people_at_airport_on(&self, date: NaiveDate, airport_name: &str) -> usize {
        self.read().people_at_airport_on(date, airport_name)
    }

    pub fn flight_fare(&self, flight_id: FlightId) -> Option<u64> {
        self.read().flight_fare(flight_id)
    }

    pub fn book_ticket(&self, flight_id: FlightId, passenger_id: PassengerId) -> BookingResult<()> {
        self.write().book_ticket(flight_id, passenger_id)
    }

    pub fn cancel_ticket(&self, flight_id: FlightId, passenger_id: PassengerId) -> BookingResult<()> {
        self.write().cancel_ticket(flight_id, passenger_id)
    }

    pub fn count_bookings_by_passenger(&self, passenger_id: PassengerId) -> usize {
        self.read().count_bookings_by_passenger(passenger_id)
    }

    pub fn origin_airport_name(&self, flight_id: FlightId) -> Option<String> {
        self.read().origin_airport_name(flight_id)
    }

    pub fn revenue_for_flight(&self, flight_id: FlightId) -> u64 {
        self.read().revenue_for_flight(flight_id)
    }

    /// Run a read-only closure against a consistent view of the store.
    pub fn with_store<R>(&self, f: impl FnOnce(&BookingStore) -> R) -> R {
        f(&self.read())
    }

    /// Run several mutations under one write lock.
    pub fn with_store_mut<R>(&self, f: impl FnOnce(&mut BookingStore) -> R) -> R {
        f(&mut self.write())
    }
}

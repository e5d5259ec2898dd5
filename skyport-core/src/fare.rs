use serde::{Deserialize, Serialize};

/// Booking-count driven fare progression.
///
/// The next passenger pays `base_fare + already_booked * increment`, so the
/// revenue of `n` bookings is the arithmetic series over the first `n` fares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FareSchedule {
    /// Fare quoted on an empty flight
    #[serde(default = "default_base_fare")]
    pub base_fare: u64,

    /// Added for every seat already sold
    #[serde(default = "default_increment")]
    pub increment: u64,
}

fn default_base_fare() -> u64 { 3000 }

fn default_increment() -> u64 { 50 }

impl Default for FareSchedule {
    fn default() -> Self {
        Self {
            base_fare: default_base_fare(),
            increment: default_increment(),
        }
    }
}

impl FareSchedule {
    pub fn new(base_fare: u64, increment: u64) -> Self {
        Self { base_fare, increment }
    }

    /// Price for the next passenger when `already_booked` seats are sold.
    /// Saturates at `u64::MAX`.
    pub fn fare_for(&self, already_booked: usize) -> u64 {
        (already_booked as u64)
            .saturating_mul(self.increment)
            .saturating_add(self.base_fare)
    }

    /// Total collected from `bookings` passengers: n*a + d*n(n-1)/2.
    /// Saturates at `u64::MAX`.
    pub fn revenue_for(&self, bookings: usize) -> u64 {
        let n = bookings as u64;
        if n == 0 {
            return 0;
        }
        // Halve whichever factor is even so n(n-1)/2 stays exact
        let steps = if n % 2 == 0 {
            (n / 2).saturating_mul(n - 1)
        } else {
            n.saturating_mul((n - 1) / 2)
        };
        n.saturating_mul(self.base_fare)
            .saturating_add(self.increment.saturating_mul(steps))
    }
}

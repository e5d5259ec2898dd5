pub mod app_config;
pub mod booking_store;
pub mod shared;

pub use booking_store::BookingStore;
pub use shared::SharedBookingStore;

use app_config::Config;

/// Empty store priced with the configured fare schedule.
pub fn store_from_config(config: &Config) -> BookingStore {
    BookingStore::with_fares(config.fares)
}

//! Built-in booking tools.

mod flights;
mod hotels;
mod transfers;
mod trips;

pub use flights::{BookFlight, SearchFlights};
pub use hotels::{BookHotel, SearchHotels};
pub use transfers::{BookTransfer, SearchTransfers};
pub use trips::GetTripDetails;

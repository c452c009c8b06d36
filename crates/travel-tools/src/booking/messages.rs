//! User-facing messages returned in result `error` fields.

pub const PAST_DATE: &str =
    "Please provide a date in the format: YYYY-MM-DD, and I will try the search again.";
pub const FLIGHT_SEARCH_FAILED: &str = "Failed to search for flights. Please try again.";
pub const UNPROCESSABLE_FLIGHTS: &str =
    "Unable to process flight search results. Please try again.";

pub const SCHEDULE_CHANGED: &str = "This flight's schedule has recently changed or has been booked out. Please search with a later date. I apologize for the inconvenience.";
pub const NO_MATCHING_FLIGHTS: &str = "No flights found matching the criteria";
pub const FLIGHT_NOT_FOUND: &str = "Could not find the selected flight. Please search again.";
pub const PRICE_CONFIRMATION_FAILED: &str = "Price confirmation failed";
pub const BOOKING_FAILED: &str = "Booking failed";

pub const HOTEL_SEARCH_FAILED: &str = "Hotel search failed";
pub const NO_HOTELS_FOUND: &str = "No hotels found in the specified location";

pub const TRANSFER_SEARCH_FAILED: &str = "Transfer search failed";

pub fn invalid_origin(origin: &str) -> String {
    format!(
        "Invalid origin airport code: {}. Please provide a valid IATA airport code.",
        origin
    )
}

pub fn invalid_destination(destination: &str) -> String {
    format!(
        "Invalid destination airport code: {}. Please provide a valid IATA airport code.",
        destination
    )
}

pub fn invalid_date(date: &str) -> String {
    format!(
        "Invalid date format: {}. Please provide the date in YYYY-MM-DD format.",
        date
    )
}

pub fn no_flights_found(origin: &str, destination: &str, date: &str) -> String {
    format!(
        "No flights found from {} to {} on {}. Try different dates or airports.",
        origin, destination, date
    )
}

/// Apology shown when the provider cannot be reached or answers nonsense.
fn apology(attempt: &str, retry: &str) -> String {
    format!(
        "I encountered an issue while trying to {}. This could be due to temporary availability issues. Please try searching for {} again, and I'll help you complete the booking. Also could be the access token issue, try refreshing it. Sorry for the inconvenience!",
        attempt, retry
    )
}

pub fn flight_search_apology() -> String {
    apology("search for your flight", "flights")
}

pub fn flight_booking_apology() -> String {
    apology("book your flight", "flights")
}

pub fn hotel_search_apology() -> String {
    apology("search for hotels", "hotels")
}

pub fn transfer_search_apology() -> String {
    apology("search for transfers", "transfers")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apology_wording() {
        assert_eq!(
            flight_search_apology(),
            "I encountered an issue while trying to search for your flight. This could be due to temporary availability issues. Please try searching for flights again, and I'll help you complete the booking. Also could be the access token issue, try refreshing it. Sorry for the inconvenience!"
        );
        assert!(hotel_search_apology().contains("Please try searching for hotels again"));
        assert!(transfer_search_apology().starts_with(
            "I encountered an issue while trying to search for transfers."
        ));
    }
}

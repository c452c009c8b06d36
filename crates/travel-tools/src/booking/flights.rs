//! Flight search and the three-step flight booking.

use serde::Deserialize;
use serde_json::Value;
use tracing::{info, warn};
use travel_core::flight::{
    BookFlightParams, BookedSegment, BookingResult, BookingStep, Flight, FlightDetails, FlightInfo,
    FlightSearchParams, FlightSearchResult, FlightSegment, SegmentEndpoint,
};
use travel_core::{FlightOfferQuery, Money};

use super::envelope::{array_at, scalar_at, ProviderFault};
use super::messages;
use super::BookingService;

/// Offers requested when searching.
const SEARCH_MAX_OFFERS: u32 = 6;
/// Offers shown to the model.
const MAX_FLIGHTS: usize = 5;
/// Offers requested when re-locating the selected offer before booking.
const REBOOK_MAX_OFFERS: u32 = 10;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawEndpoint {
    iata_code: String,
    at: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSegment {
    carrier_code: String,
    number: String,
    departure: RawEndpoint,
    arrival: RawEndpoint,
}

#[derive(Debug, Deserialize)]
struct RawItinerary {
    #[serde(default)]
    duration: String,
    segments: Vec<RawSegment>,
}

#[derive(Debug, Deserialize)]
struct RawPrice {
    total: String,
    currency: String,
}

#[derive(Debug, Deserialize)]
struct RawOffer {
    itineraries: Vec<RawItinerary>,
    price: RawPrice,
}

impl BookingService {
    /// Search flight offers and keep the first five.
    pub async fn search_flights(&self, params: &FlightSearchParams) -> FlightSearchResult {
        let query = FlightOfferQuery {
            origin: params.origin.clone(),
            destination: params.destination.clone(),
            departure_date: params.departure_date.clone(),
            max: SEARCH_MAX_OFFERS,
            priced_in_currency: true,
        };

        let body = match self.api.search_flight_offers(&query).await {
            Ok(body) => body,
            Err(e) => {
                warn!("Error searching flights: {}", e);
                return FlightSearchResult::failed(messages::flight_search_apology());
            }
        };

        if let Some(fault) = ProviderFault::from_body(&body) {
            return FlightSearchResult::failed(search_fault_message(&fault, params));
        }

        match parse_flights(&body) {
            Ok(flights) if flights.is_empty() => {
                FlightSearchResult::failed(messages::no_flights_found(
                    &params.origin,
                    &params.destination,
                    &params.departure_date,
                ))
            }
            Ok(flights) => {
                info!("Found {} flights", flights.len());
                FlightSearchResult::found(flights)
            }
            Err(e) => {
                warn!("Error parsing flight offers: {}", e);
                FlightSearchResult::failed(messages::UNPROCESSABLE_FLIGHTS)
            }
        }
    }

    /// Re-search, price and order the selected offer.
    ///
    /// Completed steps are not compensated when a later one fails. Only a
    /// confirmed order reaches the ledger.
    pub async fn book_flight(&self, params: BookFlightParams) -> BookingResult {
        let result = self.place_flight_order(&params).await;

        if result.is_confirmed() {
            let trip_id = self.ledger.record(result.clone().into()).await;
            info!(
                "Flight booking {} recorded under {}",
                result.booking_reference().unwrap_or_default(),
                trip_id
            );
        } else if let Some(step) = result.failed_step() {
            warn!(
                "Flight booking failed at {:?}: {}",
                step,
                result.error().unwrap_or_default()
            );
        }

        result
    }

    async fn place_flight_order(&self, params: &BookFlightParams) -> BookingResult {
        let query = FlightOfferQuery {
            origin: params.origin.clone(),
            destination: params.destination.clone(),
            departure_date: params.departure_date.clone(),
            max: REBOOK_MAX_OFFERS,
            priced_in_currency: false,
        };

        let search = match self.api.search_flight_offers(&query).await {
            Ok(body) => body,
            Err(e) => return transport_failure(BookingStep::Search, e),
        };
        if let Some(fault) = ProviderFault::from_body(&search) {
            return step_failure(BookingStep::Search, &fault, messages::NO_MATCHING_FLIGHTS);
        }

        let Some(offer) = find_offer(&search, &params.flight_id) else {
            return BookingResult::failed(BookingStep::Search, messages::FLIGHT_NOT_FOUND);
        };

        let pricing = match self.api.price_flight_offer(offer).await {
            Ok(body) => body,
            Err(e) => return transport_failure(BookingStep::Pricing, e),
        };
        if let Some(fault) = ProviderFault::from_body(&pricing) {
            return step_failure(
                BookingStep::Pricing,
                &fault,
                messages::PRICE_CONFIRMATION_FAILED,
            );
        }

        let Some(priced) = pricing.pointer("/data/flightOffers/0") else {
            warn!("Pricing response carries no flight offer");
            return BookingResult::failed(
                BookingStep::Pricing,
                messages::flight_booking_apology(),
            );
        };

        let order = match self
            .api
            .create_flight_order(priced, &params.traveler)
            .await
        {
            Ok(body) => body,
            Err(e) => return transport_failure(BookingStep::Order, e),
        };
        if let Some(fault) = ProviderFault::from_body(&order) {
            return step_failure(BookingStep::Order, &fault, messages::BOOKING_FAILED);
        }

        match summarize_order(&order) {
            Ok((reference, price, details)) => {
                BookingResult::confirmed(reference, price, details, params.traveler.clone())
            }
            Err(e) => {
                warn!("Error reading flight order: {}", e);
                BookingResult::failed(BookingStep::Order, messages::flight_booking_apology())
            }
        }
    }
}

fn search_fault_message(fault: &ProviderFault, params: &FlightSearchParams) -> String {
    if fault.code_contains("INVALID_PARAMETER") {
        if fault.detail.contains("originLocationCode") {
            return messages::invalid_origin(&params.origin);
        }
        if fault.detail.contains("destinationLocationCode") {
            return messages::invalid_destination(&params.destination);
        }
        if fault.detail.contains("departureDate") {
            return messages::invalid_date(&params.departure_date);
        }
    } else if fault.code_contains("NO_FLIGHT_FOUND") {
        return messages::no_flights_found(
            &params.origin,
            &params.destination,
            &params.departure_date,
        );
    }

    if fault
        .detail
        .to_lowercase()
        .contains("date/time is in the past")
    {
        return messages::PAST_DATE.to_string();
    }

    fault.detail_or(messages::FLIGHT_SEARCH_FAILED)
}

fn parse_flights(body: &Value) -> Result<Vec<Flight>, String> {
    let offers = body
        .get("data")
        .and_then(Value::as_array)
        .ok_or("response has no data array")?;

    offers.iter().take(MAX_FLIGHTS).map(parse_flight).collect()
}

fn parse_flight(offer: &Value) -> Result<Flight, String> {
    let raw = RawOffer::deserialize(offer).map_err(|e| e.to_string())?;
    let itinerary = raw
        .itineraries
        .into_iter()
        .next()
        .ok_or("offer has no itinerary")?;
    if itinerary.segments.is_empty() {
        return Err("itinerary has no segments".to_string());
    }

    let segments = itinerary
        .segments
        .into_iter()
        .map(|s| FlightSegment {
            carrier: s.carrier_code,
            number: s.number,
            departure: SegmentEndpoint {
                time: s.departure.at,
                airport: s.departure.iata_code,
            },
            arrival: SegmentEndpoint {
                time: s.arrival.at,
                airport: s.arrival.iata_code,
            },
        })
        .collect();

    Ok(Flight {
        price: Money::new(raw.price.total, raw.price.currency),
        flight: FlightInfo::new(segments, itinerary.duration),
    })
}

fn find_offer<'a>(search: &'a Value, flight_id: &str) -> Option<&'a Value> {
    array_at(search, "data")
        .iter()
        .find(|offer| scalar_at(offer, "/id").as_deref() == Some(flight_id))
}

fn summarize_order(order: &Value) -> Result<(String, String, FlightDetails), String> {
    let data = order.get("data").ok_or("order has no data")?;
    let offer = data
        .pointer("/flightOffers/0")
        .ok_or("order has no flight offer")?;
    let itinerary = offer
        .pointer("/itineraries/0")
        .ok_or("order offer has no itinerary")?;
    let itinerary = RawItinerary::deserialize(itinerary).map_err(|e| e.to_string())?;

    let segments = itinerary
        .segments
        .into_iter()
        .map(|s| BookedSegment {
            flight_number: format!("{}{}", s.carrier_code, s.number),
            departure: s.departure.at,
            arrival: s.arrival.at,
            origin: s.departure.iata_code,
            destination: s.arrival.iata_code,
        })
        .collect();
    let details = FlightDetails::from_segments(segments).ok_or("order has no segments")?;

    let price = scalar_at(offer, "/price/total").ok_or("order offer has no total")?;
    let reference = data
        .get("id")
        .and_then(Value::as_str)
        .unwrap_or("Unknown")
        .to_string();

    Ok((reference, price, details))
}

fn step_failure(step: BookingStep, fault: &ProviderFault, fallback: &str) -> BookingResult {
    if fault.mentions_schedule_change() {
        BookingResult::failed(step, messages::SCHEDULE_CHANGED)
    } else {
        BookingResult::failed(step, fault.detail_or(fallback))
    }
}

fn transport_failure(step: BookingStep, error: impl std::fmt::Display) -> BookingResult {
    warn!("Error booking flight at {:?}: {}", step, error);
    BookingResult::failed(step, messages::flight_booking_apology())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn params() -> FlightSearchParams {
        FlightSearchParams {
            origin: "LAX".to_string(),
            destination: "JFK".to_string(),
            departure_date: "2030-01-15".to_string(),
        }
    }

    fn fault(code: &str, detail: &str) -> ProviderFault {
        ProviderFault::from_body(&json!({"errors": [{"code": code, "detail": detail}]})).unwrap()
    }

    #[test]
    fn test_invalid_parameter_messages() {
        assert_eq!(
            search_fault_message(
                &fault("INVALID_PARAMETER", "originLocationCode invalid"),
                &params()
            ),
            "Invalid origin airport code: LAX. Please provide a valid IATA airport code."
        );
        assert!(search_fault_message(
            &fault("INVALID_PARAMETER", "destinationLocationCode invalid"),
            &params()
        )
        .starts_with("Invalid destination airport code: JFK."));
        assert_eq!(
            search_fault_message(
                &fault("INVALID_PARAMETER", "departureDate malformed"),
                &params()
            ),
            "Invalid date format: 2030-01-15. Please provide the date in YYYY-MM-DD format."
        );
    }

    #[test]
    fn test_no_flight_found_code() {
        assert_eq!(
            search_fault_message(&fault("NO_FLIGHT_FOUND", ""), &params()),
            "No flights found from LAX to JFK on 2030-01-15. Try different dates or airports."
        );
    }

    #[test]
    fn test_past_date_and_fallbacks() {
        assert_eq!(
            search_fault_message(&fault("4926", "Date/Time is in the past"), &params()),
            messages::PAST_DATE
        );
        assert_eq!(
            search_fault_message(&fault("INVALID_PARAMETER", "something else"), &params()),
            "something else"
        );
        assert_eq!(
            search_fault_message(&fault("500", ""), &params()),
            messages::FLIGHT_SEARCH_FAILED
        );
    }

    fn offer(id: &str, total: &str, segments: usize) -> Value {
        let segments: Vec<Value> = (0..segments)
            .map(|i| {
                json!({
                    "carrierCode": "AA",
                    "number": format!("{}", 100 + i),
                    "departure": {"iataCode": format!("A{}", i), "at": format!("2030-01-15T0{}:00:00", i)},
                    "arrival": {"iataCode": format!("A{}", i + 1), "at": format!("2030-01-15T0{}:30:00", i)}
                })
            })
            .collect();
        json!({
            "id": id,
            "itineraries": [{"duration": "PT5H", "segments": segments}],
            "price": {"total": total, "currency": "USD"}
        })
    }

    #[test]
    fn test_parse_caps_at_five_and_counts_stops() {
        let offers: Vec<Value> = (1..=6)
            .map(|i| offer(&i.to_string(), &format!("{}.00", i * 100), (i % 3) + 1))
            .collect();
        let flights = parse_flights(&json!({"data": offers})).unwrap();

        assert_eq!(flights.len(), 5);
        assert_eq!(flights[0].price.amount, "100.00");
        assert_eq!(flights[0].flight.stops, 1);
        assert_eq!(flights[2].flight.stops, 0);
        assert_eq!(flights[4].flight.segments.len(), 3);
        assert_eq!(flights[4].flight.stops, 2);
    }

    #[test]
    fn test_parse_shape_errors() {
        assert!(parse_flights(&json!({})).is_err());
        assert!(parse_flights(&json!({"data": [{"itineraries": []}]})).is_err());
        assert!(parse_flights(&json!({"data": [offer("1", "10.00", 0)]})).is_err());
    }

    #[test]
    fn test_find_offer_by_id() {
        let search = json!({"data": [offer("1", "10.00", 1), offer("2", "20.00", 1)]});
        let found = find_offer(&search, "2").unwrap();
        assert_eq!(found["price"]["total"], "20.00");
        assert!(find_offer(&search, "3").is_none());
    }

    #[test]
    fn test_summarize_order() {
        let order = json!({"data": {"id": "ORDER-1", "flightOffers": [offer("1", "250.00", 2)]}});
        let (reference, price, details) = summarize_order(&order).unwrap();

        assert_eq!(reference, "ORDER-1");
        assert_eq!(price, "250.00");
        assert_eq!(details.total_segments, 2);
        assert_eq!(details.origin, "A0");
        assert_eq!(details.destination, "A2");
        assert_eq!(details.segments[1].flight_number, "AA101");
    }

    #[test]
    fn test_summarize_order_without_id() {
        let order = json!({"data": {"flightOffers": [offer("1", "250.00", 1)]}});
        let (reference, _, _) = summarize_order(&order).unwrap();
        assert_eq!(reference, "Unknown");
    }
}

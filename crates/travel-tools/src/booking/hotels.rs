//! Hotel search (city lookup, then batched offers) and hotel booking.

use serde_json::Value;
use tracing::{info, warn};
use travel_core::hotel::{
    HotelBasicInfo, HotelBookingParams, HotelBookingResult, HotelSearchResult, RoomDetails,
    SearchHotelParams,
};
use travel_core::{Address, Money};

use super::envelope::{array_at, scalar_at, text_at, ProviderFault};
use super::messages;
use super::BookingService;

/// Hotels from the city lookup whose offers are fetched.
const MAX_HOTELS: usize = 5;

impl BookingService {
    pub async fn search_hotels(&self, params: &SearchHotelParams) -> HotelSearchResult {
        let listing = match self.api.hotels_by_city(params).await {
            Ok(body) => body,
            Err(e) => {
                warn!("Error searching hotels: {}", e);
                return HotelSearchResult::failed(messages::hotel_search_apology());
            }
        };
        if let Some(fault) = ProviderFault::from_body(&listing) {
            return HotelSearchResult::failed(fault.detail_or(messages::HOTEL_SEARCH_FAILED));
        }

        let hotel_ids: Vec<String> = array_at(&listing, "data")
            .iter()
            .take(MAX_HOTELS)
            .filter_map(|hotel| hotel.get("hotelId").and_then(Value::as_str))
            .map(str::to_string)
            .collect();
        if hotel_ids.is_empty() {
            return HotelSearchResult::failed(messages::NO_HOTELS_FOUND);
        }

        let offers = match self.api.hotel_offers(&hotel_ids).await {
            Ok(body) => body,
            Err(e) => {
                warn!("Error fetching hotel offers: {}", e);
                return HotelSearchResult::failed(messages::hotel_search_apology());
            }
        };
        if let Some(fault) = ProviderFault::from_body(&offers) {
            return HotelSearchResult::failed(fault.detail_or(messages::HOTEL_SEARCH_FAILED));
        }

        let hotels: Result<Vec<_>, String> = array_at(&offers, "data")
            .iter()
            .map(project_hotel)
            .collect();

        match hotels {
            Ok(hotels) => {
                info!("Found {} hotels in {}", hotels.len(), params.city_code);
                HotelSearchResult::found(hotels)
            }
            Err(e) => {
                warn!("Error reading hotel offers: {}", e);
                HotelSearchResult::failed(messages::hotel_search_apology())
            }
        }
    }

    /// Confirm a stay without contacting the provider.
    pub async fn book_hotel(&self, params: HotelBookingParams) -> HotelBookingResult {
        let result = HotelBookingResult::confirmed(params);
        let trip_id = self.ledger.record(result.clone().into()).await;
        info!(
            "Hotel booking at {} recorded under {}",
            result.hotel_name().unwrap_or_default(),
            trip_id
        );
        result
    }
}

fn project_hotel(entry: &Value) -> Result<HotelBasicInfo, String> {
    let hotel = entry.get("hotel").ok_or("offer entry has no hotel")?;
    let hotel_id = scalar_at(hotel, "/hotelId").ok_or("hotel has no hotelId")?;
    let offers = array_at(entry, "offers");

    let amenities = array_at(hotel, "amenities")
        .iter()
        .filter_map(Value::as_str)
        .map(str::to_string)
        .collect();

    Ok(HotelBasicInfo {
        hotel_id,
        name: text_at(hotel, "/name", "Unknown Hotel"),
        rating: text_at(hotel, "/rating", "N/A"),
        address: Address {
            city_name: text_at(hotel, "/address/cityName", ""),
            country_code: text_at(hotel, "/address/countryCode", ""),
            state_code: text_at(hotel, "/address/stateCode", ""),
            postal_code: text_at(hotel, "/address/postalCode", ""),
            address: text_at(hotel, "/address/lines/0", ""),
        },
        amenities: Some(amenities),
        description: Some(text_at(
            hotel,
            "/description/text",
            "No description available",
        )),
        rooms: Some(offers.iter().map(project_room).collect()),
        price: cheapest_price(offers),
    })
}

fn project_room(offer: &Value) -> RoomDetails {
    RoomDetails {
        room_type: text_at(offer, "/room/typeEstimated/category", "Standard Room"),
        description: text_at(offer, "/room/description/text", ""),
        bed_type: text_at(offer, "/room/typeEstimated/bedType", "Unknown"),
        price: Money::new(
            text_at(offer, "/price/total", "N/A"),
            text_at(offer, "/price/currency", "USD"),
        ),
        refundable: offer
            .pointer("/policies/refundable/cancellationRefund")
            .and_then(Value::as_str)
            != Some("NON_REFUNDABLE"),
        cancellation_policy: text_at(
            offer,
            "/policies/cancellations/0/description/text",
            "Contact hotel for policy",
        ),
    }
}

/// Lowest numeric offer total, keeping the provider's own formatting.
///
/// Offers whose total does not parse as a finite number are skipped. With no
/// usable offer the price is `N/A` in USD.
fn cheapest_price(offers: &[Value]) -> Money {
    let mut cheapest: Option<(f64, String, String)> = None;

    for offer in offers {
        let Some(total) = scalar_at(offer, "/price/total") else {
            continue;
        };
        let Ok(amount) = total.trim().parse::<f64>() else {
            continue;
        };
        if !amount.is_finite() {
            continue;
        }
        if cheapest.as_ref().map_or(true, |(best, _, _)| amount < *best) {
            let currency = text_at(offer, "/price/currency", "USD");
            cheapest = Some((amount, total, currency));
        }
    }

    match cheapest {
        Some((_, total, currency)) => Money::new(total, currency),
        None => Money::new("N/A", "USD"),
    }
}

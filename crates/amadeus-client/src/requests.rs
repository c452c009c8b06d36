//! Request paths, query strings and bodies for the Amadeus endpoints.

use serde_json::{json, Value};
use travel_core::flight::Traveler;
use travel_core::hotel::SearchHotelParams;
use travel_core::transfer::TransferSearchParams;
use travel_core::{FlightOfferQuery, ProviderError};

pub(crate) const FLIGHT_OFFERS_PATH: &str = "/v2/shopping/flight-offers";
pub(crate) const FLIGHT_PRICING_PATH: &str = "/v1/shopping/flight-offers/pricing";
pub(crate) const FLIGHT_ORDERS_PATH: &str = "/v1/booking/flight-orders";
pub(crate) const HOTELS_BY_CITY_PATH: &str = "/v1/reference-data/locations/hotels/by-city";
pub(crate) const HOTEL_OFFERS_PATH: &str = "/v3/shopping/hotel-offers";
pub(crate) const TRANSFER_OFFERS_PATH: &str = "/v1/shopping/transfer-offers";

/// Default hotel search radius in kilometres.
const DEFAULT_HOTEL_RADIUS_KM: u32 = 5;

pub(crate) type Query = Vec<(&'static str, String)>;

pub(crate) fn flight_offers_query(query: &FlightOfferQuery, currency: &str) -> Query {
    let mut params = vec![
        ("originLocationCode", query.origin.clone()),
        ("destinationLocationCode", query.destination.clone()),
        ("departureDate", query.departure_date.clone()),
        ("adults", "1".to_string()),
    ];
    if query.priced_in_currency {
        params.push(("currencyCode", currency.to_string()));
    }
    params.push(("max", query.max.to_string()));
    params
}

pub(crate) fn pricing_body(offer: &Value) -> Value {
    json!({
        "data": {
            "type": "flight-offers-pricing",
            "flightOffers": [offer]
        }
    })
}

/// Order body. Payment details stay local and are never sent.
pub(crate) fn order_body(priced_offer: &Value, traveler: &Traveler) -> Result<Value, ProviderError> {
    let encode = |value: Result<Value, serde_json::Error>| {
        value.map_err(|e| ProviderError::Encode(format!("traveler: {}", e)))
    };

    Ok(json!({
        "data": {
            "type": "flight-order",
            "flightOffers": [priced_offer],
            "travelers": [{
                "id": traveler.id,
                "dateOfBirth": traveler.date_of_birth,
                "name": encode(serde_json::to_value(&traveler.name))?,
                "gender": traveler.gender,
                "contact": encode(serde_json::to_value(&traveler.contact))?,
                "documents": encode(serde_json::to_value(&traveler.documents))?,
            }]
        }
    }))
}

pub(crate) fn hotels_by_city_query(params: &SearchHotelParams) -> Query {
    let mut query = vec![
        ("cityCode", params.city_code.clone()),
        (
            "radius",
            params
                .radius
                .filter(|r| *r != 0)
                .unwrap_or(DEFAULT_HOTEL_RADIUS_KM)
                .to_string(),
        ),
        ("radiusUnit", "KM".to_string()),
        ("hotelSource", "ALL".to_string()),
    ];
    if let Some(chains) = params.chain_codes.as_ref().filter(|c| !c.is_empty()) {
        query.push(("chainCodes", chains.join(",")));
    }
    if let Some(ratings) = params.rating.as_ref().filter(|r| !r.is_empty()) {
        query.push(("ratings", ratings.join(",")));
    }
    query
}

pub(crate) fn hotel_offers_query(hotel_ids: &[String], currency: &str) -> Query {
    vec![
        ("hotelIds", hotel_ids.join(",")),
        ("adults", "1".to_string()),
        ("roomQuantity", "1".to_string()),
        ("currency", currency.to_string()),
    ]
}

/// Transfer search body; optional fields are included only when set.
pub(crate) fn transfer_body(params: &TransferSearchParams) -> Result<Value, ProviderError> {
    serde_json::to_value(params)
        .map_err(|e| ProviderError::Encode(format!("transfer search: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup<'a>(query: &'a Query, key: &str) -> Option<&'a str> {
        query.iter().find(|(k, _)| *k == key).map(|(_, v)| v.as_str())
    }

    #[test]
    fn test_flight_search_query_with_currency() {
        let query = FlightOfferQuery {
            origin: "LAX".to_string(),
            destination: "JFK".to_string(),
            departure_date: "2030-01-15".to_string(),
            max: 6,
            priced_in_currency: true,
        };
        let params = flight_offers_query(&query, "USD");
        assert_eq!(lookup(&params, "originLocationCode"), Some("LAX"));
        assert_eq!(lookup(&params, "adults"), Some("1"));
        assert_eq!(lookup(&params, "currencyCode"), Some("USD"));
        assert_eq!(lookup(&params, "max"), Some("6"));
    }

    #[test]
    fn test_flight_research_query_omits_currency() {
        let query = FlightOfferQuery {
            origin: "LAX".to_string(),
            destination: "JFK".to_string(),
            departure_date: "2030-01-15".to_string(),
            max: 10,
            priced_in_currency: false,
        };
        let params = flight_offers_query(&query, "USD");
        assert_eq!(lookup(&params, "currencyCode"), None);
        assert_eq!(lookup(&params, "max"), Some("10"));
    }

    #[test]
    fn test_order_body_carries_traveler_without_payment() {
        let offer = json!({"id": "1", "type": "flight-offer"});
        let body = order_body(&offer, &Traveler::default()).unwrap();
        let traveler = &body["data"]["travelers"][0];

        assert_eq!(body["data"]["type"], "flight-order");
        assert_eq!(body["data"]["flightOffers"][0]["id"], "1");
        assert_eq!(traveler["gender"], "MALE");
        assert_eq!(traveler["name"]["firstName"], "John");
        assert_eq!(traveler["contact"]["phones"][0]["deviceType"], "MOBILE");
        assert_eq!(traveler["documents"][0]["documentType"], "PASSPORT");
        assert!(traveler.get("payment").is_none());
    }

    #[test]
    fn test_hotels_by_city_defaults_and_filters() {
        let params = SearchHotelParams {
            city_code: "PAR".to_string(),
            radius: None,
            chain_codes: Some(vec!["HL".to_string(), "MC".to_string()]),
            rating: Some(vec![]),
        };
        let query = hotels_by_city_query(&params);
        assert_eq!(lookup(&query, "radius"), Some("5"));
        assert_eq!(lookup(&query, "radiusUnit"), Some("KM"));
        assert_eq!(lookup(&query, "hotelSource"), Some("ALL"));
        assert_eq!(lookup(&query, "chainCodes"), Some("HL,MC"));
        assert_eq!(lookup(&query, "ratings"), None);
    }

    #[test]
    fn test_hotels_by_city_zero_radius_uses_default() {
        let mut params = SearchHotelParams {
            city_code: "PAR".to_string(),
            radius: Some(0),
            chain_codes: None,
            rating: None,
        };
        assert_eq!(lookup(&hotels_by_city_query(&params), "radius"), Some("5"));

        params.radius = Some(12);
        assert_eq!(lookup(&hotels_by_city_query(&params), "radius"), Some("12"));
    }

    #[test]
    fn test_hotel_offers_query_joins_ids() {
        let ids = vec!["HLPAR001".to_string(), "HLPAR002".to_string()];
        let query = hotel_offers_query(&ids, "USD");
        assert_eq!(lookup(&query, "hotelIds"), Some("HLPAR001,HLPAR002"));
        assert_eq!(lookup(&query, "roomQuantity"), Some("1"));
    }

    #[test]
    fn test_transfer_body_includes_optional_fields_only_when_set() {
        let params: TransferSearchParams = serde_json::from_value(json!({
            "startLocationCode": "CDG",
            "endAddressLine": "45 Boulevard Raspail",
            "endCityName": "Paris",
            "endZipCode": "75006",
            "endCountryCode": "FR",
            "endName": "Hotel Lutetia",
            "startDateTime": "2030-06-01T10:30:00",
            "passengers": 2
        }))
        .unwrap();
        let body = transfer_body(&params).unwrap();
        assert_eq!(body["startLocationCode"], "CDG");
        assert_eq!(body["passengers"], 2);
        assert_eq!(body["transferType"], "PRIVATE");
        assert!(body.get("endGeoCode").is_none());
    }
}

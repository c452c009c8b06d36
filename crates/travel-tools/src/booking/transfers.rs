//! Transfer search and booking.

use chrono::Local;
use serde::Deserialize;
use serde_json::Value;
use tracing::{info, warn};
use travel_core::transfer::{
    elapsed_between, TransferBookingParams, TransferBookingResult, TransferOption,
    TransferProvider, TransferSearchParams, TransferSearchResult, Vehicle,
};
use travel_core::Money;

use super::envelope::{array_at, ProviderFault};
use super::messages;
use super::BookingService;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawStop {
    date_time: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawQuotation {
    monetary_amount: String,
    currency_code: String,
}

#[derive(Debug, Deserialize)]
struct RawVehicle {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTransferOffer {
    id: String,
    start: RawStop,
    end: RawStop,
    quotation: RawQuotation,
    vehicle: RawVehicle,
    service_provider: TransferProvider,
}

impl BookingService {
    pub async fn search_transfers(&self, params: &TransferSearchParams) -> TransferSearchResult {
        let body = match self.api.transfer_offers(params).await {
            Ok(body) => body,
            Err(e) => {
                warn!("Error searching transfers: {}", e);
                return TransferSearchResult::failed(messages::transfer_search_apology());
            }
        };

        if let Some(fault) = ProviderFault::from_body(&body) {
            if fault.detail.contains("NEED GEOCODES") {
                info!("Transfer search to {} needs geocodes", params.end_name);
                return TransferSearchResult::geocodes_required();
            }
            return TransferSearchResult::failed(fault.detail_or(messages::TRANSFER_SEARCH_FAILED));
        }

        let transfers: Result<Vec<_>, String> = array_at(&body, "data")
            .iter()
            .map(project_transfer)
            .collect();

        match transfers {
            Ok(transfers) => {
                info!(
                    "Found {} transfers from {}",
                    transfers.len(),
                    params.start_location_code
                );
                TransferSearchResult::found(transfers)
            }
            Err(e) => {
                warn!("Error reading transfer offers: {}", e);
                TransferSearchResult::failed(messages::transfer_search_apology())
            }
        }
    }

    /// Confirm a transfer without contacting the provider.
    ///
    /// The booking id is `TR-` followed by the local time to the second.
    pub async fn book_transfer(&self, params: TransferBookingParams) -> TransferBookingResult {
        let booking_id = format!("TR-{}", Local::now().format("%Y%m%d%H%M%S"));
        let result = TransferBookingResult::confirmed(booking_id, params);
        let trip_id = self.ledger.record(result.clone().into()).await;
        info!(
            "Transfer booking {} recorded under {}",
            result.booking_id().unwrap_or_default(),
            trip_id
        );
        result
    }
}

fn project_transfer(offer: &Value) -> Result<TransferOption, String> {
    let raw = RawTransferOffer::deserialize(offer).map_err(|e| e.to_string())?;
    let duration = elapsed_between(&raw.start.date_time, &raw.end.date_time).ok_or_else(|| {
        format!(
            "unreadable transfer times {} / {}",
            raw.start.date_time, raw.end.date_time
        )
    })?;

    Ok(TransferOption {
        id: raw.id,
        duration,
        price: Money::new(raw.quotation.monetary_amount, raw.quotation.currency_code),
        vehicle: Vehicle {
            vehicle_type: raw.vehicle.code,
            description: raw.vehicle.description,
        },
        provider: raw.service_provider,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn offer(start: &str, end: &str) -> Value {
        json!({
            "id": "5976726751",
            "start": {"dateTime": start, "locationCode": "CDG"},
            "end": {"dateTime": end},
            "quotation": {"monetaryAmount": "103.50", "currencyCode": "EUR"},
            "vehicle": {"code": "VAN", "category": "BU", "description": "Van"},
            "serviceProvider": {"code": "ABC", "name": "Sample Provider", "logoUrl": "x"}
        })
    }

    #[test]
    fn test_projection() {
        let transfer =
            project_transfer(&offer("2030-11-10T10:30:00", "2030-11-10T11:15:00")).unwrap();

        assert_eq!(transfer.id, "5976726751");
        assert_eq!(transfer.duration, "0:45:00");
        assert_eq!(transfer.price, Money::new("103.50", "EUR"));
        assert_eq!(transfer.vehicle.vehicle_type, "VAN");
        assert_eq!(transfer.vehicle.description, "Van");
        assert_eq!(transfer.provider.name, "Sample Provider");
        assert_eq!(transfer.provider.code, "ABC");
    }

    #[test]
    fn test_duration_ignores_zulu_suffix() {
        let transfer =
            project_transfer(&offer("2030-11-10T23:30:00Z", "2030-11-11T01:00:00")).unwrap();
        assert_eq!(transfer.duration, "1:30:00");
    }

    #[test]
    fn test_unreadable_times_are_shape_errors() {
        assert!(project_transfer(&offer("tomorrow", "2030-11-11T01:00:00")).is_err());
        assert!(project_transfer(&json!({"id": "1"})).is_err());
    }
}

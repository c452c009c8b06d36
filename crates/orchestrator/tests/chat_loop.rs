//! Full chat exchanges against a scripted model and a canned booking provider.

use std::sync::Arc;

use mock_providers::{BookingCall, CannedBookingApi, ScriptedChatProvider};
use orchestrator::{
    ChatOrchestrator, CollectingSink, ServerEvent, BROWSING_NOTICE, DISPATCH_FAILED_NOTICE,
    PROCESSING_NOTICE,
};
use serde_json::{json, Value};
use travel_core::{ChatResponse, Role, ToolCall};
use travel_tools::{default_registry, BookingService, TripLedger};

const HELLO: &str = r#"{"messages": [{"role": "user", "content": "Find me a flight from LAX to JFK on 2030-01-15"}]}"#;

fn flight_offer(id: &str, total: &str) -> Value {
    json!({
        "id": id,
        "itineraries": [{
            "duration": "PT5H30M",
            "segments": [{
                "carrierCode": "AA",
                "number": "10",
                "departure": {"iataCode": "LAX", "at": "2030-01-15T08:00:00"},
                "arrival": {"iataCode": "JFK", "at": "2030-01-15T16:30:00"}
            }]
        }],
        "price": {"total": total, "currency": "USD"}
    })
}

fn setup(
    provider: ScriptedChatProvider,
    api: CannedBookingApi,
) -> (Arc<ScriptedChatProvider>, Arc<CannedBookingApi>, ChatOrchestrator) {
    let provider = Arc::new(provider);
    let api = Arc::new(api);
    let service = BookingService::new(api.clone(), Arc::new(TripLedger::new()));
    let orchestrator =
        ChatOrchestrator::new(provider.clone(), Arc::new(default_registry(Arc::new(service))));
    (provider, api, orchestrator)
}

fn search_call() -> ToolCall {
    ToolCall::function(
        "call_1",
        "search_flights",
        r#"{"origin": "LAX", "destination": "JFK", "departure_date": "2030-01-15"}"#,
    )
}

#[tokio::test]
async fn test_tool_call_round_trip() {
    let (provider, api, orchestrator) = setup(
        ScriptedChatProvider::new()
            .then(ChatResponse {
                content: Some("Let me look that up.".to_string()),
                tool_calls: vec![search_call()],
                usage: None,
            })
            .then(ChatResponse::text("I found two flights.")),
        CannedBookingApi::new().with(
            BookingCall::FlightOffers,
            json!({"data": [flight_offer("1", "300.00"), flight_offer("2", "420.00")]}),
        ),
    );
    let sink = CollectingSink::new();

    orchestrator.handle_frame(HELLO, &sink).await.unwrap();

    assert_eq!(
        sink.messages().await,
        vec![
            PROCESSING_NOTICE,
            "Let me look that up.",
            BROWSING_NOTICE,
            "I found two flights."
        ]
    );
    assert!(matches!(
        sink.events().await[0],
        ServerEvent::MessageReceived { .. }
    ));
    assert_eq!(api.count(BookingCall::FlightOffers), 1);

    let requests = provider.requests();
    assert_eq!(requests.len(), 2);
    let follow_up = &requests[1].messages;
    assert_eq!(follow_up.len(), requests[0].messages.len() + 2);

    let call_message = &follow_up[follow_up.len() - 2];
    assert_eq!(call_message.role, Role::Assistant);
    assert_eq!(call_message.tool_calls.as_deref(), Some(&[search_call()][..]));

    let result_message = &follow_up[follow_up.len() - 1];
    assert_eq!(result_message.role, Role::Tool);
    assert_eq!(result_message.tool_call_id.as_deref(), Some("call_1"));
    let content: Value =
        serde_json::from_str(result_message.content.as_deref().unwrap_or_default()).unwrap();
    assert_eq!(content["flights"].as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn test_tool_error_becomes_apology() {
    let (provider, _, orchestrator) = setup(
        ScriptedChatProvider::new().then(ChatResponse::tool_calls(vec![ToolCall::function(
            "call_1",
            "get_trip_details",
            r#"{"trip_id": "TRIP_19990101"}"#,
        )])),
        CannedBookingApi::new(),
    );
    let sink = CollectingSink::new();

    orchestrator.handle_frame(HELLO, &sink).await.unwrap();

    assert_eq!(
        sink.messages().await,
        vec![
            PROCESSING_NOTICE,
            BROWSING_NOTICE,
            "I encountered an error: Trip TRIP_19990101 not found. Let me help you try again."
        ]
    );
    assert_eq!(provider.requests().len(), 1);
    assert_eq!(provider.remaining(), 0);
}

#[tokio::test]
async fn test_unknown_tool_and_bad_arguments() {
    let (provider, _, orchestrator) = setup(
        ScriptedChatProvider::new().then(ChatResponse::tool_calls(vec![
            ToolCall::function("call_1", "cancel_everything", "{}"),
            ToolCall::function("call_2", "book_flight", r#"{"flight_id": "2"}"#),
        ])),
        CannedBookingApi::new(),
    );
    let sink = CollectingSink::new();

    orchestrator.handle_frame(HELLO, &sink).await.unwrap();

    assert_eq!(
        sink.messages().await,
        vec![
            PROCESSING_NOTICE,
            BROWSING_NOTICE,
            DISPATCH_FAILED_NOTICE,
            BROWSING_NOTICE,
            DISPATCH_FAILED_NOTICE
        ]
    );
    assert_eq!(provider.requests().len(), 1);
}

#[tokio::test]
async fn test_each_call_gets_its_own_follow_up() {
    let (provider, _, orchestrator) = setup(
        ScriptedChatProvider::new()
            .then(ChatResponse::tool_calls(vec![
                search_call(),
                ToolCall::function("call_2", "get_trip_details", "{}"),
            ]))
            .then(ChatResponse::text("Flights are listed above."))
            .then(ChatResponse::text("You have no trips yet.")),
        CannedBookingApi::new().with(
            BookingCall::FlightOffers,
            json!({"data": [flight_offer("1", "300.00")]}),
        ),
    );
    let sink = CollectingSink::new();

    orchestrator.handle_frame(HELLO, &sink).await.unwrap();

    assert_eq!(
        sink.messages().await,
        vec![
            PROCESSING_NOTICE,
            BROWSING_NOTICE,
            "Flights are listed above.",
            BROWSING_NOTICE,
            "You have no trips yet."
        ]
    );

    let requests = provider.requests();
    assert_eq!(requests.len(), 3);
    let last = &requests[2].messages;
    assert_eq!(last.len(), requests[0].messages.len() + 4);
    assert_eq!(last[last.len() - 1].tool_call_id.as_deref(), Some("call_2"));
    assert!(requests[2].validate().is_ok());
}

#[tokio::test]
async fn test_follow_up_tool_calls_not_dispatched() {
    let (provider, api, orchestrator) = setup(
        ScriptedChatProvider::new()
            .then(ChatResponse::tool_calls(vec![search_call()]))
            .then(ChatResponse {
                content: Some("Searching again.".to_string()),
                tool_calls: vec![search_call()],
                usage: None,
            }),
        CannedBookingApi::new().with(
            BookingCall::FlightOffers,
            json!({"data": [flight_offer("1", "300.00")]}),
        ),
    );
    let sink = CollectingSink::new();

    orchestrator.handle_frame(HELLO, &sink).await.unwrap();

    assert_eq!(api.count(BookingCall::FlightOffers), 1);
    assert_eq!(provider.requests().len(), 2);
    assert_eq!(
        sink.messages().await.last().map(String::as_str),
        Some("Searching again.")
    );
}

#[tokio::test]
async fn test_follow_up_failure_reports_error() {
    let (_, _, orchestrator) = setup(
        ScriptedChatProvider::new()
            .then(ChatResponse::tool_calls(vec![search_call()]))
            .then_fail("API error (500): upstream"),
        CannedBookingApi::new().with(
            BookingCall::FlightOffers,
            json!({"data": [flight_offer("1", "300.00")]}),
        ),
    );
    let sink = CollectingSink::new();

    orchestrator.handle_frame(HELLO, &sink).await.unwrap();

    let events = sink.events().await;
    assert_eq!(events.len(), 3);
    assert!(matches!(&events[2], ServerEvent::Error { message } if message.contains("upstream")));
}

#[tokio::test]
async fn test_connection_survives_bad_frame() {
    let (provider, _, orchestrator) = setup(
        ScriptedChatProvider::new().then(ChatResponse::text("Hello again!")),
        CannedBookingApi::new(),
    );
    let sink = CollectingSink::new();

    orchestrator
        .handle_frame(r#"{"messages": [{"role": "user", "content": 7}]}"#, &sink)
        .await
        .unwrap();
    orchestrator.handle_frame(HELLO, &sink).await.unwrap();

    let events = sink.events().await;
    assert!(matches!(&events[0], ServerEvent::Error { .. }));
    assert_eq!(events[events.len() - 1], ServerEvent::assistant("Hello again!"));
    assert_eq!(provider.requests().len(), 1);
}

//! PaymentInitiator tests: prompt handling, session checks, request shape.

use std::sync::Arc;
use std::thread;

use payday_client::payment::FixedPhone;
use payday_client::transport::ApiResponse;
use payday_client::{PaymentError, PaymentInitiator, StkPushReceipt, TransportError};
use payday_core::catalog::{MONTHLY_VIP, WEEKLY_VIP, YEARLY_VIP};
use payday_core::config::PaymentConfig;
use payday_core::constants::{SERVER_ERROR_MESSAGE, SESSION_EXPIRED_MESSAGE, STK_PUSH_PATH};
use payday_core::errors::error_code::{self, PaydayErrorCode};
use payday_core::{NoticeLevel, Plan, User};
use serde_json::json;
use test_fixtures::{
    api, empty_session, member, memory_storage, signed_in_session, BlockingTransport,
    StubTransport,
};

fn initiator(transport: Arc<StubTransport>, user: Option<&User>) -> PaymentInitiator {
    let session = match user {
        Some(user) => signed_in_session(user, "tok").1,
        None => empty_session(memory_storage()),
    };
    PaymentInitiator::new(api(transport), session, &PaymentConfig::default())
}

fn phone(number: &str) -> FixedPhone {
    FixedPhone(Some(number.to_string()))
}

#[test]
fn local_number_sends_normalized_push() {
    let transport = StubTransport::new();
    transport.respond(STK_PUSH_PATH, 200, json!({ "message": "ok", "CheckoutRequestID": "ws_1" }));
    let payments = initiator(transport.clone(), Some(&member()));

    let outcome = payments.initiate(&MONTHLY_VIP, &mut phone("0712345678")).unwrap();

    let calls = transport.calls_to(STK_PUSH_PATH);
    assert_eq!(calls.len(), 1);
    assert_eq!(
        calls[0].body,
        Some(json!({
            "phone": "254712345678",
            "plan": "Monthly VIP",
            "amount": 1500,
            "userId": "u1"
        }))
    );
    assert_eq!(calls[0].bearer.as_deref(), Some("tok"));
    assert_eq!(outcome.receipt.checkout_request_id.as_deref(), Some("ws_1"));
    assert_eq!(outcome.notice.level, NoticeLevel::Success);
    assert_eq!(
        outcome.notice.message,
        "STK push sent to 254712345678. Enter your M-Pesa PIN to complete payment."
    );
}

#[test]
fn every_catalog_plan_sends_its_amount() {
    for (plan, amount) in [(&WEEKLY_VIP, 500), (&MONTHLY_VIP, 1500), (&YEARLY_VIP, 5000)] {
        let transport = StubTransport::new();
        transport.respond(STK_PUSH_PATH, 200, json!({}));
        let payments = initiator(transport.clone(), Some(&member()));
        let outcome = payments.initiate(plan, &mut phone("254700000000")).unwrap();
        assert_eq!(outcome.request.amount, amount);
        assert_eq!(outcome.request.phone, "254700000000");
    }
}

#[test]
fn dismissed_prompt_is_silent_and_sends_nothing() {
    let transport = StubTransport::new();
    let payments = initiator(transport.clone(), Some(&member()));

    let err = payments.initiate(&MONTHLY_VIP, &mut FixedPhone(None)).unwrap_err();
    assert!(matches!(err, PaymentError::Cancelled));
    assert!(err.notice().is_none());

    let err = payments.initiate(&MONTHLY_VIP, &mut phone("   ")).unwrap_err();
    assert_eq!(err.error_code(), error_code::CANCELLED);
    assert_eq!(transport.call_count(), 0);
}

#[test]
fn missing_user_id_is_session_expired() {
    let transport = StubTransport::new();
    let mut anonymous = member();
    anonymous.id = String::new();
    let payments = initiator(transport.clone(), Some(&anonymous));

    let err = payments.initiate(&WEEKLY_VIP, &mut phone("0712345678")).unwrap_err();

    assert!(matches!(err, PaymentError::SessionExpired));
    assert_eq!(err.notice().unwrap().message, SESSION_EXPIRED_MESSAGE);
    assert_eq!(transport.call_count(), 0);
}

#[test]
fn signed_out_is_session_expired() {
    let transport = StubTransport::new();
    let payments = initiator(transport.clone(), None);
    let err = payments.initiate(&WEEKLY_VIP, &mut phone("0712345678")).unwrap_err();
    assert_eq!(err.error_code(), error_code::SESSION_EXPIRED);
    assert_eq!(transport.call_count(), 0);
}

#[test]
fn priceless_plan_is_rejected_locally() {
    const FREE: Plan = Plan {
        name: "Trial",
        price: "Free",
        period: "",
        features: &[],
        popular: false,
    };
    let transport = StubTransport::new();
    let payments = initiator(transport.clone(), Some(&member()));

    let err = payments.initiate(&FREE, &mut phone("0712345678")).unwrap_err();
    assert_eq!(err.error_code(), error_code::INVALID_PRICE);
    assert_eq!(transport.call_count(), 0);
}

#[test]
fn prompt_sees_the_plan() {
    let transport = StubTransport::new();
    transport.respond(STK_PUSH_PATH, 200, json!({}));
    let payments = initiator(transport, Some(&member()));

    let mut asked = Vec::new();
    let mut prompt = |plan: &Plan| {
        asked.push(plan.name);
        Some("0798765432".to_string())
    };
    let outcome = payments.initiate(&YEARLY_VIP, &mut prompt).unwrap();

    assert_eq!(asked, vec!["1 Year VIP"]);
    assert_eq!(outcome.request.phone, "254798765432");
}

#[test]
fn rejected_push_shows_server_message() {
    let transport = StubTransport::new();
    transport.respond(STK_PUSH_PATH, 400, json!({ "error": "Invalid phone number" }));
    let payments = initiator(transport, Some(&member()));

    let err = payments.initiate(&WEEKLY_VIP, &mut phone("12345")).unwrap_err();
    let notice = err.notice().unwrap();
    assert_eq!(notice.level, NoticeLevel::Error);
    assert_eq!(notice.message, "Invalid phone number");
    assert!(!payments.is_busy());
}

#[test]
fn unreachable_server_shows_generic_message() {
    let transport = StubTransport::new();
    transport.fail(STK_PUSH_PATH, TransportError::Unreachable("refused".into()));
    let payments = initiator(transport, Some(&member()));

    let err = payments.initiate(&WEEKLY_VIP, &mut phone("0712345678")).unwrap_err();
    assert_eq!(err.notice().unwrap().message, SERVER_ERROR_MESSAGE);
}

#[test]
fn odd_success_body_is_still_success() {
    let transport = StubTransport::new();
    transport.respond_raw(STK_PUSH_PATH, 200, "queued");
    let payments = initiator(transport, Some(&member()));

    let outcome = payments.initiate(&WEEKLY_VIP, &mut phone("0712345678")).unwrap();
    assert_eq!(outcome.receipt, StkPushReceipt::default());
}

#[test]
fn second_purchase_while_in_flight_is_busy() {
    let (transport, handles) = BlockingTransport::new(ApiResponse::new(200, "{}"));
    let (_, session) = signed_in_session(&member(), "tok");
    let payments = Arc::new(PaymentInitiator::new(
        api(transport),
        session,
        &PaymentConfig::default(),
    ));

    let first = {
        let payments = payments.clone();
        thread::spawn(move || payments.initiate(&MONTHLY_VIP, &mut phone("0712345678")))
    };
    handles.entered.recv().unwrap();

    let mut never_asked = |_: &Plan| -> Option<String> { panic!("prompt shown while busy") };
    let err = payments.initiate(&WEEKLY_VIP, &mut never_asked).unwrap_err();
    assert!(matches!(err, PaymentError::Busy));

    handles.release.send(()).unwrap();
    assert!(first.join().unwrap().is_ok());
    assert!(!payments.is_busy());
}

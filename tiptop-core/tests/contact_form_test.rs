//! Contact form submission protocol driven through page events

mod common;

use std::sync::Arc;
use std::time::Duration;

use common::site;
use tiptop_core::test_utils::{MockTransport, Reply};
use tiptop_core::{Outcome, PageEvent, SubmitError, TransportError, TransportResponse};
use tokio::sync::Mutex;
use tokio::time::Instant;

const TIMED_OUT: &str = "The request timed out. Please try again.";

#[tokio::test(start_paused = true)]
async fn test_success_renders_server_message_and_clears_fields() {
    let mut s = site();
    s.fill("Ala", "ala@example.com", "Konferencja na 40 osób");
    let transport = Arc::new(MockTransport::new(Reply::after(
        Duration::from_millis(300),
        TransportResponse::new(200, r#"{ "message": "Got it!" }"#),
    )));
    let mut ix = s.attach(transport.clone());

    let started = ix.handle_event(&mut s.page, &PageEvent::Submit { form: s.form });
    assert!(started.default_prevented);
    let attempt = started.submission.unwrap();

    let page = Mutex::new(s.page);
    let outcome = ix.complete(&page, attempt).await.unwrap();

    assert_eq!(outcome, Outcome::Succeeded { message: "Got it!".into() });
    let fields = transport.last_fields().unwrap();
    assert_eq!(fields["name"], "Ala");
    assert_eq!(fields["email"], "ala@example.com");
    assert_eq!(fields["message"], "Konferencja na 40 osób");

    let page = page.lock().await;
    let status = page.get(s.status).unwrap();
    assert_eq!(status.text(), "Got it!");
    assert_eq!(status.attr("data-type"), Some("ok"));
    for field in [s.name, s.email, s.message] {
        assert_eq!(page.get(field).unwrap().value(), "");
    }
    let submit = page.get(s.submit).unwrap();
    assert!(!submit.is_disabled());
    assert_eq!(submit.text(), "Wyślij zapytanie");
    assert_eq!(page.focused(), Some(s.submit));
}

#[tokio::test(start_paused = true)]
async fn test_second_submit_while_in_flight_is_dropped() {
    let mut s = site();
    let transport = Arc::new(MockTransport::new(Reply::after(
        Duration::from_secs(1),
        TransportResponse::new(200, "{}"),
    )));
    let mut ix = s.attach(transport.clone());

    let first = ix
        .handle_event(&mut s.page, &PageEvent::Submit { form: s.form })
        .submission
        .unwrap();
    let snapshot = format!("{:?}", s.page);

    let second = ix.handle_event(&mut s.page, &PageEvent::Submit { form: s.form });
    assert!(second.default_prevented);
    assert!(second.submission.is_none());
    assert_eq!(format!("{:?}", s.page), snapshot);

    let page = Mutex::new(s.page);
    let (outcome, dropped) = tokio::join!(ix.complete(&page, first), ix.submit(&page));
    assert!(outcome.unwrap().is_success());
    assert!(dropped.is_none());
    assert_eq!(transport.calls(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_late_response_yields_timeout() {
    let s = site();
    let transport = Arc::new(MockTransport::new(Reply::after(
        Duration::from_secs(12),
        TransportResponse::new(200, r#"{"message":"Got it!"}"#),
    )));
    let ix = s.attach(transport);
    let page = Mutex::new(s.page);
    let started = Instant::now();

    let outcome = ix.submit(&page).await.unwrap();

    assert_eq!(
        outcome,
        Outcome::Failed {
            reason: SubmitError::TransportTimeout,
            message: TIMED_OUT.into(),
        }
    );
    assert_eq!(started.elapsed(), Duration::from_secs(10));
    let page = page.lock().await;
    assert_eq!(page.get(s.status).unwrap().text(), TIMED_OUT);
    assert_eq!(page.get(s.status).unwrap().attr("data-type"), Some("error"));
}

#[tokio::test(start_paused = true)]
async fn test_transport_ignoring_cancellation_is_cut_off() {
    let s = site();
    let reply =
        Reply::after(Duration::from_secs(60), TransportResponse::new(200, "{}")).ignoring_abort();
    let transport = Arc::new(MockTransport::new(reply));
    let ix = s.attach(transport);
    let page = Mutex::new(s.page);
    let started = Instant::now();

    let outcome = ix.submit(&page).await.unwrap();

    assert_eq!(outcome.message(), Some(TIMED_OUT));
    assert_eq!(started.elapsed(), Duration::from_millis(10_050));
    let page = page.lock().await;
    assert!(!page.get(s.submit).unwrap().is_disabled());
    assert_eq!(page.focused(), Some(s.submit));
}

#[tokio::test(start_paused = true)]
async fn test_rejection_keeps_fields() {
    let mut s = site();
    let transport = Arc::new(MockTransport::new(Reply::after(
        Duration::from_millis(50),
        TransportResponse::new(400, r#"{"ok":false,"message":"Uzupełnij imię i email."}"#),
    )));
    let ix = s.attach(transport);
    s.page.get_mut(s.message).unwrap().set_value("Dzień dobry");
    let page = Mutex::new(s.page);

    let outcome = ix.submit(&page).await.unwrap();

    assert_eq!(outcome.message(), Some("Uzupełnij imię i email."));
    let page = page.lock().await;
    assert_eq!(page.get(s.message).unwrap().value(), "Dzień dobry");
    assert_eq!(page.get(s.status).unwrap().attr("data-type"), Some("error"));
}

#[tokio::test(start_paused = true)]
async fn test_network_error_surfaces_its_message() {
    let s = site();
    let transport = Arc::new(MockTransport::new(Reply::error(
        Duration::from_millis(10),
        TransportError::Network("Failed to fetch".into()),
    )));
    let ix = s.attach(transport);
    let page = Mutex::new(s.page);

    let outcome = ix.submit(&page).await.unwrap();

    assert_eq!(outcome.message(), Some("Failed to fetch"));
    let page = page.lock().await;
    assert_eq!(page.get(s.submit).unwrap().attr("data-locked"), Some("0"));
}

#[tokio::test]
async fn test_status_region_outside_form_is_used() {
    let mut s = site();
    s.page.remove(s.status);
    let outside = s.page.append(
        s.page.root(),
        tiptop_core::Element::new("div").with_id("form-status"),
    );
    let ix = s.attach(Arc::new(MockTransport::new(Reply::ok(204, ""))));
    let page = Mutex::new(s.page);

    ix.submit(&page).await.unwrap();

    let page = page.lock().await;
    assert_eq!(
        page.get(outside).unwrap().text(),
        "Thank you! We will get back to you soon."
    );
    assert!(page.alerts().is_empty());
}

#[tokio::test]
async fn test_other_forms_are_left_alone() {
    let mut s = site();
    let other = s
        .page
        .append(s.page.root(), tiptop_core::Element::new("form").with_id("newsletter"));
    let transport = Arc::new(MockTransport::new(Reply::ok(200, "{}")));
    let mut ix = s.attach(transport.clone());

    let outcome = ix.handle_event(&mut s.page, &PageEvent::Submit { form: other });

    assert!(!outcome.default_prevented);
    assert!(outcome.submission.is_none());
    assert_eq!(transport.calls(), 0);
}

#[tokio::test]
async fn test_polish_texts_from_config() {
    let mut s = site();
    let config = tiptop_core::Config::from_json(r#"{ "language": "pl" }"#).unwrap();
    let transport = Arc::new(MockTransport::new(Reply::ok(500, "oops")));
    let mut ix = tiptop_core::Interactions::attach(&s.page, &config, transport);

    let attempt = ix
        .handle_event(&mut s.page, &PageEvent::Submit { form: s.form })
        .submission
        .unwrap();
    assert_eq!(s.page.get(s.submit).unwrap().text(), "Wysyłanie…");

    let page = Mutex::new(s.page);
    let outcome = ix.complete(&page, attempt).await.unwrap();
    assert!(!outcome.is_success());
    let page = page.lock().await;
    assert_eq!(page.get(s.submit).unwrap().text(), "Wyślij zapytanie");
}

#[tokio::test(start_paused = true)]
async fn test_abandoned_submit_unlocks_the_form() {
    let mut s = site();
    s.fill("Ala", "ala@example.com", "Termin w maju?");
    let transport = Arc::new(MockTransport::new(Reply::after(
        Duration::from_secs(5),
        TransportResponse::new(200, r#"{"message":"Got it!"}"#),
    )));
    let ix = s.attach(transport.clone());
    let page = Mutex::new(s.page);

    let abandoned = tokio::time::timeout(Duration::from_secs(1), ix.submit(&page)).await;
    assert!(abandoned.is_err());

    {
        let page = page.lock().await;
        let submit = page.get(s.submit).unwrap();
        assert!(!submit.is_disabled());
        assert_eq!(submit.text(), "Wyślij zapytanie");
        assert_eq!(submit.attr("data-locked"), Some("0"));
        assert_eq!(page.get(s.status).unwrap().attr("data-type"), Some("error"));
        assert_eq!(page.get(s.name).unwrap().value(), "Ala");
    }

    let outcome = ix.submit(&page).await;
    assert_eq!(outcome, Some(Outcome::Succeeded { message: "Got it!".into() }));
    assert_eq!(transport.calls(), 2);
}

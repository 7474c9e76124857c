use std::time::Duration;

use training_portal_api::flash::{FlashParams, MessageKind, MessageRegion, bootstrap};

#[tokio::test]
async fn message_auto_hides_after_ttl() {
    let region = MessageRegion::with_ttl(Duration::from_millis(100));
    region.show("Registered OK", MessageKind::Success);

    let current = region.current().expect("message visible right after show");
    assert_eq!(current.text, "Registered OK");
    assert_eq!(current.kind, MessageKind::Success);

    tokio::time::sleep(Duration::from_millis(300)).await;
    assert!(region.current().is_none(), "message should have auto-hidden");
}

#[tokio::test]
async fn newer_message_survives_the_older_hide_timer() {
    let region = MessageRegion::with_ttl(Duration::from_millis(300));
    region.show("first", MessageKind::Error);

    tokio::time::sleep(Duration::from_millis(150)).await;
    region.show("second", MessageKind::Success);

    // Past the first timer's deadline: the second message must still be up.
    tokio::time::sleep(Duration::from_millis(200)).await;
    assert_eq!(
        region.current().map(|m| m.text),
        Some("second".to_string()),
        "the older timer must not hide the newer message"
    );

    // And it still hides on its own schedule.
    tokio::time::sleep(Duration::from_millis(300)).await;
    assert!(region.current().is_none());
}

#[tokio::test]
async fn explicit_hide_clears_the_region() {
    let region = MessageRegion::with_ttl(Duration::from_secs(5));
    region.show("going away", MessageKind::Error);
    region.hide();
    assert!(region.current().is_none());
}

#[tokio::test]
async fn bootstrap_shows_error_and_success_in_order() {
    let region = MessageRegion::with_ttl(Duration::from_secs(5));
    let params = FlashParams {
        error: Some("bad input".to_string()),
        success: Some("Registered OK".to_string()),
    };
    bootstrap(&region, &params);

    // Both fire; the success message, shown second, owns the visible slot.
    let current = region.current().expect("message visible after bootstrap");
    assert_eq!(current.kind, MessageKind::Success);
    assert_eq!(current.text, "Registered OK");
}

#[tokio::test]
async fn bootstrap_without_params_shows_nothing() {
    let region = MessageRegion::with_ttl(Duration::from_secs(5));
    bootstrap(&region, &FlashParams::default());
    assert!(region.current().is_none());
}

#[tokio::test]
async fn bootstrap_with_only_error_shows_error() {
    let region = MessageRegion::with_ttl(Duration::from_secs(5));
    let params = FlashParams {
        error: Some("Invalid email or password".to_string()),
        success: None,
    };
    bootstrap(&region, &params);

    let current = region.current().expect("message visible after bootstrap");
    assert_eq!(current.kind, MessageKind::Error);
    assert_eq!(current.text, "Invalid email or password");
}

use ripple_rest::{
    error::Error,
    notification::{Direction, Notification, ResourceType, State},
    HasAdditionalProperties,
};
use serde::Deserialize;
use serde_json::{json, Value};

#[test]
fn test_extra_field_survives_round_trip() -> Result<(), Error> {
    let input = r#"{"account":"rXXXXXXXXXXXXXXXXXXXXXXXXXXX","type":"payment","direction":"incoming","state":"validated","result":"tesSUCCESS","ledger":"348860","hash":"","timestamp":"2025-01-01T00:00:00Z","extra_field":42}"#;

    let notification: Notification = input.parse()?;
    assert_eq!(notification.ledger(), Some(348860));
    assert_eq!(notification.resource_type(), Some(ResourceType::Payment));
    assert_eq!(notification.direction(), Some(Direction::Incoming));
    assert_eq!(notification.state(), Some(State::Validated));
    assert!(notification.hash().map(|h| h.is_empty()).unwrap_or(false));

    let mut expected_extra = serde_json::Map::new();
    expected_extra.insert("extra_field".into(), json!(42));
    assert_eq!(notification.additional_properties(), &expected_extra);

    let original: Value = serde_json::from_str(input)?;
    assert_eq!(notification.to_value()?, original);

    // serializing twice gives the same bytes
    assert_eq!(notification.to_json()?, notification.to_json()?);
    Ok(())
}

#[test]
fn test_bad_account_rejects_record() {
    let input = json!({
        "account": "rXXXXXXXXXXXXXXXXXXXXXXXXXXl",
        "type": "payment",
        "ledger": "348860",
    });
    let err = Notification::from_value(input).unwrap_err();
    assert_eq!(err.field(), Some("account"));
}

/// Response body of the notifications endpoint, the way a client would wrap
/// the record.
#[derive(Deserialize, Debug)]
struct NotificationResponse {
    success: bool,
    notification: Notification,
}

#[test]
fn test_nested_in_response() -> Result<(), Error> {
    let body = json!({
        "success": true,
        "notification": {
            "account": "rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh",
            "type": "trustline",
            "direction": "passthrough",
            "state": "failed",
            "result": "tecPATH_DRY",
            "ledger": "",
            "hash": "9D591B18EDDD34F0B6CF4223A2940AEA2C3CC778925BABF289E0011CD8FA056E",
            "timestamp": "2014-09-17T21:47:00+02:00",
            "transaction_url": "http://localhost:5990/v1/accounts/rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh/payments/9D591B18EDDD34F0B6CF4223A2940AEA2C3CC778925BABF289E0011CD8FA056E",
            "previous_notification_url": "",
            "next_notification_url": "",
            "previous_hash": "",
            "next_hash": ""
        }
    });
    let response: NotificationResponse = serde_json::from_value(body)?;
    assert!(response.success);

    let n = response.notification;
    assert_eq!(n.state(), Some(State::Failed));
    assert_eq!(n.result().map(|r| r.as_str()), Some("tecPATH_DRY"));
    assert_eq!(n.ledger(), None);
    assert_eq!(
        n.timestamp().map(|t| t.to_rfc3339()),
        Some("2014-09-17T21:47:00+02:00".to_string())
    );

    // "ledger": "" is not written back
    let out = n.to_value()?;
    assert!(out.get("ledger").is_none());
    assert_eq!(out["timestamp"], json!("2014-09-17T21:47:00+02:00"));
    Ok(())
}

#[test]
fn test_nested_record_errors_surface_through_serde() {
    let body = json!({
        "success": true,
        "notification": { "result": "teXBAD" }
    });
    let err = serde_json::from_value::<NotificationResponse>(body).unwrap_err();
    assert!(err.to_string().contains("teXBAD"));
}

#[test]
fn test_iso_8601_timestamp_forms() -> Result<(), Error> {
    let basic = Notification::from_value(json!({ "timestamp": "2014-09-17T21:47:00.000+0000" }))?;
    let naive = Notification::from_value(json!({ "timestamp": "2014-09-17T21:47:00" }))?;
    assert_eq!(basic.timestamp(), naive.timestamp());
    assert_eq!(
        naive.to_value()?,
        json!({ "timestamp": "2014-09-17T21:47:00Z" })
    );
    Ok(())
}

#[test]
fn test_wrong_json_type_reports_field() {
    let err = Notification::from_value(json!({ "type": 5 })).unwrap_err();
    assert_eq!(err.field(), Some("type"));
    assert!(err.to_string().contains("expected a string"));
}

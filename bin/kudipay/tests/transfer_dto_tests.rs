use kudipay_primitives::models::dtos::transfer_dto::TransferRequest;
use serde_json::json;
use validator::Validate;

#[test]
fn test_transfer_request_validation() {
    // Valid cross-currency request
    let req = serde_json::from_value::<TransferRequest>(json!({
        "sender_id": uuid::Uuid::new_v4(),
        "recipient_id": uuid::Uuid::new_v4(),
        "amount": 10000,
        "sender_currency": "NGN",
        "recipient_currency": "GHS",
        "description": "rent split"
    }))
    .unwrap();
    assert!(req.validate().is_ok());

    // Description is optional
    let req = serde_json::from_value::<TransferRequest>(json!({
        "sender_id": uuid::Uuid::new_v4(),
        "recipient_id": uuid::Uuid::new_v4(),
        "amount": 10000,
        "sender_currency": "USD",
        "recipient_currency": "USD"
    }))
    .unwrap();
    assert!(req.validate().is_ok());

    // Zero amount
    let req = serde_json::from_value::<TransferRequest>(json!({
        "sender_id": uuid::Uuid::new_v4(),
        "recipient_id": uuid::Uuid::new_v4(),
        "amount": 0,
        "sender_currency": "NGN",
        "recipient_currency": "GHS"
    }))
    .unwrap();
    assert!(req.validate().is_err());

    // Description over 140 chars
    let req = serde_json::from_value::<TransferRequest>(json!({
        "sender_id": uuid::Uuid::new_v4(),
        "recipient_id": uuid::Uuid::new_v4(),
        "amount": 10000,
        "sender_currency": "NGN",
        "recipient_currency": "GHS",
        "description": "x".repeat(141)
    }))
    .unwrap();
    assert!(req.validate().is_err());

    // Unknown currency fails deserialization
    let res = serde_json::from_value::<TransferRequest>(json!({
        "sender_id": uuid::Uuid::new_v4(),
        "recipient_id": uuid::Uuid::new_v4(),
        "amount": 10000,
        "sender_currency": "NGN",
        "recipient_currency": "DOGE"
    }));
    assert!(res.is_err());
}

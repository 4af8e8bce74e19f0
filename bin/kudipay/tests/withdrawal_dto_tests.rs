use kudipay_primitives::models::dtos::withdrawal_dto::{VerifyOtpRequest, VerifyPinRequest};
use serde_json::json;
use validator::Validate;

#[test]
fn test_verify_pin_request_validation() {
    // Valid request
    let req = serde_json::from_value::<VerifyPinRequest>(json!({
        "user_id": uuid::Uuid::new_v4(),
        "pin": "204961",
        "amount": 10000, // NGN 100.00 in kobo
        "bank_account_id": uuid::Uuid::new_v4(),
        "currency": "NGN"
    }))
    .unwrap();
    assert!(req.validate().is_ok());

    // PIN too short
    let req = serde_json::from_value::<VerifyPinRequest>(json!({
        "user_id": uuid::Uuid::new_v4(),
        "pin": "2049",
        "amount": 10000,
        "bank_account_id": uuid::Uuid::new_v4(),
        "currency": "NGN"
    }))
    .unwrap();
    assert!(req.validate().is_err());

    // Zero amount
    let req = serde_json::from_value::<VerifyPinRequest>(json!({
        "user_id": uuid::Uuid::new_v4(),
        "pin": "204961",
        "amount": 0,
        "bank_account_id": uuid::Uuid::new_v4(),
        "currency": "NGN"
    }))
    .unwrap();
    assert!(req.validate().is_err());

    // Negative amount
    let req = serde_json::from_value::<VerifyPinRequest>(json!({
        "user_id": uuid::Uuid::new_v4(),
        "pin": "204961",
        "amount": -500,
        "bank_account_id": uuid::Uuid::new_v4(),
        "currency": "NGN"
    }))
    .unwrap();
    assert!(req.validate().is_err());

    // Unknown currency is rejected at deserialization
    let res = serde_json::from_value::<VerifyPinRequest>(json!({
        "user_id": uuid::Uuid::new_v4(),
        "pin": "204961",
        "amount": 10000,
        "bank_account_id": uuid::Uuid::new_v4(),
        "currency": "XYZ"
    }));
    assert!(res.is_err());
}

#[test]
fn test_verify_otp_request_validation() {
    // Valid request
    let req = serde_json::from_value::<VerifyOtpRequest>(json!({
        "user_id": uuid::Uuid::new_v4(),
        "amount": 10000,
        "bank_account_id": uuid::Uuid::new_v4(),
        "currency": "NGN",
        "otp_code": "039154"
    }))
    .unwrap();
    assert!(req.validate().is_ok());

    // Passcode wrong length
    let req = serde_json::from_value::<VerifyOtpRequest>(json!({
        "user_id": uuid::Uuid::new_v4(),
        "amount": 10000,
        "bank_account_id": uuid::Uuid::new_v4(),
        "currency": "NGN",
        "otp_code": "03915"
    }))
    .unwrap();
    assert!(req.validate().is_err());

    // Missing passcode fails deserialization
    let res = serde_json::from_value::<VerifyOtpRequest>(json!({
        "user_id": uuid::Uuid::new_v4(),
        "amount": 10000,
        "bank_account_id": uuid::Uuid::new_v4(),
        "currency": "NGN"
    }));
    assert!(res.is_err());
}

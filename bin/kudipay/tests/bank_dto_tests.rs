use kudipay_primitives::models::dtos::bank_dto::{
    AddBankAccountRequest, InitiateVerificationRequest, VerifyDepositsRequest,
};
use kudipay_primitives::models::dtos::pin_dto::SetPinRequest;
use serde_json::json;
use validator::Validate;

#[test]
fn test_add_bank_account_request_validation() {
    // Valid request
    let req = serde_json::from_value::<AddBankAccountRequest>(json!({
        "user_id": uuid::Uuid::new_v4(),
        "bank_code": "057",
        "account_number": "1234567890",
        "account_name": "Ada Obi",
        "is_default": true
    }))
    .unwrap();
    assert!(req.validate().is_ok());

    // Account number must be exactly 10 digits
    let req = serde_json::from_value::<AddBankAccountRequest>(json!({
        "user_id": uuid::Uuid::new_v4(),
        "bank_code": "057",
        "account_number": "12345"
    }))
    .unwrap();
    assert!(req.validate().is_err());

    // Bank code too short
    let req = serde_json::from_value::<AddBankAccountRequest>(json!({
        "user_id": uuid::Uuid::new_v4(),
        "bank_code": "0",
        "account_number": "1234567890"
    }))
    .unwrap();
    assert!(req.validate().is_err());
}

#[test]
fn test_initiate_verification_request_validation() {
    let req = serde_json::from_value::<InitiateVerificationRequest>(json!({
        "bank_account_id": uuid::Uuid::new_v4(),
        "method": "micro_deposit"
    }))
    .unwrap();
    assert!(req.validate().is_ok());

    // Empty method
    let req = serde_json::from_value::<InitiateVerificationRequest>(json!({
        "bank_account_id": uuid::Uuid::new_v4(),
        "method": ""
    }))
    .unwrap();
    assert!(req.validate().is_err());
}

#[test]
fn test_verify_deposits_request_validation() {
    let req = serde_json::from_value::<VerifyDepositsRequest>(json!({
        "bank_account_id": uuid::Uuid::new_v4(),
        "amount1": 32,
        "amount2": 45
    }))
    .unwrap();
    assert!(req.validate().is_ok());

    // Amounts must be positive
    let req = serde_json::from_value::<VerifyDepositsRequest>(json!({
        "bank_account_id": uuid::Uuid::new_v4(),
        "amount1": 0,
        "amount2": 45
    }))
    .unwrap();
    assert!(req.validate().is_err());
}

#[test]
fn test_set_pin_request_validation() {
    let req = serde_json::from_value::<SetPinRequest>(json!({
        "user_id": uuid::Uuid::new_v4(),
        "pin": "204961"
    }))
    .unwrap();
    assert!(req.validate().is_ok());

    // Length is the only DTO-level rule; digit policy lives in the service
    let req = serde_json::from_value::<SetPinRequest>(json!({
        "user_id": uuid::Uuid::new_v4(),
        "pin": "20496"
    }))
    .unwrap();
    assert!(req.validate().is_err());
}

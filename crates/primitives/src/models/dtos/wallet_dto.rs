use crate::models::entities::enum_types::CurrencyCode;
use crate::models::entities::wallet::Wallet;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, ToSchema)]
pub struct WalletDto {
    pub id: Uuid,
    pub currency: CurrencyCode,
    /// Minor units.
    pub balance: i64,
}

impl From<Wallet> for WalletDto {
    fn from(wallet: Wallet) -> Self {
        Self {
            id: wallet.id,
            currency: wallet.currency,
            balance: wallet.balance,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct WalletsResponse {
    pub wallets: Vec<WalletDto>,
}

use diesel::r2d2::{self, ConnectionManager};
use diesel::PgConnection;
use std::sync::Arc;

pub type DbPool = r2d2::Pool<ConnectionManager<PgConnection>>;

use crate::clients::{NotificationClient, ProfileClient};
use eyre::Result;
pub use kudipay_primitives::models::app_config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub db: DbPool,
    pub config: AppConfig,
    pub notifier: NotificationClient,
    pub profiles: ProfileClient,
}

impl AppState {
    pub fn new(db: DbPool, config: AppConfig) -> Result<Arc<Self>> {
        let notifier = NotificationClient::new();
        let profiles = ProfileClient::new();

        Ok(Arc::new(Self {
            db,
            config,
            notifier,
            profiles,
        }))
    }
}

use std::sync::Arc;

use juniper::Context as JuniperContext;
use sea_orm::DatabaseConnection;

pub type AppState = Arc<AppData>;

/// Per-request resolver context. Holds nothing beyond the store handle.
#[derive(Clone)]
pub struct AppData {
    pub db: DatabaseConnection,
}

impl JuniperContext for AppData {}

impl AppData {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

use crate::{db::DbPool, flash::MessageRegion};

#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
    pub flash: MessageRegion,
}

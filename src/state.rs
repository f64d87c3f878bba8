use crate::config::AppConfig;
use crate::services::booking::BookingService;

pub struct AppState {
    pub service: BookingService,
    pub config: AppConfig,
}

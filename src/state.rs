use crate::config::{AppConfig, ServiceArea};
use crate::services::calendar::CalendarProvider;

pub struct AppState {
    pub config: AppConfig,
    pub area: ServiceArea,
    pub calendar: Box<dyn CalendarProvider>,
}

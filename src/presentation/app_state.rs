// Application state for HTTP handlers
use crate::application::dashboard_service::DashboardService;
use crate::application::registration_service::RegistrationService;

#[derive(Clone)]
pub struct AppState {
    pub dashboard_service: DashboardService,
    pub registration_service: RegistrationService,
}

// Registration service - Use case for producer sign-up
use crate::domain::registration::{RegistrationError, RegistrationForm};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct RegistrationReceipt {
    pub title: String,
    pub message: String,
    pub received_at: DateTime<Utc>,
    pub registration: RegistrationForm,
}

#[derive(Clone, Default)]
pub struct RegistrationService;

impl RegistrationService {
    pub fn new() -> Self {
        Self
    }

    /// Validate a sign-up. Accepted registrations are logged, not stored.
    pub fn register(&self, form: RegistrationForm) -> Result<RegistrationReceipt, RegistrationError> {
        let registration = form.validate().inspect_err(|e| {
            tracing::info!(error = %e, "Registration rejected");
        })?;

        tracing::info!(
            name = %registration.name,
            email = %registration.email,
            producer_type = ?registration.producer_type,
            state = ?registration.state,
            crops = registration.crops.len(),
            "Registration accepted"
        );

        Ok(RegistrationReceipt {
            title: "Cadastro realizado com sucesso!".to_string(),
            message: "Bem-vindo ao AgroPredict. Em breve você receberá um email de confirmação."
                .to_string(),
            received_at: Utc::now(),
            registration,
        })
    }
}

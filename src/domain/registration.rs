// Producer registration model
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const STATES: [&str; 27] = [
    "AC", "AL", "AP", "AM", "BA", "CE", "DF", "ES", "GO", "MA", "MT", "MS", "MG", "PA", "PB", "PR",
    "PE", "PI", "RJ", "RN", "RS", "RO", "RR", "SC", "SP", "SE", "TO",
];

pub const CROPS: [&str; 12] = [
    "Soja",
    "Milho",
    "Feijão",
    "Arroz",
    "Trigo",
    "Algodão",
    "Café",
    "Cana-de-açúcar",
    "Tomate",
    "Batata",
    "Cebola",
    "Mandioca",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProducerType {
    Pequeno,
    Medio,
    Grande,
    Cooperativa,
    Agroindustria,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegistrationForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub producer_type: Option<ProducerType>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub crops: Vec<String>,
    #[serde(default)]
    pub accepts_terms: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    #[error("Você deve aceitar os termos de uso para continuar.")]
    TermsNotAccepted,
    #[error("name is required")]
    MissingName,
    #[error("a valid email is required")]
    InvalidEmail,
    #[error("unknown state: {0}")]
    UnknownState(String),
    #[error("unknown crop: {0}")]
    UnknownCrop(String),
}

impl RegistrationForm {
    /// Check or uncheck a crop, keeping the list free of duplicates.
    pub fn toggle_crop(&mut self, crop: &str, checked: bool) {
        if checked {
            if !self.crops.iter().any(|c| c == crop) {
                self.crops.push(crop.to_string());
            }
        } else {
            self.crops.retain(|c| c != crop);
        }
    }

    /// Validate the form and return a normalized copy.
    pub fn validate(&self) -> Result<RegistrationForm, RegistrationError> {
        if !self.accepts_terms {
            return Err(RegistrationError::TermsNotAccepted);
        }

        let name = self.name.trim();
        if name.is_empty() {
            return Err(RegistrationError::MissingName);
        }

        let email = self.email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err(RegistrationError::InvalidEmail);
        }

        let state = optional_trimmed(&self.state);
        if let Some(state) = &state {
            if !STATES.contains(&state.as_str()) {
                return Err(RegistrationError::UnknownState(state.clone()));
            }
        }

        let mut normalized = RegistrationForm {
            name: name.to_string(),
            email: email.to_string(),
            phone: optional_trimmed(&self.phone),
            producer_type: self.producer_type,
            state,
            city: optional_trimmed(&self.city),
            crops: Vec::new(),
            accepts_terms: true,
        };

        for crop in &self.crops {
            if !CROPS.contains(&crop.as_str()) {
                return Err(RegistrationError::UnknownCrop(crop.clone()));
            }
            normalized.toggle_crop(crop, true);
        }

        Ok(normalized)
    }
}

fn optional_trimmed(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

use serde::{Deserialize, Serialize};
use validator::ValidationErrors;

use crate::models::user::UserProfile;
use crate::utils::validation;

// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

// Login response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    pub token: Option<String>,
    pub message: Option<String>,
    pub profile: Option<UserProfile>,
}

impl LoginResponse {
    pub fn error(message: String) -> Self {
        Self {
            success: false,
            token: None,
            message: Some(message),
            profile: None,
        }
    }
}

/// Cadastro de usuário, validado campo a campo antes do envio
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
    pub cpf: String,
    pub phone: String,
    pub terms_accepted: bool,
}

impl RegisterRequest {
    /// Aplica todas as regras de cadastro e acumula os erros por campo.
    ///
    /// Cada campo reporta apenas a primeira regra violada.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if let Err(error) = validation::validate_required(&self.name) {
            errors.add("name", error);
        } else if let Err(error) = validation::validate_length(&self.name, 2, 80) {
            errors.add("name", error);
        }
        if let Err(error) = validation::validate_email(&self.email) {
            errors.add("email", error);
        }
        if let Err(error) = validation::validate_password(&self.password) {
            errors.add("password", error);
        } else if let Err(error) =
            validation::validate_confirmation(&self.password, &self.password_confirmation)
        {
            errors.add("password_confirmation", error);
        }
        if let Err(error) = validation::validate_cpf(&self.cpf) {
            errors.add("cpf", error);
        }
        if let Err(error) = validation::validate_phone(&self.phone) {
            errors.add("phone", error);
        }
        if let Err(error) = validation::validate_terms(self.terms_accepted) {
            errors.add("terms_accepted", error);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

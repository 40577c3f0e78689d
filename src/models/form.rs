use serde::{Deserialize, Serialize};
use validator::ValidationError;

use crate::utils::{masks, validation};

/// Conjunto fechado de tipos de campo, cada um com máscara e regra
/// de validação próprias
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Cpf,
    Cnpj,
    Cep,
    Phone,
    Card,
    CardExpiry,
    Currency,
    Email,
    Password,
    Text,
}

/// Campo de formulário: entrada bruta, forma mascarada e validade.
///
/// Criado vazio na montagem do formulário, atualizado a cada digitação
/// e revalidado ao perder o foco. O erro some enquanto o usuário edita.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormField {
    pub kind: FieldKind,
    pub raw: String,
    pub masked: String,
    pub valid: bool,
    pub error: Option<String>,
}

impl FormField {
    pub fn new(kind: FieldKind) -> Self {
        Self {
            kind,
            raw: String::new(),
            masked: String::new(),
            valid: false,
            error: None,
        }
    }

    /// Aplica a máscara a cada mudança de valor
    pub fn update(&mut self, input: &str) {
        self.raw = input.to_string();
        self.masked = apply_mask(self.kind, input);
        self.error = None;
    }

    /// Revalida o campo, normalmente no blur ou antes do envio
    pub fn validate(&mut self) -> bool {
        match check(self.kind, &self.masked) {
            Ok(()) => {
                self.valid = true;
                self.error = None;
            }
            Err(error) => {
                self.valid = false;
                self.error = Some(validation::error_message(&error));
            }
        }
        self.valid
    }
}

fn apply_mask(kind: FieldKind, input: &str) -> String {
    match kind {
        FieldKind::Cpf => masks::mask_cpf(input),
        FieldKind::Cnpj => masks::mask_cnpj(input),
        FieldKind::Cep => masks::mask_cep(input),
        FieldKind::Phone => masks::mask_phone(input),
        FieldKind::Card => masks::mask_card(input),
        FieldKind::CardExpiry => masks::mask_card_expiry(input),
        FieldKind::Currency => masks::mask_currency(input),
        FieldKind::Email | FieldKind::Password | FieldKind::Text => input.to_string(),
    }
}

fn check(kind: FieldKind, value: &str) -> Result<(), ValidationError> {
    match kind {
        FieldKind::Cpf => validation::validate_cpf(value),
        FieldKind::Cnpj => validation::validate_cnpj(value),
        FieldKind::Cep => validation::validate_cep(value),
        FieldKind::Phone => validation::validate_phone(value),
        FieldKind::Card => validation::validate_card_number(value),
        FieldKind::CardExpiry => validation::validate_card_expiry(value),
        FieldKind::Email => validation::validate_email(value),
        FieldKind::Password => validation::validate_password(value),
        FieldKind::Currency | FieldKind::Text => validation::validate_required(value),
    }
}

//! Sistema de tratamento de erros
//!
//! Este módulo define os tipos de erro da aplicação e a mensagem que cada
//! categoria exibe ao usuário. Erros de validação ficam junto ao campo,
//! erros de rede viram um aviso recuperável e um 401 encerra a sessão.

use thiserror::Error;

/// Erros principais da aplicação
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("External API error: {0}")]
    ExternalApi(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Mensagem exibida ao usuário para cada categoria de erro.
    ///
    /// Erros de validação repetem a primeira regra violada; os demais usam
    /// um texto genérico porque o detalhe técnico não ajuda na interface.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(errors) => first_validation_message(errors)
                .unwrap_or_else(|| "Dados inválidos".to_string()),
            AppError::Unauthorized(_) => {
                "Sessão expirada. Faça login novamente.".to_string()
            }
            AppError::NotFound(_) => "Registro não encontrado".to_string(),
            AppError::BadRequest(msg) => msg.clone(),
            AppError::ExternalApi(_) => {
                "Erro ao comunicar com o servidor. Tente novamente.".to_string()
            }
            AppError::Network(_) => "Erro de conexão. Tente novamente.".to_string(),
            AppError::Internal(_) => "Erro inesperado. Tente novamente.".to_string(),
        }
    }

    /// Um 401 não vira mensagem inline: a sessão é limpa e o usuário
    /// volta para a tela de login.
    pub fn requires_reauth(&self) -> bool {
        matches!(self, AppError::Unauthorized(_))
    }
}

/// Resultado tipado para operações que podem falhar
pub type AppResult<T> = Result<T, AppError>;

fn first_validation_message(errors: &validator::ValidationErrors) -> Option<String> {
    errors
        .field_errors()
        .values()
        .flat_map(|field| field.iter())
        .next()
        .map(crate::utils::validation::error_message)
}

/// Helper para criar erros de validação de um único campo
pub fn validation_error(field: &'static str, message: &'static str) -> AppError {
    use validator::ValidationError;

    let mut error = ValidationError::new("custom");
    error.message = Some(message.into());

    let mut errors = validator::ValidationErrors::new();
    errors.add(field, error);

    AppError::Validation(errors)
}

/// Helper para criar erros de recurso não encontrado
pub fn not_found_error(resource: &str, id: &str) -> AppError {
    AppError::NotFound(format!("{} with id '{}' not found", resource, id))
}

/// Helper para criar erros de solicitação incorreta
pub fn bad_request_error(message: &str) -> AppError {
    AppError::BadRequest(message.to_string())
}

/// Helper para criar erros internos
pub fn internal_error(message: &str) -> AppError {
    AppError::Internal(message.to_string())
}

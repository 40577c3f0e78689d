//! Utilidades de validação de formulário
//!
//! Este módulo contém as regras aplicadas aos campos antes do envio.
//! Cada função devolve a primeira regra violada como `ValidationError`
//! com a mensagem exibida ao lado do campo. Nenhuma função entra em
//! pânico: entrada malformada vira erro descritivo.

use chrono::{NaiveDate, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use validator::ValidationError;

use crate::utils::documents;

lazy_static! {
    static ref CEP_RE: Regex = Regex::new(r"^\d{5}-?\d{3}$").unwrap();
    static ref PHONE_RE: Regex = Regex::new(r"^\(?\d{2}\)?\s?\d{4,5}-?\d{4}$").unwrap();
}

/// Domínios de e-mail aceitos no cadastro
const ALLOWED_EMAIL_DOMAINS: [&str; 3] = ["gmail.com", "hotmail.com", "outlook.com"];

fn field_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(message.into());
    error
}

/// Mensagem de um erro de validação, caindo no código quando não há texto
pub fn error_message(error: &ValidationError) -> String {
    error
        .message
        .as_ref()
        .map(|m| m.to_string())
        .unwrap_or_else(|| error.code.to_string())
}

/// Campo obrigatório
pub fn validate_required(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(field_error("required", "Campo obrigatório"));
    }
    Ok(())
}

/// E-mail restrito aos domínios aceitos
pub fn validate_email(value: &str) -> Result<(), ValidationError> {
    let value = value.trim();
    let (local, domain) = value
        .split_once('@')
        .ok_or_else(|| field_error("email", "E-mail inválido"))?;
    if local.is_empty() {
        return Err(field_error("email", "E-mail inválido"));
    }
    if !ALLOWED_EMAIL_DOMAINS.contains(&domain.to_lowercase().as_str()) {
        return Err(field_error(
            "email_domain",
            "Use um e-mail gmail.com, hotmail.com ou outlook.com",
        ));
    }
    Ok(())
}

/// Senha com quatro regras independentes, devolvendo a primeira violada:
/// tamanho mínimo 8, uma maiúscula, um número e um símbolo
pub fn validate_password(value: &str) -> Result<(), ValidationError> {
    if value.chars().count() < 8 {
        return Err(field_error(
            "senha_tamanho",
            "A senha deve ter ao menos 8 caracteres",
        ));
    }
    if !value.chars().any(|c| c.is_uppercase()) {
        return Err(field_error(
            "senha_maiuscula",
            "A senha deve ter ao menos uma letra maiúscula",
        ));
    }
    if !value.chars().any(|c| c.is_ascii_digit()) {
        return Err(field_error("senha_numero", "A senha deve ter ao menos um número"));
    }
    if !value
        .chars()
        .any(|c| !c.is_alphanumeric() && !c.is_whitespace())
    {
        return Err(field_error("senha_simbolo", "A senha deve ter ao menos um símbolo"));
    }
    Ok(())
}

/// CPF com dígitos verificadores corretos
pub fn validate_cpf(value: &str) -> Result<(), ValidationError> {
    if !documents::validate_cpf(value) {
        return Err(field_error("cpf", "CPF inválido"));
    }
    Ok(())
}

/// CNPJ com dígitos verificadores corretos
pub fn validate_cnpj(value: &str) -> Result<(), ValidationError> {
    if !documents::validate_cnpj(value) {
        return Err(field_error("cnpj", "CNPJ inválido"));
    }
    Ok(())
}

/// CEP no formato 00000-000
pub fn validate_cep(value: &str) -> Result<(), ValidationError> {
    if !CEP_RE.is_match(value.trim()) {
        return Err(field_error("cep", "CEP inválido"));
    }
    Ok(())
}

/// Telefone fixo ou celular com DDD
pub fn validate_phone(value: &str) -> Result<(), ValidationError> {
    if !PHONE_RE.is_match(value.trim()) {
        return Err(field_error("telefone", "Telefone inválido"));
    }
    Ok(())
}

/// Número de cartão com dezesseis dígitos
pub fn validate_card_number(value: &str) -> Result<(), ValidationError> {
    let digit_count = value.chars().filter(|c| c.is_ascii_digit()).count();
    if digit_count != 16 || value.chars().any(|c| !c.is_ascii_digit() && c != ' ') {
        return Err(field_error("cartao", "Número de cartão inválido"));
    }
    Ok(())
}

/// Validade de cartão `MM/AA` ainda não vencida
pub fn validate_card_expiry(value: &str) -> Result<(), ValidationError> {
    let (month_part, year_part) = value
        .trim()
        .split_once('/')
        .ok_or_else(|| field_error("validade", "Validade inválida"))?;
    let month: u32 = month_part
        .parse()
        .map_err(|_| field_error("validade", "Validade inválida"))?;
    let year: i32 = year_part
        .parse()
        .map_err(|_| field_error("validade", "Validade inválida"))?;
    if !(1..=12).contains(&month) || year_part.len() != 2 {
        return Err(field_error("validade", "Validade inválida"));
    }
    // último dia do mês informado, no século atual
    let expiry = NaiveDate::from_ymd_opt(2000 + year, month, 1)
        .and_then(|d| d.checked_add_months(chrono::Months::new(1)))
        .ok_or_else(|| field_error("validade", "Validade inválida"))?;
    if expiry <= Utc::now().date_naive() {
        return Err(field_error("validade_vencida", "Cartão vencido"));
    }
    Ok(())
}

/// Data estritamente no futuro
pub fn validate_future_date(value: NaiveDate) -> Result<(), ValidationError> {
    if value <= Utc::now().date_naive() {
        return Err(field_error("data_futura", "A data deve ser futura"));
    }
    Ok(())
}

/// Aceite dos termos de uso
pub fn validate_terms(accepted: bool) -> Result<(), ValidationError> {
    if !accepted {
        return Err(field_error("termos", "É preciso aceitar os termos de uso"));
    }
    Ok(())
}

/// Confirmação idêntica ao valor original
pub fn validate_confirmation(value: &str, confirmation: &str) -> Result<(), ValidationError> {
    if value != confirmation {
        return Err(field_error("confirmacao", "Os campos não conferem"));
    }
    Ok(())
}

/// Validar comprimento mínimo e máximo
pub fn validate_length(value: &str, min: usize, max: usize) -> Result<(), ValidationError> {
    let len = value.chars().count();
    if len < min || len > max {
        let mut error = field_error("length", "Tamanho inválido");
        error.add_param("min".into(), &min);
        error.add_param("max".into(), &max);
        error.add_param("actual".into(), &len);
        return Err(error);
    }
    Ok(())
}

/// Validar que um valor esteja em um intervalo específico
pub fn validate_range<T: PartialOrd + std::fmt::Display + Serialize>(
    value: T,
    min: T,
    max: T,
) -> Result<(), ValidationError> {
    if value < min || value > max {
        let mut error = field_error("range", "Valor fora do intervalo");
        error.add_param("min".into(), &min);
        error.add_param("max".into(), &max);
        error.add_param("actual".into(), &value);
        return Err(error);
    }
    Ok(())
}

/// Validar que um valor seja positivo
pub fn validate_positive<T: PartialOrd + std::fmt::Display + num_traits::Zero + Serialize>(
    value: T,
) -> Result<(), ValidationError> {
    if value <= T::zero() {
        let mut error = field_error("positive", "O valor deve ser positivo");
        error.add_param("value".into(), &value);
        return Err(error);
    }
    Ok(())
}

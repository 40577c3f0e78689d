//! Máscaras de campos de formulário
//!
//! Este módulo reformata a digitação bruta para a forma canônica de
//! exibição. Toda máscara é idempotente, nunca falha e aceita entrada
//! parcial devolvendo o maior agrupamento válido.

/// Extrai apenas os dígitos da entrada, limitado a `cap` caracteres
fn digits(input: &str, cap: usize) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(cap)
        .collect()
}

/// Máscara de CPF: `000.000.000-00`
pub fn mask_cpf(input: &str) -> String {
    let digits = digits(input, 11);
    let mut out = String::with_capacity(14);
    for (i, c) in digits.chars().enumerate() {
        if i == 3 || i == 6 {
            out.push('.');
        }
        if i == 9 {
            out.push('-');
        }
        out.push(c);
    }
    out
}

/// Máscara de CNPJ: `00.000.000/0000-00`
pub fn mask_cnpj(input: &str) -> String {
    let digits = digits(input, 14);
    let mut out = String::with_capacity(18);
    for (i, c) in digits.chars().enumerate() {
        match i {
            2 | 5 => out.push('.'),
            8 => out.push('/'),
            12 => out.push('-'),
            _ => {}
        }
        out.push(c);
    }
    out
}

/// Máscara de CEP: `00000-000`
pub fn mask_cep(input: &str) -> String {
    let digits = digits(input, 8);
    let mut out = String::with_capacity(9);
    for (i, c) in digits.chars().enumerate() {
        if i == 5 {
            out.push('-');
        }
        out.push(c);
    }
    out
}

/// Máscara de telefone: `(00) 0000-0000` ou `(00) 00000-0000` com o
/// nono dígito de celular
pub fn mask_phone(input: &str) -> String {
    let digits = digits(input, 11);
    if digits.is_empty() {
        return String::new();
    }
    if digits.len() <= 2 {
        return format!("({}", digits);
    }
    let (ddd, rest) = digits.split_at(2);
    if rest.len() <= 4 {
        return format!("({}) {}", ddd, rest);
    }
    // celulares têm 9 dígitos após o DDD; o hífen muda de posição
    let split = if rest.len() > 8 { 5 } else { 4 };
    let (prefix, suffix) = rest.split_at(split);
    format!("({}) {}-{}", ddd, prefix, suffix)
}

/// Máscara de cartão: grupos de quatro dígitos separados por espaço
pub fn mask_card(input: &str) -> String {
    let digits = digits(input, 16);
    digits
        .as_bytes()
        .chunks(4)
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or_default())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Máscara de validade do cartão: `MM/AA`
pub fn mask_card_expiry(input: &str) -> String {
    let digits = digits(input, 4);
    if digits.len() <= 2 {
        return digits;
    }
    let (month, year) = digits.split_at(2);
    format!("{}/{}", month, year)
}

/// Máscara de moeda: os dígitos são centavos, exibidos como `R$ 1.234,56`
pub fn mask_currency(input: &str) -> String {
    let digits = digits(input, 15);
    if digits.is_empty() {
        return String::new();
    }
    let cents: u64 = digits.parse().unwrap_or(0);
    let whole = (cents / 100).to_string();
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, c) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    format!("R$ {},{:02}", grouped, cents % 100)
}

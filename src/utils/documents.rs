//! Validação de documentos brasileiros
//!
//! Este módulo implementa o algoritmo oficial de dígitos verificadores
//! módulo 11 para CPF e CNPJ. Entrada curta, longa ou composta por um
//! único dígito repetido é rejeitada sem erro.

/// Calcula um dígito verificador módulo 11 com a sequência de pesos dada
fn check_digit(digits: &[u32], weights: &[u32]) -> u32 {
    let sum: u32 = digits.iter().zip(weights.iter()).map(|(d, w)| d * w).sum();
    let rest = sum % 11;
    if rest < 2 {
        0
    } else {
        11 - rest
    }
}

fn parse_digits(input: &str) -> Vec<u32> {
    input.chars().filter_map(|c| c.to_digit(10)).collect()
}

fn all_repeated(digits: &[u32]) -> bool {
    digits.iter().all(|&d| d == digits[0])
}

/// Valida um CPF, mascarado ou não.
///
/// Devolve `true` apenas quando há exatamente 11 dígitos e os dois
/// dígitos verificadores conferem com a soma ponderada.
pub fn validate_cpf(input: &str) -> bool {
    let digits = parse_digits(input);
    if digits.len() != 11 || all_repeated(&digits) {
        return false;
    }
    let first = check_digit(&digits[..9], &[10, 9, 8, 7, 6, 5, 4, 3, 2]);
    let second = check_digit(&digits[..10], &[11, 10, 9, 8, 7, 6, 5, 4, 3, 2]);
    digits[9] == first && digits[10] == second
}

/// Valida um CNPJ, mascarado ou não
pub fn validate_cnpj(input: &str) -> bool {
    let digits = parse_digits(input);
    if digits.len() != 14 || all_repeated(&digits) {
        return false;
    }
    let first = check_digit(&digits[..12], &[5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2]);
    let second = check_digit(&digits[..13], &[6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2]);
    digits[12] == first && digits[13] == second
}

//! Filtro e ordenação do catálogo de pacotes
//!
//! Este módulo recalcula a lista visível a cada mudança de critério.
//! A função é pura e não guarda nada entre chamadas: o resultado depende
//! apenas de (catálogo, critérios), o que permite reexecutá-la a cada
//! tecla sem risco de estado velho.

use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::package::TravelPackage;

/// Faixas de duração usadas no filtro categórico
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DurationBucket {
    Short,
    Medium,
    Long,
}

impl DurationBucket {
    /// Rótulo exibido no seletor
    pub fn label(&self) -> &'static str {
        match self {
            DurationBucket::Short => "1-5 dias",
            DurationBucket::Medium => "6-10 dias",
            DurationBucket::Long => "11+ dias",
        }
    }

    pub fn matches(&self, duration_days: u32) -> bool {
        match self {
            DurationBucket::Short => duration_days <= 5,
            DurationBucket::Medium => (6..=10).contains(&duration_days),
            DurationBucket::Long => duration_days >= 11,
        }
    }
}

/// Chave de ordenação do catálogo. `Featured` preserva a ordem da API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    Featured,
    PriceAsc,
    PriceDesc,
    DurationAsc,
}

/// Critérios selecionados pelo usuário em uma sessão de busca.
///
/// `None` em origem, destino e duração equivale à opção "Todos".
/// O estado é descartado ao sair da página; nada é persistido.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub search_text: String,
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub duration: Option<DurationBucket>,
    pub price_min: f64,
    pub price_max: f64,
    pub departure_after: Option<NaiveDate>,
    pub arrival_before: Option<NaiveDate>,
    pub sort: SortKey,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            origin: None,
            destination: None,
            duration: None,
            price_min: 0.0,
            price_max: f64::MAX,
            departure_after: None,
            arrival_before: None,
            sort: SortKey::Featured,
        }
    }
}

/// Recalcula a lista visível a partir do catálogo completo.
///
/// Todos os predicados são combinados por E lógico; a ordenação é
/// estável, então empates mantêm a ordem vinda da API. Catálogo vazio ou
/// critérios sem correspondência devolvem lista vazia.
pub fn compute_visible_packages(
    catalog: &[TravelPackage],
    criteria: &FilterCriteria,
) -> Vec<TravelPackage> {
    let term = criteria.search_text.trim().to_lowercase();
    let mut visible: Vec<TravelPackage> = catalog
        .iter()
        .filter(|package| matches_criteria(package, criteria, &term))
        .cloned()
        .collect();

    match criteria.sort {
        SortKey::Featured => {}
        SortKey::PriceAsc => visible.sort_by(|a, b| compare_price(a, b)),
        SortKey::PriceDesc => visible.sort_by(|a, b| compare_price(b, a)),
        SortKey::DurationAsc => visible.sort_by(|a, b| a.duration_days.cmp(&b.duration_days)),
    }
    visible
}

fn compare_price(a: &TravelPackage, b: &TravelPackage) -> Ordering {
    a.price.partial_cmp(&b.price).unwrap_or(Ordering::Equal)
}

fn matches_criteria(package: &TravelPackage, criteria: &FilterCriteria, term: &str) -> bool {
    if !term.is_empty() && !haystack(package).contains(term) {
        return false;
    }
    if let Some(origin) = &criteria.origin {
        if package.origin.city != *origin {
            return false;
        }
    }
    if let Some(destination) = &criteria.destination {
        if package.destination.city != *destination {
            return false;
        }
    }
    if package.price < criteria.price_min || package.price > criteria.price_max {
        return false;
    }
    if let Some(bucket) = criteria.duration {
        if !bucket.matches(package.duration_days) {
            return false;
        }
    }
    matches_date_window(package, criteria)
}

/// Janela de datas: o intervalo ocupado pela viagem precisa cruzar os
/// limites informados. Sem limites, todo pacote passa.
fn matches_date_window(package: &TravelPackage, criteria: &FilterCriteria) -> bool {
    if criteria.departure_after.is_none() && criteria.arrival_before.is_none() {
        return true;
    }
    let (start, end) = package.occupied_interval();
    if let Some(after) = criteria.departure_after {
        if end < after {
            return false;
        }
    }
    if let Some(before) = criteria.arrival_before {
        if start > before {
            return false;
        }
    }
    true
}

/// Concatena a forma textual de todos os campos escalares do pacote,
/// descendo um nível nos objetos aninhados (origem e destino)
fn haystack(package: &TravelPackage) -> String {
    let mut parts = Vec::new();
    if let Ok(Value::Object(map)) = serde_json::to_value(package) {
        for value in map.values() {
            match value {
                Value::Object(nested) => {
                    for nested_value in nested.values() {
                        push_scalar(&mut parts, nested_value);
                    }
                }
                other => push_scalar(&mut parts, other),
            }
        }
    }
    parts.join(" ").to_lowercase()
}

fn push_scalar(parts: &mut Vec<String>, value: &Value) {
    match value {
        Value::String(text) => parts.push(text.clone()),
        Value::Number(number) => parts.push(number.to_string()),
        Value::Bool(flag) => parts.push(flag.to_string()),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::package::{Location, VehicleType};
    use uuid::Uuid;

    fn package(title: &str, price: f64, duration: u32) -> TravelPackage {
        TravelPackage {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description: format!("Pacote {}", title),
            origin: Location {
                city: "São Paulo".to_string(),
                country: "Brasil".to_string(),
            },
            destination: Location {
                city: "Salvador".to_string(),
                country: "Brasil".to_string(),
            },
            vehicle: VehicleType::Plane,
            duration_days: duration,
            price,
            original_price: price,
            tax: 80.0,
            start_date: NaiveDate::from_ymd_opt(2026, 9, 10).unwrap(),
            coupon_code: None,
            discount_percent: None,
            active: true,
        }
    }

    #[test]
    fn test_criterios_padrao_preservam_a_ordem() {
        let catalog = vec![
            package("A", 300.0, 3),
            package("B", 100.0, 7),
            package("C", 200.0, 12),
        ];
        let visible = compute_visible_packages(&catalog, &FilterCriteria::default());
        let titles: Vec<&str> = visible.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_faixa_de_preco_inclusiva() {
        let catalog = vec![
            package("barato", 100.0, 3),
            package("medio", 500.0, 3),
            package("caro", 900.0, 3),
        ];
        let criteria = FilterCriteria {
            price_min: 200.0,
            price_max: 600.0,
            ..Default::default()
        };
        let visible = compute_visible_packages(&catalog, &criteria);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "medio");

        // faixa abaixo de todos os preços é legal e devolve vazio
        let nothing = FilterCriteria {
            price_max: 50.0,
            ..Default::default()
        };
        assert!(compute_visible_packages(&catalog, &nothing).is_empty());
    }

    #[test]
    fn test_faixas_de_duracao() {
        assert!(DurationBucket::Short.matches(5));
        assert!(!DurationBucket::Medium.matches(5));
        assert!(!DurationBucket::Long.matches(5));

        assert!(DurationBucket::Long.matches(11));
        assert!(!DurationBucket::Medium.matches(11));
        assert!(!DurationBucket::Short.matches(11));

        assert!(DurationBucket::Medium.matches(6));
        assert!(DurationBucket::Medium.matches(10));
    }

    #[test]
    fn test_ordenacao_estavel_por_preco() {
        let catalog = vec![
            package("1", 300.0, 3),
            package("2", 100.0, 3),
            package("3", 100.0, 3),
        ];
        let criteria = FilterCriteria {
            sort: SortKey::PriceAsc,
            ..Default::default()
        };
        let visible = compute_visible_packages(&catalog, &criteria);
        let titles: Vec<&str> = visible.iter().map(|p| p.title.as_str()).collect();
        // empate em 100.0 mantém a ordem original: 2 antes de 3
        assert_eq!(titles, vec!["2", "3", "1"]);
    }

    #[test]
    fn test_busca_textual_alcanca_campos_aninhados() {
        let catalog = vec![package("Praia", 400.0, 5), package("Serra", 400.0, 5)];
        let criteria = FilterCriteria {
            search_text: "salvador".to_string(),
            ..Default::default()
        };
        // a cidade fica dentro do objeto destino, um nível abaixo
        assert_eq!(compute_visible_packages(&catalog, &criteria).len(), 2);

        let by_title = FilterCriteria {
            search_text: "PRAIA".to_string(),
            ..Default::default()
        };
        let visible = compute_visible_packages(&catalog, &by_title);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "Praia");
    }

    #[test]
    fn test_filtro_por_origem_e_destino() {
        let mut other = package("Outro", 400.0, 5);
        other.origin.city = "Recife".to_string();
        let catalog = vec![package("Praia", 400.0, 5), other];

        let criteria = FilterCriteria {
            origin: Some("Recife".to_string()),
            ..Default::default()
        };
        let visible = compute_visible_packages(&catalog, &criteria);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "Outro");

        // None equivale a "Todos"
        let all = compute_visible_packages(&catalog, &FilterCriteria::default());
        assert_eq!(all.len(), 2);
    }

    #[test]
    fn test_janela_de_datas() {
        // viagem ocupa 10/09 a 15/09
        let catalog = vec![package("Curto", 400.0, 5)];

        let inside = FilterCriteria {
            departure_after: Some(NaiveDate::from_ymd_opt(2026, 9, 1).unwrap()),
            arrival_before: Some(NaiveDate::from_ymd_opt(2026, 9, 30).unwrap()),
            ..Default::default()
        };
        assert_eq!(compute_visible_packages(&catalog, &inside).len(), 1);

        let too_late = FilterCriteria {
            departure_after: Some(NaiveDate::from_ymd_opt(2026, 9, 20).unwrap()),
            ..Default::default()
        };
        assert!(compute_visible_packages(&catalog, &too_late).is_empty());

        let too_early = FilterCriteria {
            arrival_before: Some(NaiveDate::from_ymd_opt(2026, 9, 5).unwrap()),
            ..Default::default()
        };
        assert!(compute_visible_packages(&catalog, &too_early).is_empty());
    }

    #[test]
    fn test_catalogo_vazio() {
        let visible = compute_visible_packages(&[], &FilterCriteria::default());
        assert!(visible.is_empty());
    }

    #[test]
    fn test_ordenacao_por_duracao() {
        let catalog = vec![
            package("longo", 100.0, 12),
            package("curto", 200.0, 3),
            package("medio", 300.0, 7),
        ];
        let criteria = FilterCriteria {
            sort: SortKey::DurationAsc,
            ..Default::default()
        };
        let visible = compute_visible_packages(&catalog, &criteria);
        let durations: Vec<u32> = visible.iter().map(|p| p.duration_days).collect();
        assert_eq!(durations, vec![3, 7, 12]);
    }
}

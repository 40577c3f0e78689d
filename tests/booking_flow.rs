//! Fluxo completo de busca, cupom e preço, sem rede: a API é substituída
//! por stubs locais, como nos demais testes do projeto.

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use travel_booking::models::form::{FieldKind, FormField};
use travel_booking::models::package::{Location, TravelPackage, VehicleType};
use travel_booking::services::catalog_filter::{
    compute_visible_packages, DurationBucket, FilterCriteria, SortKey,
};
use travel_booking::services::coupon::{CouponConfirmation, CouponFlow, CouponGateway};
use travel_booking::services::pricing::{calculate, PricingInput};
use travel_booking::state::SearchSession;
use travel_booking::utils::errors::AppResult;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn package(title: &str, price: f64, duration: u32, coupon: Option<&str>) -> TravelPackage {
    TravelPackage {
        id: Uuid::new_v4(),
        title: title.to_string(),
        description: format!("Pacote {}", title),
        origin: Location {
            city: "São Paulo".to_string(),
            country: "Brasil".to_string(),
        },
        destination: Location {
            city: "Fortaleza".to_string(),
            country: "Brasil".to_string(),
        },
        vehicle: VehicleType::Plane,
        duration_days: duration,
        price,
        original_price: price,
        tax: 150.0,
        start_date: NaiveDate::from_ymd_opt(2026, 11, 3).unwrap(),
        coupon_code: coupon.map(str::to_string),
        discount_percent: coupon.map(|_| 10.0),
        active: true,
    }
}

/// Stub que confirma o cupom configurado no próprio pacote
struct CatalogGateway {
    catalog: Vec<TravelPackage>,
}

#[async_trait]
impl CouponGateway for CatalogGateway {
    async fn confirm_coupon(&self, package_id: Uuid, code: &str) -> AppResult<CouponConfirmation> {
        let found = self.catalog.iter().find(|p| p.id == package_id);
        let valid = found
            .and_then(|p| p.coupon_code.as_deref())
            .map(|configured| configured.eq_ignore_ascii_case(code))
            .unwrap_or(false);
        Ok(CouponConfirmation {
            valid,
            discount_percent: if valid {
                found.and_then(|p| p.discount_percent).unwrap_or(0.0)
            } else {
                0.0
            },
            message: if valid {
                None
            } else {
                Some("Cupom inválido".to_string())
            },
        })
    }
}

#[tokio::test]
async fn test_fluxo_busca_cupom_e_preco() {
    init_logging();

    let catalog = vec![
        package("Fim de semana", 800.0, 3, None),
        package("Semana inteira", 1000.0, 4, Some("VERAO10")),
        package("Expedição", 4500.0, 15, None),
    ];

    // a página carrega o catálogo em uma sessão de busca
    let mut search = SearchSession::new();
    let generation = search.begin_fetch();
    assert!(search.accept_catalog(generation, catalog.clone()));
    assert_eq!(search.visible().len(), 3);

    // o usuário restringe preço e duração
    search.criteria = FilterCriteria {
        price_min: 900.0,
        price_max: 2000.0,
        duration: Some(DurationBucket::Short),
        ..Default::default()
    };
    let visible = search.visible();
    assert_eq!(visible.len(), 1);
    let chosen = visible[0].clone();
    assert_eq!(chosen.title, "Semana inteira");

    // aplica o cupom configurado no pacote, sem diferenciar caixa
    let gateway = CatalogGateway { catalog };
    let mut coupon = CouponFlow::new();
    coupon.submit(&gateway, chosen.id, "verao10").await;
    assert!(coupon.is_applied());

    // preço final com dois viajantes e diária de 200
    let pricing = calculate(&PricingInput {
        package_price: chosen.price,
        tax: chosen.tax,
        travelers: 2,
        room_rate_per_night: 200.0,
        duration_days: chosen.duration_days,
        discount_percent: coupon.discount_percent(),
    });
    assert_eq!(pricing.base_cost, 2000.0);
    assert_eq!(pricing.accommodation_cost, 1200.0);
    // desconto de 10% sobre 3350
    assert_eq!(pricing.discount, 335.0);
    assert_eq!(pricing.total, 3015.0);
}

#[tokio::test]
async fn test_cupom_divergente_mantem_preco_cheio() {
    init_logging();

    let catalog = vec![package("Semana inteira", 1000.0, 4, Some("VERAO10"))];
    let chosen = catalog[0].clone();
    let gateway = CatalogGateway { catalog };

    let mut coupon = CouponFlow::new();
    coupon.submit(&gateway, chosen.id, "INVERNO20").await;
    assert!(!coupon.is_applied());
    assert!(!coupon.error_message().unwrap().is_empty());

    let pricing = calculate(&PricingInput {
        package_price: chosen.price,
        tax: chosen.tax,
        travelers: 2,
        room_rate_per_night: 200.0,
        duration_days: chosen.duration_days,
        discount_percent: coupon.discount_percent(),
    });
    assert_eq!(pricing.discount, 0.0);
    assert_eq!(pricing.total, 3350.0);
}

#[tokio::test]
async fn test_resposta_atrasada_nao_sobrescreve_busca_nova() {
    init_logging();

    let mut search = SearchSession::new();

    // primeira busca parte, o usuário digita de novo e uma segunda parte
    let stale = search.begin_fetch();
    let current = search.begin_fetch();

    // a segunda resposta chega primeiro
    assert!(search.accept_catalog(current, vec![package("Atual", 500.0, 3, None)]));
    // a primeira chega atrasada e é descartada
    assert!(!search.accept_catalog(stale, vec![package("Velho", 900.0, 9, None)]));

    let visible = search.visible();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].title, "Atual");
}

#[test]
fn test_ordenacao_aplicada_depois_do_filtro() {
    let catalog = vec![
        package("caro", 900.0, 3, None),
        package("barato", 100.0, 3, None),
        package("medio", 500.0, 3, None),
    ];
    let criteria = FilterCriteria {
        price_max: 600.0,
        sort: SortKey::PriceAsc,
        ..Default::default()
    };
    let visible = compute_visible_packages(&catalog, &criteria);
    let titles: Vec<&str> = visible.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["barato", "medio"]);
}

#[test]
fn test_formulario_de_checkout_mascarado() {
    let mut cpf = FormField::new(FieldKind::Cpf);
    cpf.update("52998224725");
    assert_eq!(cpf.masked, "529.982.247-25");
    assert!(cpf.validate());

    let mut card = FormField::new(FieldKind::Card);
    card.update("4111-1111-1111-1111");
    assert_eq!(card.masked, "4111 1111 1111 1111");
    assert!(card.validate());

    let mut expiry = FormField::new(FieldKind::CardExpiry);
    expiry.update("1299");
    assert_eq!(expiry.masked, "12/99");
    assert!(expiry.validate());
}

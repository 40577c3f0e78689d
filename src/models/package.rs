use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Cidade e país de origem ou destino de um pacote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub city: String,
    pub country: String,
}

/// Meio de transporte do pacote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleType {
    Plane,
    Bus,
    Cruise,
}

/// Pacote de viagem como entregue pela API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelPackage {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub origin: Location,
    pub destination: Location,
    pub vehicle: VehicleType,
    pub duration_days: u32,
    pub price: f64,
    pub original_price: f64,
    pub tax: f64,
    pub start_date: NaiveDate,
    pub coupon_code: Option<String>,
    pub discount_percent: Option<f64>,
    pub active: bool,
}

impl TravelPackage {
    /// Intervalo ocupado pela viagem: da partida até `start + duration` dias
    pub fn occupied_interval(&self) -> (NaiveDate, NaiveDate) {
        let end = self.start_date + Duration::days(i64::from(self.duration_days));
        (self.start_date, end)
    }

    pub fn has_discount(&self) -> bool {
        self.price < self.original_price
    }

    /// Invariantes de catálogo: duração mínima de um dia e preço com
    /// desconto nunca acima do preço original
    pub fn is_consistent(&self) -> bool {
        if self.duration_days < 1 {
            return false;
        }
        if self.discount_percent.is_some() && self.price > self.original_price {
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn package() -> TravelPackage {
        TravelPackage {
            id: Uuid::new_v4(),
            title: "Natal encantado".to_string(),
            description: "Sete noites em Gramado".to_string(),
            origin: Location {
                city: "São Paulo".to_string(),
                country: "Brasil".to_string(),
            },
            destination: Location {
                city: "Gramado".to_string(),
                country: "Brasil".to_string(),
            },
            vehicle: VehicleType::Bus,
            duration_days: 7,
            price: 1890.0,
            original_price: 2100.0,
            tax: 120.0,
            start_date: NaiveDate::from_ymd_opt(2026, 12, 18).unwrap(),
            coupon_code: Some("NATAL10".to_string()),
            discount_percent: Some(10.0),
            active: true,
        }
    }

    #[test]
    fn test_occupied_interval() {
        let p = package();
        let (start, end) = p.occupied_interval();
        assert_eq!(start, NaiveDate::from_ymd_opt(2026, 12, 18).unwrap());
        assert_eq!(end, NaiveDate::from_ymd_opt(2026, 12, 25).unwrap());
    }

    #[test]
    fn test_is_consistent() {
        let mut p = package();
        assert!(p.is_consistent());
        assert!(p.has_discount());

        p.duration_days = 0;
        assert!(!p.is_consistent());

        let mut inverted = package();
        inverted.price = 2500.0;
        assert!(!inverted.is_consistent());
    }
}

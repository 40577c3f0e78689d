use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Hotel disponível no destino do pacote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotel {
    pub id: Uuid,
    pub name: String,
    pub city: String,
    pub rating: f32,
}

/// Tipo de quarto com a diária usada no cálculo da reserva
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomType {
    pub id: Uuid,
    pub hotel_id: Uuid,
    pub name: String,
    pub rate_per_night: f64,
    pub capacity: u32,
}

/// Comodidade exibida na página do hotel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Amenity {
    pub id: Uuid,
    pub name: String,
    /// Nome do ícone enviado pela API; ver [`AmenityIcon::from_name`]
    pub icon: String,
}

impl Amenity {
    pub fn icon(&self) -> Option<AmenityIcon> {
        AmenityIcon::from_name(&self.icon)
    }
}

/// Conjunto fechado de ícones de comodidade.
///
/// A API envia o ícone como texto livre; aqui ele vira uma variante
/// conhecida e qualquer nome fora do conjunto é ignorado pela interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmenityIcon {
    Wifi,
    Pool,
    Parking,
    Breakfast,
    Gym,
    Pets,
    AirConditioning,
    Restaurant,
}

impl AmenityIcon {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "wifi" => Some(AmenityIcon::Wifi),
            "piscina" | "pool" => Some(AmenityIcon::Pool),
            "estacionamento" | "parking" => Some(AmenityIcon::Parking),
            "cafe" | "cafe_da_manha" | "breakfast" => Some(AmenityIcon::Breakfast),
            "academia" | "gym" => Some(AmenityIcon::Gym),
            "pets" => Some(AmenityIcon::Pets),
            "ar_condicionado" | "air_conditioning" => Some(AmenityIcon::AirConditioning),
            "restaurante" | "restaurant" => Some(AmenityIcon::Restaurant),
            _ => None,
        }
    }

    /// Rótulo exibido ao lado do ícone
    pub fn label(&self) -> &'static str {
        match self {
            AmenityIcon::Wifi => "Wi-Fi",
            AmenityIcon::Pool => "Piscina",
            AmenityIcon::Parking => "Estacionamento",
            AmenityIcon::Breakfast => "Café da manhã",
            AmenityIcon::Gym => "Academia",
            AmenityIcon::Pets => "Aceita pets",
            AmenityIcon::AirConditioning => "Ar-condicionado",
            AmenityIcon::Restaurant => "Restaurante",
        }
    }
}

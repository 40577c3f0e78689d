use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Papel do usuário na plataforma
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Customer,
    Affiliate,
    Admin,
}

/// Perfil do usuário autenticado, editável na tela de perfil
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub cpf: Option<String>,
    pub phone: Option<String>,
    pub role: UserRole,
}

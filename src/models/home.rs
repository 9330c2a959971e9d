use serde::{Deserialize, Serialize};

use crate::models::Severity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisasterStatus {
    Active,
    Contained,
    Recovery,
}

impl DisasterStatus {
    pub fn label(&self) -> &'static str {
        match self {
            DisasterStatus::Active => "Active",
            DisasterStatus::Contained => "Contained",
            DisasterStatus::Recovery => "Recovery",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentDisaster {
    pub id: u32,
    pub title: String,
    pub location: String,
    pub severity: Severity,
    pub date: String,
    pub status: DisasterStatus,
}

/// Tarjeta de servicio de la portada; `path` es una ruta del router
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub title: String,
    pub description: String,
    pub icon: String,
    pub path: String,
    pub color_class: String,
}

use serde::{Deserialize, Serialize};

use crate::models::Faq;

/// Categoría del centro de ayuda con sus preguntas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaqCategory {
    pub key: String,
    pub title: String,
    pub icon: String,
    pub questions: Vec<Faq>,
}

impl FaqCategory {
    /// Identificador estable de cada pregunta para el acordeón
    pub fn item_id(&self, index: usize) -> String {
        format!("item-{}-{}", self.key, index)
    }
}

use serde::{Deserialize, Serialize};

/// Categoría de productos
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub nombre: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCategoryDTO {
    pub nombre: String,
}

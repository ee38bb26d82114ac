use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Product identifier, chosen by the client on creation
pub type ProductId = i64;

/// Upper bound for `tax_rate`: 10000 basis points = 100%
pub const MAX_TAX_RATE: i64 = 10_000;

/// Product entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier
    pub id: ProductId,
    /// Product name
    pub name: String,
    /// Product description
    pub description: String,
    /// Price in minor currency units (cents)
    pub price: i64,
    /// Tax rate in basis points (700 = 7.00%)
    pub tax_rate: i64,
}

/// DTO for creating a new product
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProduct {
    #[validate(range(min = 1))]
    pub id: ProductId,
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Price in cents
    #[validate(range(min = 0))]
    #[serde(default)]
    pub price: i64,
    /// Basis points
    #[validate(range(min = 0, max = MAX_TAX_RATE))]
    #[serde(default)]
    pub tax_rate: i64,
}

/// DTO for updating an existing product
///
/// Absent and `null` fields are left untouched. An `id` in the body is ignored.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProduct {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    pub description: Option<String>,
    #[validate(range(min = 0))]
    pub price: Option<i64>,
    #[validate(range(min = 0, max = MAX_TAX_RATE))]
    pub tax_rate: Option<i64>,
}

/// Query parameters for listing products
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema, IntoParams)]
pub struct ProductFilter {
    /// Maximum number of products to return (all when absent)
    pub limit: Option<usize>,
    /// Number of products to skip
    #[serde(default)]
    pub offset: usize,
}

impl Product {
    pub fn new(input: CreateProduct) -> Self {
        Self {
            id: input.id,
            name: input.name,
            description: input.description,
            price: input.price,
            tax_rate: input.tax_rate,
        }
    }

    /// Merge supplied fields into this product
    pub fn apply_update(&mut self, update: UpdateProduct) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(tax_rate) = update.tax_rate {
            self.tax_rate = tax_rate;
        }
    }
}

impl UpdateProduct {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.tax_rate.is_none()
    }
}

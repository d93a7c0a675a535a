//! Product record type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockroom_core::{FieldValue, Model, RecordId, RecordMeta};

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: RecordId,
    pub name: String,
    pub price: f64,
    pub quantity: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields a caller supplies when creating a product.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductProps {
    pub name: String,
    pub price: f64,
    pub quantity: i64,
}

impl Model for Product {
    type Props = ProductProps;

    fn build(meta: RecordMeta, props: ProductProps) -> Self {
        Self {
            id: meta.id,
            name: props.name,
            price: props.price,
            quantity: props.quantity,
            created_at: meta.created_at,
            updated_at: meta.updated_at,
        }
    }

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "id" => Some(self.id.as_str().into()),
            "name" => Some(self.name.as_str().into()),
            "price" => Some(self.price.into()),
            "quantity" => Some(self.quantity.into()),
            "created_at" => Some(self.created_at.into()),
            "updated_at" => Some(self.updated_at.into()),
            _ => None,
        }
    }
}

//! Product entity and its request payloads

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::ValidationError;

/// Server-generated product identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct ProductId(i32);

impl ProductId {
    pub fn new(id: i32) -> Self {
        Self(id)
    }

    pub fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ProductId {
    type Err = ValidationError;

    /// Parse a path segment into an id.
    ///
    /// # Example
    /// ```
    /// use catalog_server::models::ProductId;
    ///
    /// assert_eq!("42".parse::<ProductId>().unwrap().get(), 42);
    /// assert!("abc".parse::<ProductId>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ValidationError::Missing { field: "product id" });
        }

        if let Ok(id) = s.parse::<i32>() {
            return Ok(Self(id));
        }

        let digits = s.strip_prefix(&['-', '+'][..]).unwrap_or(s);
        if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::OutOfRange { field: "product id" });
        }

        Err(ValidationError::InvalidFormat {
            field: "product id",
            reason: "must be an integer",
        })
    }
}

/// Product row as stored and as returned to clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: f64,
    #[serde(rename = "categoria")]
    #[sqlx(rename = "categoria")]
    pub category: String,
    #[serde(rename = "email_fornecedor")]
    #[sqlx(rename = "email_fornecedor")]
    pub supplier_email: String,
}

impl Product {
    /// Attach an id to a creation payload.
    pub fn from_new(id: ProductId, new: NewProduct) -> Self {
        Self {
            id,
            name: new.name,
            description: new.description,
            price: new.price,
            category: new.category,
            supplier_email: new.supplier_email,
        }
    }
}

/// Creation payload; every field is required
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: f64,
    #[serde(rename = "categoria")]
    pub category: String,
    #[serde(rename = "email_fornecedor")]
    pub supplier_email: String,
}

/// Partial update payload.
///
/// `None` (field absent or `null`) leaves the stored value unchanged.
/// None of the columns are nullable, so there is no "clear" operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, rename = "categoria", skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, rename = "email_fornecedor", skip_serializing_if = "Option::is_none")]
    pub supplier_email: Option<String>,
}

impl ProductPatch {
    /// True when the patch would not change anything.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.category.is_none()
            && self.supplier_email.is_none()
    }

    /// Overwrite the fields present in the patch.
    pub fn apply(&self, product: &mut Product) {
        if let Some(name) = &self.name {
            product.name.clone_from(name);
        }
        if let Some(description) = &self.description {
            product.description.clone_from(description);
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(category) = &self.category {
            product.category.clone_from(category);
        }
        if let Some(email) = &self.supplier_email {
            product.supplier_email.clone_from(email);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn widget() -> Product {
        Product {
            id: ProductId::new(1),
            name: "Widget".into(),
            description: "d".into(),
            price: 9.99,
            category: "tools".into(),
            supplier_email: "a@b.com".into(),
        }
    }

    #[test]
    fn product_uses_column_names_on_the_wire() {
        let value = serde_json::to_value(widget()).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 1,
                "name": "Widget",
                "description": "d",
                "price": 9.99,
                "categoria": "tools",
                "email_fornecedor": "a@b.com"
            })
        );
    }

    #[test]
    fn new_product_requires_every_field() {
        let missing_email = json!({
            "name": "Widget",
            "description": "d",
            "price": 9.99,
            "categoria": "tools"
        });
        assert!(serde_json::from_value::<NewProduct>(missing_email).is_err());
    }

    #[test]
    fn patch_treats_absent_and_null_alike() {
        let patch: ProductPatch =
            serde_json::from_value(json!({"name": null, "price": 1.5})).unwrap();
        assert_eq!(patch.name, None);
        assert_eq!(patch.price, Some(1.5));
        assert!(!patch.is_empty());

        let empty: ProductPatch = serde_json::from_value(json!({})).unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn apply_only_touches_present_fields() {
        let mut product = widget();
        let patch = ProductPatch {
            price: Some(12.0),
            category: Some("hardware".into()),
            ..Default::default()
        };

        patch.apply(&mut product);

        assert_eq!(product.price, 12.0);
        assert_eq!(product.category, "hardware");
        assert_eq!(product.name, "Widget");
        assert_eq!(product.supplier_email, "a@b.com");
    }

    #[test]
    fn product_id_flags_integers_beyond_i32() {
        assert_eq!("2147483647".parse::<ProductId>().unwrap().get(), i32::MAX);
        assert_eq!("-2147483648".parse::<ProductId>().unwrap().get(), i32::MIN);
        for raw in ["2147483648", "-2147483649", "+99999999999999999999999"] {
            assert!(
                matches!(raw.parse::<ProductId>(), Err(ValidationError::OutOfRange { .. })),
                "{raw}"
            );
        }
    }

    #[test]
    fn product_id_rejects_non_integers() {
        assert!(matches!(
            "1.5".parse::<ProductId>(),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            "12abc".parse::<ProductId>(),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            "-".parse::<ProductId>(),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            "".parse::<ProductId>(),
            Err(ValidationError::Missing { .. })
        ));
    }
}

//! In-process product store
//!
//! Backs `catalog serve --memory` and the router tests. Ids come from a
//! counter starting at 1 and are never reused, matching a SERIAL column.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::store::{DbError, ProductStore};
use crate::models::{NewProduct, Product, ProductId, ProductPatch};

#[derive(Debug, Default)]
struct Inner {
    rows: BTreeMap<ProductId, Product>,
    last_id: i32,
}

/// Product store held in memory; state is lost on shutdown
#[derive(Debug, Default)]
pub struct MemoryProductStore {
    inner: RwLock<Inner>,
}

impl MemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductStore for MemoryProductStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn get_product(&self, id: ProductId) -> Result<Option<Product>, DbError> {
        Ok(self.inner.read().await.rows.get(&id).cloned())
    }

    async fn get_products(&self) -> Result<Vec<Product>, DbError> {
        Ok(self.inner.read().await.rows.values().cloned().collect())
    }

    async fn create_product(&self, new: NewProduct) -> Result<Product, DbError> {
        let mut inner = self.inner.write().await;
        inner.last_id = inner.last_id.checked_add(1).ok_or_else(|| DbError::Constraint {
            message: "product id sequence exhausted".to_owned(),
        })?;

        let product = Product::from_new(ProductId::new(inner.last_id), new);
        inner.rows.insert(product.id, product.clone());
        Ok(product)
    }

    async fn delete_product(&self, id: ProductId) -> Result<Option<Product>, DbError> {
        Ok(self.inner.write().await.rows.remove(&id))
    }

    async fn update_product(
        &self,
        id: ProductId,
        patch: ProductPatch,
    ) -> Result<Option<Product>, DbError> {
        let mut inner = self.inner.write().await;
        let Some(product) = inner.rows.get_mut(&id) else {
            return Ok(None);
        };

        patch.apply(product);
        Ok(Some(product.clone()))
    }
}

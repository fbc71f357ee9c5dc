use std::sync::Arc;

use srcsync_core::NaturalKey;
use srcsync_infra::{
    InMemorySourceRepository, Intent, Outcome, ReconcileConfig, ReconcileError, ReconciliationEngine,
};
use srcsync_products::{Product, ProductRequest};

type ProductRepository = Arc<InMemorySourceRepository<Product>>;

/// Services shared by every handler.
pub struct AppServices {
    products: ReconciliationEngine<ProductRepository, Product>,
}

impl AppServices {
    /// Wire the product pipeline over an in-memory repository.
    pub fn in_memory(config: ReconcileConfig) -> Self {
        let repository: ProductRepository = Arc::new(InMemorySourceRepository::new());
        Self {
            products: ReconciliationEngine::new(repository, config),
        }
    }

    pub async fn products_reconcile(
        &self,
        request: &ProductRequest,
        intent: Intent,
    ) -> Result<Outcome<Product>, ReconcileError> {
        self.products.reconcile_payload(request, intent).await
    }

    pub async fn products_delete(&self, key: &NaturalKey) -> Result<Outcome<Product>, ReconcileError> {
        self.products.delete(key).await
    }

    pub async fn products_get(&self, key: &NaturalKey) -> Result<Option<Product>, ReconcileError> {
        self.products.resolve(key).await
    }
}

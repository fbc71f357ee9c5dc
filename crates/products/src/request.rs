use serde::{Deserialize, Serialize};

use srcsync_core::{DomainResult, NaturalKey, SourceMapper};

use crate::product::Product;

/// Inbound product payload as sent by an external source.
///
/// `desc` becomes the product's `name`. Missing fields deserialize as empty
/// strings; the mapper rejects a blank natural key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRequest {
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub source_id: String,
    #[serde(default)]
    pub sku: String,
    #[serde(default)]
    pub desc: String,
}

impl ProductRequest {
    pub fn new(
        source: impl Into<String>,
        source_id: impl Into<String>,
        sku: impl Into<String>,
        desc: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            source_id: source_id.into(),
            sku: sku.into(),
            desc: desc.into(),
        }
    }

    /// Natural key named by this payload.
    pub fn natural_key(&self) -> DomainResult<NaturalKey> {
        NaturalKey::try_new(self.source.clone(), self.source_id.clone())
    }
}

impl SourceMapper for ProductRequest {
    type Entity = Product;

    fn to_entity(&self) -> DomainResult<Product> {
        let key = self.natural_key()?;
        Ok(Product::transient(key, self.desc.clone(), self.sku.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use srcsync_core::{DomainError, Entity, SourceEntity};

    fn request() -> ProductRequest {
        ProductRequest::new("source", "sourceId", "SKU", "This is a product description")
    }

    #[test]
    fn maps_fields_onto_transient_product() {
        let p = request().to_entity().unwrap();

        assert!(p.is_new());
        assert_eq!(p.source_code(), "source");
        assert_eq!(p.source_id(), "sourceId");
        assert_eq!(p.sku(), "SKU");
        assert_eq!(p.name(), "This is a product description");
        assert_eq!(p.natural_key(), NaturalKey::new("source", "sourceId"));
    }

    #[test]
    fn mapping_twice_yields_field_equal_records() {
        let req = request();
        assert_eq!(req.to_entity().unwrap(), req.to_entity().unwrap());
    }

    #[test]
    fn blank_source_is_malformed() {
        let req = ProductRequest::new("", "sourceId", "SKU", "desc");
        assert!(matches!(req.to_entity(), Err(DomainError::Validation(_))));
    }

    #[test]
    fn blank_source_id_is_malformed() {
        let req = ProductRequest::new("source", " ", "SKU", "desc");
        assert!(matches!(req.to_entity(), Err(DomainError::Validation(_))));
    }

    #[test]
    fn empty_sku_and_desc_are_accepted() {
        let p = ProductRequest::new("source", "sourceId", "", "").to_entity().unwrap();
        assert_eq!(p.sku(), "");
        assert_eq!(p.name(), "");
    }

    #[test]
    fn deserializes_camel_case_payload() {
        let req: ProductRequest = serde_json::from_str(
            r#"{"source":"src1","sourceId":"id1","sku":"SKU","desc":"desc"}"#,
        )
        .unwrap();
        assert_eq!(req, ProductRequest::new("src1", "id1", "SKU", "desc"));
    }

    #[test]
    fn missing_source_id_deserializes_then_fails_mapping() {
        let req: ProductRequest = serde_json::from_str(r#"{"source":"src1"}"#).unwrap();
        assert!(req.to_entity().is_err());
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: mapping is deterministic and never yields a persisted record.
            #[test]
            fn to_entity_is_pure(
                source in "[a-z][a-z0-9]{0,11}",
                source_id in "[A-Za-z0-9][A-Za-z0-9-]{0,23}",
                sku in "[A-Z0-9]{0,16}",
                desc in "[A-Za-z0-9 ]{0,40}",
            ) {
                let req = ProductRequest::new(&source, &source_id, &sku, &desc);
                let a = req.to_entity().unwrap();
                let b = req.to_entity().unwrap();
                prop_assert!(a.is_new());
                prop_assert_eq!(a.name(), desc.as_str());
                prop_assert_eq!(a, b);
            }
        }
    }
}

use serde::{Deserialize, Serialize};

use srcsync_core::{Entity, EntityId, NaturalKey, SourceEntity};

/// Catalog product fed by an external source.
///
/// Serialized as `{ id, name, sku, source, sourceId }`. Equality and hashing
/// cover every field, surrogate id included.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Product {
    id: Option<EntityId>,
    name: String,
    sku: String,
    #[serde(rename = "source")]
    source_code: String,
    #[serde(rename = "sourceId")]
    source_id: String,
}

impl Product {
    /// Create a transient (not yet persisted) product.
    pub fn transient(key: NaturalKey, name: impl Into<String>, sku: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            sku: sku.into(),
            source_code: key.source_code().to_string(),
            source_id: key.source_id().to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sku(&self) -> &str {
        &self.sku
    }

    pub fn source_code(&self) -> &str {
        &self.source_code
    }

    pub fn source_id(&self) -> &str {
        &self.source_id
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_sku(mut self, sku: impl Into<String>) -> Self {
        self.sku = sku.into();
        self
    }
}

impl Entity for Product {
    type Id = EntityId;

    fn id(&self) -> Option<&Self::Id> {
        self.id.as_ref()
    }
}

impl SourceEntity for Product {
    fn natural_key(&self) -> NaturalKey {
        NaturalKey::new(self.source_code.clone(), self.source_id.clone())
    }

    fn with_id(mut self, id: EntityId) -> Self {
        self.id = Some(id);
        self
    }

    fn merge_from(&self, incoming: &Self) -> Self {
        Self {
            id: self.id,
            name: incoming.name.clone(),
            sku: incoming.sku.clone(),
            source_code: self.source_code.clone(),
            source_id: self.source_id.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::collections::HashSet;
    use std::hash::{Hash, Hasher};

    fn hash_of(p: &Product) -> u64 {
        let mut h = DefaultHasher::new();
        p.hash(&mut h);
        h.finish()
    }

    fn persisted(source: &str, source_id: &str) -> Product {
        Product::transient(NaturalKey::new(source, source_id), "desc", "SKU").with_id(EntityId::new())
    }

    #[test]
    fn transient_product_is_new_until_id_assigned() {
        let p = Product::transient(NaturalKey::new("src1", "id1"), "desc", "SKU");
        assert!(p.is_new());
        assert!(p.id().is_none());

        let p = p.with_id(EntityId::new());
        assert!(!p.is_new());
    }

    #[test]
    fn equal_products_hash_equally() {
        let a = persisted("source", "sourceId");
        let b = a.clone();
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));

        let set: HashSet<Product> = [a.clone(), b].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn truncating_natural_key_breaks_equality() {
        let actual = persisted("source", "sourceId");

        let mut other = actual.clone();
        other.source_id = actual.source_id()[..actual.source_id().len() - 1].to_string();
        assert_ne!(actual, other);

        let mut other = actual.clone();
        other.source_code = actual.source_code()[..actual.source_code().len() - 1].to_string();
        assert_ne!(actual, other);
    }

    #[test]
    fn transient_never_equals_persisted_form() {
        let transient = Product::transient(NaturalKey::new("src1", "id1"), "desc", "SKU");
        let saved = transient.clone().with_id(EntityId::new());
        assert_ne!(transient, saved);
    }

    #[test]
    fn merge_keeps_identity_and_takes_descriptive_fields() {
        let existing = persisted("src1", "id1");
        let incoming = Product::transient(NaturalKey::new("src1", "id1"), "desc_update", "SKU-2");

        let merged = existing.merge_from(&incoming);
        assert_eq!(merged.id(), existing.id());
        assert_eq!(merged.natural_key(), existing.natural_key());
        assert_eq!(merged.name(), "desc_update");
        assert_eq!(merged.sku(), "SKU-2");
    }

    #[test]
    fn serialized_form_uses_exposed_field_names() {
        let p = persisted("src1", "id1");
        let json = serde_json::to_value(&p).unwrap();

        assert_eq!(json["id"], p.id().unwrap().to_string());
        assert_eq!(json["name"], "desc");
        assert_eq!(json["sku"], "SKU");
        assert_eq!(json["source"], "src1");
        assert_eq!(json["sourceId"], "id1");
        assert_eq!(json.as_object().unwrap().len(), 5);
    }

    #[test]
    fn json_round_trip_preserves_every_field() {
        let p = persisted("src1", "id1");
        let back: Product = serde_json::from_str(&serde_json::to_string(&p).unwrap()).unwrap();
        assert_eq!(back, p);
        assert_eq!(hash_of(&back), hash_of(&p));
    }

    #[test]
    fn transient_serializes_null_id() {
        let p = Product::transient(NaturalKey::new("src1", "id1"), "desc", "SKU");
        let json = serde_json::to_value(&p).unwrap();
        assert!(json["id"].is_null());
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 500,
                ..ProptestConfig::default()
            })]

            /// Property: field-wise equal products are equal and hash equally.
            #[test]
            fn equality_is_consistent_with_hash(
                source in "[a-z0-9]{1,12}",
                source_id in "[A-Za-z0-9-]{1,24}",
                name in "[A-Za-z0-9 ]{0,40}",
                sku in "[A-Z0-9]{0,16}",
            ) {
                let id = EntityId::new();
                let a = Product::transient(NaturalKey::new(&source, &source_id), &name, &sku).with_id(id);
                let b = Product::transient(NaturalKey::new(&source, &source_id), &name, &sku).with_id(id);

                prop_assert_eq!(&a, &b);
                prop_assert_eq!(&b, &a);
                prop_assert_eq!(hash_of(&a), hash_of(&b));
            }

            /// Property: dropping the last char of source_id makes products unequal.
            #[test]
            fn shorter_source_id_is_unequal(
                source in "[a-z0-9]{1,12}",
                source_id in "[A-Za-z0-9-]{1,24}",
            ) {
                let a = Product::transient(NaturalKey::new(&source, &source_id), "desc", "SKU");
                let truncated = &source_id[..source_id.len() - 1];
                let b = Product::transient(NaturalKey::new(&source, truncated), "desc", "SKU");
                prop_assert_ne!(a, b);
            }

            /// Property: dropping the last char of source_code makes products unequal.
            #[test]
            fn shorter_source_code_is_unequal(
                source in "[a-z0-9]{1,12}",
                source_id in "[A-Za-z0-9-]{1,24}",
            ) {
                let a = Product::transient(NaturalKey::new(&source, &source_id), "desc", "SKU");
                let truncated = &source[..source.len() - 1];
                let b = Product::transient(NaturalKey::new(truncated, &source_id), "desc", "SKU");
                prop_assert_ne!(&a, &b);
            }

            /// Property: JSON round-trip is lossless.
            #[test]
            fn json_round_trip(
                source in "[a-z0-9]{1,12}",
                source_id in "[A-Za-z0-9-]{1,24}",
                name in "\\PC{0,40}",
                sku in "[A-Z0-9]{0,16}",
            ) {
                let p = Product::transient(NaturalKey::new(&source, &source_id), &name, &sku)
                    .with_id(EntityId::new());
                let back: Product = serde_json::from_value(serde_json::to_value(&p).unwrap()).unwrap();
                prop_assert_eq!(back, p);
            }
        }
    }
}

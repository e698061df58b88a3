//! Entity enum and tag-to-type catalog

use std::collections::HashMap;
use std::sync::OnceLock;

use serde_json::Value;

use super::*;
use crate::decoder::{DecodeResult, DecodedRecord, RecordDecoder};

type EntityBuilder = fn(&DecodedRecord) -> Entity;

fn build_entity<T>(record: &DecodedRecord) -> Entity
where
    T: DataListRecord + Into<Entity>,
{
    T::from_record(record).into()
}

entity_catalog! {
    Address,
    Assorted,
    Assortment,
    AssortmentGroup,
    AssortmentPosition,
    AuxDate,
    DeliveryBox,
    CartItem,
    CustomerInfo,
    DDate,
    Delivery,
    DeliveryState,
    DeselectedGroup,
    DeselectedItem,
    Discount,
    Favourite,
    Group,
    Item,
    KeyValue,
    Order,
    Pause,
    PermanentPosition,
    Position,
    RelatedItem,
    Rubric,
    Shop,
    ShopDate,
    ShopUrl,
    SubGroup,
    SubGroupMap,
    Subscription,
    Tour,
    UserInfo,
    XUnit,
}

static CATALOG: OnceLock<EntityCatalog> = OnceLock::new();

/// Maps type tags to the constructor of their compiled type.
#[derive(Debug)]
pub struct EntityCatalog {
    builders: HashMap<&'static str, EntityBuilder>,
}

impl EntityCatalog {
    /// Returns the catalog of compiled types.
    pub fn global() -> &'static EntityCatalog {
        CATALOG.get_or_init(|| EntityCatalog {
            builders: compiled_builders().into_iter().collect(),
        })
    }

    /// Schemas of every compiled type, in declaration order.
    pub fn schemas() -> Vec<RecordSchema> {
        compiled_schemas()
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.builders.contains_key(tag)
    }

    pub fn len(&self) -> usize {
        self.builders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.builders.is_empty()
    }

    /// Converts a decoded record to its compiled type, if it has one.
    pub fn build(&self, record: DecodedRecord) -> Entity {
        match self.builders.get(record.tag()) {
            Some(builder) => builder(&record),
            None => Entity::Untyped(record),
        }
    }
}

/// Converts every record tagged `T::TYPE_TAG`, keeping their order.
pub fn entities_of<T: DataListRecord>(records: &[DecodedRecord]) -> Vec<T> {
    records
        .iter()
        .filter(|record| record.tag() == T::TYPE_TAG)
        .map(T::from_record)
        .collect()
}

/// Decodes one raw record straight into a compiled type.
pub fn decode_as<T: DataListRecord>(raw: &Value) -> DecodeResult<T> {
    let record = RecordDecoder::decode(&T::schema(), raw)?;
    Ok(T::from_record(&record))
}

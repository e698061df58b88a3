//! Typed entity catalog
//!
//! Every record type the shop backend sends is declared here once, as an
//! ordered field table. Its schema goes into the builtin registry and its
//! struct is what `BatchDispatcher::parse_entities` returns.

#[macro_use]
mod macros;

mod assortment;
mod catalog;
mod customer;
mod delivery;
mod items;
mod orders;
mod shop;

pub use assortment::{Assorted, Assortment, AssortmentGroup, AssortmentPosition};
pub use catalog::{decode_as, entities_of, Entity, EntityCatalog};
pub use customer::{Address, CustomerInfo, UserInfo};
pub use delivery::{Delivery, DeliveryBox, DeliveryState};
pub use items::{
    DeselectedGroup, DeselectedItem, Discount, Favourite, Group, Item, RelatedItem, SubGroup,
    SubGroupMap, XUnit,
};
pub use orders::{CartItem, Order, Pause, PermanentPosition, Position, Subscription};
pub use shop::{AuxDate, DDate, KeyValue, Rubric, Shop, ShopDate, ShopUrl, Tour};

use crate::decoder::DecodedRecord;
use crate::schema::{FieldDef, RecordSchema};

/// A record type with a compiled positional schema.
pub trait DataListRecord: Sized {
    /// Tag of this type in the envelope
    const TYPE_TAG: &'static str;

    /// Ordered field table
    fn fields() -> Vec<FieldDef>;

    /// Builds a value from a record decoded with `schema()`.
    ///
    /// Fields the record lacks, or holds with another type, become `None`.
    fn from_record(record: &DecodedRecord) -> Self;

    fn schema() -> RecordSchema {
        RecordSchema::new(Self::TYPE_TAG, Self::fields())
    }
}

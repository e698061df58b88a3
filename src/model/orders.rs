//! Orders, order positions, cart and subscriptions

use std::ops::Deref;

use serde::Serialize;

use super::DataListRecord;
use crate::decoder::DecodedRecord;
use crate::schema::FieldDef;

datalist_record! {
    pub struct Order => "Order" {
        id: Int,
        ddate: String,
        state: String,
        tour_id: Int,
        /// Customer note
        cnote: String,
        /// Delivery note
        rnote: String,
        osh: String,
        last_changed: String,
        paid: Int,
        delivery_cost: Float,
        has_alcohol: Int,
        adrid: Int,
        cid: Int,
        shipcode: String,
        used_paycode: Int,
        invnum: Int,
        invtotal: Float,
    }
}

datalist_record! {
    /// One line of an order.
    pub struct Position => "Position" {
        /// Item reference
        id: Int = 0,
        amount: Float = 0.0,
        unit_name: String,
        price: Float = 0.0,
        /// Assortment this position was generated from, when not 0
        assortment_reference_id: Int = 0,
        deleted: Int = 0,
        pack_station: String,
        pack_station_id: Int = 0,
        packed_late: Int = 0,
        driver_note: String,
        box_name: String,
        delivered_amount: Float = 0.0,
        subscription_reference_id: Int = 0,
        discount: Int = 0,
        /// 50: locked, 60: out of stock
        protection: Int = 0,
        note: String,
        base_unit: String,
    }
}

/// A standing order line. Same field table as `Position`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PermanentPosition(pub Position);

impl DataListRecord for PermanentPosition {
    const TYPE_TAG: &'static str = "PermanentPosition";

    fn fields() -> Vec<FieldDef> {
        Position::fields()
    }

    fn from_record(record: &DecodedRecord) -> Self {
        Self(Position::from_record(record))
    }
}

impl Deref for PermanentPosition {
    type Target = Position;

    fn deref(&self) -> &Position {
        &self.0
    }
}

datalist_record! {
    pub struct CartItem => "CartItem" {
        item_id: Int,
        amount: Float,
        unit: String,
        note: String,
    }
}

datalist_record! {
    /// A recurring item delivery.
    pub struct Subscription => "Subscription" {
        id: Int,
        item_id: Int,
        amount: String,
        unit: String,
        start: String,
        end: String,
        /// Delivery period in weeks
        period: Int,
        last_delivery: String,
        tour_id: Int,
        notes: String,
        season: Int,
        mperiod: Int,
        address_id: Int,
    }
}

datalist_record! {
    /// A delivery pause.
    pub struct Pause => "Pause" {
        id: Int,
        start_date: Date,
        end_date: Date,
        dt: DateTime,
        note: String,
        pause_type: Int,
        ref_id: Int,
    }
}

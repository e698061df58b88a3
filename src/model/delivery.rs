//! Delivery and tracking records

datalist_record! {
    pub struct Delivery => "Delivery" {
        id: Int,
        customer_id: Int,
        delivery_address_id: Int,
        address_name: String,
        order_id: Int,
        todo_hint: String,
        way_hint: String,
        done_at: String,
        box_name: String,
        packstation_id: Int,
        addressid: Int,
        prediction: Int,
        box_count: Int,
        box_type: String,
        last: String,
        weight: Float,
        weigh_quality: Int,
        position: String,
    }
}

datalist_record! {
    /// Live tracking state of a delivery.
    pub struct DeliveryState => "DeliveryState" {
        cid: Int,
        estimated_arrival: String,
        /// Predicted minutes until arrival
        prediction: Int,
        lat: Float,
        lng: Float,
        done: Int,
        oid: Int,
    }
}

datalist_record! {
    /// A refund box held by the customer.
    pub struct DeliveryBox => "Box" {
        id: String,
        since: DateTime,
    }
}

//! Assortment (box scheme) records

datalist_record! {
    /// Marks an item as part of the customer's assortment.
    pub struct Assorted => "Assorted" {
        id: Int,
        deleted: Int,
        /// Subscription this entry belongs to, when not 0
        subscription_reference: Int,
    }
}

datalist_record! {
    pub struct Assortment => "Assortment" {
        id: Int,
        name: String,
        description: String,
        person_count: Int,
        price: Float,
        resolved: Int,
        picture_url: String,
        valid_from: DateTime,
        valid_to: DateTime,
        item_count: Int,
        group_id: Int,
        variant_id: Int,
        short_info: String,
        is_hidden: Bool,
        pack_station: Int,
        thumb_hash: String,
    }
}

datalist_record! {
    pub struct AssortmentGroup => "AssortmentGroup" {
        id: Int,
        name: String,
        description: String,
        count: Int,
        group_type: Int,
        has_image: Bool,
        has_thumb: Bool,
        search: String,
        hidden: Bool,
    }
}

datalist_record! {
    pub struct AssortmentPosition => "AssortmentPosition" {
        assortment_id: Int,
        item_id: Int,
        amount: Float,
        unit: String,
        discount: Float,
    }
}

//! Catalog records: groups, items and item relations

datalist_record! {
    /// A top-level product group.
    pub struct Group => "Group" {
        id: Int,
        name: String,
        infotext: String,
        /// Number of items in the group
        count: Int,
        subgroup_count: Int,
        labels: String,
        has_img: Int,
        has_tn: Int,
    }
}

datalist_record! {
    pub struct SubGroup => "SubGroup" {
        id: Int,
        name: String,
        parent_group_id: Int,
    }
}

datalist_record! {
    /// Assigns an item to a sub group.
    pub struct SubGroupMap => "SubGroupMap" {
        id: Int,
        subgroup_id: Int,
        item_id: Int,
    }
}

datalist_record! {
    /// A sellable item.
    pub struct Item => "Item" {
        id: Int,
        name: String,
        price: Float,
        unit: String,
        description: String,
        category_id: Int,
        vat: Float,
        flag: Int,
        refund: Float,
        item_type: String,
        hidden: String,
        ref_price: String,
        has_tn_url: String,
        has_info: String,
        can_be_preordered: Int,
        oi: Int,
        b_start: String,
        b_ende: String,
        b_von: String,
        b_bis: String,
        weighted: String,
        order_stop_new: Int,
        pointer: Int,
        special_offer: Int,
        search: String,
        reference_unit: String,
        has_images: String,
        packname: String,
        association: String,
        source: String,
        regioflag: Int,
        /// Minimal amount to order, 0 when unset
        amount_min: Float,
        /// Maximal amount to order, 0 when unset
        amount_max: Float,
        amount_def: Float,
        /// Step for +/- controls, 0 when unset
        amount_step: Float,
        image_count: Int,
        old_price: Float,
        labels: String,
        has_related: Int,
        producer_id: Int,
        has_nutrition_info: Int,
        onsale: Int,
        cert: String,
        protected: Int,
        unit_translated: String,
        package: Int,
        eu_origin: String,
        alcohol: Int,
        commercial_class: String,
        season: Int,
        packstation: Int,
        weight: Float,
        rfactor: Float,
        max_discount: Int,
        unit_hint: String,
        bulk_price: Float,
        bulk_amount: Float,
        bulk_ref_price: String,
        noabo: Int,
        active_a: String,
        brand: String,
        references: String,
        producer_name: String,
        sale_type: Int,
        brand_name: String,
    }
}

datalist_record! {
    pub struct RelatedItem => "RelatedItem" {
        id: Int,
        item_id: Int,
        related_item_id: Int,
    }
}

datalist_record! {
    /// An alternative unit an item can be ordered in.
    pub struct XUnit => "XUnit" {
        item_id: Int = 0,
        name: String,
        parts: String,
        unit_type: String,
        unit_id: Int = 0,
        preferred: String,
    }
}

datalist_record! {
    /// A customer's favourite. `entity` says what `id` points to.
    pub struct Favourite => "Favourite" {
        entity: Int,
        id: Int,
    }
}

datalist_record! {
    pub struct Discount => "Discount" {
        id: Int,
        name: String,
        percentage: Float,
    }
}

datalist_record! {
    pub struct DeselectedGroup => "DeselectedGroup" {
        name: String,
        group_id: Int,
    }
}

datalist_record! {
    pub struct DeselectedItem => "DeselectedItem" {
        id: String,
        item_id: Int,
    }
}

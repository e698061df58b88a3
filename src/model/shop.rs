//! Shop, calendar and tour records

datalist_record! {
    pub struct Shop => "Shop" {
        latitude: Float,
        longitude: Float,
        name: String,
        delivery_lat: Float,
        delivery_lng: Float,
        id: String,
    }
}

datalist_record! {
    /// Public endpoints and SEO data of a shop.
    pub struct ShopUrl => "ShopUrl" {
        display_name: String,
        http_url: String,
        https_url: String,
        site_url: String,
        logo_url: String,
        sysname: String,
        is_test_mode: String,
        lat: Float,
        lng: Float,
        dbid: Int,
        anw_id: Int,
        seo_desc: String,
        seo_cities: String,
        seo_organic: Int,
    }
}

datalist_record! {
    /// A delivery date offered to the customer, with the order placed on it.
    pub struct ShopDate => "ShopDate" {
        order_id: Int = 0,
        order_state: Int = 0,
        delivery_date: Date,
        delivery_week: Int,
        last_order_change: DateTime,
        tour_id: Int,
        note: String,
        count: Int,
        is_changeable: Int = 0,
        total: Float,
        delivery_cost: Float,
        delivery_cost_limit: Float,
        delivery_cost_when: Int = 0,
        last_changed: DateTime,
        last_cancel: DateTime,
        assigned: Int = 0,
        hidden: String,
        min_order_value: Float = 0.0,
        address_id: Int,
        address_hint: String,
        depot_full: Int = 0,
        show_tour_note: Int = 0,
        no_pre_order: Int = 0,
        fix_date: String,
        address_street: String,
        address_zip: Int,
        address_city: String,
        delivery_address_id: Int = 0,
        max_order_value: Float = 0.0,
        is_packed: Int = 0,
    }
}

datalist_record! {
    /// A named date range such as a holiday closure.
    pub struct AuxDate => "AuxDate" {
        name: String,
        description: String,
        from_date: String,
        to_date: String,
    }
}

datalist_record! {
    pub struct DDate => "DDate" {
        id: Int,
        tour_id: Int,
        delivery_date: String,
        week: Int,
        packing_day: String,
        main_day: Int,
        note: String,
        customers: Int,
        orders: Int,
    }
}

datalist_record! {
    /// A delivery tour. `zipcodes` arrives as a nested array and is kept raw.
    pub struct Tour => "Tour" {
        id: Int,
        name: String,
        description: String,
        zipcodes: Raw,
        driver_note: String,
        next_date: String,
        hidden: String,
        incomplete: Int,
        color: String,
        poly: String,
        poly1: String,
        target: String,
        has_poly: String,
        has_poly1: String,
        count: Int,
        visible: String,
        bike: String,
    }
}

datalist_record! {
    pub struct KeyValue => "KeyValue" {
        key: String,
        value: String,
    }
}

datalist_record! {
    /// A shop category used for special listings.
    pub struct Rubric => "Rubric" {
        id: Int = 0,
        name: String,
        infotext: String,
        count: Int = 0,
        is_special: Int = 0,
        has_img: Int = 0,
        has_tn: Int = 0,
    }
}

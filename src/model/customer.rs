//! Customer and account records

datalist_record! {
    /// A delivery or billing address of a customer.
    pub struct Address => "Address" {
        customer_id: Int,
        address_name: String,
        name: String,
        firstname: String,
        street: String,
        city: String,
        zip: String,
        zip_code: String,
        lat: Float,
        lng: Float,
        /// Geocoding quality
        llq: Int,
        phone: String,
        mobile: String,
        todohint: String,
        wayhint: String,
        packhint: String,
    }
}

datalist_record! {
    pub struct CustomerInfo => "CustomerInfo" {
        id: Int,
        name: String,
        email: String,
    }
}

datalist_record! {
    /// Session and profile data of the logged-in user.
    ///
    /// `authentication_state` is one of NONE, INVALID, VALID, AUTH, SUPER
    /// or ADMIN. The `notification_*` flags are 0 or 1.
    pub struct UserInfo => "UserInfo" {
        authentication_state: String = "NONE",
        user_id: Int,
        opener: String,
        firstname: String,
        lastname: String,
        role: String,
        debug: String,
        driver_load: String,
        driver_serve: String,
        driver_next: Int = 0,
        driver_next_load: String,
        driver_tracking: String,
        pref_asdc: String,
        email: String,
        email1: Int = 0,
        phone: String,
        phone_mobile: String,
        country: String,
        zip: String,
        city: String,
        street: String,
        account_number: Int,
        paycode: Int,
        note: String,
        placecode: String,
        sepa_info: String,
        delivery_name: String,
        delivery_zip: String,
        delivery_city: String,
        delivery_street: String,
        company: String,
        no_ad: Int = 0,
        place_note: String,
        pref_abocart: Int = 0,
        pref_partial: Int = 0,
        department: String,
        vat_id: String,
        delivery_company: String,
        delivery_department: String,
        driver_note: String,
        balance: Float,
        traceme: Int = 0,
        trivial_warning: Int = 0,
        order_limit: Float,
        needs_tc: Int = 0,
        bic: String,
        active: Int = 1,
        boxcnt: Int = 0,
        rgroup_until: String,
        notification_order: Int = 0,
        notification_cart: Int = 0,
        notification_delivery: Int = 0,
        notification_order_change: Int = 0,
        notification_reminder: Int = 0,
        notification_profile: Int = 0,
        notification_newsletter: Int = 0,
        notification_refund: Int = 0,
        norefund: Int = 0,
        has_orders: Int = 0,
    }
}

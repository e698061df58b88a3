//! Declarative record definitions
//!
//! `datalist_record!` declares a typed record once, as an ordered field
//! table, and derives both its schema and its conversion from a decoded
//! record:
//!
//! ```text
//! datalist_record! {
//!     pub struct Group => "Group" {
//!         id: Int,
//!         name: String,
//!         count: Int = 0,
//!     }
//! }
//! ```
//!
//! Field order is wire order. A `= value` suffix declares the default used
//! when the raw array ends before that field. The default expression has the
//! field's Rust type (`i64`, `NaiveDate`, `serde_json::Value` and so on);
//! `String` fields also take a `&str`.

macro_rules! datalist_record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident => $tag:literal {
            $(
                $(#[$field_meta:meta])*
                $field:ident : $kind:ident $(= $default:expr)?
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
        $vis struct $name {
            $(
                $(#[$field_meta])*
                pub $field: Option<datalist_record!(@ty $kind)>,
            )+
        }

        impl $crate::model::DataListRecord for $name {
            const TYPE_TAG: &'static str = $tag;

            fn fields() -> Vec<$crate::schema::FieldDef> {
                vec![
                    $( datalist_record!(@def $field $kind $(= $default)?), )+
                ]
            }

            fn from_record(record: &$crate::decoder::DecodedRecord) -> Self {
                Self {
                    $( $field: datalist_record!(@get record $field $kind), )+
                }
            }
        }
    };

    (@ty Int) => { i64 };
    (@ty Float) => { f64 };
    (@ty Bool) => { bool };
    (@ty String) => { String };
    (@ty Date) => { chrono::NaiveDate };
    (@ty DateTime) => { chrono::DateTime<chrono::FixedOffset> };
    (@ty Raw) => { serde_json::Value };

    (@def $field:ident $kind:ident) => {
        $crate::schema::FieldDef::new(
            stringify!($field),
            $crate::schema::FieldType::$kind,
        )
    };
    (@def $field:ident $kind:ident = $default:expr) => {
        $crate::schema::FieldDef::with_default(
            stringify!($field),
            $crate::schema::FieldType::$kind,
            datalist_record!(@value $kind $default),
        )
    };

    (@value Int $v:expr) => { $crate::decoder::FieldValue::Int($v) };
    (@value Float $v:expr) => { $crate::decoder::FieldValue::Float($v) };
    (@value Bool $v:expr) => { $crate::decoder::FieldValue::Bool($v) };
    (@value String $v:expr) => { $crate::decoder::FieldValue::String(String::from($v)) };
    (@value Date $v:expr) => { $crate::decoder::FieldValue::Date($v) };
    (@value DateTime $v:expr) => { $crate::decoder::FieldValue::DateTime($v) };
    (@value Raw $v:expr) => { $crate::decoder::FieldValue::Raw($v) };

    (@get $rec:ident $field:ident Int) => { $rec.get_i64(stringify!($field)) };
    (@get $rec:ident $field:ident Float) => { $rec.get_f64(stringify!($field)) };
    (@get $rec:ident $field:ident Bool) => { $rec.get_bool(stringify!($field)) };
    (@get $rec:ident $field:ident String) => {
        $rec.get_str(stringify!($field)).map(str::to_string)
    };
    (@get $rec:ident $field:ident Date) => {
        $rec.get(stringify!($field))
            .and_then($crate::decoder::FieldValue::as_date)
    };
    (@get $rec:ident $field:ident DateTime) => {
        $rec.get(stringify!($field))
            .and_then($crate::decoder::FieldValue::as_datetime)
    };
    (@get $rec:ident $field:ident Raw) => {
        $rec.get(stringify!($field))
            .and_then($crate::decoder::FieldValue::as_raw)
            .cloned()
    };
}

/// Declares the `Entity` enum and the catalog of compiled record types.
macro_rules! entity_catalog {
    ($($name:ident),+ $(,)?) => {
        /// A decoded record converted to its compiled type.
        #[derive(Debug, Clone, PartialEq, serde::Serialize)]
        pub enum Entity {
            $( $name($name), )+
            /// A record whose tag has no compiled type
            Untyped($crate::decoder::DecodedRecord),
        }

        impl Entity {
            /// Type tag of the underlying record
            pub fn tag(&self) -> &str {
                match self {
                    $( Entity::$name(_) => <$name as $crate::model::DataListRecord>::TYPE_TAG, )+
                    Entity::Untyped(record) => record.tag(),
                }
            }
        }

        $(
            impl From<$name> for Entity {
                fn from(value: $name) -> Self {
                    Entity::$name(value)
                }
            }

            impl TryFrom<Entity> for $name {
                type Error = Entity;

                fn try_from(entity: Entity) -> Result<Self, Entity> {
                    match entity {
                        Entity::$name(value) => Ok(value),
                        other => Err(other),
                    }
                }
            }
        )+

        fn compiled_schemas() -> Vec<$crate::schema::RecordSchema> {
            vec![ $( <$name as $crate::model::DataListRecord>::schema(), )+ ]
        }

        fn compiled_builders() -> Vec<(&'static str, EntityBuilder)> {
            vec![
                $( (<$name as $crate::model::DataListRecord>::TYPE_TAG, build_entity::<$name> as EntityBuilder), )+
            ]
        }
    };
}

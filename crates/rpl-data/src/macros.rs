//! Declarative tables for the closed code spaces.
//!
//! Each table row is `(variant, code, canonical name)`. The `#[repr(u16)]`
//! discriminants make a duplicated code a compile error; duplicated names are
//! rejected when the registry is built.

/// Declare a code space enum and register its table with the [`TypeCode`]
/// machinery.
///
/// [`TypeCode`]: crate::registry::TypeCode
macro_rules! code_space {
    (
        $(#[$meta:meta])*
        pub enum $codes:ident in $family:expr, via $space:ident {
            $( $variant:ident = $code:literal => $wire:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(u16)]
        pub enum $codes {
            $( $variant = $code, )+
        }

        impl $crate::registry::TypeCode for $codes {
            const FAMILY: $crate::record::Family = $family;
            const TABLE: &'static [(Self, u16, &'static str)] = &[
                $( (Self::$variant, $code, $wire), )+
            ];

            fn code(self) -> u16 {
                self as u16
            }

            fn space() -> &'static $crate::registry::CodeSpace<Self> {
                $crate::registry::registry().$space()
            }
        }

        impl $codes {
            /// The numeric wire code.
            pub fn code(self) -> u16 {
                self as u16
            }

            /// The canonical wire name.
            pub fn name(self) -> &'static str {
                <Self as $crate::registry::TypeCode>::space().name_of(self)
            }

            /// Checked lookup of a raw numeric code.
            pub fn from_code(code: u16) -> $crate::error::DataResult<Self> {
                <Self as $crate::registry::TypeCode>::space().lookup_code(code)
            }

            /// Checked lookup of a wire name.
            pub fn from_name(name: &str) -> $crate::error::DataResult<Self> {
                <Self as $crate::registry::TypeCode>::space().lookup_name(name)
            }
        }

        impl ::std::fmt::Display for $codes {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.name())
            }
        }

        impl ::serde::Serialize for $codes {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.name())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $codes {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                $crate::registry::deserialize_code(deserializer)
            }
        }
    };
}

/// Declare a record family: its code space, one struct per variant, and the
/// sum type over all of them.
///
/// Every variant struct carries the family's common base (flattened), an
/// optional typed slot per listed field, and `extra` for everything else.
macro_rules! record_family {
    (
        $(#[$meta:meta])*
        pub enum $record:ident: $codes:ident in $family:expr, via $space:ident,
            tag $tag:literal, base $base:ident {
            $(
                $(#[$doc:meta])*
                $variant:ident = $code:literal => $wire:literal {
                    $( $field:ident: $fty:ty => $fwire:literal, )*
                }
            )+
        }
    ) => {
        code_space! {
            /// Numeric type codes of one record family.
            pub enum $codes in $family, via $space {
                $( $variant = $code => $wire, )+
            }
        }

        $(
            $(#[$doc])*
            #[derive(Clone, Debug, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
            pub struct $variant {
                #[serde(flatten)]
                pub base: $base,
                $(
                    #[serde(rename = $fwire, default, skip_serializing_if = "Option::is_none")]
                    pub $field: Option<$fty>,
                )*
                /// Fields without a typed slot.
                #[serde(flatten)]
                pub extra: ::serde_json::Map<String, ::serde_json::Value>,
            }
        )+

        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq)]
        pub enum $record {
            $( $variant($variant), )+
        }

        impl $record {
            /// A record tagged with `code` and nothing else.
            pub fn new(code: $codes) -> Self {
                match code {
                    $(
                        $codes::$variant => Self::$variant($variant {
                            base: $base::tagged(code),
                            $( $field: None, )*
                            extra: ::serde_json::Map::new(),
                        }),
                    )+
                }
            }

            pub fn code(&self) -> $codes {
                self.base().tag()
            }

            pub fn base(&self) -> &$base {
                match self {
                    $( Self::$variant(r) => &r.base, )+
                }
            }

            pub fn base_mut(&mut self) -> &mut $base {
                match self {
                    $( Self::$variant(r) => &mut r.base, )+
                }
            }

            pub fn extra(&self) -> &::serde_json::Map<String, ::serde_json::Value> {
                match self {
                    $( Self::$variant(r) => &r.extra, )+
                }
            }

            fn populate(
                &mut self,
                fields: ::serde_json::Map<String, ::serde_json::Value>,
            ) -> Result<(), ::serde_json::Error> {
                let fields = ::serde_json::Value::Object(fields);
                match self {
                    $( Self::$variant(r) => *r = ::serde_json::from_value(fields)?, )+
                }
                Ok(())
            }

            /// Decode a JSON object: resolve its declared type through the
            /// registry, construct the tagged variant, then populate it.
            pub fn from_fields(
                fields: ::serde_json::Map<String, ::serde_json::Value>,
            ) -> $crate::error::DataResult<Self> {
                let code: $codes = $crate::registry::resolve_tag(&fields, $tag)?;
                let mut record = Self::new(code);
                record.populate(fields).map_err(|e| $crate::error::DataError::Decode {
                    family: $family,
                    name: code.name(),
                    reason: e.to_string(),
                })?;
                Ok(record)
            }
        }

        impl $crate::record::Record for $record {
            fn family(&self) -> $crate::record::Family {
                $family
            }

            fn type_code(&self) -> u16 {
                self.code().code()
            }

            fn type_name(&self) -> &'static str {
                self.code().name()
            }

            fn identity(&self) -> Option<::rpl_types::Hash256> {
                self.base().identity()
            }
        }

        impl ::serde::Serialize for $record {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                match self {
                    $( Self::$variant(r) => ::serde::Serialize::serialize(r, serializer), )+
                }
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $record {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let fields = <::serde_json::Map<String, ::serde_json::Value> as ::serde::Deserialize>::deserialize(deserializer)?;
                Self::from_fields(fields).map_err(<D::Error as ::serde::de::Error>::custom)
            }
        }
    };
}

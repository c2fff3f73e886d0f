//! Closed enumerations with canonical names
//!
//! The enumerations exchanged with other tools are identified by a lowercase name instead of their
//! raw value. `named_enum!` generates the enum along with its name table and every conversion
//! between the enum, its raw value, and its name.

use crate::Error;
use std::collections::BTreeMap;

/// Name given to a raw value that has no variant
pub(crate) const UNKNOWN_NAME: &str = "???";

/// Build the reverse (name to variant) index of a name table
pub(crate) fn index<T: Copy>(table: &[(T, &'static str)]) -> BTreeMap<&'static str, T> {
    table.iter().map(|(v, name)| (*name, *v)).collect()
}

/// Deserialize a string and then parse it with `T`'s `FromStr`
pub(crate) fn deserialize_parsed<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: core::str::FromStr<Err = Error>,
{
    let text = <String as serde::Deserialize>::deserialize(deserializer)?;

    text.parse().map_err(serde::de::Error::custom)
}

/// Create a named enumeration
///
/// Every variant is given a raw value and a canonical name. Variants must be listed in raw value
/// order starting with the variant for zero, it becomes the `Default`.
///
/// The enum gets `raw`, `as_str`, `name_of_raw`, `ALL`, `TryFrom<u8>`, `Display`, `FromStr`, and
/// a serde representation as its name.
macro_rules! named_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$v_meta:meta])* $variant:ident = $raw:literal => $text:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $( $(#[$v_meta])* $variant, )+
        }

        impl $name {
            /// Every variant, in raw value order
            pub const ALL: &'static [$name] = &[ $( $name::$variant, )+ ];

            const NAME_TABLE: &'static [($name, &'static str)] = &[ $( ($name::$variant, $text), )+ ];

            /// Get the raw value
            pub const fn raw(self) -> u8 {
                match self {
                    $( $name::$variant => $raw, )+
                }
            }

            /// Get the canonical name
            pub const fn as_str(self) -> &'static str {
                match self {
                    $( $name::$variant => $text, )+
                }
            }

            /// Get the canonical name for a raw value
            ///
            /// A raw value without a variant is named `"???"`. This never fails as it is meant for
            /// printing values received from elsewhere.
            pub fn name_of_raw(raw: u8) -> &'static str {
                <$name as TryFrom<u8>>::try_from(raw).map_or(crate::named::UNKNOWN_NAME, $name::as_str)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::ALL[0]
            }
        }

        impl TryFrom<u8> for $name {
            type Error = crate::Error;

            fn try_from(raw: u8) -> Result<Self, Self::Error> {
                match raw {
                    $( $raw => Ok($name::$variant), )+
                    _ => Err(crate::Error::InvalidRaw {
                        kind: stringify!($name),
                        raw,
                    }),
                }
            }
        }

        impl From<$name> for u8 {
            fn from(v: $name) -> u8 {
                v.raw()
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
                f.pad(self.as_str())
            }
        }

        impl core::str::FromStr for $name {
            type Err = crate::Error;

            /// Names must match exactly, there is no case folding
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                lazy_static::lazy_static! {
                    static ref BY_NAME: std::collections::BTreeMap<&'static str, $name> =
                        crate::named::index($name::NAME_TABLE);
                }

                BY_NAME.get(s).copied().ok_or_else(|| {
                    log_debug!("no {} is named {:?}", stringify!($name), s);

                    crate::Error::InvalidName {
                        kind: stringify!($name),
                        input: s.to_string(),
                    }
                })
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                crate::named::deserialize_parsed(deserializer)
            }
        }
    };
}

//! Bluetooth UUIDs
//!
//! A UUID in Bluetooth is either the full 128 bit identifier or a 16 bit shortened form of it.
//! [`BleUuid`] keeps whichever form it was given; a 16 bit UUID is never silently widened and a
//! 128 bit UUID is never narrowed.
//!
//! # Text Form
//! A 16 bit UUID is written as `0x` followed by four lowercase hex digits (`"0x180d"`). A 128 bit
//! UUID is written in the usual 8-4-4-4-12 form of lowercase hex digits
//! (`"6e400001-b5a3-f393-e0a9-e50e24dcca9e"`).
//!
//! Parsing is more lenient than formatting. Any unsigned integer literal that fits in 16 bits
//! (`"0x180D"`, `"6157"`, `"0o14015"`) is a 16 bit UUID, and the hex digits of the long form may be
//! in either case. A 32 digit long form without the hyphens is not accepted. Underscores may
//! separate the digits of an integer literal (`"0x18_0d"`).
//!
//! # Zero
//! A 16 bit value of zero does not exist as a 16 bit UUID. It is the all-zero 128 bit UUID, so
//! `"0"` parses to `00000000-0000-0000-0000-000000000000`. `BleUuid::Uuid16(0)` made directly is
//! treated the same way when it is compared, formatted, or serialized.

use crate::Error;
use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;
use serde::de::{self, Unexpected, Visitor};

/// A 16 or 128 bit Bluetooth UUID
#[derive(Clone, Copy, Debug)]
pub enum BleUuid {
    Uuid16(u16),
    /// The bytes are in the order of the text form, `[0]` is the most significant byte.
    Uuid128([u8; 16]),
}

impl BleUuid {
    /// See Vol 3 part B sec 2.5.1 for where this value comes from.
    /// This can also be found as the Bluetooth Base UUID in the assigned numbers document.
    const BLUETOOTH_BASE_UUID: u128 = 0x0000000000001000800000805F9B34FB;

    /// The length of the text form of a 128 bit UUID
    const TEXT_LEN_128: usize = 36;

    /// Positions of the hyphens within the text form of a 128 bit UUID
    const HYPHENS: [usize; 4] = [8, 13, 18, 23];

    /// The all-zero 128 bit UUID, what a 16 bit value of zero stands for
    const ZERO: BleUuid = BleUuid::Uuid128([0; 16]);

    /// Create a 16 bit UUID
    ///
    /// Zero is the all-zero 128 bit UUID instead.
    pub const fn from_u16(v: u16) -> Self {
        match v {
            0 => Self::ZERO,
            v => BleUuid::Uuid16(v),
        }
    }

    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        BleUuid::Uuid128(bytes)
    }

    /// Get the 16 bit value if this is a 16 bit UUID
    pub fn uuid16(&self) -> Option<u16> {
        match self.normalized() {
            BleUuid::Uuid16(v) => Some(v),
            BleUuid::Uuid128(_) => None,
        }
    }

    /// Get the bytes if this is a 128 bit UUID
    pub fn uuid128(&self) -> Option<[u8; 16]> {
        match self.normalized() {
            BleUuid::Uuid16(_) => None,
            BleUuid::Uuid128(bytes) => Some(bytes),
        }
    }

    pub fn is_16_bit(&self) -> bool {
        self.uuid16().is_some()
    }

    /// Replace a 16 bit zero with the all-zero 128 bit UUID
    fn normalized(&self) -> BleUuid {
        match *self {
            BleUuid::Uuid16(0) => Self::ZERO,
            uuid => uuid,
        }
    }

    /// Get the full 128 bit form
    ///
    /// A 16 bit UUID is placed within the Bluetooth Base UUID (see Vol 3 part B sec 2.5.1).
    pub fn to_bytes128(&self) -> [u8; 16] {
        match self.normalized() {
            BleUuid::Uuid16(v) => (((v as u128) << 96) | Self::BLUETOOTH_BASE_UUID).to_be_bytes(),
            BleUuid::Uuid128(bytes) => bytes,
        }
    }

    /// The value used for ordering against a 16 bit UUID. A 128 bit UUID counts as zero.
    fn short_value(&self) -> u16 {
        self.uuid16().unwrap_or_default()
    }

    /// Parse an unsigned integer literal that fits within 16 bits
    ///
    /// The radix is taken from the prefix, `0x` for hex, `0o` or a bare leading zero for octal,
    /// `0b` for binary, and decimal without a prefix. A single underscore may sit between two
    /// digits or between the prefix and the first digit.
    fn parse_literal_16(s: &str) -> Option<u16> {
        let (radix, digits, prefixed) = match s.as_bytes() {
            [b'0', b'x' | b'X', ..] => (16, &s[2..], true),
            [b'0', b'o' | b'O', ..] => (8, &s[2..], true),
            [b'0', b'b' | b'B', ..] => (2, &s[2..], true),
            [b'0', _, ..] => (8, &s[1..], true),
            _ => (10, s, false),
        };

        if digits.ends_with('_') || digits.contains("__") || (!prefixed && digits.starts_with('_')) {
            return None;
        }

        let digits: String = digits.chars().filter(|c| *c != '_').collect();

        // from_str_radix would otherwise accept a leading '+'
        if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
            return None;
        }

        u16::from_str_radix(&digits, radix).ok()
    }

    /// Parse the 8-4-4-4-12 text form
    fn parse_text_128(s: &str) -> Option<[u8; 16]> {
        let text = s.as_bytes();

        if text.len() != Self::TEXT_LEN_128 {
            return None;
        }

        let hex = |c: u8| (c as char).to_digit(16).map(|d| d as u8);

        let mut bytes = [0u8; 16];
        let mut b_off = 0;
        let mut i = 0;

        while i < Self::TEXT_LEN_128 {
            if Self::HYPHENS.contains(&i) {
                if text[i] != b'-' {
                    return None;
                }

                i += 1;
            } else {
                bytes[b_off] = hex(text[i])? << 4 | hex(text[i + 1])?;

                b_off += 1;
                i += 2;
            }
        }

        Some(bytes)
    }
}

impl From<u16> for BleUuid {
    fn from(v: u16) -> Self {
        BleUuid::from_u16(v)
    }
}

/// Create a 128 bit UUID from bytes in text (big endian) order
impl From<[u8; 16]> for BleUuid {
    fn from(bytes: [u8; 16]) -> Self {
        BleUuid::Uuid128(bytes)
    }
}

#[cfg(feature = "uuid-crate")]
impl From<::uuid::Uuid> for BleUuid {
    fn from(uuid: ::uuid::Uuid) -> Self {
        BleUuid::Uuid128(*uuid.as_bytes())
    }
}

#[cfg(feature = "uuid-crate")]
impl From<BleUuid> for ::uuid::Uuid {
    fn from(uuid: BleUuid) -> Self {
        ::uuid::Uuid::from_bytes(uuid.to_bytes128())
    }
}

impl FromStr for BleUuid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(v) = BleUuid::parse_literal_16(s) {
            return Ok(BleUuid::from_u16(v));
        }

        BleUuid::parse_text_128(s).map(BleUuid::Uuid128).ok_or_else(|| {
            log_debug!("rejected UUID {:?}", s);

            Error::InvalidUuid(s.to_string())
        })
    }
}

impl fmt::Display for BleUuid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.normalized() {
            BleUuid::Uuid16(v) => write!(f, "0x{:04x}", v),
            BleUuid::Uuid128(bytes) => {
                for (i, b) in bytes.iter().enumerate() {
                    if let 4 | 6 | 8 | 10 = i {
                        f.write_str("-")?;
                    }

                    write!(f, "{:02x}", b)?;
                }

                Ok(())
            }
        }
    }
}

/// Compare two UUIDs
///
/// When either UUID is 16 bit the two are compared by their 16 bit values, where a 128 bit UUID
/// has the value zero. Two 128 bit UUIDs are compared byte by byte.
///
/// This is the ordering used for sorting and de-duplicating lists of UUIDs. It is the same as the
/// `Ord` implementation of `BleUuid`.
pub fn compare_uuids(a: &BleUuid, b: &BleUuid) -> Ordering {
    match (a.normalized(), b.normalized()) {
        (BleUuid::Uuid128(a), BleUuid::Uuid128(b)) => a.cmp(&b),
        (a, b) => a.short_value().cmp(&b.short_value()),
    }
}

impl PartialEq for BleUuid {
    fn eq(&self, other: &Self) -> bool {
        compare_uuids(self, other) == Ordering::Equal
    }
}

impl Eq for BleUuid {}

impl core::hash::Hash for BleUuid {
    fn hash<H>(&self, state: &mut H)
    where
        H: core::hash::Hasher,
    {
        match self.normalized() {
            BleUuid::Uuid16(v) => v.hash(state),
            BleUuid::Uuid128(bytes) => bytes.hash(state),
        }
    }
}

impl Ord for BleUuid {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_uuids(self, other)
    }
}

impl PartialOrd for BleUuid {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A 16 bit UUID is serialized as a number and a 128 bit UUID as its text form.
impl serde::Serialize for BleUuid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self.normalized() {
            BleUuid::Uuid16(v) => serializer.serialize_u16(v),
            BleUuid::Uuid128(_) => serializer.collect_str(self),
        }
    }
}

struct BleUuidVisitor;

impl<'de> Visitor<'de> for BleUuidVisitor {
    type Value = BleUuid;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a 16 bit UUID number or a UUID string")
    }

    fn visit_u64<E>(self, v: u64) -> Result<BleUuid, E>
    where
        E: de::Error,
    {
        u16::try_from(v)
            .map(BleUuid::from_u16)
            .map_err(|_| E::invalid_value(Unexpected::Unsigned(v), &self))
    }

    fn visit_i64<E>(self, v: i64) -> Result<BleUuid, E>
    where
        E: de::Error,
    {
        u16::try_from(v)
            .map(BleUuid::from_u16)
            .map_err(|_| E::invalid_value(Unexpected::Signed(v), &self))
    }

    fn visit_str<E>(self, v: &str) -> Result<BleUuid, E>
    where
        E: de::Error,
    {
        v.parse().map_err(E::custom)
    }
}

/// A number is read as a 16 bit UUID, a string is parsed as either form.
impl<'de> serde::Deserialize<'de> for BleUuid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(BleUuidVisitor)
    }
}

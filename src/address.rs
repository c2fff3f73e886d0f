//! Bluetooth device addresses
//!
//! A LE device is identified by a six byte address along with the type of that address. The text
//! form of an address is the familiar colon separated hex, `"c0:ff:ee:00:11:22"`.

use crate::Error;
use core::fmt;
use core::str::FromStr;

named_enum! {
    /// The type of a LE device address
    ///
    /// The resolvable private types are used when the controller generates a resolvable private
    /// address and falls back to either the public or the random address when the resolving list
    /// has no matching entry.
    pub enum BleAddrType {
        Public = 0 => "public",
        Random = 1 => "random",
        RpaPub = 2 => "rpa_pub",
        RpaRnd = 3 => "rpa_rnd",
    }
}

/// A six byte LE device address
///
/// The bytes are kept in the order they are written, `bytes[0]` is the first octet of the text
/// form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BleAddr {
    pub bytes: [u8; 6],
}

impl BleAddr {
    /// The number of octets within an address
    pub const LEN: usize = 6;

    pub const fn new(bytes: [u8; 6]) -> Self {
        BleAddr { bytes }
    }

    /// Parse a single octet of the text form
    ///
    /// An octet is any non-empty run of hex digits whose value fits in a byte.
    fn parse_octet(token: &str) -> Option<u8> {
        if token.is_empty() || !token.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }

        u8::from_str_radix(token, 16).ok()
    }
}

impl From<[u8; 6]> for BleAddr {
    fn from(bytes: [u8; 6]) -> Self {
        BleAddr::new(bytes)
    }
}

impl From<BleAddr> for [u8; 6] {
    fn from(addr: BleAddr) -> Self {
        addr.bytes
    }
}

impl AsRef<[u8]> for BleAddr {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl FromStr for BleAddr {
    type Err = Error;

    /// Parse an address from its text form
    ///
    /// Hex digits are case insensitive. Exactly six octets separated by colons must be present.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();

        let mut bytes = [0u8; BleAddr::LEN];

        let mut tokens = lower.split(':');

        for byte in bytes.iter_mut() {
            *byte = tokens.next().and_then(BleAddr::parse_octet).ok_or_else(|| {
                log_debug!("rejected BLE address {:?}", s);

                Error::InvalidAddr(s.to_string())
            })?;
        }

        if tokens.next().is_some() {
            log_debug!("rejected BLE address {:?}, too many octets", s);

            return Err(Error::InvalidAddr(s.to_string()));
        }

        Ok(BleAddr { bytes })
    }
}

impl fmt::Display for BleAddr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, b) in self.bytes.iter().enumerate() {
            if i != 0 {
                f.write_str(":")?;
            }

            write!(f, "{:02x}", b)?;
        }

        Ok(())
    }
}

impl serde::Serialize for BleAddr {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for BleAddr {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        crate::named::deserialize_parsed(deserializer)
    }
}

/// A LE device
///
/// This is the address of a device paired with the type of that address.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct BleDev {
    pub addr_type: BleAddrType,
    pub addr: BleAddr,
}

impl BleDev {
    pub fn new(addr_type: BleAddrType, addr: BleAddr) -> Self {
        BleDev { addr_type, addr }
    }
}

impl fmt::Display for BleDev {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.addr_type, self.addr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addr_type_names() {
        let expected = [
            (BleAddrType::Public, 0, "public"),
            (BleAddrType::Random, 1, "random"),
            (BleAddrType::RpaPub, 2, "rpa_pub"),
            (BleAddrType::RpaRnd, 3, "rpa_rnd"),
        ];

        for (addr_type, raw, name) in expected {
            assert_eq!(raw, addr_type.raw());

            assert_eq!(name, addr_type.to_string());

            assert_eq!(Ok(addr_type), name.parse());

            assert_eq!(name, BleAddrType::name_of_raw(raw));
        }

        assert_eq!(expected.len(), BleAddrType::ALL.len());

        assert_eq!("???", BleAddrType::name_of_raw(4));

        assert_eq!("???", BleAddrType::name_of_raw(99));

        assert!("bogus".parse::<BleAddrType>().is_err());

        assert!("Public".parse::<BleAddrType>().is_err());
    }

    #[test]
    fn parse_addr() {
        let addr: BleAddr = "c0:ff:ee:00:11:22".parse().unwrap();

        assert_eq!([0xc0, 0xff, 0xee, 0x00, 0x11, 0x22], addr.bytes);

        let mixed: BleAddr = "C0:fF:Ee:00:11:22".parse().unwrap();

        assert_eq!(addr, mixed);

        assert_eq!("c0:ff:ee:00:11:22", mixed.to_string());
    }

    #[test]
    fn parse_short_octets() {
        // an octet is a hex value fitting a byte, not strictly two digits
        let addr: BleAddr = "a:b:c:d:e:0ff".parse().unwrap();

        assert_eq!([0xa, 0xb, 0xc, 0xd, 0xe, 0xff], addr.bytes);

        assert_eq!("0a:0b:0c:0d:0e:ff", addr.to_string());
    }

    #[test]
    fn parse_addr_failures() {
        let bad = [
            "aa:bb:cc:dd:ee",
            "aa:bb:cc:dd:ee:gg",
            "aabbccddeeff",
            "aa:bb:cc:dd:ee:ff:00",
            "aa:bb:cc:dd:ee:100",
            "aa:bb:cc:dd::ff",
            "aa:bb:cc:dd:ee:ff:",
            "aa:bb:cc:dd:ee:+f",
            "aa-bb-cc-dd-ee-ff",
            " aa:bb:cc:dd:ee:ff",
            "",
            "ä:bb:cc:dd:ee:ff",
        ];

        for text in bad {
            assert_eq!(Err(Error::InvalidAddr(text.to_string())), text.parse::<BleAddr>(), "{}", text);
        }
    }

    #[test]
    fn addr_format_parse_inverse() {
        let values = [
            [0u8; 6],
            [0xff; 6],
            [0x01, 0x23, 0x45, 0x67, 0x89, 0xab],
            [0x10, 0x00, 0x0f, 0xf0, 0x7f, 0x80],
        ];

        for bytes in values {
            let addr = BleAddr::new(bytes);

            let text = addr.to_string();

            assert_eq!(17, text.len());

            assert_eq!(Ok(addr), text.parse());
        }
    }

    #[test]
    fn dev_display() {
        let dev = BleDev::new(BleAddrType::RpaRnd, BleAddr::new([1, 2, 3, 4, 5, 6]));

        assert_eq!("rpa_rnd,01:02:03:04:05:06", dev.to_string());

        assert_eq!("public,00:00:00:00:00:00", BleDev::default().to_string());
    }
}

//! Bluetooth Low Energy value types
//!
//! `bledefs` holds the plain data used to talk about BLE things: device addresses and their
//! types, 16 and 128 bit UUIDs, advertisement reports, and connection descriptors. None of it does
//! any I/O. What it does provide is a canonical text form for each type, a parser back from that
//! text, and a structured representation (through [`serde`]) so the values can be exchanged with
//! other tools and configuration files.
//!
//! The string tokens used for the closed enumerations (`"public"`, `"rpa_pub"`, `"no_wl"`,
//! `"direct_ind_hd"`, ...) are shared with existing tooling and must never change.
//!
//! ```
//! use bledefs::{BleAddr, BleAddrType, BleDev, BleUuid};
//!
//! let dev = BleDev {
//!     addr_type: "random".parse::<BleAddrType>().unwrap(),
//!     addr: "C0:FF:EE:00:11:22".parse::<BleAddr>().unwrap(),
//! };
//!
//! assert_eq!("random,c0:ff:ee:00:11:22", dev.to_string());
//!
//! let uuid: BleUuid = "0x1234".parse().unwrap();
//!
//! assert_eq!(Some(0x1234), uuid.uuid16());
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

macro_rules! log_debug {
    ( $arg1:expr $(, $args:expr)* ) => { log::debug!(concat!("(bledefs) ", $arg1) $(, $args)*) }
}

#[macro_use]
mod named;

pub mod address;
pub mod connection;
pub mod errors;
pub mod scan;
pub mod uuid;

pub use address::{BleAddr, BleAddrType, BleDev};
pub use connection::{BleConnDesc, BleEncryptWhen};
pub use errors::Error;
pub use scan::{BleAdvEventType, BleAdvPredicate, BleAdvReport, BleAdvRptFn, BleScanFilterPolicy, SlaveItvlRange};
pub use crate::uuid::{compare_uuids, BleUuid};

/// The maximum length of an attribute value
///
/// This bounds the size of any attribute (and therefore of the payloads carried around in an
/// advertisement report) across the whole protocol.
pub const BLE_ATT_ATTR_MAX_LEN: usize = 512;

/// Service UUID of the plain (unencrypted) newtmgr transport
pub const NMP_PLAIN_SVC_UUID: &str = "8D53DC1D-1DB7-4CD3-868B-8A527460AA84";

/// Characteristic UUID of the plain newtmgr transport
pub const NMP_PLAIN_CHR_UUID: &str = "DA2E7828-FBCE-4E01-AE9E-261174997C48";

/// 16-bit service UUID of the OIC management transport
pub const OMP_SVC_UUID: u16 = 0x9923;

/// Request characteristic UUID of the OIC management transport
pub const OMP_REQ_CHR_UUID: &str = "AD7B334F-4637-4B86-90B6-9D787F03D218";

/// Response characteristic UUID of the OIC management transport
pub const OMP_RSP_CHR_UUID: &str = "E9241982-4580-42C4-8831-95048216B256";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_known_uuids_parse() {
        for text in [NMP_PLAIN_SVC_UUID, NMP_PLAIN_CHR_UUID, OMP_REQ_CHR_UUID, OMP_RSP_CHR_UUID] {
            let uuid: BleUuid = text.parse().unwrap();

            assert_eq!(None, uuid.uuid16());

            assert_eq!(text.to_lowercase(), uuid.to_string());
        }

        assert_eq!("0x9923", BleUuid::from_u16(OMP_SVC_UUID).to_string());
    }
}

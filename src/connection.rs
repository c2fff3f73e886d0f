//! Connections

use crate::{BleDev, Error};
use core::fmt;

/// When a connection is to be encrypted
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BleEncryptWhen {
    #[default]
    Never,
    /// Only when the peer uses a private address
    PrivOnly,
    Always,
}

impl BleEncryptWhen {
    pub fn raw(&self) -> u8 {
        match *self {
            BleEncryptWhen::Never => 0,
            BleEncryptWhen::PrivOnly => 1,
            BleEncryptWhen::Always => 2,
        }
    }
}

impl TryFrom<u8> for BleEncryptWhen {
    type Error = Error;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(BleEncryptWhen::Never),
            1 => Ok(BleEncryptWhen::PrivOnly),
            2 => Ok(BleEncryptWhen::Always),
            _ => Err(Error::InvalidRaw {
                kind: "BleEncryptWhen",
                raw,
            }),
        }
    }
}

/// Connection descriptor
///
/// Both sides of a connection have an identity address and the address actually used over the
/// air. The two are the same unless the side uses a resolvable private address.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct BleConnDesc {
    pub conn_handle: u16,
    pub own_id: BleDev,
    pub own_ota: BleDev,
    pub peer_id: BleDev,
    pub peer_ota: BleDev,
}

impl fmt::Display for BleConnDesc {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "conn_handle={} own_id_addr={} own_ota_addr={} peer_id_addr={} peer_ota_addr={}",
            self.conn_handle, self.own_id, self.own_ota, self.peer_id, self.peer_ota
        )
    }
}

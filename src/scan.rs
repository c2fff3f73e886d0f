//! Scanning
//!
//! The types describing a scan, what is received from it, and the callbacks a scanner hands each
//! received advertisement to.

use crate::{BleAddr, BleDev, BleUuid};

named_enum! {
    /// Scanning filter policy
    ///
    /// The `*Inita` policies also accept directed advertisements whose target address is a
    /// resolvable private address that cannot be resolved.
    pub enum BleScanFilterPolicy {
        NoWl = 0 => "no_wl",
        UseWl = 1 => "use_wl",
        NoWlInita = 2 => "no_wl_inita",
        UseWlInita = 3 => "use_wl_inita",
    }
}

named_enum! {
    /// The type of a received advertising event
    pub enum BleAdvEventType {
        Ind = 0 => "ind",
        /// Connectable directed, high duty cycle
        DirectIndHd = 1 => "direct_ind_hd",
        ScanInd = 2 => "scan_ind",
        NonconnInd = 3 => "nonconn_ind",
        /// Connectable directed, low duty cycle
        DirectIndLd = 4 => "direct_ind_ld",
    }
}

/// Preferred range of the connection interval of a peripheral
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlaveItvlRange {
    pub min: u16,
    pub max: u16,
}

/// A received advertisement
///
/// `event_type`, `sender`, `rssi`, and `data` are part of every report. Everything else is only
/// known if the sender put it in its advertising data. A scalar that was not advertised is `None`
/// and a list that was not advertised is empty.
#[derive(Clone, Debug, PartialEq)]
pub struct BleAdvReport {
    pub event_type: BleAdvEventType,
    pub sender: BleDev,
    pub rssi: i8,
    /// The raw advertising data
    pub data: Vec<u8>,

    pub flags: Option<u8>,
    pub uuids16: Vec<u16>,
    pub uuids16_is_complete: bool,
    pub uuids32: Vec<u32>,
    pub uuids32_is_complete: bool,
    pub uuids128: Vec<BleUuid>,
    pub uuids128_is_complete: bool,
    pub name: Option<String>,
    /// False when `name` is a shortened local name
    pub name_is_complete: bool,
    pub tx_pwr_lvl: Option<i8>,
    pub slave_itvl: Option<SlaveItvlRange>,
    pub svc_data_uuid16: Vec<u8>,
    pub public_tgt_addrs: Vec<BleAddr>,
    pub appearance: Option<u16>,
    pub adv_itvl: Option<u16>,
    pub svc_data_uuid32: Vec<u8>,
    pub svc_data_uuid128: Vec<u8>,
    pub uri: Vec<u8>,
    pub mfg_data: Vec<u8>,
}

impl BleAdvReport {
    /// Create a report where nothing beyond the mandatory fields was advertised
    pub fn new(event_type: BleAdvEventType, sender: BleDev, rssi: i8, data: Vec<u8>) -> Self {
        BleAdvReport {
            event_type,
            sender,
            rssi,
            data,
            flags: None,
            uuids16: Vec::new(),
            uuids16_is_complete: false,
            uuids32: Vec::new(),
            uuids32_is_complete: false,
            uuids128: Vec::new(),
            uuids128_is_complete: false,
            name: None,
            name_is_complete: false,
            tx_pwr_lvl: None,
            slave_itvl: None,
            svc_data_uuid16: Vec::new(),
            public_tgt_addrs: Vec::new(),
            appearance: None,
            adv_itvl: None,
            svc_data_uuid32: Vec::new(),
            svc_data_uuid128: Vec::new(),
            uri: Vec::new(),
            mfg_data: Vec::new(),
        }
    }
}

/// Receiver of every advertisement report of a scan
pub type BleAdvRptFn = Box<dyn FnMut(BleAdvReport) + Send>;

/// Filter deciding whether an advertisement report is of interest
pub type BleAdvPredicate = Box<dyn Fn(&BleAdvReport) -> bool + Send + Sync>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BleAddrType;

    fn report() -> BleAdvReport {
        let sender = BleDev::new(BleAddrType::Random, BleAddr::new([0xc0, 0xff, 0xee, 0, 0x11, 0x22]));

        BleAdvReport::new(BleAdvEventType::Ind, sender, -60, vec![0x02, 0x01, 0x06])
    }

    #[test]
    fn filter_policy_names() {
        let names = ["no_wl", "use_wl", "no_wl_inita", "use_wl_inita"];

        for (raw, name) in names.iter().enumerate() {
            let policy = BleScanFilterPolicy::try_from(raw as u8).unwrap();

            assert_eq!(*name, policy.as_str());

            assert_eq!(Ok(policy), name.parse());
        }

        assert_eq!("???", BleScanFilterPolicy::name_of_raw(4));

        assert!("no_WL".parse::<BleScanFilterPolicy>().is_err());
    }

    #[test]
    fn adv_event_type_names() {
        let names = ["ind", "direct_ind_hd", "scan_ind", "nonconn_ind", "direct_ind_ld"];

        for (raw, name) in names.iter().enumerate() {
            let event_type = BleAdvEventType::try_from(raw as u8).unwrap();

            assert_eq!(*name, event_type.to_string());

            assert_eq!(Ok(event_type), name.parse());
        }

        assert_eq!(names.len(), BleAdvEventType::ALL.len());

        assert_eq!("???", BleAdvEventType::name_of_raw(5));

        assert_eq!("???", BleAdvEventType::name_of_raw(99));

        assert!(BleAdvEventType::try_from(5).is_err());
    }

    #[test]
    fn new_report_has_nothing_optional() {
        let report = report();

        assert_eq!(None, report.flags);
        assert!(report.uuids16.is_empty());
        assert!(report.uuids128.is_empty());
        assert_eq!(None, report.name);
        assert_eq!(None, report.tx_pwr_lvl);
        assert_eq!(None, report.slave_itvl);
        assert_eq!(None, report.appearance);
        assert_eq!(None, report.adv_itvl);
        assert!(report.mfg_data.is_empty());
    }

    #[test]
    fn zero_is_a_present_value() {
        let mut report = report();

        report.tx_pwr_lvl = Some(0);
        report.appearance = Some(0);
        report.flags = Some(0);

        assert_eq!(Some(0), report.tx_pwr_lvl);
        assert_ne!(report, self::report());
    }

    #[test]
    fn callbacks() {
        let wanted = BleUuid::from_u16(0x9923);

        let predicate: BleAdvPredicate =
            Box::new(move |r: &BleAdvReport| r.uuids16.contains(&0x9923) || r.uuids128.contains(&wanted));

        let mut advertising = report();

        advertising.uuids16 = vec![0x180d, 0x9923];
        advertising.uuids16_is_complete = true;

        assert!(predicate(&advertising));
        assert!(!predicate(&report()));

        let received = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
        let sink = received.clone();

        let mut on_report: BleAdvRptFn = Box::new(move |r: BleAdvReport| sink.lock().unwrap().push(r.sender));

        on_report(advertising.clone());
        on_report(report());

        assert_eq!(vec![advertising.sender; 2], *received.lock().unwrap());
    }
}

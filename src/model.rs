// src/model.rs

use serde::Deserialize;
use std::fmt;

/// One physical BOL page as the vision model reports it.
///
/// This is the wire contract: service flags arrive as the string "Yes"
/// or the empty string, never as booleans, and missing keys fall back to
/// the documented defaults. Conversion to real booleans/enums happens
/// when a page is ingested into a [`ShipmentRecord`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageExtraction {
    /// PRO/job number, possibly with a page suffix ("1003211675-1A").
    pub pro: String,
    pub pickup_state: String,
    pub delivery_state: String,
    /// Delivery zone letter A-L if printed on the document, else "".
    pub zone: String,
    pub delivery_zip: String,
    pub delivery_address: String,
    /// Actual weight in pounds.
    pub weight: f64,
    #[serde(alias = "volume")]
    pub volume_ft3: f64,
    pub liftgate: String,
    pub inside: String,
    pub residential: String,
    /// One of "97-144", "145-192", "193-240", "241 or more", or "".
    pub over_length: String,
    pub pallet_count: u32,
    pub has_debris_section: bool,
    pub client_name: String,
    /// One of "AM Special", "2 Hours", "15 Minutes", or "".
    pub time_specific: String,
    /// Driver wait time in minutes.
    pub detention: u32,
}

impl PageExtraction {
    /// Lakeshore shipments get debris removal even without a debris
    /// section on the document.
    pub fn is_lakeshore(&self) -> bool {
        self.client_name.to_lowercase().contains("lakeshore")
    }
}

/// True only for the exact wire value "Yes".
pub fn yes(flag: &str) -> bool {
    flag == "Yes"
}

/// Over-length category, ordered by severity. Absent is least severe,
/// so `max` during consolidation keeps the worst category seen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum OverLength {
    #[default]
    None,
    In97To144,
    In145To192,
    In193To240,
    In241Plus,
}

impl OverLength {
    pub fn parse(s: &str) -> Self {
        match s {
            "97-144" => OverLength::In97To144,
            "145-192" => OverLength::In145To192,
            "193-240" => OverLength::In193To240,
            "241 or more" => OverLength::In241Plus,
            _ => OverLength::None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            OverLength::None => "",
            OverLength::In97To144 => "97-144",
            OverLength::In145To192 => "145-192",
            OverLength::In193To240 => "193-240",
            OverLength::In241Plus => "241 or more",
        }
    }

    /// Flat charge per category, strictly increasing with severity.
    pub fn flat_charge(self) -> f64 {
        match self {
            OverLength::None => 0.0,
            OverLength::In97To144 => 12.0,
            OverLength::In145To192 => 18.0,
            OverLength::In193To240 => 24.0,
            OverLength::In241Plus => 30.0,
        }
    }
}

/// Time-specific delivery category, ordered by how tight the window is.
/// A 15-minute window outranks everything; a 2-hour window is the
/// loosest billable category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum TimeSpecific {
    #[default]
    None,
    TwoHours,
    AmSpecial,
    FifteenMinutes,
}

impl TimeSpecific {
    pub fn parse(s: &str) -> Self {
        match s {
            "2 Hours" => TimeSpecific::TwoHours,
            "AM Special" => TimeSpecific::AmSpecial,
            "15 Minutes" => TimeSpecific::FifteenMinutes,
            _ => TimeSpecific::None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TimeSpecific::None => "",
            TimeSpecific::TwoHours => "2 Hours",
            TimeSpecific::AmSpecial => "AM Special",
            TimeSpecific::FifteenMinutes => "15 Minutes",
        }
    }

    /// Two-tier rate: early zones (A-D) are cheaper for the same window.
    pub fn charge(self, early_zone: bool) -> f64 {
        match self {
            TimeSpecific::None => 0.0,
            TimeSpecific::AmSpecial => {
                if early_zone { 23.0 } else { 33.0 }
            }
            TimeSpecific::TwoHours => {
                if early_zone { 38.0 } else { 48.0 }
            }
            TimeSpecific::FifteenMinutes => {
                if early_zone { 53.0 } else { 63.0 }
            }
        }
    }
}

/// A dollar amount that may be unpriceable. Keeping the sentinel in the
/// type means downstream sums cannot silently mix it into arithmetic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Charge {
    Priced(f64),
    QuoteRequired,
}

impl Charge {
    pub fn amount(self) -> Option<f64> {
        match self {
            Charge::Priced(v) => Some(v),
            Charge::QuoteRequired => None,
        }
    }
}

impl fmt::Display for Charge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Charge::Priced(v) => write!(f, "{v:.2}"),
            Charge::QuoteRequired => f.write_str("Quote Required"),
        }
    }
}

/// One physical delivery, after consolidating its constituent pages.
/// Wire-format "Yes"/"" strings have become booleans and the categorical
/// fields enums by this point.
#[derive(Debug, Clone)]
pub struct ShipmentRecord {
    /// All constituent PRO numbers, joined with " + " for traceability.
    pub pro: String,
    pub pickup_state: String,
    pub delivery_state: String,
    /// Zone letter printed on the document, "" if absent.
    pub zone_hint: String,
    pub delivery_zip: String,
    pub delivery_address: String,
    pub client_name: String,
    pub weight: f64,
    pub volume_ft3: f64,
    pub liftgate: bool,
    pub inside: bool,
    pub residential: bool,
    pub over_length: OverLength,
    pub pallet_count: u32,
    pub debris_section: bool,
    pub lakeshore: bool,
    pub time_specific: TimeSpecific,
    pub detention_minutes: u32,
    pub page_count: usize,
}

impl ShipmentRecord {
    pub fn from_page(page: &PageExtraction) -> Self {
        ShipmentRecord {
            pro: page.pro.clone(),
            pickup_state: page.pickup_state.clone(),
            delivery_state: page.delivery_state.clone(),
            zone_hint: page.zone.clone(),
            delivery_zip: page.delivery_zip.clone(),
            delivery_address: page.delivery_address.clone(),
            client_name: page.client_name.clone(),
            weight: page.weight,
            volume_ft3: page.volume_ft3,
            liftgate: yes(&page.liftgate),
            inside: yes(&page.inside),
            residential: yes(&page.residential),
            over_length: OverLength::parse(&page.over_length),
            pallet_count: page.pallet_count,
            debris_section: page.has_debris_section,
            lakeshore: page.is_lakeshore(),
            time_specific: TimeSpecific::parse(&page.time_specific),
            detention_minutes: page.detention,
            page_count: 1,
        }
    }

    pub fn is_multi_page(&self) -> bool {
        self.page_count > 1
    }
}

/// Final output row for one shipment: the consolidated record plus every
/// computed charge. Read-only once produced.
#[derive(Debug, Clone)]
pub struct PricedShipment {
    pub pro: String,
    pub driver: String,
    /// Resolved zone letter, "QUOTE", or the fixed-lane key ("GA-NJ").
    pub zone: String,
    pub zone_source: ZoneSource,
    pub weight: f64,
    pub volume_ft3: f64,
    pub chargeable_weight: f64,
    pub freight: Charge,
    pub fuel_surcharge: Charge,
    pub debris_removal: f64,
    pub liftgate: bool,
    pub liftgate_charge: f64,
    pub inside: bool,
    pub inside_charge: f64,
    pub over_length: OverLength,
    pub over_length_charge: f64,
    pub residential: bool,
    pub residential_charge: f64,
    pub time_specific: TimeSpecific,
    pub time_specific_charge: f64,
    pub detention_minutes: u32,
    pub detention_charge: f64,
    pub extras: f64,
    pub total: Charge,
}

/// Where the billing zone came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneSource {
    /// Printed on the document.
    Bol,
    /// Looked up from the delivery ZIP.
    Zip,
    /// Neither; shipment needs a manual quote.
    Unknown,
    /// Fixed-price contract lane; zone pricing bypassed entirely.
    FixedLane,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_defaults_for_missing_keys() {
        let page: PageExtraction = serde_json::from_str(r#"{"pro": "123"}"#).unwrap();
        assert_eq!(page.pro, "123");
        assert_eq!(page.weight, 0.0);
        assert_eq!(page.liftgate, "");
        assert!(!page.has_debris_section);
        assert_eq!(page.detention, 0);
    }

    #[test]
    fn test_volume_alias() {
        let page: PageExtraction = serde_json::from_str(r#"{"volume": 40.5}"#).unwrap();
        assert_eq!(page.volume_ft3, 40.5);
        let page: PageExtraction = serde_json::from_str(r#"{"volumeFt3": 12.0}"#).unwrap();
        assert_eq!(page.volume_ft3, 12.0);
    }

    #[test]
    fn test_lakeshore_detection_is_case_insensitive() {
        let mut page = PageExtraction::default();
        page.client_name = "LAKESHORE Learning Materials".to_string();
        assert!(page.is_lakeshore());
        page.client_name = "Acme Freight".to_string();
        assert!(!page.is_lakeshore());
    }

    #[test]
    fn test_over_length_severity_order() {
        assert!(OverLength::None < OverLength::In97To144);
        assert!(OverLength::In97To144 < OverLength::In145To192);
        assert!(OverLength::In193To240 < OverLength::In241Plus);
        assert_eq!(OverLength::parse("241 or more"), OverLength::In241Plus);
        assert_eq!(OverLength::parse("garbage"), OverLength::None);
    }

    #[test]
    fn test_time_specific_severity_order() {
        // Tightest window wins: 15 Minutes > AM Special > 2 Hours.
        assert!(TimeSpecific::TwoHours < TimeSpecific::AmSpecial);
        assert!(TimeSpecific::AmSpecial < TimeSpecific::FifteenMinutes);
    }

    #[test]
    fn test_charge_display() {
        assert_eq!(Charge::Priced(41.6).to_string(), "41.60");
        assert_eq!(Charge::QuoteRequired.to_string(), "Quote Required");
    }

    #[test]
    fn test_yes_flag_is_exact() {
        assert!(yes("Yes"));
        assert!(!yes("yes"));
        assert!(!yes(""));
    }
}

// src/export.rs

use crate::model::PricedShipment;
use std::{fs, path::Path};
use tracing::info;

const HEADERS: [&str; 17] = [
    "Job",
    "Driver",
    "ZONE",
    "Weight",
    "Volume-ft3",
    "Chargeable",
    "Freight",
    "Fuel Sur.",
    "Debris R",
    "Liftgate",
    "Inside",
    "Over Length",
    "Residential",
    "Time Specific",
    "Detention",
    "Extras",
    "Total",
];

fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "" }
}

/// One output row, in the billing sheet's column order.
fn row(r: &PricedShipment) -> Vec<String> {
    vec![
        r.pro.clone(),
        r.driver.clone(),
        r.zone.clone(),
        format!("{:.0}", r.weight),
        format!("{:.2}", r.volume_ft3),
        format!("{:.0}", r.chargeable_weight),
        r.freight.to_string(),
        r.fuel_surcharge.to_string(),
        format!("{:.2}", r.debris_removal),
        yes_no(r.liftgate).to_string(),
        yes_no(r.inside).to_string(),
        r.over_length.label().to_string(),
        yes_no(r.residential).to_string(),
        r.time_specific.label().to_string(),
        if r.detention_minutes > 0 {
            format!("{} min", r.detention_minutes)
        } else {
            String::new()
        },
        format!("{:.2}", r.extras),
        r.total.to_string(),
    ]
}

/// CSV with headers, for download/archival.
pub fn csv_string(results: &[PricedShipment]) -> String {
    let mut lines = vec![HEADERS.join(",")];
    lines.extend(results.iter().map(|r| row(r).join(",")));
    lines.join("\n") + "\n"
}

/// Tab-separated rows without headers, for pasting into the billing
/// spreadsheet.
pub fn tsv_string(results: &[PricedShipment]) -> String {
    results
        .iter()
        .map(|r| row(r).join("\t"))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn write_csv(
    path: impl AsRef<Path>,
    results: &[PricedShipment],
) -> Result<(), Box<dyn std::error::Error>> {
    let path = path.as_ref();
    fs::write(path, csv_string(results))?;
    info!(path = %path.display(), rows = results.len(), "Wrote CSV");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Charge, OverLength, TimeSpecific, ZoneSource};

    fn priced() -> PricedShipment {
        PricedShipment {
            pro: "1003211675-1A + 1003211675-1B".to_string(),
            driver: "John Smith".to_string(),
            zone: "C".to_string(),
            zone_source: ZoneSource::Zip,
            weight: 800.0,
            volume_ft3: 30.0,
            chargeable_weight: 450.78,
            freight: Charge::Priced(22.0),
            fuel_surcharge: Charge::Priced(5.28),
            debris_removal: 0.0,
            liftgate: true,
            liftgate_charge: 20.0,
            inside: false,
            inside_charge: 0.0,
            over_length: OverLength::In97To144,
            over_length_charge: 12.0,
            residential: false,
            residential_charge: 0.0,
            time_specific: TimeSpecific::None,
            time_specific_charge: 0.0,
            detention_minutes: 45,
            detention_charge: 36.0,
            extras: 68.0,
            total: Charge::Priced(95.28),
        }
    }

    #[test]
    fn test_csv_has_header_and_formats_dollars() {
        let csv = csv_string(&[priced()]);
        let mut lines = csv.lines();
        assert!(lines.next().unwrap().starts_with("Job,Driver,ZONE"));
        let data = lines.next().unwrap();
        assert!(data.contains("22.00"));
        assert!(data.contains("95.28"));
        assert!(data.contains("97-144"));
        assert!(data.contains("45 min"));
    }

    #[test]
    fn test_tsv_is_headerless_and_tab_joined() {
        let tsv = tsv_string(&[priced(), priced()]);
        assert_eq!(tsv.lines().count(), 2);
        assert!(!tsv.contains("Job"));
        assert_eq!(tsv.lines().next().unwrap().matches('\t').count(), 16);
    }

    #[test]
    fn test_quote_required_renders_as_sentinel() {
        let mut r = priced();
        r.freight = Charge::QuoteRequired;
        r.fuel_surcharge = Charge::QuoteRequired;
        r.total = Charge::QuoteRequired;
        r.zone = "QUOTE".to_string();
        let csv = csv_string(&[r]);
        assert!(csv.contains("Quote Required"));
    }
}

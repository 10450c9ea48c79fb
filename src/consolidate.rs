// src/consolidate.rs

use crate::model::{OverLength, PageExtraction, ShipmentRecord, TimeSpecific, yes};
use crate::normalize::normalize;
use std::collections::HashMap;
use tracing::info;

/// Group per-page extractions into one record per physical delivery.
///
/// The grouping key is the normalized delivery address. A page whose
/// address normalizes to "" becomes its own singleton shipment and is
/// never merged, even with another empty-address page: when address
/// extraction failed we fail toward duplicate rows the operator can see,
/// not silently-combined totals.
///
/// Output order is first-seen input order.
pub fn consolidate(pages: &[PageExtraction]) -> Vec<ShipmentRecord> {
    let mut shipments: Vec<ShipmentRecord> = Vec::new();
    let mut by_address: HashMap<String, usize> = HashMap::new();

    for page in pages {
        let key = normalize(&page.delivery_address);
        if key.is_empty() {
            shipments.push(ShipmentRecord::from_page(page));
            continue;
        }
        match by_address.get(&key) {
            Some(&idx) => merge_page(&mut shipments[idx], page),
            None => {
                by_address.insert(key, shipments.len());
                shipments.push(ShipmentRecord::from_page(page));
            }
        }
    }

    let merged = pages.len() - shipments.len();
    info!(
        pages = pages.len(),
        shipments = shipments.len(),
        merged,
        "Consolidated batch"
    );
    shipments
}

/// Fold one more page into an existing shipment. Numerics sum, flags OR,
/// categories keep the most severe value, identity fields keep the first
/// non-empty value seen.
fn merge_page(rec: &mut ShipmentRecord, page: &PageExtraction) {
    rec.pro = format!("{} + {}", rec.pro, page.pro);
    rec.page_count += 1;

    rec.weight += page.weight;
    rec.volume_ft3 += page.volume_ft3;
    rec.pallet_count += page.pallet_count;
    rec.detention_minutes += page.detention;

    rec.liftgate |= yes(&page.liftgate);
    rec.inside |= yes(&page.inside);
    rec.residential |= yes(&page.residential);
    rec.debris_section |= page.has_debris_section;
    rec.lakeshore |= page.is_lakeshore();

    rec.over_length = rec.over_length.max(OverLength::parse(&page.over_length));
    rec.time_specific = rec.time_specific.max(TimeSpecific::parse(&page.time_specific));

    keep_first(&mut rec.pickup_state, &page.pickup_state);
    keep_first(&mut rec.delivery_state, &page.delivery_state);
    keep_first(&mut rec.zone_hint, &page.zone);
    keep_first(&mut rec.delivery_zip, &page.delivery_zip);
    keep_first(&mut rec.client_name, &page.client_name);
}

fn keep_first(current: &mut String, candidate: &str) {
    if current.is_empty() && !candidate.is_empty() {
        *current = candidate.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(pro: &str, address: &str) -> PageExtraction {
        PageExtraction {
            pro: pro.to_string(),
            delivery_address: address.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_equivalent_addresses_merge() {
        let mut a = page("1003211675-1A", "123 Main St NE");
        a.weight = 500.0;
        a.volume_ft3 = 20.0;
        let mut b = page("1003211675-1B", "123 main street");
        b.weight = 300.0;
        b.volume_ft3 = 10.0;

        let shipments = consolidate(&[a, b]);
        assert_eq!(shipments.len(), 1);
        let s = &shipments[0];
        assert_eq!(s.pro, "1003211675-1A + 1003211675-1B");
        assert_eq!(s.weight, 800.0);
        assert_eq!(s.volume_ft3, 30.0);
        assert!(s.is_multi_page());
        assert_eq!(s.page_count, 2);
    }

    #[test]
    fn test_empty_addresses_never_merge() {
        let shipments = consolidate(&[page("A1", ""), page("B1", "  ")]);
        assert_eq!(shipments.len(), 2);
        assert!(!shipments[0].is_multi_page());
        assert!(!shipments[1].is_multi_page());
    }

    #[test]
    fn test_flags_or_and_categories_escalate() {
        let mut a = page("1A", "77 Depot Rd");
        a.liftgate = "Yes".to_string();
        a.over_length = "97-144".to_string();
        a.time_specific = "2 Hours".to_string();
        let mut b = page("1B", "77 Depot Road");
        b.inside = "Yes".to_string();
        b.over_length = "193-240".to_string();
        b.time_specific = "15 Minutes".to_string();
        b.has_debris_section = true;

        let shipments = consolidate(&[a, b]);
        assert_eq!(shipments.len(), 1);
        let s = &shipments[0];
        assert!(s.liftgate);
        assert!(s.inside);
        assert!(!s.residential);
        assert!(s.debris_section);
        assert_eq!(s.over_length, OverLength::In193To240);
        assert_eq!(s.time_specific, TimeSpecific::FifteenMinutes);
    }

    #[test]
    fn test_category_never_downgrades() {
        let mut a = page("1A", "77 Depot Rd");
        a.over_length = "241 or more".to_string();
        a.time_specific = "AM Special".to_string();
        let mut b = page("1B", "77 Depot Rd");
        b.over_length = "97-144".to_string();
        b.time_specific = "2 Hours".to_string();

        let s = &consolidate(&[a, b])[0];
        assert_eq!(s.over_length, OverLength::In241Plus);
        assert_eq!(s.time_specific, TimeSpecific::AmSpecial);
    }

    #[test]
    fn test_first_non_empty_identity_fields() {
        let mut a = page("1A", "9 Mill Ln");
        a.zone = String::new();
        a.delivery_zip = "30305".to_string();
        let mut b = page("1B", "9 Mill Lane");
        b.zone = "C".to_string();
        b.delivery_zip = "30306".to_string();

        let s = &consolidate(&[a, b])[0];
        // zip was set by the first page and must not be overwritten
        assert_eq!(s.delivery_zip, "30305");
        // zone was empty on the first page, so the second page fills it
        assert_eq!(s.zone_hint, "C");
    }

    #[test]
    fn test_detention_and_pallets_sum() {
        let mut a = page("1A", "5 Dock St");
        a.detention = 20;
        a.pallet_count = 2;
        let mut b = page("1B", "5 Dock Street");
        b.detention = 25;
        b.pallet_count = 1;

        let s = &consolidate(&[a, b])[0];
        assert_eq!(s.detention_minutes, 45);
        assert_eq!(s.pallet_count, 3);
    }

    #[test]
    fn test_distinct_addresses_stay_separate_in_input_order() {
        let shipments = consolidate(&[
            page("1A", "1 First St"),
            page("2A", "2 Second St"),
            page("1B", "1 First Street"),
        ]);
        assert_eq!(shipments.len(), 2);
        assert_eq!(shipments[0].pro, "1A + 1B");
        assert_eq!(shipments[1].pro, "2A");
    }
}

// src/rate.rs

use crate::model::{Charge, PricedShipment, ShipmentRecord, ZoneSource};
use crate::tables::{EARLY_ZONES, RateTables};
use tracing::warn;

/// Cubic feet -> cubic inches -> pounds at the 115 in³/lb density factor.
const DIM_WEIGHT_DIVISOR: f64 = 115.0;
const CUBIC_INCHES_PER_FT3: f64 = 1728.0;

const LIFTGATE_CHARGE: f64 = 20.0;
const RESIDENTIAL_CHARGE: f64 = 15.0;
const DEBRIS_PER_PALLET: f64 = 3.0;
const INSIDE_PER_LB: f64 = 0.004;
const INSIDE_MIN: f64 = 10.0;
const INSIDE_MAX: f64 = 80.0;
const DETENTION_FREE_MINUTES: u32 = 30;
const DETENTION_PER_HOUR: f64 = 36.0;

/// Outcome of zone resolution. `Quote` means the shipment cannot be
/// auto-priced and must be flagged for a manual quote rather than
/// silently priced at a wrong zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    Letter(char),
    Quote,
}

impl Zone {
    pub fn display(self) -> String {
        match self {
            Zone::Letter(z) => z.to_string(),
            Zone::Quote => "QUOTE".to_string(),
        }
    }
}

/// Map an explicit zone hint and/or delivery ZIP to a billing zone.
///
/// The document's own zone wins when it is a valid letter; otherwise the
/// first five digits of the ZIP are looked up in the table. Absence of
/// data is always representable in the return value; this never errors.
pub fn resolve_zone(explicit_zone: &str, delivery_zip: &str, tables: &RateTables) -> (Zone, ZoneSource) {
    let hint = explicit_zone.trim().to_uppercase();
    if let Some(z) = hint.chars().next()
        && hint.len() == 1
        && tables.is_valid_zone(z)
    {
        return (Zone::Letter(z), ZoneSource::Bol);
    }

    let digits: String = delivery_zip.chars().filter(|c| c.is_ascii_digit()).take(5).collect();
    if let Some(z) = tables.zone_for_zip(&digits) {
        return (Zone::Letter(z), ZoneSource::Zip);
    }

    (Zone::Quote, ZoneSource::Unknown)
}

/// A matched fixed-price contract lane.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedLane {
    pub key: String,
    pub price: f64,
}

/// Detect a contracted flat-rate lane from the state pair. On a match
/// the flat price IS the total; the caller must skip zone resolution,
/// fuel surcharge, and every accessorial.
pub fn classify_lane(pickup_state: &str, delivery_state: &str, tables: &RateTables) -> Option<FixedLane> {
    let pickup = pickup_state.trim().to_uppercase();
    let delivery = delivery_state.trim().to_uppercase();
    if pickup.is_empty() || delivery.is_empty() {
        return None;
    }
    let key = format!("{pickup}-{delivery}");
    tables.fixed_lane(&key).map(|price| FixedLane { key, price })
}

/// Price one consolidated shipment.
///
/// Fixed-lane shipments short-circuit to the contracted flat total. A
/// shipment with no resolvable zone carries the quote-required sentinel
/// through freight, fuel, and total; accessorials stay zero because the
/// whole shipment is quoted by hand. Everything else is metered:
/// tier rate x applicable weight, clamped, plus fuel and the seven
/// accessorial charges.
pub fn price(
    shipment: &ShipmentRecord,
    driver: &str,
    fuel_surcharge_percent: f64,
    tables: &RateTables,
) -> PricedShipment {
    if let Some(lane) = classify_lane(&shipment.pickup_state, &shipment.delivery_state, tables) {
        return fixed_lane_shipment(shipment, driver, lane);
    }

    let chargeable_weight = shipment.volume_ft3 * CUBIC_INCHES_PER_FT3 / DIM_WEIGHT_DIVISOR;
    let applicable_weight = shipment.weight.max(chargeable_weight);

    let (zone, zone_source) = resolve_zone(&shipment.zone_hint, &shipment.delivery_zip, tables);
    let Zone::Letter(zone_letter) = zone else {
        warn!(pro = %shipment.pro, zip = %shipment.delivery_zip, "No zone or ZIP match; quote required");
        return quote_required_shipment(shipment, driver, chargeable_weight);
    };

    let Some(zone_rate) = tables.zone_rate(zone_letter).copied() else {
        // Only reachable with a fixture whose ZIP map names a zone the
        // rate table lacks; fail toward a manual quote, never a panic.
        warn!(pro = %shipment.pro, zone = %zone_letter, "Zone has no rate entry; quote required");
        return quote_required_shipment(shipment, driver, chargeable_weight);
    };

    let freight = (applicable_weight * zone_rate.rate_for(applicable_weight))
        .clamp(zone_rate.min, zone_rate.max);
    let fuel_surcharge = freight * fuel_surcharge_percent;

    let debris_removal = if shipment.debris_section || shipment.lakeshore {
        f64::from(shipment.pallet_count) * DEBRIS_PER_PALLET
    } else {
        0.0
    };
    let liftgate_charge = if shipment.liftgate { LIFTGATE_CHARGE } else { 0.0 };
    let inside_charge = if shipment.inside {
        (applicable_weight * INSIDE_PER_LB).clamp(INSIDE_MIN, INSIDE_MAX)
    } else {
        0.0
    };
    let over_length_charge = shipment.over_length.flat_charge();
    let residential_charge = if shipment.residential { RESIDENTIAL_CHARGE } else { 0.0 };
    let time_specific_charge = shipment
        .time_specific
        .charge(EARLY_ZONES.contains(&zone_letter));
    let detention_charge = detention(shipment.detention_minutes);

    let extras = debris_removal
        + liftgate_charge
        + inside_charge
        + over_length_charge
        + residential_charge
        + time_specific_charge
        + detention_charge;
    let total = freight + fuel_surcharge + extras;

    PricedShipment {
        pro: shipment.pro.clone(),
        driver: driver.to_string(),
        zone: zone_letter.to_string(),
        zone_source,
        weight: shipment.weight,
        volume_ft3: shipment.volume_ft3,
        chargeable_weight,
        freight: Charge::Priced(freight),
        fuel_surcharge: Charge::Priced(fuel_surcharge),
        debris_removal,
        liftgate: shipment.liftgate,
        liftgate_charge,
        inside: shipment.inside,
        inside_charge,
        over_length: shipment.over_length,
        over_length_charge,
        residential: shipment.residential,
        residential_charge,
        time_specific: shipment.time_specific,
        time_specific_charge,
        detention_minutes: shipment.detention_minutes,
        detention_charge,
        extras,
        total: Charge::Priced(total),
    }
}

/// First 30 minutes are free; beyond that, $36 per full or partial hour.
fn detention(minutes: u32) -> f64 {
    let billable = minutes.saturating_sub(DETENTION_FREE_MINUTES);
    if billable == 0 {
        return 0.0;
    }
    f64::from(billable.div_ceil(60)) * DETENTION_PER_HOUR
}

fn fixed_lane_shipment(shipment: &ShipmentRecord, driver: &str, lane: FixedLane) -> PricedShipment {
    PricedShipment {
        pro: shipment.pro.clone(),
        driver: driver.to_string(),
        zone: lane.key,
        zone_source: ZoneSource::FixedLane,
        weight: shipment.weight,
        volume_ft3: shipment.volume_ft3,
        chargeable_weight: 0.0,
        freight: Charge::Priced(0.0),
        fuel_surcharge: Charge::Priced(0.0),
        debris_removal: 0.0,
        liftgate: shipment.liftgate,
        liftgate_charge: 0.0,
        inside: shipment.inside,
        inside_charge: 0.0,
        over_length: shipment.over_length,
        over_length_charge: 0.0,
        residential: shipment.residential,
        residential_charge: 0.0,
        time_specific: shipment.time_specific,
        time_specific_charge: 0.0,
        detention_minutes: shipment.detention_minutes,
        detention_charge: 0.0,
        extras: 0.0,
        total: Charge::Priced(lane.price),
    }
}

fn quote_required_shipment(
    shipment: &ShipmentRecord,
    driver: &str,
    chargeable_weight: f64,
) -> PricedShipment {
    PricedShipment {
        pro: shipment.pro.clone(),
        driver: driver.to_string(),
        zone: Zone::Quote.display(),
        zone_source: ZoneSource::Unknown,
        weight: shipment.weight,
        volume_ft3: shipment.volume_ft3,
        chargeable_weight,
        freight: Charge::QuoteRequired,
        fuel_surcharge: Charge::QuoteRequired,
        debris_removal: 0.0,
        liftgate: shipment.liftgate,
        liftgate_charge: 0.0,
        inside: shipment.inside,
        inside_charge: 0.0,
        over_length: shipment.over_length,
        over_length_charge: 0.0,
        residential: shipment.residential,
        residential_charge: 0.0,
        time_specific: shipment.time_specific,
        time_specific_charge: 0.0,
        detention_minutes: shipment.detention_minutes,
        detention_charge: 0.0,
        extras: 0.0,
        total: Charge::QuoteRequired,
    }
}

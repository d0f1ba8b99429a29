//! Core pricing calculation functions.
//!
//! Pure functions for delivery pricing math - no network access.

use rust_decimal::prelude::*;

use super::models::{DistanceRange, GeoPoint};
use super::services::PricingError;

/// Mean Earth radius used by the haversine formula, in meters
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Great-circle distance between two points in whole meters.
///
/// Uses the haversine formula and rounds to the nearest meter, with halves
/// rounded away from zero.
///
/// # Examples
/// ```
/// use delivery_order_price::pricing::{distance, GeoPoint};
///
/// let helsinki = GeoPoint::new(60.1699, 24.9384);
/// assert_eq!(distance(helsinki, helsinki), 0);
/// ```
pub fn distance(a: GeoPoint, b: GeoPoint) -> i64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    // Rounding error can push h a hair outside [0, 1] for antipodal points
    let h = h.clamp(0.0, 1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    (EARTH_RADIUS_METERS * c).round() as i64
}

/// Resolve the delivery fee for a distance.
///
/// Scans `ranges` in order and prices with the first tier where
/// `min <= distance < max`:
/// `base_price + constant + trunc(multiplier * distance / 10)`.
///
/// # Errors
/// * `PricingError::NoApplicableRange` - no tier covers the distance
/// * `PricingError::NegativeFee` - the matching tier yields a negative fee
/// * `PricingError::FeeOutOfRange` - the tier parameters overflow the fee
pub fn resolve_fee(
    distance: i64,
    base_price: i64,
    ranges: &[DistanceRange],
) -> Result<i64, PricingError> {
    let range = ranges
        .iter()
        .find(|range| range.contains(distance))
        .ok_or(PricingError::NoApplicableRange { distance })?;

    let fee = variable_fee(range, distance)
        .and_then(|variable| base_price.checked_add(range.constant)?.checked_add(variable))
        .ok_or(PricingError::FeeOutOfRange { distance })?;

    if fee < 0 {
        return Err(PricingError::NegativeFee { fee });
    }

    Ok(fee)
}

/// Distance-proportional part of a tier's fee, truncated toward zero
fn variable_fee(range: &DistanceRange, distance: i64) -> Option<i64> {
    range
        .multiplier
        .checked_mul(Decimal::from(distance))?
        .checked_div(Decimal::TEN)?
        .trunc()
        .to_i64()
}

/// Surcharge bringing a small cart up to the venue's minimum. Never negative.
pub fn small_order_surcharge(cart_value: i64, order_minimum_no_surcharge: i64) -> i64 {
    order_minimum_no_surcharge.saturating_sub(cart_value).max(0)
}

/// Sum of the order's parts, or `None` if it does not fit in an `i64`
pub fn total_price(cart_value: i64, small_order_surcharge: i64, delivery_fee: i64) -> Option<i64> {
    cart_value
        .checked_add(small_order_surcharge)?
        .checked_add(delivery_fee)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn tier(min: i64, max: i64, constant: i64, multiplier: Decimal) -> DistanceRange {
        DistanceRange {
            min,
            max,
            constant,
            multiplier,
        }
    }

    fn two_tiers() -> Vec<DistanceRange> {
        vec![tier(0, 500, 100, dec!(0)), tier(500, 1000, 200, dec!(1.0))]
    }

    // ==================== distance tests ====================

    #[test]
    fn test_distance_same_point_is_zero() {
        let point = GeoPoint::new(60.1699, 24.9384);
        assert_eq!(distance(point, point), 0);
    }

    #[test]
    fn test_distance_known_fixture() {
        let venue = GeoPoint::new(60.17094, 24.93087);
        let user = GeoPoint::new(60.1699, 24.9384);

        let meters = distance(venue, user);
        assert!((427..=437).contains(&meters), "got {} meters", meters);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let points = [
            GeoPoint::new(60.1699, 24.9384),
            GeoPoint::new(60.17094, 24.93087),
            GeoPoint::new(-33.8688, 151.2093),
            GeoPoint::new(40.7128, -74.0060),
            GeoPoint::new(90.0, 0.0),
            GeoPoint::new(-90.0, 180.0),
        ];

        for a in points {
            for b in points {
                assert_eq!(distance(a, b), distance(b, a), "{:?} <-> {:?}", a, b);
            }
        }
    }

    #[test]
    fn test_distance_one_degree_on_equator() {
        let meters = distance(GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 1.0));
        assert_eq!(meters, 111_195);
    }

    #[test]
    fn test_distance_antipodes_is_half_circumference() {
        let meters = distance(GeoPoint::new(90.0, 0.0), GeoPoint::new(-90.0, 0.0));
        assert_eq!(meters, 20_015_087);
    }

    // ==================== resolve_fee tests ====================

    #[test]
    fn test_resolve_fee_first_tier() {
        assert_eq!(resolve_fee(200, 190, &two_tiers()).unwrap(), 290);
    }

    #[test]
    fn test_resolve_fee_second_tier_uses_multiplier() {
        // 190 + 200 + floor(1.0 * 600 / 10)
        assert_eq!(resolve_fee(600, 190, &two_tiers()).unwrap(), 450);
    }

    #[test]
    fn test_resolve_fee_lower_bound_inclusive_upper_exclusive() {
        assert_eq!(resolve_fee(0, 190, &two_tiers()).unwrap(), 290);
        assert_eq!(resolve_fee(500, 190, &two_tiers()).unwrap(), 440);
        assert_eq!(resolve_fee(999, 190, &two_tiers()).unwrap(), 489);
    }

    #[test]
    fn test_resolve_fee_truncates_multiplier_term() {
        // 300 + 100 + trunc(0.05 * 987 / 10) = 300 + 100 + trunc(4.935)
        let ranges = vec![tier(0, 1000, 100, dec!(0.05))];
        assert_eq!(resolve_fee(987, 300, &ranges).unwrap(), 404);
    }

    #[test]
    fn test_resolve_fee_beyond_all_ranges() {
        let err = resolve_fee(1000, 190, &two_tiers()).unwrap_err();
        assert!(matches!(err, PricingError::NoApplicableRange { distance: 1000 }));
    }

    #[test]
    fn test_resolve_fee_empty_ranges() {
        let err = resolve_fee(0, 190, &[]).unwrap_err();
        assert!(matches!(err, PricingError::NoApplicableRange { distance: 0 }));
    }

    #[test]
    fn test_resolve_fee_zero_is_a_valid_fee() {
        let ranges = vec![tier(0, 1000, 0, dec!(0))];
        assert_eq!(resolve_fee(250, 0, &ranges).unwrap(), 0);
    }

    #[test]
    fn test_resolve_fee_overlapping_ranges_first_match_wins() {
        let ranges = vec![tier(0, 1000, 100, dec!(0)), tier(0, 500, 900, dec!(0))];
        assert_eq!(resolve_fee(300, 0, &ranges).unwrap(), 100);

        let reversed = vec![tier(0, 500, 900, dec!(0)), tier(0, 1000, 100, dec!(0))];
        assert_eq!(resolve_fee(300, 0, &reversed).unwrap(), 900);
    }

    #[test]
    fn test_resolve_fee_negative_fee_rejected() {
        let ranges = vec![tier(0, 1000, -500, dec!(0))];
        let err = resolve_fee(100, 190, &ranges).unwrap_err();
        assert!(matches!(err, PricingError::NegativeFee { fee: -310 }));
    }

    #[test]
    fn test_resolve_fee_overflow() {
        let ranges = vec![tier(0, 1000, i64::MAX, dec!(0))];
        let err = resolve_fee(100, 190, &ranges).unwrap_err();
        assert!(matches!(err, PricingError::FeeOutOfRange { distance: 100 }));
    }

    // ==================== surcharge / total tests ====================

    #[test]
    fn test_small_order_surcharge_below_minimum() {
        assert_eq!(small_order_surcharge(500, 1000), 500);
    }

    #[test]
    fn test_small_order_surcharge_at_or_above_minimum() {
        assert_eq!(small_order_surcharge(1000, 1000), 0);
        assert_eq!(small_order_surcharge(1500, 1000), 0);
    }

    #[test]
    fn test_total_price_is_sum() {
        for (cart, surcharge, fee) in [(0, 0, 0), (1000, 0, 404), (500, 500, 290), (1, 2, 3)] {
            assert_eq!(total_price(cart, surcharge, fee), Some(cart + surcharge + fee));
        }
    }

    #[test]
    fn test_total_price_overflow() {
        assert_eq!(total_price(i64::MAX, 0, 190), None);
        assert_eq!(total_price(i64::MAX - 10, 10, 0), Some(i64::MAX));
    }

    #[test]
    fn test_small_order_surcharge_extreme_values() {
        assert_eq!(small_order_surcharge(i64::MAX, 1000), 0);
        assert_eq!(small_order_surcharge(1, i64::MAX), i64::MAX - 1);
        assert_eq!(small_order_surcharge(i64::MAX, i64::MIN), 0);
    }
}

use bazi::pillars::{fold_correction, hour, month, Reconciled};
use bazi::{Branch, Calculator, GeoPosition, Pillar, Stem, TimeZoneOffset};
use chrono::{DateTime, Timelike};
use proptest::prelude::*;

/// Civil moments between 1900 and 2100.
fn civil_moment() -> impl Strategy<Value = chrono::NaiveDateTime> {
    (-2_208_988_800i64..4_102_444_800i64)
        .prop_map(|secs| DateTime::from_timestamp(secs, 0).unwrap().naive_utc())
}

fn position() -> impl Strategy<Value = GeoPosition> {
    (-66.0..66.0f64, -180.0..180.0f64).prop_map(|(lat, lon)| GeoPosition::new(lat, lon))
}

fn offset() -> impl Strategy<Value = TimeZoneOffset> {
    (-24i32..=28).prop_map(TimeZoneOffset::from_half_hours)
}

proptest! {
    #[test]
    fn prop_fold_is_bounded_and_congruent(raw in -1_000_000i64..1_000_000) {
        let folded = fold_correction(raw);
        prop_assert!((-6..6).contains(&folded));
        prop_assert_eq!((raw - folded).rem_euclid(12), 0);
    }

    #[test]
    fn prop_reconciled_lands_on_exact_branch(
        estimated in -100_000i64..100_000,
        phase in 0i64..12,
        exact in 0i64..12,
    ) {
        let r = Reconciled::new(estimated, phase, exact);
        prop_assert!(r.correction.abs() <= 6);
        prop_assert_eq!((r.count() + phase).rem_euclid(12), exact);
    }

    #[test]
    fn prop_cycle_index_inverts_from_cycle(n in -10_000i64..10_000) {
        let pillar = Pillar::from_cycle(n);
        prop_assert_eq!(pillar.cycle_index(), n.rem_euclid(60));
        prop_assert!(Pillar::new(pillar.stem, pillar.branch).is_some());
        prop_assert_eq!(pillar.to_string().parse::<Pillar>().unwrap(), pillar);
    }

    #[test]
    fn prop_symbol_indices_in_range(n in any::<i64>()) {
        prop_assert!((0..10).contains(&Stem::from_index(n).index()));
        prop_assert!((0..12).contains(&Branch::from_index(n).index()));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_corrections_within_half_cycle(
        moment in civil_moment(),
        position in position(),
        offset in offset(),
    ) {
        let calc = Calculator::new(offset).with_position(position);

        let months = month::count_months(calc.ephemeris(), moment, position, offset).unwrap();
        prop_assert!((-6..=6).contains(&months.correction));

        let solar = calc.true_solar_time(moment).unwrap();
        let periods = hour::count_periods(solar);
        prop_assert!((-6..=6).contains(&periods.correction));

        let pillars = calc.four_pillars(moment).unwrap();
        prop_assert_eq!(
            pillars.hour.branch,
            Branch::from_index((i64::from(solar.hour()) + 1) / 2)
        );
        for pillar in pillars.to_array() {
            prop_assert!((0..60).contains(&pillar.cycle_index()));
        }
    }

    #[test]
    fn prop_true_solar_time_stays_near_civil_time(
        moment in civil_moment(),
        longitude in -180.0..180.0f64,
    ) {
        // Zone meridian at the nearest 7.5°: |Δ| ≤ 15 min from longitude plus
        // the equation of time.
        let offset = TimeZoneOffset::from_hours(longitude / 15.0);
        let position = GeoPosition::new(0.0, longitude);
        let calc = Calculator::new(offset).with_position(position);
        let solar = calc.true_solar_time(moment).unwrap();
        prop_assert!((solar - moment).num_minutes().abs() <= 32);
    }
}

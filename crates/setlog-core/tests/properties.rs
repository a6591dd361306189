//! Property tests for date handling, windows and speed steps.

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use setlog_core::date;
use setlog_core::slalom::{next_step_by_kph, TOURNAMENT_STEPS_KPH};
use setlog_core::toggle::{Resolution, ToggleGuard, ToggleTarget};
use setlog_core::{filter_records, FilterOptions, Record, RecordDetails, TimeWindow};

fn any_date() -> impl Strategy<Value = NaiveDate> {
    // 1990-01-01 plus up to ~70 years
    (0i64..25_000).prop_map(|offset| {
        NaiveDate::from_ymd_opt(1990, 1, 1).unwrap() + Duration::days(offset)
    })
}

proptest! {
    #[test]
    fn canonical_string_round_trips(d in any_date()) {
        let iso = date::to_iso(d);
        prop_assert_eq!(iso.len(), 10);
        prop_assert_eq!(date::parse_iso(&iso), Ok(d));
        prop_assert_eq!(date::parse_lenient(&format!("{iso}T23:59:59Z")), Some(d));
    }

    #[test]
    fn inverted_custom_window_is_always_empty(
        start in any_date(),
        gap in 1i64..400,
        days in prop::collection::vec(any_date(), 0..30),
    ) {
        let end = start - Duration::days(gap);
        let records: Vec<Record> = days
            .iter()
            .enumerate()
            .map(|(i, d)| Record::new(format!("r{i}"), date::to_iso(*d), RecordDetails::Other))
            .collect();
        let options = FilterOptions::custom(date::to_iso(start), date::to_iso(end));
        prop_assert!(filter_records(&records, TimeWindow::Custom, &options).is_empty());
    }

    #[test]
    fn filtering_preserves_relative_order(
        now in any_date(),
        days in prop::collection::vec(any_date(), 0..30),
    ) {
        let records: Vec<Record> = days
            .iter()
            .enumerate()
            .map(|(i, d)| Record::new(format!("{i:03}"), date::to_iso(*d), RecordDetails::Other))
            .collect();
        for window in [TimeWindow::Day, TimeWindow::Week, TimeWindow::Month, TimeWindow::Season] {
            let selected = filter_records(&records, window, &FilterOptions::at(now));
            let ids: Vec<&str> = selected.iter().map(|r| r.id.as_str()).collect();
            let mut sorted = ids.clone();
            sorted.sort();
            prop_assert_eq!(ids, sorted);
        }
    }

    #[test]
    fn next_step_is_a_step_at_or_above(kph in 0.0f64..100.0) {
        let step = next_step_by_kph(kph);
        prop_assert!(TOURNAMENT_STEPS_KPH.contains(&step));
        prop_assert!(step >= kph || step == 58.0);
    }

    #[test]
    fn last_issued_request_decides_final_value(
        intents in prop::collection::vec(any::<bool>(), 1..8),
        seed in any::<u64>(),
    ) {
        let mut guard = ToggleGuard::new();
        let target = ToggleTarget::Favorite("r".into());
        let mut displayed = false;
        let mut tickets = Vec::new();
        for intent in &intents {
            tickets.push(guard.begin(target.clone(), displayed, *intent));
            displayed = *intent;
        }

        // Deterministic shuffle of completion order
        let mut order: Vec<usize> = (0..tickets.len()).collect();
        let mut state = seed;
        for i in (1..order.len()).rev() {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            order.swap(i, (state >> 33) as usize % (i + 1));
        }

        for i in order {
            let resolution = guard.settle(&tickets[i].succeeded());
            prop_assert_eq!(resolution == Resolution::Confirmed, i == tickets.len() - 1);
            displayed = resolution.apply(displayed);
        }
        prop_assert_eq!(displayed, *intents.last().unwrap());
    }
}

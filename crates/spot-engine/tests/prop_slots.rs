//! Property-based tests for splitting and tiling using proptest.
//!
//! These verify invariants that hold for *any* well-formed window, session
//! and duration triple, not just the worked examples in the unit tests.

use chrono::NaiveDate;
use proptest::prelude::*;
use spot_engine::splitter::split;
use spot_engine::tiler::{tile, Durations};
use spot_engine::{HourOfDay, TimeRange};

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn hour(minutes: u16) -> HourOfDay {
    HourOfDay::from_minutes(minutes).unwrap()
}

/// A well-formed range within one day (start < end, both in 00:00..=24:00).
fn arb_range() -> impl Strategy<Value = TimeRange> {
    (0u16..1440).prop_flat_map(|start| {
        ((start + 1)..=1440).prop_map(move |end| TimeRange {
            start: hour(start),
            end: hour(end),
        })
    })
}

/// Buffers up to 30 minutes around a 1-120 minute session.
fn arb_durations() -> impl Strategy<Value = Durations> {
    (0u32..=30, 1u32..=120, 0u32..=30).prop_map(|(before, session, after)| Durations {
        before,
        session,
        after,
    })
}

fn test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

fn config() -> ProptestConfig {
    ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    }
}

// ---------------------------------------------------------------------------
// Tiling invariants
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(config())]

    // An interval of length L and block size B always yields floor(L / B)
    // mini-slots.
    #[test]
    fn tiling_yields_floor_len_over_block(
        interval in arb_range(),
        durations in arb_durations(),
    ) {
        let slots = tile(interval, test_date(), durations).unwrap();
        let expected = u64::from(interval.len_minutes()) / durations.block_minutes();
        prop_assert_eq!(slots.len() as u64, expected);
    }

    // Blocks are packed back to back, strictly increasing, and stay inside
    // the interval.
    #[test]
    fn tiling_is_back_to_back_and_inside_the_interval(
        interval in arb_range(),
        durations in arb_durations(),
    ) {
        let slots = tile(interval, test_date(), durations).unwrap();
        let date = test_date();

        if let (Some(first), Some(last)) = (slots.first(), slots.last()) {
            prop_assert_eq!(first.start_hour, interval.start.to_instant(date));
            prop_assert!(last.end_hour <= interval.end.to_instant(date));
        }
        for pair in slots.windows(2) {
            prop_assert_eq!(pair[0].end_hour, pair[1].start_hour);
            prop_assert!(pair[0].start_hour < pair[1].start_hour);
        }
    }

    // Every client window nests inside its block and lasts exactly the
    // requested session duration.
    #[test]
    fn client_window_nests_inside_each_block(
        interval in arb_range(),
        durations in arb_durations(),
    ) {
        let slots = tile(interval, test_date(), durations).unwrap();

        for slot in &slots {
            prop_assert!(slot.start_hour <= slot.client_start_hour);
            prop_assert!(slot.client_start_hour < slot.client_end_hour);
            prop_assert!(slot.client_end_hour <= slot.end_hour);

            let client_minutes = (slot.client_end_hour - slot.client_start_hour).num_minutes();
            prop_assert_eq!(client_minutes, i64::from(durations.session));

            let block_minutes = (slot.end_hour - slot.start_hour).num_minutes();
            prop_assert_eq!(block_minutes as u64, durations.block_minutes());
        }
    }
}

// ---------------------------------------------------------------------------
// Splitting invariants
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(config())]

    // Whatever the session looks like, every emitted piece is a well-formed
    // sub-range of the original window.
    #[test]
    fn split_pieces_stay_inside_the_window(
        window in arb_range(),
        session in arb_range(),
    ) {
        let pieces = split(window, &[session]).unwrap();

        for piece in &pieces {
            prop_assert!(piece.start < piece.end);
            prop_assert!(piece.start >= window.start);
            prop_assert!(piece.end <= window.end);
        }
    }

    // A session strictly inside a window yields exactly the two flanking
    // pieces, together covering the window minus the session.
    #[test]
    fn strictly_inside_session_splits_cleanly(
        raw in (0u16..=1440, 0u16..=1440, 0u16..=1440, 0u16..=1440),
    ) {
        let mut cuts = [raw.0, raw.1, raw.2, raw.3];
        cuts.sort_unstable();
        prop_assume!(cuts[0] < cuts[1] && cuts[1] < cuts[2] && cuts[2] < cuts[3]);

        let window = TimeRange { start: hour(cuts[0]), end: hour(cuts[3]) };
        let session = TimeRange { start: hour(cuts[1]), end: hour(cuts[2]) };

        let pieces = split(window, &[session]).unwrap();

        prop_assert_eq!(pieces.len(), 2);
        prop_assert_eq!(pieces[0], TimeRange { start: window.start, end: session.start });
        prop_assert_eq!(pieces[1], TimeRange { start: session.end, end: window.end });
        // The pieces never overlap the session.
        prop_assert!(pieces[0].end <= session.start);
        prop_assert!(pieces[1].start >= session.end);

        let covered = u32::from(pieces[0].len_minutes()) + u32::from(pieces[1].len_minutes());
        prop_assert_eq!(covered, u32::from(window.len_minutes()) - u32::from(session.len_minutes()));
    }

    // With no sessions, splitting is the identity.
    #[test]
    fn no_sessions_is_identity(window in arb_range()) {
        prop_assert_eq!(split(window, &[]).unwrap(), vec![window]);
    }
}

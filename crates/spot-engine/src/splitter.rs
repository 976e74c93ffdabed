//! Subtract reserved sessions from an availability window.
//!
//! Produces the conflict-free sub-intervals of one window. Each session is
//! compared against the ORIGINAL window bounds, never against previously
//! produced pieces, and the pieces from every overlapping session are
//! unioned. For two disjoint sessions inside one window this can emit
//! overlapping pieces; that is the reference behavior and is kept
//! deliberately (see DESIGN.md).

use crate::error::Result;
use crate::types::TimeRange;

/// Split `window` into the sub-intervals free of any overlapping session.
///
/// Exactly one of four cases applies per overlapping session:
/// strictly inside (two pieces), flush with the window start (one trailing
/// piece), flush with the window end (one leading piece), or covering the
/// window exactly (no pieces). A window with no applicable session passes
/// through unchanged.
///
/// # Errors
/// [`crate::SpotError::MalformedInterval`] if the window or any session has
/// `end <= start`.
pub fn split(window: TimeRange, sessions: &[TimeRange]) -> Result<Vec<TimeRange>> {
    window.validate()?;

    let mut pieces = Vec::new();
    let mut conflict_free = true;

    for session in sessions {
        session.validate()?;

        let starts_inside = session.start > window.start;
        let ends_inside = session.end < window.end;
        let flush_start = session.start == window.start;
        let flush_end = session.end == window.end;

        if starts_inside && ends_inside {
            pieces.push(TimeRange {
                start: window.start,
                end: session.start,
            });
            pieces.push(TimeRange {
                start: session.end,
                end: window.end,
            });
            conflict_free = false;
        } else if flush_start && ends_inside {
            pieces.push(TimeRange {
                start: session.end,
                end: window.end,
            });
            conflict_free = false;
        } else if starts_inside && flush_end {
            pieces.push(TimeRange {
                start: window.start,
                end: session.start,
            });
            conflict_free = false;
        } else if flush_start && flush_end {
            // Session covers the window exactly: nothing is left of it.
            conflict_free = false;
        }
        // Any other session does not touch this window.
    }

    if conflict_free {
        pieces.push(window);
    }

    Ok(pieces)
}

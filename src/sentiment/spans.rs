use crate::models::{PositionTally, Span};
use std::collections::HashMap;

/// Collapses a tally map into maximal runs of identical tallies.
///
/// Every character in `0..text_len` ends up in exactly one span, covered or
/// not, and spans come back in document order.
pub fn build_spans(tallies: &HashMap<usize, PositionTally>, text_len: usize) -> Vec<Span> {
    let mut spans = Vec::new();
    if text_len == 0 {
        return spans;
    }

    let mut start = 0;
    let mut current = tallies.get(&0).copied();

    for position in 1..text_len {
        let tally = tallies.get(&position).copied();

        // Option equality covers both a changed count and a coverage flip
        if tally != current {
            spans.push(Span { start, end: position, tally: current });
            start = position;
            current = tally;
        }
    }

    // Close the trailing run
    spans.push(Span { start, end: text_len, tally: current });

    spans
}

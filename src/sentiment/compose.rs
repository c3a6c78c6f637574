use crate::models::{PositionTally, Span, StyledSegment};
use crate::sentiment::color::ShadeOptions;
use std::collections::HashMap;

/// Slices `text` along `spans` and attaches a colour to every covered run.
pub fn compose(
    text: &str,
    spans: &[Span],
    tallies: &HashMap<usize, PositionTally>,
) -> Vec<StyledSegment> {
    compose_with(text, spans, tallies, &ShadeOptions::default())
}

pub fn compose_with(
    text: &str,
    spans: &[Span],
    tallies: &HashMap<usize, PositionTally>,
    options: &ShadeOptions,
) -> Vec<StyledSegment> {
    // Span bounds are character offsets; map them to byte offsets once
    let mut boundaries: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
    boundaries.push(text.len());
    let byte_at = |position: usize| boundaries.get(position).copied().unwrap_or(text.len());

    spans
        .iter()
        .filter_map(|span| {
            let (from, to) = (byte_at(span.start), byte_at(span.end));
            // Inverted or out-of-text spans carry no characters
            if from >= to {
                return None;
            }
            Some(StyledSegment {
                text: text[from..to].to_string(),
                style: tallies
                    .get(&span.start)
                    .map(|tally| options.color_of(tally)),
            })
        })
        .collect()
}

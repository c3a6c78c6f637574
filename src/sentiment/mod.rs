pub mod aggregate;
pub mod color;
pub mod compose;
pub mod spans;

pub use aggregate::aggregate;
pub use color::{ShadeOptions, color_of};
pub use compose::{compose, compose_with};
pub use spans::build_spans;

use crate::models::{StyledSegment, Vote};

/// Folds `votes` over `text` and returns the text cut into shaded segments.
///
/// Vote bounds are character offsets. Concatenating the returned segment
/// texts always gives back `text`.
pub fn render(text: &str, votes: &[Vote]) -> Vec<StyledSegment> {
    render_with(text, votes, &ShadeOptions::default())
}

pub fn render_with(text: &str, votes: &[Vote], options: &ShadeOptions) -> Vec<StyledSegment> {
    let text_len = text.chars().count();
    let tallies = aggregate(votes, text_len);
    let spans = build_spans(&tallies, text_len);
    compose_with(text, &spans, &tallies, options)
}

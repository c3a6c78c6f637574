//! Folds range votes on a text into shaded segments.
//!
//! Readers select a range of characters and vote it up or down. [`render`]
//! aggregates every vote per character, merges equal neighbours into spans
//! and tints each span green, red, or a green-to-red gradient according to
//! which direction dominates and by how much.
//!
//! ```
//! use vote_shade::{Direction, Vote, render};
//!
//! let segments = render("hello world", &[Vote::new(0, 4, Direction::Up)]);
//! assert_eq!(segments[0].text, "hello");
//! assert!(segments[0].style.is_some());
//! assert_eq!(segments[1].text, " world");
//! assert!(segments[1].style.is_none());
//! ```

pub mod config;
pub mod ingest;
pub mod models;
pub mod output;
pub mod sentiment;

pub use ingest::{IngestError, Ingested, RawVote, parse_votes};
pub use models::{
    ColorWeight, Direction, PositionTally, Rgb, Span, StyledSegment, UnknownDirection, Vote,
};
pub use output::{SentimentSummary, summarize, to_html, to_json};
pub use sentiment::{
    ShadeOptions, aggregate, build_spans, color_of, compose, render, render_with,
};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// Which way a reader leaned on the selected range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown vote direction {0:?}")]
pub struct UnknownDirection(pub String);

impl FromStr for Direction {
    type Err = UnknownDirection;

    /// Case-insensitive `up`/`down`, plus the `agree`/`disagree` aliases.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "up" | "agree" => Ok(Direction::Up),
            "down" | "disagree" => Ok(Direction::Down),
            _ => Err(UnknownDirection(value.to_string())),
        }
    }
}

/// One reader's endorsement or rejection of the inclusive character range
/// `[start_index, end_index]` of a text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vote {
    pub start_index: usize,
    pub end_index: usize,
    pub direction: Direction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Vote {
    pub fn new(start_index: usize, end_index: usize, direction: Direction) -> Self {
        Self {
            start_index,
            end_index,
            direction,
            id: None,
            user_id: None,
            created_at: None,
        }
    }

    /// Stamps the vote with a fresh id and the current time.
    pub fn cast_by(mut self, user_id: impl Into<String>) -> Self {
        self.id = Some(Uuid::new_v4());
        self.user_id = Some(user_id.into());
        self.created_at = Some(Utc::now());
        self
    }

    /// True when the range lies inside a text of `text_len` characters.
    pub fn fits(&self, text_len: usize) -> bool {
        self.start_index <= self.end_index && self.end_index < text_len
    }
}

/// Up/down counts of the votes covering a single character.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PositionTally {
    pub up: u32,
    pub down: u32,
    pub total: u32,
}

impl PositionTally {
    pub fn record(&mut self, direction: Direction) {
        match direction {
            Direction::Up => self.up += 1,
            Direction::Down => self.down += 1,
        }
        self.total = self.up + self.down;
    }

    pub fn dominant(&self) -> u32 {
        self.up.max(self.down)
    }
}

/// Half-open character range `[start, end)` whose positions all share one
/// tally, or are all uncovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub tally: Option<PositionTally>,
}

impl Span {
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    pub fn is_covered(&self) -> bool {
        self.tally.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

pub const GREEN: Rgb = Rgb(0, 128, 0);
pub const RED: Rgb = Rgb(255, 0, 0);

/// Visual weight of a highlighted run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ColorWeight {
    Solid { color: Rgb, opacity: f64 },
    /// Vertical blend, `top` at the top edge and `bottom` at the bottom.
    Gradient { top: Rgb, bottom: Rgb, opacity: f64 },
}

impl ColorWeight {
    pub fn opacity(&self) -> f64 {
        match self {
            ColorWeight::Solid { opacity, .. } | ColorWeight::Gradient { opacity, .. } => *opacity,
        }
    }

    pub fn is_gradient(&self) -> bool {
        matches!(self, ColorWeight::Gradient { .. })
    }

    /// CSS `background` declaration for this weight.
    pub fn css(&self) -> String {
        match self {
            ColorWeight::Solid { color, opacity } => {
                format!("background-color: {}", rgba(color, *opacity))
            }
            ColorWeight::Gradient { top, bottom, opacity } => format!(
                "background: linear-gradient(to bottom, {}, {})",
                rgba(top, *opacity),
                rgba(bottom, *opacity)
            ),
        }
    }
}

fn rgba(color: &Rgb, opacity: f64) -> String {
    format!("rgba({}, {}, {}, {})", color.0, color.1, color.2, opacity)
}

/// A run of the source text with its shading, `None` when no vote covers it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyledSegment {
    pub text: String,
    pub style: Option<ColorWeight>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tally_keeps_total_in_step() {
        let mut tally = PositionTally::default();
        tally.record(Direction::Up);
        tally.record(Direction::Down);
        tally.record(Direction::Up);
        assert_eq!(tally, PositionTally { up: 2, down: 1, total: 3 });
        assert_eq!(tally.dominant(), 2);
    }

    #[test]
    fn vote_fits_checks_both_bounds() {
        assert!(Vote::new(0, 4, Direction::Up).fits(5));
        assert!(!Vote::new(0, 5, Direction::Up).fits(5));
        assert!(!Vote::new(3, 2, Direction::Down).fits(5));
        assert!(!Vote::new(0, 0, Direction::Down).fits(0));
    }

    #[test]
    fn directions_parse_case_insensitively() {
        assert_eq!("UP".parse::<Direction>(), Ok(Direction::Up));
        assert_eq!(" Down ".parse::<Direction>(), Ok(Direction::Down));
        assert_eq!("agree".parse::<Direction>(), Ok(Direction::Up));
        assert_eq!("Disagree".parse::<Direction>(), Ok(Direction::Down));
        assert_eq!(
            "sideways".parse::<Direction>(),
            Err(UnknownDirection("sideways".to_string()))
        );
    }

    #[test]
    fn inverted_span_has_no_length() {
        let span = Span { start: 3, end: 1, tally: None };
        assert_eq!(span.len(), 0);
        assert!(span.is_empty());
        assert_eq!(Span { start: 1, end: 3, tally: None }.len(), 2);
    }

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn core_types_are_send_and_sync() {
        assert_send_sync::<Vote>();
        assert_send_sync::<PositionTally>();
        assert_send_sync::<Span>();
        assert_send_sync::<ColorWeight>();
        assert_send_sync::<StyledSegment>();
        assert_send_sync::<crate::sentiment::ShadeOptions>();
    }

    #[test]
    fn cast_by_stamps_provenance() {
        let vote = Vote::new(1, 2, Direction::Down).cast_by("reader-7");
        assert!(vote.id.is_some());
        assert!(vote.created_at.is_some());
        assert_eq!(vote.user_id.as_deref(), Some("reader-7"));
    }

    #[test]
    fn css_for_solid_and_gradient() {
        let solid = ColorWeight::Solid { color: GREEN, opacity: 0.5 };
        assert_eq!(solid.css(), "background-color: rgba(0, 128, 0, 0.5)");

        let blend = ColorWeight::Gradient { top: GREEN, bottom: RED, opacity: 1.0 };
        assert_eq!(
            blend.css(),
            "background: linear-gradient(to bottom, rgba(0, 128, 0, 1), rgba(255, 0, 0, 1))"
        );
        assert!(blend.is_gradient());
        assert_eq!(blend.opacity(), 1.0);
    }

    #[test]
    fn vote_deserializes_camel_case() {
        let vote: Vote =
            serde_json::from_str(r#"{"startIndex": 2, "endIndex": 6, "direction": "down"}"#)
                .unwrap();
        assert_eq!(vote, Vote::new(2, 6, Direction::Down));
    }
}

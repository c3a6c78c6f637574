use crate::models::{Direction, PositionTally, StyledSegment, Vote};
use crate::sentiment::{aggregate, build_spans};
use html_escape::encode_text;
use serde::Serialize;
use std::fmt;

/// Renders segments as inline HTML, wrapping only the shaded runs.
pub fn to_html(segments: &[StyledSegment]) -> String {
    let mut html = String::new();

    for segment in segments {
        match &segment.style {
            Some(style) => {
                html.push_str(&format!(
                    r#"<span class="vote-shade" style="{};">"#,
                    style.css()
                ));
                html.push_str(&encode_text(&segment.text));
                html.push_str("</span>");
            }
            None => html.push_str(&encode_text(&segment.text)),
        }
    }

    html
}

pub fn to_json(segments: &[StyledSegment]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(segments)
}

/// A highlighted run picked out by [`summarize`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpanReport {
    pub start: usize,
    pub end: usize,
    pub text: String,
    pub tally: PositionTally,
}

/// Headline numbers for one text and its votes.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SentimentSummary {
    pub accepted_votes: usize,
    pub discarded_votes: usize,
    pub up_votes: usize,
    pub down_votes: usize,
    pub highlighted_chars: usize,
    pub text_chars: usize,
    pub most_endorsed: Option<SpanReport>,
    pub most_rejected: Option<SpanReport>,
    pub most_contested: Option<SpanReport>,
}

pub fn summarize(text: &str, votes: &[Vote]) -> SentimentSummary {
    let text_len = text.chars().count();
    let accepted: Vec<&Vote> = votes.iter().filter(|vote| vote.fits(text_len)).collect();

    let mut summary = SentimentSummary {
        accepted_votes: accepted.len(),
        discarded_votes: votes.len() - accepted.len(),
        up_votes: accepted.iter().filter(|v| v.direction == Direction::Up).count(),
        down_votes: accepted.iter().filter(|v| v.direction == Direction::Down).count(),
        text_chars: text_len,
        ..SentimentSummary::default()
    };

    let tallies = aggregate(votes, text_len);
    summary.highlighted_chars = tallies.len();

    // Scores only replace on a strictly better run, so ties keep the earliest span
    let mut best_endorsed = 0i64;
    let mut best_rejected = 0i64;
    let mut best_contested = 0u32;

    for span in build_spans(&tallies, text_len) {
        let Some(tally) = span.tally else {
            continue;
        };
        let net = tally.up as i64 - tally.down as i64;
        let report = || SpanReport {
            start: span.start,
            end: span.end,
            text: text.chars().skip(span.start).take(span.len()).collect(),
            tally,
        };

        if net > best_endorsed {
            best_endorsed = net;
            summary.most_endorsed = Some(report());
        }
        if -net > best_rejected {
            best_rejected = -net;
            summary.most_rejected = Some(report());
        }
        if net == 0 && tally.total > best_contested {
            best_contested = tally.total;
            summary.most_contested = Some(report());
        }
    }

    summary
}

impl fmt::Display for SentimentSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} votes counted ({} up, {} down), {} discarded.",
            self.accepted_votes, self.up_votes, self.down_votes, self.discarded_votes
        )?;
        writeln!(
            f,
            "{} of {} characters highlighted.",
            self.highlighted_chars, self.text_chars
        )?;

        let lines = [
            ("Most endorsed", &self.most_endorsed),
            ("Most rejected", &self.most_rejected),
            ("Most contested", &self.most_contested),
        ];
        for (label, report) in lines {
            if let Some(report) = report {
                writeln!(
                    f,
                    "{}: \"{}\" [{}, {}) with {} up / {} down",
                    label, report.text, report.start, report.end, report.tally.up, report.tally.down
                )?;
            }
        }

        Ok(())
    }
}

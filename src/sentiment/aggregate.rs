use crate::models::{PositionTally, Vote};
use log::debug;
use std::collections::HashMap;

/// Expands every vote range into per-character tallies.
///
/// Votes that do not fit a text of `text_len` characters are skipped; they
/// never touch the tallies of valid votes.
pub fn aggregate(votes: &[Vote], text_len: usize) -> HashMap<usize, PositionTally> {
    let mut tallies: HashMap<usize, PositionTally> = HashMap::new();

    for vote in votes {
        if !vote.fits(text_len) {
            debug!(
                "Discarding vote [{}, {}] outside text of {} chars",
                vote.start_index, vote.end_index, text_len
            );
            continue;
        }

        for position in vote.start_index..=vote.end_index {
            tallies.entry(position).or_default().record(vote.direction);
        }
    }

    tallies
}

use crate::models::{UnknownDirection, Vote};
use chrono::{DateTime, Utc};
use log::warn;
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error(transparent)]
    UnknownDirection(#[from] UnknownDirection),
    #[error("negative {field} {value}")]
    NegativeIndex { field: &'static str, value: i64 },
    #[error("malformed votes payload: {0}")]
    Json(#[from] serde_json::Error),
}

/// A vote record as the backing store delivers it, direction still a string.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawVote {
    pub start_index: i64,
    pub end_index: i64,
    pub direction: String,
    #[serde(default)]
    pub id: Option<Uuid>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

fn index(field: &'static str, value: i64) -> Result<usize, IngestError> {
    usize::try_from(value).map_err(|_| IngestError::NegativeIndex { field, value })
}

impl TryFrom<RawVote> for Vote {
    type Error = IngestError;

    fn try_from(raw: RawVote) -> Result<Self, Self::Error> {
        Ok(Vote {
            start_index: index("startIndex", raw.start_index)?,
            end_index: index("endIndex", raw.end_index)?,
            direction: raw.direction.parse()?,
            id: raw.id,
            user_id: raw.user_id,
            created_at: raw.created_at,
        })
    }
}

/// Outcome of ingesting a batch: the usable votes plus each rejected record's
/// position in the input and the reason.
#[derive(Debug, Default)]
pub struct Ingested {
    pub votes: Vec<Vote>,
    pub rejected: Vec<(usize, IngestError)>,
}

pub fn ingest(raw_votes: Vec<RawVote>) -> Ingested {
    let mut ingested = Ingested::default();

    for (position, raw) in raw_votes.into_iter().enumerate() {
        match Vote::try_from(raw) {
            Ok(vote) => ingested.votes.push(vote),
            Err(e) => {
                warn!("Rejecting vote #{}: {}", position, e);
                ingested.rejected.push((position, e));
            }
        }
    }

    ingested
}

/// Parses a JSON array of raw votes. Only a malformed payload is an error;
/// individual bad records end up in [`Ingested::rejected`].
pub fn parse_votes(json: &str) -> Result<Ingested, IngestError> {
    let raw_votes: Vec<RawVote> = serde_json::from_str(json)?;
    Ok(ingest(raw_votes))
}

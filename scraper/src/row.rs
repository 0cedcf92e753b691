use crate::node::CellNode;
use serde::Serialize;

/// Rows with fewer cells than this are structurally incomplete.
pub const MIN_CELLS: usize = 5;

pub const SPOTIFY_BASE_URL: &str = "https://open.spotify.com";
pub const NOT_AVAILABLE: &str = "N/A";

const TRACK_PREFIX: &str = "../track/";
const ARTIST_PREFIX: &str = "../artist/";
const PAGE_EXTENSION: &str = ".html";

// Cell positions in a chart row. Column 3 is not used.
const RANK_CELL: usize = 0;
const MOVEMENT_CELL: usize = 1;
const TITLE_CELL: usize = 2;
const STREAMS_CELL: usize = 4;

/// One parsed chart entry. Field names double as the CSV header.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct ChartRow {
    #[serde(rename = "Rank")]
    pub rank: String,
    #[serde(rename = "Movement")]
    pub movement: String,
    #[serde(rename = "Artist")]
    pub artist: String,
    #[serde(rename = "Song")]
    pub song: String,
    #[serde(rename = "Streams")]
    pub streams: Option<u64>,
    #[serde(rename = "Spotify_URL")]
    pub spotify_url: String,
}

/// Why a table row did not produce a [`ChartRow`].
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum SkipReason {
    #[error("row has {found} cells, expected at least 5")]
    TooFewCells { found: usize },

    #[error("rank cell is empty")]
    EmptyRank,

    #[error("movement cell is empty")]
    EmptyMovement,

    #[error("streams value {0} does not fit in a 64-bit count")]
    StreamsOutOfRange(String),
}

impl SkipReason {
    /// Structural skips (ad rows, spacer rows) are expected and not worth a warning.
    pub fn is_structural(&self) -> bool {
        matches!(self, SkipReason::TooFewCells { .. })
    }
}

/// Turn one table row's cells into a chart entry, or say why it was skipped.
pub fn parse_row<N: CellNode>(cells: &[N]) -> Result<ChartRow, SkipReason> {
    if cells.len() < MIN_CELLS {
        return Err(SkipReason::TooFewCells { found: cells.len() });
    }

    let rank = cells[RANK_CELL].text_content();
    if rank.is_empty() {
        return Err(SkipReason::EmptyRank);
    }

    let movement = cells[MOVEMENT_CELL].text_content();
    if movement.is_empty() {
        return Err(SkipReason::EmptyMovement);
    }
    let movement = normalize_movement(&movement);

    let title_cell = &cells[TITLE_CELL];
    let (artist, song) = split_artist_song(&title_cell.text_content());

    let streams = parse_streams(&cells[STREAMS_CELL].text_content())?;

    let anchor = title_cell.first_anchor();
    let spotify_url = spotify_url(anchor.as_ref().and_then(|a| a.attribute("href")));

    Ok(ChartRow {
        rank,
        movement,
        artist,
        song,
        streams,
        spotify_url,
    })
}

/// `=` marks an unchanged position.
pub fn normalize_movement(raw: &str) -> String {
    if raw == "=" {
        "0".to_string()
    } else {
        raw.to_string()
    }
}

/// Split "Artist - Song" at the first hyphen only.
pub fn split_artist_song(combined: &str) -> (String, String) {
    match combined.split_once('-') {
        Some((artist, song)) => (artist.trim().to_string(), song.trim().to_string()),
        None => (combined.trim().to_string(), String::new()),
    }
}

/// Stream counts use commas as grouping separators. Anything that is not
/// purely digits after removing them (e.g. "N/A") has no count.
pub fn parse_streams(raw: &str) -> Result<Option<u64>, SkipReason> {
    let cleaned = raw.trim().replace(',', "");
    if cleaned.is_empty() || !cleaned.bytes().all(|b| b.is_ascii_digit()) {
        return Ok(None);
    }

    cleaned
        .parse::<u64>()
        .map(Some)
        .map_err(|_| SkipReason::StreamsOutOfRange(cleaned))
}

/// Map a relative kworb link ("../track/<id>.html", "../artist/<id>.html")
/// onto the matching open.spotify.com URL.
pub fn spotify_url(href: Option<&str>) -> String {
    let Some(href) = href else {
        return NOT_AVAILABLE.to_string();
    };

    let kind = if href.starts_with(TRACK_PREFIX) {
        "track"
    } else if href.starts_with(ARTIST_PREFIX) {
        "artist"
    } else {
        return NOT_AVAILABLE.to_string();
    };

    let last_segment = href.rsplit('/').next().unwrap_or(href);
    let id = last_segment
        .strip_suffix(PAGE_EXTENSION)
        .unwrap_or(last_segment);
    if id.is_empty() {
        return NOT_AVAILABLE.to_string();
    }

    format!("{}/{}/{}", SPOTIFY_BASE_URL, kind, id)
}

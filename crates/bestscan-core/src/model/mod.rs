//! Data model shared by the pipeline, the clients and the sinks.

pub(crate) mod de;
mod mode;
mod player;
mod row;
mod score;

pub use mode::GameMode;
pub use player::PlayerId;
pub use row::{RESULT_COLUMNS, ResultRow, SCORE_URL_BASE, score_link};
pub use score::{MapMetadata, PlayerProfile, RawScore};

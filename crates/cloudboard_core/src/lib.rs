//! Cloudboard core: the word-frequency pipeline, the session state machine
//! and the view model every render pass is drawn from.
pub mod analysis;
pub mod cloud;
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use analysis::{
    count_frequency, tokenize, top_n, truncate, AnalysisSummary, FrequencyAnalysis,
    FrequencyEntry, FrequencyTable, CHART_BARS, NO_DATA_SENTINEL, RECOMMENDED_MIN_WORDS,
    TABLE_ROWS, TRUNCATION_LIMIT,
};
pub use cloud::{cloud_words, CloudWord, CLOUD_MAX_WORDS};
pub use effect::Effect;
pub use msg::Msg;
pub use state::{AppState, StatusKind, StatusMessage, Tab};
pub use update::update;
pub use view_model::{AppViewModel, CloudView, InputStats, RenderInput};

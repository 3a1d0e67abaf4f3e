//! Highlight reel core: pure job simulation, catalog filtering and view-model helpers.
mod analytics;
mod catalog;
mod effect;
mod error;
mod job;
mod library;
mod msg;
mod settings;
mod simulate;
mod stage;
mod state;
mod update;
mod upload;
mod view_model;

pub use analytics::{summarize, top_by_views, CatalogStats, CategoryShare};
pub use catalog::{
    filter_catalog, format_count, seed_catalog, Category, CategoryFilter, HighlightRecord,
    Quality, RawHighlight,
};
pub use effect::Effect;
pub use error::CoreError;
pub use job::{Job, JobId, JobSeed, JobStatus, MAX_PROGRESS};
pub use library::{EmptyReason, HighlightRowView, LibraryState, LibraryViewModel};
pub use msg::Msg;
pub use settings::{
    AspectRatio, DetectionMode, ExtractionSettings, OutputFormat, OutputQuality, Settings,
    SimulationSettings,
};
pub use simulate::{tick, SimulationProfile, PROCESSING_STEP_MAX, UPLOAD_STEP_MAX};
pub use stage::StageTable;
pub use state::{seed_processing_jobs, QueueState};
pub use update::update;
pub use upload::{format_file_size, is_accepted_video, IncomingFile, ACCEPTED_EXTENSIONS};
pub use view_model::{IntakeStats, JobRowView, QueueViewModel, StatusCounts};

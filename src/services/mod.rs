//! 服务模块

pub mod analysis;
pub mod diary;
pub mod distribution;
pub mod export;
pub mod ranker;

pub use analysis::{AnalysisOutcome, AnalysisService, create_analysis_service};
pub use diary::{DiaryService, DiaryStore, EntryOrder, create_diary_service};
pub use distribution::{DistributionSummary, LabelShare, summarize};
pub use export::render_report;
pub use ranker::rank;

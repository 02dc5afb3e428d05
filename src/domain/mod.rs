/// Domain layer - core business models
///
/// These models are platform-agnostic and represent core business entities.
pub mod models;
pub mod phrases;
pub mod seed;

pub use models::{
    AIInsight, AgendaItem, AgendaItemStatus, ChatMessage, InsightType, Meeting, MeetingState,
    MeetingStatus, Participant, TranscriptItem,
};

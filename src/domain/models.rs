/// Domain models for the facilitation dashboard
///
/// These models represent core business entities and are platform-agnostic.
use serde::{Deserialize, Serialize};

/// Lifecycle status of a meeting session
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MeetingStatus {
    NotStarted,
    InProgress,
    Ended,
}

impl std::fmt::Display for MeetingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MeetingStatus::NotStarted => write!(f, "not_started"),
            MeetingStatus::InProgress => write!(f, "in_progress"),
            MeetingStatus::Ended => write!(f, "ended"),
        }
    }
}

/// Lifecycle status of a single agenda item
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AgendaItemStatus {
    NotStarted,
    InProgress,
    Completed,
}

/// Flavor of an AI-generated insight
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InsightType {
    Think,
    Reflect,
    Plan,
}

impl InsightType {
    /// All insight flavors, in a fixed order for uniform selection.
    pub const ALL: [InsightType; 3] = [InsightType::Think, InsightType::Reflect, InsightType::Plan];
}

impl std::fmt::Display for InsightType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InsightType::Think => write!(f, "think"),
            InsightType::Reflect => write!(f, "reflect"),
            InsightType::Plan => write!(f, "plan"),
        }
    }
}

/// Represents a meeting participant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Participant {
    pub id: i64,
    pub name: String,
    pub avatar: String,
}

impl Participant {
    pub fn new(id: i64, name: impl Into<String>, avatar: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            avatar: avatar.into(),
        }
    }
}

/// A scheduled discussion topic within a meeting
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgendaItem {
    pub id: i64,
    pub title: String,

    /// Planned duration in minutes.
    pub duration_minutes: u32,

    pub status: AgendaItemStatus,
}

impl AgendaItem {
    pub fn new(id: i64, title: impl Into<String>, duration_minutes: u32) -> Self {
        Self {
            id,
            title: title.into(),
            duration_minutes,
            status: AgendaItemStatus::NotStarted,
        }
    }
}

/// One message in an insight's chat thread
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: i64,
    pub sender: String,
    pub content: String,
    pub timestamp: String,
}

impl ChatMessage {
    /// Creates a new message with the id left for the store to assign.
    pub fn new(sender: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: 0,
            sender: sender.into(),
            content: content.into(),
            timestamp: display_timestamp(),
        }
    }
}

/// Label attached to synthesized insights and their chat replies.
pub const AI_AGENT: &str = "AI Facilitator";

/// An AI-generated commentary entry scoped to an agenda item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AIInsight {
    pub id: i64,
    pub content: String,
    pub insight_type: InsightType,
    pub timestamp: String,
    pub agenda_item_id: i64,

    /// Follow-up conversation with the originating agent. Grows via user
    /// replies; everything else on the insight is append-once.
    pub chat_thread: Vec<ChatMessage>,

    pub agent: String,
}

impl AIInsight {
    /// Creates a new insight with the id left for the store to assign.
    pub fn new(insight_type: InsightType, content: impl Into<String>, agenda_item_id: i64) -> Self {
        Self {
            id: 0,
            content: content.into(),
            insight_type,
            timestamp: display_timestamp(),
            agenda_item_id,
            chat_thread: Vec::new(),
            agent: AI_AGENT.to_string(),
        }
    }
}

/// One simulated utterance in the meeting transcript
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptItem {
    pub id: i64,

    /// Display name of the participant the line is attributed to.
    pub speaker: String,

    pub content: String,

    /// Wall-clock display stamp, not a sort key; append order is.
    pub timestamp: String,

    pub agenda_item_id: i64,

    /// Insight attached at creation time, if the tick produced one.
    pub insight: Option<AIInsight>,
}

impl TranscriptItem {
    /// Creates a new transcript entry with the id left for the store to assign.
    pub fn new(
        speaker: impl Into<String>,
        content: impl Into<String>,
        agenda_item_id: i64,
    ) -> Self {
        Self {
            id: 0,
            speaker: speaker.into(),
            content: content.into(),
            timestamp: display_timestamp(),
            agenda_item_id,
            insight: None,
        }
    }
}

/// Represents a meeting with its agenda, logs, and roster
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meeting {
    pub id: i64,
    pub title: String,
    pub description: String,

    /// Unix timestamps, set when the meeting starts and ends.
    pub start_time: Option<i64>,
    pub end_time: Option<i64>,

    pub agenda_items: Vec<AgendaItem>,
    pub transcript_items: Vec<TranscriptItem>,
    pub insights: Vec<AIInsight>,
    pub participants: Vec<Participant>,
}

impl Meeting {
    /// Creates a meeting with empty logs and every agenda item not started.
    pub fn new(
        id: i64,
        title: impl Into<String>,
        description: impl Into<String>,
        agenda_items: Vec<AgendaItem>,
        participants: Vec<Participant>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            start_time: None,
            end_time: None,
            agenda_items,
            transcript_items: Vec::new(),
            insights: Vec::new(),
            participants,
        }
    }

    /// Index of the agenda item currently in progress, if any.
    pub fn current_item_index(&self) -> Option<usize> {
        self.agenda_items
            .iter()
            .position(|item| item.status == AgendaItemStatus::InProgress)
    }
}

/// Per-session dashboard state driven by the meeting reducer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MeetingState {
    pub status: MeetingStatus,

    /// Elapsed display seconds, fed from the session clock.
    pub duration: u64,

    pub current_agenda_item_index: usize,
    pub error: Option<String>,
    pub is_loading: bool,
}

impl Default for MeetingState {
    fn default() -> Self {
        Self {
            status: MeetingStatus::NotStarted,
            duration: 0,
            current_agenda_item_index: 0,
            error: None,
            is_loading: false,
        }
    }
}

/// Wall-clock stamp used on transcript, insight, and chat entries.
pub fn display_timestamp() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}

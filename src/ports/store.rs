/// Meeting store port trait
///
/// The store is the single owner of meeting records for the process
/// lifetime; every mutation goes through a named operation here. Logs are
/// append-only: transcript entries and insights are never rewritten after
/// creation, and only an insight's chat thread grows afterwards.
use crate::domain::models::{
    AIInsight, AgendaItem, ChatMessage, Meeting, Participant, TranscriptItem,
};
use crate::error::Result;
use async_trait::async_trait;

/// Port trait for the meeting store
#[async_trait]
pub trait MeetingStorePort: Send + Sync {
    /// All meetings in seed order.
    async fn list_meetings(&self) -> Result<Vec<Meeting>>;

    async fn get_meeting(&self, meeting_id: i64) -> Result<Option<Meeting>>;

    /// Roster of a meeting. Errors when the meeting does not exist.
    async fn participants(&self, meeting_id: i64) -> Result<Vec<Participant>>;

    /// Agenda item at `index`, or `None` past the end of the agenda.
    async fn agenda_item(&self, meeting_id: i64, index: usize) -> Result<Option<AgendaItem>>;

    /// Append a transcript entry, assigning its id. An attached insight
    /// must already be stored via [`append_insight`](Self::append_insight).
    async fn append_transcript_item(
        &self,
        meeting_id: i64,
        item: TranscriptItem,
    ) -> Result<TranscriptItem>;

    /// Append an insight to the meeting's insight log, assigning its id.
    async fn append_insight(&self, meeting_id: i64, insight: AIInsight) -> Result<AIInsight>;

    /// Append a message to the chat thread of the insight with `insight_id`,
    /// assigning the message id. The copy attached to a transcript entry is
    /// kept in sync so both views show the same thread.
    async fn append_chat_message(
        &self,
        insight_id: i64,
        message: ChatMessage,
    ) -> Result<ChatMessage>;

    /// Advance the agenda: mark the item in progress completed and the next
    /// one in progress. With no item in progress yet, the first item starts.
    /// A no-op on the last item. Returns the index now in progress.
    async fn advance_agenda(&self, meeting_id: i64) -> Result<usize>;

    /// Record start and/or end timestamps (unix seconds). `None` leaves the
    /// corresponding field untouched.
    async fn set_meeting_times(
        &self,
        meeting_id: i64,
        start: Option<i64>,
        end: Option<i64>,
    ) -> Result<()>;
}

//! In-memory meeting store
//!
//! The dashboard's only store: meetings live for the process lifetime and
//! every mutation is a serialized read-modify-write over the collection.

use crate::domain::models::{
    AIInsight, AgendaItem, AgendaItemStatus, ChatMessage, Meeting, Participant, TranscriptItem,
};
use crate::domain::seed;
use crate::error::{AppError, Result};
use crate::ports::store::MeetingStorePort;
use async_trait::async_trait;
use std::sync::Mutex;

/// In-memory implementation of [`MeetingStorePort`]
pub struct InMemoryMeetingStore {
    meetings: Mutex<Vec<Meeting>>,
    next_id: Mutex<i64>,
}

impl InMemoryMeetingStore {
    /// Creates a store over the given meetings. Id assignment continues
    /// past the largest id present in the seed records.
    pub fn new(meetings: Vec<Meeting>) -> Self {
        let max_seed_id = meetings
            .iter()
            .flat_map(|meeting| {
                std::iter::once(meeting.id)
                    .chain(meeting.agenda_items.iter().map(|item| item.id))
                    .chain(meeting.participants.iter().map(|p| p.id))
            })
            .max()
            .unwrap_or(0);

        Self {
            meetings: Mutex::new(meetings),
            next_id: Mutex::new(max_seed_id),
        }
    }

    /// Creates a store populated with the demo seed meetings.
    pub fn with_seed_data() -> Self {
        Self::new(seed::demo_meetings())
    }

    fn next_id(&self) -> i64 {
        let mut id = self.next_id.lock().unwrap();
        *id += 1;
        *id
    }

    fn with_meeting_mut<T>(
        &self,
        meeting_id: i64,
        mutate: impl FnOnce(&mut Meeting) -> Result<T>,
    ) -> Result<T> {
        let mut meetings = self.meetings.lock().unwrap();
        let meeting = meetings
            .iter_mut()
            .find(|meeting| meeting.id == meeting_id)
            .ok_or_else(|| AppError::NotFound(format!("meeting {}", meeting_id)))?;
        mutate(meeting)
    }
}

#[async_trait]
impl MeetingStorePort for InMemoryMeetingStore {
    async fn list_meetings(&self) -> Result<Vec<Meeting>> {
        Ok(self.meetings.lock().unwrap().clone())
    }

    async fn get_meeting(&self, meeting_id: i64) -> Result<Option<Meeting>> {
        Ok(self
            .meetings
            .lock()
            .unwrap()
            .iter()
            .find(|meeting| meeting.id == meeting_id)
            .cloned())
    }

    async fn participants(&self, meeting_id: i64) -> Result<Vec<Participant>> {
        self.with_meeting_mut(meeting_id, |meeting| Ok(meeting.participants.clone()))
    }

    async fn agenda_item(&self, meeting_id: i64, index: usize) -> Result<Option<AgendaItem>> {
        self.with_meeting_mut(meeting_id, |meeting| {
            Ok(meeting.agenda_items.get(index).cloned())
        })
    }

    async fn append_transcript_item(
        &self,
        meeting_id: i64,
        mut item: TranscriptItem,
    ) -> Result<TranscriptItem> {
        item.id = self.next_id();
        self.with_meeting_mut(meeting_id, |meeting| {
            meeting.transcript_items.push(item.clone());
            Ok(item)
        })
    }

    async fn append_insight(&self, meeting_id: i64, mut insight: AIInsight) -> Result<AIInsight> {
        insight.id = self.next_id();
        self.with_meeting_mut(meeting_id, |meeting| {
            meeting.insights.push(insight.clone());
            Ok(insight)
        })
    }

    async fn append_chat_message(
        &self,
        insight_id: i64,
        mut message: ChatMessage,
    ) -> Result<ChatMessage> {
        message.id = self.next_id();

        let mut meetings = self.meetings.lock().unwrap();
        for meeting in meetings.iter_mut() {
            let Some(insight) = meeting
                .insights
                .iter_mut()
                .find(|insight| insight.id == insight_id)
            else {
                continue;
            };
            insight.chat_thread.push(message.clone());

            // The attached copy on a transcript entry mirrors the log entry.
            for item in meeting.transcript_items.iter_mut() {
                if let Some(attached) = item.insight.as_mut() {
                    if attached.id == insight_id {
                        attached.chat_thread.push(message.clone());
                    }
                }
            }
            return Ok(message);
        }

        Err(AppError::NotFound(format!("insight {}", insight_id)))
    }

    async fn advance_agenda(&self, meeting_id: i64) -> Result<usize> {
        self.with_meeting_mut(meeting_id, |meeting| {
            if meeting.agenda_items.is_empty() {
                return Err(AppError::InvalidState(format!(
                    "meeting {} has no agenda",
                    meeting_id
                )));
            }

            match meeting.current_item_index() {
                None => {
                    meeting.agenda_items[0].status = AgendaItemStatus::InProgress;
                    Ok(0)
                }
                Some(index) if index + 1 < meeting.agenda_items.len() => {
                    meeting.agenda_items[index].status = AgendaItemStatus::Completed;
                    meeting.agenda_items[index + 1].status = AgendaItemStatus::InProgress;
                    Ok(index + 1)
                }
                // Already on the last item; the agenda does not wrap.
                Some(index) => Ok(index),
            }
        })
    }

    async fn set_meeting_times(
        &self,
        meeting_id: i64,
        start: Option<i64>,
        end: Option<i64>,
    ) -> Result<()> {
        self.with_meeting_mut(meeting_id, |meeting| {
            if start.is_some() {
                meeting.start_time = start;
            }
            if end.is_some() {
                meeting.end_time = end;
            }
            Ok(())
        })
    }
}

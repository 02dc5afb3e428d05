//! Facilitator dashboard session
//!
//! One session per active dashboard: it owns the lifecycle state machine,
//! the display clock, and the mock content stream for the selected meeting,
//! and exposes the operations and derived views the presentation layer
//! consumes.

pub mod reducer;
pub(crate) mod simulator;
pub mod timer;
pub mod views;

use crate::adapters::backend::SimulatedFacilitationService;
use crate::adapters::random::ThreadRandom;
use crate::adapters::store::InMemoryMeetingStore;
use crate::config::MeetingConfig;
use crate::domain::models::{
    AIInsight, ChatMessage, Meeting, MeetingState, MeetingStatus, TranscriptItem,
};
use crate::domain::phrases;
use crate::error::{AppError, Result};
use crate::ports::backend::FacilitationServicePort;
use crate::ports::random::RandomPort;
use crate::ports::store::MeetingStorePort;
use crate::session::reducer::MeetingAction;
use crate::session::timer::MeetingTimer;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

/// Sender label for user-authored chat messages.
const USER_SENDER: &str = "You";

/// A live dashboard session bound to one selected meeting.
pub struct FacilitatorSession {
    store: Arc<dyn MeetingStorePort>,
    backend: Arc<dyn FacilitationServicePort>,
    random: Arc<dyn RandomPort>,
    config: MeetingConfig,
    state: Arc<Mutex<MeetingState>>,
    selected_meeting_id: i64,
    stream: Option<JoinHandle<()>>,
    timer: MeetingTimer,
}

impl FacilitatorSession {
    /// Open a session over the given ports, selecting `meeting_id`.
    pub async fn open(
        store: Arc<dyn MeetingStorePort>,
        backend: Arc<dyn FacilitationServicePort>,
        random: Arc<dyn RandomPort>,
        config: MeetingConfig,
        meeting_id: i64,
    ) -> Result<Self> {
        store
            .get_meeting(meeting_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("meeting {}", meeting_id)))?;

        Ok(Self {
            store,
            backend,
            random,
            config,
            state: Arc::new(Mutex::new(MeetingState::default())),
            selected_meeting_id: meeting_id,
            stream: None,
            timer: MeetingTimer::new(),
        })
    }

    /// Open a session over the demo seed data with the default adapters,
    /// selecting the first seeded meeting.
    pub async fn with_demo_data() -> Result<Self> {
        let store: Arc<dyn MeetingStorePort> = Arc::new(InMemoryMeetingStore::with_seed_data());
        let first = store
            .list_meetings()
            .await?
            .first()
            .map(|meeting| meeting.id)
            .ok_or_else(|| AppError::NotFound("seed meetings".to_string()))?;

        Self::open(
            store,
            Arc::new(SimulatedFacilitationService::default()),
            Arc::new(ThreadRandom),
            MeetingConfig::default(),
            first,
        )
        .await
    }

    /// Run one action through the state machine.
    pub async fn dispatch(&self, action: MeetingAction) {
        let mut state = self.state.lock().await;
        *state = reducer::reduce(&state, action);
    }

    /// Snapshot of the session state with the display clock folded in.
    pub async fn state(&self) -> MeetingState {
        let mut snapshot = self.state.lock().await.clone();
        snapshot.duration = self.timer.elapsed_secs();
        snapshot
    }

    pub fn config(&self) -> &MeetingConfig {
        &self.config
    }

    pub fn selected_meeting_id(&self) -> i64 {
        self.selected_meeting_id
    }

    /// Whether the content stream task is currently armed.
    pub fn is_streaming(&self) -> bool {
        self.stream
            .as_ref()
            .map(|handle| !handle.is_finished())
            .unwrap_or(false)
    }

    pub async fn meetings(&self) -> Result<Vec<Meeting>> {
        self.store.list_meetings().await
    }

    pub async fn selected_meeting(&self) -> Result<Meeting> {
        self.store
            .get_meeting(self.selected_meeting_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("meeting {}", self.selected_meeting_id)))
    }

    /// Start the selected meeting.
    ///
    /// Rejected while a start/stop is in flight or once the meeting has left
    /// `NotStarted`. On backend failure the error lands in the session state
    /// and the meeting stays startable.
    pub async fn start_meeting(&mut self) -> Result<()> {
        {
            let state = self.state.lock().await;
            if state.is_loading {
                return Err(AppError::InvalidState(
                    "a start or stop operation is already in flight".to_string(),
                ));
            }
            if state.status != MeetingStatus::NotStarted {
                return Err(AppError::InvalidState(format!(
                    "meeting cannot start from {}",
                    state.status
                )));
            }
        }

        self.dispatch(MeetingAction::SetLoading(true)).await;

        let meeting_id = self.selected_meeting_id;
        let outcome: Result<()> = async {
            self.backend.start_meeting(meeting_id).await?;
            self.store
                .set_meeting_times(meeting_id, Some(chrono::Utc::now().timestamp()), None)
                .await?;
            // Puts the first agenda item in progress.
            self.store.advance_agenda(meeting_id).await?;
            Ok(())
        }
        .await;

        match outcome {
            Ok(()) => {
                self.dispatch(MeetingAction::StartMeeting).await;
                self.timer.start();
                self.stream = Some(simulator::spawn(
                    meeting_id,
                    Arc::clone(&self.state),
                    Arc::clone(&self.store),
                    Arc::clone(&self.random),
                    self.config.clone(),
                ));
                log::info!("meeting {} started", meeting_id);
                Ok(())
            }
            Err(err) => {
                log::error!("failed to start meeting {}: {}", meeting_id, err);
                self.dispatch(MeetingAction::SetError(err.to_string())).await;
                Err(err)
            }
        }
    }

    /// End the selected meeting. Idempotent once ended.
    pub async fn end_meeting(&mut self) -> Result<()> {
        {
            let state = self.state.lock().await;
            if state.is_loading {
                return Err(AppError::InvalidState(
                    "a start or stop operation is already in flight".to_string(),
                ));
            }
            match state.status {
                MeetingStatus::Ended => return Ok(()),
                MeetingStatus::InProgress => {}
                MeetingStatus::NotStarted => {
                    return Err(AppError::InvalidState(
                        "meeting has not started".to_string(),
                    ));
                }
            }
        }

        self.dispatch(MeetingAction::SetLoading(true)).await;

        let meeting_id = self.selected_meeting_id;
        let outcome: Result<()> = async {
            self.backend.end_meeting(meeting_id).await?;
            self.store
                .set_meeting_times(meeting_id, None, Some(chrono::Utc::now().timestamp()))
                .await?;
            Ok(())
        }
        .await;

        match outcome {
            Ok(()) => {
                self.stop_stream();
                self.timer.stop();
                self.dispatch(MeetingAction::EndMeeting).await;
                log::info!("meeting {} ended", meeting_id);
                Ok(())
            }
            Err(err) => {
                log::error!("failed to end meeting {}: {}", meeting_id, err);
                self.dispatch(MeetingAction::SetError(err.to_string())).await;
                Err(err)
            }
        }
    }

    /// Move to the next agenda item. A no-op on the last item.
    pub async fn next_agenda_item(&self) -> Result<()> {
        let meeting = self.selected_meeting().await?;
        {
            let state = self.state.lock().await;
            if state.status != MeetingStatus::InProgress {
                return Err(AppError::InvalidState(
                    "agenda can only advance while the meeting is in progress".to_string(),
                ));
            }
            if state.current_agenda_item_index + 1 >= meeting.agenda_items.len() {
                log::debug!(
                    "meeting {} is already on its last agenda item",
                    meeting.id
                );
                return Ok(());
            }
        }

        self.store.advance_agenda(meeting.id).await?;
        self.dispatch(MeetingAction::NextAgendaItem).await;
        Ok(())
    }

    /// Ask the AI agent a follow-up question on one of its insights.
    /// Returns the agent's reply; both messages land on the chat thread.
    pub async fn ask_ai(&self, insight_id: i64, question: impl Into<String>) -> Result<ChatMessage> {
        if !self.config.features.ai_chat {
            return Err(AppError::FeatureDisabled("ai_chat"));
        }

        let question = question.into();
        if question.trim().is_empty() {
            return Err(AppError::InvalidInput("question must not be empty".to_string()));
        }

        let meeting = self.selected_meeting().await?;
        let insight = meeting
            .insights
            .iter()
            .find(|insight| insight.id == insight_id)
            .ok_or_else(|| AppError::NotFound(format!("insight {}", insight_id)))?;
        let topic = meeting
            .agenda_items
            .iter()
            .find(|item| item.id == insight.agenda_item_id)
            .map(|item| item.title.clone())
            .unwrap_or_else(|| meeting.title.clone());

        self.store
            .append_chat_message(insight_id, ChatMessage::new(USER_SENDER, question))
            .await?;

        let reply = ChatMessage::new(
            insight.agent.clone(),
            phrases::insight_line(self.random.as_ref(), &topic),
        );
        self.store.append_chat_message(insight_id, reply).await
    }

    /// Switch the dashboard to another meeting, resetting the session state
    /// and cancelling the running clock and content stream.
    pub async fn select_meeting(&mut self, meeting_id: i64) -> Result<()> {
        if !self.config.features.meeting_list {
            return Err(AppError::FeatureDisabled("meeting_list"));
        }
        if meeting_id == self.selected_meeting_id {
            return Ok(());
        }
        self.store
            .get_meeting(meeting_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("meeting {}", meeting_id)))?;

        self.stop_stream();
        self.timer = MeetingTimer::new();
        *self.state.lock().await = MeetingState::default();
        self.selected_meeting_id = meeting_id;
        log::info!("selected meeting {}", meeting_id);
        Ok(())
    }

    /// Transcript entries for the agenda item at the cursor.
    pub async fn current_transcript(&self) -> Result<Vec<TranscriptItem>> {
        let meeting = self.selected_meeting().await?;
        let cursor = self.state.lock().await.current_agenda_item_index;
        Ok(views::current_transcript(&meeting, cursor))
    }

    /// Insights for the agenda item at the cursor.
    pub async fn current_insights(&self) -> Result<Vec<AIInsight>> {
        let meeting = self.selected_meeting().await?;
        let cursor = self.state.lock().await.current_agenda_item_index;
        Ok(views::current_insights(&meeting, cursor))
    }

    /// Cancel the session's background tasks. Also runs on drop.
    pub fn shutdown(&mut self) {
        self.stop_stream();
        self.timer.stop();
    }

    fn stop_stream(&mut self) {
        if let Some(handle) = self.stream.take() {
            handle.abort();
        }
    }
}

impl Drop for FacilitatorSession {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::random::SeededRandom;
    use crate::domain::models::{AgendaItemStatus, InsightType};
    use crate::ports::backend::MockFacilitationServicePort;

    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    async fn settle() {
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
    }

    fn accepting_backend() -> MockFacilitationServicePort {
        let mut backend = MockFacilitationServicePort::new();
        backend.expect_start_meeting().returning(|_| Ok(()));
        backend.expect_end_meeting().returning(|_| Ok(()));
        backend
    }

    async fn session_with(
        backend: MockFacilitationServicePort,
    ) -> (FacilitatorSession, Arc<InMemoryMeetingStore>) {
        let store = Arc::new(InMemoryMeetingStore::with_seed_data());
        let session = FacilitatorSession::open(
            Arc::clone(&store) as Arc<dyn MeetingStorePort>,
            Arc::new(backend),
            Arc::new(SeededRandom::new(11)),
            MeetingConfig::default(),
            1,
        )
        .await
        .unwrap();
        (session, store)
    }

    #[tokio::test(start_paused = true)]
    async fn test_start_meeting_happy_path() {
        init_logging();
        let (mut session, store) = session_with(accepting_backend()).await;

        session.start_meeting().await.unwrap();

        let state = session.state().await;
        assert_eq!(state.status, MeetingStatus::InProgress);
        assert!(!state.is_loading);
        assert!(state.error.is_none());
        assert_eq!(state.current_agenda_item_index, 0);

        let meeting = store.get_meeting(1).await.unwrap().unwrap();
        assert!(meeting.start_time.is_some());
        assert_eq!(meeting.agenda_items[0].status, AgendaItemStatus::InProgress);

        assert!(session.is_streaming());
        settle().await;
        assert_eq!(session.current_transcript().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_second_start_rejected_while_loading() {
        init_logging();
        let (mut session, store) = session_with(MockFacilitationServicePort::new()).await;

        session.dispatch(MeetingAction::SetLoading(true)).await;
        let result = session.start_meeting().await;
        assert!(matches!(result, Err(AppError::InvalidState(_))));

        // No start side effects fired.
        let meeting = store.get_meeting(1).await.unwrap().unwrap();
        assert!(meeting.start_time.is_none());
        assert_eq!(meeting.agenda_items[0].status, AgendaItemStatus::NotStarted);
    }

    #[tokio::test(start_paused = true)]
    async fn test_start_twice_rejected_once_in_progress() {
        let (mut session, _store) = session_with(accepting_backend()).await;

        session.start_meeting().await.unwrap();
        let result = session.start_meeting().await;
        assert!(matches!(result, Err(AppError::InvalidState(_))));
    }

    #[tokio::test]
    async fn test_failed_start_records_error_and_allows_retry() {
        init_logging();
        let mut backend = MockFacilitationServicePort::new();
        let mut seq = mockall::Sequence::new();
        backend
            .expect_start_meeting()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Err(AppError::Service("backend unavailable".to_string())));
        backend
            .expect_start_meeting()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));

        let (mut session, store) = session_with(backend).await;

        let result = session.start_meeting().await;
        assert!(matches!(result, Err(AppError::Service(_))));

        let state = session.state().await;
        assert_eq!(state.status, MeetingStatus::NotStarted);
        assert!(!state.is_loading);
        assert!(state
            .error
            .as_deref()
            .unwrap()
            .contains("backend unavailable"));
        let meeting = store.get_meeting(1).await.unwrap().unwrap();
        assert!(meeting.start_time.is_none());

        // The fault is transient; retrying succeeds and clears the error.
        session.start_meeting().await.unwrap();
        let state = session.state().await;
        assert_eq!(state.status, MeetingStatus::InProgress);
        assert!(state.error.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_agenda_advance_stops_at_the_last_item() {
        let (mut session, store) = session_with(accepting_backend()).await;
        session.start_meeting().await.unwrap();

        for _ in 0..4 {
            session.next_agenda_item().await.unwrap();
        }

        let state = session.state().await;
        assert_eq!(state.current_agenda_item_index, 3);

        let meeting = store.get_meeting(1).await.unwrap().unwrap();
        assert!(meeting.agenda_items[..3]
            .iter()
            .all(|item| item.status == AgendaItemStatus::Completed));
        assert_eq!(meeting.agenda_items[3].status, AgendaItemStatus::InProgress);
    }

    #[tokio::test]
    async fn test_agenda_cannot_advance_before_start() {
        let (session, _store) = session_with(MockFacilitationServicePort::new()).await;
        let result = session.next_agenda_item().await;
        assert!(matches!(result, Err(AppError::InvalidState(_))));
    }

    #[tokio::test(start_paused = true)]
    async fn test_end_meeting_cancels_the_stream_and_is_idempotent() {
        init_logging();
        let (mut session, store) = session_with(accepting_backend()).await;

        session.start_meeting().await.unwrap();
        settle().await;
        session.end_meeting().await.unwrap();

        let state = session.state().await;
        assert_eq!(state.status, MeetingStatus::Ended);
        assert!(!session.is_streaming());

        let meeting = store.get_meeting(1).await.unwrap().unwrap();
        assert!(meeting.end_time.is_some());
        let entries = meeting.transcript_items.len();

        // No further ticks after the meeting ended.
        tokio::time::advance(session.config().update_interval).await;
        settle().await;
        let meeting = store.get_meeting(1).await.unwrap().unwrap();
        assert_eq!(meeting.transcript_items.len(), entries);

        session.end_meeting().await.unwrap();
        assert_eq!(session.state().await.status, MeetingStatus::Ended);
    }

    #[tokio::test(start_paused = true)]
    async fn test_select_meeting_resets_the_session() {
        let (mut session, _store) = session_with(accepting_backend()).await;
        session.start_meeting().await.unwrap();
        session.next_agenda_item().await.unwrap();

        session.select_meeting(2).await.unwrap();
        assert_eq!(session.selected_meeting_id(), 2);
        assert!(!session.is_streaming());
        assert_eq!(session.state().await, MeetingState::default());

        let result = session.select_meeting(99).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_ask_ai_appends_question_and_reply() {
        let (session, store) = session_with(MockFacilitationServicePort::new()).await;

        let insight = store
            .append_insight(
                1,
                AIInsight::new(InsightType::Plan, "Define the MVP first.", 11),
            )
            .await
            .unwrap();

        let reply = session
            .ask_ai(insight.id, "Which features are must-haves?")
            .await
            .unwrap();
        assert_eq!(reply.sender, insight.agent);

        let meeting = store.get_meeting(1).await.unwrap().unwrap();
        let thread = &meeting.insights[0].chat_thread;
        assert_eq!(thread.len(), 2);
        assert_eq!(thread[0].sender, USER_SENDER);
        assert_eq!(thread[0].content, "Which features are must-haves?");
        assert_eq!(thread[1].id, reply.id);
        assert!(thread[1].content.contains("Sprint Goal Discussion"));
    }

    #[tokio::test]
    async fn test_disabled_features_are_rejected() {
        let store = Arc::new(InMemoryMeetingStore::with_seed_data());
        let config = MeetingConfig {
            features: crate::config::SessionFeatures {
                meeting_list: false,
                ai_chat: false,
            },
            ..MeetingConfig::default()
        };
        let mut session = FacilitatorSession::open(
            store as Arc<dyn MeetingStorePort>,
            Arc::new(MockFacilitationServicePort::new()),
            Arc::new(SeededRandom::new(3)),
            config,
            1,
        )
        .await
        .unwrap();

        assert!(matches!(
            session.select_meeting(2).await,
            Err(AppError::FeatureDisabled("meeting_list"))
        ));
        assert!(matches!(
            session.ask_ai(1, "hello").await,
            Err(AppError::FeatureDisabled("ai_chat"))
        ));
    }

    #[tokio::test]
    async fn test_ask_ai_rejects_blank_questions() {
        let (session, _store) = session_with(MockFacilitationServicePort::new()).await;
        let result = session.ask_ai(1, "   ").await;
        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }
}

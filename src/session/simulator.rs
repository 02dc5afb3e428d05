//! Mock content stream
//!
//! Background task that narrates an in-progress meeting: one synthesized
//! transcript entry per interval for the agenda item at the cursor, with a
//! probabilistic AI insight attached. The task re-checks the session state
//! every tick and terminates as soon as the meeting is no longer live; the
//! session additionally aborts the handle for deterministic cancellation.

use crate::config::MeetingConfig;
use crate::domain::models::{AIInsight, InsightType, MeetingState, MeetingStatus, TranscriptItem};
use crate::domain::phrases;
use crate::error::{AppError, Result};
use crate::ports::random::RandomPort;
use crate::ports::store::MeetingStorePort;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

/// Spawn the content stream for a live meeting.
pub(crate) fn spawn(
    meeting_id: i64,
    state: Arc<Mutex<MeetingState>>,
    store: Arc<dyn MeetingStorePort>,
    random: Arc<dyn RandomPort>,
    config: MeetingConfig,
) -> JoinHandle<()> {
    tokio::spawn(run(meeting_id, state, store, random, config))
}

async fn run(
    meeting_id: i64,
    state: Arc<Mutex<MeetingState>>,
    store: Arc<dyn MeetingStorePort>,
    random: Arc<dyn RandomPort>,
    config: MeetingConfig,
) {
    log::info!("content stream started for meeting {}", meeting_id);

    // The first interval tick fires immediately, so entering a live meeting
    // produces an entry right away; the cadence follows from there.
    let mut ticks = tokio::time::interval(config.update_interval);

    loop {
        ticks.tick().await;

        let cursor = {
            let state = state.lock().await;
            if state.status != MeetingStatus::InProgress {
                break;
            }
            state.current_agenda_item_index
        };

        if let Err(e) = tick(meeting_id, cursor, store.as_ref(), random.as_ref(), &config).await {
            log::warn!("content tick for meeting {} skipped: {}", meeting_id, e);
        }
    }

    log::info!("content stream stopped for meeting {}", meeting_id);
}

/// Synthesize one transcript entry (and maybe an insight) for the agenda
/// item at `cursor`.
async fn tick(
    meeting_id: i64,
    cursor: usize,
    store: &dyn MeetingStorePort,
    random: &dyn RandomPort,
    config: &MeetingConfig,
) -> Result<()> {
    let Some(item) = store.agenda_item(meeting_id, cursor).await? else {
        // Agenda exhausted; nothing to narrate.
        return Ok(());
    };

    let participants = store.participants(meeting_id).await?;
    if participants.is_empty() {
        return Err(AppError::InvalidState(format!(
            "meeting {} has no participants",
            meeting_id
        )));
    }

    let speaker = &participants[random.pick_index(participants.len())];
    let mut entry = TranscriptItem::new(
        speaker.name.clone(),
        phrases::discussion_line(random, &item.title),
        item.id,
    );

    if random.chance(config.insight_probability) {
        let insight_type = InsightType::ALL[random.pick_index(InsightType::ALL.len())];
        let insight = AIInsight::new(
            insight_type,
            phrases::insight_line(random, &item.title),
            item.id,
        );
        let stored = store.append_insight(meeting_id, insight).await?;
        log::debug!(
            "attached {} insight {} to the next entry for meeting {}",
            stored.insight_type,
            stored.id,
            meeting_id
        );
        entry.insight = Some(stored);
    }

    store.append_transcript_item(meeting_id, entry).await?;
    Ok(())
}

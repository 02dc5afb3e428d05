//! Meeting lifecycle reducer
//!
//! The state machine behind the dashboard: a pure transition function over
//! [`MeetingState`]. Side effects (store updates, timers, the simulator)
//! belong to the session; the reducer only computes the next state.

use crate::domain::models::{MeetingState, MeetingStatus};

/// Actions accepted by the meeting state machine.
#[derive(Debug, Clone, PartialEq)]
pub enum MeetingAction {
    /// Enter `InProgress`. The caller has already stamped the meeting start
    /// time and put the first agenda item in progress.
    StartMeeting,

    /// Enter `Ended`. Tolerated when already ended. The caller stamps the
    /// meeting end time.
    EndMeeting,

    /// Record a user-visible operation failure. Status is untouched so the
    /// operation can be retried.
    SetError(String),

    /// Bracket an in-flight start/stop operation.
    SetLoading(bool),

    /// Move the agenda cursor forward. The call site guards against
    /// advancing past the last item and updates agenda statuses.
    NextAgendaItem,
}

/// Pure transition function: same `(state, action)` always yields the same
/// next state; no I/O, no panics.
pub fn reduce(state: &MeetingState, action: MeetingAction) -> MeetingState {
    let mut next = state.clone();
    match action {
        MeetingAction::StartMeeting => {
            next.status = MeetingStatus::InProgress;
            next.is_loading = false;
            next.error = None;
        }
        MeetingAction::EndMeeting => {
            next.status = MeetingStatus::Ended;
            next.is_loading = false;
            next.error = None;
        }
        MeetingAction::SetError(message) => {
            next.error = Some(message);
            next.is_loading = false;
        }
        MeetingAction::SetLoading(loading) => {
            next.is_loading = loading;
        }
        MeetingAction::NextAgendaItem => {
            next.current_agenda_item_index += 1;
        }
    }
    next
}

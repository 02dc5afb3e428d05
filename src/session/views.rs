//! Read-only projections over a meeting's logs
//!
//! Order-preserving filters; an out-of-range cursor yields empty views
//! rather than an error.

use crate::domain::models::{AIInsight, Meeting, TranscriptItem};

/// Transcript entries belonging to the agenda item at `cursor`, in append
/// order.
pub fn current_transcript(meeting: &Meeting, cursor: usize) -> Vec<TranscriptItem> {
    match meeting.agenda_items.get(cursor) {
        Some(item) => meeting
            .transcript_items
            .iter()
            .filter(|entry| entry.agenda_item_id == item.id)
            .cloned()
            .collect(),
        None => Vec::new(),
    }
}

/// Insights belonging to the agenda item at `cursor`, in append order.
pub fn current_insights(meeting: &Meeting, cursor: usize) -> Vec<AIInsight> {
    match meeting.agenda_items.get(cursor) {
        Some(item) => meeting
            .insights
            .iter()
            .filter(|insight| insight.agenda_item_id == item.id)
            .cloned()
            .collect(),
        None => Vec::new(),
    }
}

/// Shorten a transcript entry for list rendering. Entries at or under
/// `min_length` characters are shown whole.
pub fn preview(content: &str, min_length: usize) -> String {
    if content.chars().count() <= min_length {
        content.to_string()
    } else {
        let clipped: String = content.chars().take(min_length).collect();
        format!("{}…", clipped.trim_end())
    }
}

//! Demo seed data
//!
//! The in-memory store starts from these records; nothing here survives the
//! process.

use crate::domain::models::{AgendaItem, Meeting, Participant};

const AVATAR_PLACEHOLDER: &str = "/placeholder.svg?height=32&width=32";

/// The demo roster shared by both seed meetings.
pub fn demo_participants() -> Vec<Participant> {
    vec![
        Participant::new(1, "John Doe", AVATAR_PLACEHOLDER),
        Participant::new(2, "Jane Smith", AVATAR_PLACEHOLDER),
        Participant::new(3, "Mike Johnson", AVATAR_PLACEHOLDER),
        Participant::new(4, "Emily Brown", AVATAR_PLACEHOLDER),
        Participant::new(5, "Alex Lee", AVATAR_PLACEHOLDER),
    ]
}

/// The two demo meetings the dashboard boots with.
pub fn demo_meetings() -> Vec<Meeting> {
    let participants = demo_participants();

    vec![
        Meeting::new(
            1,
            "Sprint Planning",
            "Plan the upcoming two-week sprint and assign tasks",
            vec![
                AgendaItem::new(11, "Sprint Goal Discussion", 15),
                AgendaItem::new(12, "Backlog Refinement", 30),
                AgendaItem::new(13, "Task Estimation", 30),
                AgendaItem::new(14, "Capacity Planning", 15),
            ],
            participants.clone(),
        ),
        Meeting::new(
            2,
            "Product Roadmap Review",
            "Quarterly review of the product roadmap and upcoming features",
            vec![
                AgendaItem::new(21, "Q1 Recap", 20),
                AgendaItem::new(22, "Q2 Goals and OKRs", 25),
                AgendaItem::new(23, "Feature Prioritization", 30),
                AgendaItem::new(24, "Resource Allocation", 15),
            ],
            participants,
        ),
    ]
}

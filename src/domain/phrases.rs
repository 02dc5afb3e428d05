//! Canned commentary pools for the mock content stream
//!
//! Two independent template tables: discussion lines attributed to
//! participants, and insight lines attributed to the AI agent. Selection is
//! uniform through the injected randomness port; rendering substitutes the
//! agenda topic into the chosen template.

use crate::ports::random::RandomPort;

/// Placeholder replaced by the agenda item title.
pub const TOPIC_PLACEHOLDER: &str = "{topic}";

/// Fixed template pools for synthesized meeting commentary
pub struct PhrasePools;

impl PhrasePools {
    /// Discussion commentary attributed to participants.
    pub fn discussion() -> &'static [&'static str] {
        &[
            "For {topic}, we need to consider the impact on our current sprint velocity.",
            "I suggest we break down {topic} into smaller, more manageable tasks.",
            "We should prioritize {topic} based on its potential ROI and alignment with our quarterly goals.",
            "Let's discuss any potential blockers or dependencies for {topic}.",
            "We might need additional resources or expertise to complete {topic} effectively.",
            "I propose we use the MoSCoW method to prioritize the features within {topic}.",
            "We should consider the technical debt implications of {topic}.",
            "For {topic}, let's ensure we have clear acceptance criteria defined.",
        ]
    }

    /// Insight commentary attributed to the AI agent.
    pub fn insight() -> &'static [&'static str] {
        &[
            "Based on the discussion around {topic}, there seems to be a need for more cross-team collaboration. Consider scheduling a workshop to align all stakeholders.",
            "The complexity of {topic} might be underestimated. It's recommended to conduct a technical spike to better understand the implementation challenges.",
            "There's a potential risk of scope creep in {topic}. Suggest clearly defining the MVP and creating a separate backlog for future enhancements.",
            "The team's velocity might be impacted by {topic}. Consider adjusting the sprint commitment or allocating additional resources to maintain productivity.",
            "{topic} presents an opportunity for improving our CI/CD pipeline. Recommend investigating automation possibilities to streamline the delivery process.",
            "Based on previous similar tasks, {topic} might benefit from pair programming to ensure knowledge sharing and code quality.",
            "The discussion around {topic} indicates a need for user research. Consider conducting user interviews or A/B testing to validate assumptions.",
            "To mitigate risks associated with {topic}, it's advisable to create a detailed implementation plan with clear milestones and checkpoints.",
        ]
    }
}

/// Render one discussion line for the given agenda topic.
pub fn discussion_line(random: &dyn RandomPort, topic: &str) -> String {
    render(PhrasePools::discussion(), random, topic)
}

/// Render one insight line for the given agenda topic.
pub fn insight_line(random: &dyn RandomPort, topic: &str) -> String {
    render(PhrasePools::insight(), random, topic)
}

fn render(pool: &[&str], random: &dyn RandomPort, topic: &str) -> String {
    let template = pool[random.pick_index(pool.len())];
    template.replace(TOPIC_PLACEHOLDER, topic)
}

//! Narrative interpretation of construct bands, keyed by employer tier.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::aggregate::{Band, SessionAggregate};
use super::constructs::{construct_name, AJL, CCD, CIL, CVL, ERL, ICI, MSD, SCL};
use super::domain::ConstructCode;
use super::environment::{EmployerBand, EnvironmentClass};

/// Per construct: employer tier (Core, Standard, Advanced) by applicant band (Low, Moderate, High).
const FEEDBACK: &[(&str, [[&str; 3]; 3])] = &[
    (
        SCL,
        [
            [
                "Performs best when expectations, workflows, and success criteria are explicitly defined. Work feels manageable when procedures are documented and consistently applied. Effectiveness depends on having clear reference points and minimal ambiguity.",
                "Can operate with partial clarity when basic structure is present. Some ambiguity is manageable if boundaries and priorities are still recognizable. Performance remains stable when guardrails exist.",
                "Rigid structures may feel constraining rather than supportive. Clearly defined processes can be experienced as limiting autonomy. The environment may feel overly controlled or slow.",
            ],
            [
                "Benefits from structure but does not require complete definition to function. Can tolerate evolving expectations if changes are communicated. Adjustment occurs gradually rather than immediately.",
                "Interprets goals independently and fills in missing details as needed. Does not require constant clarification to proceed. Operates effectively within loosely defined structures.",
                "Naturally reshapes or challenges existing processes. May push against formal systems that feel unnecessary. Tends to redefine structure rather than follow it as designed.",
            ],
            [
                "Ambiguity is likely to feel destabilizing. Lack of clarity may reduce confidence in decision-making. Effectiveness depends on structure that advanced environments often do not provide.",
                "Can function in ambiguous conditions with sustained effort. May experience friction when expectations remain undefined for long periods. Performance is possible but requires energy to maintain.",
                "Interprets vague goals without distress. Builds structure where none exists and defines success independently. Operates comfortably in environments with minimal guidance.",
            ],
        ],
    ),
    (
        CCD,
        [
            [
                "Prefers deliberate pacing and sequential decision-making. Time to analyze information supports accuracy and confidence. Fast decision cycles are not required to be effective.",
                "Can handle time pressure when it is occasional. Performs well when urgency is bounded and predictable. Sustained speed may feel taxing.",
                "May feel underutilized by slower environments. Decision cycles can feel unnecessarily drawn out. The pace may limit engagement.",
            ],
            [
                "Requires time to process information before acting. Can adapt to faster demands with planning and support. Performance remains stable when expectations are clear.",
                "Balances speed and accuracy effectively. Processes information efficiently without sacrificing judgment. Well-matched to environments with moderate urgency.",
                "Operates quickly and often anticipates next steps. Rapid decision-making feels natural and sustainable. Can handle compressed timelines with minimal strain.",
            ],
            [
                "Rapid decision cycles may feel overwhelming. Processing speed may not match environmental demands. Risk of cognitive overload increases.",
                "Can keep pace with fast environments but at a cost. Cognitive fatigue may accumulate over time. Recovery becomes important for sustainability.",
                "Synthesizes information rapidly under pressure. Makes confident decisions with limited data. Sustains effectiveness in highly compressed environments.",
            ],
        ],
    ),
    (
        CIL,
        [
            [
                "Functions best with straightforward, well-scoped tasks. Linear problems are easier to manage. Ambiguity is minimized.",
                "Can manage layered problems with guidance. Benefits from frameworks that reduce ambiguity. Complexity is manageable when structured.",
                "May feel under-challenged by simple tasks. Limited complexity can reduce engagement. Problem-solving opportunities feel constrained.",
            ],
            [
                "Handles routine complexity without difficulty. Deep ambiguity may be avoided when possible. Preference leans toward clarity.",
                "Integrates multiple factors comfortably. Can navigate competing demands without excessive strain. Complexity feels engaging rather than overwhelming.",
                "Actively engages with ambiguous problem spaces. Enjoys solving non-obvious challenges. Complexity is stimulating.",
            ],
            [
                "High ambiguity may lead to confusion. Competing variables can feel destabilizing. Disengagement risk increases.",
                "Can perform effectively with complex demands. Requires recovery time after sustained integration. Effort remains high.",
                "Navigates ambiguity fluidly. Integrates competing demands with ease. Thrives in complex, ill-defined environments.",
            ],
        ],
    ),
    (
        CVL,
        [
            [
                "Performs best with predictable conditions. Stability supports confidence and focus. Change is minimal.",
                "Can tolerate occasional change. Adjustment occurs with time and communication. Stability remains important.",
                "Highly stable environments may feel constraining. Limited change can reduce stimulation. Restlessness may emerge.",
            ],
            [
                "Needs time to adjust to change. Remains effective once adaptation occurs. Sudden shifts may slow momentum.",
                "Adapts to change without sustained distress. Flexibility is balanced with consistency. Well-matched to evolving environments.",
                "Handles frequent change smoothly. Recalibration happens quickly. Change is integrated into daily work.",
            ],
            [
                "Constant shifts may feel overwhelming. Predictability is limited. Stress can accumulate quickly.",
                "Can adapt to frequent change with effort. Cumulative stress may occur. Recovery becomes important.",
                "Change is energizing rather than disruptive. Rapid shifts are expected and managed. Thrives in dynamic environments.",
            ],
        ],
    ),
    (
        ERL,
        [
            [
                "Performs best in emotionally safe environments. Pressure is limited and manageable. Stress recovery is quick.",
                "Can manage stress with recovery time. Emotional demands are tolerable when spaced. Sustained pressure may tax resilience.",
                "Comfortable under pressure. May feel under-challenged in low-stress settings. Emotional intensity is manageable.",
            ],
            [
                "Benefits from support during high-pressure periods. Stress can temporarily disrupt performance. Recovery aids stability.",
                "Maintains composure under stress. Emotional regulation is consistent. Well-matched to moderate pressure.",
                "Sustains performance under prolonged pressure. Emotional demands are navigated effectively. Stress does not significantly impair function.",
            ],
            [
                "Risk of burnout increases. Emotional load may exceed capacity. Regulation becomes difficult.",
                "Can function under pressure with intentional recovery. Emotional strain accumulates over time. Sustainability requires support.",
                "Maintains regulation under sustained pressure. High stakes are manageable. Thrives in demanding emotional environments.",
            ],
        ],
    ),
    (
        MSD,
        [
            [
                "Engagement is sustained through predictability. Task completion provides satisfaction. Motivation remains steady.",
                "Enjoys growth within clear boundaries. Progress reinforces engagement. Motivation is stable.",
                "Low challenge may reduce engagement. Boredom can emerge. Sustained motivation may decline.",
            ],
            [
                "Requires external reinforcement to stay engaged. Motivation fluctuates without feedback. Support enhances consistency.",
                "Balanced motivation through progress and recognition. Engagement is sustainable. Work feels meaningful.",
                "Self-directed and growth-oriented. Challenge fuels engagement. Motivation is internally sustained.",
            ],
            [
                "Struggles to sustain engagement. High demands may drain motivation. Disengagement risk increases.",
                "Maintains engagement when purpose is clear. Motivation requires alignment with impact. Ambiguity can weaken drive.",
                "Energized by ownership and challenge. Engagement deepens over time. Motivation is resilient.",
            ],
        ],
    ),
    (
        ICI,
        [
            [
                "Prefers limited interaction. Clear roles reduce friction. Social demands are minimal.",
                "Comfortable with routine collaboration. Communication is functional. Interaction is manageable.",
                "High social demands may feel constraining. Excess coordination can be draining. Focus may suffer.",
            ],
            [
                "Works best within defined team structures. Interaction is predictable. Boundaries support effectiveness.",
                "Communicates and collaborates effectively. Coordination feels natural. Well-aligned to team-based work.",
                "Actively facilitates alignment. Engages in discussion and negotiation. Social complexity is manageable.",
            ],
            [
                "Risk of isolation increases. Misalignment may occur. Coordination demands may exceed comfort.",
                "Can navigate relationships with effort. Interpersonal demands require energy. Effectiveness is possible.",
                "Influences and negotiates across boundaries. Coordination is fluid. Thrives in relationally complex environments.",
            ],
        ],
    ),
    (
        AJL,
        [
            [
                "Prefers clear authority and direction. Decision-making feels secure with guidance. Independence is limited.",
                "Takes initiative within defined limits. Judgment is applied cautiously. Oversight supports confidence.",
                "May feel constrained by oversight. Limited autonomy can frustrate decision-making. Independence is desired.",
            ],
            [
                "Needs guidance to remain effective. Decision ownership is limited. Support structures are important.",
                "Balances autonomy and support effectively. Judgment is exercised appropriately. Well-aligned to role demands.",
                "Operates confidently with independence. Ownership feels natural. Accountability is manageable.",
            ],
            [
                "High risk of decision paralysis. Ambiguity can stall action. Support is insufficient.",
                "Can perform with support structures. Judgment improves with experience. Autonomy is partially manageable.",
                "Exercises judgment and ownership consistently. Accountability is embraced. Optimal alignment with advanced environments.",
            ],
        ],
    ),
];

const fn tier_index(tier: EmployerBand) -> usize {
    match tier {
        EmployerBand::Core => 0,
        EmployerBand::Standard => 1,
        EmployerBand::Advanced => 2,
    }
}

const fn band_index(band: Band) -> usize {
    match band {
        Band::Low => 0,
        Band::Moderate => 1,
        Band::High => 2,
    }
}

pub fn feedback_for(construct: &str, tier: EmployerBand, band: Band) -> Option<&'static str> {
    FEEDBACK
        .iter()
        .find(|(code, _)| code.eq_ignore_ascii_case(construct))
        .map(|(_, table)| table[tier_index(tier)][band_index(band)])
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstructFeedback {
    pub construct: ConstructCode,
    pub name: Option<String>,
    pub score: f64,
    pub band: Band,
    pub tier: EmployerBand,
    pub observed: bool,
    pub feedback: String,
}

/// Interpret every construct of a session against the role's environment class.
pub fn build_feedback(
    aggregate: &SessionAggregate,
    environment: EnvironmentClass,
) -> BTreeMap<ConstructCode, ConstructFeedback> {
    let tier = environment.tier();
    aggregate
        .averages
        .iter()
        .map(|(construct, average)| {
            let band = Band::from_average(*average);
            let feedback = feedback_for(construct.as_str(), tier, band)
                .map(str::to_string)
                .unwrap_or_else(|| {
                    format!(
                        "No feedback available for {} / {} / {}",
                        construct,
                        tier.label(),
                        band.label()
                    )
                });
            let entry = ConstructFeedback {
                construct: construct.clone(),
                name: construct_name(construct.as_str()).map(str::to_string),
                score: (average * 100.0).round() / 100.0,
                band,
                tier,
                observed: aggregate.counts.get(construct).copied().unwrap_or(0) > 0,
                feedback,
            };
            (construct.clone(), entry)
        })
        .collect()
}

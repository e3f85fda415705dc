//! Built-in item content.
//!
//! Employer items are four-option ordinal scales over the role's environmental load; option
//! `n` (1-based, authored order) scores `n` on [`ENV`]. Applicant items carry hand-authored
//! partial credit over the eight applicant constructs.

use crate::assessment::constructs::{AJL, CCD, CIL, CVL, ENV, ERL, ICI, MSD, SCL};
use crate::assessment::domain::ItemId;

use super::source::{RawItem, RawOption};

type Credit = &'static [(&'static str, i64)];

const EMPLOYER_ITEMS: &[(ItemId, &str, [&str; 4])] = &[
    (
        1,
        "Role Structure\nHow clearly defined are expectations, processes, and success criteria for this role?",
        [
            "Very clearly defined, little interpretation needed",
            "Mostly defined with some flexibility",
            "Broad goals, methods vary",
            "Largely undefined, requires self-direction",
        ],
    ),
    (
        2,
        "Change Frequency\nHow often do priorities, tools, or expectations shift for this role?",
        ["Rarely", "Occasionally", "Frequently", "Constantly"],
    ),
    (
        3,
        "Autonomy Level\nHow much independence does this role have in making day-to-day decisions?",
        [
            "Very little, decisions are directed",
            "Some independence within guidelines",
            "High independence with accountability",
            "Nearly full autonomy",
        ],
    ),
    (
        4,
        "Interpersonal Exposure\nHow much interaction with coworkers, clients, or customers is required?",
        [
            "Minimal interaction",
            "Regular internal interaction",
            "Frequent collaboration or customer contact",
            "Constant interaction or relationship management",
        ],
    ),
    (
        5,
        "Pace & Pressure\nHow would you describe the typical pace and performance pressure of this role?",
        [
            "Steady and predictable",
            "Periodic high-pressure moments",
            "Consistently fast-paced",
            "High pressure with tight timelines",
        ],
    ),
    (
        6,
        "Error Impact\nIf a mistake occurs, what is the typical impact?",
        [
            "Minimal, easily corrected",
            "Noticeable but manageable",
            "Costly or disruptive",
            "Severe consequences (safety, legal, financial)",
        ],
    ),
    (
        7,
        "Feedback Style\nHow is performance feedback typically delivered in this role?",
        [
            "Infrequent and informal",
            "Regular but structured",
            "Frequent and direct",
            "Continuous, real-time feedback",
        ],
    ),
    (
        8,
        "Team Dependence\nHow dependent is success in this role on coordination with others?",
        [
            "Mostly independent",
            "Some coordination required",
            "Strong reliance on team workflows",
            "Highly interdependent",
        ],
    ),
    (
        9,
        "Learning Curve\nHow quickly is someone expected to become effective in this role?",
        [
            "Gradual, extended onboarding",
            "Moderate learning period",
            "Short ramp-up expected",
            "Immediate effectiveness required",
        ],
    ),
    (
        10,
        "Role Risk Profile\nOverall, how would you characterize the risk level of this role?",
        [
            "Low risk, limited downstream impact",
            "Moderate risk",
            "High risk affecting others or outcomes",
            "Very high risk requiring strong judgment",
        ],
    ),
    (
        11,
        "Task Variety\nHow varied are the tasks in this role?",
        [
            "Highly repetitive, same tasks daily",
            "Some variation with predictable patterns",
            "Many varied tasks requiring adaptation",
            "Constantly changing, diverse responsibilities",
        ],
    ),
    (
        12,
        "Decision Complexity\nHow complex are the decisions required in this role?",
        [
            "Simple, routine decisions",
            "Moderate complexity, occasionally challenging",
            "Complex decisions affecting outcomes",
            "Highly complex, strategic decisions with significant consequences",
        ],
    ),
    (
        13,
        "Communication Style\nHow formal or structured is communication in this role?",
        [
            "Very formal, following strict protocols",
            "Mostly formal with occasional flexibility",
            "Semi-formal, adaptable depending on context",
            "Informal, highly flexible, and situational",
        ],
    ),
    (
        14,
        "Supervision Level\nHow closely is performance monitored?",
        [
            "Direct and frequent supervision",
            "Moderate oversight, regular check-ins",
            "Occasional supervision, autonomy encouraged",
            "Minimal supervision, self-directed",
        ],
    ),
    (
        15,
        "Problem-Solving Approach\nWhat type of problem-solving is most common in this role?",
        [
            "Clear procedures to follow",
            "Some discretion with guidance",
            "Requires independent analysis and judgment",
            "High-level strategic problem-solving",
        ],
    ),
    (
        16,
        "Collaboration Requirement\nHow much collaboration is essential for success?",
        [
            "Rarely collaborate",
            "Collaborate occasionally",
            "Frequent collaboration",
            "Constant collaboration across multiple stakeholders",
        ],
    ),
    (
        17,
        "Innovation Expectation\nHow much innovation or creativity is expected in this role?",
        [
            "Very little, mostly routine tasks",
            "Some creative input encouraged",
            "Significant creative problem-solving expected",
            "Continuous innovation is critical",
        ],
    ),
    (
        18,
        "Workload Predictability\nHow predictable is the workload?",
        [
            "Very predictable, structured schedule",
            "Mostly predictable with occasional fluctuations",
            "Often unpredictable, requires adaptation",
            "Constantly unpredictable, dynamic workload",
        ],
    ),
    (
        19,
        "Leadership Exposure\nHow often does this role require influencing or leading others?",
        [
            "Rarely, individual contributor",
            "Occasionally, minor influence",
            "Frequently, leads small teams/projects",
            "Constantly, significant leadership responsibility",
        ],
    ),
    (
        20,
        "Performance Measurement\nHow is success primarily measured in this role?",
        [
            "Task completion, clear metrics",
            "Combination of metrics and qualitative feedback",
            "Results-oriented, often measured by outcomes",
            "Strategic impact, broad organizational influence",
        ],
    ),
];

const APPLICANT_ITEMS: &[(ItemId, &str, &[(&str, Credit)])] = &[
    (
        1,
        "Which would frustrate you more over time?",
        &[
            ("Clear expectations with little flexibility", &[(SCL, 3), (AJL, 1)]),
            ("Flexible expectations with unclear boundaries", &[(SCL, 2), (CVL, 3)]),
        ],
    ),
    (
        2,
        "When starting a new task, you usually prefer to:",
        &[
            ("Understand the full process before beginning", &[(SCL, 3), (CCD, 1)]),
            ("Start and adjust as you go", &[(SCL, 2), (CCD, 3)]),
        ],
    ),
    (
        3,
        "Which environment feels more comfortable?",
        &[
            ("Clear rules and procedures", &[(SCL, 3), (MSD, 1)]),
            ("Rules evolve based on situations", &[(SCL, 2), (CVL, 3)]),
        ],
    ),
    (
        4,
        "You receive vague instructions for a task. What do you do first?",
        &[
            ("Ask clarifying questions", &[(SCL, 3), (AJL, 1)]),
            ("Make an initial decision and proceed", &[(SCL, 2), (AJL, 3)]),
        ],
    ),
    (
        5,
        "Which statement feels closer to you?",
        &[
            ("I like knowing exactly what success looks like", &[(SCL, 3), (MSD, 1)]),
            ("I like defining success as you work", &[(SCL, 2), (MSD, 3)]),
        ],
    ),
    (
        6,
        "When faced with a tight deadline and limited information, you are more likely to:",
        &[
            ("Decide quickly and refine later", &[(CCD, 3), (AJL, 2)]),
            ("Slow down to reduce uncertainty", &[(CCD, 2), (ERL, 2)]),
        ],
    ),
    (
        7,
        "You\u{2019}re solving a problem others find confusing. Your instinct is to:",
        &[
            ("Break it down step by step", &[(CCD, 2), (CIL, 2)]),
            ("Look for a pattern or shortcut", &[(CCD, 3), (AJL, 2)]),
        ],
    ),
    (
        8,
        "Which feels more natural?",
        &[
            ("Making decisions based on careful analysis", &[(CCD, 2), (CIL, 3)]),
            ("Making decisions based on experience and intuition", &[(CCD, 3), (AJL, 2)]),
        ],
    ),
    (
        9,
        "If new information contradicts your original plan, you tend to:",
        &[
            ("Adjust quickly", &[(CIL, 2), (CVL, 3)]),
            ("Reevaluate entire approach", &[(CIL, 3), (CCD, 2)]),
        ],
    ),
    (
        10,
        "Which situation is more mentally draining?",
        &[
            ("Too many options", &[(CCD, 3), (CVL, 2)]),
            ("Too few options", &[(CCD, 2), (MSD, 2)]),
        ],
    ),
    (
        11,
        "When plans change unexpectedly, your first internal reaction is usually:",
        &[
            ("Brief frustration, then focus", &[(CVL, 2), (ERL, 3)]),
            ("Immediate problem-solving", &[(CVL, 3), (AJL, 2)]),
            ("Lingering stress", &[(CVL, 3), (ERL, 3)]),
        ],
    ),
    (
        12,
        "Under pressure, you tend to become:",
        &[
            ("More focused", &[(ERL, 2), (CVL, 2)]),
            ("More cautious", &[(ERL, 2), (AJL, 2)]),
            ("More reactive", &[(ERL, 3), (CVL, 3)]),
        ],
    ),
    (
        13,
        "After a stressful workday, you typically:",
        &[
            ("Recover quickly", &[(ERL, 2), (MSD, 2)]),
            ("Need time alone", &[(ERL, 3), (ICI, 2)]),
            ("Continue thinking", &[(ERL, 3), (CCD, 2)]),
        ],
    ),
    (
        14,
        "When something goes wrong that you didn\u{2019}t cause, you usually:",
        &[
            ("Accept it and move forward", &[(ERL, 2), (CVL, 2)]),
            ("Feel irritated but adjust", &[(ERL, 3), (CVL, 2)]),
            ("Feel unsettled until it\u{2019}s resolved", &[(ERL, 3), (CVL, 3)]),
        ],
    ),
    (
        15,
        "Which statement fits better?",
        &[
            ("Stress sharpens my performance", &[(ERL, 2), (MSD, 3)]),
            ("Stress slows my performance", &[(ERL, 3), (CVL, 2)]),
        ],
    ),
    (
        16,
        "Rank what motivates you most at work (pick the top choice):",
        &[
            ("Freedom in how I work", &[(MSD, 3), (AJL, 3)]),
            ("Improving my skills", &[(MSD, 2), (CIL, 2)]),
            ("Being recognized for results", &[(MSD, 1), (ICI, 2)]),
        ],
    ),
    (
        17,
        "Which would feel more draining long-term?",
        &[
            ("Repetitive tasks", &[(MSD, 1), (CVL, 1)]),
            ("Unclear expectations", &[(MSD, 2), (SCL, 2)]),
            ("Constant evaluation", &[(MSD, 3), (ERL, 3)]),
        ],
    ),
    (
        18,
        "You feel most satisfied at work when:",
        &[
            ("You\u{2019}ve mastered something difficult", &[(MSD, 3), (CIL, 3)]),
            ("You\u{2019}ve completed tasks efficiently", &[(MSD, 1), (CCD, 2)]),
            ("Others notice your contribution", &[(MSD, 2), (ICI, 2)]),
        ],
    ),
    (
        19,
        "Which role sounds more appealing?",
        &[
            ("One with independence and responsibility", &[(SCL, 3), (AJL, 3)]),
            ("One with guidance and support", &[(SCL, 2), (MSD, 2)]),
        ],
    ),
    (
        20,
        "When starting a new role, what matters most early on?",
        &[
            ("Feeling competent", &[(MSD, 1), (CCD, 2)]),
            ("Feeling trusted", &[(MSD, 3), (AJL, 3)]),
            ("Feeling acknowledged", &[(MSD, 2), (ICI, 2)]),
        ],
    ),
    (
        21,
        "During a disagreement at work, you usually:",
        &[
            ("Defend your position clearly", &[(ICI, 3), (AJL, 2)]),
            ("Ask questions to understand", &[(ICI, 2), (CIL, 2)]),
            ("Step back and revisit later", &[(ICI, 1), (ERL, 2)]),
        ],
    ),
    (
        22,
        "If a teammate is struggling, you are more likely to:",
        &[
            ("Offer help directly", &[(ICI, 3), (MSD, 2)]),
            ("Give them space", &[(ICI, 1), (ERL, 2)]),
            ("Inform a supervisor", &[(ICI, 2), (AJL, 2)]),
        ],
    ),
    (
        23,
        "Which feels more uncomfortable?",
        &[
            ("Giving direct feedback", &[(ICI, 3), (ERL, 2)]),
            ("Receiving direct feedback", &[(ICI, 1), (ERL, 2)]),
        ],
    ),
    (
        24,
        "In group settings, you tend to:",
        &[
            ("Speak up early", &[(ICI, 3), (AJL, 2)]),
            ("Listen first, then contribute", &[(ICI, 2), (CIL, 2)]),
            ("Speak only when needed", &[(ICI, 1), (ERL, 2)]),
        ],
    ),
    (
        25,
        "When working with others, what matters most to you?",
        &[
            ("Clear roles", &[(ICI, 1), (SCL, 3)]),
            ("Mutual respect", &[(ICI, 2), (ERL, 2)]),
            ("Efficient outcomes", &[(ICI, 3), (CCD, 3)]),
        ],
    ),
    (
        26,
        "When expectations are unclear, which approach feels more natural?",
        &[
            ("Creating your own structure", &[(SCL, 3), (AJL, 2)]),
            ("Waiting until direction is clarified", &[(SCL, 2), (AJL, 1)]),
        ],
    ),
    (
        27,
        "When faced with a complex problem, you prefer to:",
        &[
            ("Simplify it as quickly as possible", &[(CCD, 3), (CIL, 2)]),
            ("Fully understand all variables first", &[(CCD, 2), (CIL, 3)]),
        ],
    ),
    (
        28,
        "If you\u{2019}re unsure about a decision, you\u{2019}re more likely to:",
        &[
            ("Trust your judgment", &[(CCD, 3), (AJL, 2)]),
            ("Seek additional input", &[(CCD, 2), (ICI, 2)]),
        ],
    ),
    (
        29,
        "Under sustained pressure, you usually:",
        &[
            ("Maintain steady performance", &[(CVL, 2), (ERL, 3)]),
            ("Perform well, then fatigue", &[(CVL, 3), (ERL, 2)]),
            ("Struggle to maintain focus", &[(CVL, 3), (ERL, 3)]),
        ],
    ),
    (
        30,
        "You\u{2019}re more motivated by:",
        &[
            ("Challenging work", &[(MSD, 3), (CIL, 3)]),
            ("Predictable success", &[(MSD, 1), (ERL, 2)]),
        ],
    ),
    (
        31,
        "In discussions, you usually focus on:",
        &[
            ("Getting your point across", &[(ICI, 3), (AJL, 2)]),
            ("Reaching shared understanding", &[(ICI, 1), (CIL, 2)]),
        ],
    ),
    (
        32,
        "When evaluating multiple solutions, you prefer:",
        &[
            ("The most efficient solution", &[(CCD, 3), (MSD, 2)]),
            ("The most thorough solution", &[(CCD, 2), (MSD, 3)]),
        ],
    ),
    (
        33,
        "You\u{2019}re given a goal with competing priorities. What do you do first?",
        &[
            ("Clarify priorities before acting", &[(SCL, 3), (CCD, 2)]),
            ("Start with the most urgent item", &[(SCL, 2), (CCD, 3)]),
        ],
    ),
    (
        34,
        "When guidelines conflict, you tend to:",
        &[
            ("Follow the most recent guidance", &[(SCL, 3), (AJL, 1)]),
            ("Use judgment to reconcile", &[(SCL, 2), (AJL, 3)]),
        ],
    ),
    (
        35,
        "When a solution works but feels inelegant, you prefer to:",
        &[
            ("Improve it", &[(CCD, 2), (MSD, 3)]),
            ("Keep it if it works", &[(CCD, 3), (MSD, 2)]),
        ],
    ),
    (
        36,
        "Faced with a novel problem, you rely more on:",
        &[
            ("Prior examples", &[(CCD, 2), (CIL, 2)]),
            ("First-principles reasoning", &[(CCD, 3), (CIL, 3)]),
        ],
    ),
    (
        37,
        "During prolonged uncertainty, your stress level typically:",
        &[
            ("Stabilizes", &[(CVL, 2), (ERL, 3)]),
            ("Gradually increases", &[(CVL, 3), (ERL, 2)]),
        ],
    ),
    (
        38,
        "When outcomes are out of your control, you focus on:",
        &[
            ("Influencing what you can", &[(CVL, 3), (AJL, 2)]),
            ("Waiting for clarity", &[(CVL, 2), (ERL, 2)]),
        ],
    ),
    (
        39,
        "You\u{2019}re more energized by roles that offer:",
        &[
            ("Impact and ownership", &[(MSD, 3), (AJL, 3)]),
            ("Clear expectations and continuity", &[(MSD, 1), (SCL, 3)]),
        ],
    ),
    (
        40,
        "If progress is slow but meaningful, you feel:",
        &[
            ("Patient and committed", &[(MSD, 1), (ERL, 2)]),
            ("Restless and disengaged", &[(MSD, 3), (CVL, 3)]),
        ],
    ),
    (
        41,
        "When alignment is missing across teams, you tend to:",
        &[
            ("Push for alignment", &[(ICI, 3), (AJL, 3)]),
            ("Adjust locally", &[(ICI, 1), (CVL, 2)]),
        ],
    ),
    (
        42,
        "In high-stakes discussions, you value more:",
        &[
            ("Precision", &[(ICI, 1), (CCD, 3)]),
            ("Rapport", &[(ICI, 3), (ERL, 2)]),
        ],
    ),
    (
        43,
        "A key assumption proves wrong late in a project. What\u{2019}s your first move?",
        &[
            ("Adjust and continue", &[(CIL, 2), (AJL, 3)]),
            ("Reassess the plan", &[(CIL, 3), (CCD, 2)]),
            ("Escalate for input", &[(CIL, 3), (ICI, 3)]),
        ],
    ),
    (
        44,
        "After you communicate the change, a stakeholder reacts negatively. You:",
        &[
            ("Clarify reasoning", &[(CIL, 2), (ICI, 3)]),
            ("Listen and adapt", &[(CIL, 3), (ERL, 2)]),
            ("Pause and regroup", &[(CIL, 3), (CVL, 2)]),
        ],
    ),
    (
        45,
        "With time short, you prioritize:",
        &[
            ("Delivery", &[(CCD, 3), (MSD, 2)]),
            ("Accuracy", &[(CCD, 2), (CIL, 3)]),
        ],
    ),
    (
        46,
        "I\u{2019}m comfortable acting without full clarity.",
        &[
            ("Agree", &[(AJL, 3), (CCD, 2)]),
            ("Disagree", &[(AJL, 1), (ERL, 2)]),
        ],
    ),
    (
        47,
        "I prefer clear direction before proceeding.",
        &[
            ("Agree", &[(AJL, 1), (SCL, 3)]),
            ("Disagree", &[(AJL, 3), (CVL, 2)]),
        ],
    ),
    (
        48,
        "When a team misses a target, you first:",
        &[
            ("Review the system", &[(AJL, 3), (CIL, 3)]),
            ("Review individual actions", &[(AJL, 1), (ICI, 2)]),
        ],
    ),
    (
        49,
        "When delegating, you focus on:",
        &[
            ("Outcomes", &[(AJL, 3), (MSD, 2)]),
            ("Methods", &[(AJL, 1), (SCL, 3)]),
        ],
    ),
    (
        50,
        "When authority and expertise conflict, you defer to:",
        &[
            ("Expertise", &[(AJL, 3), (CIL, 3)]),
            ("Authority", &[(AJL, 1), (SCL, 3)]),
        ],
    ),
];

pub fn employer_items() -> Vec<RawItem> {
    EMPLOYER_ITEMS
        .iter()
        .map(|(id, prompt, choices)| RawItem {
            id: *id,
            prompt: prompt.to_string(),
            options: choices
                .iter()
                .zip(1i64..)
                .map(|(text, ordinal)| RawOption {
                    text: text.to_string(),
                    scores: [(ENV.to_string(), ordinal)].into_iter().collect(),
                })
                .collect(),
        })
        .collect()
}

pub fn applicant_items() -> Vec<RawItem> {
    APPLICANT_ITEMS
        .iter()
        .map(|(id, prompt, options)| RawItem {
            id: *id,
            prompt: prompt.to_string(),
            options: options
                .iter()
                .map(|(text, credit)| RawOption {
                    text: text.to_string(),
                    scores: credit
                        .iter()
                        .map(|(code, value)| (code.to_string(), *value))
                        .collect(),
                })
                .collect(),
        })
        .collect()
}

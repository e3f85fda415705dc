//! Construct codes used by the built-in banks.
//!
//! Aggregation treats codes as opaque strings; only the environment mapper and the
//! feedback table need to know these by name.

pub const SCL: &str = "SCL";
pub const CCD: &str = "CCD";
pub const CIL: &str = "CIL";
pub const CVL: &str = "CVL";
pub const ERL: &str = "ERL";
pub const MSD: &str = "MSD";
pub const ICI: &str = "ICI";
pub const AJL: &str = "AJL";

/// Single construct scored by every employer option (role environmental load).
pub const ENV: &str = "ENV";

const GLOSSARY: &[(&str, &str)] = &[
    (SCL, "Structural Clarity Load"),
    (CCD, "Cognitive Compression Demand"),
    (CIL, "Complexity Integration Load"),
    (CVL, "Change Volatility Load"),
    (ERL, "Emotional Regulation Load"),
    (MSD, "Motivational Sustainment Demand"),
    (ICI, "Interpersonal Coordination Intensity"),
    (AJL, "Autonomy & Judgment Load"),
    (ENV, "Role Environmental Load"),
];

pub fn construct_name(code: &str) -> Option<&'static str> {
    GLOSSARY
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(code))
        .map(|(_, name)| *name)
}

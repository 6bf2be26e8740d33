//! Resume Analyzer — keyword match of resume text against a position's skill vocabulary.
//!
//! Pure and deterministic: the same text and position always yield the same result.
//!
//! Algorithm:
//! 1. Sanitize: runs of non-ASCII code points become a single space
//! 2. Match: case-insensitive whole-word search for required ++ preferred terms
//! 3. Normalize: trim + title case each occurrence
//! 4. Experience: first "<n>[+] year(s)" mention, else 0
//! 5. Score: required coverage × 100 + preferred coverage × 20, clamped to [0, 100]

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::positions::PositionConfig;
use crate::screening::text::{sanitize, title_case};
use crate::screening::ScreeningError;

/// Maximum number of distinct skills reported back to the caller.
pub const MAX_REPORTED_SKILLS: usize = 8;

const BASE_WEIGHT: f64 = 100.0;
const BONUS_WEIGHT: f64 = 20.0;

static EXPERIENCE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)([0-9]+)\s*\+?\s*years?").unwrap());

/// Outcome of a single resume analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Distinct title-cased skills in order of first mention, at most 8.
    pub skills: Vec<String>,
    /// Years of experience stated in the resume, 0 when absent.
    pub experience: u32,
    /// Compatibility score in [0, 100], one decimal place.
    pub resume_score: f64,
    /// One entry per required-skill mention, spelled as configured.
    pub required_matches: Vec<String>,
    /// One entry per preferred-skill mention, spelled as configured.
    pub preferred_matches: Vec<String>,
}

impl AnalysisResult {
    fn empty() -> Self {
        Self {
            skills: vec![],
            experience: 0,
            resume_score: 0.0,
            required_matches: vec![],
            preferred_matches: vec![],
        }
    }
}

/// Analyzes resume text against a position.
///
/// Fails only when the position itself is malformed (a blank skill entry).
/// Empty text is valid input and yields a zero result.
pub fn analyze(text: &str, position: &PositionConfig) -> Result<AnalysisResult, ScreeningError> {
    if let Some(list) = position.blank_skill_list() {
        return Err(ScreeningError::Config(format!(
            "{list} contain an empty entry"
        )));
    }

    if text.is_empty() {
        return Ok(AnalysisResult::empty());
    }

    let sanitized = sanitize(text);
    let pattern = vocabulary_pattern(position)?;

    let normalized: Vec<String> = match &pattern {
        Some(re) => re
            .find_iter(&sanitized)
            .filter(|m| is_standalone(&sanitized, m.start(), m.end()))
            .map(|m| title_case(m.as_str().trim()))
            .collect(),
        None => vec![],
    };

    let experience = extract_experience(&sanitized);

    let required_matches = classify(&normalized, &position.required_skills);
    let preferred_matches = classify(&normalized, &position.preferred_skills);

    let resume_score = compute_score(
        required_matches.len(),
        position.required_skills.len(),
        preferred_matches.len(),
        position.preferred_skills.len(),
    );

    let skills = distinct_skills(normalized);

    debug!(
        skills = skills.len(),
        required = required_matches.len(),
        preferred = preferred_matches.len(),
        experience,
        resume_score,
        "Resume analyzed"
    );

    Ok(AnalysisResult {
        skills,
        experience,
        resume_score,
        required_matches,
        preferred_matches,
    })
}

/// Builds one alternation over the whole vocabulary, required terms first.
/// Returns `None` when the position has no skills at all.
fn vocabulary_pattern(position: &PositionConfig) -> Result<Option<Regex>, ScreeningError> {
    let terms: Vec<String> = position
        .required_skills
        .iter()
        .chain(position.preferred_skills.iter())
        .map(|term| bounded_term(term))
        .collect();

    if terms.is_empty() {
        return Ok(None);
    }

    RegexBuilder::new(&terms.join("|"))
        .case_insensitive(true)
        .build()
        .map(Some)
        .map_err(|e| ScreeningError::Config(format!("Skill vocabulary is not matchable: {e}")))
}

/// Escapes a term and anchors it on word boundaries. `\b` is only emitted on
/// an edge that is itself a word character; punctuated edges such as the end
/// of "C++" are checked by `is_standalone` after matching.
fn bounded_term(term: &str) -> String {
    let lead = if term.bytes().next().is_some_and(is_word_byte) {
        r"\b"
    } else {
        ""
    };
    let trail = if term.bytes().last().is_some_and(is_word_byte) {
        r"\b"
    } else {
        ""
    };
    format!("{lead}{}{trail}", regex::escape(term))
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// A match only counts when the characters on either side of it are
/// non-word characters or string edges. `text` is sanitized ASCII, so byte
/// offsets are character offsets.
fn is_standalone(text: &str, start: usize, end: usize) -> bool {
    let bytes = text.as_bytes();
    let before = start.checked_sub(1).map(|i| bytes[i]);
    let after = bytes.get(end).copied();
    !before.is_some_and(is_word_byte) && !after.is_some_and(is_word_byte)
}

fn extract_experience(text: &str) -> u32 {
    let Some(digits) = EXPERIENCE_RE.captures(text).and_then(|caps| caps.get(1)) else {
        return 0;
    };
    digits.as_str().parse::<u32>().unwrap_or_else(|e| {
        debug!("Ignoring experience figure '{}': {e}", digits.as_str());
        0
    })
}

/// Keeps every normalized mention whose title-cased form matches a configured
/// skill, reported with the configured spelling.
fn classify(normalized: &[String], skills: &[String]) -> Vec<String> {
    let canonical: Vec<(String, &String)> = skills
        .iter()
        .map(|s| (title_case(s.trim()), s))
        .collect();

    normalized
        .iter()
        .filter_map(|found| {
            canonical
                .iter()
                .find(|(key, _)| key == found)
                .map(|(_, configured)| (*configured).clone())
        })
        .collect()
}

/// Required coverage is worth up to 100, preferred coverage adds up to 20.
/// The sum is clamped to [0, 100] and rounded half away from zero to one decimal.
fn compute_score(
    required_found: usize,
    required_total: usize,
    preferred_found: usize,
    preferred_total: usize,
) -> f64 {
    let base = if required_total == 0 {
        0.0
    } else {
        required_found as f64 / required_total as f64 * BASE_WEIGHT
    };
    let bonus = if preferred_total == 0 {
        0.0
    } else {
        preferred_found as f64 / preferred_total as f64 * BONUS_WEIGHT
    };

    let total = (base + bonus).clamp(0.0, 100.0);
    (total * 10.0).round() / 10.0
}

fn distinct_skills(normalized: Vec<String>) -> Vec<String> {
    let mut skills: Vec<String> = Vec::new();
    for skill in normalized {
        if skills.len() == MAX_REPORTED_SKILLS {
            break;
        }
        if !skills.contains(&skill) {
            skills.push(skill);
        }
    }
    skills
}

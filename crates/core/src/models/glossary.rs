use serde::Serialize;

/// One entry of the static crypto glossary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GlossaryTerm {
    pub term: &'static str,
    pub explanation: &'static str,
}

/// A single canned suggestion tip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SuggestionTip {
    pub title: &'static str,
    pub body: &'static str,
}

/// The placeholder "AI" answer: a greeting, a few tips and a disclaimer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Suggestions {
    pub greeting: &'static str,
    pub tips: &'static [SuggestionTip],
    pub disclaimer: &'static str,
}

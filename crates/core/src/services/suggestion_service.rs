use crate::models::glossary::{SuggestionTip, Suggestions};

const TIPS: &[SuggestionTip] = &[
    SuggestionTip {
        title: "Consider Diversification",
        body: "If your portfolio is concentrated in one or two coins, exploring other promising projects in different sectors (like DeFi or Web3 infrastructure) could be beneficial.",
    },
    SuggestionTip {
        title: "Review High Performers",
        body: "If some assets have grown significantly, you might think about rebalancing by taking some profits and reinvesting in other assets or stablecoins.",
    },
    SuggestionTip {
        title: "Learn More",
        body: "Keep an eye on market trends and continue learning about new technologies in the crypto space.",
    },
];

static SUGGESTIONS: Suggestions = Suggestions {
    greeting: "Hello Criptonauta! Based on a general analysis (this is a prototype), here are a few ideas:",
    tips: TIPS,
    disclaimer: "Remember: These are general suggestions for prototype purposes. Always do your own research (DYOR) before making investment decisions.",
};

/// Placeholder for the suggestions assistant: always returns the same canned
/// answer. There is no model behind it.
pub struct SuggestionService;

impl SuggestionService {
    pub fn new() -> Self {
        Self
    }

    pub fn suggestions(&self) -> &'static Suggestions {
        &SUGGESTIONS
    }
}

impl Default for SuggestionService {
    fn default() -> Self {
        Self::new()
    }
}

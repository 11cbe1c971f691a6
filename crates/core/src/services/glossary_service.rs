use crate::models::glossary::GlossaryTerm;

const GLOSSARY: &[GlossaryTerm] = &[
    GlossaryTerm {
        term: "Staking",
        explanation: "Locking up your crypto assets for a period to support a blockchain network and earn rewards.",
    },
    GlossaryTerm {
        term: "Farming (Yield Farming)",
        explanation: "Lending or staking crypto assets to generate high returns or rewards in the form of additional cryptocurrency.",
    },
    GlossaryTerm {
        term: "Halving",
        explanation: "A process that reduces the rate at which new cryptocurrencies are created. For Bitcoin, it happens approximately every four years.",
    },
    GlossaryTerm {
        term: "Blockchain",
        explanation: "A decentralized, distributed, and immutable digital ledger that records transactions across many computers.",
    },
    GlossaryTerm {
        term: "DeFi (Decentralized Finance)",
        explanation: "Financial services built on blockchain technology that operate without traditional intermediaries.",
    },
    GlossaryTerm {
        term: "NFT (Non-Fungible Token)",
        explanation: "A unique digital asset representing ownership of real-world items like art, video clips, or even real estate, recorded on a blockchain.",
    },
    GlossaryTerm {
        term: "Smart Contract",
        explanation: "A self-executing contract with the terms of the agreement directly written into code. They run on a blockchain, automatically executing when conditions are met.",
    },
    GlossaryTerm {
        term: "Gas Fees",
        explanation: "Fees paid by users to compensate for the computing energy required to process and validate transactions on a blockchain, like Ethereum.",
    },
];

/// Static crypto glossary with case-insensitive text search.
pub struct GlossaryService;

impl GlossaryService {
    pub fn new() -> Self {
        Self
    }

    /// Every term, in display order.
    pub fn terms(&self) -> &'static [GlossaryTerm] {
        GLOSSARY
    }

    /// Terms whose name or explanation contains `query` (case-insensitive).
    /// A blank query returns the whole glossary.
    pub fn search(&self, query: &str) -> Vec<&'static GlossaryTerm> {
        let q = query.trim().to_lowercase();
        GLOSSARY
            .iter()
            .filter(|t| {
                q.is_empty()
                    || t.term.to_lowercase().contains(&q)
                    || t.explanation.to_lowercase().contains(&q)
            })
            .collect()
    }
}

impl Default for GlossaryService {
    fn default() -> Self {
        Self::new()
    }
}

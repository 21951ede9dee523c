//! Static page copy.
//!
//! Everything here is fixed at compile time. The code snippets are display
//! text only and are never compiled or executed.

use serde::Serialize;

/// Identifies one explanation card in the technical section.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionId {
    BridgeArchitecture,
    ValidatorConsensus,
    SecurityModel,
    TokenMechanics,
}

impl SectionId {
    /// All cards in display order.
    pub const ALL: [SectionId; 4] = [
        SectionId::BridgeArchitecture,
        SectionId::ValidatorConsensus,
        SectionId::SecurityModel,
        SectionId::TokenMechanics,
    ];

    /// Stable slug used to build element ids.
    pub fn slug(&self) -> &'static str {
        match self {
            SectionId::BridgeArchitecture => "bridge-architecture",
            SectionId::ValidatorConsensus => "validator-consensus",
            SectionId::SecurityModel => "security-model",
            SectionId::TokenMechanics => "token-mechanics",
        }
    }
}

/// One explanation card: heading, prose, and an illustrative snippet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Section {
    pub id: SectionId,
    pub title: &'static str,
    pub content: &'static str,
    pub code_snippet: &'static str,
}

pub static SECTIONS: [Section; 4] = [
    Section {
        id: SectionId::BridgeArchitecture,
        title: "BRIDGE ARCHITECTURE",
        content: "Production-ready bridge using Anchor framework on Solana and Foundry contracts on BNB Chain. Validators monitor both chains simultaneously, detecting lock/burn events and submitting cryptographic proofs. No centralized custodians - all assets secured by multi-signature validator consensus.",
        code_snippet: r#"// Actual Solana program structure
#[program]
pub mod bnb_solana_bridge {
    pub fn bridge_from_bnb(
        ctx: Context<BridgeFromBnb>,
        amount: u64,
        bnb_tx_hash: [u8; 32],
        validator_signatures: Vec<[u8; 64]>,
    ) -> Result<()>
}"#,
    },
    Section {
        id: SectionId::ValidatorConsensus,
        title: "VALIDATOR CONSENSUS",
        content: "Rust-based validator nodes run 400ms polling loops on both chains. When tokens are locked on BNB Chain, validators sign the event and submit proofs to Solana. Multi-signature threshold (configurable, default 2/3) ensures security. Validators stake reputation and can be slashed for malicious behavior.",
        code_snippet: r#"// Real validator implementation
pub struct BridgeValidator {
    solana_client: Arc<RpcClient>,
    bnb_provider: Arc<Provider<Http>>,
    validator_keypair: Arc<Keypair>,
}

async fn monitor_bnb_locks(&self) -> Result<()> {
    // Detect lock events and submit to Solana
}"#,
    },
    Section {
        id: SectionId::SecurityModel,
        title: "SECURITY MODEL",
        content: "Replay attack prevention using processed transaction tracking. Each BNB transaction can only mint once on Solana. Emergency pause mechanism allows governance to halt bridge during incidents. All validator signatures verified on-chain. Open source code enables community audits.",
        code_snippet: r#"// Replay protection
#[account]
pub struct ProcessedTx {
    pub is_processed: bool,
    pub bnb_tx_hash: [u8; 32],
    pub timestamp: i64,
}"#,
    },
    Section {
        id: SectionId::TokenMechanics,
        title: "TOKEN MECHANICS",
        content: "BEP-20 tokens locked in BNB smart contract trigger SPL token minting on Solana via Program Derived Addresses (PDAs). Burning SPL tokens emits events that validators sign to unlock original tokens on BNB Chain. 1:1 peg maintained through cryptographic proofs, not price oracles.",
        code_snippet: r#"// Token bridge flow
pub fn bridge_to_bnb(
    ctx: Context<BridgeToBnb>,
    amount: u64,
    bnb_recipient: [u8; 20],
) -> Result<()> {
    token::burn(cpi_ctx, amount)?;
    emit!(BridgeToBnbEvent { ... });
    Ok(())
}"#,
    },
];

/// Look up a card by id.
pub fn section(id: SectionId) -> &'static Section {
    // SECTIONS is declared in SectionId::ALL order
    &SECTIONS[id as usize]
}

/// A labelled outbound or in-page link.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Link {
    pub label: &'static str,
    pub href: &'static str,
}

impl Link {
    /// In-page anchors start with `#` and never open a new tab.
    pub fn is_anchor(&self) -> bool {
        self.href.starts_with('#')
    }
}

/// Anchor id of the technical explanation section.
pub const TECHNICAL_ANCHOR: &str = "technical";
/// Anchor id of the repository section.
pub const REPOSITORY_ANCHOR: &str = "repository";

pub struct HeroContent {
    pub title: &'static str,
    /// The line typed out by the hero typewriter.
    pub typed_line: &'static str,
    pub logo_alt: &'static str,
    /// `(label, value)` pairs for the system message box.
    pub system_message: [(&'static str, &'static str); 2],
    pub status_label: &'static str,
    pub status_value: &'static str,
    pub primary_cta: &'static str,
    pub secondary_cta: &'static str,
}

pub static HERO: HeroContent = HeroContent {
    title: "BNB × SOLANA",
    typed_line: "> INITIALIZING BNB-SOLANA BRIDGE PROTOCOL...",
    logo_alt: "BNB Logo",
    system_message: [
        ("SYSTEM MESSAGE", "Following directive from @aeyakovenko"),
        ("OBJECTIVE", "Fork BNB Chain and deploy on Solana infrastructure"),
    ],
    status_label: "STATUS",
    status_value: "PROTOCOL ACTIVE",
    primary_cta: "VIEW TECHNICAL SPECS",
    secondary_cta: "ACCESS REPOSITORY",
};

pub const TECHNICAL_HEADING: &str = "HOW IT WORKS";
pub const TECHNICAL_SUBHEADING: &str = "Production bridge architecture and implementation";

/// A headline figure in the performance card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Metric {
    pub value: &'static str,
    pub label: &'static str,
}

pub const METRICS_HEADING: &str = "PERFORMANCE METRICS";

pub static METRICS: [Metric; 4] = [
    Metric { value: "65K+", label: "TPS" },
    Metric { value: "<400ms", label: "Finality" },
    Metric { value: "$0.00001", label: "Tx Cost" },
    Metric { value: "100%", label: "Uptime" },
];

pub struct RepositoryContent {
    pub heading: &'static str,
    pub subheading: &'static str,
    pub card_title: &'static str,
    pub commands: &'static str,
    pub features: [&'static str; 5],
    pub tech_stack: [&'static str; 5],
    pub note: &'static str,
}

pub static REPOSITORY: RepositoryContent = RepositoryContent {
    heading: "PRODUCTION CODE",
    subheading: "Full working implementation - clone and deploy",
    card_title: "GITHUB REPOSITORY",
    commands: "# Clone the production repository
git clone https://github.com/makhak123/v0-bnb-on-solana
cd v0-bnb-on-solana

# One-command deployment
chmod +x scripts/deploy.sh
./scripts/deploy.sh

# Start validator node
chmod +x scripts/run-validator.sh
./scripts/run-validator.sh

# Repository includes:
# ✅ Full Anchor Solana program (Rust)
# ✅ Cross-chain validator (Rust + Tokio)
# ✅ BNB Chain contracts (Solidity + Foundry)
# ✅ Deployment scripts
# ✅ Integration tests
# ✅ Complete documentation",
    features: [
        "Trustless validator consensus",
        "Replay attack prevention",
        "Emergency pause mechanism",
        "Multi-sig security",
        "Production-ready code",
    ],
    tech_stack: [
        "Anchor Framework 0.29",
        "Solana Web3.js",
        "Ethers.rs for BNB Chain",
        "Foundry for Solidity",
        "Tokio async runtime",
    ],
    note: "All code is production-ready and includes comprehensive tests. Deploy to devnet first, then mainnet after security audit.",
};

/// A titled column of footer links.
pub struct LinkGroup {
    pub title: &'static str,
    pub links: [Link; 3],
}

pub static FOOTER_GROUPS: [LinkGroup; 3] = [
    LinkGroup {
        title: "PROJECT",
        links: [
            Link { label: "Technical Docs", href: "#technical" },
            Link { label: "Repository", href: "#repository" },
            Link { label: "GitHub", href: "https://github.com" },
        ],
    },
    LinkGroup {
        title: "RESOURCES",
        links: [
            Link { label: "Solana Docs", href: "https://solana.com" },
            Link { label: "BNB Chain Docs", href: "https://docs.bnbchain.org" },
            Link { label: "Anchor Framework", href: "https://www.anchor-lang.com" },
        ],
    },
    LinkGroup {
        title: "COMMUNITY",
        links: [
            Link { label: "@aeyakovenko", href: "https://twitter.com/aeyakovenko" },
            Link { label: "Discord", href: "https://discord.gg/solana" },
            Link { label: "Telegram", href: "https://t.me/solana" },
        ],
    },
];

pub const FOOTER_STATUS_LABEL: &str = "SYSTEM STATUS:";
pub const FOOTER_STATUS_VALUE: &str = "ONLINE";
pub const FOOTER_CREDIT: &str = "Inspired by @aeyakovenko's vision • Built with Solana & BNB Chain";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_lookup_matches_display_order() {
        for (index, id) in SectionId::ALL.iter().enumerate() {
            assert_eq!(SECTIONS[index].id, *id);
            assert_eq!(section(*id).id, *id);
        }
        assert_eq!(section(SectionId::SecurityModel).title, "SECURITY MODEL");
    }

    #[test]
    fn test_slugs_are_unique() {
        let mut slugs: Vec<_> = SectionId::ALL.iter().map(|id| id.slug()).collect();
        slugs.sort_unstable();
        slugs.dedup();
        assert_eq!(slugs.len(), SectionId::ALL.len());
    }

    #[test]
    fn test_footer_anchors_point_at_page_sections() {
        let anchors: Vec<_> = FOOTER_GROUPS
            .iter()
            .flat_map(|group| group.links.iter())
            .filter(|link| link.is_anchor())
            .map(|link| &link.href[1..])
            .collect();
        assert_eq!(anchors, vec![TECHNICAL_ANCHOR, REPOSITORY_ANCHOR]);
    }
}

//! Page copy and link tables.
//!
//! Sections render straight from these tables; nothing here changes at
//! runtime.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    pub label: &'static str,
    pub href: &'static str,
}

const fn link(label: &'static str) -> Link {
    Link { label, href: "#" }
}

/// A figure with its caption, e.g. "23.3k / Online Workers".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub name: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureHighlight {
    pub idx: usize,
    pub icon: &'static str,
    pub summary: &'static str,
    pub body: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlueprintCard {
    pub title: &'static str,
    pub blurb: &'static str,
    pub illustration: Option<&'static str>,
    pub live: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UseCase {
    pub idx: usize,
    pub summary: &'static str,
    pub body: &'static str,
}

/// One tile of the research bento grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResearchArea {
    pub title: &'static str,
    pub class: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Avatar {
    pub src: &'static str,
    pub name: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Post {
    pub title: &'static str,
    pub intro: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkGroup {
    pub heading: &'static str,
    pub links: &'static [Link],
}

/// A footer column stacks one or more link groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterColumn {
    pub groups: &'static [LinkGroup],
}

// ============================================================================
// Hero
// ============================================================================

pub const NAV_LINKS: &[Link] = &[
    link("Developers"),
    link("Compute Providers"),
    link("Products"),
    link("PHA Token"),
    link("Participate"),
];

pub const NETWORK_STATS: &[Stat] = &[
    Stat { value: "23.3k", name: "Online Workers" },
    Stat { value: "161k vCPU", name: "Compute" },
    Stat { value: "123,242", name: "Cross-Chain TX" },
    Stat { value: "2,341,223", name: "TX" },
];

pub const NETWORK_LOGOS: &[&str] = &[
    "/home/logo1.png",
    "/home/logo2.png",
    "/home/logo3.png",
    "/home/logo4.png",
    "/home/logo5.png",
];

// ============================================================================
// Features
// ============================================================================

const FEATURE_BODY: &str = "Universal Compatibility Across EVM and Substrate Blockchains. \
    Easily connect Phat Contracts to any blockchain without the need for a bridge, \
    expanding your smart contract capabilities.";

pub const FEATURE_HIGHLIGHTS: &[FeatureHighlight] = &[
    FeatureHighlight {
        idx: 0,
        icon: "/icons/features-compare.svg",
        summary: "Connect your smart contract anywhere",
        body: FEATURE_BODY,
    },
    FeatureHighlight {
        idx: 1,
        icon: "/icons/features-all-out.svg",
        summary: "Gain access to the internet",
        body: FEATURE_BODY,
    },
    FeatureHighlight {
        idx: 2,
        icon: "/icons/features-auto-graph.svg",
        summary: "Run arbitrarily Complex Logic",
        body: FEATURE_BODY,
    },
    FeatureHighlight {
        idx: 3,
        icon: "/icons/features-rocket.svg",
        summary: "Computation is always verifiable",
        body: FEATURE_BODY,
    },
];

// ============================================================================
// Product lines: Accelerate
// ============================================================================

/// Steps of the blueprint workflow; the first one is highlighted.
pub const BLUEPRINT_STEPS: &[&str] = &["Pick", "Config", "Deploy", "Integrate"];

const ARWEAVE_BLURB: &str =
    "Check if some file is actually stored on Arweave in your smart contract.";

pub const BLUEPRINTS: &[BlueprintCard] = &[
    BlueprintCard {
        title: "Lens API Oracle",
        blurb: ARWEAVE_BLURB,
        illustration: Some("/home/blueprint-lens-api-oracle.png"),
        live: true,
    },
    BlueprintCard {
        title: "Lens Referral System",
        blurb: ARWEAVE_BLURB,
        illustration: None,
        live: false,
    },
    BlueprintCard {
        title: "X-Chain Contract Read",
        blurb: "One-click deployable blueprint allows you to read the contract states \
            from another EVM or Substrate blockchain.",
        illustration: None,
        live: false,
    },
    BlueprintCard {
        title: "Arweave Storage Proof",
        blurb: ARWEAVE_BLURB,
        illustration: None,
        live: false,
    },
    BlueprintCard {
        title: "Lens Cross-post",
        blurb: "Post to multiple Web3 social networks.",
        illustration: None,
        live: false,
    },
    BlueprintCard {
        title: "Push Notification",
        blurb: ARWEAVE_BLURB,
        illustration: None,
        live: false,
    },
];

// ============================================================================
// Product lines: Innovate
// ============================================================================

/// Capability tabs above the code viewer; the first one is active.
pub const CAPABILITIES: &[&str] = &[
    "Open a HTTP Request",
    "Cross-Chain Integration",
    "Off-Chain Rollup",
    "Automation",
    "Secret Management",
    "High Performance Computation",
];

pub const CODE_SAMPLE: &str = r#"function requestData() public returns (bytes32 requestId)
{
    Chainlink.Request memory request = buildChainlinkRequest(jobId, address(this), this.fulfill.selector);
    request.add("get", "https://my-api.com/endpoint");
    request.add("path", "status");
    return sendChainlinkRequestTo(oracle, request, fee);
}
function fulfill(bytes32 _requestId, uint256 _response) public
recordChainlinkFulfillment(_requestId)
{
    response = _response;
}"#;

pub const CODE_SAMPLE_NOTES: &[&str] = &[
    "With access to HTTP request, you unlock a whole new world of dAPP possibilities.",
    "HTTPs requests are sent from the secure environment so that nobody can manipulate the content or forge the request.",
    "It enables direct operation to read & write to other blockchains as well as Web2 APIs.",
];

const USE_CASE_BODY: &str = "Explain what are these usecases. Lorem Ipsum is simply dummy \
    text of the printing and typesetting industry. Lorem Ipsum";

pub const USE_CASES: &[UseCase] = &[
    UseCase { idx: 1, summary: "DEX Aggregator", body: USE_CASE_BODY },
    UseCase { idx: 2, summary: "Self-funded Oracles", body: USE_CASE_BODY },
    UseCase { idx: 3, summary: "Trading Bot", body: USE_CASE_BODY },
    UseCase { idx: 4, summary: "DAO-Controlled Web2 Services", body: USE_CASE_BODY },
];

/// The use case shown in the detail card next to the list.
pub const FEATURED_USE_CASE: &str = "DEX Aggregator";

pub const FEATURED_USE_CASE_TAGS: &[&str] = &["Open A HTTP Request", "Cross-Chain Integration"];

pub const FEATURED_USE_CASE_COPY: &[&str] = &[
    "Explain the architecture.",
    "Aggregate DEXs and bridges from all kinds of blockchains together, enabling one-click cross-chain transfer.",
];

pub const COMMUNITY_AVATARS: &[Avatar] = &[
    Avatar { src: "/home/avatar-h4x.jpg", name: "Hang" },
    Avatar { src: "/home/avatar-shelven.jpg", name: "Shelven" },
    Avatar { src: "/home/avatar-dan.jpg", name: "Dan" },
    Avatar { src: "/home/avatar-zoe.jpg", name: "Zoe" },
];

// ============================================================================
// Product lines: Pioneer
// ============================================================================

/// Research tiles in grid order. The "join research community" tile sits
/// between the sixth and seventh entries.
pub const RESEARCH_AREAS: &[ResearchArea] = &[
    ResearchArea { title: "Trustless MEV", class: "bento-trustless-mev" },
    ResearchArea { title: "Sequencer For Layer2", class: "bento-sequencer-for-layer2" },
    ResearchArea {
        title: "Decentralized Scientific Computation",
        class: "bento-decentralized-scientific-computation",
    },
    ResearchArea { title: "Account Abstraction", class: "bento-account-abstraction" },
    ResearchArea { title: "Web3 AI", class: "bento-web3-ai" },
    ResearchArea { title: "Decentralized API", class: "bento-decentralized-api" },
    ResearchArea { title: "Distributed Computation", class: "bento-distributed-computation" },
];

pub const RESEARCH_JOIN_SLOT: usize = 6;

pub const AREA_OF_INTEREST: &str = "Trustless MEV";

pub const AREA_OF_INTEREST_COPY: &[&str] = &[
    "According to the Messari Report, 80% of the Ethereum blocks are built by MEV.",
    "However, currently the MEV stack still depends on trusted service providers like Flashbot. \
     A research direction is to use Secure Enclave (e.g. Intel SGX) to minimize the trust.",
    "Phala Network is an offchain compute network powered by Secure Enclaves. It's possible to \
     build the MEV core stack in Phala Network's technology to minimize the trust assumptions.",
];

// ============================================================================
// How it works / Highlights
// ============================================================================

pub const SECURITY_STATS: &[Stat] = &[
    Stat { value: "12,320", name: "Computers" },
    Stat { value: "12,320", name: "$PHA" },
];

const POST_TITLE: &str = "Heading 1 - This is a heading that can stretch over two lines";
const POST_INTRO: &str = "Lorem Ipsum is simply dummy text of the printing and typesetting \
    industry. Lorem Ipsum has been the industry's standard dummy text ever since the 1500s, \
    when an unknown printer took a galley of type and scrambled it to make a type specimen \
    book. It has survived not only five centuries, ";

pub const POSTS: &[Post] = &[
    Post { title: POST_TITLE, intro: POST_INTRO },
    Post { title: POST_TITLE, intro: POST_INTRO },
    Post { title: POST_TITLE, intro: POST_INTRO },
];

// ============================================================================
// Footer
// ============================================================================

pub const FOOTER_COLUMNS: &[FooterColumn] = &[
    FooterColumn {
        groups: &[
            LinkGroup {
                heading: "Developers",
                links: &[
                    link("Docs"),
                    link("GitHub"),
                    link("Builders Program"),
                    link("Using Blueprints"),
                    link("Using Raw Phat Contract"),
                    link("Tutorials"),
                    link("Worker Operators"),
                    link("Bug Bounty Program"),
                ],
            },
            LinkGroup {
                heading: "Use Cases",
                links: &[link("Automation"), link("Oracles"), link("Data Encryption")],
            },
        ],
    },
    FooterColumn {
        groups: &[
            LinkGroup {
                heading: "Blueprints",
                links: &[link("Lens API Oracle")],
            },
            LinkGroup {
                heading: "Resources",
                links: &[
                    link("Whitepaper"),
                    link("Case Studies"),
                    link("Blog"),
                    link("Staking"),
                    link("FAQs"),
                    link("Tokenomics"),
                    link("What is Phala Network?"),
                    link("What is Phat Contract?"),
                    link("What are Blueprints?"),
                ],
            },
        ],
    },
    FooterColumn {
        groups: &[
            LinkGroup {
                heading: "Hashforest",
                links: &[link("Team"), link("Careers"), link("Brand Assets")],
            },
            LinkGroup {
                heading: "Community",
                links: &[link("Events"), link("Become an Ambassador")],
            },
        ],
    },
    FooterColumn {
        groups: &[LinkGroup {
            heading: "Social",
            links: &[
                link("Twitter"),
                link("Discord"),
                link("Telegram"),
                link("YouTube"),
                link("Lenster"),
                link("Lenstube"),
            ],
        }],
    },
];

pub const LEGAL_LINKS: &[Link] = &[
    link("EN"),
    link("Privacy Policy"),
    link("Terms of Use"),
    link("Responsible Disclosure"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feature_indices_are_zero_to_three() {
        let indices: Vec<_> = FEATURE_HIGHLIGHTS.iter().map(|f| f.idx).collect();
        assert_eq!(indices, [0, 1, 2, 3]);
    }

    #[test]
    fn use_case_indices_are_one_to_four() {
        let indices: Vec<_> = USE_CASES.iter().map(|u| u.idx).collect();
        assert_eq!(indices, [1, 2, 3, 4]);
    }

    #[test]
    fn exactly_one_live_blueprint() {
        let live: Vec<_> = BLUEPRINTS.iter().filter(|b| b.live).collect();
        assert_eq!(live.len(), 1);
        assert_eq!(live[0].title, "Lens API Oracle");
        assert!(live[0].illustration.is_some());
    }

    #[test]
    fn footer_layout() {
        assert_eq!(FOOTER_COLUMNS.len(), 4);
        let headings: Vec<_> = FOOTER_COLUMNS
            .iter()
            .flat_map(|c| c.groups)
            .map(|g| g.heading)
            .collect();
        assert_eq!(
            headings,
            [
                "Developers",
                "Use Cases",
                "Blueprints",
                "Resources",
                "Hashforest",
                "Community",
                "Social"
            ]
        );
    }

    #[test]
    fn grids_have_expected_sizes() {
        assert_eq!(POSTS.len(), 3);
        assert_eq!(NETWORK_STATS.len(), 4);
        assert_eq!(NETWORK_LOGOS.len(), 5);
        assert!(RESEARCH_JOIN_SLOT <= RESEARCH_AREAS.len());
        assert!(USE_CASES.iter().any(|u| u.summary == FEATURED_USE_CASE));
        assert!(RESEARCH_AREAS.iter().any(|a| a.title == AREA_OF_INTEREST));
    }
}

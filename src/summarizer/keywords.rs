/// Domain vocabulary used to score sentence relevance. Matching is
/// case-insensitive substring containment; a sentence's score is the number
/// of distinct entries it contains.
pub const FINTECH_KEYWORDS: &[&str] = &[
    // General fintech
    "fintech",
    "financial",
    "finance",
    "payment",
    "lending",
    "banking",
    // Payments & transfers
    "transfer",
    "transaction",
    "wallet",
    "peer-to-peer",
    "p2p",
    "cash app",
    "venmo",
    "stripe",
    "square",
    "paypal",
    // Digital banking
    "neobank",
    "digital bank",
    "challenger bank",
    "online banking",
    // Lending & credit
    "loan",
    "credit",
    "borrowing",
    "bnpl",
    "buy now pay later",
    "credit score",
    "underwriting",
    // Blockchain & crypto
    "blockchain",
    "crypto",
    "bitcoin",
    "ethereum",
    "web3",
    "defi",
    "nft",
    "tokenization",
    "token",
    "smart contract",
    // B2B finance
    "b2b",
    "enterprise",
    "corporate",
    "invoicing",
    "accounts payable",
    "treasury",
    "expense management",
    "payroll",
    // WealthTech & investment
    "wealth",
    "investment",
    "portfolio",
    "robo-advisor",
    "trading",
    "stock",
    "asset management",
    "retail investor",
    // Embedded finance
    "embedded finance",
    "baas",
    "banking as a service",
    "api-first",
    "white-label",
    // Compliance & risk
    "compliance",
    "regulation",
    "regulatory",
    "kyc",
    "aml",
    "regtech",
    "fraud",
    "security",
    "risk",
    "governance",
    // Infrastructure
    "api",
    "integration",
    "platform",
    "sdk",
    "middleware",
    "infrastructure",
    // AI & automation
    "ai",
    "artificial intelligence",
    "machine learning",
    "automation",
    "llm",
    "generative",
    "chatbot",
    "agent",
    // Market & adoption
    "market",
    "growth",
    "emerging",
    "adoption",
    "expansion",
    "opportunity",
    "startup",
    "innovation",
    "disruption",
];

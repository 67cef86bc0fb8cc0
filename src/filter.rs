//! Domain filter for search result URLs.
//!
//! Classifies a URL as admissible or banned with a case-insensitive
//! substring scan over a curated deny-list. Aggregator sites, national
//! brokerage chains, social/video platforms, review sites, and generic
//! news/money sections would otherwise dominate every query's results, so
//! over-banning is preferred to admitting them.

/// Map results never point at an individual agent's own page.
const GOOGLE_MAPS_MARKER: &str = "google.com/maps";

/// Substrings that disqualify a URL: listing aggregators and review
/// sites, social and video platforms, national brokerage chains, lead-gen
/// referral services, and non-agent content sections.
const BANNED_KEYWORDS: &[&str] = &[
    "zillow",
    "trulia",
    "redfin",
    "realtor.com",
    "usnews",
    "city-data",
    "yelp",
    "fastexpert",
    "facebook",
    "instagram",
    "linkedin",
    "twitter",
    "x.com",
    "reddit",
    "fivestarprofessional",
    "realtrends",
    "houzeo",
    "effectiveagents",
    "nextdoor",
    "expertise",
    "homelight",
    "homeguide",
    "nar.realtor",
    "youtube",
    "thumbtack",
    "topagentmagazine",
    "yellowpages",
    "triple",
    "angi",
    "listwithclever",
    "tiktok",
    "movoto",
    ".org",
    "experience.com",
    "bankrate",
    "expertise.com",
    "glassdoor",
    "biggerpockets",
    "agentproto",
    "landsearch",
    "coldwellbanker",
    "remax",
    "sothebys",
    "bhhs",
    "kellerwilliams",
    "kw.com",
    "century21",
    "c21",
    "bhgre",
    "era.com",
    "elliman",
    "compass",
    "exprealty",
    "corcoran",
    "weichert",
    "howardhanna",
    "longandfoster",
    "realtyexecutives",
    "realtyonegroup",
    "homesmart",
    "exitrealty",
    "ratemyagent",
    "sulekha",
    "bizjournals",
    "/news/",
    "/money/",
    "/business/",
    "seolium",
    "agentpronto",
    "upnest",
    "housecashin",
];

/// Returns `true` if the URL should be skipped entirely.
///
/// Pure string containment over the lowercased URL; never fails. False
/// positives are acceptable, false negatives are not.
pub fn is_banned(url: &str) -> bool {
    let lowered = url.to_lowercase();
    if lowered.contains(GOOGLE_MAPS_MARKER) {
        return true;
    }
    BANNED_KEYWORDS.iter().any(|keyword| lowered.contains(keyword))
}

//! Fixed copy for the landing page.

use time::OffsetDateTime;

pub const PAGE_TITLE: &str = "SoftSell - Sell Your Software Licenses";
pub const PAGE_DESCRIPTION: &str =
    "Easily sell your unused software licenses and get paid fast. Trusted by professionals.";
pub const FAVICON_PATH: &str = "/favicon.ico";

pub const HERO_TITLE: &str = "Turn Unused Software Into Cash";
pub const HERO_TAGLINE: &str = "Sell your old licenses in 3 easy steps and get paid fast.";
pub const HERO_CTA: &str = "Sell My Licenses";

pub const CHAT_TITLE: &str = "SoftSell Assistant";
pub const BOT_GREETING: &str = "Hi! How can I help you today?";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    pub title: &'static str,
    pub icon: &'static str,
}

pub const STEPS: [Step; 3] = [
    Step {
        title: "Upload License",
        icon: "📂",
    },
    Step {
        title: "Get Valuation",
        icon: "💸",
    },
    Step {
        title: "Get Paid",
        icon: "💵",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: [Feature; 4] = [
    Feature {
        title: "Fast Payouts",
        description: "Receive payment within 24 hours.",
    },
    Feature {
        title: "Secure Deals",
        description: "End-to-end encrypted transactions.",
    },
    Feature {
        title: "Expert Valuations",
        description: "Fair and accurate pricing.",
    },
    Feature {
        title: "No Hidden Fees",
        description: "Transparent and honest pricing.",
    },
];

pub fn current_year() -> i32 {
    OffsetDateTime::now_utc().year()
}

pub fn footer_notice(year: i32) -> String {
    format!("© {year} SoftSell. All rights reserved.")
}

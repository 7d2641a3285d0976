//! Static site configuration shared by the site and the CLI

/// Static site configuration
pub struct Config {
    pub name: &'static str,
    pub tagline: &'static str,

    /// Shown under every result and in the footer
    pub disclaimer: &'static str,

    pub links: Links,
    pub changelog: &'static [ChangelogEntry],
}

pub struct Links {
    pub creator_portal: &'static str,
    pub irs_self_employment: &'static str,
}

pub struct ChangelogEntry {
    pub date: &'static str,
    pub event: &'static str,
}

pub static CONFIG: Config = Config {
    name: "Creator Calc",
    tagline: "Free calculators for short-video creators",

    disclaimer: "Estimates only. Rates, exchange values and tax figures are illustrative \
                 and are not financial or tax advice.",

    links: Links {
        creator_portal: "https://www.tiktok.com/creators/creator-portal/en-us/",
        irs_self_employment: "https://www.irs.gov/businesses/small-businesses-self-employed/self-employment-tax-social-security-and-medicare-taxes",
    },

    // Changelog entries - newest first
    changelog: &[
        ChangelogEntry {
            date: "2026-09-30",
            event: "Added creator tax estimator with quarterly payments",
        },
        ChangelogEntry {
            date: "2026-08-14",
            event: "Added niche profitability and follower projection",
        },
        ChangelogEntry {
            date: "2026-07-02",
            event: "Site launch",
        },
    ],
};

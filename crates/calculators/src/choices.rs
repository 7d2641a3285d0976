//! Enum-valued calculator fields

use serde::{Deserialize, Serialize};

/// A closed set of options a form field can take
pub trait Choice: Copy + PartialEq + Sized + 'static {
    /// Every option, in display order
    const OPTIONS: &'static [Self];

    /// Stable machine key (used in forms, JSON and CSV)
    fn key(self) -> &'static str;

    /// Human-readable label
    fn label(self) -> &'static str;

    fn from_key(key: &str) -> Option<Self> {
        let key = key.trim();
        Self::OPTIONS.iter().copied().find(|option| option.key().eq_ignore_ascii_case(key))
    }
}

/// Content category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Niche {
    Finance,
    Business,
    Technology,
    Education,
    Beauty,
    Fashion,
    Fitness,
    Food,
    Travel,
    Lifestyle,
    Gaming,
    Entertainment,
    Comedy,
    Other,
}

impl Choice for Niche {
    const OPTIONS: &'static [Self] = &[
        Niche::Finance,
        Niche::Business,
        Niche::Technology,
        Niche::Education,
        Niche::Beauty,
        Niche::Fashion,
        Niche::Fitness,
        Niche::Food,
        Niche::Travel,
        Niche::Lifestyle,
        Niche::Gaming,
        Niche::Entertainment,
        Niche::Comedy,
        Niche::Other,
    ];

    fn key(self) -> &'static str {
        match self {
            Niche::Finance => "finance",
            Niche::Business => "business",
            Niche::Technology => "technology",
            Niche::Education => "education",
            Niche::Beauty => "beauty",
            Niche::Fashion => "fashion",
            Niche::Fitness => "fitness",
            Niche::Food => "food",
            Niche::Travel => "travel",
            Niche::Lifestyle => "lifestyle",
            Niche::Gaming => "gaming",
            Niche::Entertainment => "entertainment",
            Niche::Comedy => "comedy",
            Niche::Other => "other",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Niche::Finance => "Finance & Investing",
            Niche::Business => "Business & Marketing",
            Niche::Technology => "Technology",
            Niche::Education => "Education",
            Niche::Beauty => "Beauty & Skincare",
            Niche::Fashion => "Fashion",
            Niche::Fitness => "Health & Fitness",
            Niche::Food => "Food & Cooking",
            Niche::Travel => "Travel",
            Niche::Lifestyle => "Lifestyle",
            Niche::Gaming => "Gaming",
            Niche::Entertainment => "Entertainment",
            Niche::Comedy => "Comedy",
            Niche::Other => "Other",
        }
    }
}

/// Payout currency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Currency {
    Usd,
    Eur,
    Gbp,
    Cad,
    Aud,
    Inr,
    Jpy,
    Brl,
    Mxn,
}

impl Choice for Currency {
    const OPTIONS: &'static [Self] = &[
        Currency::Usd,
        Currency::Eur,
        Currency::Gbp,
        Currency::Cad,
        Currency::Aud,
        Currency::Inr,
        Currency::Jpy,
        Currency::Brl,
        Currency::Mxn,
    ];

    fn key(self) -> &'static str {
        match self {
            Currency::Usd => "usd",
            Currency::Eur => "eur",
            Currency::Gbp => "gbp",
            Currency::Cad => "cad",
            Currency::Aud => "aud",
            Currency::Inr => "inr",
            Currency::Jpy => "jpy",
            Currency::Brl => "brl",
            Currency::Mxn => "mxn",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Currency::Usd => "US Dollar (USD)",
            Currency::Eur => "Euro (EUR)",
            Currency::Gbp => "British Pound (GBP)",
            Currency::Cad => "Canadian Dollar (CAD)",
            Currency::Aud => "Australian Dollar (AUD)",
            Currency::Inr => "Indian Rupee (INR)",
            Currency::Jpy => "Japanese Yen (JPY)",
            Currency::Brl => "Brazilian Real (BRL)",
            Currency::Mxn => "Mexican Peso (MXN)",
        }
    }
}

impl Currency {
    /// ISO 4217 code
    pub fn code(self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Cad => "CAD",
            Currency::Aud => "AUD",
            Currency::Inr => "INR",
            Currency::Jpy => "JPY",
            Currency::Brl => "BRL",
            Currency::Mxn => "MXN",
        }
    }
}

/// US federal filing status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilingStatus {
    Single,
    MarriedJoint,
    HeadOfHousehold,
}

impl Choice for FilingStatus {
    const OPTIONS: &'static [Self] = &[
        FilingStatus::Single,
        FilingStatus::MarriedJoint,
        FilingStatus::HeadOfHousehold,
    ];

    fn key(self) -> &'static str {
        match self {
            FilingStatus::Single => "single",
            FilingStatus::MarriedJoint => "married-joint",
            FilingStatus::HeadOfHousehold => "head-of-household",
        }
    }

    fn label(self) -> &'static str {
        match self {
            FilingStatus::Single => "Single",
            FilingStatus::MarriedJoint => "Married filing jointly",
            FilingStatus::HeadOfHousehold => "Head of household",
        }
    }
}

/// Rough state income tax level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StateTaxLevel {
    None,
    Low,
    Medium,
    High,
}

impl Choice for StateTaxLevel {
    const OPTIONS: &'static [Self] = &[
        StateTaxLevel::None,
        StateTaxLevel::Low,
        StateTaxLevel::Medium,
        StateTaxLevel::High,
    ];

    fn key(self) -> &'static str {
        match self {
            StateTaxLevel::None => "none",
            StateTaxLevel::Low => "low",
            StateTaxLevel::Medium => "medium",
            StateTaxLevel::High => "high",
        }
    }

    fn label(self) -> &'static str {
        match self {
            StateTaxLevel::None => "No state income tax",
            StateTaxLevel::Low => "Low (~3%)",
            StateTaxLevel::Medium => "Medium (~5%)",
            StateTaxLevel::High => "High (~8%)",
        }
    }
}

/// Unit a growth period is measured in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Timeframe {
    Days,
    Weeks,
    Months,
}

impl Choice for Timeframe {
    const OPTIONS: &'static [Self] = &[Timeframe::Days, Timeframe::Weeks, Timeframe::Months];

    fn key(self) -> &'static str {
        match self {
            Timeframe::Days => "days",
            Timeframe::Weeks => "weeks",
            Timeframe::Months => "months",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Timeframe::Days => "Days",
            Timeframe::Weeks => "Weeks",
            Timeframe::Months => "Months",
        }
    }
}

impl Timeframe {
    /// Singular unit name for sentences ("per week")
    pub fn unit(self) -> &'static str {
        match self {
            Timeframe::Days => "day",
            Timeframe::Weeks => "week",
            Timeframe::Months => "month",
        }
    }
}

/// Audience size band. Derived from a follower count, never entered directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FollowerTier {
    Nano,
    Micro,
    Mid,
    Macro,
    Mega,
}

impl Choice for FollowerTier {
    const OPTIONS: &'static [Self] = &[
        FollowerTier::Nano,
        FollowerTier::Micro,
        FollowerTier::Mid,
        FollowerTier::Macro,
        FollowerTier::Mega,
    ];

    fn key(self) -> &'static str {
        match self {
            FollowerTier::Nano => "nano",
            FollowerTier::Micro => "micro",
            FollowerTier::Mid => "mid",
            FollowerTier::Macro => "macro",
            FollowerTier::Mega => "mega",
        }
    }

    fn label(self) -> &'static str {
        match self {
            FollowerTier::Nano => "Nano influencer",
            FollowerTier::Micro => "Micro influencer",
            FollowerTier::Mid => "Mid-tier influencer",
            FollowerTier::Macro => "Macro influencer",
            FollowerTier::Mega => "Mega influencer",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_key_is_case_insensitive() {
        assert_eq!(Niche::from_key("Finance"), Some(Niche::Finance));
        assert_eq!(FilingStatus::from_key(" married-joint "), Some(FilingStatus::MarriedJoint));
        assert_eq!(Currency::from_key("zzz"), None);
    }

    #[test]
    fn test_serde_keys_match_choice_keys() {
        for niche in Niche::OPTIONS {
            let json = serde_json::to_string(niche).unwrap();
            assert_eq!(json, format!("\"{}\"", niche.key()));
        }
        let status: FilingStatus = serde_json::from_str("\"head-of-household\"").unwrap();
        assert_eq!(status, FilingStatus::HeadOfHousehold);
    }
}

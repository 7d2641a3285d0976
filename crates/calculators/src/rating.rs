//! Threshold ladders that turn a number into a categorical tag
//!
//! Thresholds belong to each calculator; "excellent" engagement and
//! "excellent" completion mean very different numbers.

use serde::{Deserialize, Serialize};

use crate::choices::{Choice, FollowerTier};

/// A categorical tag attached to a result
pub trait Tag: Copy {
    /// Stable machine key ("below-average")
    fn tag(self) -> &'static str;

    /// Display label ("Below average")
    fn tag_label(self) -> &'static str;
}

/// General quality rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rating {
    BelowAverage,
    Average,
    Good,
    Excellent,
}

impl Tag for Rating {
    fn tag(self) -> &'static str {
        match self {
            Rating::Excellent => "excellent",
            Rating::Good => "good",
            Rating::Average => "average",
            Rating::BelowAverage => "below-average",
        }
    }

    fn tag_label(self) -> &'static str {
        match self {
            Rating::Excellent => "Excellent",
            Rating::Good => "Good",
            Rating::Average => "Average",
            Rating::BelowAverage => "Below average",
        }
    }
}

/// Likelihood of a video breaking out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Chance {
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl Tag for Chance {
    fn tag(self) -> &'static str {
        match self {
            Chance::VeryHigh => "very-high",
            Chance::High => "high",
            Chance::Moderate => "moderate",
            Chance::Low => "low",
        }
    }

    fn tag_label(self) -> &'static str {
        match self {
            Chance::VeryHigh => "Very high",
            Chance::High => "High",
            Chance::Moderate => "Moderate",
            Chance::Low => "Low",
        }
    }
}

impl Tag for FollowerTier {
    fn tag(self) -> &'static str {
        self.key()
    }

    fn tag_label(self) -> &'static str {
        self.label()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    /// Tag applies when value >= threshold
    AtLeast,
    /// Tag applies when value <= threshold
    AtMost,
}

/// Ordered `(threshold, tag)` steps evaluated top-down, with a floor tag
#[derive(Debug, Clone, Copy)]
pub struct Ladder<T: 'static> {
    steps: &'static [(f64, T)],
    floor: T,
    direction: Direction,
}

impl<T: Copy> Ladder<T> {
    /// Higher is better; steps listed from the highest threshold down
    pub const fn at_least(steps: &'static [(f64, T)], floor: T) -> Self {
        Self {
            steps,
            floor,
            direction: Direction::AtLeast,
        }
    }

    /// Lower is better; steps listed from the lowest threshold up
    pub const fn at_most(steps: &'static [(f64, T)], floor: T) -> Self {
        Self {
            steps,
            floor,
            direction: Direction::AtMost,
        }
    }

    pub fn classify(&self, value: f64) -> T {
        self.steps
            .iter()
            .find(|(threshold, _)| match self.direction {
                Direction::AtLeast => value >= *threshold,
                Direction::AtMost => value <= *threshold,
            })
            .map_or(self.floor, |(_, tag)| *tag)
    }
}

/// Shorthand for the common excellent / good / average / below-average ladder
pub const fn quality(excellent: f64, good: f64, average: f64) -> [(f64, Rating); 3] {
    [(excellent, Rating::Excellent), (good, Rating::Good), (average, Rating::Average)]
}

#[cfg(test)]
mod tests {
    use super::*;

    static STEPS: [(f64, Rating); 3] = quality(10.0, 5.0, 2.0);
    static ENGAGEMENT: Ladder<Rating> = Ladder::at_least(&STEPS, Rating::BelowAverage);

    static COST_STEPS: [(f64, Rating); 3] = [(4.0, Rating::Excellent), (8.0, Rating::Good), (12.0, Rating::Average)];
    static COST: Ladder<Rating> = Ladder::at_most(&COST_STEPS, Rating::BelowAverage);

    #[test]
    fn test_at_least_boundaries_are_inclusive() {
        assert_eq!(ENGAGEMENT.classify(10.0), Rating::Excellent);
        assert_eq!(ENGAGEMENT.classify(5.0), Rating::Good);
        assert_eq!(ENGAGEMENT.classify(4.99), Rating::Average);
        assert_eq!(ENGAGEMENT.classify(1.0), Rating::BelowAverage);
    }

    #[test]
    fn test_at_most() {
        assert_eq!(COST.classify(3.0), Rating::Excellent);
        assert_eq!(COST.classify(8.0), Rating::Good);
        assert_eq!(COST.classify(20.0), Rating::BelowAverage);
    }

    #[test]
    fn test_monotonic() {
        let mut previous = Rating::BelowAverage;
        for step in 0..200 {
            let rating = ENGAGEMENT.classify(step as f64 * 0.1);
            assert!(rating >= previous);
            previous = rating;
        }
    }

    #[test]
    fn test_tags() {
        assert_eq!(Rating::BelowAverage.tag(), "below-average");
        assert_eq!(Chance::VeryHigh.tag(), "very-high");
        assert_eq!(FollowerTier::Macro.tag(), "macro");
    }
}

//! Display-only vulnerability and threat data.
//!
//! Nothing here feeds the scoring engine. The widget data the report
//! shows alongside an assessment is demo material, generated behind the
//! `ThreatFeed` trait so the nondeterminism stays injectable: callers
//! that need reproducible output seed the feed.

use crate::core::RiskLevel;
use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Severity of a vulnerability category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    pub fn display_name(&self) -> &str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

/// Direction a vulnerability count is moving
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

impl Trend {
    pub fn display_name(&self) -> &str {
        match self {
            Trend::Up => "up",
            Trend::Down => "down",
            Trend::Stable => "stable",
        }
    }
}

/// Open findings in one vulnerability category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VulnerabilitySummary {
    pub category: String,
    pub count: u32,
    pub severity: Severity,
    pub trend: Trend,
}

/// Situational threat picture shown on the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThreatIntelligence {
    pub threat_level: RiskLevel,
    pub active_threats: u32,
    pub recent_incidents: u32,
    pub industry_risk: String,
    pub last_updated: DateTime<Utc>,
}

/// Source of display-only widget data
pub trait ThreatFeed {
    fn vulnerabilities(&mut self) -> Vec<VulnerabilitySummary>;
    fn intelligence(&mut self) -> ThreatIntelligence;
}

/// Demo feed with plausible randomized numbers. Fixed category set,
/// fixed severities and trends; only the counts vary per run.
pub struct DemoThreatFeed {
    rng: StdRng,
}

impl DemoThreatFeed {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic feed for reproducible reports and tests.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for DemoThreatFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl ThreatFeed for DemoThreatFeed {
    fn vulnerabilities(&mut self) -> Vec<VulnerabilitySummary> {
        let mut summary = |category: &str, range: std::ops::Range<u32>, severity, trend| {
            VulnerabilitySummary {
                category: category.to_string(),
                count: self.rng.gen_range(range),
                severity,
                trend,
            }
        };
        vec![
            summary("Network", 5..20, Severity::High, Trend::Down),
            summary("Application", 10..30, Severity::Medium, Trend::Stable),
            summary("System", 3..13, Severity::Critical, Trend::Up),
            summary("Database", 2..10, Severity::Medium, Trend::Down),
            summary("Cloud", 4..16, Severity::Low, Trend::Stable),
        ]
    }

    fn intelligence(&mut self) -> ThreatIntelligence {
        const LEVELS: [RiskLevel; 4] = [
            RiskLevel::Low,
            RiskLevel::Medium,
            RiskLevel::High,
            RiskLevel::Critical,
        ];
        ThreatIntelligence {
            threat_level: LEVELS[self.rng.gen_range(0..LEVELS.len())],
            active_threats: self.rng.gen_range(10..60),
            recent_incidents: self.rng.gen_range(1..11),
            industry_risk: "Elevated".to_string(),
            last_updated: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_feeds_are_deterministic() {
        let mut a = DemoThreatFeed::seeded(42);
        let mut b = DemoThreatFeed::seeded(42);
        assert_eq!(a.vulnerabilities(), b.vulnerabilities());
        let intel_a = a.intelligence();
        let intel_b = b.intelligence();
        assert_eq!(intel_a.threat_level, intel_b.threat_level);
        assert_eq!(intel_a.active_threats, intel_b.active_threats);
        assert_eq!(intel_a.recent_incidents, intel_b.recent_incidents);
    }

    #[test]
    fn vulnerability_counts_stay_in_range() {
        let mut feed = DemoThreatFeed::seeded(7);
        for _ in 0..50 {
            let summaries = feed.vulnerabilities();
            assert_eq!(summaries.len(), 5);
            assert!(summaries[0].count >= 5 && summaries[0].count < 20);
            assert!(summaries[2].count >= 3 && summaries[2].count < 13);
        }
    }

    #[test]
    fn intelligence_ranges_match_the_dashboard_contract() {
        let mut feed = DemoThreatFeed::seeded(9);
        for _ in 0..50 {
            let intel = feed.intelligence();
            assert!(intel.active_threats >= 10 && intel.active_threats < 60);
            assert!(intel.recent_incidents >= 1 && intel.recent_incidents < 11);
            assert_eq!(intel.industry_risk, "Elevated");
        }
    }
}

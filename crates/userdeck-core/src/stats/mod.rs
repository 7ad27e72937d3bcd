//! Dashboard overview figures and feature cards.

use std::collections::HashSet;

use crate::shell::Route;
use crate::users::types::UserRecord;

/// Share of users counted as having an active session.
const ACTIVE_SESSION_RATIO: f64 = 0.7;

/// Growth figure shown on the dashboard. Not derived from records.
pub const GROWTH_RATE: &str = "23.5%";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatKind {
    TotalUsers,
    ActiveSessions,
    GrowthRate,
    GlobalReach,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCard {
    pub kind: StatKind,
    pub label: &'static str,
    pub value: String,
    pub trend: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_users: usize,
    pub active_sessions: usize,
    pub global_reach: usize,
}

impl DashboardStats {
    pub fn from_records(records: &[UserRecord]) -> Self {
        let total_users = records.len();
        let active_sessions = (total_users as f64 * ACTIVE_SESSION_RATIO).floor() as usize;
        let global_reach = records
            .iter()
            .map(|record| record.address.city.as_str())
            .filter(|city| !city.is_empty())
            .collect::<HashSet<_>>()
            .len();

        Self {
            total_users,
            active_sessions,
            global_reach,
        }
    }

    /// The four stat cards in display order.
    pub fn cards(&self) -> [StatCard; 4] {
        [
            StatCard {
                kind: StatKind::TotalUsers,
                label: "Total Users",
                value: self.total_users.to_string(),
                trend: "+12%",
            },
            StatCard {
                kind: StatKind::ActiveSessions,
                label: "Active Sessions",
                value: self.active_sessions.to_string(),
                trend: "+8%",
            },
            StatCard {
                kind: StatKind::GrowthRate,
                label: "Growth Rate",
                value: GROWTH_RATE.to_string(),
                trend: "+5%",
            },
            StatCard {
                kind: StatKind::GlobalReach,
                label: "Global Reach",
                value: self.global_reach.to_string(),
                trend: "+3%",
            },
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureCard {
    pub title: &'static str,
    pub description: &'static str,
    pub target: Route,
}

pub const FEATURE_CARDS: [FeatureCard; 3] = [
    FeatureCard {
        title: "User Management",
        description: "View, search, and manage all users in your system with advanced filtering and pagination.",
        target: Route::Users,
    },
    FeatureCard {
        title: "Search & Filter",
        description: "Quickly find users by name, email, or username with real-time search results.",
        target: Route::Users,
    },
    FeatureCard {
        title: "User Analytics",
        description: "Get insights into user activity, growth trends, and engagement metrics.",
        target: Route::Users,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::users::placeholder::placeholder_users;
    use crate::users::types::test_helpers::make_user;

    #[test]
    fn test_stats_from_placeholder_users() {
        let users = placeholder_users().unwrap();
        let stats = DashboardStats::from_records(&users);
        assert_eq!(stats.total_users, 10);
        assert_eq!(stats.active_sessions, 7);
        assert_eq!(stats.global_reach, 10);
    }

    #[test]
    fn test_active_sessions_rounds_down() {
        let users: Vec<_> = (1..=3).map(|i| make_user(i, "U")).collect();
        assert_eq!(DashboardStats::from_records(&users).active_sessions, 2);
    }

    #[test]
    fn test_global_reach_counts_distinct_cities() {
        let mut a = make_user(1, "A");
        let mut b = make_user(2, "B");
        let mut c = make_user(3, "C");
        a.address.city = "Gwenborough".to_string();
        b.address.city = "Gwenborough".to_string();
        c.address.city = String::new();
        let stats = DashboardStats::from_records(&[a, b, c]);
        assert_eq!(stats.global_reach, 1);
    }

    #[test]
    fn test_empty_records() {
        let stats = DashboardStats::from_records(&[]);
        assert_eq!(
            stats,
            DashboardStats {
                total_users: 0,
                active_sessions: 0,
                global_reach: 0,
            }
        );
    }

    #[test]
    fn test_cards_order_and_trends() {
        let cards = DashboardStats::from_records(&[make_user(1, "A")]).cards();
        let labels: Vec<_> = cards.iter().map(|c| c.label).collect();
        assert_eq!(
            labels,
            vec!["Total Users", "Active Sessions", "Growth Rate", "Global Reach"]
        );
        let trends: Vec<_> = cards.iter().map(|c| c.trend).collect();
        assert_eq!(trends, vec!["+12%", "+8%", "+5%", "+3%"]);
        assert_eq!(cards[2].value, "23.5%");
    }

    #[test]
    fn test_feature_cards_target_users() {
        assert_eq!(FEATURE_CARDS.len(), 3);
        assert!(FEATURE_CARDS.iter().all(|f| f.target == Route::Users));
    }
}

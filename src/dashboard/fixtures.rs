//! Dashboard data types and the built-in sample data set.
//!
//! All sections are plain serde types so a replacement data set can be
//! loaded from JSON with [`DashboardData::from_json_file`].

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Member profile shown at the top of the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub avatar_url: String,
    pub level: u32,
    pub current_xp: u32,
    pub target_xp: u32,
    #[serde(default)]
    pub badges: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Benefit {
    pub icon: String,
    pub title: String,
    pub description: String,
    pub cta: String,
}

/// One slice of the reward points distribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointsSource {
    pub name: String,
    pub value: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointsHistory {
    pub month: String,
    pub points: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseCategory {
    pub name: String,
    pub value: u64,
}

/// A transaction as displayed; `amount` keeps its sign and currency, e.g. `-₹550`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub icon: String,
    pub name: String,
    pub date: String,
    pub amount: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditLine {
    pub used: u64,
    pub limit: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentPoint {
    pub name: String,
    pub value: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsGoal {
    pub name: String,
    pub saved: u64,
    pub goal: u64,
}

/// Everything released together with the reward points section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinanceData {
    pub points: Vec<PointsSource>,
    pub history: Vec<PointsHistory>,
    pub expenses: Vec<ExpenseCategory>,
    pub transactions: Vec<Transaction>,
    pub credit: CreditLine,
    #[serde(default)]
    pub investments: Vec<InvestmentPoint>,
    #[serde(default)]
    pub savings: Vec<SavingsGoal>,
}

/// Complete data set behind the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardData {
    pub profile: UserProfile,
    pub benefits: Vec<Benefit>,
    pub finance: FinanceData,
}

impl DashboardData {
    /// Loads a data set from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read dashboard data from {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Invalid dashboard data in {}", path.display()))
    }

    /// The built-in sample data set.
    pub fn sample() -> Self {
        Self {
            profile: sample_profile(),
            benefits: sample_benefits(),
            finance: sample_finance(),
        }
    }
}

fn sample_profile() -> UserProfile {
    UserProfile {
        name: "Rahul Sharma".to_string(),
        avatar_url: "https://i.pravatar.cc/150?img=11".to_string(),
        level: 5,
        current_xp: 1250,
        target_xp: 2000,
        badges: vec![
            "Premium".to_string(),
            "Early Adopter".to_string(),
            "1 Year Club".to_string(),
        ],
    }
}

fn benefit(icon: &str, title: &str, description: &str, cta: &str) -> Benefit {
    Benefit {
        icon: icon.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        cta: cta.to_string(),
    }
}

fn sample_benefits() -> Vec<Benefit> {
    vec![
        benefit("🛍", "CRED Store", "Exclusive products at member-only prices with free delivery.", "Shop Now"),
        benefit("✈", "Travel Benefits", "Special discounts on flights, hotels and holiday packages.", "Explore"),
        benefit("🎁", "Rewards", "Earn CRED coins on every transaction and redeem for exciting rewards.", "View Rewards"),
        benefit("💰", "Rent Payments", "Pay your rent with credit card and earn rewards points.", "Pay Rent"),
        benefit("🏦", "CRED Cash", "Instant personal loans at competitive interest rates.", "Apply Now"),
        benefit("🎭", "CRED Experiences", "Exclusive events, workshops and experiences for members.", "Discover"),
    ]
}

fn sample_finance() -> FinanceData {
    let points = [("Shopping", 4500), ("Bill Payments", 3200), ("Referrals", 1800), ("Promotions", 2500)]
        .iter()
        .map(|(name, value)| PointsSource {
            name: name.to_string(),
            value: *value,
        })
        .collect();

    let history = [("Jan", 2400), ("Feb", 1398), ("Mar", 9800), ("Apr", 3908), ("May", 4800), ("Jun", 3800)]
        .iter()
        .map(|(month, points)| PointsHistory {
            month: month.to_string(),
            points: *points,
        })
        .collect();

    let expenses = [
        ("Groceries", 1200),
        ("Utilities", 800),
        ("Transport", 500),
        ("Entertainment", 700),
        ("Other", 300),
    ]
    .iter()
    .map(|(name, value)| ExpenseCategory {
        name: name.to_string(),
        value: *value,
    })
    .collect();

    let transactions = [
        ("🍔", "Zomato", "2023-07-10", "-₹550"),
        ("🛒", "Myntra", "2023-07-09", "-₹2,500"),
        ("💰", "Salary Credit", "2023-07-01", "+₹50,000"),
        ("💡", "Electricity Bill", "2023-06-28", "-₹1,200"),
    ]
    .iter()
    .map(|(icon, name, date, amount)| Transaction {
        icon: icon.to_string(),
        name: name.to_string(),
        date: date.to_string(),
        amount: amount.to_string(),
    })
    .collect();

    let investments = [
        ("Jan", 100_000),
        ("Feb", 105_000),
        ("Mar", 115_000),
        ("Apr", 110_000),
        ("May", 120_000),
        ("Jun", 130_000),
    ]
    .iter()
    .map(|(name, value)| InvestmentPoint {
        name: name.to_string(),
        value: *value,
    })
    .collect();

    let savings = [
        ("Vacation", 25_000, 50_000),
        ("New Car", 80_000, 200_000),
        ("Gadgets", 15_000, 25_000),
        ("Emergency", 100_000, 100_000),
    ]
    .iter()
    .map(|(name, saved, goal)| SavingsGoal {
        name: name.to_string(),
        saved: *saved,
        goal: *goal,
    })
    .collect();

    FinanceData {
        points,
        history,
        expenses,
        transactions,
        credit: CreditLine {
            used: 70_000,
            limit: 200_000,
        },
        investments,
        savings,
    }
}

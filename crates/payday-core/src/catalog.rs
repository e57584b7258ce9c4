//! The static subscription catalogue.
//!
//! Weekly: entry tier, 5 features
//! Monthly: most popular, 6 features
//! Yearly: one-time payment, 6 features

use crate::models::Plan;

pub const WEEKLY_VIP: Plan = Plan {
    name: "Weekly VIP",
    price: "KES 500",
    period: "per week",
    features: &[
        "5-10 VIP picks daily",
        "85%+ win rate tips",
        "WhatsApp group access",
        "Live match updates",
        "24/7 support",
    ],
    popular: false,
};

pub const MONTHLY_VIP: Plan = Plan {
    name: "Monthly VIP",
    price: "KES 1,500",
    period: "per month",
    features: &[
        "All Weekly features",
        "Premium accumulator tips",
        "Bankroll management guide",
        "Priority support",
        "Exclusive mega odds picks",
        "Early access to tips",
    ],
    popular: true,
};

pub const YEARLY_VIP: Plan = Plan {
    name: "1 Year VIP",
    price: "KES 5,000",
    period: "one-time",
    features: &[
        "All Monthly features",
        "Forever VIP access",
        "Personal betting coach",
        "Custom stake advice",
        "Private 1-on-1 channel",
        "Bonus tips & promos",
    ],
    popular: false,
};

/// All plans in display order.
pub const PLANS: [Plan; 3] = [WEEKLY_VIP, MONTHLY_VIP, YEARLY_VIP];

/// Look a plan up by name, case-insensitively. Also accepts the short
/// handles `weekly`, `monthly` and `yearly`.
pub fn find_plan(name: &str) -> Option<&'static Plan> {
    let needle = name.trim();
    let by_handle = match needle.to_ascii_lowercase().as_str() {
        "weekly" => Some(&PLANS[0]),
        "monthly" => Some(&PLANS[1]),
        "yearly" | "year" | "annual" => Some(&PLANS[2]),
        _ => None,
    };
    by_handle.or_else(|| PLANS.iter().find(|p| p.name.eq_ignore_ascii_case(needle)))
}

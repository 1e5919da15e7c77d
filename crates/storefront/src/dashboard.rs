//! Dashboard data: order and project history.
//!
//! Like the rest of the backend, this is a stand-in: history comes from a
//! hard-coded sample set, not from completed checkouts. The only real rule
//! is the gate - dashboard data is only handed to an authenticated session.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use servex_core::{OrderId, Price, ProjectId, ServiceId};

use crate::models::User;
use crate::services::SessionStore;

/// Order lifecycle status.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

impl OrderStatus {
    /// Human-facing label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }
}

/// How much of an order has been paid.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentStatus {
    /// Nothing collected yet.
    Pending,
    /// The 50% due-now amount has been collected.
    Partial,
    /// Paid in full.
    Paid,
}

impl PaymentStatus {
    /// Human-facing label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Partial => "Partial",
            Self::Paid => "Paid",
        }
    }
}

/// One service within a past order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderedService {
    pub id: ServiceId,
    pub name: String,
    pub price: Price,
}

/// A past order, as shown on the dashboard's orders tab.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Order {
    pub id: OrderId,
    pub date: NaiveDate,
    pub services: Vec<OrderedService>,
    pub status: OrderStatus,
    pub payment_status: PaymentStatus,
    pub total_amount: Price,
    pub paid_amount: Price,
}

/// Project delivery status.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    InProgress,
    Completed,
}

/// An engagement tracked on the dashboard's projects tab.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub start_date: NaiveDate,
    pub expected_end_date: NaiveDate,
    /// Percent complete, 0-100.
    pub progress: u8,
    pub status: ProjectStatus,
}

/// Everything the dashboard shows for one user.
#[derive(Debug, Clone)]
pub struct Dashboard {
    pub user: User,
    pub orders: Vec<Order>,
    pub projects: Vec<Project>,
}

impl Dashboard {
    /// Build the dashboard for the current session.
    ///
    /// Returns `None` for an anonymous session; the caller should route to
    /// login instead.
    #[must_use]
    pub fn for_session(session: &SessionStore) -> Option<Self> {
        let user = session.current_user()?;
        Some(Self {
            user,
            orders: sample_orders(),
            projects: sample_projects(),
        })
    }
}

// Sample dates are literal and always valid; fall back to the epoch rather
// than panicking if one is ever edited wrong.
fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn dollars(amount: u32) -> Price {
    Price::from_dollars(amount)
}

/// The sample order history.
#[must_use]
pub fn sample_orders() -> Vec<Order> {
    vec![
        Order {
            id: OrderId::new("ORD-2025-001"),
            date: date(2025, 7, 1),
            services: vec![OrderedService {
                id: ServiceId::new("1"),
                name: "Basic Website Development".to_owned(),
                price: dollars(999),
            }],
            status: OrderStatus::InProgress,
            payment_status: PaymentStatus::Partial,
            total_amount: dollars(999),
            paid_amount: dollars(999).half(),
        },
        Order {
            id: OrderId::new("ORD-2025-002"),
            date: date(2025, 6, 15),
            services: vec![
                OrderedService {
                    id: ServiceId::new("6"),
                    name: "Basic App Testing".to_owned(),
                    price: dollars(799),
                },
                OrderedService {
                    id: ServiceId::new("10"),
                    name: "Basic Web Scraper".to_owned(),
                    price: dollars(999),
                },
            ],
            status: OrderStatus::Completed,
            payment_status: PaymentStatus::Paid,
            total_amount: dollars(1798),
            paid_amount: dollars(1798),
        },
        Order {
            id: OrderId::new("ORD-2025-003"),
            date: date(2025, 5, 22),
            services: vec![OrderedService {
                id: ServiceId::new("3"),
                name: "Mobile App Development (iOS)".to_owned(),
                price: dollars(3999),
            }],
            status: OrderStatus::Completed,
            payment_status: PaymentStatus::Paid,
            total_amount: dollars(3999),
            paid_amount: dollars(3999),
        },
    ]
}

/// The sample project history.
#[must_use]
pub fn sample_projects() -> Vec<Project> {
    vec![
        Project {
            id: ProjectId::new("PRJ-2025-001"),
            name: "Corporate Website".to_owned(),
            start_date: date(2025, 7, 1),
            expected_end_date: date(2025, 8, 15),
            progress: 35,
            status: ProjectStatus::InProgress,
        },
        Project {
            id: ProjectId::new("PRJ-2025-002"),
            name: "E-commerce Web Scraper".to_owned(),
            start_date: date(2025, 6, 15),
            expected_end_date: date(2025, 6, 30),
            progress: 100,
            status: ProjectStatus::Completed,
        },
        Project {
            id: ProjectId::new("PRJ-2025-003"),
            name: "iOS Fitness App".to_owned(),
            start_date: date(2025, 5, 22),
            expected_end_date: date(2025, 7, 10),
            progress: 100,
            status: ProjectStatus::Completed,
        },
    ]
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::config::SimulatedDelays;
    use crate::storage::MemoryStore;

    #[test]
    fn test_dashboard_requires_authentication() {
        let session = SessionStore::new(Arc::new(MemoryStore::new()), SimulatedDelays::none());
        assert!(Dashboard::for_session(&session).is_none());
    }

    #[tokio::test]
    async fn test_dashboard_for_logged_in_user() {
        let session = SessionStore::new(Arc::new(MemoryStore::new()), SimulatedDelays::none());
        session.login("jane@example.com", "longenough").await.unwrap();

        let dashboard = Dashboard::for_session(&session).unwrap();
        assert_eq!(dashboard.user.email.as_str(), "jane@example.com");
        assert_eq!(dashboard.orders.len(), 3);
        assert_eq!(dashboard.projects.len(), 3);
    }

    #[test]
    fn test_partial_order_paid_half() {
        let orders = sample_orders();
        let partial = orders
            .iter()
            .find(|o| o.payment_status == PaymentStatus::Partial)
            .unwrap();
        assert_eq!(partial.paid_amount, partial.total_amount.half());
    }

    #[test]
    fn test_sample_progress_bounds() {
        assert!(sample_projects().iter().all(|p| p.progress <= 100));
    }
}

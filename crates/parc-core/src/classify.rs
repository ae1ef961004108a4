//! Date-threshold classification for warranties and delivery schedules.
//!
//! Both classifiers are pure: the reference day is always passed in, never
//! read from the clock, so a render pass evaluates every record against the
//! same instant and tests stay deterministic.

use chrono::NaiveDate;

/// A warranty counts as "expire bientôt" within this many days of its end.
pub const WARRANTY_WARNING_DAYS: i64 = 30;

/// Warranty window relative to the reference day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarrantyState {
    Expired,
    ExpiringSoon,
    Active,
}

impl WarrantyState {
    pub fn as_str(&self) -> &'static str {
        match self {
            WarrantyState::Expired => "Expirée",
            WarrantyState::ExpiringSoon => "Expire bientôt",
            WarrantyState::Active => "Sous garantie",
        }
    }
}

/// Warranty window plus the interval magnitude in whole days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WarrantyStatus {
    pub state: WarrantyState,
    /// Days remaining, or days since expiry for [`WarrantyState::Expired`].
    pub days: u64,
}

impl WarrantyStatus {
    /// Badge detail line: "Expirée depuis 12j" or "45 jours restants".
    pub fn detail(&self) -> String {
        match self.state {
            WarrantyState::Expired => format!("Expirée depuis {}j", self.days),
            _ => format!("{} jours restants", self.days),
        }
    }
}

/// Classify a warranty end date against the reference day.
///
/// `end == today` is still "expire bientôt" with magnitude 0; expiry starts
/// the day after.
pub fn warranty_status(end: NaiveDate, today: NaiveDate) -> WarrantyStatus {
    let days = (end - today).num_days();
    if days < 0 {
        WarrantyStatus {
            state: WarrantyState::Expired,
            days: days.unsigned_abs(),
        }
    } else if days <= WARRANTY_WARNING_DAYS {
        WarrantyStatus {
            state: WarrantyState::ExpiringSoon,
            days: days.unsigned_abs(),
        }
    } else {
        WarrantyStatus {
            state: WarrantyState::Active,
            days: days.unsigned_abs(),
        }
    }
}

/// Schedule position of a delivery.
///
/// The first three variants apply once the goods arrived (actual date
/// known); the last three compare the planned date to the reference day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryTiming {
    Early(u64),
    OnTime,
    Late(u64),
    Overdue(u64),
    DueToday,
    Upcoming(u64),
}

impl DeliveryTiming {
    /// Short label as shown in the delay column.
    pub fn label(&self) -> String {
        match self {
            DeliveryTiming::Early(days) => format!("{days}j d'avance"),
            DeliveryTiming::OnTime => "À temps".to_string(),
            DeliveryTiming::Late(days) => format!("{days}j de retard"),
            DeliveryTiming::Overdue(days) => format!("{days}j de retard"),
            DeliveryTiming::DueToday => "Aujourd'hui".to_string(),
            DeliveryTiming::Upcoming(days) => format!("Dans {days}j"),
        }
    }

    /// True when the delivery is behind schedule, received or not.
    pub fn is_late(&self) -> bool {
        matches!(self, DeliveryTiming::Late(_) | DeliveryTiming::Overdue(_))
    }
}

/// Classify a delivery's schedule.
pub fn delivery_timing(
    planned: NaiveDate,
    actual: Option<NaiveDate>,
    today: NaiveDate,
) -> DeliveryTiming {
    match actual {
        Some(actual) => {
            let diff = (planned - actual).num_days();
            if diff > 0 {
                DeliveryTiming::Early(diff.unsigned_abs())
            } else if diff < 0 {
                DeliveryTiming::Late(diff.unsigned_abs())
            } else {
                DeliveryTiming::OnTime
            }
        }
        None => {
            let remaining = (planned - today).num_days();
            if remaining < 0 {
                DeliveryTiming::Overdue(remaining.unsigned_abs())
            } else if remaining == 0 {
                DeliveryTiming::DueToday
            } else {
                DeliveryTiming::Upcoming(remaining.unsigned_abs())
            }
        }
    }
}

//! Boundary tests for the warranty and delivery classifiers.

use chrono::{Days, NaiveDate};
use parc_core::{DeliveryTiming, WarrantyState, delivery_timing, warranty_status};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn warranty_ending_today_is_expiring_soon() {
    let today = day(2024, 7, 20);
    let status = warranty_status(today, today);
    assert_eq!(status.state, WarrantyState::ExpiringSoon);
    assert_eq!(status.days, 0);
}

#[test]
fn warranty_ended_yesterday_is_expired() {
    let today = day(2024, 7, 20);
    let status = warranty_status(today - Days::new(1), today);
    assert_eq!(status.state, WarrantyState::Expired);
    assert_eq!(status.days, 1);
    assert_eq!(status.detail(), "Expirée depuis 1j");
}

#[test]
fn warranty_window_edges() {
    let today = day(2024, 7, 20);
    // Day 30 is still inside the warning window, day 31 is not.
    let at_threshold = warranty_status(today + Days::new(30), today);
    assert_eq!(at_threshold.state, WarrantyState::ExpiringSoon);
    assert_eq!(at_threshold.days, 30);

    let beyond = warranty_status(today + Days::new(31), today);
    assert_eq!(beyond.state, WarrantyState::Active);
    assert_eq!(beyond.days, 31);
    assert_eq!(beyond.detail(), "31 jours restants");
}

#[test]
fn received_deliveries_compare_planned_to_actual() {
    let today = day(2024, 7, 20);
    let planned = day(2024, 7, 15);

    assert_eq!(
        delivery_timing(planned, Some(day(2024, 7, 14)), today),
        DeliveryTiming::Early(1)
    );
    assert_eq!(
        delivery_timing(planned, Some(planned), today),
        DeliveryTiming::OnTime
    );
    assert_eq!(
        delivery_timing(planned, Some(day(2024, 7, 18)), today),
        DeliveryTiming::Late(3)
    );
}

#[test]
fn pending_deliveries_compare_planned_to_today() {
    let today = day(2024, 7, 20);

    assert_eq!(
        delivery_timing(day(2024, 7, 18), None, today),
        DeliveryTiming::Overdue(2)
    );
    assert_eq!(
        delivery_timing(today, None, today),
        DeliveryTiming::DueToday
    );
    assert_eq!(
        delivery_timing(day(2024, 7, 30), None, today),
        DeliveryTiming::Upcoming(10)
    );
}

#[test]
fn labels_match_the_delay_column() {
    assert_eq!(DeliveryTiming::Early(3).label(), "3j d'avance");
    assert_eq!(DeliveryTiming::OnTime.label(), "À temps");
    assert_eq!(DeliveryTiming::Late(2).label(), "2j de retard");
    assert_eq!(DeliveryTiming::Overdue(5).label(), "5j de retard");
    assert_eq!(DeliveryTiming::DueToday.label(), "Aujourd'hui");
    assert_eq!(DeliveryTiming::Upcoming(5).label(), "Dans 5j");

    assert!(DeliveryTiming::Late(2).is_late());
    assert!(DeliveryTiming::Overdue(5).is_late());
    assert!(!DeliveryTiming::Early(3).is_late());
}

//! The seeded stores drive the same numbers the dashboard cards show.

use chrono::NaiveDate;
use parc_cli::seed;
use parc_core::{
    Selection, ViewQuery, WarrantyState, apply, count_matching, create_order, delivery_timing,
    sum_of, warranty_status,
};
use parc_model::{
    DeliveryStatus, EquipmentStatus, OrderDraft, OrderScope, OrderStatus, ProcurementMode,
};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn equipment_counters_match_the_sample_park() {
    let store = seed::equipment_store().unwrap();
    assert_eq!(store.len(), 5);
    assert_eq!(
        count_matching(store.records(), |item| {
            item.statut == EquipmentStatus::Operationnel
        }),
        3
    );
    assert_eq!(
        count_matching(store.records(), |item| item.statut == EquipmentStatus::Panne),
        1
    );
    assert_eq!(sum_of(store.records(), |item| item.prix_achat), 86_400.0);
}

#[test]
fn one_warranty_expires_within_the_window() {
    let store = seed::equipment_store().unwrap();
    let today = day(2024, 11, 1);
    let expiring = count_matching(store.records(), |item| {
        warranty_status(item.date_fin_garantie, today).state == WarrantyState::ExpiringSoon
    });
    // The HP ProBook's warranty ends 2024-11-20.
    assert_eq!(expiring, 1);
}

#[test]
fn order_counters_match_the_sample_orders() {
    let store = seed::order_store().unwrap();
    assert_eq!(store.len(), 3);
    assert_eq!(sum_of(store.records(), |order| order.montant_ht), 201_500.0);
    assert_eq!(
        count_matching(store.records(), |order| order.statut == OrderStatus::Paye),
        1
    );
}

#[test]
fn one_delivery_is_late_on_the_reference_day() {
    let store = seed::delivery_store().unwrap();
    let today = day(2024, 7, 20);
    let late = count_matching(store.records(), |delivery| {
        delivery.statut == DeliveryStatus::Retardee
            || delivery_timing(delivery.date_prevue, delivery.date_effective, today).is_late()
    });
    assert_eq!(late, 1);
}

#[test]
fn searching_dell_finds_the_two_dell_machines() {
    let store = seed::equipment_store().unwrap();
    let view = apply(store.records(), &ViewQuery::new().with_search("dell")).unwrap();
    let codes: Vec<&str> = view
        .iter()
        .map(|item| item.code_inventaire.as_str())
        .collect();
    assert_eq!(codes, vec!["INV-IT-2024-001", "INV-IT-2024-005"]);
}

#[test]
fn filtering_on_an_absent_location_yields_an_empty_view() {
    let store = seed::equipment_store().unwrap();
    let view = apply(
        store.records(),
        &ViewQuery::new().with_filter("lieu", Selection::value("Annexe Rabat")),
    )
    .unwrap();
    assert!(view.is_empty());
}

#[test]
fn a_new_contrat_order_extends_the_seeded_sequence() {
    let mut store = seed::order_store().unwrap();
    let numero = create_order(
        &mut store,
        OrderDraft {
            scope: Some(OrderScope::Bureau),
            mode_passation: Some(ProcurementMode::Contrat),
            fournisseur: Some("OfficeSupply".to_string()),
            montant_ht: Some(30_000.0),
            ..OrderDraft::default()
        },
        day(2024, 7, 20),
    )
    .unwrap()
    .numero
    .clone();
    assert_eq!(numero, "CT-BUR-2024-004");
    assert_eq!(store.len(), 4);
}

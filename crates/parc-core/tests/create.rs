//! Create flows and dashboard aggregates, end to end.

use chrono::NaiveDate;
use parc_core::{RecordStore, count_matching, create_order, sum_of};
use parc_model::{
    OrderDraft, OrderEquipmentKind, OrderScope, OrderStatus, ParcError, ProcurementMode,
    PurchaseOrder, RecordId, WarrantyUnit,
};

fn seeded_order(id: &str, numero: &str, montant: f64, statut: OrderStatus) -> PurchaseOrder {
    PurchaseOrder {
        id: RecordId::from(id),
        numero: numero.to_string(),
        scope: OrderScope::It,
        date_commande: NaiveDate::from_ymd_opt(2024, 7, 10).unwrap(),
        fournisseur: "TechnoMaroc".to_string(),
        mode_passation: ProcurementMode::Bc,
        montant_ht: montant,
        numero_facture: None,
        date_reception: None,
        statut,
        duree_garantie: 12,
        unite_garantie: WarrantyUnit::Mois,
        type_equipement: OrderEquipmentKind::Imprimante,
    }
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 7, 20).unwrap()
}

#[test]
fn dashboard_totals_over_three_orders() {
    let store = RecordStore::with_records(vec![
        seeded_order("1", "BC-2024-001", 125_000.0, OrderStatus::Paye),
        seeded_order("2", "CT-2024-002", 89_500.0, OrderStatus::Facture),
        seeded_order("3", "MP-2024-001", 156_000.0, OrderStatus::Commande),
    ])
    .unwrap();

    let total = sum_of(store.records(), |order| order.montant_ht);
    assert_eq!(total, 370_500.0);

    let paid = count_matching(store.records(), |order| order.statut == OrderStatus::Paye);
    assert_eq!(paid, 1);
}

#[test]
fn third_contrat_order_gets_sequence_003() {
    let mut store = RecordStore::with_records(vec![
        seeded_order("1", "BC-2024-001", 125_000.0, OrderStatus::Paye),
        seeded_order("2", "CT-2024-002", 89_500.0, OrderStatus::Facture),
    ])
    .unwrap();

    let created = create_order(
        &mut store,
        OrderDraft {
            mode_passation: Some(ProcurementMode::Contrat),
            fournisseur: Some("DigitalPro".to_string()),
            montant_ht: Some(16_800.0),
            ..OrderDraft::default()
        },
        today(),
    )
    .unwrap();

    assert!(created.numero.starts_with("CT-"));
    assert!(created.numero.ends_with("-003"));
    assert_eq!(created.numero, "CT-2024-003");
    assert_eq!(created.statut, OrderStatus::EnAttente);
    assert_eq!(store.len(), 3);
}

#[test]
fn bureau_orders_carry_the_bur_segment() {
    let mut store = RecordStore::new();
    let created = create_order(
        &mut store,
        OrderDraft {
            scope: Some(OrderScope::Bureau),
            fournisseur: Some("BureauExpert".to_string()),
            montant_ht: Some(45_000.0),
            ..OrderDraft::default()
        },
        today(),
    )
    .unwrap();
    assert_eq!(created.numero, "BC-BUR-2024-001");
}

#[test]
fn rejected_draft_leaves_the_store_untouched() {
    let mut store = RecordStore::with_records(vec![seeded_order(
        "1",
        "BC-2024-001",
        125_000.0,
        OrderStatus::Paye,
    )])
    .unwrap();

    let err = create_order(&mut store, OrderDraft::default(), today()).unwrap_err();
    assert!(matches!(err, ParcError::MissingField { .. }));
    assert_eq!(store.len(), 1);
}

#[test]
fn created_orders_get_fresh_identifiers() {
    let mut store = RecordStore::with_records(vec![
        seeded_order("1", "BC-2024-001", 125_000.0, OrderStatus::Paye),
        seeded_order("2", "CT-2024-002", 89_500.0, OrderStatus::Facture),
    ])
    .unwrap();

    let id = create_order(
        &mut store,
        OrderDraft {
            fournisseur: Some("InfoSupply".to_string()),
            montant_ht: Some(8_900.0),
            ..OrderDraft::default()
        },
        today(),
    )
    .unwrap()
    .id
    .clone();

    assert_eq!(id.as_str(), "3");
    assert!(store.get(&id).is_some());
}

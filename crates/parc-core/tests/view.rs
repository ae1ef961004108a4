//! Properties of the derived view pipeline: search, filters, sort, pages.

use chrono::NaiveDate;
use proptest::prelude::*;

use parc_core::{
    Paginator, Selection, SortSpec, ViewQuery, apply, count_matching,
};
use parc_model::{
    OrderEquipmentKind, OrderScope, OrderStatus, ParcError, ProcurementMode, PurchaseOrder,
    RecordId, WarrantyUnit,
};

const SUPPLIERS: [&str; 5] = [
    "TechnoMaroc",
    "InfoSupply",
    "DigitalPro",
    "BureauExpert",
    "OfficeSupply",
];

const STATUSES: [OrderStatus; 5] = [
    OrderStatus::EnAttente,
    OrderStatus::Commande,
    OrderStatus::Recu,
    OrderStatus::Facture,
    OrderStatus::Paye,
];

fn order(index: usize, supplier: &str, montant: f64, statut: OrderStatus) -> PurchaseOrder {
    PurchaseOrder {
        id: RecordId::new((index + 1).to_string()),
        numero: format!("BC-2024-{:03}", index + 1),
        scope: OrderScope::It,
        date_commande: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
        fournisseur: supplier.to_string(),
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

fn orders_strategy() -> impl Strategy<Value = Vec<PurchaseOrder>> {
    prop::collection::vec(
        (0usize..SUPPLIERS.len(), 0.0f64..200_000.0, 0usize..STATUSES.len()),
        0..40,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(index, (supplier, montant, statut))| {
                order(index, SUPPLIERS[supplier], montant, STATUSES[statut])
            })
            .collect()
    })
}

fn ids(rows: &[&PurchaseOrder]) -> Vec<String> {
    rows.iter().map(|row| row.id.as_str().to_string()).collect()
}

proptest! {
    #[test]
    fn search_is_case_insensitive(
        orders in orders_strategy(),
        query in prop::sample::select(vec!["tech", "Supply", "BC-2024", "maroc", "digitalpro"]),
    ) {
        let lower = apply(&orders, &ViewQuery::new().with_search(query.to_lowercase())).unwrap();
        let upper = apply(&orders, &ViewQuery::new().with_search(query.to_uppercase())).unwrap();
        let as_is = apply(&orders, &ViewQuery::new().with_search(query)).unwrap();
        prop_assert_eq!(ids(&lower), ids(&upper));
        prop_assert_eq!(ids(&lower), ids(&as_is));
    }

    #[test]
    fn all_filters_keep_the_store_intact(orders in orders_strategy()) {
        let query = ViewQuery::new()
            .with_filter("statut", Selection::All)
            .with_filter("mode", Selection::All)
            .with_filter("type", Selection::All);
        let view = apply(&orders, &query).unwrap();
        let original: Vec<String> =
            orders.iter().map(|order| order.id.as_str().to_string()).collect();
        prop_assert_eq!(ids(&view), original);
    }

    #[test]
    fn status_filter_partitions_the_store(orders in orders_strategy()) {
        let paid = apply(
            &orders,
            &ViewQuery::new().with_filter("statut", Selection::value("Payé")),
        )
        .unwrap();
        let unpaid = count_matching(&orders, |order| order.statut != OrderStatus::Paye);
        prop_assert_eq!(paid.len() + unpaid, orders.len());
    }

    #[test]
    fn sort_is_idempotent(orders in orders_strategy()) {
        let query = ViewQuery::new().with_sort(SortSpec::ascending("fournisseur"));
        let once: Vec<PurchaseOrder> = apply(&orders, &query)
            .unwrap()
            .into_iter()
            .cloned()
            .collect();
        let twice = apply(&once, &query).unwrap();
        let once_ids: Vec<String> =
            once.iter().map(|order| order.id.as_str().to_string()).collect();
        prop_assert_eq!(ids(&twice), once_ids);
    }

    #[test]
    fn pages_cover_the_view_exactly_once(
        orders in orders_strategy(),
        page_size in 1usize..8,
    ) {
        let view = apply(&orders, &ViewQuery::new()).unwrap();
        let paginator = Paginator::new(page_size);
        let mut reassembled = Vec::new();
        for number in 1..=paginator.total_pages(view.len()) {
            reassembled.extend_from_slice(paginator.page(&view, number).items);
        }
        prop_assert_eq!(ids(&reassembled), ids(&view));
    }
}

#[test]
fn empty_store_yields_an_empty_view() {
    let orders: Vec<PurchaseOrder> = Vec::new();
    let view = apply(&orders, &ViewQuery::new().with_search("dell")).unwrap();
    assert!(view.is_empty());
}

#[test]
fn filter_value_absent_from_the_store_yields_empty_not_error() {
    let orders = vec![order(0, "TechnoMaroc", 45_000.0, OrderStatus::Paye)];
    let view = apply(
        &orders,
        &ViewQuery::new().with_filter("statut", Selection::value("Reçu")),
    )
    .unwrap();
    assert!(view.is_empty());
}

#[test]
fn filters_compose_conjunctively() {
    let orders = vec![
        order(0, "TechnoMaroc", 45_000.0, OrderStatus::Paye),
        order(1, "TechnoMaroc", 67_500.0, OrderStatus::Facture),
        order(2, "InfoSupply", 89_000.0, OrderStatus::Paye),
    ];
    let view = apply(
        &orders,
        &ViewQuery::new()
            .with_search("techno")
            .with_filter("statut", Selection::value("Payé")),
    )
    .unwrap();
    assert_eq!(ids(&view), vec!["1".to_string()]);
}

#[test]
fn descending_sort_reverses_comparable_rows() {
    let orders = vec![
        order(0, "TechnoMaroc", 45_000.0, OrderStatus::Paye),
        order(1, "InfoSupply", 89_000.0, OrderStatus::Paye),
        order(2, "DigitalPro", 67_500.0, OrderStatus::Paye),
    ];
    let view = apply(
        &orders,
        &ViewQuery::new().with_sort(SortSpec::descending("montant")),
    )
    .unwrap();
    assert_eq!(ids(&view), vec!["2".to_string(), "3".to_string(), "1".to_string()]);
}

#[test]
fn unknown_sort_column_is_a_caller_error() {
    let orders = vec![order(0, "TechnoMaroc", 45_000.0, OrderStatus::Paye)];
    let err = apply(
        &orders,
        &ViewQuery::new().with_sort(SortSpec::ascending("couleur")),
    )
    .unwrap_err();
    assert!(matches!(err, ParcError::UnknownColumn(column) if column == "couleur"));
}

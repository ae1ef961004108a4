//! Export integration: filtered views in, delimited rows out.

use std::fs;
use std::io::Write as _;

use chrono::NaiveDate;
use parc_core::{Selection, ViewQuery, apply};
use parc_export::{csv_string, write_csv};
use parc_model::{
    Equipment, EquipmentKind, EquipmentStatus, OrderEquipmentKind, OrderScope, OrderStatus,
    ProcurementMode, PurchaseOrder, RecordId, WarrantyUnit,
};

fn equipment(id: &str, designation: &str, statut: EquipmentStatus) -> Equipment {
    Equipment {
        id: RecordId::from(id),
        code_inventaire: format!("INV-IT-2024-{id:0>3}"),
        numero_serie: format!("SN-{id}"),
        designation: designation.to_string(),
        marque: "Dell".to_string(),
        modele: "Latitude 7520".to_string(),
        kind: EquipmentKind::OrdinateurPortable,
        statut,
        utilisateur: None,
        lieu: "Siège ADD".to_string(),
        etage: None,
        bureau: None,
        date_achat: NaiveDate::from_ymd_opt(2023, 3, 15).unwrap(),
        prix_achat: 12_500.0,
        fournisseur: "TechnoMaroc".to_string(),
        numero_commande: "BC-2024-001".to_string(),
        duree_garantie_mois: 36,
        date_fin_garantie: NaiveDate::from_ymd_opt(2026, 3, 15).unwrap(),
        observations: None,
    }
}

fn order(id: &str, statut: OrderStatus) -> PurchaseOrder {
    PurchaseOrder {
        id: RecordId::from(id),
        numero: format!("BC-2024-{id:0>3}"),
        scope: OrderScope::It,
        date_commande: NaiveDate::from_ymd_opt(2024, 7, 10).unwrap(),
        fournisseur: "TechnoMaroc".to_string(),
        mode_passation: ProcurementMode::Bc,
        montant_ht: 45_000.0,
        numero_facture: None,
        date_reception: None,
        statut,
        duree_garantie: 12,
        unite_garantie: WarrantyUnit::Mois,
        type_equipement: OrderEquipmentKind::Imprimante,
    }
}

#[test]
fn header_row_keeps_the_column_order() {
    let rows = vec![equipment("1", "Ordinateur portable", EquipmentStatus::Operationnel)];
    let view: Vec<&Equipment> = rows.iter().collect();
    let text = csv_string(&view).unwrap();
    let header = text.lines().next().unwrap();
    assert!(header.starts_with("\"ID\",\"Code inventaire\",\"Désignation\""));
    assert!(header.ends_with("\"Fin garantie\""));
}

#[test]
fn text_fields_are_quoted_and_amounts_are_not() {
    let rows = vec![equipment("1", "Ordinateur portable", EquipmentStatus::Operationnel)];
    let view: Vec<&Equipment> = rows.iter().collect();
    let text = csv_string(&view).unwrap();
    let data = text.lines().nth(1).unwrap();
    assert!(data.contains("\"Ordinateur portable\""));
    assert!(data.contains("\"Opérationnel\""));
    assert!(data.contains("\"2023-03-15\""));
    assert!(data.contains(",12500,"));
}

#[test]
fn unset_optionals_render_empty() {
    let rows = vec![order("1", OrderStatus::EnAttente)];
    let view: Vec<&PurchaseOrder> = rows.iter().collect();
    let text = csv_string(&view).unwrap();
    let data = text.lines().nth(1).unwrap();
    // numero_facture sits between Montant HT and Statut.
    assert!(data.contains(",45000,\"\",\"En attente\","));
}

#[test]
fn export_takes_the_filtered_view_not_pages() {
    let rows = vec![
        order("1", OrderStatus::Paye),
        order("2", OrderStatus::Facture),
        order("3", OrderStatus::Paye),
    ];
    let view = apply(
        &rows,
        &ViewQuery::new().with_filter("statut", Selection::value("Payé")),
    )
    .unwrap();
    let text = csv_string(&view).unwrap();
    // Header plus the two matching records.
    assert_eq!(text.lines().count(), 3);
}

#[test]
fn writes_to_a_file_on_disk() {
    let rows = vec![equipment("1", "Serveur HPE", EquipmentStatus::Stock)];
    let view: Vec<&Equipment> = rows.iter().collect();

    let mut file = tempfile::NamedTempFile::new().unwrap();
    write_csv(&view, &mut file).unwrap();
    file.flush().unwrap();

    let contents = fs::read_to_string(file.path()).unwrap();
    assert!(contents.starts_with("\"ID\""));
    assert_eq!(contents.lines().count(), 2);
}

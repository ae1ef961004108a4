//! Demo data seeded into the record stores at startup.
//!
//! One store per entity type, populated with the agency's sample park so
//! every command has something to show without a backend.

use chrono::NaiveDate;
use parc_core::RecordStore;
use parc_model::{
    Delivery, DeliveryKind, DeliveryStatus, Equipment, EquipmentKind, EquipmentStatus,
    OrderEquipmentKind, OrderScope, OrderStatus, ProcurementMode, PurchaseOrder, RecordId, Result,
    WarrantyUnit,
};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    // Seed literals are all valid calendar dates.
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

/// The IT inventory.
pub fn equipment_store() -> Result<RecordStore<Equipment>> {
    RecordStore::with_records(vec![
        Equipment {
            id: RecordId::from("1"),
            code_inventaire: "INV-IT-2024-001".to_string(),
            numero_serie: "DL75200123".to_string(),
            designation: "Ordinateur portable Dell Latitude 7520".to_string(),
            marque: "Dell".to_string(),
            modele: "Latitude 7520".to_string(),
            kind: EquipmentKind::OrdinateurPortable,
            statut: EquipmentStatus::Operationnel,
            utilisateur: Some("Ahmed Benali".to_string()),
            lieu: "Siège ADD".to_string(),
            etage: Some("3ème étage".to_string()),
            bureau: Some("Bureau 301".to_string()),
            date_achat: day(2023, 3, 15),
            prix_achat: 12_500.0,
            fournisseur: "TechnoMaroc".to_string(),
            numero_commande: "BC-2024-001".to_string(),
            duree_garantie_mois: 36,
            date_fin_garantie: day(2026, 3, 15),
            observations: Some("Configuration développeur avec SSD 1TB".to_string()),
        },
        Equipment {
            id: RecordId::from("2"),
            code_inventaire: "INV-IT-2024-002".to_string(),
            numero_serie: "HP45040567".to_string(),
            designation: "Ordinateur portable HP ProBook 450".to_string(),
            marque: "HP".to_string(),
            modele: "ProBook 450".to_string(),
            kind: EquipmentKind::OrdinateurPortable,
            statut: EquipmentStatus::Panne,
            utilisateur: Some("Fatima Zahra".to_string()),
            lieu: "Siège ADD".to_string(),
            etage: Some("2ème étage".to_string()),
            bureau: Some("Bureau 205".to_string()),
            date_achat: day(2022, 11, 20),
            prix_achat: 8_900.0,
            fournisseur: "InfoSupply".to_string(),
            numero_commande: "BC-2023-045".to_string(),
            duree_garantie_mois: 24,
            date_fin_garantie: day(2024, 11, 20),
            observations: Some("Problème disque dur - En attente SAV".to_string()),
        },
        Equipment {
            id: RecordId::from("3"),
            code_inventaire: "INV-IT-2024-003".to_string(),
            numero_serie: "MBP2023789".to_string(),
            designation: "MacBook Pro M2 13 pouces".to_string(),
            marque: "Apple".to_string(),
            modele: "MacBook Pro M2".to_string(),
            kind: EquipmentKind::OrdinateurPortable,
            statut: EquipmentStatus::Operationnel,
            utilisateur: Some("Mohammed Alami".to_string()),
            lieu: "Siège ADD".to_string(),
            etage: Some("4ème étage".to_string()),
            bureau: Some("Bureau 401".to_string()),
            date_achat: day(2023, 8, 10),
            prix_achat: 16_800.0,
            fournisseur: "DigitalPro".to_string(),
            numero_commande: "CT-2024-002".to_string(),
            duree_garantie_mois: 24,
            date_fin_garantie: day(2025, 8, 10),
            observations: None,
        },
        Equipment {
            id: RecordId::from("4"),
            code_inventaire: "INV-IT-2024-004".to_string(),
            numero_serie: "SRV-HPE-001".to_string(),
            designation: "Serveur HPE ProLiant DL360".to_string(),
            marque: "HPE".to_string(),
            modele: "ProLiant DL360".to_string(),
            kind: EquipmentKind::Serveur,
            statut: EquipmentStatus::Operationnel,
            utilisateur: None,
            lieu: "Data Center ADD".to_string(),
            etage: Some("Sous-sol".to_string()),
            bureau: Some("Salle serveur A".to_string()),
            date_achat: day(2023, 1, 20),
            prix_achat: 45_000.0,
            fournisseur: "TechnoMaroc".to_string(),
            numero_commande: "MP-2024-001".to_string(),
            duree_garantie_mois: 60,
            date_fin_garantie: day(2028, 1, 20),
            observations: Some("Serveur principal bases de données".to_string()),
        },
        Equipment {
            id: RecordId::from("5"),
            code_inventaire: "INV-IT-2024-005".to_string(),
            numero_serie: "MON-DELL-27".to_string(),
            designation: "Écran Dell UltraSharp 27 pouces".to_string(),
            marque: "Dell".to_string(),
            modele: "UltraSharp U2723QE".to_string(),
            kind: EquipmentKind::Ecran,
            statut: EquipmentStatus::Stock,
            utilisateur: None,
            lieu: "Magasin IT".to_string(),
            etage: Some("Rez-de-chaussée".to_string()),
            bureau: Some("Stock-001".to_string()),
            date_achat: day(2024, 6, 15),
            prix_achat: 3_200.0,
            fournisseur: "InfoSupply".to_string(),
            numero_commande: "BC-2024-078".to_string(),
            duree_garantie_mois: 36,
            date_fin_garantie: day(2027, 6, 15),
            observations: None,
        },
    ])
}

/// The office purchase orders.
pub fn order_store() -> Result<RecordStore<PurchaseOrder>> {
    RecordStore::with_records(vec![
        PurchaseOrder {
            id: RecordId::from("1"),
            numero: "BC-BUR-2024-001".to_string(),
            scope: OrderScope::Bureau,
            date_commande: day(2024, 7, 10),
            fournisseur: "BureauExpert".to_string(),
            mode_passation: ProcurementMode::Bc,
            montant_ht: 45_000.0,
            numero_facture: Some("FB-2024-001".to_string()),
            date_reception: Some(day(2024, 7, 15)),
            statut: OrderStatus::Paye,
            duree_garantie: 12,
            unite_garantie: WarrantyUnit::Mois,
            type_equipement: OrderEquipmentKind::Imprimante,
        },
        PurchaseOrder {
            id: RecordId::from("2"),
            numero: "CT-BUR-2024-002".to_string(),
            scope: OrderScope::Bureau,
            date_commande: day(2024, 7, 12),
            fournisseur: "OfficeSupply".to_string(),
            mode_passation: ProcurementMode::Contrat,
            montant_ht: 67_500.0,
            numero_facture: Some("FB-2024-002".to_string()),
            date_reception: None,
            statut: OrderStatus::Facture,
            duree_garantie: 24,
            unite_garantie: WarrantyUnit::Mois,
            type_equipement: OrderEquipmentKind::Photocopieur,
        },
        PurchaseOrder {
            id: RecordId::from("3"),
            numero: "MP-BUR-2024-001".to_string(),
            scope: OrderScope::Bureau,
            date_commande: day(2024, 7, 18),
            fournisseur: "MobilierPro".to_string(),
            mode_passation: ProcurementMode::Marche,
            montant_ht: 89_000.0,
            numero_facture: None,
            date_reception: None,
            statut: OrderStatus::Commande,
            duree_garantie: 60,
            unite_garantie: WarrantyUnit::Mois,
            type_equipement: OrderEquipmentKind::Mobilier,
        },
    ])
}

/// The delivery tracking board.
pub fn delivery_store() -> Result<RecordStore<Delivery>> {
    RecordStore::with_records(vec![
        Delivery {
            id: RecordId::from("1"),
            numero_commande: "BC-2024-001".to_string(),
            kind: DeliveryKind::It,
            fournisseur: "TechnoMaroc".to_string(),
            statut: DeliveryStatus::Livree,
            date_prevue: day(2024, 7, 15),
            date_effective: Some(day(2024, 7, 14)),
            date_reception: Some(day(2024, 7, 14)),
            responsable_reception: Some("Ahmed Benali".to_string()),
            lieu_livraison: "Siège ADD - Magasin IT".to_string(),
            montant_total: 125_000.0,
            nombre_articles: 15,
            articles_recus: Some(15),
            conforme: Some(true),
            pv_reception: true,
            transporteur: Some("DHL Express".to_string()),
            numero_suivi: Some("DHL123456789".to_string()),
            observations: Some("Livraison conforme, tous les équipements testés".to_string()),
        },
        Delivery {
            id: RecordId::from("2"),
            numero_commande: "CT-2024-002".to_string(),
            kind: DeliveryKind::It,
            fournisseur: "InfoSupply".to_string(),
            statut: DeliveryStatus::EnTransit,
            date_prevue: day(2024, 7, 25),
            date_effective: None,
            date_reception: None,
            responsable_reception: None,
            lieu_livraison: "Siège ADD - Réception".to_string(),
            montant_total: 89_500.0,
            nombre_articles: 8,
            articles_recus: None,
            conforme: None,
            pv_reception: false,
            transporteur: Some("Messagerie Express".to_string()),
            numero_suivi: Some("ME2024789456".to_string()),
            observations: None,
        },
        Delivery {
            id: RecordId::from("3"),
            numero_commande: "BC-BUR-2024-003".to_string(),
            kind: DeliveryKind::Bureau,
            fournisseur: "BureauExpert".to_string(),
            statut: DeliveryStatus::Retardee,
            date_prevue: day(2024, 7, 20),
            date_effective: None,
            date_reception: None,
            responsable_reception: None,
            lieu_livraison: "Siège ADD - Hall principal".to_string(),
            montant_total: 45_000.0,
            nombre_articles: 25,
            articles_recus: None,
            conforme: None,
            pv_reception: false,
            transporteur: Some("Transport Local".to_string()),
            numero_suivi: None,
            observations: Some("Retard fournisseur - Nouveau délai : 28 juillet".to_string()),
        },
        Delivery {
            id: RecordId::from("4"),
            numero_commande: "MP-2024-001".to_string(),
            kind: DeliveryKind::It,
            fournisseur: "DigitalPro".to_string(),
            statut: DeliveryStatus::Programmee,
            date_prevue: day(2024, 7, 30),
            date_effective: None,
            date_reception: None,
            responsable_reception: None,
            lieu_livraison: "Data Center ADD".to_string(),
            montant_total: 156_000.0,
            nombre_articles: 3,
            articles_recus: None,
            conforme: None,
            pv_reception: false,
            transporteur: Some("Transport Spécialisé IT".to_string()),
            numero_suivi: None,
            observations: Some("Livraison serveurs - Installation programmée".to_string()),
        },
        Delivery {
            id: RecordId::from("5"),
            numero_commande: "BC-BUR-2024-005".to_string(),
            kind: DeliveryKind::Bureau,
            fournisseur: "MobilierPro".to_string(),
            statut: DeliveryStatus::PartiellementLivree,
            date_prevue: day(2024, 7, 18),
            date_effective: Some(day(2024, 7, 18)),
            date_reception: Some(day(2024, 7, 18)),
            responsable_reception: Some("Fatima Zahra".to_string()),
            lieu_livraison: "Siège ADD - 4ème étage".to_string(),
            montant_total: 67_500.0,
            nombre_articles: 12,
            articles_recus: Some(8),
            conforme: Some(false),
            pv_reception: true,
            transporteur: Some("Mobilier Transport".to_string()),
            numero_suivi: None,
            observations: Some("4 articles manquants - En attente de complément".to_string()),
        },
    ])
}

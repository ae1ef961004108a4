//! Commandes: purchase orders for IT and office equipment.
//!
//! Order numbers encode the procurement mode, the scope and a per-store
//! sequence: `BC-2024-001` for an IT bon de commande, `CT-BUR-2024-002` for
//! an office contrat.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, require};
use crate::ids::RecordId;

/// Procurement mode, which drives the order-number prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProcurementMode {
    /// Bon de commande.
    Bc,
    /// Contrat-cadre.
    Contrat,
    /// Marché public.
    Marche,
}

impl ProcurementMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProcurementMode::Bc => "BC",
            ProcurementMode::Contrat => "Contrat",
            ProcurementMode::Marche => "Marché",
        }
    }

    /// Prefix used when composing order numbers.
    pub fn number_prefix(&self) -> &'static str {
        match self {
            ProcurementMode::Bc => "BC",
            ProcurementMode::Contrat => "CT",
            ProcurementMode::Marche => "MP",
        }
    }
}

impl fmt::Display for ProcurementMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ProcurementMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();
        match normalized.as_str() {
            "BC" | "BON DE COMMANDE" => Ok(ProcurementMode::Bc),
            "CONTRAT" | "CT" => Ok(ProcurementMode::Contrat),
            "MARCHÉ" | "MARCHE" | "MP" => Ok(ProcurementMode::Marche),
            _ => Err(format!("Mode de passation inconnu: {s}")),
        }
    }
}

/// Order lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    EnAttente,
    Commande,
    Recu,
    Facture,
    Paye,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::EnAttente => "En attente",
            OrderStatus::Commande => "Commandé",
            OrderStatus::Recu => "Reçu",
            OrderStatus::Facture => "Facturé",
            OrderStatus::Paye => "Payé",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();
        match normalized.as_str() {
            "EN ATTENTE" => Ok(OrderStatus::EnAttente),
            "COMMANDÉ" | "COMMANDE" => Ok(OrderStatus::Commande),
            "REÇU" | "RECU" => Ok(OrderStatus::Recu),
            "FACTURÉ" | "FACTURE" => Ok(OrderStatus::Facture),
            "PAYÉ" | "PAYE" => Ok(OrderStatus::Paye),
            _ => Err(format!("Statut de commande inconnu: {s}")),
        }
    }
}

/// Warranty duration unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WarrantyUnit {
    Mois,
    Annees,
}

impl WarrantyUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            WarrantyUnit::Mois => "mois",
            WarrantyUnit::Annees => "années",
        }
    }
}

impl fmt::Display for WarrantyUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for WarrantyUnit {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();
        match normalized.as_str() {
            "MOIS" => Ok(WarrantyUnit::Mois),
            "ANNÉES" | "ANNEES" | "ANS" => Ok(WarrantyUnit::Annees),
            _ => Err(format!("Unité de garantie inconnue: {s}")),
        }
    }
}

/// Equipment family an order covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderEquipmentKind {
    Imprimante,
    Scanner,
    Photocopieur,
    Mobilier,
    Fournitures,
}

impl OrderEquipmentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderEquipmentKind::Imprimante => "Imprimante",
            OrderEquipmentKind::Scanner => "Scanner",
            OrderEquipmentKind::Photocopieur => "Photocopieur",
            OrderEquipmentKind::Mobilier => "Mobilier",
            OrderEquipmentKind::Fournitures => "Fournitures",
        }
    }
}

impl fmt::Display for OrderEquipmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OrderEquipmentKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();
        match normalized.as_str() {
            "IMPRIMANTE" => Ok(OrderEquipmentKind::Imprimante),
            "SCANNER" => Ok(OrderEquipmentKind::Scanner),
            "PHOTOCOPIEUR" => Ok(OrderEquipmentKind::Photocopieur),
            "MOBILIER" => Ok(OrderEquipmentKind::Mobilier),
            "FOURNITURES" => Ok(OrderEquipmentKind::Fournitures),
            _ => Err(format!("Type d'équipement inconnu: {s}")),
        }
    }
}

/// Whether the order belongs to the IT park or the office park.
///
/// Office orders carry a `-BUR` segment in their number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderScope {
    It,
    Bureau,
}

impl OrderScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderScope::It => "IT",
            OrderScope::Bureau => "Bureau",
        }
    }

    fn number_segment(&self) -> &'static str {
        match self {
            OrderScope::It => "",
            OrderScope::Bureau => "-BUR",
        }
    }
}

impl fmt::Display for OrderScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OrderScope {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();
        match normalized.as_str() {
            "IT" => Ok(OrderScope::It),
            "BUREAU" | "BUR" => Ok(OrderScope::Bureau),
            _ => Err(format!("Périmètre de commande inconnu: {s}")),
        }
    }
}

/// Compose an order number from mode, scope, year and sequence.
///
/// The sequence is 1-based and zero-padded to three digits, so the third
/// contrat of 2024 in the office park is `CT-BUR-2024-003`.
pub fn order_number(mode: ProcurementMode, scope: OrderScope, year: i32, seq: usize) -> String {
    format!(
        "{}{}-{}-{:03}",
        mode.number_prefix(),
        scope.number_segment(),
        year,
        seq
    )
}

/// A purchase order record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseOrder {
    pub id: RecordId,
    pub numero: String,
    pub scope: OrderScope,
    pub date_commande: NaiveDate,
    pub fournisseur: String,
    pub mode_passation: ProcurementMode,
    pub montant_ht: f64,
    pub numero_facture: Option<String>,
    pub date_reception: Option<NaiveDate>,
    pub statut: OrderStatus,
    pub duree_garantie: u32,
    pub unite_garantie: WarrantyUnit,
    pub type_equipement: OrderEquipmentKind,
}

impl PurchaseOrder {
    /// Build an order from a draft, with the number already assigned.
    ///
    /// Supplier and amount are required; the rest falls back to the create
    /// form defaults (mode BC, 12 mois, Imprimante, statut En attente).
    pub fn from_draft(
        id: RecordId,
        numero: String,
        today: NaiveDate,
        draft: OrderDraft,
    ) -> Result<Self> {
        let fournisseur = require(draft.fournisseur, "fournisseur")?;
        let montant_ht = require(draft.montant_ht, "montant_ht")?;
        Ok(Self {
            id,
            numero,
            scope: draft.scope.unwrap_or(OrderScope::It),
            date_commande: today,
            fournisseur,
            mode_passation: draft.mode_passation.unwrap_or(ProcurementMode::Bc),
            montant_ht,
            numero_facture: None,
            date_reception: None,
            statut: OrderStatus::EnAttente,
            duree_garantie: draft.duree_garantie.unwrap_or(12),
            unite_garantie: draft.unite_garantie.unwrap_or(WarrantyUnit::Mois),
            type_equipement: draft
                .type_equipement
                .unwrap_or(OrderEquipmentKind::Imprimante),
        })
    }
}

/// User-filled fields for a new order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderDraft {
    pub scope: Option<OrderScope>,
    pub fournisseur: Option<String>,
    pub mode_passation: Option<ProcurementMode>,
    pub montant_ht: Option<f64>,
    pub duree_garantie: Option<u32>,
    pub unite_garantie: Option<WarrantyUnit>,
    pub type_equipement: Option<OrderEquipmentKind>,
}

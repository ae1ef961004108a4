//! Matériel informatique: inventory records for IT equipment.
//!
//! Field names follow the inventory vocabulary of the agency (code
//! inventaire, désignation, lieu, garantie). Enum fields are closed sets;
//! free text never reaches them.

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ParcError, Result, require};
use crate::ids::RecordId;

/// Equipment category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquipmentKind {
    OrdinateurPortable,
    OrdinateurFixe,
    Serveur,
    Ecran,
    Imprimante,
    Reseau,
}

impl EquipmentKind {
    /// Canonical label as displayed in the inventory.
    pub fn as_str(&self) -> &'static str {
        match self {
            EquipmentKind::OrdinateurPortable => "Ordinateur Portable",
            EquipmentKind::OrdinateurFixe => "Ordinateur Fixe",
            EquipmentKind::Serveur => "Serveur",
            EquipmentKind::Ecran => "Écran",
            EquipmentKind::Imprimante => "Imprimante",
            EquipmentKind::Reseau => "Réseau",
        }
    }
}

impl fmt::Display for EquipmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EquipmentKind {
    type Err = String;

    /// Parse a category label, case-insensitive, accents optional.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();
        match normalized.as_str() {
            "ORDINATEUR PORTABLE" => Ok(EquipmentKind::OrdinateurPortable),
            "ORDINATEUR FIXE" => Ok(EquipmentKind::OrdinateurFixe),
            "SERVEUR" => Ok(EquipmentKind::Serveur),
            "ÉCRAN" | "ECRAN" => Ok(EquipmentKind::Ecran),
            "IMPRIMANTE" => Ok(EquipmentKind::Imprimante),
            "RÉSEAU" | "RESEAU" => Ok(EquipmentKind::Reseau),
            _ => Err(format!("Type de matériel inconnu: {s}")),
        }
    }
}

/// Operational status of a piece of equipment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquipmentStatus {
    /// In service, assigned or assignable.
    Operationnel,
    /// Broken down, waiting for repair or after-sales service.
    Panne,
    /// Under scheduled maintenance.
    Maintenance,
    /// In stock, not yet assigned.
    Stock,
    /// Decommissioned.
    Reforme,
}

impl EquipmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EquipmentStatus::Operationnel => "Opérationnel",
            EquipmentStatus::Panne => "Panne",
            EquipmentStatus::Maintenance => "Maintenance",
            EquipmentStatus::Stock => "Stock",
            EquipmentStatus::Reforme => "Réformé",
        }
    }
}

impl fmt::Display for EquipmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EquipmentStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();
        match normalized.as_str() {
            "OPÉRATIONNEL" | "OPERATIONNEL" => Ok(EquipmentStatus::Operationnel),
            "PANNE" => Ok(EquipmentStatus::Panne),
            "MAINTENANCE" => Ok(EquipmentStatus::Maintenance),
            "STOCK" => Ok(EquipmentStatus::Stock),
            "RÉFORMÉ" | "REFORME" => Ok(EquipmentStatus::Reforme),
            _ => Err(format!("Statut de matériel inconnu: {s}")),
        }
    }
}

/// An IT equipment record.
///
/// `date_fin_garantie` is always on or after `date_achat`; the pair is
/// checked when the record is built from a draft.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Equipment {
    pub id: RecordId,
    pub code_inventaire: String,
    pub numero_serie: String,
    pub designation: String,
    pub marque: String,
    pub modele: String,
    pub kind: EquipmentKind,
    pub statut: EquipmentStatus,
    pub utilisateur: Option<String>,
    pub lieu: String,
    pub etage: Option<String>,
    pub bureau: Option<String>,
    pub date_achat: NaiveDate,
    pub prix_achat: f64,
    pub fournisseur: String,
    pub numero_commande: String,
    pub duree_garantie_mois: u32,
    pub date_fin_garantie: NaiveDate,
    pub observations: Option<String>,
}

impl Equipment {
    /// Brand and model on one line, as shown under the designation.
    pub fn marque_modele(&self) -> String {
        format!("{} {}", self.marque, self.modele)
    }

    /// Build a record from a validated draft.
    ///
    /// Required fields missing from the draft are rejected with
    /// [`ParcError::MissingField`]. When the draft gives a warranty duration
    /// but no end date, the end date is derived from the purchase date.
    pub fn from_draft(id: RecordId, draft: EquipmentDraft) -> Result<Self> {
        let code_inventaire = require(draft.code_inventaire, "code_inventaire")?;
        let numero_serie = require(draft.numero_serie, "numero_serie")?;
        let designation = require(draft.designation, "designation")?;
        let marque = require(draft.marque, "marque")?;
        let modele = require(draft.modele, "modele")?;
        let kind = require(draft.kind, "type")?;
        let lieu = require(draft.lieu, "lieu")?;
        let date_achat = require(draft.date_achat, "date_achat")?;
        let prix_achat = require(draft.prix_achat, "prix_achat")?;
        let fournisseur = require(draft.fournisseur, "fournisseur")?;
        let numero_commande = require(draft.numero_commande, "numero_commande")?;
        let duree_garantie_mois = draft.duree_garantie_mois.unwrap_or(12);

        let date_fin_garantie = match draft.date_fin_garantie {
            Some(date) => date,
            None => date_achat
                .checked_add_months(Months::new(duree_garantie_mois))
                .ok_or(ParcError::DateOutOfRange)?,
        };
        if date_fin_garantie < date_achat {
            return Err(ParcError::InvalidDateOrder {
                label: "fin de garantie",
                start: date_achat,
                end: date_fin_garantie,
            });
        }

        Ok(Self {
            id,
            code_inventaire,
            numero_serie,
            designation,
            marque,
            modele,
            kind,
            statut: draft.statut.unwrap_or(EquipmentStatus::Stock),
            utilisateur: draft.utilisateur,
            lieu,
            etage: draft.etage,
            bureau: draft.bureau,
            date_achat,
            prix_achat,
            fournisseur,
            numero_commande,
            duree_garantie_mois,
            date_fin_garantie,
            observations: draft.observations,
        })
    }
}

/// User-filled fields for a new equipment record.
///
/// Everything the create form can leave blank is optional here; the build
/// step decides what is required and what gets a default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EquipmentDraft {
    pub code_inventaire: Option<String>,
    pub numero_serie: Option<String>,
    pub designation: Option<String>,
    pub marque: Option<String>,
    pub modele: Option<String>,
    pub kind: Option<EquipmentKind>,
    pub statut: Option<EquipmentStatus>,
    pub utilisateur: Option<String>,
    pub lieu: Option<String>,
    pub etage: Option<String>,
    pub bureau: Option<String>,
    pub date_achat: Option<NaiveDate>,
    pub prix_achat: Option<f64>,
    pub fournisseur: Option<String>,
    pub numero_commande: Option<String>,
    pub duree_garantie_mois: Option<u32>,
    pub date_fin_garantie: Option<NaiveDate>,
    pub observations: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> EquipmentDraft {
        EquipmentDraft {
            code_inventaire: Some("INV-IT-2024-010".to_string()),
            numero_serie: Some("SN-42".to_string()),
            designation: Some("Ordinateur portable Dell Latitude 7520".to_string()),
            marque: Some("Dell".to_string()),
            modele: Some("Latitude 7520".to_string()),
            kind: Some(EquipmentKind::OrdinateurPortable),
            lieu: Some("Siège ADD".to_string()),
            date_achat: NaiveDate::from_ymd_opt(2024, 3, 15),
            prix_achat: Some(12_500.0),
            fournisseur: Some("TechnoMaroc".to_string()),
            numero_commande: Some("BC-2024-001".to_string()),
            duree_garantie_mois: Some(36),
            ..EquipmentDraft::default()
        }
    }

    #[test]
    fn builds_and_derives_warranty_end() {
        let equipment = Equipment::from_draft(RecordId::from("1"), draft()).unwrap();
        assert_eq!(equipment.statut, EquipmentStatus::Stock);
        assert_eq!(
            equipment.date_fin_garantie,
            NaiveDate::from_ymd_opt(2027, 3, 15).unwrap()
        );
    }

    #[test]
    fn missing_designation_is_rejected() {
        let mut incomplete = draft();
        incomplete.designation = None;
        let err = Equipment::from_draft(RecordId::from("1"), incomplete).unwrap_err();
        assert!(matches!(
            err,
            ParcError::MissingField {
                field: "designation"
            }
        ));
    }

    #[test]
    fn warranty_end_before_purchase_is_rejected() {
        let mut bad = draft();
        bad.date_fin_garantie = NaiveDate::from_ymd_opt(2023, 1, 1);
        let err = Equipment::from_draft(RecordId::from("1"), bad).unwrap_err();
        assert!(matches!(err, ParcError::InvalidDateOrder { .. }));
    }

    #[test]
    fn status_labels_round_trip() {
        assert_eq!(
            "opérationnel".parse::<EquipmentStatus>().unwrap(),
            EquipmentStatus::Operationnel
        );
        assert_eq!(
            "REFORME".parse::<EquipmentStatus>().unwrap(),
            EquipmentStatus::Reforme
        );
        assert_eq!(EquipmentStatus::Reforme.as_str(), "Réformé");
        assert_eq!("ecran".parse::<EquipmentKind>().unwrap(), EquipmentKind::Ecran);
    }
}

//! View-engine bindings for the domain record types.
//!
//! Field names here are the ones the filter bars and table headers use:
//! `statut`, `type`, `lieu`, `mode` for filters; short column names for sort.

use parc_model::{Delivery, Equipment, PurchaseOrder, RecordId};

use crate::store::StoredRecord;
use crate::view::{SortKey, TableRecord};

impl StoredRecord for Equipment {
    fn id(&self) -> &RecordId {
        &self.id
    }
}

impl StoredRecord for PurchaseOrder {
    fn id(&self) -> &RecordId {
        &self.id
    }
}

impl StoredRecord for Delivery {
    fn id(&self) -> &RecordId {
        &self.id
    }
}

impl TableRecord for Equipment {
    fn searchable_text(&self) -> Vec<&str> {
        let mut fields = vec![
            self.code_inventaire.as_str(),
            self.designation.as_str(),
            self.numero_serie.as_str(),
        ];
        if let Some(utilisateur) = &self.utilisateur {
            fields.push(utilisateur.as_str());
        }
        fields
    }

    fn categorical(&self, field: &str) -> Option<&str> {
        match field {
            "statut" => Some(self.statut.as_str()),
            "type" => Some(self.kind.as_str()),
            "lieu" => Some(self.lieu.as_str()),
            // Unset on unassigned equipment; only "all" matches then.
            "utilisateur" => self.utilisateur.as_deref(),
            _ => None,
        }
    }

    fn sort_key(&self, column: &str) -> Option<SortKey> {
        match column {
            "code" => Some(SortKey::Text(self.code_inventaire.clone())),
            "designation" => Some(SortKey::Text(self.designation.clone())),
            "statut" => Some(SortKey::Text(self.statut.as_str().to_string())),
            "utilisateur" => self
                .utilisateur
                .as_ref()
                .map(|user| SortKey::Text(user.clone())),
            "lieu" => Some(SortKey::Text(self.lieu.clone())),
            "date_achat" => Some(SortKey::Date(self.date_achat)),
            "prix" => Some(SortKey::Number(self.prix_achat)),
            "garantie" => Some(SortKey::Date(self.date_fin_garantie)),
            _ => None,
        }
    }

    fn sort_columns() -> &'static [&'static str] {
        &[
            "code",
            "designation",
            "statut",
            "utilisateur",
            "lieu",
            "date_achat",
            "prix",
            "garantie",
        ]
    }
}

impl TableRecord for PurchaseOrder {
    fn searchable_text(&self) -> Vec<&str> {
        let mut fields = vec![self.numero.as_str(), self.fournisseur.as_str()];
        if let Some(facture) = &self.numero_facture {
            fields.push(facture.as_str());
        }
        fields
    }

    fn categorical(&self, field: &str) -> Option<&str> {
        match field {
            "statut" => Some(self.statut.as_str()),
            "mode" => Some(self.mode_passation.as_str()),
            "type" => Some(self.type_equipement.as_str()),
            "scope" => Some(self.scope.as_str()),
            _ => None,
        }
    }

    fn sort_key(&self, column: &str) -> Option<SortKey> {
        match column {
            "numero" => Some(SortKey::Text(self.numero.clone())),
            "date" => Some(SortKey::Date(self.date_commande)),
            "fournisseur" => Some(SortKey::Text(self.fournisseur.clone())),
            "montant" => Some(SortKey::Number(self.montant_ht)),
            "statut" => Some(SortKey::Text(self.statut.as_str().to_string())),
            _ => None,
        }
    }

    fn sort_columns() -> &'static [&'static str] {
        &["numero", "date", "fournisseur", "montant", "statut"]
    }
}

impl TableRecord for Delivery {
    fn searchable_text(&self) -> Vec<&str> {
        let mut fields = vec![self.numero_commande.as_str(), self.fournisseur.as_str()];
        if let Some(transporteur) = &self.transporteur {
            fields.push(transporteur.as_str());
        }
        if let Some(suivi) = &self.numero_suivi {
            fields.push(suivi.as_str());
        }
        fields
    }

    fn categorical(&self, field: &str) -> Option<&str> {
        match field {
            "statut" => Some(self.statut.as_str()),
            "type" => Some(self.kind.as_str()),
            "fournisseur" => Some(self.fournisseur.as_str()),
            _ => None,
        }
    }

    fn sort_key(&self, column: &str) -> Option<SortKey> {
        match column {
            "numero" => Some(SortKey::Text(self.numero_commande.clone())),
            "fournisseur" => Some(SortKey::Text(self.fournisseur.clone())),
            "date_prevue" => Some(SortKey::Date(self.date_prevue)),
            "montant" => Some(SortKey::Number(self.montant_total)),
            "statut" => Some(SortKey::Text(self.statut.as_str().to_string())),
            _ => None,
        }
    }

    fn sort_columns() -> &'static [&'static str] {
        &["numero", "fournisseur", "date_prevue", "montant", "statut"]
    }
}

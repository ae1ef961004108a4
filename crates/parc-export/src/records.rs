//! Column layouts for the three record types.
//!
//! Column order follows the legacy equipment download, extended to orders
//! and deliveries with the columns their tables show.

use parc_model::{Delivery, Equipment, PurchaseOrder};

use crate::{CsvField, CsvRecord};

impl CsvRecord for Equipment {
    fn headers() -> &'static [&'static str] {
        &[
            "ID",
            "Code inventaire",
            "Désignation",
            "N° Série",
            "Type",
            "Statut",
            "Utilisateur",
            "Lieu",
            "Date achat",
            "Prix achat",
            "Fournisseur",
            "N° Commande",
            "Fin garantie",
        ]
    }

    fn fields(&self) -> Vec<CsvField> {
        vec![
            CsvField::text(self.id.as_str()),
            CsvField::text(self.code_inventaire.as_str()),
            CsvField::text(self.designation.as_str()),
            CsvField::text(self.numero_serie.as_str()),
            CsvField::text(self.kind.as_str()),
            CsvField::text(self.statut.as_str()),
            CsvField::opt(self.utilisateur.as_deref()),
            CsvField::text(self.lieu.as_str()),
            CsvField::Date(self.date_achat),
            CsvField::Amount(self.prix_achat),
            CsvField::text(self.fournisseur.as_str()),
            CsvField::text(self.numero_commande.as_str()),
            CsvField::Date(self.date_fin_garantie),
        ]
    }
}

impl CsvRecord for PurchaseOrder {
    fn headers() -> &'static [&'static str] {
        &[
            "ID",
            "Numéro",
            "Date commande",
            "Fournisseur",
            "Mode",
            "Montant HT",
            "N° Facture",
            "Statut",
            "Type équipement",
        ]
    }

    fn fields(&self) -> Vec<CsvField> {
        vec![
            CsvField::text(self.id.as_str()),
            CsvField::text(self.numero.as_str()),
            CsvField::Date(self.date_commande),
            CsvField::text(self.fournisseur.as_str()),
            CsvField::text(self.mode_passation.as_str()),
            CsvField::Amount(self.montant_ht),
            CsvField::opt(self.numero_facture.as_deref()),
            CsvField::text(self.statut.as_str()),
            CsvField::text(self.type_equipement.as_str()),
        ]
    }
}

impl CsvRecord for Delivery {
    fn headers() -> &'static [&'static str] {
        &[
            "ID",
            "N° Commande",
            "Type",
            "Fournisseur",
            "Statut",
            "Date prévue",
            "Date effective",
            "Lieu",
            "Montant",
            "Articles",
            "Articles reçus",
            "Conforme",
            "Transporteur",
        ]
    }

    fn fields(&self) -> Vec<CsvField> {
        vec![
            CsvField::text(self.id.as_str()),
            CsvField::text(self.numero_commande.as_str()),
            CsvField::text(self.kind.as_str()),
            CsvField::text(self.fournisseur.as_str()),
            CsvField::text(self.statut.as_str()),
            CsvField::Date(self.date_prevue),
            match self.date_effective {
                Some(date) => CsvField::Date(date),
                None => CsvField::Empty,
            },
            CsvField::text(self.lieu_livraison.as_str()),
            CsvField::Amount(self.montant_total),
            CsvField::Integer(i64::from(self.nombre_articles)),
            match self.articles_recus {
                Some(count) => CsvField::Integer(i64::from(count)),
                None => CsvField::Empty,
            },
            match self.conforme {
                Some(true) => CsvField::text("Conforme"),
                Some(false) => CsvField::text("Non conforme"),
                None => CsvField::Empty,
            },
            CsvField::opt(self.transporteur.as_deref()),
        ]
    }
}

//! Local assistant backend answering from the seeded stores.
//!
//! Stands in for the remote chat service: the five quick suggestions are
//! answered from park counters; anything else fails like an unreachable
//! backend and gets the standard apology upstream.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use parc_assist::{
    AssistantBackend, AssistantError, AssistantQuery, AssistantReply, QUICK_SUGGESTIONS,
};
use parc_core::{
    RecordStore, WarrantyState, count_matching, delivery_timing, warranty_status,
};
use parc_model::{Delivery, DeliveryStatus, Equipment, OrderStatus, PurchaseOrder};

pub struct ParkAssistant<'a> {
    equipment: &'a RecordStore<Equipment>,
    orders: &'a RecordStore<PurchaseOrder>,
    deliveries: &'a RecordStore<Delivery>,
    today: NaiveDate,
}

impl<'a> ParkAssistant<'a> {
    pub fn new(
        equipment: &'a RecordStore<Equipment>,
        orders: &'a RecordStore<PurchaseOrder>,
        deliveries: &'a RecordStore<Delivery>,
        today: NaiveDate,
    ) -> Self {
        Self {
            equipment,
            orders,
            deliveries,
            today,
        }
    }

    fn reply(&self, response: String, source: &str) -> AssistantReply {
        AssistantReply {
            response,
            sources: vec![source.to_string()],
            quick_actions: QUICK_SUGGESTIONS.iter().map(ToString::to_string).collect(),
        }
    }
}

impl AssistantBackend for ParkAssistant<'_> {
    fn ask(&self, query: &AssistantQuery) -> Result<AssistantReply, AssistantError> {
        match query.query.as_str() {
            "Matériels sous garantie ce mois" => {
                let expiring = count_matching(self.equipment.records(), |equipment| {
                    warranty_status(equipment.date_fin_garantie, self.today).state
                        == WarrantyState::ExpiringSoon
                });
                Ok(self.reply(
                    format!("{expiring} matériel(s) dont la garantie expire dans les 30 jours."),
                    "matériels",
                ))
            }
            "Livraisons en retard" => {
                let late = count_matching(self.deliveries.records(), |delivery| {
                    delivery.statut == DeliveryStatus::Retardee
                        || delivery_timing(
                            delivery.date_prevue,
                            delivery.date_effective,
                            self.today,
                        )
                        .is_late()
                });
                Ok(self.reply(format!("{late} livraison(s) en retard."), "livraisons"))
            }
            "Commandes en attente" => {
                let pending = count_matching(self.orders.records(), |order| {
                    order.statut == OrderStatus::EnAttente
                });
                Ok(self.reply(format!("{pending} commande(s) en attente."), "commandes"))
            }
            "Fournisseurs actifs" => {
                let suppliers: BTreeSet<&str> = self
                    .equipment
                    .records()
                    .iter()
                    .map(|equipment| equipment.fournisseur.as_str())
                    .chain(
                        self.orders
                            .records()
                            .iter()
                            .map(|order| order.fournisseur.as_str()),
                    )
                    .chain(
                        self.deliveries
                            .records()
                            .iter()
                            .map(|delivery| delivery.fournisseur.as_str()),
                    )
                    .collect();
                let names: Vec<&str> = suppliers.iter().copied().collect();
                Ok(self.reply(
                    format!(
                        "{} fournisseur(s) actif(s): {}.",
                        names.len(),
                        names.join(", ")
                    ),
                    "fournisseurs",
                ))
            }
            "Demandes non traitées" => Ok(self.reply(
                "Aucune demande enregistrée pour le moment.".to_string(),
                "demandes",
            )),
            _ => Err(AssistantError::Unreachable(
                "question hors du périmètre local".to_string(),
            )),
        }
    }
}

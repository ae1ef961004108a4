pub mod delivery;
pub mod equipment;
pub mod error;
pub mod ids;
pub mod order;

pub use delivery::{Delivery, DeliveryDraft, DeliveryKind, DeliveryStatus};
pub use equipment::{Equipment, EquipmentDraft, EquipmentKind, EquipmentStatus};
pub use error::{ParcError, Result};
pub use ids::RecordId;
pub use order::{
    OrderDraft, OrderEquipmentKind, OrderScope, OrderStatus, ProcurementMode, PurchaseOrder,
    WarrantyUnit, order_number,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_id_is_transparent_in_json() {
        let id = RecordId::from("42");
        let json = serde_json::to_string(&id).expect("serialize id");
        assert_eq!(json, "\"42\"");
    }

    #[test]
    fn order_round_trips_through_json() {
        let order = PurchaseOrder {
            id: RecordId::from("1"),
            numero: "BC-2024-001".to_string(),
            scope: OrderScope::It,
            date_commande: chrono::NaiveDate::from_ymd_opt(2024, 7, 10).unwrap(),
            fournisseur: "TechnoMaroc".to_string(),
            mode_passation: ProcurementMode::Bc,
            montant_ht: 45_000.0,
            numero_facture: None,
            date_reception: None,
            statut: OrderStatus::Paye,
            duree_garantie: 12,
            unite_garantie: WarrantyUnit::Mois,
            type_equipement: OrderEquipmentKind::Imprimante,
        };
        let json = serde_json::to_string(&order).expect("serialize order");
        let round: PurchaseOrder = serde_json::from_str(&json).expect("deserialize order");
        assert_eq!(round.numero, "BC-2024-001");
        assert_eq!(round.statut, OrderStatus::Paye);
    }
}

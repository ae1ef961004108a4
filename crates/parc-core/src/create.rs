//! Create-record flows.
//!
//! The form supplies a draft; the flow assigns the identifier (and the order
//! number), applies the default status and appends to the store. Validation
//! happens in the draft build, so a rejected draft leaves the store
//! untouched.

use chrono::{Datelike, NaiveDate};
use tracing::info;

use parc_model::{
    Delivery, DeliveryDraft, Equipment, EquipmentDraft, OrderDraft, OrderScope, ProcurementMode,
    PurchaseOrder, Result, order_number,
};

use crate::store::RecordStore;

/// Add a new equipment record to the inventory.
pub fn create_equipment(
    store: &mut RecordStore<Equipment>,
    draft: EquipmentDraft,
) -> Result<&Equipment> {
    let id = store.allocate_id();
    let record = Equipment::from_draft(id, draft)?;
    info!(code = %record.code_inventaire, "matériel ajouté à l'inventaire");
    store.append(record)
}

/// Register a new purchase order.
///
/// The number is derived from the procurement mode, the scope, the year of
/// the reference day and the current store size: the third order of 2024
/// passed as a contrat gets `CT-2024-003`.
pub fn create_order(
    store: &mut RecordStore<PurchaseOrder>,
    draft: OrderDraft,
    today: NaiveDate,
) -> Result<&PurchaseOrder> {
    let mode = draft.mode_passation.unwrap_or(ProcurementMode::Bc);
    let scope = draft.scope.unwrap_or(OrderScope::It);
    let numero = order_number(mode, scope, today.year(), store.len() + 1);
    let id = store.allocate_id();
    let record = PurchaseOrder::from_draft(id, numero, today, draft)?;
    info!(numero = %record.numero, montant = record.montant_ht, "commande créée");
    store.append(record)
}

/// Schedule a new delivery.
pub fn create_delivery(
    store: &mut RecordStore<Delivery>,
    draft: DeliveryDraft,
) -> Result<&Delivery> {
    let id = store.allocate_id();
    let record = Delivery::from_draft(id, draft)?;
    info!(commande = %record.numero_commande, "livraison programmée");
    store.append(record)
}

//! comfy-table rendering of views and dashboard counters.

use chrono::NaiveDate;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use parc_core::{
    DeliveryTiming, Page, WarrantyState, WarrantyStatus, delivery_timing, warranty_status,
};
use parc_model::{Delivery, DeliveryStatus, Equipment, EquipmentStatus, OrderStatus, PurchaseOrder};

pub fn equipment_table(rows: &[&Equipment], today: NaiveDate) -> Table {
    let mut table = new_table(vec![
        header_cell("Code"),
        header_cell("Désignation"),
        header_cell("N° Série"),
        header_cell("Statut"),
        header_cell("Utilisateur"),
        header_cell("Lieu"),
        header_cell("Garantie"),
    ]);
    for equipment in rows {
        let warranty = warranty_status(equipment.date_fin_garantie, today);
        table.add_row(vec![
            Cell::new(&equipment.code_inventaire),
            Cell::new(format!(
                "{}\n{}",
                equipment.designation,
                equipment.marque_modele()
            )),
            Cell::new(&equipment.numero_serie),
            equipment_status_cell(equipment.statut),
            match &equipment.utilisateur {
                Some(utilisateur) => Cell::new(utilisateur),
                None => dim_cell("Non affecté"),
            },
            Cell::new(&equipment.lieu),
            warranty_cell(&warranty),
        ]);
    }
    table
}

pub fn order_table(rows: &[&PurchaseOrder]) -> Table {
    let mut table = new_table(vec![
        header_cell("Numéro"),
        header_cell("Date"),
        header_cell("Fournisseur"),
        header_cell("Mode"),
        header_cell("Montant HT"),
        header_cell("Facture"),
        header_cell("Statut"),
        header_cell("Type"),
    ]);
    align_column(&mut table, 4, CellAlignment::Right);
    for order in rows {
        table.add_row(vec![
            Cell::new(&order.numero).add_attribute(Attribute::Bold),
            Cell::new(order.date_commande.format("%Y-%m-%d")),
            Cell::new(&order.fournisseur),
            Cell::new(order.mode_passation.as_str()),
            Cell::new(format!("{} DH", order.montant_ht)),
            match &order.numero_facture {
                Some(facture) => Cell::new(facture),
                None => dim_cell("-"),
            },
            order_status_cell(order.statut),
            Cell::new(order.type_equipement.as_str()),
        ]);
    }
    table
}

pub fn delivery_table(rows: &[&Delivery], today: NaiveDate) -> Table {
    let mut table = new_table(vec![
        header_cell("N° Commande"),
        header_cell("Type"),
        header_cell("Fournisseur"),
        header_cell("Statut"),
        header_cell("Prévue"),
        header_cell("Délai"),
        header_cell("Conforme"),
        header_cell("Avancement"),
    ]);
    align_column(&mut table, 7, CellAlignment::Right);
    for delivery in rows {
        let timing = delivery_timing(delivery.date_prevue, delivery.date_effective, today);
        table.add_row(vec![
            Cell::new(&delivery.numero_commande).add_attribute(Attribute::Bold),
            Cell::new(delivery.kind.as_str()),
            Cell::new(&delivery.fournisseur),
            delivery_status_cell(delivery.statut),
            Cell::new(delivery.date_prevue.format("%Y-%m-%d")),
            timing_cell(timing),
            conformity_cell(delivery),
            Cell::new(format!("{}%", delivery.statut.progress_percent())),
        ]);
    }
    table
}

/// Two-column counter table for the dashboard.
pub fn counter_table(title: &str, counters: Vec<(String, String)>) -> Table {
    let mut table = new_table(vec![header_cell(title), header_cell("Valeur")]);
    align_column(&mut table, 1, CellAlignment::Right);
    for (label, value) in counters {
        table.add_row(vec![Cell::new(label), Cell::new(value)]);
    }
    table
}

/// Pager footer under each table.
pub fn page_footer<T>(page: &Page<'_, T>) -> String {
    format!(
        "Page {}/{} — {} enregistrement(s)",
        page.number, page.total_pages, page.total_records
    )
}

fn new_table(headers: Vec<Cell>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
    table.set_header(headers);
    table
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn equipment_status_cell(statut: EquipmentStatus) -> Cell {
    let cell = Cell::new(statut.as_str());
    match statut {
        EquipmentStatus::Operationnel => cell.fg(Color::Green),
        EquipmentStatus::Panne => cell.fg(Color::Red).add_attribute(Attribute::Bold),
        EquipmentStatus::Maintenance => cell.fg(Color::Yellow),
        EquipmentStatus::Stock => cell.fg(Color::DarkGrey),
        EquipmentStatus::Reforme => cell.fg(Color::DarkGrey).add_attribute(Attribute::CrossedOut),
    }
}

fn order_status_cell(statut: OrderStatus) -> Cell {
    let cell = Cell::new(statut.as_str());
    match statut {
        OrderStatus::EnAttente => cell.fg(Color::Yellow),
        OrderStatus::Commande => cell.fg(Color::Blue),
        OrderStatus::Recu => cell.fg(Color::Cyan),
        OrderStatus::Facture => cell.fg(Color::Magenta),
        OrderStatus::Paye => cell.fg(Color::Green),
    }
}

fn delivery_status_cell(statut: DeliveryStatus) -> Cell {
    let cell = Cell::new(statut.as_str());
    match statut {
        DeliveryStatus::Livree => cell.fg(Color::Green),
        DeliveryStatus::Retardee => cell.fg(Color::Red).add_attribute(Attribute::Bold),
        DeliveryStatus::PartiellementLivree => cell.fg(Color::Yellow),
        DeliveryStatus::EnTransit => cell.fg(Color::Blue),
        _ => cell,
    }
}

fn warranty_cell(warranty: &WarrantyStatus) -> Cell {
    let cell = Cell::new(format!("{}\n{}", warranty.state.as_str(), warranty.detail()));
    match warranty.state {
        WarrantyState::Expired => cell.fg(Color::Red),
        WarrantyState::ExpiringSoon => cell.fg(Color::Yellow),
        WarrantyState::Active => cell.fg(Color::Green),
    }
}

fn timing_cell(timing: DeliveryTiming) -> Cell {
    let cell = Cell::new(timing.label());
    if timing.is_late() {
        cell.fg(Color::Red)
    } else {
        match timing {
            DeliveryTiming::DueToday => cell.fg(Color::Yellow),
            DeliveryTiming::Upcoming(_) => cell.fg(Color::Blue),
            _ => cell.fg(Color::Green),
        }
    }
}

fn conformity_cell(delivery: &Delivery) -> Cell {
    if !delivery.statut.is_received() {
        return dim_cell("En cours");
    }
    match delivery.conforme {
        Some(true) => Cell::new("Conforme").fg(Color::Green),
        Some(false) => Cell::new("Non conforme").fg(Color::Red),
        None => dim_cell("En cours"),
    }
}

//! Command implementations over the seeded stores.

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::info;

use parc_assist::{AssistantQuery, QUICK_SUGGESTIONS, ask_with_fallback};
use parc_core::{
    Paginator, Selection, SortDirection, SortSpec, ViewQuery, WarrantyState, apply,
    count_matching, create_order, delivery_timing, sum_of, warranty_status,
};
use parc_export::{CsvRecord, write_csv};
use parc_model::{
    DeliveryKind, DeliveryStatus, EquipmentKind, EquipmentStatus, OrderDraft, OrderStatus,
};

use crate::assist::ParkAssistant;
use crate::cli::{
    AssistantArgs, CommandeArgs, ExportArgs, ExportEntity, LivraisonArgs, MaterielArgs,
    NewOrderArgs, TableArgs,
};
use crate::tables;
use parc_cli::seed;

pub fn run_materiels(args: &MaterielArgs, today: NaiveDate) -> Result<()> {
    let store = seed::equipment_store()?;
    let query = build_query(
        args.search.as_deref(),
        vec![
            ("statut", args.statut.map(|s| s.as_str().to_string())),
            ("type", args.kind.map(|k| k.as_str().to_string())),
            ("lieu", args.lieu.clone()),
        ],
        Some(&args.table),
    );
    let view = apply(store.records(), &query)?;
    let paginator = Paginator::new(args.table.page_size);
    let page = paginator.page(&view, args.table.page);
    println!("{}", tables::equipment_table(page.items, today));
    println!("{}", tables::page_footer(&page));
    Ok(())
}

pub fn run_commandes(args: &CommandeArgs) -> Result<()> {
    let store = seed::order_store()?;
    let query = build_query(
        args.search.as_deref(),
        vec![
            ("statut", args.statut.map(|s| s.as_str().to_string())),
            ("mode", args.mode.map(|m| m.as_str().to_string())),
            ("type", args.kind.map(|k| k.as_str().to_string())),
        ],
        Some(&args.table),
    );
    let view = apply(store.records(), &query)?;
    let paginator = Paginator::new(args.table.page_size);
    let page = paginator.page(&view, args.table.page);
    println!("{}", tables::order_table(page.items));
    println!("{}", tables::page_footer(&page));
    Ok(())
}

pub fn run_livraisons(args: &LivraisonArgs, today: NaiveDate) -> Result<()> {
    let store = seed::delivery_store()?;
    let query = build_query(
        args.search.as_deref(),
        vec![
            ("statut", args.statut.map(|s| s.as_str().to_string())),
            ("type", args.kind.map(|k| k.as_str().to_string())),
            ("fournisseur", args.fournisseur.clone()),
        ],
        Some(&args.table),
    );
    let view = apply(store.records(), &query)?;
    let paginator = Paginator::new(args.table.page_size);
    let page = paginator.page(&view, args.table.page);
    println!("{}", tables::delivery_table(page.items, today));
    println!("{}", tables::page_footer(&page));
    Ok(())
}

pub fn run_dashboard(today: NaiveDate) -> Result<()> {
    let equipment = seed::equipment_store()?;
    let orders = seed::order_store()?;
    let deliveries = seed::delivery_store()?;

    let expiring = count_matching(equipment.records(), |item| {
        warranty_status(item.date_fin_garantie, today).state == WarrantyState::ExpiringSoon
    });
    println!(
        "{}",
        tables::counter_table(
            "Matériels",
            vec![
                ("Total équipements".to_string(), equipment.len().to_string()),
                (
                    "Opérationnels".to_string(),
                    count_matching(equipment.records(), |item| {
                        item.statut == EquipmentStatus::Operationnel
                    })
                    .to_string(),
                ),
                (
                    "En panne".to_string(),
                    count_matching(equipment.records(), |item| {
                        item.statut == EquipmentStatus::Panne
                    })
                    .to_string(),
                ),
                ("Garantie expire bientôt".to_string(), expiring.to_string()),
                (
                    "Valeur totale".to_string(),
                    format!("{} DH", sum_of(equipment.records(), |item| item.prix_achat)),
                ),
            ],
        )
    );

    println!(
        "{}",
        tables::counter_table(
            "Commandes",
            vec![
                ("Total commandes".to_string(), orders.len().to_string()),
                (
                    "En attente".to_string(),
                    count_matching(orders.records(), |order| {
                        order.statut == OrderStatus::EnAttente
                    })
                    .to_string(),
                ),
                (
                    "Montant total HT".to_string(),
                    format!("{} DH", sum_of(orders.records(), |order| order.montant_ht)),
                ),
            ],
        )
    );

    let late = count_matching(deliveries.records(), |delivery| {
        delivery.statut == DeliveryStatus::Retardee
            || delivery_timing(delivery.date_prevue, delivery.date_effective, today).is_late()
    });
    println!(
        "{}",
        tables::counter_table(
            "Livraisons",
            vec![
                ("Total livraisons".to_string(), deliveries.len().to_string()),
                (
                    "En transit".to_string(),
                    count_matching(deliveries.records(), |delivery| {
                        delivery.statut == DeliveryStatus::EnTransit
                    })
                    .to_string(),
                ),
                ("En retard".to_string(), late.to_string()),
                (
                    "Livrées".to_string(),
                    count_matching(deliveries.records(), |delivery| {
                        delivery.statut == DeliveryStatus::Livree
                    })
                    .to_string(),
                ),
            ],
        )
    );
    Ok(())
}

pub fn run_export(args: &ExportArgs) -> Result<()> {
    match args.entity {
        ExportEntity::Materiels => {
            let store = seed::equipment_store()?;
            let mut filters = Vec::new();
            if let Some(statut) = &args.statut {
                let statut: EquipmentStatus = statut.parse().map_err(anyhow::Error::msg)?;
                filters.push(("statut", Some(statut.as_str().to_string())));
            }
            if let Some(kind) = &args.kind {
                let kind: EquipmentKind = kind.parse().map_err(anyhow::Error::msg)?;
                filters.push(("type", Some(kind.as_str().to_string())));
            }
            let query = build_query(args.search.as_deref(), filters, None);
            let view = apply(store.records(), &query)?;
            export_view(&view, &args.output)
        }
        ExportEntity::Commandes => {
            let store = seed::order_store()?;
            let mut filters = Vec::new();
            if let Some(statut) = &args.statut {
                let statut: OrderStatus = statut.parse().map_err(anyhow::Error::msg)?;
                filters.push(("statut", Some(statut.as_str().to_string())));
            }
            let query = build_query(args.search.as_deref(), filters, None);
            let view = apply(store.records(), &query)?;
            export_view(&view, &args.output)
        }
        ExportEntity::Livraisons => {
            let store = seed::delivery_store()?;
            let mut filters = Vec::new();
            if let Some(statut) = &args.statut {
                let statut: DeliveryStatus = statut.parse().map_err(anyhow::Error::msg)?;
                filters.push(("statut", Some(statut.as_str().to_string())));
            }
            if let Some(kind) = &args.kind {
                let kind: DeliveryKind = kind.parse().map_err(anyhow::Error::msg)?;
                filters.push(("type", Some(kind.as_str().to_string())));
            }
            let query = build_query(args.search.as_deref(), filters, None);
            let view = apply(store.records(), &query)?;
            export_view(&view, &args.output)
        }
    }
}

pub fn run_new_order(args: &NewOrderArgs, today: NaiveDate) -> Result<()> {
    let mut store = seed::order_store()?;
    let draft = OrderDraft {
        scope: args.scope,
        fournisseur: args.fournisseur.clone(),
        mode_passation: args.mode,
        montant_ht: args.montant,
        duree_garantie: args.garantie,
        unite_garantie: args.unite,
        type_equipement: args.kind,
    };
    let order = create_order(&mut store, draft, today)?;
    println!(
        "Commande {} créée pour {} ({} DH HT)",
        order.numero, order.fournisseur, order.montant_ht
    );
    Ok(())
}

pub fn run_assistant(args: &AssistantArgs, today: NaiveDate) -> Result<()> {
    let Some(question) = &args.question else {
        println!("Suggestions:");
        for suggestion in QUICK_SUGGESTIONS {
            println!("  - {suggestion}");
        }
        return Ok(());
    };

    let equipment = seed::equipment_store()?;
    let orders = seed::order_store()?;
    let deliveries = seed::delivery_store()?;
    let backend = ParkAssistant::new(&equipment, &orders, &deliveries, today);
    let reply = ask_with_fallback(&backend, &AssistantQuery::new(question.clone()));
    println!("{}", reply.response);
    if !reply.sources.is_empty() {
        println!("Sources: {}", reply.sources.join(", "));
    }
    Ok(())
}

/// Assemble a view query from CLI flags.
fn build_query(
    search: Option<&str>,
    filters: Vec<(&'static str, Option<String>)>,
    table: Option<&TableArgs>,
) -> ViewQuery {
    let mut query = ViewQuery::new();
    if let Some(search) = search {
        query.search = search.to_string();
    }
    for (field, value) in filters {
        if let Some(value) = value {
            query.filters.insert(field.to_string(), Selection::Value(value));
        }
    }
    if let Some(table) = table
        && let Some(column) = &table.sort
    {
        query.sort = Some(SortSpec {
            column: column.clone(),
            direction: if table.desc {
                SortDirection::Descending
            } else {
                SortDirection::Ascending
            },
        });
    }
    query
}

fn export_view<R: CsvRecord>(rows: &[&R], output: &Path) -> Result<()> {
    let file = File::create(output)
        .with_context(|| format!("création du fichier {}", output.display()))?;
    write_csv(rows, file)?;
    info!(lignes = rows.len(), chemin = %output.display(), "export écrit");
    println!("{} ligne(s) exportée(s) vers {}", rows.len(), output.display());
    Ok(())
}

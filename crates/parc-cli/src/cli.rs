//! CLI argument definitions for the ParcInfo console.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use parc_model::{
    DeliveryKind, DeliveryStatus, EquipmentKind, EquipmentStatus, OrderEquipmentKind, OrderScope,
    OrderStatus, ProcurementMode, WarrantyUnit,
};

#[derive(Parser)]
#[command(
    name = "parcinfo",
    version,
    about = "ParcInfo - Gestion de parc informatique et bureautique",
    long_about = "Consultation du parc informatique et bureautique de l'agence.\n\n\
                  Tables filtrables et triables, tableau de bord, export CSV\n\
                  et enregistrement de nouvelles commandes."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Reference day for warranty and delay classification (default: today).
    #[arg(long = "today", value_name = "YYYY-MM-DD", global = true)]
    pub today: Option<NaiveDate>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Browse the IT equipment inventory.
    Materiels(MaterielArgs),

    /// Browse the purchase orders.
    Commandes(CommandeArgs),

    /// Browse the delivery tracking board.
    Livraisons(LivraisonArgs),

    /// Park-wide counters (statuts, garanties, montants, retards).
    Dashboard,

    /// Export a filtered view to a CSV file.
    Export(ExportArgs),

    /// Register a new purchase order.
    NewOrder(NewOrderArgs),

    /// Ask the park assistant a question.
    Assistant(AssistantArgs),
}

#[derive(Args)]
pub struct MaterielArgs {
    /// Free-text search over code, désignation, série et utilisateur.
    #[arg(long)]
    pub search: Option<String>,

    /// Keep only this statut (Opérationnel, Panne, Maintenance, Stock, Réformé).
    #[arg(long)]
    pub statut: Option<EquipmentStatus>,

    /// Keep only this type of equipment.
    #[arg(long = "type")]
    pub kind: Option<EquipmentKind>,

    /// Keep only this location.
    #[arg(long)]
    pub lieu: Option<String>,

    #[command(flatten)]
    pub table: TableArgs,
}

#[derive(Args)]
pub struct CommandeArgs {
    /// Free-text search over numéro, fournisseur et facture.
    #[arg(long)]
    pub search: Option<String>,

    /// Keep only this statut (En attente, Commandé, Reçu, Facturé, Payé).
    #[arg(long)]
    pub statut: Option<OrderStatus>,

    /// Keep only this mode de passation (BC, Contrat, Marché).
    #[arg(long)]
    pub mode: Option<ProcurementMode>,

    /// Keep only this type d'équipement.
    #[arg(long = "type")]
    pub kind: Option<OrderEquipmentKind>,

    #[command(flatten)]
    pub table: TableArgs,
}

#[derive(Args)]
pub struct LivraisonArgs {
    /// Free-text search over numéro de commande, fournisseur et suivi.
    #[arg(long)]
    pub search: Option<String>,

    /// Keep only this statut (Programmée, En transit, Livrée, Retardée, ...).
    #[arg(long)]
    pub statut: Option<DeliveryStatus>,

    /// Keep only this type de livraison (IT, Bureau).
    #[arg(long = "type")]
    pub kind: Option<DeliveryKind>,

    /// Keep only this supplier.
    #[arg(long)]
    pub fournisseur: Option<String>,

    #[command(flatten)]
    pub table: TableArgs,
}

/// Sort and pagination controls shared by the table views.
#[derive(Args)]
pub struct TableArgs {
    /// Sort column.
    #[arg(long)]
    pub sort: Option<String>,

    /// Sort descending instead of ascending.
    #[arg(long, requires = "sort")]
    pub desc: bool,

    /// 1-indexed page to display.
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Rows per page.
    #[arg(long = "page-size", default_value_t = 10)]
    pub page_size: usize,
}

#[derive(Args)]
pub struct ExportArgs {
    /// Which view to export.
    #[arg(value_enum)]
    pub entity: ExportEntity,

    /// Destination file.
    #[arg(long, short = 'o', value_name = "PATH")]
    pub output: PathBuf,

    /// Free-text search applied before export.
    #[arg(long)]
    pub search: Option<String>,

    /// Statut filter applied before export.
    #[arg(long)]
    pub statut: Option<String>,

    /// Type filter applied before export.
    #[arg(long = "type")]
    pub kind: Option<String>,
}

#[derive(Args)]
pub struct NewOrderArgs {
    /// Supplier the order goes to.
    #[arg(long)]
    pub fournisseur: Option<String>,

    /// Amount before tax, in DH.
    #[arg(long)]
    pub montant: Option<f64>,

    /// Mode de passation (BC, Contrat, Marché); defaults to BC.
    #[arg(long)]
    pub mode: Option<ProcurementMode>,

    /// IT or Bureau; drives the order-number segment.
    #[arg(long)]
    pub scope: Option<OrderScope>,

    /// Warranty duration; defaults to 12.
    #[arg(long)]
    pub garantie: Option<u32>,

    /// Warranty unit (mois, années).
    #[arg(long)]
    pub unite: Option<WarrantyUnit>,

    /// Type d'équipement; defaults to Imprimante.
    #[arg(long = "type")]
    pub kind: Option<OrderEquipmentKind>,
}

#[derive(Args)]
pub struct AssistantArgs {
    /// Question for the assistant; omit to list the quick suggestions.
    pub question: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ExportEntity {
    Materiels,
    Commandes,
    Livraisons,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

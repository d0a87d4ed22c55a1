use crate::core::export::ExportKind;
use crate::export::ExportFormat;
use crate::models::request::Priority;
use crate::models::voc::Severity;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for the factory portal
#[derive(Parser)]
#[command(
    name = "fportal",
    version = env!("CARGO_PKG_VERSION"),
    about = "Factory portal: product whitepaper lookup, document requests, VOC and production logs over CSV files",
    long_about = None
)]
pub struct Cli {
    /// Override the data directory (CSV logs, uploads, audit database)
    #[arg(global = true, long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<String>,

    /// Override the product catalog CSV file
    #[arg(global = true, long = "catalog", value_name = "FILE")]
    pub catalog: Option<String>,

    /// Portal or admin password (asked on stdin when omitted)
    #[arg(global = true, long = "password", value_name = "PASSWORD")]
    pub password: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file, data directory and empty logs
    Init,

    /// Manage the configuration file (view, check, migrate or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Rename legacy keys and add missing fields")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use (vim, nano, or custom path)")]
        editor: Option<String>,
    },

    /// List the product catalog (code, name, category)
    Products {
        #[arg(long, help = "Only products of this category")]
        category: Option<String>,

        #[arg(long = "prefixes", help = "Print the code prefix → category table")]
        prefixes: bool,
    },

    /// Show the whitepaper of every product whose code or name contains QUERY
    Search {
        /// Product code or name, e.g. P001 or 고구마칩
        query: String,

        #[arg(long, value_name = "FILE", help = "Also write a printable HTML report")]
        html: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite the HTML file without asking")]
        force: bool,
    },

    /// Document request workflow
    Request {
        #[command(subcommand)]
        action: RequestAction,
    },

    /// Voice of Customer (complaint / incident) log
    Voc {
        #[command(subcommand)]
        action: VocAction,
    },

    /// Daily production log
    Production {
        #[command(subcommand)]
        action: ProductionAction,
    },

    /// Product document catalog
    Docs {
        #[command(subcommand)]
        action: DocsAction,
    },

    /// Ask the portal assistant a question
    Ask {
        question: String,

        #[arg(long, default_value = "anonymous")]
        requester: String,
    },

    /// Export a data set
    Export {
        #[arg(long, value_enum)]
        kind: ExportKind,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE", help = "Output file (absolute path)")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Back up the data directory
    Backup {
        #[arg(long, value_name = "FILE", help = "Destination directory, or zip file with --compress (absolute path)")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the audit log")]
        print: bool,
    },
}

#[derive(Subcommand)]
pub enum RequestAction {
    /// Submit a document request
    Add {
        #[arg(long)]
        requester: String,

        #[arg(long, default_value = "")]
        team: String,

        #[arg(long = "due", value_name = "YYYY-MM-DD")]
        due_date: String,

        #[arg(long, default_value = "", help = "Document category, e.g. 성적서, 사양서")]
        category: String,

        #[arg(long, value_enum, default_value = "normal")]
        priority: Priority,

        #[arg(long, default_value = "", help = "Referenced product code or name")]
        product: String,

        #[arg(long)]
        details: String,

        #[arg(long = "attach", value_name = "FILE")]
        attachments: Vec<PathBuf>,
    },

    /// List requests with their row number
    List {
        #[arg(long, help = "Only requests with this status")]
        status: Option<String>,
    },

    /// Change the status of a request (admin)
    Status {
        /// Row number shown by `request list`
        index: usize,

        /// 접수 | 검토중 | 승인 | 반려 (or received, review, approved, rejected)
        status: String,

        #[arg(long)]
        memo: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum VocAction {
    /// Record a VOC
    Add {
        #[arg(long, value_name = "YYYY-MM-DD", help = "Occurrence date (default: today)")]
        date: Option<String>,

        #[arg(long = "type", help = "VOC type, e.g. 이물, 포장불량, 맛")]
        voc_type: String,

        #[arg(long, value_enum, default_value = "medium")]
        severity: Severity,

        #[arg(long, default_value = "")]
        product: String,

        #[arg(long)]
        description: String,

        #[arg(long, default_value = "")]
        cause: String,

        #[arg(long, default_value = "")]
        action: String,

        #[arg(long = "attach", value_name = "FILE")]
        attachments: Vec<PathBuf>,
    },

    /// List VOC records
    List {
        #[arg(long)]
        product: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum ProductionAction {
    /// Record a production entry
    Add {
        #[arg(long, value_name = "YYYY-MM-DD", help = "Production date (default: today)")]
        date: Option<String>,

        #[arg(long, default_value = "")]
        line: String,

        #[arg(long)]
        product: String,

        #[arg(long)]
        quantity: String,

        #[arg(long, default_value = "")]
        unit: String,

        #[arg(long, default_value = "")]
        worker: String,

        #[arg(long, default_value = "")]
        notes: String,
    },

    /// List production entries
    List {
        #[arg(long, value_name = "YYYY-MM-DD")]
        date: Option<String>,

        #[arg(long, help = "Print per-product totals")]
        totals: bool,
    },
}

#[derive(Subcommand)]
pub enum DocsAction {
    /// Register a product document
    Add {
        #[arg(long)]
        product: String,

        #[arg(long = "type", help = "Document type, e.g. COA, 사양서, 인증서")]
        doc_type: String,

        #[arg(long)]
        title: String,

        #[arg(long, value_name = "FILE")]
        file: PathBuf,
    },

    /// List registered documents
    List {
        #[arg(long)]
        product: Option<String>,
    },
}

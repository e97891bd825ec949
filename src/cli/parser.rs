use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for sitedash
/// CLI dashboard for contracting projects: costs, profit and payments
#[derive(Parser)]
#[command(
    name = "sitedash",
    version = env!("CARGO_PKG_VERSION"),
    about = "A contracting-business dashboard: track project costs, profit and payments",
    long_about = None
)]
pub struct Cli {
    /// Override the dataset file (JSON; defaults to the built-in demo data)
    #[arg(global = true, long = "data")]
    pub data: Option<String>,

    /// Run in test mode (ignore the user config file)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Portfolio stats, worker hours and material spend at a glance
    Dashboard,

    /// Summary table of every project
    Projects,

    /// Financial detail of one project
    Project {
        /// Project id (e.g. p1)
        id: String,

        #[arg(long, help = "Include the payment history")]
        payments: bool,

        #[arg(long, help = "Include the task list")]
        tasks: bool,
    },

    /// List workers and their rates
    Workers,

    /// List materials and unit prices
    Materials,

    /// Log hours a worker spent on a project
    LogTime {
        #[arg(long, help = "Project id")]
        project: String,

        #[arg(long, help = "Worker id")]
        worker: String,

        #[arg(long, help = "Hours worked (decimal, e.g. 7.5)")]
        hours: String,

        #[arg(long, help = "Entry date (YYYY-MM-DD, default today)")]
        date: Option<String>,
    },

    /// Record material consumed by a project
    LogUsage {
        #[arg(long, help = "Project id")]
        project: String,

        #[arg(long, help = "Material id")]
        material: String,

        #[arg(long, help = "Quantity used")]
        qty: String,

        #[arg(long, help = "Usage date (YYYY-MM-DD, default today)")]
        date: Option<String>,
    },

    /// Record an ad-hoc expense on a project
    AddExpense {
        #[arg(long, help = "Project id")]
        project: String,

        #[arg(long, help = "Expense description")]
        desc: String,

        #[arg(long, help = "Amount in dollars")]
        amount: String,

        #[arg(long, help = "Expense date (YYYY-MM-DD, default today)")]
        date: Option<String>,
    },

    /// File a receipt against a project
    AddReceipt {
        #[arg(long, help = "Project id")]
        project: String,

        #[arg(long = "file-name", help = "Receipt file name")]
        file_name: String,

        #[arg(long, help = "Amount in dollars")]
        amount: String,

        #[arg(long, help = "Receipt date (YYYY-MM-DD, default today)")]
        date: Option<String>,
    },

    /// Record a client payment
    AddPayment {
        #[arg(long, help = "Project id")]
        project: String,

        #[arg(long, help = "Amount in dollars")]
        amount: String,

        #[arg(long, help = "Payment status: paid, partial or unpaid")]
        status: Option<String>,

        #[arg(long, help = "Payment date (YYYY-MM-DD, default today)")]
        date: Option<String>,
    },

    /// Create a task on a project
    AddTask {
        #[arg(long, help = "Project id")]
        project: String,

        #[arg(long, help = "Task title")]
        title: String,

        #[arg(long = "assignee", help = "Worker id to assign (repeatable)")]
        assignees: Vec<String>,

        #[arg(long, help = "Due date (YYYY-MM-DD)")]
        due: Option<String>,
    },

    /// Worker check-in / check-out portal
    Portal {
        #[arg(long, help = "Worker id")]
        worker: String,

        #[arg(long = "check", help = "Action: in or out")]
        check: String,
    },

    /// Export the project summaries
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f', help = "Overwrite an existing file")]
        force: bool,
    },

    /// Manage the configuration file (view or create)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check the configuration file for missing fields")]
        check: bool,

        #[arg(long = "init", help = "Write a default configuration file")]
        init: bool,
    },
}

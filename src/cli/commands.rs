//! CLI commands and argument parsing

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line client for the Stripe API
#[derive(Parser, Debug)]
#[command(name = "stripe-kit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Secret API key
    #[arg(long, global = true, env = "STRIPE_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Configuration file (YAML)
    #[arg(short = 'C', long, global = true, env = "STRIPE_KIT_CONFIG")]
    pub config: Option<PathBuf>,

    /// API base URL
    #[arg(long, global = true, env = "STRIPE_API_BASE")]
    pub base_url: Option<String>,

    /// Act on behalf of this connected account
    #[arg(long, global = true, env = "STRIPE_ACCOUNT")]
    pub stripe_account: Option<String>,

    /// Network retries per request
    #[arg(long, global = true, env = "STRIPE_MAX_NETWORK_RETRIES")]
    pub max_retries: Option<u32>,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Connected accounts
    #[command(subcommand)]
    Account(AccountCommand),

    /// Customer tax IDs
    #[command(subcommand)]
    TaxId(TaxIdCommand),

    /// Confirmation tokens
    #[command(subcommand)]
    ConfirmationToken(ConfirmationTokenCommand),

    /// Test-mode helpers
    #[command(subcommand)]
    TestHelpers(TestHelpersCommand),

    /// Financial Connections accounts
    #[command(subcommand)]
    FcAccount(FcAccountCommand),

    /// Print the form encoding of a JSON params document (offline)
    Encode {
        /// JSON file; reads stdin when omitted
        file: Option<PathBuf>,

        /// Inline JSON instead of a file
        #[arg(long, conflicts_with = "file")]
        json: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum AccountCommand {
    /// Retrieve an account, or the key's own account without ID
    Get {
        id: Option<String>,
        #[command(flatten)]
        expand: ExpandArgs,
    },

    /// List connected accounts
    List {
        #[command(flatten)]
        list: ListArgs,
    },

    /// List an account's bank accounts and cards
    ExternalAccounts {
        id: String,

        /// Only `bank_account` or `card`
        #[arg(long)]
        object: Option<String>,

        #[command(flatten)]
        list: ListArgs,
    },

    /// Reject an account
    Reject {
        id: String,

        /// `fraud`, `terms_of_service` or `other`
        #[arg(long)]
        reason: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum TaxIdCommand {
    /// List a customer's tax IDs
    List {
        customer: String,
        #[command(flatten)]
        list: ListArgs,
    },

    /// Retrieve a tax ID
    Get { customer: String, id: String },

    /// Delete a tax ID
    Delete { customer: String, id: String },
}

#[derive(Subcommand, Debug)]
pub enum ConfirmationTokenCommand {
    /// Retrieve a confirmation token
    Get {
        id: String,
        #[command(flatten)]
        expand: ExpandArgs,
    },
}

#[derive(Subcommand, Debug)]
pub enum TestHelpersCommand {
    /// Create a confirmation token from a payment method
    ConfirmationToken {
        #[arg(long)]
        payment_method: String,

        #[arg(long)]
        return_url: Option<String>,

        /// `off_session` or `on_session`
        #[arg(long)]
        setup_future_usage: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum FcAccountCommand {
    /// Retrieve an account
    Get {
        id: String,
        #[command(flatten)]
        expand: ExpandArgs,
    },

    /// List accounts
    List {
        /// Accounts of this customer
        #[arg(long)]
        customer: Option<String>,

        /// Accounts of this connected account
        #[arg(long)]
        account: Option<String>,

        /// Accounts collected in this session
        #[arg(long)]
        session: Option<String>,

        #[command(flatten)]
        list: ListArgs,
    },

    /// Disconnect an account
    Disconnect { id: String },

    /// Refresh account data
    Refresh {
        id: String,

        /// `balance`, `ownership` or `transactions`; repeatable
        #[arg(long = "feature", required = true)]
        features: Vec<String>,
    },

    /// List the owners from an ownership refresh
    Owners {
        id: String,

        #[arg(long)]
        ownership: String,

        #[command(flatten)]
        list: ListArgs,
    },
}

/// Cursor options shared by list commands
#[derive(Args, Debug, Clone, Default)]
pub struct ListArgs {
    /// Page size (1-100)
    #[arg(long)]
    pub limit: Option<i64>,

    #[arg(long, conflicts_with = "ending_before")]
    pub starting_after: Option<String>,

    #[arg(long)]
    pub ending_before: Option<String>,

    /// Follow pages until the end instead of printing one page
    #[arg(long)]
    pub all: bool,

    /// Stop after this many items (with --all)
    #[arg(long, requires = "all")]
    pub max_items: Option<usize>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct ExpandArgs {
    /// Field to expand; repeatable
    #[arg(long = "expand")]
    pub expand: Vec<String>,
}

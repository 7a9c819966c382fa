use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Parser, Debug)]
#[command(
    name = "connoisseur",
    version,
    about = "The Card Connoisseur: curate a card kit and place an order"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        help = "Order sync endpoint (overrides CONNOISSEUR_ORDER_ENDPOINT and config.toml)"
    )]
    pub endpoint: Option<String>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the available kits
    Kits,
    /// Choose a kit and open the gallery
    Kit {
        #[arg(value_enum)]
        kit: KitType,
    },
    /// Show the catalogue with selected quantities
    Gallery,
    /// Change a card quantity by a signed amount
    Adjust {
        id: String,
        #[arg(allow_hyphen_values = true)]
        delta: i64,
    },
    /// Set a card quantity; non-numeric input counts as zero
    Set {
        id: String,
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Show selection progress against the kit
    Status,
    /// Move from the gallery to checkout once the selection is balanced
    Continue,
    /// Return from checkout to the gallery
    Back,
    /// Submit delivery details and place the order
    Submit {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        address: String,
    },
    /// Show the order summary record
    Summary {
        #[arg(
            long,
            default_value_t = false,
            help = "Print the prefilled mail link instead (JSON output always carries it as `mailto`)"
        )]
        mailto: bool,
    },
    /// Start over: clear the kit and the selection
    Reset,
    /// Show the current wizard step
    Session,
    /// Catalogue administration
    Admin {
        #[command(subcommand)]
        command: AdminCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum AdminCommands {
    /// Enter the admin studio
    Open,
    /// Leave the admin studio
    Close,
    /// List catalogue entries
    List,
    /// Publish a new design
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        category: String,
        #[arg(long)]
        image: String,
    },
    /// Remove a design from the catalogue
    Remove { id: String },
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, ValueEnum, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum KitType {
    Standard,
    Jumbo,
}

impl KitType {
    pub fn as_str(&self) -> &'static str {
        match self {
            KitType::Standard => "standard",
            KitType::Jumbo => "jumbo",
        }
    }
}

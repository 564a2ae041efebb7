use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use license_builder::application::state::ThemeMode;
use license_builder::license_generation::domain::license_date::parse_license_date;
use license_builder::license_generation::domain::{ProductId, ProductType};
use std::path::PathBuf;
use std::str::FromStr;

/// A date argument; `none` clears the stored date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateArg(pub Option<NaiveDate>);

impl FromStr for DateArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        if value.eq_ignore_ascii_case("none") {
            return Ok(DateArg(None));
        }
        parse_license_date(value).map(|date| DateArg(Some(date))).ok_or_else(|| {
            format!(
                "Invalid date: {}. Please use YYYY-MM-DD or dd-mmm-yyyy (e.g. 2025-03-01 or 01-mar-2025), or 'none' to clear",
                s
            )
        })
    }
}

/// Assemble SERVER/ISV/FEATURE license files for multi-product suites
#[derive(Parser, Debug)]
#[command(name = "license-builder")]
#[command(version)]
#[command(about = "Assemble SERVER/ISV/FEATURE license files for multi-product suites", long_about = None)]
pub struct Args {
    /// Saved state file (defaults to .license-builder/state.json)
    #[arg(long, global = true, value_name = "PATH")]
    pub state: Option<PathBuf>,

    /// Config file (defaults to ./license-builder.config.yml when present)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Set the license server identity
    Server {
        #[arg(long)]
        hostname: Option<String>,
        #[arg(long = "mac")]
        mac_address: Option<String>,
        #[arg(long)]
        customer_id: Option<String>,
        /// Communication port of the SERVER line
        #[arg(long = "port")]
        communication_port: Option<String>,
        #[arg(long)]
        isv_port: Option<String>,
    },

    /// Set the global template values
    Global {
        #[arg(long, value_name = "DATE")]
        issue_date: Option<DateArg>,
        #[arg(long, value_name = "DATE")]
        start_date: Option<DateArg>,
        #[arg(long, value_name = "DATE")]
        end_date: Option<DateArg>,
        /// Version as YYYY.MM, or "" to clear
        #[arg(long, value_name = "YYYY.MM")]
        year_month: Option<String>,
        #[arg(long)]
        opportunity_id: Option<String>,
    },

    /// Copy the global values onto products
    ApplyGlobals {
        /// Only these products (repeatable); all products when omitted
        #[arg(long = "id", value_name = "ID")]
        ids: Vec<ProductId>,
    },

    /// Set the VM token
    Vm {
        #[arg(long)]
        enabled: Option<bool>,
        #[arg(long, value_name = "DATE")]
        start_date: Option<DateArg>,
        #[arg(long, value_name = "DATE")]
        end_date: Option<DateArg>,
        #[arg(long)]
        permanent: Option<bool>,
        #[arg(long, value_name = "DATE")]
        issue_date: Option<DateArg>,
        #[arg(long, value_name = "YYYY.MM")]
        year_month: Option<String>,
    },

    /// Add a product and its dependent products
    Add {
        /// Product name, e.g. "Cinema 4D" or cinema-4d
        product: ProductType,
    },

    /// Remove a product and its dependent products
    Remove { id: ProductId },

    /// Edit a product; dependents follow the changed fields
    Update {
        id: ProductId,
        #[arg(long)]
        seats: Option<u32>,
        #[arg(long, value_name = "DATE")]
        start_date: Option<DateArg>,
        #[arg(long, value_name = "DATE")]
        end_date: Option<DateArg>,
        #[arg(long)]
        permanent: Option<bool>,
        #[arg(long, value_name = "DATE")]
        issue_date: Option<DateArg>,
        #[arg(long, value_name = "YYYY.MM")]
        year_month: Option<String>,
        #[arg(long)]
        opportunity_id: Option<String>,
        #[arg(long)]
        named_user: Option<bool>,
    },

    /// Set the notes of one product
    Note { id: ProductId, text: String },

    /// Set the global notes
    Notes { text: String },

    /// Move a product together with its dependents
    Move {
        id: ProductId,
        /// Take the place of this product's group; moves to the end when omitted
        #[arg(long, value_name = "ID")]
        over: Option<ProductId>,
    },

    /// Regroup dependents directly under their parent products
    Arrange,

    /// List the products of the current license
    List,

    /// List the catalog and its dependency rules
    Products,

    /// Print the license text
    Preview,

    /// Write the license text to a file, a folder or stdout
    Generate {
        /// Output file path
        #[arg(short, long, value_name = "FILE", conflicts_with = "dir")]
        output: Option<PathBuf>,

        /// Write <customer id>.lic into this folder; without a value, the
        /// configured or last used folder
        #[arg(long, value_name = "DIR", num_args = 0..=1)]
        dir: Option<Option<PathBuf>>,
    },

    /// Replace the products with those found in a license file
    Load {
        file: PathBuf,
        /// Import unknown product names as this product instead of skipping them
        #[arg(long, value_name = "NAME")]
        fallback_product: Option<ProductType>,
    },

    /// Find license files in a folder containing a term
    Search {
        term: String,
        /// Folder to search; the configured or last used folder when omitted
        #[arg(long, value_name = "DIR")]
        dir: Option<PathBuf>,
    },

    /// Show or change preferences
    Prefs {
        #[arg(long, conflicts_with = "toggle_theme")]
        theme: Option<ThemeMode>,
        #[arg(long)]
        zoom: Option<f64>,
        #[arg(long)]
        font_size: Option<f64>,
        #[arg(long, value_name = "DIR")]
        destination: Option<PathBuf>,
        #[arg(long, value_name = "DIR")]
        search_folder: Option<PathBuf>,
        #[arg(long)]
        toggle_theme: bool,
    },

    /// Reset the license; preferences are kept
    Clear,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

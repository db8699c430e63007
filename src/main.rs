//! Card Listings - browse inventory and generate marketplace listings
//!
//! Reads the inventory TSV (local file or URL) and either prints the generated
//! listings, writes a bulk upload CSV, or serves them to the gallery UI.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use card_listings::{
    build_listings, export_listings, BulkTemplate, ExportOptions, InventorySource, Listing,
    ListingOptions, PriceSource, PricingOptions, TitleMode,
};

/// Trading card inventory to marketplace listings
#[derive(Parser, Debug)]
#[command(name = "card_listings")]
#[command(version, about, long_about = None)]
struct Args {
    /// Inventory TSV: file path or http(s) URL
    #[arg(short, long, global = true, default_value = "Full Card Inventory   - Sheet1.tsv")]
    inventory: String,

    /// Title layout
    #[arg(long, global = true, value_enum, default_value_t = TitleModeArg::A)]
    title_mode: TitleModeArg,

    /// Prefix for generated SKUs
    #[arg(long, global = true, default_value = card_listings::listing::DEFAULT_SKU_PREFIX)]
    sku_prefix: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print generated titles and descriptions
    Preview {
        /// Print listings as JSON instead of text
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Write a bulk upload CSV based on the marketplace template
    Export {
        /// Bulk upload template CSV (header block is copied verbatim)
        #[arg(short, long)]
        template: PathBuf,

        /// Output CSV path
        #[arg(short, long, default_value = "ebay_bulk_out.csv")]
        out: PathBuf,

        /// Marketplace category id
        #[arg(long, default_value_t = card_listings::bulk_export::DEFAULT_CATEGORY)]
        category: u32,

        /// Marketplace condition id
        #[arg(long, default_value = card_listings::bulk_export::DEFAULT_CONDITION_ID)]
        condition_id: String,

        /// Flat price for all rows (overrides --price-column)
        #[arg(long)]
        default_price: Option<f64>,

        /// Inventory column holding a numeric price
        #[arg(long)]
        price_column: Option<String>,

        /// Convert prices to .99 style
        #[arg(long, default_value_t = false)]
        psych_price: bool,
    },
    /// Serve the inventory as a JSON API (and optional static gallery files)
    Serve {
        #[arg(short, long, default_value_t = 8080)]
        port: u16,

        /// Directory with the gallery's static files
        #[arg(long)]
        static_dir: Option<PathBuf>,
    },
}

/// A: YEAR SET PLAYER INSERT /SERIAL AUTO, B: adds the card number after the set
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum TitleModeArg {
    A,
    B,
}

impl From<TitleModeArg> for TitleMode {
    fn from(arg: TitleModeArg) -> Self {
        match arg {
            TitleModeArg::A => TitleMode::Standard,
            TitleModeArg::B => TitleMode::WithCardNumber,
        }
    }
}

#[tokio::main]
async fn main() {
    // Set RUST_LOG to control log level, e.g. RUST_LOG=card_listings=debug
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    if let Err(e) = run(args).await {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> card_listings::Result<()> {
    let source = InventorySource::parse(&args.inventory);
    let listing_options = ListingOptions {
        title_mode: args.title_mode.into(),
        sku_prefix: args.sku_prefix,
    };

    let sheet = source.load_sheet().await?;
    let listings = build_listings(sheet.cards(), &listing_options);

    match args.command {
        Command::Preview { json } => {
            print_preview(&listings, json);
            Ok(())
        }
        Command::Export {
            template,
            out,
            category,
            condition_id,
            default_price,
            price_column,
            psych_price,
        } => {
            let template = BulkTemplate::load(&template)?;
            let pricing = PricingOptions {
                source: PriceSource::resolve(&sheet, default_price, price_column.as_deref()),
                psych: psych_price,
            };
            pricing.log_source();
            let options = ExportOptions {
                category,
                condition_id,
                ..Default::default()
            };

            let summary = export_listings(&listings, &template, &pricing, &options, &out)?;
            log::info!("Rows exported: {}", summary.rows);
            Ok(())
        }
        Command::Serve { port, static_dir } => {
            card_listings::web::serve(listings, static_dir.as_deref(), port).await
        }
    }
}

fn print_preview(listings: &[Listing], json: bool) {
    if json {
        match serde_json::to_string_pretty(listings) {
            Ok(out) => println!("{out}"),
            Err(e) => log::error!("Failed to serialize listings: {}", e),
        }
        return;
    }

    for listing in listings {
        println!("[{}] {}", listing.sku, listing.title);
        println!("{}", listing.description);
        println!();
    }
    println!("{} listings", listings.len());
}

use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use storefront::application::session::{Outcome, Session, SessionConfig, DEFAULT_MAX_QUANTITY};
use storefront::application::storefront::Storefront;
use storefront::domain::catalog::Catalog;
use storefront::domain::ports::{OrderStoreBox, ProductStoreBox};
use storefront::infrastructure::in_memory::{InMemoryOrderStore, InMemoryProductStore};
use storefront::interfaces::csv::action_reader::ActionReader;
use storefront::interfaces::csv::order_writer::OrderWriter;
use storefront::interfaces::csv::product_writer::ProductWriter;
use storefront::interfaces::json::catalog_loader::load_catalog;
use storefront::logging;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON file with the products on sale. Defaults to the demo catalog.
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Replay a CSV of storefront actions and print the order history
    Run {
        /// Input actions CSV file
        input: PathBuf,

        /// Largest quantity accepted per order
        #[arg(long, default_value_t = DEFAULT_MAX_QUANTITY)]
        max_quantity: u32,
    },
    /// Print the catalog as CSV
    Catalog,
}

#[tokio::main]
async fn main() -> Result<()> {
    logging::init();
    let cli = Cli::parse();

    let catalog = match &cli.catalog {
        Some(path) => load_catalog(path).into_diagnostic()?,
        None => Catalog::demo(),
    };

    let products: ProductStoreBox = Box::new(InMemoryProductStore::new(catalog));
    let orders: OrderStoreBox = Box::new(InMemoryOrderStore::new());
    let storefront = Storefront::new(products, orders);

    match cli.command {
        Command::Run {
            input,
            max_quantity,
        } => run(&storefront, &input, SessionConfig { max_quantity }).await,
        Command::Catalog => {
            let products = storefront.catalog().await.into_diagnostic()?;
            let stdout = io::stdout();
            let mut writer = ProductWriter::new(stdout.lock());
            writer.write_products(&products).into_diagnostic()?;
            Ok(())
        }
    }
}

async fn run(storefront: &Storefront, input: &Path, config: SessionConfig) -> Result<()> {
    let file = File::open(input).into_diagnostic()?;
    let reader = ActionReader::new(file);
    let mut session = Session::new(storefront, config);

    for action in reader.actions() {
        match action {
            Ok(action) => match session.apply(action).await {
                Ok(outcome) => report(&outcome),
                Err(e) => eprintln!("Error processing action: {}", e),
            },
            Err(e) => {
                eprintln!("Error reading action: {}", e);
            }
        }
    }

    let history = storefront.history().await.into_diagnostic()?;
    let stdout = io::stdout();
    let mut writer = OrderWriter::new(stdout.lock());
    writer.write_orders(&history).into_diagnostic()?;

    Ok(())
}

fn report(outcome: &Outcome) {
    match outcome {
        Outcome::OrderPlaced(order) => {
            eprintln!(
                "Order placed for {} {}(s) by {}.",
                order.quantity, order.product, order.customer.name
            );
            eprintln!("Order ID: {} | Total: ${}", order.id, order.total);
        }
        Outcome::PaymentConfirmed(receipt) => {
            let order = &receipt.order;
            eprintln!("{}", receipt.message);
            eprintln!("Receipt");
            eprintln!("  Order ID: {}", order.id);
            eprintln!("  Product: {}", order.product);
            eprintln!("  Quantity: {}", order.quantity);
            eprintln!("  Total Amount Paid: ${}", order.total);
            eprintln!("  Customer Name: {}", order.customer.name);
            eprintln!("  Email: {}", order.customer.email);
            eprintln!("  Address: {}", order.customer.address);
            eprintln!("Thank you for your purchase!");
        }
    }
}

use clap::{Parser, Subcommand};
use gs_client::{ClientResult, DataReply, ExplorerClient};
use gs_view::{TableError, TableModel, shape_static_table, shape_varying_table, to_series};

#[derive(Parser)]
#[command(name = "gs-cli")]
#[command(about = "Gridscope CLI - headless network data inspector", long_about = None)]
struct Cli {
    /// Base URL of the backend serving network data
    #[arg(long, global = true, default_value = "http://127.0.0.1:5000")]
    base_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a network on the backend
    Load {
        /// Network file name known to the backend
        network: String,
    },
    /// List components of the loaded network
    Components,
    /// Print a component's static snapshot as a table
    Static {
        /// Component name (e.g. Bus, Generator)
        component: String,
    },
    /// List a component's static and varying attribute names
    Attributes {
        /// Component name
        component: String,
    },
    /// Print one attribute's time series as a table
    Series {
        /// Component name
        component: String,
        /// Varying attribute name (e.g. p_set)
        attribute: String,
        /// Print per-series statistics instead of the table
        #[arg(long)]
        summary: bool,
    },
}

fn main() -> ClientResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let client = ExplorerClient::new(&cli.base_url);

    match cli.command {
        Commands::Load { network } => cmd_load(&client, &network),
        Commands::Components => cmd_components(&client),
        Commands::Static { component } => cmd_static(&client, &component),
        Commands::Attributes { component } => cmd_attributes(&client, &component),
        Commands::Series {
            component,
            attribute,
            summary,
        } => cmd_series(&client, &component, &attribute, summary),
    }
}

fn cmd_load(client: &ExplorerClient, network: &str) -> ClientResult<()> {
    let reply = client.load_network(network)?;
    println!("{}", reply.acknowledgment());
    Ok(())
}

fn cmd_components(client: &ExplorerClient) -> ClientResult<()> {
    let components = client.components()?;
    if components.is_empty() {
        println!("No components in the loaded network");
    } else {
        for component in components {
            println!("{component}");
        }
    }
    Ok(())
}

fn cmd_static(client: &ExplorerClient, component: &str) -> ClientResult<()> {
    match client.static_data(component)? {
        DataReply::Dataset(dataset) => print_table(shape_static_table(&dataset)),
        DataReply::Error { message } => println!("{message}"),
    }
    Ok(())
}

fn cmd_attributes(client: &ExplorerClient, component: &str) -> ClientResult<()> {
    let listing = client.attributes(component)?;
    println!("static:");
    for attribute in &listing.static_attrs {
        println!("  {attribute}");
    }
    println!("varying:");
    for attribute in &listing.varying {
        println!("  {attribute}");
    }
    Ok(())
}

fn cmd_series(
    client: &ExplorerClient,
    component: &str,
    attribute: &str,
    summary: bool,
) -> ClientResult<()> {
    match client.varying_data(component, attribute)? {
        DataReply::Dataset(dataset) => {
            if summary {
                print_series_summary(&dataset, component, attribute);
            } else {
                print_table(shape_varying_table(&dataset));
            }
        }
        DataReply::Error { message } => println!("{message}"),
    }
    Ok(())
}

fn print_series_summary(dataset: &gs_data::Dataset, component: &str, attribute: &str) {
    let bundle = to_series(dataset, component, attribute);
    if bundle.is_empty() {
        println!("No snapshot axis in this dataset; nothing to summarize");
        return;
    }

    println!("{}", bundle.layout.title);
    for series in &bundle.series {
        let values: Vec<f64> = series.y.iter().flatten().copied().collect();
        if values.is_empty() {
            println!("  {}: no numeric samples", series.label);
            continue;
        }
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let mean = values.iter().sum::<f64>() / values.len() as f64;
        println!(
            "  {}: {} samples, min {:.2}, max {:.2}, mean {:.2}",
            series.label,
            values.len(),
            min,
            max,
            mean
        );
    }
}

fn print_table(table: Result<TableModel, TableError>) {
    let table = match table {
        Ok(table) => table,
        Err(e) => {
            println!("{e}");
            return;
        }
    };

    let mut widths: Vec<usize> = table.headers.iter().map(String::len).collect();
    for row in &table.rows {
        for (i, cell) in row.iter().enumerate() {
            if cell.len() > widths[i] {
                widths[i] = cell.len();
            }
        }
    }

    print_row(&table.headers, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    print_row(&rule, &widths);
    for row in &table.rows {
        print_row(row, &widths);
    }
}

fn print_row(cells: &[String], widths: &[usize]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect();
    println!("{}", line.join("  "));
}

use clap::Parser;
use color_eyre::Result;
use std::path::PathBuf;

use ifc_takeoff::classify::{merge_classifications, ClassificationStore, JsonFileStore};
use ifc_takeoff::export::{export_csv, export_json};
use ifc_takeoff::loader::load_model;
use ifc_takeoff::resolve::aggregate;
use ifc_takeoff::ui::App;

#[derive(Parser, Debug)]
#[command(name = "ifc-takeoff")]
#[command(about = "IFC Takeoff - aggregate and classify quantities from element data")]
#[command(version)]
struct Args {
    /// Path to the materialized takeoff model (JSON)
    #[arg(required = true)]
    file: PathBuf,

    /// Classification store file (defaults to <model>.classifications.json)
    #[arg(long, value_name = "FILE")]
    classifications: Option<PathBuf>,

    /// Scope id override (project or version)
    #[arg(long, value_name = "ID")]
    scope: Option<String>,

    /// Export merged table to CSV (optional output path)
    #[arg(long, value_name = "FILE")]
    csv: Option<PathBuf>,

    /// Export merged table to JSON (optional output path)
    #[arg(long, value_name = "FILE")]
    json: Option<PathBuf>,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let mut model = load_model(&args.file)?;
    if let Some(scope) = args.scope {
        model.scope_id = scope;
    }

    let store_path = args
        .classifications
        .unwrap_or_else(|| args.file.with_extension("classifications.json"));
    let store = JsonFileStore::open(&store_path)?;

    let groups = aggregate(&model.objects);
    let records = store.list(&model.scope_id)?;
    let rows = merge_classifications(&groups, &records);

    if let Some(csv_path) = &args.csv {
        export_csv(&rows, csv_path)?;
        println!("Exported to CSV: {}", csv_path.display());
    }

    if let Some(json_path) = &args.json {
        export_json(&rows, json_path)?;
        println!("Exported to JSON: {}", json_path.display());
    }

    if args.csv.is_some() || args.json.is_some() {
        return Ok(());
    }

    let terminal = ratatui::init();
    let result = App::new(&model, groups, store).run(terminal);
    ratatui::restore();
    result
}

use dotenvy::dotenv;
use quotepro::{
    app::App,
    config,
    errors::Result,
    storage::{JsonFileStorage, KeyValueStorage},
};
use std::{env, fs, sync::Arc};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file (as early as possible)
    dotenv().ok();

    // 3. Load the application configuration
    let app_config = config::load_app_configuration()?;

    if let Some(upload_config) = &app_config.upload {
        tracing::debug!(endpoint = %upload_config.endpoint, "image uploads enabled");
    }

    // 4. Open storage and assemble the application
    let storage: Arc<dyn KeyValueStorage> = Arc::new(JsonFileStorage::open(&app_config.data_dir)?);
    let seed_currency = storage.get(quotepro::storage::keys::SELECTED_CURRENCY)?.is_none();

    let mut app = App::new(Arc::clone(&storage));
    if seed_currency && app_config.currency != app.currency() {
        app.set_currency(&app_config.currency)?;
        info!(currency = %app_config.currency, "seeded currency preference from config");
    }

    // 5. Dispatch the command
    let args: Vec<String> = env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("status") => status(&app),
        Some("export") if args.len() >= 2 => export(&app, &args[1], args.get(2).cloned()),
        Some("print") if args.len() >= 2 => print_quotation(&app, &args[1]),
        _ => {
            usage();
            Ok(())
        }
    }
}

fn status(app: &App) -> Result<()> {
    println!("Company:    {}", app.company.info().name);
    println!("Currency:   {}", app.currency());
    println!("Products:   {}", app.catalog.products().len());
    println!("Categories: {}", app.categories.categories().len());
    println!("Templates:  {}", app.templates.templates().len());
    println!("Quotations: {}", app.archive.quotations().len());

    if let Some(latest) = app.archive.quotations().first() {
        println!(
            "Latest:     {} — {} ({} items)",
            latest.customer_name,
            latest.created_at.format("%Y-%m-%d"),
            latest.items.len()
        );
    }
    Ok(())
}

fn export(app: &App, quotation_id: &str, output: Option<String>) -> Result<()> {
    let (filename, bytes) = app.export_quotation(quotation_id)?;
    let path = output.unwrap_or(filename);
    fs::write(&path, bytes)?;
    info!(path, "quotation PDF written");
    println!("{path}");
    Ok(())
}

fn print_quotation(app: &App, quotation_id: &str) -> Result<()> {
    let rendered = app.print_quotation(quotation_id)?;
    print!("{rendered}");
    Ok(())
}

fn usage() {
    eprintln!("Usage: quotepro <command>");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  status                      Summarize the catalog and archive");
    eprintln!("  export <quotation-id> [out] Write an archived quotation as PDF");
    eprintln!("  print <quotation-id>        Render an archived quotation as text");
}

//! PayTrack CLI - the presentation layer.
//!
//! Parses one command per invocation, loads the data the command needs
//! through the core modules, and hands collection snapshots to the pure
//! report builders and export sinks.

use chrono::NaiveDate;
use dotenvy::dotenv;
use paytrack::config;
use paytrack::core::{category, payment, user};
use paytrack::errors::{Error, Result};
use paytrack::export;
use paytrack::report::{chart, document, workbook};
use sea_orm::DatabaseConnection;
use std::env;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file (non-fatal, env vars can be set externally)
    dotenv().ok();

    // 3. Load the application configuration
    let app_config = config::load_app_configuration()?;

    // 4. Initialize the database
    let db = config::database::create_connection(&app_config.database_url)
        .await
        .inspect(|_| info!("Database connection established."))
        .inspect_err(|e| error!("Failed to connect to database: {e}"))?;
    config::database::create_tables(&db).await?;

    // 5. Seed configured categories (only the missing ones are created)
    category::seed_categories(&db, &app_config.categories).await?;

    // 6. Dispatch the command
    let args: Vec<String> = env::args().skip(1).collect();
    run_command(&db, &app_config, &args).await
}

async fn run_command(
    db: &DatabaseConnection,
    app_config: &config::AppConfig,
    args: &[String],
) -> Result<()> {
    match args {
        [cmd, fio] if cmd == "add-user" => {
            let created = user::create_user(db, fio.clone()).await?;
            println!("Added user #{}: {}", created.id, created.fio);
        }
        [cmd, name] if cmd == "add-category" => {
            let created = category::create_category(db, name.clone()).await?;
            println!("Added category #{}: {}", created.id, created.name);
        }
        [cmd, fio, category_name, name, date, price, quantity] if cmd == "add-payment" => {
            let user = require_user(db, fio).await?;
            let category = category::get_category_by_name(db, category_name)
                .await?
                .ok_or_else(|| Error::CategoryNotFound {
                    name: category_name.clone(),
                })?;
            let created = payment::create_payment(
                db,
                user.id,
                category.id,
                name.clone(),
                parse_date(date)?,
                parse_number(price, "price")?,
                parse_number(quantity, "quantity")?,
            )
            .await?;
            println!("Added payment #{}: {}", created.id, created.name);
        }
        [cmd] if cmd == "list-users" => {
            for user in user::get_all_users(db).await? {
                println!("#{} {}", user.id, user.fio);
            }
        }
        [cmd] if cmd == "list-categories" => {
            for category in category::get_all_categories(db).await? {
                println!("#{} {}", category.id, category.name);
            }
        }
        [cmd, fio] if cmd == "list-payments" => {
            let user = require_user(db, fio).await?;
            for p in payment::get_payments_for_user(db, user.id).await? {
                println!(
                    "#{} {} {} {:.2} x{}",
                    p.id, p.date, p.name, p.price, p.quantity
                );
            }
        }
        [cmd, id] if cmd == "delete-payment" => {
            let id = parse_number(id, "payment id")?;
            payment::delete_payment(db, id).await?;
            println!("Deleted payment #{id}");
        }
        [cmd, fio] if cmd == "chart" => {
            let user = require_user(db, fio).await?;
            let categories = category::get_all_categories(db).await?;
            let payments = payment::get_all_payments(db).await?;
            let series = chart::build_series(&user, &categories, &payments);
            if series.is_empty() {
                println!("No categories defined, nothing to draw.");
            } else {
                print!("{}", chart::render_bar_chart(&series, 30));
            }
        }
        [cmd] if cmd == "export-spreadsheet" => {
            export_spreadsheet(db, app_config)
                .await
                .inspect_err(|e| error!("export failed: {e}"))?;
        }
        [cmd, fio] if cmd == "export-document" => {
            export_document(db, app_config, fio)
                .await
                .inspect_err(|e| error!("export failed: {e}"))?;
        }
        _ => usage(),
    }

    Ok(())
}

/// Exports the spreadsheet report for all users to the configured path.
async fn export_spreadsheet(
    db: &DatabaseConnection,
    app_config: &config::AppConfig,
) -> Result<()> {
    let users = user::get_all_users(db).await?;
    let categories = category::get_all_categories(db).await?;
    let payments = payment::get_all_payments(db).await?;

    let book = workbook::build_workbook(&users, &categories, &payments);
    let path = export::export_spreadsheet(&book, &app_config.export.spreadsheet_path)?;
    println!("Spreadsheet report written to {}", path.display());
    Ok(())
}

/// Exports the document report for the selected user to the configured paths.
async fn export_document(
    db: &DatabaseConnection,
    app_config: &config::AppConfig,
    fio: &str,
) -> Result<()> {
    let user = require_user(db, fio).await?;
    let categories = category::get_all_categories(db).await?;
    let payments = payment::get_all_payments(db).await?;

    let report_date = chrono::Local::now().date_naive();
    let doc = document::build_report(
        std::slice::from_ref(&user),
        &categories,
        &payments,
        report_date,
    );
    let (html, text) = export::export_document(
        &doc,
        &app_config.export.document_path,
        &app_config.export.document_text_path,
    )?;
    println!("Document report written to {} and {}", html.display(), text.display());
    Ok(())
}

async fn require_user(db: &DatabaseConnection, fio: &str) -> Result<paytrack::entities::user::Model> {
    user::get_user_by_fio(db, fio)
        .await?
        .ok_or_else(|| Error::UserNotFound {
            name: fio.to_string(),
        })
}

fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| Error::Config {
        message: format!("Invalid date '{s}' (expected YYYY-MM-DD): {e}"),
    })
}

fn parse_number<T: std::str::FromStr>(s: &str, what: &str) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    s.parse().map_err(|e| Error::Config {
        message: format!("Invalid {what} '{s}': {e}"),
    })
}

fn usage() {
    println!("Usage: paytrack <command>");
    println!();
    println!("Commands:");
    println!("  add-user <fio>");
    println!("  add-category <name>");
    println!("  add-payment <fio> <category> <name> <YYYY-MM-DD> <price> <quantity>");
    println!("  list-users");
    println!("  list-categories");
    println!("  list-payments <fio>");
    println!("  delete-payment <id>");
    println!("  chart <fio>");
    println!("  export-spreadsheet");
    println!("  export-document <fio>");
}

//! Gastos - command-line front end for the expenses API
//!
//! Usage:
//!   gastos list [page] [limit] [category]
//!   gastos get <id>
//!   gastos create <description> <amount> <category> [date]
//!   gastos update <id> key=value...
//!   gastos delete <id>
//!   gastos search <query...>

use anyhow::{anyhow, bail, Context, Result};
use chrono::NaiveDate;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use gastos::constants::{APP_NAME, APP_VERSION, LOG_FILE_NAME};
use gastos::{ClientConfig, ExpenseCreate, ExpenseStore, ExpenseUpdate, QueryParams};

const USAGE: &str = "\
Usage:
  gastos list [page] [limit] [category]
  gastos get <id>
  gastos create <description> <amount> <category> [YYYY-MM-DD]
  gastos update <id> key=value...   (description, amount, date, category)
  gastos delete <id>
  gastos search <query...>";

/// Parsed command line
#[derive(Debug, PartialEq)]
enum Command {
    List(QueryParams),
    Get(i64),
    Create(ExpenseCreate),
    Update(i64, ExpenseUpdate),
    Delete(i64),
    Search(String),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging to file
    let file_appender = tracing_appender::rolling::never(".", LOG_FILE_NAME);
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = match parse_command(&args) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("{} {}\n\n{}\n\n{}", APP_NAME, APP_VERSION, e, USAGE);
            std::process::exit(2);
        }
    };

    let config = ClientConfig::load()?;
    tracing::info!(api_base = %config.api_base, ?command, "Starting");
    let store = ExpenseStore::from_config(&config);

    match command {
        Command::List(params) => {
            let page = store.fetch_expenses(&params).await?;
            print_json(&page)?;
        }
        Command::Get(id) => print_json(&store.fetch_expense_by_id(id).await?)?,
        Command::Create(data) => print_json(&store.create_expense(&data).await?)?,
        Command::Update(id, data) => print_json(&store.update_expense(id, &data).await?)?,
        Command::Delete(id) => {
            store.delete_expense(id).await?;
            println!("Deleted expense {}", id);
        }
        Command::Search(query) => {
            let found = store.search_expenses(&query).await;
            if let Some(error) = store.error() {
                eprintln!("{}", error);
            }
            print_json(&found)?;
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn parse_command(args: &[String]) -> Result<Command> {
    let (name, rest) = args
        .split_first()
        .ok_or_else(|| anyhow!("Missing command"))?;

    match name.as_str() {
        "list" => {
            let mut params = QueryParams::default();
            if let Some(page) = rest.first() {
                params.page = Some(page.parse().context("Invalid page")?);
            }
            if let Some(limit) = rest.get(1) {
                params.limit = Some(limit.parse().context("Invalid limit")?);
            }
            params.category = rest.get(2).cloned();
            Ok(Command::List(params))
        }
        "get" => Ok(Command::Get(parse_id(rest)?)),
        "delete" => Ok(Command::Delete(parse_id(rest)?)),
        "create" => {
            let [description, amount, category, more @ ..] = rest else {
                bail!("create needs <description> <amount> <category>");
            };
            let mut data = ExpenseCreate::new(
                description.as_str(),
                amount.parse().context("Invalid amount")?,
                category.as_str(),
            );
            if let Some(date) = more.first() {
                data = data.with_date(parse_date(date)?);
            }
            Ok(Command::Create(data))
        }
        "update" => {
            let id = parse_id(rest)?;
            let mut data = ExpenseUpdate::default();
            for pair in &rest[1..] {
                let (key, value) = pair
                    .split_once('=')
                    .ok_or_else(|| anyhow!("Expected key=value, got '{}'", pair))?;
                match key {
                    "description" => data.description = Some(value.to_string()),
                    "amount" => data.amount = Some(value.parse().context("Invalid amount")?),
                    "date" => data.date = Some(parse_date(value)?),
                    "category" => data.category = Some(value.to_string()),
                    other => bail!("Unknown field '{}'", other),
                }
            }
            if data.is_empty() {
                bail!("update needs at least one key=value");
            }
            Ok(Command::Update(id, data))
        }
        "search" => Ok(Command::Search(rest.join(" "))),
        other => bail!("Unknown command '{}'", other),
    }
}

fn parse_id(rest: &[String]) -> Result<i64> {
    rest.first()
        .ok_or_else(|| anyhow!("Missing expense id"))?
        .parse()
        .context("Invalid expense id")
}

/// Validate an ISO date and return it normalized
fn parse_date(value: &str) -> Result<String> {
    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", value))?;
    Ok(date.format("%Y-%m-%d").to_string())
}

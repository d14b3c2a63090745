//! Reads a product page from stdin and prints a JSON search plan to stdout.
//!
//! Usage:
//!   product-query [--query <product name>] [--open <amazon|ebay|aliexpress|all>]
//!
//! With `--query` the page is not read; the plan is built from the given name.
//! With `--open` the search URLs of the main query are also handed to the
//! system opener.

use std::env;
use std::io::{self, Read};
use std::process::ExitCode;

use product_query::{
    open_all, open_one, plan_from_name, plan_search, QueryOptions, SearchPlan, SystemOpener,
};
use tracing_subscriber::EnvFilter;

struct Args {
    query: Option<String>,
    open: Option<String>,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        query: None,
        open: None,
    };

    let mut iter = env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--query" | "-q" => {
                args.query = Some(iter.next().ok_or("--query needs a value")?);
            }
            "--open" => {
                args.open = Some(iter.next().ok_or("--open needs a value")?);
            }
            "--help" | "-h" => {
                return Err(
                    "usage: product-query [--query <product name>] [--open <marketplace|all>]".to_string(),
                )
            }
            other => return Err(format!("unexpected argument: {other}")),
        }
    }

    Ok(args)
}

fn open_searches(plan: &SearchPlan, target: &str) -> bool {
    let Some(query) = plan.queries.distinct().first().map(|q| (*q).to_string()) else {
        tracing::warn!("no query to search for");
        return false;
    };

    let mut opener = SystemOpener;
    if target.eq_ignore_ascii_case("all") {
        open_all(&mut opener, &query) > 0
    } else {
        open_one(&mut opener, target, &query).is_ok()
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::from(2);
        }
    };

    let plan = if let Some(name) = &args.query {
        plan_from_name(name, &QueryOptions::default())
    } else {
        let mut html = Vec::new();
        if let Err(e) = io::stdin().read_to_end(&mut html) {
            eprintln!("Failed to read from stdin: {e}");
            return ExitCode::FAILURE;
        }
        plan_search(&product_query::encoding::decode_html(&html))
    };

    match serde_json::to_string_pretty(&plan) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Failed to serialize plan: {e}");
            return ExitCode::FAILURE;
        }
    }

    if let Some(target) = &args.open {
        if !open_searches(&plan, target) {
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}

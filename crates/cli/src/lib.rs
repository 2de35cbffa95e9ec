//! `theater-statement` — load an invoice and a play catalog from JSON files
//! and print the billing statement.

pub mod config;

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::de::DeserializeOwned;

use theater_invoicing::{Catalog, Invoice, PricingRules, StatementGenerator};

use crate::config::{Config, OutputFormat};

/// Load every input named by `config` and produce the text to print.
pub fn run(config: &Config) -> anyhow::Result<String> {
    let invoice: Invoice = read_json(&config.invoice_path).context("loading invoice")?;
    let catalog: Catalog = read_json(&config.plays_path).context("loading play catalog")?;
    let rules: PricingRules = match &config.pricing_path {
        Some(path) => read_json(path).context("loading pricing rules")?,
        None => PricingRules::STANDARD,
    };

    tracing::info!(
        customer = invoice.customer(),
        performances = invoice.performances().len(),
        plays = catalog.len(),
        custom_pricing = config.pricing_path.is_some(),
        "inputs loaded"
    );

    let generator = StatementGenerator::new(rules).context("invalid pricing rules")?;
    let statement = generator
        .statement(&invoice, &catalog)
        .with_context(|| format!("generating statement for {}", invoice.customer()))?;

    match config.output {
        OutputFormat::Text => Ok(statement.render_plain()),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&statement)?;
            json.push('\n');
            Ok(json)
        }
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let raw = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))
}

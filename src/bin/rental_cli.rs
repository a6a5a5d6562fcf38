//! # rental-cli
//!
//! Command-line front end: loads the configured fleets and runs one broker
//! or reporting command against them.

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use clap::{Parser, Subcommand};
use rental_broker::application::services::{
    CompanyRegistry, ConfirmationCoordinator, ManagerService, QuoteBroker,
    RepositoryCompanyRegistry, ReservationSession,
};
use rental_broker::config::load_config;
use rental_broker::domain::entities::ReservationConstraints;
use rental_broker::domain::value_objects::{CompanyName, DateRange, RenterName};
use rental_broker::telemetry::init_tracing;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, Parser)]
#[command(name = "rental-cli", about = "Quote and book rental cars across companies")]
struct Cli {
    /// Configuration file layered over config/default.toml.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Extra fleet files to load after the configured ones.
    #[arg(long = "fleet", global = true)]
    fleets: Vec<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List the registered companies.
    Companies,
    /// Show the car types available for a period and the cheapest one.
    Types {
        /// First day of the rental (YYYY-MM-DD).
        #[arg(long)]
        start: NaiveDate,
        /// Day the car is returned (YYYY-MM-DD).
        #[arg(long)]
        end: NaiveDate,
        /// Region used for the cheapest type.
        #[arg(long)]
        region: Option<String>,
    },
    /// Quote and confirm a single reservation.
    Book {
        /// Renter name.
        #[arg(long)]
        renter: String,
        /// First day of the rental (YYYY-MM-DD).
        #[arg(long)]
        start: NaiveDate,
        /// Day the car is returned (YYYY-MM-DD).
        #[arg(long)]
        end: NaiveDate,
        /// Car type name.
        #[arg(long)]
        car_type: String,
        /// Pick-up region.
        #[arg(long)]
        region: Option<String>,
    },
    /// Show the most popular car type and the best clients.
    Report {
        /// Company to report on.
        #[arg(long)]
        company: String,
        /// Year reservations must start in; defaults to the current year.
        #[arg(long)]
        year: Option<i32>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.clone()).context("loading configuration")?;
    init_tracing(&config.logging).context("initializing tracing")?;

    let registry: Arc<dyn CompanyRegistry> = Arc::new(RepositoryCompanyRegistry::in_memory());
    let manager = ManagerService::new(registry.clone());
    for path in config.fleet.resolved_files().iter().chain(cli.fleets.iter()) {
        manager
            .load_rental(path)
            .await
            .with_context(|| format!("loading fleet {}", path.display()))?;
    }

    let broker = Arc::new(QuoteBroker::new(registry.clone(), config.broker.clone()));
    let coordinator = Arc::new(ConfirmationCoordinator::new(registry));

    match cli.command {
        Command::Companies => {
            for name in broker.company_names().await? {
                println!("{name}");
            }
        }
        Command::Types { start, end, region } => {
            let period = DateRange::new(start, end)?;
            for car_type in broker.available_car_types(&period).await? {
                println!("{car_type}");
            }
            if let Some(region) = region {
                match broker.cheapest_car_type(&period, &region).await? {
                    Some(cheapest) => println!("cheapest in {region}: {cheapest}"),
                    None => println!("nothing available in {region}"),
                }
            }
        }
        Command::Book {
            renter,
            start,
            end,
            car_type,
            region,
        } => {
            let renter = RenterName::new(renter)?;
            let constraints =
                ReservationConstraints::new(DateRange::new(start, end)?, car_type, region.as_deref())?;

            let mut session = ReservationSession::new(broker, coordinator);
            session.set_renter(renter.clone())?;
            session.create_quote(&renter, &constraints).await?;
            let reservations = session.confirm_quotes().await?;
            println!("{}", serde_json::to_string_pretty(&reservations)?);
        }
        Command::Report { company, year } => {
            let company = CompanyName::new(company)?;
            let year = year.unwrap_or_else(|| chrono::Utc::now().year());
            match manager.most_popular_car_type_in(&company, year).await? {
                Some(car_type) => println!("most popular in {year}: {car_type}"),
                None => println!("{company} has no car types"),
            }
            let clients: Vec<String> = manager
                .best_clients()
                .await?
                .iter()
                .map(ToString::to_string)
                .collect();
            println!("best clients: {}", clients.join(", "));
        }
    }

    Ok(())
}

mod calendar;
mod cli;
mod config;
mod grouping;
mod report;
mod session;
mod tracking;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::{cli::Cli, config::Config, session::Timetracking};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    let config = Config::load(cli.config.as_deref())?;
    let calendar = config
        .work_calendar()
        .context("invalid calendar configuration")?;
    tracing::debug!(
        days_off = calendar.days_off(),
        workweek = calendar.workweek_len(),
        "calendar loaded"
    );

    let harvest = harvest::HarvestClient::new(harvest::Credentials::new(
        config.harvest_account_id()?,
        config.token.clone(),
    ));
    let forecast = config.forecast_account_id()?.map(|account_id| {
        forecast::ForecastClient::new(forecast::Credentials::new(
            account_id,
            config.token.clone(),
        ))
    });

    let mut session = Timetracking::new(calendar, harvest, forecast);

    if let Some(project_name) = cli.assignments.as_deref() {
        session.set_forecast_user(cli.forecast_uid).await?;
        if let Some(person) = session.forecast_user() {
            println!("assignments on '{}' for {}", project_name, person.full_name());
            println!();
        }
        let assignments = session.assignments_by_name(project_name).await?;
        report::print_assignments(project_name, &assignments);
        return Ok(());
    }

    session.set_user(cli.uid).await?;
    if let Some(user) = session.user() {
        println!("tracked time for {} <{}>", user.full_name(), user.email);
        println!();
    }

    let from = cli
        .from
        .unwrap_or_else(|| chrono::Local::now().date_naive());
    let include_empty_days = !cli.no_empty_days;

    match cli.group_by {
        Some(granularity) => {
            let (days, groups) = session
                .get_recent_days_grouped(cli.days, from, include_empty_days, granularity)
                .await?;
            report::print_grouped(days, &groups, granularity, session.calendar().workweek_len());
        }
        None => {
            let (days, entries) = session
                .get_recent_days(cli.days, from, include_empty_days)
                .await?;
            report::print_days(days, &entries);
        }
    }

    Ok(())
}

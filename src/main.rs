//! Interactive terminal frontend for Skycast
//!
//! A read-eval loop standing in for the widget's controls: `search <city>`
//! is the search box, `locate` the geolocation button, `unit c|f` the unit
//! toggle. After every command the derived view state is printed.

use anyhow::{Context, Result};
use skycast::{
    NoGeolocation, SkycastConfig, UnitPreference, ViewState, WeatherApiClient, WeatherSession,
};
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = SkycastConfig::load().context("Failed to load configuration")?;
    init_tracing(&config);

    let client = WeatherApiClient::new(&config).context("Failed to create API client")?;
    let mut session = WeatherSession::new(client, config.defaults.unit);
    let geolocation = NoGeolocation;

    println!("Skycast {}", skycast::VERSION);
    println!("Commands: search <city>, locate, unit c|f, quit");

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let line = line.trim();
        let (command, rest) = line.split_once(' ').unwrap_or((line, ""));
        match command {
            "" => continue,
            "quit" | "exit" => break,
            "search" => session.search(rest).await,
            "locate" => session.locate(&geolocation).await,
            "unit" => match UnitPreference::from_flag(rest) {
                Some(unit) => {
                    session.set_unit(unit);
                    if !session.has_data() {
                        println!("Unit set to {}", unit.suffix());
                        continue;
                    }
                }
                None => {
                    println!("Unknown unit '{rest}', expected c or f");
                    continue;
                }
            },
            _ => {
                println!("Unknown command '{command}'");
                continue;
            }
        }

        print_view(session.view());
    }

    Ok(())
}

fn init_tracing(config: &SkycastConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn print_view(view: &ViewState) {
    if !view.error.is_empty() {
        println!("! {}", view.error);
        return;
    }

    let Some(current) = &view.current else {
        println!("No weather data yet. Try: search Berlin");
        return;
    };

    println!();
    println!("{}  [{}]", current.place, current.icon);
    println!("{}", current.description);
    println!(
        "{}  (feels like {})",
        current.temperature, current.feels_like
    );
    println!(
        "Wind: {} from {}",
        current.wind_speed, current.wind_direction
    );
    println!("Last updated: {}", current.last_updated);

    if let (Some(theme), Some(scene)) = (&view.theme, &view.scene) {
        println!(
            "Backdrop: {:?} theme, {} drops, {} decorations",
            theme,
            scene.drop_count(),
            scene.decorations.len()
        );
    }

    println!();
    println!("7-Day Forecast:");
    for row in &view.daily {
        println!(
            "  {}  [{}]  {} / {}  {}",
            row.day, row.icon, row.min, row.max, row.precipitation
        );
    }

    println!();
    println!("Hourly Forecast:");
    for row in &view.hourly {
        println!("  {:>5}  [{}]  {}", row.hour, row.icon, row.temperature);
    }
    println!();
}

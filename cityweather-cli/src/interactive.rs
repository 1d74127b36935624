//! Interactive widget loop, one-shot lookup and credential configuration.

use anyhow::{Context, Result};
use cityweather_core::{
    Config, FetchRequest, Provider, ReportView, Units, WeatherWidget, provider_from_config,
};
use inquire::{InquireError, Password, Select, Text};
use std::fmt;
use tracing::debug;

/// One entry of the action menu shown between fetches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuItem {
    Search,
    Unit { units: Units, active: bool },
    Quit,
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuItem::Search => f.write_str("Search for a city"),
            MenuItem::Unit { units, active } => {
                let marker = if *active { '●' } else { '○' };
                match units {
                    Units::Metric => write!(f, "{marker} Metric (°C, m/s)"),
                    Units::Imperial => write!(f, "{marker} Imperial (°F, mph)"),
                }
            }
            MenuItem::Quit => f.write_str("Quit"),
        }
    }
}

fn menu_for(widget: &WeatherWidget) -> Vec<MenuItem> {
    let mut items = vec![MenuItem::Search];
    for &units in Units::all() {
        items.push(MenuItem::Unit { units, active: widget.units() == units });
    }
    items.push(MenuItem::Quit);
    items
}

/// Run the interactive widget: implicit default fetch first, then the action
/// loop until the user quits (menu entry, Esc or Ctrl-C).
pub async fn run_widget() -> Result<()> {
    let config = Config::load()?;
    let provider = provider_from_config(&config)?;
    let mut widget = WeatherWidget::new();

    let request = widget.startup();
    execute(&mut widget, provider.as_ref(), request).await;
    render(&widget);

    loop {
        let choice = match Select::new("Action:", menu_for(&widget)).prompt() {
            Ok(choice) => choice,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(err) => return Err(err).context("Failed to read menu selection"),
        };

        match choice {
            MenuItem::Search => {
                let input = match Text::new("City:").prompt() {
                    Ok(input) => input,
                    Err(InquireError::OperationCanceled) => continue,
                    Err(InquireError::OperationInterrupted) => break,
                    Err(err) => return Err(err).context("Failed to read city input"),
                };

                if let Ok(request) = widget.search(&input) {
                    execute(&mut widget, provider.as_ref(), request).await;
                }
                render(&widget);
            }
            MenuItem::Unit { units, .. } => {
                if let Some(request) = widget.set_unit(units) {
                    execute(&mut widget, provider.as_ref(), request).await;
                }
                render(&widget);
            }
            MenuItem::Quit => break,
        }
    }

    Ok(())
}

/// Drive one fetch to completion the way the widget expects: the loading line
/// goes up, the provider call runs, the outcome is applied.
async fn execute(widget: &mut WeatherWidget, provider: &dyn Provider, request: FetchRequest) {
    println!();
    println!("Loading weather for {}...", request.city);

    let outcome = provider.current_weather(&request.city, request.units).await;
    let resolution = widget.resolve(&request, outcome);
    debug!(seq = request.seq, ?resolution, "fetch resolved");
}

/// Print the report and error regions. The loading region is the line
/// `execute` prints while its request is outstanding.
fn render(widget: &WeatherWidget) {
    println!();
    if let Some(view) = widget.view() {
        print!("{view}");
    }
    if let Some(line) = widget.error_line() {
        println!("{line}");
    }
}

/// One-shot lookup for `cityweather show`.
pub async fn show_once(city: &str, units: Units) -> Result<()> {
    let city = city.trim();
    if city.is_empty() {
        anyhow::bail!("Please enter a city name");
    }

    let config = Config::load()?;
    let provider = provider_from_config(&config)?;

    let report = provider.current_weather(city, units).await?;
    print!("{}", ReportView::build(&report, units));

    Ok(())
}

/// Prompt for and store the OpenWeatherMap API key.
pub fn configure() -> Result<()> {
    let mut config = Config::load_file()?;

    let api_key = Password::new("OpenWeatherMap API key:")
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    let api_key = api_key.trim().to_string();
    if api_key.is_empty() {
        anyhow::bail!("API key must not be empty");
    }

    config.set_api_key(api_key);
    config.save()?;

    println!("Saved API key to {}", Config::config_file_path()?.display());
    Ok(())
}

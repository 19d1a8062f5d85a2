use clap::{Parser, Subcommand};
use forecast_core::{
    Config, Coordinate, DailyForecast, ForecastService, ReqwestTransport, WeatherError,
};
use inquire::{CustomType, Text};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "forecast", version, about = "Daily forecasts from api.weather.gov")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Configure the API endpoint, User-Agent and request timeout.
    Configure,

    /// Show the daily forecast for a point.
    #[command(allow_negative_numbers = true)]
    Show {
        /// Latitude in decimal degrees.
        latitude: f64,

        /// Longitude in decimal degrees, negative for west.
        longitude: f64,

        /// Print the forecast as JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { latitude, longitude, json } => {
                show(Coordinate::new(latitude, longitude), json).await
            }
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let user_agent = Text::new("User-Agent sent to api.weather.gov:")
        .with_default(&config.user_agent())
        .with_help_message("The API asks for contact details, e.g. \"(myapp.com, me@myapp.com)\"")
        .prompt()?;

    let points_url = Text::new("Points endpoint:").with_default(config.points_url()).prompt()?;

    let timeout_secs = CustomType::<u64>::new("Request timeout in seconds:")
        .with_default(config.timeout().as_secs())
        .with_error_message("Please enter a whole number of seconds")
        .prompt()?;

    config.user_agent = Some(user_agent);
    config.points_url = Some(points_url);
    config.timeout_secs = Some(timeout_secs);
    config.save()?;

    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}

async fn show(coordinate: Coordinate, json: bool) -> anyhow::Result<()> {
    let config = Config::load()?;
    let transport = ReqwestTransport::from_config(&config)?;
    let service = ForecastService::with_points_url(transport, config.points_url());

    let days = service.get_forecast(coordinate).await.map_err(report)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&days)?);
    } else if days.is_empty() {
        println!("No forecast available for {},{}", coordinate.latitude, coordinate.longitude);
    } else {
        print!("{}", render_table(&days));
    }

    Ok(())
}

/// The user-facing message leads; the underlying error stays as its cause.
fn report(err: WeatherError) -> anyhow::Error {
    let message = err.user_message();
    anyhow::Error::new(err).context(message)
}

fn render_table(days: &[DailyForecast]) -> String {
    let width = days.iter().map(|d| d.when.len()).max().unwrap_or(0);

    days.iter()
        .map(|day| {
            let temps: Vec<_> =
                day.temperatures.iter().map(|t| format!("{:>5}", t.value)).collect();
            format!("{:<width$} {}\n", day.when, temps.join(" "))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use forecast_core::Temperature;

    fn day(when: &str, values: &[&str]) -> DailyForecast {
        DailyForecast {
            when: when.to_string(),
            temperatures: values
                .iter()
                .map(|v| Temperature { value: v.to_string(), icon: String::new() })
                .collect(),
        }
    }

    #[test]
    fn parses_negative_longitude() {
        let cli = Cli::try_parse_from(["forecast", "show", "38.8976", "-77.0365"]).unwrap();

        match cli.command {
            Command::Show { latitude, longitude, json } => {
                assert_eq!(latitude, 38.8976);
                assert_eq!(longitude, -77.0365);
                assert!(!json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parses_json_flag() {
        let cli = Cli::try_parse_from(["forecast", "show", "--json", "38", "-77"]).unwrap();
        assert!(matches!(cli.command, Command::Show { json: true, .. }));
    }

    #[test]
    fn failure_is_reported_once_with_cause() {
        let err = report(WeatherError::Upstream { status: 404, detail: "Data Unavailable".into() });

        assert_eq!(err.to_string(), "Forecast unavailable: Data Unavailable");
        let causes: Vec<_> = err.chain().skip(1).map(|c| c.to_string()).collect();
        assert_eq!(causes, ["weather API error (404): Data Unavailable"]);
    }

    #[test]
    fn table_aligns_day_names() {
        let out = render_table(&[day("Today", &["48F"]), day("Wednesday", &["65F", "47F"])]);

        assert_eq!(out, "Today       48F\nWednesday   65F   47F\n");
    }
}

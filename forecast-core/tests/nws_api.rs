//! End-to-end tests for ForecastService over ReqwestTransport, against a
//! wiremock server standing in for api.weather.gov.

use std::time::Duration;

use forecast_core::{Config, Coordinate, ForecastService, ReqwestTransport, WeatherError};
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const POINTS_PATH: &str = "/points/38.8976,-77.0365";
const FORECAST_PATH: &str = "/gridpoints/LWX/97,71/forecast";

fn white_house() -> Coordinate {
    Coordinate::new(38.8976633, -77.0365739)
}

fn service(server: &MockServer) -> ForecastService<ReqwestTransport> {
    let transport = ReqwestTransport::new("forecast-tests", Duration::from_secs(5)).unwrap();
    ForecastService::with_points_url(transport, format!("{}/points", server.uri()))
}

fn period(name: &str, temperature: i64) -> serde_json::Value {
    json!({
        "name": name,
        "temperature": temperature,
        "temperatureUnit": "F",
        "icon": format!(
            "https://api.weather.gov/icons/land/{}",
            name.to_lowercase().replace(' ', "-")
        ),
        "shortForecast": "Mostly Sunny",
    })
}

async fn mount_points(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path(POINTS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "properties": {
                "gridId": "LWX",
                "forecast": format!("{}{}", server.uri(), FORECAST_PATH),
            }
        })))
        .expect(1)
        .mount(server)
        .await;
}

async fn mount_forecast(server: &MockServer, periods: Vec<serde_json::Value>) {
    Mock::given(method("GET"))
        .and(path(FORECAST_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "properties": { "periods": periods }
        })))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn resolves_a_week_of_forecasts() {
    let server = MockServer::start().await;
    mount_points(&server).await;

    let mut periods = vec![period("Tonight", 48)];
    for day in ["Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"] {
        periods.push(period(day, 65));
        periods.push(period(&format!("{day} Night"), 47));
    }
    periods.push(period("Monday", 70));
    mount_forecast(&server, periods).await;

    let days = service(&server).get_forecast(white_house()).await.unwrap();

    assert_eq!(days.len(), 7);
    assert_eq!(days[0].when, "Today");
    assert_eq!(days[0].temperatures.len(), 1);
    assert_eq!(days[0].temperatures[0].value, "48F");
    assert_eq!(days[0].temperatures[0].icon, "https://api.weather.gov/icons/land/tonight");
    assert_eq!(days[1].when, "Tuesday");
    assert_eq!(days[6].when, "Sunday");
    assert!(days[1..].iter().all(|d| d.temperatures.len() == 2));
}

#[tokio::test]
async fn upstream_detail_is_surfaced() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(POINTS_PATH))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "title": "Data Unavailable For Requested Point",
            "status": 404,
            "detail": "Unable to provide data for requested point 38.8976,-77.0365",
        })))
        .mount(&server)
        .await;

    let err = service(&server).get_forecast(white_house()).await.unwrap_err();

    assert!(matches!(err, WeatherError::Upstream { status: 404, .. }));
    assert_eq!(err.detail(), Some("Unable to provide data for requested point 38.8976,-77.0365"));
}

#[tokio::test]
async fn empty_periods_yield_empty_forecast() {
    let server = MockServer::start().await;
    mount_points(&server).await;
    mount_forecast(&server, vec![]).await;

    let days = service(&server).get_forecast(white_house()).await.unwrap();

    assert!(days.is_empty());
}

#[tokio::test]
async fn garbage_body_is_malformed() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(POINTS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = service(&server).locate(white_house()).await.unwrap_err();

    assert!(matches!(err, WeatherError::MalformedResponse(_)));
}

#[tokio::test]
async fn transport_from_config_sends_user_agent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(POINTS_PATH))
        .and(header("user-agent", "(example.com, ops@example.com)"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "properties": {} })))
        .expect(1)
        .mount(&server)
        .await;

    let config = Config {
        points_url: Some(format!("{}/points", server.uri())),
        user_agent: Some("(example.com, ops@example.com)".into()),
        timeout_secs: None,
    };
    let transport = ReqwestTransport::from_config(&config).unwrap();
    let service = ForecastService::with_points_url(transport, config.points_url());

    assert_eq!(service.locate(white_house()).await.unwrap(), None);
}

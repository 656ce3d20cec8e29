//! Where the user is.
//!
//! A [`Geolocator`] produces one [`Coordinates`] fix per decision cycle.
//! Fixes are never cached; every call asks again.

use async_trait::async_trait;
use goout_core::{Coordinates, CoordinatesError};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Options for a single position request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocateOptions {
    /// Prefer the most precise source available.
    pub high_accuracy: bool,
    /// Give up after this many milliseconds.
    pub timeout_ms: u64,
    /// Oldest acceptable cached fix, in milliseconds. Zero disables caching.
    pub max_age_ms: u64,
}

impl Default for LocateOptions {
    fn default() -> Self {
        Self {
            high_accuracy: true,
            timeout_ms: 10_000,
            max_age_ms: 0,
        }
    }
}

impl LocateOptions {
    /// The timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// Why no position could be obtained.
#[derive(Debug, Error)]
pub enum PositioningError {
    /// The user or the lookup service refused.
    #[error("location access denied: {0}")]
    Denied(String),

    /// No position source answered.
    #[error("location unavailable: {0}")]
    Unavailable(String),

    /// No answer within the timeout.
    #[error("location request timed out after {0:?}")]
    Timeout(Duration),

    /// A source answered with an impossible position.
    #[error("invalid coordinates: {0}")]
    InvalidCoordinates(#[from] CoordinatesError),
}

/// A source of the user's current position.
#[async_trait]
pub trait Geolocator: Send + Sync {
    /// Obtain a fresh position.
    async fn locate(&self, options: &LocateOptions) -> Result<Coordinates, PositioningError>;
}

/// A position supplied by the caller.
#[derive(Debug, Clone, Copy)]
pub struct FixedLocation {
    coords: Coordinates,
}

impl FixedLocation {
    /// Validate and wrap a latitude/longitude pair.
    pub fn new(lat: f64, lon: f64) -> Result<Self, PositioningError> {
        Ok(Self {
            coords: Coordinates::new(lat, lon)?,
        })
    }
}

impl From<Coordinates> for FixedLocation {
    fn from(coords: Coordinates) -> Self {
        Self { coords }
    }
}

#[async_trait]
impl Geolocator for FixedLocation {
    async fn locate(&self, _options: &LocateOptions) -> Result<Coordinates, PositioningError> {
        Ok(self.coords)
    }
}

/// Default IP lookup endpoint.
pub const IP_API_URL: &str = "http://ip-api.com/json/";

#[derive(Debug, Deserialize)]
struct IpApiResponse {
    status: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    lat: Option<f64>,
    #[serde(default)]
    lon: Option<f64>,
}

/// Approximate position from the caller's public IP address.
///
/// IP lookups are coarse; `high_accuracy` is accepted but cannot improve them.
#[derive(Debug, Clone)]
pub struct IpGeolocator {
    client: Client,
    url: String,
}

impl Default for IpGeolocator {
    fn default() -> Self {
        Self::new()
    }
}

impl IpGeolocator {
    /// Use the public ip-api.com endpoint.
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            url: IP_API_URL.to_string(),
        }
    }

    /// Use a different endpoint with the same JSON shape.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Set a custom HTTP client.
    #[must_use]
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }
}

#[async_trait]
impl Geolocator for IpGeolocator {
    async fn locate(&self, options: &LocateOptions) -> Result<Coordinates, PositioningError> {
        debug!(url = %self.url, timeout_ms = options.timeout_ms, "looking up position by IP");

        let response = self
            .client
            .get(&self.url)
            .query(&[("fields", "status,message,lat,lon")])
            .header("Cache-Control", "no-cache")
            .timeout(options.timeout())
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    PositioningError::Timeout(options.timeout())
                } else {
                    PositioningError::Unavailable(e.to_string())
                }
            })?;

        let status = response.status();
        if status.as_u16() == 401 || status.as_u16() == 403 {
            return Err(PositioningError::Denied(format!(
                "lookup service returned {status}"
            )));
        }
        if !status.is_success() {
            return Err(PositioningError::Unavailable(format!(
                "lookup service returned {status}"
            )));
        }

        let body: IpApiResponse = response
            .json()
            .await
            .map_err(|e| PositioningError::Unavailable(e.to_string()))?;

        if body.status != "success" {
            return Err(PositioningError::Unavailable(
                body.message.unwrap_or(body.status),
            ));
        }

        match (body.lat, body.lon) {
            (Some(lat), Some(lon)) => Ok(Coordinates::new(lat, lon)?),
            _ => Err(PositioningError::Unavailable(
                "lookup response had no coordinates".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_default_options() {
        let options = LocateOptions::default();
        assert!(options.high_accuracy);
        assert_eq!(options.timeout(), Duration::from_secs(10));
        assert_eq!(options.max_age_ms, 0);
    }

    #[tokio::test]
    async fn test_fixed_location() {
        let fixed = FixedLocation::new(25.03, 121.56).unwrap();
        let coords = fixed.locate(&LocateOptions::default()).await.unwrap();
        assert_eq!(coords, Coordinates::new(25.03, 121.56).unwrap());
    }

    #[test]
    fn test_fixed_location_rejects_out_of_range() {
        assert!(matches!(
            FixedLocation::new(123.0, 0.0),
            Err(PositioningError::InvalidCoordinates(_))
        ));
    }

    #[tokio::test]
    async fn test_ip_lookup_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("fields", "status,message,lat,lon"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "success", "lat": 35.68, "lon": 139.69
            })))
            .mount(&server)
            .await;

        let locator = IpGeolocator::new().with_url(server.uri());
        let coords = locator.locate(&LocateOptions::default()).await.unwrap();
        assert_eq!(coords.lat, 35.68);
        assert_eq!(coords.lon, 139.69);
    }

    #[tokio::test]
    async fn test_ip_lookup_failure_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "fail", "message": "private range"
            })))
            .mount(&server)
            .await;

        let locator = IpGeolocator::new().with_url(server.uri());
        let err = locator.locate(&LocateOptions::default()).await.unwrap_err();
        assert!(matches!(err, PositioningError::Unavailable(m) if m == "private range"));
    }

    #[tokio::test]
    async fn test_ip_lookup_denied() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&server)
            .await;

        let locator = IpGeolocator::new().with_url(server.uri());
        let err = locator.locate(&LocateOptions::default()).await.unwrap_err();
        assert!(matches!(err, PositioningError::Denied(_)));
    }

    #[tokio::test]
    async fn test_ip_lookup_timeout() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"status": "success", "lat": 1.0, "lon": 1.0}))
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&server)
            .await;

        let options = LocateOptions {
            timeout_ms: 50,
            ..Default::default()
        };
        let locator = IpGeolocator::new().with_url(server.uri());
        let err = locator.locate(&options).await.unwrap_err();
        assert!(matches!(err, PositioningError::Timeout(_)));
    }
}

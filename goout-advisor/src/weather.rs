//! Weather describer.

use crate::config::AdvisorConfig;
use crate::error::AdvisorError;
use crate::instructions::weather_prompt;
use goout_core::Coordinates;
use goout_models::{GenerateContentRequest, GenerationConfig, Model, ModelError};
use tracing::{debug, warn};

/// Describe the current weather at `coords` in a sentence or two.
///
/// One text completion, no retry. Any failure, including an empty reply,
/// becomes [`AdvisorError::Weather`].
pub async fn describe_weather<M>(
    model: &M,
    coords: Coordinates,
    config: &AdvisorConfig,
) -> Result<String, AdvisorError>
where
    M: Model + ?Sized,
{
    let request = GenerateContentRequest::prompt(weather_prompt(coords))
        .with_generation_config(GenerationConfig::new().temperature(config.weather_temperature));
    debug!(%coords, model = model.name(), "requesting weather description");

    let response = model.generate(&request).await.map_err(|e| {
        warn!(error = %e, "weather lookup failed");
        AdvisorError::weather(e)
    })?;

    let text = response.text().trim().to_string();
    if text.is_empty() {
        warn!("weather reply was empty");
        return Err(AdvisorError::weather(ModelError::invalid_response(
            "empty weather description",
        )));
    }
    Ok(text)
}

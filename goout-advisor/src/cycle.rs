//! The decision cycle.
//!
//! A [`DecisionCycle`] holds everything one pass produces, from the mood to
//! the latest suggestions. The caller owns it; starting over means dropping
//! it and asking the [`Advisor`] for a new one.

use crate::config::AdvisorConfig;
use crate::decision::start_decision;
use crate::error::AdvisorError;
use crate::geolocation::{Geolocator, PositioningError};
use crate::instructions::combined_input;
use crate::suggestions::get_suggestions;
use crate::weather::describe_weather;
use goout_core::format::share_text;
use goout_core::identifier::generate_cycle_id;
use goout_core::{Coordinates, DecisionResult, SuggestionSet};
use goout_models::{BoxedModel, ChatSession};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// State of one decision cycle.
#[derive(Debug)]
pub struct DecisionCycle {
    id: String,
    mood: String,
    coords: Coordinates,
    weather: String,
    result: DecisionResult,
    session: ChatSession,
    suggestions: Option<SuggestionSet>,
}

impl DecisionCycle {
    /// Cycle identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The mood as entered.
    pub fn mood(&self) -> &str {
        &self.mood
    }

    /// Where the user was when the cycle started.
    pub fn coords(&self) -> Coordinates {
        self.coords
    }

    /// Weather description used for the decision.
    pub fn weather(&self) -> &str {
        &self.weather
    }

    /// The decision.
    pub fn result(&self) -> &DecisionResult {
        &self.result
    }

    /// The session opened by the decision.
    pub fn session(&self) -> &ChatSession {
        &self.session
    }

    /// Latest suggestions, if any were fetched.
    pub fn suggestions(&self) -> Option<&SuggestionSet> {
        self.suggestions.as_ref()
    }

    /// Plain-text summary for sharing.
    pub fn share_text(&self) -> String {
        share_text(&self.result)
    }
}

/// Runs decision cycles against configured models.
#[derive(Clone)]
pub struct Advisor {
    weather_model: BoxedModel,
    decision_model: BoxedModel,
    config: AdvisorConfig,
}

impl std::fmt::Debug for Advisor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Advisor")
            .field("weather_model", &self.weather_model.identifier())
            .field("decision_model", &self.decision_model.identifier())
            .field("config", &self.config)
            .finish()
    }
}

impl Advisor {
    /// Use separate models for weather and decisions.
    pub fn new(weather_model: BoxedModel, decision_model: BoxedModel, config: AdvisorConfig) -> Self {
        Self {
            weather_model,
            decision_model,
            config,
        }
    }

    /// Use one model for every call.
    pub fn with_model(model: BoxedModel, config: AdvisorConfig) -> Self {
        Self::new(model.clone(), model, config)
    }

    /// Active configuration.
    pub fn config(&self) -> &AdvisorConfig {
        &self.config
    }

    /// Run geolocation, weather and decision in order, stopping at the first failure.
    ///
    /// An empty mood is rejected before anything touches the network.
    pub async fn start_cycle(
        &self,
        mood: &str,
        geolocator: &dyn Geolocator,
    ) -> Result<DecisionCycle, AdvisorError> {
        if mood.trim().is_empty() {
            return Err(AdvisorError::EmptyMood);
        }
        debug!(mood, "starting decision cycle");

        let options = self.config.locate;
        let coords = tokio::time::timeout(options.timeout(), geolocator.locate(&options))
            .await
            .map_err(|_| PositioningError::Timeout(options.timeout()))
            .and_then(|r| r)
            .map_err(|e| {
                warn!(error = %e, "positioning failed");
                AdvisorError::Positioning(e)
            })?;
        info!(%coords, "position acquired");

        let weather = describe_weather(self.weather_model.as_ref(), coords, &self.config).await?;
        info!(weather = %weather, "weather described");

        let input = combined_input(mood, &weather);
        let (session, result) =
            start_decision(self.decision_model.clone(), &input, &self.config).await?;

        let cycle = DecisionCycle {
            id: generate_cycle_id(),
            mood: mood.to_string(),
            coords,
            weather,
            result,
            session,
            suggestions: None,
        };
        info!(cycle = cycle.id(), decision = %cycle.result.decision, "cycle started");
        Ok(cycle)
    }

    /// Fetch suggestions for the cycle's decision through its session.
    ///
    /// On success the cycle's suggestions are replaced wholesale; on failure
    /// the previous ones stay.
    pub async fn suggest(
        &self,
        cycle: &mut DecisionCycle,
        refresh: bool,
    ) -> Result<SuggestionSet, AdvisorError> {
        let set = get_suggestions(
            &mut cycle.session,
            cycle.result.decision,
            &cycle.result.activity,
            cycle.coords,
            refresh,
        )
        .await?;
        cycle.suggestions = Some(set.clone());
        Ok(set)
    }
}

/// A cycle shared between holders.
///
/// At most one suggestion request runs at a time; a trigger while one is in
/// flight fails with [`AdvisorError::SuggestionsPending`] instead of queueing.
#[derive(Debug, Clone)]
pub struct CycleHandle {
    inner: Arc<Mutex<DecisionCycle>>,
}

impl CycleHandle {
    /// Share a cycle.
    pub fn new(cycle: DecisionCycle) -> Self {
        Self {
            inner: Arc::new(Mutex::new(cycle)),
        }
    }

    /// Fetch suggestions unless a fetch is already running.
    pub async fn suggest(
        &self,
        advisor: &Advisor,
        refresh: bool,
    ) -> Result<SuggestionSet, AdvisorError> {
        let mut cycle = self
            .inner
            .try_lock()
            .map_err(|_| AdvisorError::SuggestionsPending)?;
        advisor.suggest(&mut cycle, refresh).await
    }

    /// Read the cycle, waiting for any running fetch.
    pub async fn read<R>(&self, f: impl FnOnce(&DecisionCycle) -> R) -> R {
        let cycle = self.inner.lock().await;
        f(&cycle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geolocation::{FixedLocation, LocateOptions};
    use async_trait::async_trait;
    use goout_core::Decision;
    use goout_models::{MockModel, ModelError};
    use std::time::Duration;

    const DECISION: &str = r#"{"decision":"待在家","reason":"外面在下雨","activity":"窩在沙發上看一部好電影"}"#;

    struct NeverAnswers;

    #[async_trait]
    impl Geolocator for NeverAnswers {
        async fn locate(&self, _: &LocateOptions) -> Result<Coordinates, PositioningError> {
            std::future::pending().await
        }
    }

    fn advisor(model: &MockModel) -> Advisor {
        Advisor::with_model(Arc::new(model.clone()), AdvisorConfig::default())
    }

    #[tokio::test]
    async fn test_empty_mood_makes_no_calls() {
        let model = MockModel::new("m");
        let err = advisor(&model)
            .start_cycle("  \n", &FixedLocation::new(0.0, 0.0).unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, AdvisorError::EmptyMood));
        assert_eq!(model.call_count(), 0);
    }

    #[tokio::test]
    async fn test_geolocation_timeout() {
        let model = MockModel::new("m");
        let mut config = AdvisorConfig::default();
        config.locate.timeout_ms = 20;
        let advisor = Advisor::with_model(Arc::new(model.clone()), config);

        let err = advisor.start_cycle("開心", &NeverAnswers).await.unwrap_err();
        assert!(matches!(
            err,
            AdvisorError::Positioning(PositioningError::Timeout(_))
        ));
        assert_eq!(model.call_count(), 0);
    }

    #[tokio::test]
    async fn test_weather_failure_stops_cycle() {
        let model = MockModel::new("m").with_error(ModelError::connection("down"));
        let err = advisor(&model)
            .start_cycle("開心", &FixedLocation::new(0.0, 0.0).unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, AdvisorError::Weather { .. }));
        assert_eq!(model.call_count(), 1);
    }

    #[tokio::test]
    async fn test_handle_rejects_concurrent_suggest() {
        let model = MockModel::new("m")
            .with_text_response("下雨天")
            .with_text_response(DECISION);
        let advisor = advisor(&model);
        let cycle = advisor
            .start_cycle("好累", &FixedLocation::new(25.0, 121.5).unwrap())
            .await
            .unwrap();
        assert_eq!(cycle.result().decision, Decision::StayHome);

        let handle = CycleHandle::new(cycle);
        let held = handle.inner.clone();
        let _guard = held.lock().await;

        let err = handle.suggest(&advisor, false).await.unwrap_err();
        assert!(matches!(err, AdvisorError::SuggestionsPending));
        drop(_guard);

        tokio::time::timeout(Duration::from_secs(1), handle.suggest(&advisor, false))
            .await
            .unwrap()
            .unwrap();
        let turns = handle.read(|c| c.session().turns()).await;
        assert_eq!(turns, 2);
    }
}

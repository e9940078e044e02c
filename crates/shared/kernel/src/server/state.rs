use crate::build_info::BuildInfo;
use axum::extract::FromRef;
use std::borrow::Cow;
use std::ops::Deref;
use std::sync::Arc;
use verso_domain::config::ApiConfig;

/// Errors raised while finalizing the shared state.
#[derive(Debug, thiserror::Error)]
pub enum ApiStateError {
    #[error("state validation error: {0}")]
    Validation(Cow<'static, str>),
}

#[derive(Debug)]
pub struct ApiStateInner {
    pub config: ApiConfig,
    pub build: BuildInfo,
}

/// Application state shared by every handler.
///
/// Cheap to clone; the inner record is immutable after construction.
#[derive(Debug, Clone)]
pub struct ApiState {
    inner: Arc<ApiStateInner>,
}

impl ApiState {
    #[must_use]
    pub fn builder() -> ApiStateBuilder {
        ApiStateBuilder::default()
    }
}

impl Deref for ApiState {
    type Target = ApiStateInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl FromRef<ApiState> for ApiConfig {
    fn from_ref(state: &ApiState) -> Self {
        state.inner.config.clone()
    }
}

impl FromRef<ApiState> for BuildInfo {
    fn from_ref(state: &ApiState) -> Self {
        state.inner.build.clone()
    }
}

#[derive(Debug, Default)]
pub struct ApiStateBuilder {
    config: Option<ApiConfig>,
    build: Option<BuildInfo>,
}

impl ApiStateBuilder {
    #[must_use]
    pub fn config(mut self, config: ApiConfig) -> Self {
        self.config = Some(config);
        self
    }

    #[must_use]
    pub fn build_info(mut self, build: BuildInfo) -> Self {
        self.build = Some(build);
        self
    }

    /// Finalizes the state.
    ///
    /// # Errors
    /// Returns an error when the configuration or the build record is missing.
    pub fn build(self) -> Result<ApiState, ApiStateError> {
        let config = self
            .config
            .ok_or_else(|| ApiStateError::Validation("ApiConfig not provided".into()))?;
        let build =
            self.build.ok_or_else(|| ApiStateError::Validation("BuildInfo not provided".into()))?;

        Ok(ApiState { inner: Arc::new(ApiStateInner { config, build }) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_record() -> BuildInfo {
        BuildInfo::new("verso-server", "0.1.0", Some("2024-06-01T12:30:00Z"))
    }

    #[test]
    fn builder_requires_config_and_build_info() {
        assert!(ApiState::builder().build().is_err());
        assert!(ApiState::builder().config(ApiConfig::default()).build().is_err());
        assert!(ApiState::builder().build_info(build_record()).build().is_err());
    }

    #[test]
    fn substates_extract_via_from_ref() {
        let state = ApiState::builder()
            .config(ApiConfig::default())
            .build_info(build_record())
            .build()
            .expect("complete state");

        assert_eq!(BuildInfo::from_ref(&state), build_record());
        assert_eq!(ApiConfig::from_ref(&state).server.port, state.config.server.port);
    }
}

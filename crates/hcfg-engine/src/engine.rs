//! The configuration engine: canonicalize → validate → locate → mutate

use crate::config::{ConfigError, EngineConfig};
use crate::error::EngineError;
use crate::request::{AppliedChange, ConfigRequest, ResolvedParam};
use crate::status::StatusReport;
use hcfg_mutate::{EnvSource, Mutator, ProcessEnv};
use hcfg_registry::{CanonicalMatch, Component, Registry};
use hcfg_validate::{ValidationError, Validator};
use tracing::{debug, info, warn};

/// Entry point for configuration requests
///
/// Registries and validation rules are process-wide statics; the engine only
/// owns its configuration and the file mutator built from it.
#[derive(Debug, Clone)]
pub struct ConfigEngine<E = ProcessEnv> {
    config: EngineConfig,
    mutator: Mutator<E>,
}

impl ConfigEngine<ProcessEnv> {
    /// Engine reading component homes from the process environment
    ///
    /// # Errors
    /// Invalid configuration
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        Self::with_env(config, ProcessEnv)
    }
}

impl<E: EnvSource> ConfigEngine<E> {
    /// Engine reading component homes from `env`
    ///
    /// # Errors
    /// Invalid configuration
    pub fn with_env(config: EngineConfig, env: E) -> Result<Self, ConfigError> {
        let mutator = config.mutator(env)?;
        Ok(Self { config, mutator })
    }

    /// Active configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// File mutator
    #[inline]
    #[must_use]
    pub fn mutator(&self) -> &Mutator<E> {
        &self.mutator
    }

    /// Resolve a raw parameter name
    #[must_use]
    pub fn canonicalize(&self, component: Component, raw_name: &str) -> Option<CanonicalMatch> {
        Registry::for_component(component).canonicalize(raw_name)
    }

    /// Whether `canonical_name` is registered verbatim
    #[must_use]
    pub fn exists_exact(&self, component: Component, canonical_name: &str) -> bool {
        Registry::for_component(component).exists_exact(canonical_name)
    }

    /// Validate a value for a canonical name
    ///
    /// # Errors
    /// See [`ValidationError`]
    pub fn validate(&self, component: Component, canonical_name: &str, raw_value: &str) -> Result<(), ValidationError> {
        Validator::for_component(component).validate(canonical_name, raw_value)
    }

    /// Canonicalize and validate without touching the filesystem
    ///
    /// With an explicit file the lookup only considers entries declared for
    /// that file.
    ///
    /// # Errors
    /// `ParamNotFound` when no entry matches, otherwise validation failures
    pub fn resolve(&self, request: &ConfigRequest) -> Result<ResolvedParam, EngineError> {
        let registry = Registry::for_component(request.component);
        let found = match request.explicit_file.as_deref() {
            Some(file) => registry.canonicalize_in_file(&request.raw_name, file),
            None => registry.canonicalize(&request.raw_name),
        };
        let Some(found) = found else {
            return Err(ValidationError::not_found(request.raw_name.trim()).into());
        };

        Validator::new(registry).validate(&found.canonical_name, &request.raw_value)?;
        debug!(
            component = %request.component,
            raw = request.raw_name.as_str(),
            canonical = found.canonical_name.as_str(),
            file = found.target_file.as_str(),
            "parameter resolved"
        );

        Ok(ResolvedParam {
            canonical_name: found.canonical_name,
            value: request.raw_value.trim().to_string(),
            config_file: found.target_file,
        })
    }

    /// Resolve, then write the value to the component's config file
    ///
    /// # Errors
    /// Validation failures (before any I/O) or mutation failures
    pub fn apply(&self, request: &ConfigRequest) -> Result<AppliedChange, EngineError> {
        let param = self.resolve(request)?;
        let outcome = self.mutator.apply(
            request.component,
            &param.config_file,
            &param.canonical_name,
            &param.value,
        )?;
        Ok(AppliedChange {
            param,
            path: outcome.path,
            action: outcome.action,
            created: outcome.created,
        })
    }

    /// [`ConfigEngine::apply`], reported as a [`StatusReport`]
    #[must_use]
    pub fn execute(&self, request: &ConfigRequest) -> StatusReport {
        match self.apply(request) {
            Ok(change) => {
                info!(
                    component = %request.component,
                    name = change.param.canonical_name.as_str(),
                    path = %change.path.display(),
                    "parameter applied"
                );
                StatusReport::applied(&change)
            }
            Err(e) => {
                warn!(
                    component = %request.component,
                    raw = request.raw_name.as_str(),
                    error = %e,
                    "request rejected"
                );
                StatusReport::failed(&e)
            }
        }
    }

    /// Dispatcher entry point taking the component as a string id
    ///
    /// An unknown component id is reported as `PARAM_NOT_FOUND`.
    #[must_use]
    pub fn apply_raw(
        &self,
        component_id: &str,
        raw_name: &str,
        raw_value: &str,
        explicit_file: Option<&str>,
    ) -> StatusReport {
        let component = match component_id.parse::<Component>() {
            Ok(c) => c,
            Err(e) => {
                warn!(component = component_id, "unknown component");
                return StatusReport::failed(&e.into());
            }
        };
        let mut request = ConfigRequest::new(component, raw_name, raw_value);
        if let Some(file) = explicit_file {
            request = request.with_file(file);
        }
        self.execute(&request)
    }

    /// Current on-disk value of a canonical parameter
    ///
    /// `Ok(None)` when the file or the key is absent. Never creates files.
    ///
    /// # Errors
    /// `ParamNotFound` for unregistered names, read/parse failures otherwise
    pub fn read_value(
        &self,
        component: Component,
        canonical_name: &str,
        file: Option<&str>,
    ) -> Result<Option<String>, EngineError> {
        let registry = Registry::for_component(component);
        let spec = match file {
            Some(f) => registry.get_exact_in_file(canonical_name, f),
            None => registry.get_exact(canonical_name),
        }
        .ok_or_else(|| ValidationError::not_found(canonical_name))?;

        Ok(self.mutator.read(component, spec.target_file(), canonical_name)?)
    }
}

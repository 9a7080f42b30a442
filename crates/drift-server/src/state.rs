//! Shared application state: configuration plus the process-wide resolver.

use crate::config::Config;
use drift_wind::WindResolver;

/// Injected into every handler. The resolver owns the wind cache, so all
/// requests share one expiring view of the wind field.
pub struct AppState {
    config: Config,
    resolver: WindResolver,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let resolver = WindResolver::new(config.resolver_config());
        Self { config, resolver }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn resolver(&self) -> &WindResolver {
        &self.resolver
    }
}

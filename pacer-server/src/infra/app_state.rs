use std::{fmt, sync::Arc};

use pacer_core::RunnerService;

use crate::infra::config::Config;

#[derive(Clone)]
pub struct AppState {
    service: Arc<RunnerService>,
    config: Arc<Config>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("service", &self.service)
            .finish_non_exhaustive()
    }
}

impl AppState {
    pub fn new(service: RunnerService, config: Config) -> Self {
        Self {
            service: Arc::new(service),
            config: Arc::new(config),
        }
    }

    pub fn service(&self) -> &RunnerService {
        &self.service
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

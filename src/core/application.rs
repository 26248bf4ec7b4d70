use crate::core::config::Config;
use crate::domain::auth::AuthService;
use crate::domain::workbench::WorkbenchService;
use std::sync::Arc;

pub trait ApplicationServices: Clone + Send + Sync {
    type AUTH: AuthService + Send;
    type WORKBENCH: WorkbenchService + Send;

    fn config(&self) -> Config;

    fn auth_service(&self) -> Arc<Self::AUTH>;

    fn workbench_service(&self) -> Arc<Self::WORKBENCH>;
}

pub struct Application<AUTH, WORKBENCH>
where
    AUTH: AuthService + Send + Sync + 'static,
    WORKBENCH: WorkbenchService + Send + Sync + 'static,
{
    config: Config,
    auth_service: Arc<AUTH>,
    workbench_service: Arc<WORKBENCH>,
}

impl<AUTH, WORKBENCH> Application<AUTH, WORKBENCH>
where
    AUTH: AuthService + Send + Sync + 'static,
    WORKBENCH: WorkbenchService + Send + Sync + 'static,
{
    pub fn new(config: Config, auth_service: AUTH, workbench_service: WORKBENCH) -> Self {
        Self {
            config,
            auth_service: Arc::new(auth_service),
            workbench_service: Arc::new(workbench_service),
        }
    }
}

impl<AUTH, WORKBENCH> Clone for Application<AUTH, WORKBENCH>
where
    AUTH: AuthService + Send + Sync + 'static,
    WORKBENCH: WorkbenchService + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            auth_service: self.auth_service.clone(),
            workbench_service: self.workbench_service.clone(),
        }
    }
}

impl<AUTH, WORKBENCH> ApplicationServices for Application<AUTH, WORKBENCH>
where
    AUTH: AuthService + Send + Sync + 'static,
    WORKBENCH: WorkbenchService + Send + Sync + 'static,
{
    type AUTH = AUTH;
    type WORKBENCH = WORKBENCH;

    fn config(&self) -> Config {
        self.config.clone()
    }

    fn auth_service(&self) -> Arc<Self::AUTH> {
        self.auth_service.clone()
    }

    fn workbench_service(&self) -> Arc<Self::WORKBENCH> {
        self.workbench_service.clone()
    }
}

use std::sync::Arc;

use crate::{
    config::Config,
    errors::AppResult,
    services::{
        export_service::ExportService,
        model_service::{CompletionModel, GroqModelService},
        planner_service::PlannerService,
    },
};

/// Shared dependencies handed to a presentation shell. Built once at
/// startup from resolved configuration; cheap to clone. The shell owns its
/// `WorkflowState` separately and passes it into each planner call.
#[derive(Clone)]
pub struct AppState {
    pub planner: Arc<PlannerService>,
    pub export: Arc<ExportService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> AppResult<Self> {
        let model: Arc<dyn CompletionModel> = Arc::new(GroqModelService::new(&config)?);
        Ok(Self::with_model(config, model))
    }

    /// Wires the workflow against a caller-supplied completion model; used
    /// by shells and tests that stub the remote call.
    pub fn with_model(config: Config, model: Arc<dyn CompletionModel>) -> Self {
        Self {
            planner: Arc::new(PlannerService::new(model)),
            export: Arc::new(ExportService::new()),
            config: Arc::new(config),
        }
    }
}

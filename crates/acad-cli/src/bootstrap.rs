use std::sync::Arc;

use acad_client::{AcadClient, ClientOptions, Credential};
use acad_config::AcadConfig;
use acad_core::ViewOrder;
use acad_sync::AssignmentReconciler;
use anyhow::Context;

pub type Reconciler = AssignmentReconciler<AcadClient>;

pub fn load_config() -> anyhow::Result<AcadConfig> {
    AcadConfig::load_with_dotenv().context("failed to load acad configuration")
}

/// Build the HTTP client and reconciler from validated config.
pub fn reconciler(config: &AcadConfig) -> anyhow::Result<Reconciler> {
    config
        .api
        .validate()
        .context("backend API is not usable (set ACAD_API__TOKEN or .acad/config.toml)")?;

    let options = ClientOptions {
        timeout: config.api.timeout(),
        user_agent: config.api.user_agent.clone(),
    };
    let client = AcadClient::new(
        &config.api.base_url,
        Credential::bearer(config.api.token.trim()),
        &options,
    )
    .context("failed to build backend client")?;
    tracing::debug!(base_url = client.base_url(), "backend client ready");

    let order = if config.general.sort_by_name {
        ViewOrder::ByCourseName
    } else {
        ViewOrder::ById
    };
    Ok(AssignmentReconciler::new(Arc::new(client)).with_order(order))
}

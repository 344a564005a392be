use tracing::error;
use uuid::Uuid;

use crate::config::Config;
use crate::errors::AppError;
use crate::external::dataset_provider::DatasetProvider;
use crate::models::{CategorySlice, Dataset};
use crate::services::chart_service;

// Label/value columns of the three pie-chart result sets.
const ROLE: &str = "AUTHORASSOCIATION";
const ROLE_COUNT: &str = "COUNT";
const ORG: &str = "ORG";
const REPO: &str = "REPO";
const DEVELOPER_COUNT: &str = "NO_OF_DEVELOPERS";

pub async fn roles(
    provider: &dyn DatasetProvider,
    config: &Config,
) -> Result<Vec<CategorySlice>, AppError> {
    let dataset = fetch(provider, config.queries.developer_roles, "developer roles").await?;
    chart_service::category_share(&dataset, ROLE, ROLE_COUNT)
}

pub async fn orgs(
    provider: &dyn DatasetProvider,
    config: &Config,
) -> Result<Vec<CategorySlice>, AppError> {
    let dataset = fetch(provider, config.queries.devs_by_org, "developers by org").await?;
    chart_service::category_share(&dataset, ORG, DEVELOPER_COUNT)
}

pub async fn repos(
    provider: &dyn DatasetProvider,
    config: &Config,
) -> Result<Vec<CategorySlice>, AppError> {
    let dataset = fetch(provider, config.queries.devs_by_repo, "developers by repo").await?;
    chart_service::category_share(&dataset, REPO, DEVELOPER_COUNT)
}

async fn fetch(
    provider: &dyn DatasetProvider,
    query_id: Uuid,
    what: &str,
) -> Result<Dataset, AppError> {
    provider.fetch_latest(query_id).await.map_err(|e| {
        error!("Failed to fetch {} dataset: {}", what, e);
        AppError::from(e)
    })
}

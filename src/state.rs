use std::sync::Arc;

use crate::config::Config;
use crate::external::dataset_provider::DatasetProvider;

#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn DatasetProvider>,
    pub config: Arc<Config>,
}

use ::common::{models_or_empty, ModelMeta};
use crate::api_client;
use crate::settings;

/// Model-training runs, normalized. Falls back to an empty list on failure.
pub async fn fetch_model_metadata() -> Vec<ModelMeta> {
    log::trace!("Fetching model metadata");
    let url = settings::get_settings().api_url("/api/ml-models");

    let models = models_or_empty(api_client::get_json(&url, std::iter::empty()).await);
    log::info!("Showing {} model runs", models.len());
    models
}

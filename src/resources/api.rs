use serde::de::DeserializeOwned;

use crate::{
    core::{ApiResponse, DateRange, StatClient, StatError},
    resources::Resource,
};

pub(super) async fn fetch(
    client: &StatClient,
    resource: Resource,
    range: &DateRange,
) -> Result<ApiResponse, StatError> {
    let resp = client.get(resource.path(), &range.as_params()).await?;
    client.observer().on_payload(resource.as_str(), &resp);
    Ok(resp)
}

pub(super) async fn fetch_json<T: DeserializeOwned>(
    client: &StatClient,
    resource: Resource,
    range: &DateRange,
) -> Result<T, StatError> {
    fetch(client, resource, range).await?.json()
}

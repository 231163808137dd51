use url::Url;

use crate::core::{
    StatError,
    client::constants::{API_KEY_PARAM, REDACTED},
};

/// Append `path` to the path of `base`, keeping any prefix the base carries.
///
/// `https://host/api/v1` + `/sales` gives `https://host/api/v1/sales`.
pub(crate) fn endpoint(base: &Url, path: &str) -> Result<Url, StatError> {
    let mut url = base.clone();
    url.set_query(None);
    url.set_fragment(None);
    {
        let mut segments = url
            .path_segments_mut()
            .map_err(|()| StatError::Config(format!("base URL cannot be a base: {base}")))?;
        segments.pop_if_empty();
        segments.extend(path.split('/').filter(|s| !s.is_empty()));
    }
    Ok(url)
}

/// Caller params in order, then the API key. A caller `key` is replaced.
pub(crate) fn with_key(params: &[(&str, &str)], key: &str) -> Vec<(String, String)> {
    params
        .iter()
        .filter(|(k, _)| *k != API_KEY_PARAM)
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .chain(std::iter::once((API_KEY_PARAM.to_string(), key.to_string())))
        .collect()
}

pub(crate) fn redacted(params: &[(String, String)]) -> Vec<(String, String)> {
    params
        .iter()
        .map(|(k, v)| {
            if k == API_KEY_PARAM {
                (k.clone(), REDACTED.to_string())
            } else {
                (k.clone(), v.clone())
            }
        })
        .collect()
}

/// Read the response body as text.
pub(crate) async fn get_text(resp: reqwest::Response) -> Result<String, reqwest::Error> {
    resp.text().await
}

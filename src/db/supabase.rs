use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

use crate::error::CatalogFetchError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Thin PostgREST client for the Supabase project behind the catalog.
pub struct SupabaseClient {
    http: reqwest::Client,
    rest_url: String,
}

/// Filter applied to a table read: `column=ilike.*pattern*`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IlikeFilter<'a> {
    pub column: &'a str,
    pub contains: &'a str,
}

impl IlikeFilter<'_> {
    pub fn to_query_value(&self) -> String {
        format!("ilike.*{}*", self.contains)
    }
}

pub fn create_supabase_client(
    base_url: &Url,
    service_role_key: &str,
) -> Result<Arc<SupabaseClient>, CatalogFetchError> {
    log::info!("Configuring Supabase client for {}", base_url);

    let mut headers = HeaderMap::new();
    let key = HeaderValue::from_str(service_role_key).map_err(|_| {
        CatalogFetchError::Config("service role key is not a valid header value".to_string())
    })?;
    let bearer = HeaderValue::from_str(&format!("Bearer {}", service_role_key)).map_err(|_| {
        CatalogFetchError::Config("service role key is not a valid header value".to_string())
    })?;
    headers.insert("apikey", key);
    headers.insert(AUTHORIZATION, bearer);
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    let http = reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .default_headers(headers)
        .build()?;

    Ok(Arc::new(SupabaseClient {
        http,
        rest_url: format!("{}/rest/v1", base_url.as_str().trim_end_matches('/')),
    }))
}

impl SupabaseClient {
    /// Reads every row of `table` matching `filter`, projected through `select`.
    pub async fn select_ilike<T: DeserializeOwned>(
        &self,
        table: &str,
        select: &str,
        filter: &IlikeFilter<'_>,
    ) -> Result<Vec<T>, CatalogFetchError> {
        let url = format!("{}/{}", self.rest_url, table);
        let response = self
            .http
            .get(&url)
            .query(&[("select", select.to_string()), (filter.column, filter.to_query_value())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(CatalogFetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        serde_json::from_str::<Vec<T>>(&body).map_err(|e| CatalogFetchError::Decode(e.to_string()))
    }

    /// Checks that the REST root answers with the configured credentials.
    pub async fn ping(&self) -> Result<(), CatalogFetchError> {
        let response = self.http.get(format!("{}/", self.rest_url)).send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(CatalogFetchError::Status {
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            })
        }
    }
}

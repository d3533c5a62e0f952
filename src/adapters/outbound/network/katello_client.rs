use crate::config::KatelloConfig;
use crate::errata::domain::PackageRecord;
use crate::ports::outbound::{RemoteRepository, RepositoryCatalog};
use crate::shared::error::ErrataError;
use crate::shared::Result;
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use std::time::Duration;

#[derive(Debug, Deserialize)]
struct KatelloPage<T> {
    results: Vec<T>,
    #[serde(default)]
    subtotal: Option<u64>,
    #[serde(default)]
    total: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct KatelloRepository {
    id: u64,
    label: String,
}

#[derive(Debug, Deserialize)]
struct KatelloRepositoryDetails {
    #[serde(default)]
    checksum_type: Option<String>,
}

#[derive(Debug, Deserialize)]
struct KatelloErratum {
    errata_id: String,
}

#[derive(Debug, Deserialize)]
struct KatelloPackage {
    filename: String,
    name: String,
    version: String,
    release: String,
    #[serde(deserialize_with = "string_or_number")]
    epoch: String,
    arch: String,
    #[serde(default)]
    checksum: Option<String>,
    #[serde(default)]
    nvra: Option<String>,
    #[serde(default)]
    nvrea: Option<String>,
}

impl From<KatelloPackage> for PackageRecord {
    fn from(package: KatelloPackage) -> Self {
        PackageRecord {
            filename: package.filename,
            name: package.name,
            version: package.version,
            release: package.release,
            epoch: package.epoch,
            arch: package.arch,
            checksum: package.checksum.unwrap_or_default(),
            nvra: package.nvra.unwrap_or_default(),
            nvrea: package.nvrea.unwrap_or_default(),
        }
    }
}

/// Katello reports epochs as strings on some versions and integers on others
fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(value) => Ok(value),
        serde_json::Value::Number(value) => Ok(value.to_string()),
        serde_json::Value::Null => Ok("0".to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number, found {}",
            other
        ))),
    }
}

/// Joins the server URL and API path into a base ending with `/`
fn api_base(server: &str, api_url: &str) -> String {
    let server = server.trim_end_matches('/');
    let api_url = api_url.trim_matches('/');
    if api_url.is_empty() {
        format!("{}/", server)
    } else {
        format!("{}/{}/", server, api_url)
    }
}

fn query_string(params: &[(&str, String)]) -> String {
    params
        .iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// KatelloClient adapter for the Katello/Satellite REST API
///
/// Blocking client with HTTP basic authentication. List endpoints are
/// walked page by page until the reported subtotal is reached, so callers
/// always see complete listings.
pub struct KatelloClient {
    client: Client,
    api_base: String,
    username: String,
    password: String,
    page_size: u32,
}

impl KatelloClient {
    pub fn new(config: &KatelloConfig) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("errata-sync/{}", version);
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(user_agent)
            .danger_accept_invalid_certs(!config.ssl_verify)
            .build()?;

        Ok(Self {
            client,
            api_base: api_base(&config.server, &config.api_url),
            username: config.username.clone(),
            password: config.password.clone(),
            page_size: config.page_size,
        })
    }

    fn get_json<T: DeserializeOwned>(&self, location: &str) -> Result<T> {
        let url = format!("{}{}", self.api_base, location);
        let catalog_error = |details: String| ErrataError::Catalog {
            endpoint: location.to_string(),
            details,
        };

        let response = self
            .client
            .get(&url)
            .basic_auth(&self.username, Some(&self.password))
            .send()
            .map_err(|e| catalog_error(e.to_string()))?;

        if !response.status().is_success() {
            return Err(catalog_error(format!(
                "API returned status code {}",
                response.status()
            ))
            .into());
        }

        Ok(response
            .json::<T>()
            .map_err(|e| catalog_error(format!("unexpected response body: {}", e)))?)
    }

    /// Collects every result of a paginated list endpoint
    fn get_all<T: DeserializeOwned>(&self, path: &str, params: &[(&str, String)]) -> Result<Vec<T>> {
        let mut results = Vec::new();
        let mut page: u32 = 1;

        loop {
            let mut query = params.to_vec();
            query.push(("page", page.to_string()));
            query.push(("per_page", self.page_size.to_string()));
            let location = format!("{}?{}", path, query_string(&query));

            let batch: KatelloPage<T> = self.get_json(&location)?;
            let received = batch.results.len();
            results.extend(batch.results);

            let expected = batch.subtotal.or(batch.total);
            if listing_complete(results.len(), received, expected, self.page_size) {
                break;
            }
            page += 1;
        }

        tracing::debug!(endpoint = path, count = results.len(), "listing complete");
        Ok(results)
    }
}

/// Decides whether a paginated walk can stop after a page of `received`
/// results brought the running total to `collected`.
///
/// An empty page always ends the walk. With a reported count the walk runs
/// until that count is reached; without one, a short page is the last page.
fn listing_complete(collected: usize, received: usize, expected: Option<u64>, page_size: u32) -> bool {
    if received == 0 {
        return true;
    }
    match expected {
        Some(expected) => collected as u64 >= expected,
        None => received < page_size as usize,
    }
}

/// Checksum type column value for a repository; empty when Katello reports
/// none, which the publishing tool receives as-is
fn checksum_type_or_empty(repository_id: u64, details: KatelloRepositoryDetails) -> String {
    match details.checksum_type.filter(|checksum_type| !checksum_type.is_empty()) {
        Some(checksum_type) => checksum_type,
        None => {
            tracing::warn!(repository_id, "repository reports no checksum type, using an empty value");
            String::new()
        }
    }
}

impl RepositoryCatalog for KatelloClient {
    fn list_repositories(&self) -> Result<Vec<RemoteRepository>> {
        let repositories: Vec<KatelloRepository> = self.get_all("repositories", &[])?;
        Ok(repositories
            .into_iter()
            .map(|repository| RemoteRepository {
                id: repository.id,
                label: repository.label,
            })
            .collect())
    }

    fn checksum_type(&self, repository_id: u64) -> Result<String> {
        let location = format!("repositories/{}", repository_id);
        let details: KatelloRepositoryDetails = self.get_json(&location)?;
        Ok(checksum_type_or_empty(repository_id, details))
    }

    fn list_advisory_ids(&self, repository_id: u64) -> Result<Vec<String>> {
        let errata: Vec<KatelloErratum> =
            self.get_all("errata", &[("repository_id", repository_id.to_string())])?;
        Ok(errata.into_iter().map(|erratum| erratum.errata_id).collect())
    }

    fn list_packages(&self, repository_id: u64) -> Result<Vec<PackageRecord>> {
        let location = format!("repositories/{}/packages", repository_id);
        let packages: Vec<KatelloPackage> = self.get_all(&location, &[])?;
        Ok(packages.into_iter().map(PackageRecord::from).collect())
    }
}

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::LOG_TARGET;
use crate::core::record::AddressFamily;
use crate::providers::cloudflare::error::CloudflareError;
use crate::providers::cloudflare::types::{
    DnsRecord, RecordListResponse, ReplaceRecordRequest, StatusResponse, ZoneListResponse,
    join_errors,
};

pub const DEFAULT_API_URL: &str = "https://api.cloudflare.com/client/v4";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub struct CloudflareConfig {
    pub api_url: String,
    pub api_token: String,
    /// When set, every API call is carried over this IP family only. The
    /// binary pins it to the family of the record being managed, so an
    /// AAAA run talks to the API over IPv6 and an A run over IPv4. Tests
    /// that target a loopback mock server leave it unset.
    pub bind_family: Option<AddressFamily>,
}

pub struct CloudflareClient {
    config: CloudflareConfig,
    client: Client,
}

// The API token never appears in Debug output.
impl std::fmt::Debug for CloudflareClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CloudflareClient")
            .field("api_url", &self.config.api_url)
            .field("api_token", &"<redacted>")
            .field("bind_family", &self.config.bind_family)
            .finish()
    }
}

impl CloudflareClient {
    pub fn new(config: CloudflareConfig) -> Result<Self, CloudflareError> {
        let mut builder = Client::builder().timeout(REQUEST_TIMEOUT);
        if let Some(family) = config.bind_family {
            let local: IpAddr = match family {
                AddressFamily::V4 => Ipv4Addr::UNSPECIFIED.into(),
                AddressFamily::V6 => Ipv6Addr::UNSPECIFIED.into(),
            };
            builder = builder.local_address(local);
        }
        let client = builder.build()?;

        let instance = Self { config, client };
        debug!(
            target: LOG_TARGET,
            api_url = %instance.config.api_url,
            token_prefix = %instance.token_prefix(),
            "cloudflare client ready"
        );
        Ok(instance)
    }

    /// Short token prefix for diagnostics. The full token is never logged.
    fn token_prefix(&self) -> String {
        self.config.api_token.chars().take(6).collect()
    }

    /// Issue one request and parse the JSON body. A transport failure maps
    /// to `Http`; a non-2xx status maps to `Api` with whatever error detail
    /// the body carried. Callers still check the body's own success flag.
    async fn request<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, CloudflareError> {
        let response = request
            .bearer_auth(&self.config.api_token)
            .header("Content-Type", "application/json")
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(response.json().await?)
        } else {
            let detail = match response.json::<StatusResponse>().await {
                Ok(body) => join_errors(&body.errors),
                Err(_) => "unreadable error response".to_string(),
            };
            Err(CloudflareError::Api(format!("HTTP {status}: {detail}")))
        }
    }

    /// Look up the zone id for `domain`. The first zone Cloudflare returns
    /// wins, in the order returned.
    pub async fn find_zone_id(&self, domain: &str) -> Result<String, CloudflareError> {
        let url = format!("{}/zones?name={}", self.config.api_url, domain);
        debug!(target: LOG_TARGET, %url, "looking up zone");

        let list: ZoneListResponse = self.request(self.client.get(&url)).await?;
        if !list.success {
            return Err(CloudflareError::Api(join_errors(&list.errors)));
        }

        let zone = list
            .result
            .into_iter()
            .next()
            .ok_or_else(|| CloudflareError::ZoneNotFound(domain.to_string()))?;
        debug!(target: LOG_TARGET, zone = %zone.name, zone_id = %zone.id, "zone resolved");
        Ok(zone.id)
    }

    /// Look up the record named `fqdn` of the family's type within the
    /// zone. The first matching record wins.
    pub async fn find_record(
        &self,
        zone_id: &str,
        fqdn: &str,
        family: AddressFamily,
    ) -> Result<DnsRecord, CloudflareError> {
        let record_type = family.record_type();
        let url = format!(
            "{}/zones/{}/dns_records?name={}&type={}",
            self.config.api_url, zone_id, fqdn, record_type
        );
        debug!(target: LOG_TARGET, %url, "looking up record");

        let list: RecordListResponse = self.request(self.client.get(&url)).await?;
        if !list.success {
            return Err(CloudflareError::Api(join_errors(&list.errors)));
        }

        let record = list.result.into_iter().next().ok_or_else(|| {
            CloudflareError::RecordNotFound {
                name: fqdn.to_string(),
                record_type,
            }
        })?;
        debug!(
            target: LOG_TARGET,
            record = %record.name,
            record_type = %record.record_type,
            record_id = %record.id,
            content = %record.content,
            "record resolved"
        );
        Ok(record)
    }

    /// Replace the record wholesale and verify the provider's own success
    /// indicator, not just the transport status.
    pub async fn replace_record(
        &self,
        zone_id: &str,
        record_id: &str,
        body: &ReplaceRecordRequest,
    ) -> Result<(), CloudflareError> {
        let url = format!(
            "{}/zones/{}/dns_records/{}",
            self.config.api_url, zone_id, record_id
        );
        debug!(
            target: LOG_TARGET,
            %url,
            payload = %serde_json::to_string(body).unwrap_or_default(),
            "replacing record"
        );

        let status: StatusResponse = self.request(self.client.put(&url).json(body)).await?;
        if !status.success {
            return Err(CloudflareError::UpdateRejected(join_errors(&status.errors)));
        }
        Ok(())
    }
}

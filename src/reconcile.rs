use tracing::{debug, info};

use crate::LOG_TARGET;
use crate::config::Config;
use crate::error::Error;
use crate::fqdn;
use crate::providers::cloudflare::client::CloudflareClient;
use crate::providers::cloudflare::error::map_error;
use crate::providers::cloudflare::types::ReplaceRecordRequest;

/// Terminal outcome of a reconciliation run. Failures are carried as
/// `Err(Error)` instead of a third variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The published record already matches the candidate address.
    NotNeeded,
    /// The record was replaced and the provider confirmed the write.
    Updated,
}

/// Run one reconciliation pass: resolve the name, locate zone and record,
/// compare the published address to the candidate, and replace the record
/// when they differ (or when a forced update was requested). Strictly
/// sequential; the first failure aborts the run.
pub async fn run(client: &CloudflareClient, config: &Config) -> Result<Outcome, Error> {
    let fqdn = fqdn::resolve(&config.domain, &config.host);
    debug!(
        target: LOG_TARGET,
        %fqdn,
        record_type = config.family.record_type(),
        "reconciling"
    );

    let zone_id = client.find_zone_id(&config.domain).await.map_err(map_error)?;
    let record = client
        .find_record(&zone_id, &fqdn, config.family)
        .await
        .map_err(map_error)?;

    let remote = config.family.extract(&record.content);
    match &remote {
        Some(address) => debug!(target: LOG_TARGET, remote = %address, "published address"),
        // An unreadable published value is not fatal; the record gets
        // rewritten below.
        None => debug!(
            target: LOG_TARGET,
            content = %record.content,
            "published content is not a usable address"
        ),
    }

    if !config.force && remote.as_deref() == Some(config.candidate_ip.as_str()) {
        info!(
            target: LOG_TARGET,
            %fqdn,
            ip = %config.candidate_ip,
            "record already up to date"
        );
        return Ok(Outcome::NotNeeded);
    }

    let body = ReplaceRecordRequest {
        id: record.id.clone(),
        record_type: config.family.record_type().to_string(),
        name: fqdn.clone(),
        content: config.candidate_ip.clone(),
    };
    client
        .replace_record(&zone_id, &record.id, &body)
        .await
        .map_err(map_error)?;

    info!(
        target: LOG_TARGET,
        %fqdn,
        ip = %config.candidate_ip,
        previous = remote.as_deref().unwrap_or("unknown"),
        "record updated"
    );
    Ok(Outcome::Updated)
}

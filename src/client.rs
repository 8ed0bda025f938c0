use reqwest::header::{self, HeaderMap};
use serde::de::IgnoredAny;

use crate::{
    api,
    auth::Credentials,
    error::{Error, Result},
    req::handle_response,
};

const IONOS_CLOUD_DNS_URL: &str = "https://dns.de-fra.ionos.com";

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Enumeration of known IONOS DNS API endpoints.
#[derive(Debug, Clone, Default)]
pub enum ApiUrl<'a> {
    /// The IONOS Cloud DNS API.
    #[default]
    IonosCloud,

    /// Provide an arbitrary base URL, without trailing slash.
    Other(&'a str),
}

impl<'a> ApiUrl<'a> {
    pub(crate) fn to_url(&self) -> &str {
        match self {
            ApiUrl::IonosCloud => IONOS_CLOUD_DNS_URL,
            ApiUrl::Other(url) => url.trim_end_matches('/'),
        }
    }
}

/// Client for the zone and record endpoints of the IONOS Cloud DNS API.
///
/// Only knows how to publish and retract the `TXT` record of a dns-01 challenge. Nothing is cached
/// between calls; every operation resolves the zone and looks up the record again.
#[derive(Debug, Clone)]
pub struct DnsClient {
    client: reqwest::Client,
    base_url: String,
}

impl DnsClient {
    /// Create a client authenticating with `credentials` against `url`.
    pub fn new(credentials: &Credentials, url: ApiUrl<'_>) -> Result<DnsClient> {
        log::debug!("Creating IONOS client for {}", url.to_url());

        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, credentials.authorization()?);

        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()?;

        Ok(DnsClient {
            client,
            base_url: url.to_url().to_owned(),
        })
    }

    /// Publish `validation` as `TXT` record named `validation_name`.
    ///
    /// The record is created when missing and overwritten when it holds some other content. When
    /// it already holds `validation` nothing is written.
    ///
    /// `validation_name` is the fully qualified record name (typically beginning with
    /// `_acme-challenge.`) and `domain` is the name of the zone it lives in.
    pub async fn add_txt_record(
        &self,
        domain: &str,
        validation_name: &str,
        validation: &str,
    ) -> Result<()> {
        let record_name = relative_record_name(domain, validation_name);
        let zone_id = self.require_zone_id(domain).await?;

        match self.existing_txt_record(&zone_id, record_name).await? {
            Some((record_id, record)) if record.content() == Some(validation) => {
                log::info!("TXT record {record_name} already there, id {record_id}");
                Ok(())
            }

            Some((record_id, record)) => {
                log::info!("Update TXT record {record_name}, id {record_id}");
                self.update_txt_record(&zone_id, &record_id, record, validation).await
            }

            None => {
                log::info!("Insert new TXT record {record_name}");
                self.insert_txt_record(&zone_id, record_name, validation).await
            }
        }
    }

    /// Remove the `TXT` record named `validation_name`, if it holds `validation`.
    ///
    /// A record that is missing, or that holds some other content, is left alone without error.
    /// The zone must still exist.
    pub async fn del_txt_record(
        &self,
        domain: &str,
        validation_name: &str,
        validation: &str,
    ) -> Result<()> {
        let record_name = relative_record_name(domain, validation_name);
        let zone_id = self.require_zone_id(domain).await?;

        match self.existing_txt_record(&zone_id, record_name).await? {
            Some((record_id, record)) if record.content() == Some(validation) => {
                log::debug!("Delete TXT record {record_name}, id {record_id}");

                let res = self
                    .client
                    .delete(self.record_url(&zone_id, &record_id))
                    .send()
                    .await?;
                handle_response::<IgnoredAny>(res).await?;

                Ok(())
            }

            Some((record_id, _)) => {
                log::debug!(
                    "TXT record {record_name} (id {record_id}) holds other content, not deleting"
                );
                Ok(())
            }

            None => {
                log::debug!("No TXT record {record_name} to delete");
                Ok(())
            }
        }
    }

    /// Find the ID of the zone named exactly `domain`.
    ///
    /// Zones without an ID are skipped.
    pub async fn find_zone_id(&self, domain: &str) -> Result<Option<String>> {
        let res = self
            .client
            .get(format!("{}/zones", self.base_url))
            .query(&[("filter.zoneName", domain)])
            .send()
            .await?;
        let zones = handle_response::<api::List<api::Zone>>(res).await?;

        // the filter is not guaranteed to be an exact match
        Ok(zones
            .items
            .into_iter()
            .filter(|zone| zone.zone_name() == Some(domain))
            .find_map(|zone| zone.id))
    }

    /// Find the record of zone `zone_id` named exactly `record_name`.
    ///
    /// `record_name` is relative to the zone, e.g. `_acme-challenge`. Records without an ID are
    /// skipped. When the zone holds several records of that name the first one is returned.
    pub async fn get_existing_txt_record(
        &self,
        zone_id: &str,
        record_name: &str,
    ) -> Result<Option<api::Record>> {
        let res = self
            .client
            .get(format!("{}/records", self.base_url))
            .query(&[("filter.zoneId", zone_id), ("filter.name", record_name)])
            .send()
            .await?;
        let records = handle_response::<api::List<api::Record>>(res).await?;

        // the filter is not guaranteed to be an exact match
        Ok(records
            .items
            .into_iter()
            .find(|record| record.name() == Some(record_name) && record.id.is_some()))
    }

    /// Like [`get_existing_txt_record`](Self::get_existing_txt_record), split into ID and record.
    async fn existing_txt_record(
        &self,
        zone_id: &str,
        record_name: &str,
    ) -> Result<Option<(String, api::Record)>> {
        let record = self.get_existing_txt_record(zone_id, record_name).await?;
        Ok(record.and_then(|record| Some((record.id.clone()?, record))))
    }

    async fn require_zone_id(&self, domain: &str) -> Result<String> {
        let zone_id = self
            .find_zone_id(domain)
            .await?
            .ok_or_else(|| Error::ZoneNotFound {
                domain: domain.to_owned(),
            })?;

        log::debug!("Domain found: {domain} with id: {zone_id}");
        Ok(zone_id)
    }

    async fn insert_txt_record(
        &self,
        zone_id: &str,
        record_name: &str,
        content: &str,
    ) -> Result<()> {
        let new_record = api::RecordEnsure {
            properties: api::RecordProperties::txt(record_name, content),
        };
        log::debug!("Create with payload: {new_record:?}");

        let res = self
            .client
            .post(format!("{}/zones/{zone_id}/records", self.base_url))
            .json(&new_record)
            .send()
            .await?;
        handle_response::<IgnoredAny>(res).await?;

        Ok(())
    }

    async fn update_txt_record(
        &self,
        zone_id: &str,
        record_id: &str,
        record: api::Record,
        content: &str,
    ) -> Result<()> {
        let mut properties = record.properties.unwrap_or_default();
        properties._type.get_or_insert_with(|| "TXT".to_owned());
        properties.content = Some(content.to_owned());

        let record_ensure = api::RecordEnsure { properties };
        log::debug!("Update with payload: {record_ensure:?}");

        let res = self
            .client
            .put(self.record_url(zone_id, record_id))
            .json(&record_ensure)
            .send()
            .await?;
        handle_response::<IgnoredAny>(res).await?;

        Ok(())
    }

    fn record_url(&self, zone_id: &str, record_id: &str) -> String {
        format!("{}/zones/{zone_id}/records/{record_id}", self.base_url)
    }
}

/// Name of the challenge record relative to the zone of `domain`.
///
/// The API appends the zone name itself, so `_acme-challenge.example.com` in zone `example.com`
/// becomes `_acme-challenge`. Names outside of the zone are returned unchanged.
pub(crate) fn relative_record_name<'a>(domain: &str, validation_name: &'a str) -> &'a str {
    let domain = domain.trim_end_matches('.');
    let name = validation_name.trim_end_matches('.');

    name.strip_suffix(domain)
        .and_then(|prefix| prefix.strip_suffix('.'))
        .filter(|prefix| !prefix.is_empty())
        .unwrap_or(name)
}

use std::time::Duration;

use eyre::WrapErr as _;

use crate::{auth::Credentials, client::ApiUrl, DnsClient};

/// Prefix of the record name that dns-01 challenges are validated against.
pub const ACME_CHALLENGE_LABEL: &str = "_acme-challenge";

/// Default time the ACME server is given to see a new record before validation is requested.
pub const DEFAULT_PROPAGATION_DELAY: Duration = Duration::from_secs(120);

/// Solves dns-01 challenges for domains hosted on IONOS Cloud DNS.
///
/// This is the piece an ACME client drives: [`perform`] before asking the server to validate a
/// challenge, [`cleanup`] once validation is over, successful or not. A fresh [`DnsClient`] is
/// built for every call.
///
/// ```no_run
/// use dns_ionos::{challenge_record_name, Authenticator, Credentials};
///
/// async fn prove(domain: &str, proof: &str) -> eyre::Result<()> {
///     let authenticator = Authenticator::new(Credentials::token("my-api-token"));
///     let record = challenge_record_name(domain);
///
///     authenticator.perform(domain, &record, proof).await?;
///     authenticator.wait_for_propagation().await;
///
///     // ... ask the ACME server to validate the dns-01 challenge ...
///
///     authenticator.cleanup(domain, &record, proof).await
/// }
/// ```
///
/// [`perform`]: Authenticator::perform
/// [`cleanup`]: Authenticator::cleanup
#[derive(Debug, Clone)]
pub struct Authenticator {
    credentials: Credentials,
    api_url: Option<String>,
    propagation_delay: Duration,
}

impl Authenticator {
    /// Authenticate against IONOS Cloud DNS with `credentials`.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            api_url: None,
            propagation_delay: DEFAULT_PROPAGATION_DELAY,
        }
    }

    /// Talk to another API endpoint than [`ApiUrl::IonosCloud`].
    pub fn with_api_url(mut self, url: ApiUrl<'_>) -> Self {
        self.api_url = match url {
            ApiUrl::IonosCloud => None,
            ApiUrl::Other(url) => Some(url.to_owned()),
        };
        self
    }

    /// Wait `delay` instead of [`DEFAULT_PROPAGATION_DELAY`] for records to propagate.
    pub fn with_propagation_delay(mut self, delay: Duration) -> Self {
        self.propagation_delay = delay;
        self
    }

    /// Time to wait between [`perform`](Self::perform) and requesting validation.
    pub fn propagation_delay(&self) -> Duration {
        self.propagation_delay
    }

    /// Sleeps for the [propagation delay](Self::propagation_delay).
    pub async fn wait_for_propagation(&self) {
        log::info!(
            "Waiting {}s for DNS changes to propagate",
            self.propagation_delay.as_secs()
        );
        tokio::time::sleep(self.propagation_delay).await;
    }

    /// Short description of what this authenticator does.
    pub fn more_info(&self) -> &'static str {
        "This plugin configures a DNS TXT record to respond to a dns-01 challenge using the IONOS \
         REST API."
    }

    /// Publish the challenge `validation` in the `TXT` record `validation_name`.
    pub async fn perform(
        &self,
        domain: &str,
        validation_name: &str,
        validation: &str,
    ) -> eyre::Result<()> {
        self.client()?
            .add_txt_record(domain, validation_name, validation)
            .await
            .wrap_err_with(|| format!("Failed to publish TXT record {validation_name}"))
    }

    /// Retract the challenge `validation` from the `TXT` record `validation_name`.
    pub async fn cleanup(
        &self,
        domain: &str,
        validation_name: &str,
        validation: &str,
    ) -> eyre::Result<()> {
        self.client()?
            .del_txt_record(domain, validation_name, validation)
            .await
            .wrap_err_with(|| format!("Failed to remove TXT record {validation_name}"))
    }

    fn client(&self) -> eyre::Result<DnsClient> {
        let url = match &self.api_url {
            Some(url) => ApiUrl::Other(url),
            None => ApiUrl::IonosCloud,
        };

        DnsClient::new(&self.credentials, url).wrap_err("Failed to create IONOS client")
    }
}

/// Name of the `TXT` record validating `domain`.
///
/// Wildcard names are validated on their base domain, so `*.example.com` gives
/// `_acme-challenge.example.com`.
pub fn challenge_record_name(domain: &str) -> String {
    let domain = domain.strip_prefix("*.").unwrap_or(domain);
    format!("{ACME_CHALLENGE_LABEL}.{domain}")
}

//! Solving ACME dns-01 challenges with the [IONOS Cloud DNS API].
//!
//! During certificate issuance an ACME client has to prove control over every domain of an order.
//! With the dns-01 challenge this means publishing a `TXT` record under
//! `_acme-challenge.<domain>` holding a value derived from the challenge token, and removing it
//! again once the ACME server has validated it.
//!
//! # Usage
//!
//! An ACME client drives an [`Authenticator`]:
//!
//! 1. [`Authenticator::perform`] publishes the record.
//! 2. [`Authenticator::wait_for_propagation`] gives the change time to reach the name servers.
//! 3. The ACME client asks the server to validate the challenge.
//! 4. [`Authenticator::cleanup`] removes the record, if it still holds this challenge's value.
//!
//! [`DnsClient`] offers the same two operations with typed [`Error`]s, plus the zone and record
//! lookups they are built on.
//!
//! # Idempotency
//!
//! Both operations can be repeated safely. Publishing a value that is already there writes nothing,
//! and cleaning up a record that is gone (or was changed by someone else) is not an error, since
//! cleanup also runs while recovering from failed validations.
//!
//! [IONOS Cloud DNS API]: https://api.ionos.com/docs/dns/v1/

#![deny(rust_2018_idioms, nonstandard_style, future_incompatible)]

mod auth;
mod challenge;
mod client;
mod error;
mod req;

pub mod api;


pub use crate::{
    auth::Credentials,
    challenge::{
        challenge_record_name, Authenticator, ACME_CHALLENGE_LABEL, DEFAULT_PROPAGATION_DELAY,
    },
    client::{ApiUrl, DnsClient},
    error::{Error, Result},
};

// MinIO Rust Library for Amazon S3 Compatible Cloud Storage
// Copyright 2025 MinIO, Inc.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! S3 client to perform object operations through pre-signed URLs

use crate::s3::creds::Provider;
use crate::s3::error::{Error, ValidationErr};
use crate::s3::http::{BaseUrl, SignedUrl};
use crate::s3::multimap_ext::Multimap;
use crate::s3::signer::{DEFAULT_EXPIRY_SECONDS, presign_v2};
use crate::s3::transport::{CurlTransport, Transport, TransportRequest};
use crate::s3::types::S3Object;
use crate::s3::utils::{check_bucket_name, utc_now};
use reqwest::Method;
use std::sync::Arc;

mod get_object;
mod head_info;
mod list_objects;
mod presigned_url;
mod put_object;

/// Number of times the transport retries a transient failure.
pub const DEFAULT_RETRIES: u32 = 3;

/// Builder for [`S3Client`].
#[derive(Debug)]
pub struct S3ClientBuilder {
    base_url: BaseUrl,
    provider: Option<Arc<dyn Provider + Send + Sync + 'static>>,
    transport: Option<Arc<dyn Transport + 'static>>,
    retries: u32,
    expiry_seconds: u32,
}

impl Default for S3ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl S3ClientBuilder {
    /// Creates a builder for `s3.amazonaws.com` using the `curl` transport.
    pub fn new() -> Self {
        Self {
            base_url: BaseUrl::default(),
            provider: None,
            transport: None,
            retries: DEFAULT_RETRIES,
            expiry_seconds: DEFAULT_EXPIRY_SECONDS,
        }
    }

    /// Set the storage endpoint.
    pub fn base_url(mut self, base_url: BaseUrl) -> Self {
        self.base_url = base_url;
        self
    }

    /// Set the credential provider. Required.
    pub fn provider<P: Provider + Send + Sync + 'static>(mut self, provider: P) -> Self {
        self.provider = Some(Arc::new(provider) as Arc<dyn Provider + Send + Sync + 'static>);
        self
    }

    /// Set the transport executing signed requests. Defaults to
    /// [`CurlTransport`].
    pub fn transport<T: Transport + 'static>(mut self, transport: T) -> Self {
        self.transport = Some(Arc::new(transport) as Arc<dyn Transport + 'static>);
        self
    }

    pub fn retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }

    /// Set the lifetime of every signed URL.
    pub fn expiry_seconds(mut self, expiry_seconds: u32) -> Self {
        self.expiry_seconds = expiry_seconds;
        self
    }

    /// Build the Client.
    pub fn build(self) -> Result<S3Client, Error> {
        let provider = self.provider.ok_or(ValidationErr::MissingCredentials)?;
        let transport = self
            .transport
            .unwrap_or_else(|| Arc::new(CurlTransport::default()) as Arc<dyn Transport + 'static>);

        Ok(S3Client {
            shared: Arc::new(SharedClientItems {
                base_url: self.base_url,
                provider,
                transport,
                retries: self.retries,
                expiry_seconds: self.expiry_seconds,
            }),
        })
    }
}

/// Simple Storage Service (aka S3) client to perform object operations.
///
/// Every request is authenticated with a pre-signed, query-string URL
/// (signature version 2). Operations record their outcome in the
/// [`S3Object`] they are given; the client itself holds no mutable state
/// and is cheap to clone.
#[derive(Clone, Debug)]
pub struct S3Client {
    pub(crate) shared: Arc<SharedClientItems>,
}

#[derive(Debug)]
pub(crate) struct SharedClientItems {
    pub(crate) base_url: BaseUrl,
    provider: Arc<dyn Provider + Send + Sync + 'static>,
    transport: Arc<dyn Transport + 'static>,
    pub(crate) retries: u32,
    pub(crate) expiry_seconds: u32,
}

impl S3Client {
    pub fn base_url(&self) -> &BaseUrl {
        &self.shared.base_url
    }

    pub fn retries(&self) -> u32 {
        self.shared.retries
    }

    pub fn expiry_seconds(&self) -> u32 {
        self.shared.expiry_seconds
    }

    pub(crate) fn transport(&self) -> &dyn Transport {
        self.shared.transport.as_ref()
    }

    /// Signs `method` on `object`, folding the `x-amz-*` entries of
    /// `headers` into the signature.
    pub(crate) fn sign(
        &self,
        method: &Method,
        object: &S3Object,
        headers: &Multimap,
    ) -> Result<SignedUrl, Error> {
        check_bucket_name(object.bucket())?;
        let creds = self
            .shared
            .provider
            .fetch()
            .ok_or(ValidationErr::MissingCredentials)?;

        let signed = presign_v2(
            method,
            &self.shared.base_url,
            object.bucket(),
            object.object(),
            headers,
            &creds.access_key,
            &creds.secret_key,
            utc_now(),
            self.shared.expiry_seconds,
        );
        log::debug!("{method} {object}: request signed, expires at {}", signed.expires);
        Ok(signed)
    }

    /// Wraps a signed URL into a request carrying exactly `headers`.
    pub(crate) fn request(
        &self,
        method: Method,
        signed: &SignedUrl,
        headers: Multimap,
    ) -> TransportRequest {
        TransportRequest::new(method, signed.url.as_str(), self.shared.retries).headers(headers)
    }
}

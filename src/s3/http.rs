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

use crate::s3::error::ValidationErr;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use std::fmt;
use std::str::FromStr;

/// Default storage host; buckets are addressed as `{bucket}.s3.amazonaws.com`.
pub const DEFAULT_STORAGE_HOST: &str = "s3.amazonaws.com";

const OBJECT_KEY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'/');

/// Percent-encodes the key part of an object id. A sub-resource suffix
/// (everything from the first `?`) is passed through unchanged.
pub fn urlencode_object_id(object: &str) -> String {
    match object.split_once('?') {
        Some((key, suffix)) => {
            let mut encoded: String = utf8_percent_encode(key, OBJECT_KEY_ENCODE_SET).collect();
            encoded.push('?');
            encoded.push_str(suffix);
            encoded
        }
        None => utf8_percent_encode(object, OBJECT_KEY_ENCODE_SET).collect(),
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Represents Base URL of S3 endpoint
pub struct BaseUrl {
    pub https: bool,
    host: String,
    port: u16,
    /// Address buckets as `{bucket}.{host}` rather than `{host}/{bucket}`.
    pub virtual_style: bool,
}

impl Default for BaseUrl {
    fn default() -> Self {
        Self {
            https: true,
            host: DEFAULT_STORAGE_HOST.to_string(),
            port: 0,
            virtual_style: true,
        }
    }
}

impl FromStr for BaseUrl {
    type Err = ValidationErr;

    /// Convert a string to a BaseUrl.
    ///
    /// # Examples
    ///
    /// ```
    /// use s3presign::s3::http::BaseUrl;
    ///
    /// let base_url: BaseUrl = "s3.amazonaws.com".parse().unwrap();
    /// assert!(base_url.virtual_style);
    /// let base_url: BaseUrl = "http://localhost:9000".parse().unwrap();
    /// assert!(!base_url.https);
    /// assert!(!base_url.virtual_style);
    /// ```
    fn from_str(s: &str) -> Result<Self, ValidationErr> {
        let with_scheme = if s.contains("://") {
            s.to_string()
        } else {
            format!("https://{s}")
        };
        let url = url::Url::parse(&with_scheme)
            .map_err(|e| ValidationErr::InvalidBaseUrl(format!("{s}: {e}")))?;

        let https = match url.scheme() {
            "http" => false,
            "https" => true,
            _ => {
                return Err(ValidationErr::InvalidBaseUrl(
                    "scheme must be http or https".into(),
                ));
            }
        };

        let host = match url.host_str() {
            Some(h) if !h.is_empty() => h.to_string(),
            _ => {
                return Err(ValidationErr::InvalidBaseUrl(
                    "valid host must be provided".into(),
                ));
            }
        };

        if url.path() != "/" && !url.path().is_empty() {
            return Err(ValidationErr::InvalidBaseUrl(
                "path must be empty for base URL".into(),
            ));
        }

        if url.query().is_some() {
            return Err(ValidationErr::InvalidBaseUrl(
                "query must be none for base URL".into(),
            ));
        }

        // `Url::port` already drops the scheme's default port
        let port = url.port().unwrap_or(0);
        let virtual_style = host.ends_with("amazonaws.com") || host.ends_with("aliyuncs.com");

        Ok(BaseUrl {
            https,
            host,
            port,
            virtual_style,
        })
    }
}

impl BaseUrl {
    /// Returns the host, with the port appended if one is set.
    pub fn host_header_value(&self) -> String {
        if self.port > 0 {
            return format!("{}:{}", self.host, self.port);
        }
        self.host.clone()
    }

    /// Builds the unsigned URL of `object` in `bucket`. The object id is
    /// appended as-is apart from percent-encoding of its key part.
    pub fn object_url(&self, bucket: &str, object: &str) -> String {
        let scheme = if self.https { "https" } else { "http" };
        let object = urlencode_object_id(object);
        if self.virtual_style {
            format!("{scheme}://{bucket}.{}/{object}", self.host_header_value())
        } else {
            format!("{scheme}://{}/{bucket}/{object}", self.host_header_value())
        }
    }
}

/// A fully qualified, pre-signed request URL.
///
/// Valid until [`SignedUrl::expires`]; the expiry is never extended once the
/// URL is built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignedUrl {
    /// The complete URL, including the authentication query parameters.
    pub url: String,
    /// Expiry as seconds since the Unix epoch.
    pub expires: i64,
    /// URL-escaped base64 HMAC-SHA1 signature.
    pub signature: String,
}

impl fmt::Display for SignedUrl {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.url)
    }
}

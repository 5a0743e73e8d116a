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

//! Signature version 2 query-string authentication for S3 API

use crate::s3::base64;
use crate::s3::header_constants::{AWS_ACCESS_KEY_ID, EXPIRES, SIGNATURE};
use crate::s3::hmac_sha1::hmac_sha1;
use crate::s3::http::{BaseUrl, SignedUrl, urlencode_object_id};
use crate::s3::multimap_ext::{Multimap, MultimapExt};
use crate::s3::utils::{UtcTime, url_escape};
use reqwest::Method;

/// Default lifetime of a signed URL.
pub const DEFAULT_EXPIRY_SECONDS: u32 = 300;

/// Returns the canonicalized resource `/{bucket}/{object}`
pub fn get_canonicalized_resource(bucket: &str, object: &str) -> String {
    format!("/{}/{}", bucket, urlencode_object_id(object))
}

/// Returns expiry timestamp, in whole seconds since the epoch, of a URL signed at `date`
pub fn get_expires(date: UtcTime, expiry_seconds: u32) -> i64 {
    date.timestamp() + i64::from(expiry_seconds)
}

/// Returns string-to-sign value of given method, expiry, canonicalized amz
/// headers and canonicalized resource
pub fn get_string_to_sign(
    method: &Method,
    expires: i64,
    canonical_amz_headers: &str,
    canonicalized_resource: &str,
) -> String {
    // StringToSign =
    //   HTTP-Verb + '\n' +
    //   Content-MD5 + '\n' +
    //   Content-Type + '\n' +
    //   Expires + '\n' +
    //   CanonicalizedAmzHeaders +
    //   CanonicalizedResource
    // Content-MD5 and Content-Type are never sent by this client.
    format!(
        "{}\n\n\n{}\n{}{}",
        method.as_str().to_uppercase(),
        expires,
        canonical_amz_headers,
        canonicalized_resource
    )
}

/// Returns the URL-escaped base64 HMAC-SHA1 signature of `string_to_sign`
pub fn get_signature(secret_key: &str, string_to_sign: &str) -> String {
    url_escape(&base64::encode(hmac_sha1(
        secret_key.as_bytes(),
        string_to_sign.as_bytes(),
    )))
}

/// Builds a pre-signed URL for `method` on `object` in `bucket`.
///
/// The `x-amz-*` entries of `headers` are folded into the string-to-sign;
/// the caller must send exactly those headers with the request. When
/// `object` carries its own query suffix (contains `?`), the authentication
/// parameters are appended with `&`.
pub fn presign_v2(
    method: &Method,
    base_url: &BaseUrl,
    bucket: &str,
    object: &str,
    headers: &Multimap,
    access_key: &str,
    secret_key: &str,
    date: UtcTime,
    expiry_seconds: u32,
) -> SignedUrl {
    let expires = get_expires(date, expiry_seconds);
    let string_to_sign = get_string_to_sign(
        method,
        expires,
        &headers.get_canonical_amz_headers(),
        &get_canonicalized_resource(bucket, object),
    );
    let signature = get_signature(secret_key, &string_to_sign);

    let separator = if object.contains('?') { '&' } else { '?' };
    let url = format!(
        "{}{}{}={}&{}={}&{}={}",
        base_url.object_url(bucket, object),
        separator,
        AWS_ACCESS_KEY_ID,
        url_escape(access_key),
        EXPIRES,
        expires,
        SIGNATURE,
        signature
    );

    SignedUrl {
        url,
        expires,
        signature,
    }
}

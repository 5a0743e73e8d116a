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

//! Tests for signature version 2 query-string signing
//!
//! Expected signatures were computed independently with a reference
//! HMAC-SHA1 implementation and are pinned here.

use super::header_constants::{PUBLIC_READ, X_AMZ_ACL};
use super::http::BaseUrl;
use super::multimap_ext::{Multimap, MultimapExt};
use super::signer::{
    DEFAULT_EXPIRY_SECONDS, get_canonicalized_resource, get_signature, get_string_to_sign,
    presign_v2,
};
use chrono::{TimeZone, Utc};
use reqwest::Method;

const ACCESS_KEY: &str = "0PN5J17HBGZHT7JJ3X82";
const SECRET_KEY: &str = "uV3F3YluFJax1cknvbcGwgjvx4QpvB+leU8dUj2o";
const NOW: i64 = 1_700_000_000;

fn get_test_date() -> chrono::DateTime<Utc> {
    Utc.timestamp_opt(NOW, 0).unwrap()
}

fn presign(method: Method, object: &str, headers: &Multimap) -> super::http::SignedUrl {
    presign_v2(
        &method,
        &BaseUrl::default(),
        "johnsmith",
        object,
        headers,
        ACCESS_KEY,
        SECRET_KEY,
        get_test_date(),
        DEFAULT_EXPIRY_SECONDS,
    )
}

// ===========================
// String-to-sign
// ===========================

#[test]
fn test_string_to_sign_layout() {
    let sts = get_string_to_sign(
        &Method::GET,
        1175139620,
        "",
        &get_canonicalized_resource("johnsmith", "photos/puppy.jpg"),
    );
    assert_eq!(sts, "GET\n\n\n1175139620\n/johnsmith/photos/puppy.jpg");
}

#[test]
fn test_canonicalized_resource_encodes_key() {
    let resource = get_canonicalized_resource("johnsmith", "my photo.jpg");
    assert_eq!(resource, "/johnsmith/my%20photo.jpg");

    let sts = get_string_to_sign(&Method::GET, 1175139620, "", &resource);
    assert_eq!(sts, "GET\n\n\n1175139620\n/johnsmith/my%20photo.jpg");

    let signed = presign(Method::GET, "my photo.jpg", &Multimap::new());
    assert!(
        signed
            .url
            .starts_with("https://johnsmith.s3.amazonaws.com/my%20photo.jpg?AWSAccessKeyId=")
    );
}

#[test]
fn test_canonicalized_resource_keeps_sub_resource() {
    assert_eq!(get_canonicalized_resource("johnsmith", "?acl"), "/johnsmith/?acl");
    assert_eq!(
        get_canonicalized_resource("johnsmith", "photos/puppy.jpg"),
        "/johnsmith/photos/puppy.jpg"
    );
}

#[test]
fn test_string_to_sign_uppercases_verb() {
    let method = Method::from_bytes(b"get").unwrap();
    let sts = get_string_to_sign(&method, 1, "", "/b/k");
    assert!(sts.starts_with("GET\n"));
}

#[test]
fn test_string_to_sign_amz_header_precedes_resource() {
    let sts = get_string_to_sign(&Method::PUT, 42, "x-amz-acl:public-read\n", "/b/k");
    assert_eq!(sts, "PUT\n\n\n42\nx-amz-acl:public-read\n/b/k");
}

#[test]
fn test_signature_reference_example() {
    let sts = "GET\n\n\n1175139620\n/johnsmith/photos/puppy.jpg";
    assert_eq!(
        get_signature(SECRET_KEY, sts),
        "rucSbH0yNEcP9oM2XNlouVI3BH4%3D"
    );
}

// ===========================
// presign_v2
// ===========================

#[test]
fn test_presign_expires_is_now_plus_300() {
    let signed = presign(Method::GET, "photos/puppy.jpg", &Multimap::new());
    assert_eq!(signed.expires, NOW + 300);
    assert!(signed.url.contains("&Expires=1700000300&"));
}

#[test]
fn test_presign_get_url() {
    let signed = presign(Method::GET, "photos/puppy.jpg", &Multimap::new());
    assert_eq!(signed.signature, "oDOk05QfSdD%2F4fZHqkdqjFySyE0%3D");
    assert_eq!(
        signed.url,
        "https://johnsmith.s3.amazonaws.com/photos/puppy.jpg\
         ?AWSAccessKeyId=0PN5J17HBGZHT7JJ3X82\
         &Expires=1700000300\
         &Signature=oDOk05QfSdD%2F4fZHqkdqjFySyE0%3D"
    );
}

#[test]
fn test_presign_head_signature_differs_from_get() {
    let head = presign(Method::HEAD, "photos/puppy.jpg", &Multimap::new());
    let get = presign(Method::GET, "photos/puppy.jpg", &Multimap::new());
    assert_eq!(head.signature, "s1cP5Gi3ZS3AmKVLSFCbE9MFneU%3D");
    assert_ne!(head.signature, get.signature);
}

#[test]
fn test_presign_deterministic() {
    let first = presign(Method::GET, "photos/puppy.jpg", &Multimap::new());
    let second = presign(Method::GET, "photos/puppy.jpg", &Multimap::new());
    assert_eq!(first, second);
}

#[test]
fn test_presign_plain_key_joins_with_question_mark() {
    let signed = presign(Method::GET, "key", &Multimap::new());
    assert!(
        signed
            .url
            .starts_with("https://johnsmith.s3.amazonaws.com/key?AWSAccessKeyId=")
    );
    assert_eq!(signed.url.matches('?').count(), 1);
}

#[test]
fn test_presign_sub_resource_joins_with_ampersand() {
    let signed = presign(Method::GET, "key?acl", &Multimap::new());
    assert!(
        signed
            .url
            .starts_with("https://johnsmith.s3.amazonaws.com/key?acl&AWSAccessKeyId=")
    );
    assert_eq!(signed.url.matches('?').count(), 1);

    let signed = presign(Method::GET, "photos/puppy.jpg?acl", &Multimap::new());
    assert_eq!(signed.signature, "KfTe2fz8E4n70KGnASdVZ6zlz1I%3D");
}

#[test]
fn test_presign_public_read_header_is_signed() {
    let mut headers = Multimap::new();
    headers.add(X_AMZ_ACL, PUBLIC_READ);

    let public = presign(Method::PUT, "photos/puppy.jpg", &headers);
    let private = presign(Method::PUT, "photos/puppy.jpg", &Multimap::new());

    assert_eq!(public.signature, "EwCl0VEWMWhRVDd1YeANz%2By9OY8%3D");
    assert_ne!(public.signature, private.signature);
    // the header itself never appears in the URL
    assert!(!public.url.contains("x-amz-acl"));
}

#[test]
fn test_presign_non_amz_headers_are_not_signed() {
    let mut headers = Multimap::new();
    headers.add("Content-Type", "text/plain");
    let with_header = presign(Method::PUT, "photos/puppy.jpg", &headers);
    let without = presign(Method::PUT, "photos/puppy.jpg", &Multimap::new());
    assert_eq!(with_header.signature, without.signature);
}

#[test]
fn test_presign_escapes_access_key() {
    let signed = presign_v2(
        &Method::GET,
        &BaseUrl::default(),
        "johnsmith",
        "key",
        &Multimap::new(),
        "AKIA/+=",
        SECRET_KEY,
        get_test_date(),
        DEFAULT_EXPIRY_SECONDS,
    );
    assert!(signed.url.contains("AWSAccessKeyId=AKIA%2F%2B%3D&"));
}

#[test]
fn test_presign_custom_expiry() {
    let signed = presign_v2(
        &Method::GET,
        &BaseUrl::default(),
        "johnsmith",
        "key",
        &Multimap::new(),
        ACCESS_KEY,
        SECRET_KEY,
        get_test_date(),
        3600,
    );
    assert_eq!(signed.expires, NOW + 3600);
}

#[test]
fn test_presign_path_style_host_keeps_canonical_resource() {
    let base_url: BaseUrl = "http://localhost:9000".parse().unwrap();
    let signed = presign_v2(
        &Method::GET,
        &base_url,
        "johnsmith",
        "photos/puppy.jpg",
        &Multimap::new(),
        ACCESS_KEY,
        SECRET_KEY,
        get_test_date(),
        DEFAULT_EXPIRY_SECONDS,
    );
    assert!(
        signed
            .url
            .starts_with("http://localhost:9000/johnsmith/photos/puppy.jpg?")
    );
    // the signature covers /bucket/key regardless of addressing style
    assert_eq!(signed.signature, "oDOk05QfSdD%2F4fZHqkdqjFySyE0%3D");
}

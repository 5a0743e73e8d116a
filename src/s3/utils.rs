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

//! Various utility and helper functions

use std::path::Path;

use chrono::{DateTime, Utc};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use xmltree::Element;

use crate::s3::error::ValidationErr;

/// Date and time with UTC timezone
pub type UtcTime = DateTime<Utc>;

/// Characters left as-is in query parameter values; everything else except
/// ASCII alphanumerics is percent-encoded.
const QUERY_PARAM_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'-')
    .remove(b'.')
    .remove(b'*')
    .remove(b'!')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encodes a query parameter value using uppercase hex digits.
pub fn url_escape(value: &str) -> String {
    utf8_percent_encode(value, QUERY_PARAM_ENCODE_SET).to_string()
}

/// Gets current UTC time
pub fn utc_now() -> UtcTime {
    Utc::now()
}

/// Gets hex encoded MD5 hash of given data
pub fn md5sum_hex(data: &[u8]) -> String {
    format!("{:x}", md5::compute(data))
}

/// Gets hex encoded MD5 hash of the file at `path`
pub fn md5sum_file_hex(path: &Path) -> Result<String, std::io::Error> {
    let data = std::fs::read(path)?;
    Ok(md5sum_hex(&data))
}

/// Validates given bucket name.
///
/// The bucket is used as the leading label of the request host, so it must
/// be a plausible DNS name.
pub fn check_bucket_name(bucket_name: &str) -> Result<(), ValidationErr> {
    if bucket_name.trim().is_empty() {
        return Err(ValidationErr::InvalidBucketName(String::from(
            "bucket name cannot be empty",
        )));
    }

    if bucket_name.len() > 63 {
        return Err(ValidationErr::InvalidBucketName(format!(
            "bucket name '{bucket_name}' cannot be greater than 63 characters"
        )));
    }

    if let Some(c) = bucket_name
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_')))
    {
        return Err(ValidationErr::InvalidBucketName(format!(
            "bucket name '{bucket_name}' contains invalid character {c:?}"
        )));
    }

    Ok(())
}

/// Collects every descendant of `root` (at any depth) named `tag`, in
/// document order.
pub fn find_descendants<'a>(root: &'a Element, tag: &str) -> Vec<&'a Element> {
    let mut found = Vec::new();
    let mut stack: Vec<&Element> = vec![root];
    while let Some(element) = stack.pop() {
        let children: Vec<&Element> = element
            .children
            .iter()
            .filter_map(|node| node.as_element())
            .collect();
        stack.extend(children.into_iter().rev());
        if !std::ptr::eq(element, root) && element.name == tag {
            found.push(element);
        }
    }
    found
}

/// Gets text value of the child `tag` of given XML element, if present.
pub fn get_text_option(element: &Element, tag: &str) -> Option<String> {
    element
        .get_child(tag)
        .and_then(|v| v.get_text())
        .map(|v| v.to_string())
}

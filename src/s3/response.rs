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

//! Responses of S3 requests: raw header blocks and bucket listings

use crate::s3::error::ValidationErr;
use crate::s3::header_constants::{CONTENT_LENGTH, ETAG, SYNTHETIC_OK_STATUS};
use crate::s3::utils::{find_descendants, get_text_option};
use xmltree::Element;

const INVALID_RESPONSE: &str = "Invalid Response";

/// One status line and the header lines that follow it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HeaderBlock {
    status_line: String,
    headers: Vec<(String, String)>,
}

impl HeaderBlock {
    fn new(status_line: &str) -> Self {
        Self {
            status_line: status_line.to_string(),
            headers: Vec::new(),
        }
    }

    pub fn status_line(&self) -> &str {
        &self.status_line
    }

    /// Numeric status of `HTTP/1.1 200 OK`, `HTTP/2 200` or `HTTP 200 OK`.
    pub fn status_code(&self) -> Option<u16> {
        self.status_line.split_whitespace().nth(1)?.parse().ok()
    }

    /// Status line without its protocol token, e.g. `200 OK`.
    pub fn result_code(&self) -> Option<&str> {
        let (_, rest) = self.status_line.split_once(' ')?;
        let rest = rest.trim();
        if rest.is_empty() { None } else { Some(rest) }
    }

    /// Value of the first header called `name`, compared ignoring case.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }
}

/// Object metadata as reported by a HEAD or PUT response.
///
/// Wraps the raw header text exactly as the transport returned it. When
/// redirects or interim responses were followed the text holds several
/// header blocks; the status comes from the last block while headers are
/// looked up in the first block that carries them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ObjectInfo {
    raw: String,
    blocks: Vec<HeaderBlock>,
}

impl ObjectInfo {
    /// The "no info available" sentinel.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parses a raw header block. Never fails; malformed input yields an
    /// info that reports `Invalid Response`.
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let mut blocks: Vec<HeaderBlock> = Vec::new();
        for line in raw.lines() {
            let line = line.trim_end_matches('\r');
            if line.starts_with("HTTP") {
                blocks.push(HeaderBlock::new(line));
                continue;
            }
            let Some(block) = blocks.last_mut() else {
                continue;
            };
            if let Some((name, value)) = line.split_once(':') {
                block
                    .headers
                    .push((name.trim().to_string(), value.trim().to_string()));
            }
        }
        Self { raw, blocks }
    }

    /// Info recorded for a sub-resource fetch, which has no HEAD.
    pub(crate) fn synthetic_ok() -> Self {
        Self::parse(SYNTHETIC_OK_STATUS)
    }

    /// True if the raw text starts with a status line.
    pub fn is_valid(&self) -> bool {
        self.raw.starts_with("HTTP")
    }

    /// True if the final status line reports 200.
    pub fn is_success(&self) -> bool {
        self.status_code() == Some(200)
    }

    pub fn status_code(&self) -> Option<u16> {
        self.blocks.last()?.status_code()
    }

    /// Final status without the protocol token (`200 OK`), or
    /// `Invalid Response`.
    pub fn result_code(&self) -> String {
        self.blocks
            .last()
            .and_then(|b| b.result_code())
            .unwrap_or(INVALID_RESPONSE)
            .to_string()
    }

    /// First `Content-Length` value, 0 if absent or not a number.
    pub fn content_length(&self) -> u64 {
        self.header(CONTENT_LENGTH)
            .and_then(|v| v.parse().ok())
            .unwrap_or(0)
    }

    /// First `ETag` value with surrounding quotes removed.
    pub fn content_md5(&self) -> String {
        self.header(ETAG)
            .map(|v| v.trim_matches('"').to_string())
            .unwrap_or_default()
    }

    /// Value of the first header called `name` across all blocks.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.blocks.iter().find_map(|b| b.header(name))
    }

    pub fn blocks(&self) -> &[HeaderBlock] {
        &self.blocks
    }

    pub fn raw_header(&self) -> &str {
        &self.raw
    }
}

/// Keys of a `ListBucketResult` document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListBucketResult {
    pub keys: Vec<String>,
}

impl ListBucketResult {
    /// Collects the `Key` of every `Contents` element. Entries without a
    /// key are skipped.
    pub fn from_xml(data: &[u8]) -> Result<Self, ValidationErr> {
        let root = Element::parse(data)?;
        let keys = find_descendants(&root, "Contents")
            .into_iter()
            .filter_map(|c| get_text_option(c, "Key"))
            .collect();
        Ok(Self { keys })
    }
}

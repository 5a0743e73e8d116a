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

use std::borrow::Cow;
use std::collections::BTreeMap;

/// Multimap for string key and string value
pub type Multimap = multimap::MultiMap<String, String>;

const AMZ_HEADER_PREFIX: &str = "x-amz-";

/// Collapses multiple spaces into a single space and trims the ends.
///
/// Returns `Cow::Borrowed` when no transformation is needed.
#[inline]
fn collapse_spaces(s: &str) -> Cow<'_, str> {
    let trimmed = s.trim();
    if !trimmed.contains("  ") {
        return Cow::Borrowed(trimmed);
    }
    let mut result = String::with_capacity(trimmed.len());
    let mut prev_space = false;
    for c in trimmed.chars() {
        if c == ' ' {
            if !prev_space {
                result.push(' ');
                prev_space = true;
            }
        } else {
            result.push(c);
            prev_space = false;
        }
    }
    Cow::Owned(result)
}

pub trait MultimapExt {
    /// Adds a key-value pair to the multimap
    fn add<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V);

    /// Returns the first value whose key matches `name` ignoring ASCII case
    fn get_ignore_case(&self, name: &str) -> Option<&str>;

    /// Converts the `x-amz-*` entries to the canonicalized amz headers used
    /// in the signature version 2 string-to-sign: lowercase names, sorted,
    /// repeated values sorted and comma-joined, each entry newline-terminated.
    fn get_canonical_amz_headers(&self) -> String;

    /// Converts multimap to `name:value` request header lines
    fn to_header_lines(&self) -> Vec<String>;
}

impl MultimapExt for Multimap {
    fn add<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.insert(key.into(), value.into());
    }

    fn get_ignore_case(&self, name: &str) -> Option<&str> {
        self.iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    fn get_canonical_amz_headers(&self) -> String {
        let mut sorted: BTreeMap<String, Vec<&str>> = BTreeMap::new();
        for (key, values) in self.iter_all() {
            let key = key.to_lowercase();
            if !key.starts_with(AMZ_HEADER_PREFIX) {
                continue;
            }
            sorted
                .entry(key)
                .or_default()
                .extend(values.iter().map(|s| s.as_str()));
        }

        let mut canonical = String::new();
        for (key, values) in sorted.iter_mut() {
            values.sort_unstable();
            canonical.push_str(key);
            canonical.push(':');
            for (i, value) in values.iter().enumerate() {
                if i > 0 {
                    canonical.push(',');
                }
                canonical.push_str(&collapse_spaces(value));
            }
            canonical.push('\n');
        }
        canonical
    }

    fn to_header_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for (key, values) in self.iter_all() {
            for value in values {
                lines.push(format!("{key}:{value}"));
            }
        }
        lines
    }
}

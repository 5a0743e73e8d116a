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

//! Error definitions for S3 operations

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the strict Base64 decoder.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Base64Error {
    #[error("base64 input length {0} is not a multiple of 4")]
    InvalidLength(usize),

    #[error("invalid base64 character {ch:?} at offset {offset}")]
    InvalidCharacter { ch: char, offset: usize },

    #[error("misplaced base64 padding at offset {0}")]
    InvalidPadding(usize),
}

/// Errors detected locally, before or without talking to the server.
#[derive(Debug, Error)]
pub enum ValidationErr {
    #[error("local file '{}' does not exist", .0.display())]
    MissingLocalFile(PathBuf),

    #[error("invalid bucket name: {0}")]
    InvalidBucketName(String),

    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("no credentials provided")]
    MissingCredentials,

    #[error("XML parse error: {0}")]
    XmlParse(#[from] xmltree::ParseError),
}

/// Errors reported by the transport executing a signed request.
#[derive(Debug, Error)]
pub enum TransportErr {
    /// The transport produced error output; any non-empty text is a failure.
    #[error("transport reported: {0}")]
    Output(String),

    #[error("failed to run '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// The transferred data does not match what the server reported.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum IntegrityErr {
    #[error("length mismatch; expected: {expected}, got: {actual} bytes")]
    LengthMismatch { expected: u64, actual: u64 },

    #[error("MD5 mismatch; expected: {expected}, got: {actual}")]
    Md5Mismatch { expected: String, actual: String },
}

/// Error definitions
#[derive(Debug, Error)]
pub enum Error {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationErr),

    #[error("transport error: {0}")]
    Transport(#[from] TransportErr),

    #[error("integrity check failed: {0}")]
    Integrity(#[from] IntegrityErr),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The server answered, but not with `200`.
    #[error("request failed with result '{result_code}'")]
    RequestFailed { result_code: String },
}

impl Error {
    /// Returns true if the error was raised by a failed integrity check.
    pub fn is_integrity(&self) -> bool {
        matches!(self, Error::Integrity(_))
    }
}

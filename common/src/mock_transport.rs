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

use reqwest::Method;
use s3presign::s3::error::{Error, TransportErr};
use s3presign::s3::multimap_ext::Multimap;
use s3presign::s3::transport::{Transport, TransportRequest};
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// A request as seen by [`MockTransport`].
#[derive(Clone, Debug)]
pub struct RecordedRequest {
    pub method: Method,
    pub url: String,
    pub headers: Multimap,
    pub retries: u32,
    /// Output file of a GET or input file of a PUT.
    pub path: Option<PathBuf>,
    /// Bytes uploaded by a PUT.
    pub body: Option<Vec<u8>>,
}

#[derive(Debug, Default)]
struct Script {
    head: VecDeque<String>,
    get: VecDeque<Result<Vec<u8>, String>>,
    put: VecDeque<String>,
    requests: Vec<RecordedRequest>,
}

/// Transport answering from scripted responses and recording every request.
///
/// Clones share the same script, so a test can keep one handle while the
/// client owns another.
#[derive(Clone, Debug, Default)]
pub struct MockTransport {
    script: Arc<Mutex<Script>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues the raw header text returned by the next HEAD.
    pub fn on_head(&self, raw: impl Into<String>) -> &Self {
        self.script.lock().unwrap().head.push_back(raw.into());
        self
    }

    /// Queues the body written by the next GET.
    pub fn on_get(&self, body: impl Into<Vec<u8>>) -> &Self {
        self.script.lock().unwrap().get.push_back(Ok(body.into()));
        self
    }

    /// Makes the next GET fail with `text` as transport output.
    pub fn on_get_error(&self, text: impl Into<String>) -> &Self {
        self.script.lock().unwrap().get.push_back(Err(text.into()));
        self
    }

    /// Queues the raw header text returned by the next PUT.
    pub fn on_put(&self, raw: impl Into<String>) -> &Self {
        self.script.lock().unwrap().put.push_back(raw.into());
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.script.lock().unwrap().requests.clone()
    }

    pub fn methods(&self) -> Vec<Method> {
        self.requests().into_iter().map(|r| r.method).collect()
    }

    fn record(&self, request: &TransportRequest, path: Option<&Path>, body: Option<Vec<u8>>) {
        self.script.lock().unwrap().requests.push(RecordedRequest {
            method: request.method.clone(),
            url: request.url.clone(),
            headers: request.headers.clone(),
            retries: request.retries,
            path: path.map(Path::to_path_buf),
            body,
        });
    }
}

fn unscripted(method: &str) -> Error {
    TransportErr::Output(format!("no scripted {method} response")).into()
}

impl Transport for MockTransport {
    fn head(&self, request: &TransportRequest) -> Result<String, Error> {
        self.record(request, None, None);
        let next = self.script.lock().unwrap().head.pop_front();
        next.ok_or_else(|| unscripted("HEAD"))
    }

    fn get(&self, request: &TransportRequest, path: &Path) -> Result<(), Error> {
        self.record(request, Some(path), None);
        let next = self.script.lock().unwrap().get.pop_front();
        match next.ok_or_else(|| unscripted("GET"))? {
            Ok(body) => {
                if let Some(parent) = path.parent() {
                    std::fs::create_dir_all(parent)?;
                }
                std::fs::write(path, body)?;
                Ok(())
            }
            Err(text) => Err(TransportErr::Output(text).into()),
        }
    }

    fn put(&self, request: &TransportRequest, path: &Path) -> Result<String, Error> {
        let body = std::fs::read(path)?;
        self.record(request, Some(path), Some(body));
        let next = self.script.lock().unwrap().put.pop_front();
        next.ok_or_else(|| unscripted("PUT"))
    }
}

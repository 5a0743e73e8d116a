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

//! Executors for pre-signed requests
//!
//! A [`Transport`] receives a fully signed URL and only moves bytes; it never
//! sees credentials. Two implementations are provided: [`CurlTransport`]
//! runs the `curl` command line tool and [`HttpTransport`] uses a blocking
//! [`reqwest`] client.

use crate::s3::error::{Error, TransportErr};
use crate::s3::multimap_ext::{Multimap, MultimapExt};
use reqwest::Method;
use std::fmt;
use std::fs::File;
use std::path::Path;
use std::process::Command;

/// A signed request handed to a [`Transport`].
#[derive(Clone, Debug)]
pub struct TransportRequest {
    pub method: Method,
    pub url: String,
    /// Headers to send verbatim. Any `x-amz-*` entry must be the one that
    /// was folded into the signature.
    pub headers: Multimap,
    /// Retries on transient failures.
    pub retries: u32,
}

impl TransportRequest {
    pub fn new(method: Method, url: impl Into<String>, retries: u32) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Multimap::new(),
            retries,
        }
    }

    pub fn headers(mut self, headers: Multimap) -> Self {
        self.headers = headers;
        self
    }
}

/// Executes signed requests.
pub trait Transport: fmt::Debug + Send + Sync {
    /// Runs a HEAD request and returns the raw response header text.
    fn head(&self, request: &TransportRequest) -> Result<String, Error>;

    /// Runs a GET request, writing the body to `path` and creating missing
    /// parent directories.
    fn get(&self, request: &TransportRequest, path: &Path) -> Result<(), Error>;

    /// Runs a PUT request uploading the file at `path` and returns the raw
    /// response header text.
    fn put(&self, request: &TransportRequest, path: &Path) -> Result<String, Error>;
}

/// Runs requests through the `curl` executable.
///
/// Standard output and standard error are captured together. A download
/// writes its body to the output file, so any captured text means failure.
#[derive(Clone, Debug)]
pub struct CurlTransport {
    program: String,
}

impl Default for CurlTransport {
    fn default() -> Self {
        Self {
            program: String::from(if cfg!(windows) { "curl.exe" } else { "curl" }),
        }
    }
}

impl CurlTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `program` instead of `curl` found on the `PATH`.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn command(&self, request: &TransportRequest) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(["-q", "-g", "-S", "--remote-time", "--retry"])
            .arg(request.retries.to_string())
            .arg("-s");
        for line in request.headers.to_header_lines() {
            cmd.arg("--header").arg(line);
        }
        cmd
    }

    fn run(&self, mut cmd: Command) -> Result<(String, bool), Error> {
        let output = cmd.output().map_err(|source| TransportErr::Spawn {
            program: self.program.clone(),
            source,
        })?;
        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(&output.stderr));
        Ok((text, output.status.success()))
    }
}

impl Transport for CurlTransport {
    fn head(&self, request: &TransportRequest) -> Result<String, Error> {
        let mut cmd = self.command(request);
        cmd.arg("--head").arg(&request.url);
        let (text, _) = self.run(cmd)?;
        Ok(text)
    }

    fn get(&self, request: &TransportRequest, path: &Path) -> Result<(), Error> {
        let mut cmd = self.command(request);
        cmd.args(["--request", "GET", "--create-dirs", "--output"])
            .arg(path)
            .arg("--location")
            .arg(&request.url);
        let (text, exited_ok) = self.run(cmd)?;
        let text = text.trim();
        if !text.is_empty() {
            return Err(TransportErr::Output(text.to_string()).into());
        }
        if !exited_ok {
            return Err(
                TransportErr::Output(format!("{} exited with failure", self.program)).into(),
            );
        }
        Ok(())
    }

    fn put(&self, request: &TransportRequest, path: &Path) -> Result<String, Error> {
        let mut cmd = self.command(request);
        cmd.args(["--request", "PUT", "--dump-header", "-", "--upload-file"])
            .arg(path)
            .arg("--location")
            .arg(&request.url);
        let (text, _) = self.run(cmd)?;
        Ok(text)
    }
}

/// Runs requests with a blocking [`reqwest`] client.
///
/// Connection failures, timeouts and `5xx` answers are retried up to
/// [`TransportRequest::retries`] times. Response headers are rendered back
/// into raw header text so that both transports feed the same parser.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    http_client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self, Error> {
        let http_client = reqwest::blocking::Client::builder()
            .no_gzip()
            .build()
            .map_err(TransportErr::from)?;
        Ok(Self { http_client })
    }

    /// Uses a preconfigured client, e.g. with custom root certificates.
    pub fn with_client(http_client: reqwest::blocking::Client) -> Self {
        Self { http_client }
    }

    fn execute(
        &self,
        request: &TransportRequest,
        body: Option<&Path>,
    ) -> Result<reqwest::blocking::Response, Error> {
        let mut attempt = 0;
        loop {
            let mut req = self
                .http_client
                .request(request.method.clone(), &request.url);
            for (key, values) in request.headers.iter_all() {
                for value in values {
                    req = req.header(key.as_str(), value.as_str());
                }
            }
            if let Some(path) = body {
                // reopened on every attempt; a consumed reader cannot be resent
                req = req.body(File::open(path)?);
            }

            let retry_left = attempt < request.retries;
            match req.send() {
                Ok(resp) if resp.status().is_server_error() && retry_left => {
                    log::warn!(
                        "{} request answered {}, retrying",
                        request.method,
                        resp.status()
                    );
                }
                Ok(resp) => return Ok(resp),
                Err(e) if (e.is_connect() || e.is_timeout()) && retry_left => {
                    log::warn!("{} request failed: {e}, retrying", request.method);
                }
                Err(e) => return Err(TransportErr::from(e).into()),
            }
            attempt += 1;
        }
    }
}

/// Renders the status line and headers of `resp` as raw header text.
fn header_text(resp: &reqwest::blocking::Response) -> String {
    let status = resp.status();
    let mut text = format!(
        "{:?} {} {}\r\n",
        resp.version(),
        status.as_u16(),
        status.canonical_reason().unwrap_or("")
    );
    for (name, value) in resp.headers() {
        text.push_str(name.as_str());
        text.push_str(": ");
        text.push_str(&String::from_utf8_lossy(value.as_bytes()));
        text.push_str("\r\n");
    }
    text.push_str("\r\n");
    text
}

impl Transport for HttpTransport {
    fn head(&self, request: &TransportRequest) -> Result<String, Error> {
        let resp = self.execute(request, None)?;
        Ok(header_text(&resp))
    }

    fn get(&self, request: &TransportRequest, path: &Path) -> Result<(), Error> {
        let mut resp = self.execute(request, None)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(TransportErr::Output(format!("server answered {status}")).into());
        }
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let mut file = File::create(path)?;
        resp.copy_to(&mut file).map_err(TransportErr::from)?;
        Ok(())
    }

    fn put(&self, request: &TransportRequest, path: &Path) -> Result<String, Error> {
        let resp = self.execute(request, Some(path))?;
        Ok(header_text(&resp))
    }
}

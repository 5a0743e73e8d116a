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

use crate::mock_transport::MockTransport;
use crate::utils::rand_bucket_name;
use s3presign::s3::S3Client;
use s3presign::s3::S3ClientBuilder;
use s3presign::s3::creds::StaticProvider;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const ACCESS_KEY: &str = "0PN5J17HBGZHT7JJ3X82";
pub const SECRET_KEY: &str = "uV3F3YluFJax1cknvbcGwgjvx4QpvB+leU8dUj2o";

/// Client wired to a [`MockTransport`], plus a scratch directory that is
/// removed when the context is dropped.
pub struct TestContext {
    pub client: S3Client,
    pub transport: MockTransport,
    pub bucket: String,
    dir: TempDir,
}

impl TestContext {
    pub fn new() -> Self {
        let transport = MockTransport::new();
        let client = S3ClientBuilder::new()
            .provider(StaticProvider::new(ACCESS_KEY, SECRET_KEY))
            .transport(transport.clone())
            .build()
            .unwrap();
        let dir = tempfile::tempdir().unwrap();
        let bucket = rand_bucket_name();
        log::debug!("test bucket={bucket} dir={}", dir.path().display());

        Self {
            client,
            transport,
            bucket,
            dir,
        }
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    /// Path of `name` inside the scratch directory; the file is not created.
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Writes `data` to `name` inside the scratch directory.
    pub fn write_file(&self, name: &str, data: &[u8]) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, data).unwrap();
        path
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

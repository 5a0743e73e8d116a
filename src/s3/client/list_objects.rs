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

use super::S3Client;
use crate::s3::error::Error;
use crate::s3::response::ListBucketResult;
use crate::s3::types::S3Object;

impl S3Client {
    /// Lists the keys of `bucket`, or an empty list if the listing could not
    /// be fetched or parsed.
    pub fn list_directory(&self, bucket: &str) -> Vec<String> {
        self.try_list_directory(bucket).unwrap_or_else(|e| {
            log::warn!("listing bucket '{bucket}' failed: {e}");
            Vec::new()
        })
    }

    /// Lists the keys of `bucket`.
    ///
    /// The listing document is downloaded into a temporary file that is
    /// removed before returning.
    pub fn try_list_directory(&self, bucket: &str) -> Result<Vec<String>, Error> {
        let temp = tempfile::Builder::new()
            .prefix("s3presign-")
            .suffix(".xml")
            .tempfile()?;

        let mut listing = S3Object::directory(bucket);
        self.get_object(&mut listing, temp.path())?;

        let data = std::fs::read(temp.path())?;
        let result = ListBucketResult::from_xml(&data)?;
        log::debug!("listed {} keys in '{bucket}'", result.keys.len());
        Ok(result.keys)
    }
}

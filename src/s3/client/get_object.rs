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
use crate::s3::error::{Error, IntegrityErr};
use crate::s3::multimap_ext::Multimap;
use crate::s3::response::ObjectInfo;
use crate::s3::types::S3Object;
use crate::s3::utils::md5sum_file_hex;
use reqwest::Method;
use std::path::Path;

impl S3Client {
    /// Downloads `object` into the file at `path`, creating missing parent
    /// directories.
    ///
    /// A plain object is checked with a HEAD request first; after the
    /// download the file length and MD5 must match the reported
    /// `Content-Length` and `ETag`. Only then is `path` recorded as the
    /// object's file. Sub-resources (`"key?acl"`) and bucket listings (empty
    /// object id) are downloaded without verification.
    pub fn get_object(&self, object: &mut S3Object, path: &Path) -> Result<(), Error> {
        object.clear_state();

        // sub-resources have no HEAD
        let expected = if object.has_sub_resource() {
            None
        } else {
            let info = self.head_info(object)?;
            if !info.is_success() {
                return Err(Error::RequestFailed {
                    result_code: info.result_code(),
                });
            }
            Some(info)
        };

        let signed = self.sign(&Method::GET, object, &Multimap::new())?;
        self.transport()
            .get(&self.request(Method::GET, &signed, Multimap::new()), path)?;
        log::debug!("GET {object}: downloaded to {}", path.display());

        let Some(expected) = expected else {
            object.set_info(ObjectInfo::synthetic_ok());
            return Ok(());
        };
        if object.is_directory() {
            return Ok(());
        }

        verify_download(&expected, path).inspect_err(|e| log::warn!("GET {object}: {e}"))?;
        object.set_file(path.to_path_buf());
        Ok(())
    }
}

fn verify_download(expected: &ObjectInfo, path: &Path) -> Result<(), Error> {
    let actual = std::fs::metadata(path)?.len();
    if actual != expected.content_length() {
        return Err(IntegrityErr::LengthMismatch {
            expected: expected.content_length(),
            actual,
        }
        .into());
    }

    let md5 = md5sum_file_hex(path)?;
    let etag = expected.content_md5();
    if !md5.eq_ignore_ascii_case(&etag) {
        return Err(IntegrityErr::Md5Mismatch {
            expected: etag,
            actual: md5,
        }
        .into());
    }
    Ok(())
}

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
use crate::s3::error::{Error, IntegrityErr, ValidationErr};
use crate::s3::header_constants::{PUBLIC_READ, X_AMZ_ACL};
use crate::s3::multimap_ext::{Multimap, MultimapExt};
use crate::s3::response::ObjectInfo;
use crate::s3::types::S3Object;
use crate::s3::utils::md5sum_file_hex;
use reqwest::Method;
use std::path::Path;

impl S3Client {
    /// Uploads the file at `path` as `object`.
    ///
    /// With `make_public` the object is stored with the `public-read` canned
    /// ACL. The upload succeeds only if the server answers `200` and the
    /// returned `ETag` equals the MD5 of the local file.
    pub fn put_object(
        &self,
        object: &mut S3Object,
        path: &Path,
        make_public: bool,
    ) -> Result<(), Error> {
        object.clear_state();

        if !path.is_file() {
            return Err(ValidationErr::MissingLocalFile(path.to_path_buf()).into());
        }

        // one header set feeds both the signature and the request
        let mut headers = Multimap::new();
        if make_public {
            headers.add(X_AMZ_ACL, PUBLIC_READ);
        }

        let signed = self.sign(&Method::PUT, object, &headers)?;
        let raw = self
            .transport()
            .put(&self.request(Method::PUT, &signed, headers), path)?;

        let info = ObjectInfo::parse(raw);
        log::debug!("PUT {object}: {}", info.result_code());
        object.set_info(info.clone());
        if !info.is_success() {
            return Err(Error::RequestFailed {
                result_code: info.result_code(),
            });
        }

        let md5 = md5sum_file_hex(path)?;
        let etag = info.content_md5();
        if !md5.eq_ignore_ascii_case(&etag) {
            let err = IntegrityErr::Md5Mismatch {
                expected: etag,
                actual: md5,
            };
            log::warn!("PUT {object}: {err}");
            return Err(err.into());
        }

        object.set_file(path.to_path_buf());
        Ok(())
    }
}

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

pub const CONTENT_LENGTH: &str = "Content-Length";
pub const ETAG: &str = "ETag";

pub const X_AMZ_ACL: &str = "x-amz-acl";
pub const PUBLIC_READ: &str = "public-read";

pub const AWS_ACCESS_KEY_ID: &str = "AWSAccessKeyId";
pub const EXPIRES: &str = "Expires";
pub const SIGNATURE: &str = "Signature";

/// Status line recorded for sub-resource fetches, which carry no object metadata.
pub const SYNTHETIC_OK_STATUS: &str = "HTTP 200 OK";

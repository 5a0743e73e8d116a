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

use rand::RngCore;
use rand::distr::{Alphanumeric, SampleString};
use s3presign::s3::utils::md5sum_hex;

pub fn rand_bucket_name() -> String {
    Alphanumeric.sample_string(&mut rand::rng(), 8).to_lowercase()
}

pub fn rand_object_name() -> String {
    Alphanumeric.sample_string(&mut rand::rng(), 8)
}

pub fn rand_bytes(len: usize) -> Vec<u8> {
    let mut data = vec![0u8; len];
    rand::rng().fill_bytes(&mut data);
    data
}

/// Raw HEAD answer describing `data`.
pub fn head_ok(data: &[u8]) -> String {
    format!(
        "HTTP/1.1 200 OK\r\n\
         x-amz-request-id: 318BC8BC148832E5\r\n\
         ETag: \"{}\"\r\n\
         Content-Length: {}\r\n\
         Content-Type: application/octet-stream\r\n\
         \r\n",
        md5sum_hex(data),
        data.len()
    )
}

/// Raw PUT answer acknowledging `data`.
pub fn put_ok(data: &[u8]) -> String {
    format!(
        "HTTP/1.1 200 OK\r\n\
         x-amz-request-id: 0A49CE4060975EAC\r\n\
         ETag: \"{}\"\r\n\
         Content-Length: 0\r\n\
         \r\n",
        md5sum_hex(data)
    )
}

pub fn status_only(status_line: &str) -> String {
    format!("{status_line}\r\nContent-Length: 0\r\n\r\n")
}

/// Minimal `ListBucketResult` document holding `keys`.
pub fn list_bucket_xml(bucket: &str, keys: &[&str]) -> String {
    let mut xml = format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <ListBucketResult xmlns=\"http://s3.amazonaws.com/doc/2006-03-01/\">\
         <Name>{bucket}</Name><IsTruncated>false</IsTruncated>"
    );
    for key in keys {
        xml.push_str(&format!("<Contents><Key>{key}</Key><Size>1</Size></Contents>"));
    }
    xml.push_str("</ListBucketResult>");
    xml
}

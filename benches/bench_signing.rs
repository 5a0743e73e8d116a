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

use criterion::{Criterion, criterion_group, criterion_main};
use reqwest::Method;
use s3presign::s3::base64;
use s3presign::s3::hmac_sha1::hmac_sha1;
use s3presign::s3::http::BaseUrl;
use s3presign::s3::multimap_ext::{Multimap, MultimapExt};
use s3presign::s3::response::ObjectInfo;
use s3presign::s3::signer::presign_v2;
use s3presign::s3::utils::utc_now;
use std::hint::black_box;

const SECRET_KEY: &str = "uV3F3YluFJax1cknvbcGwgjvx4QpvB+leU8dUj2o";

fn bench_primitives(c: &mut Criterion) {
    let data = vec![0x5au8; 4096];
    let encoded = base64::encode(&data);

    c.bench_function("base64 encode 4KiB", |b| {
        b.iter(|| base64::encode(black_box(&data)))
    });
    c.bench_function("base64 decode 4KiB", |b| {
        b.iter(|| base64::decode(black_box(&encoded)))
    });
    c.bench_function("hmac_sha1 short message", |b| {
        b.iter(|| {
            hmac_sha1(
                black_box(SECRET_KEY.as_bytes()),
                black_box(b"GET\n\n\n1175139620\n/johnsmith/photos/puppy.jpg"),
            )
        })
    });
}

fn bench_presign(c: &mut Criterion) {
    let base_url = BaseUrl::default();
    let mut public = Multimap::new();
    public.add("x-amz-acl", "public-read");
    let now = utc_now();

    c.bench_function("presign_v2 GET", |b| {
        b.iter(|| {
            presign_v2(
                &Method::GET,
                &base_url,
                "johnsmith",
                black_box("photos/puppy.jpg"),
                &Multimap::new(),
                "0PN5J17HBGZHT7JJ3X82",
                SECRET_KEY,
                now,
                300,
            )
        })
    });
    c.bench_function("presign_v2 PUT public-read", |b| {
        b.iter(|| {
            presign_v2(
                &Method::PUT,
                &base_url,
                "johnsmith",
                black_box("photos/puppy.jpg"),
                &public,
                "0PN5J17HBGZHT7JJ3X82",
                SECRET_KEY,
                now,
                300,
            )
        })
    });
}

fn bench_parse_headers(c: &mut Criterion) {
    let raw = "HTTP/1.1 200 OK\r\n\
               x-amz-id-2: ef8yU9AS1ed4OpIszj7UDNEHGran\r\n\
               x-amz-request-id: 318BC8BC143432E5\r\n\
               Date: Wed, 28 Oct 2009 22:32:00 GMT\r\n\
               Last-Modified: Sun, 1 Jan 2006 12:00:00 GMT\r\n\
               ETag: \"fba9dede5f27731c9771645a39863328\"\r\n\
               Content-Length: 434234\r\n\
               Content-Type: text/plain\r\n\
               \r\n";
    c.bench_function("ObjectInfo parse", |b| {
        b.iter(|| ObjectInfo::parse(black_box(raw)).content_md5())
    });
}

criterion_group!(benches, bench_primitives, bench_presign, bench_parse_headers);
criterion_main!(benches);

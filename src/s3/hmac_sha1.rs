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

//! HMAC (RFC 2104) over an injected SHA-1 digest.

use sha1::{Digest, Sha1};

/// SHA-1 block size in bytes.
pub const SHA1_BLOCK_SIZE: usize = 64;

/// SHA-1 digest length in bytes.
pub const SHA1_DIGEST_LENGTH: usize = 20;

const IPAD: u8 = 0x36;
const OPAD: u8 = 0x5c;

/// Incremental SHA-1 primitive used by [`HmacSha1`].
pub trait Sha1Digest {
    /// Discards any buffered input and starts a new digest.
    fn reset(&mut self);

    /// Feeds more input into the running digest.
    fn update(&mut self, data: &[u8]);

    /// Returns the digest of everything fed since the last reset, and resets.
    fn finalize(&mut self) -> [u8; SHA1_DIGEST_LENGTH];
}

impl Sha1Digest for Sha1 {
    fn reset(&mut self) {
        Digest::reset(self);
    }

    fn update(&mut self, data: &[u8]) {
        Digest::update(self, data);
    }

    fn finalize(&mut self) -> [u8; SHA1_DIGEST_LENGTH] {
        let mut out = [0u8; SHA1_DIGEST_LENGTH];
        out.copy_from_slice(&Digest::finalize_reset(self));
        out
    }
}

/// HMAC-SHA1 keyed hash.
#[derive(Clone, Debug, Default)]
pub struct HmacSha1<D: Sha1Digest = Sha1> {
    digest: D,
}

impl<D: Sha1Digest> HmacSha1<D> {
    pub fn new(digest: D) -> Self {
        Self { digest }
    }

    /// Returns the 20-byte authentication tag of `message` under `key`.
    pub fn sign(&mut self, key: &[u8], message: &[u8]) -> [u8; SHA1_DIGEST_LENGTH] {
        let block_key = self.block_key(key);

        let mut pad = [0u8; SHA1_BLOCK_SIZE];
        for (p, k) in pad.iter_mut().zip(block_key.iter()) {
            *p = k ^ IPAD;
        }
        self.digest.reset();
        self.digest.update(&pad);
        self.digest.update(message);
        let inner = self.digest.finalize();

        for (p, k) in pad.iter_mut().zip(block_key.iter()) {
            *p = k ^ OPAD;
        }
        self.digest.reset();
        self.digest.update(&pad);
        self.digest.update(&inner);
        self.digest.finalize()
    }

    /// Keys longer than a block are replaced by their digest; all keys are
    /// zero-padded to the block size.
    fn block_key(&mut self, key: &[u8]) -> [u8; SHA1_BLOCK_SIZE] {
        let mut block_key = [0u8; SHA1_BLOCK_SIZE];
        if key.len() > SHA1_BLOCK_SIZE {
            self.digest.reset();
            self.digest.update(key);
            let hashed = self.digest.finalize();
            block_key[..SHA1_DIGEST_LENGTH].copy_from_slice(&hashed);
        } else {
            block_key[..key.len()].copy_from_slice(key);
        }
        block_key
    }
}

/// Returns HMAC-SHA1 of `message` keyed with `key`.
pub fn hmac_sha1(key: &[u8], message: &[u8]) -> [u8; SHA1_DIGEST_LENGTH] {
    HmacSha1::new(Sha1::new()).sign(key, message)
}

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

use crate::s3::response::ObjectInfo;
use std::fmt;
use std::path::{Path, PathBuf};

/// Outcome of the last operation run against an [`S3Object`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CachedObjectState {
    /// Last parsed response info, [`ObjectInfo::empty`] if none.
    pub info: ObjectInfo,
    /// Local file whose contents were last verified against the object.
    pub file: Option<PathBuf>,
}

impl CachedObjectState {
    pub fn clear(&mut self) {
        self.info = ObjectInfo::empty();
        self.file = None;
    }
}

/// Reference to an object stored in a bucket, together with the state
/// cached by the last operation on it.
///
/// The object id may carry a sub-resource suffix (`"photo.jpg?acl"`). An
/// empty object id refers to the bucket listing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct S3Object {
    bucket: String,
    object: String,
    state: CachedObjectState,
}

impl S3Object {
    /// Returns an object reference with nothing cached.
    ///
    /// # Examples
    ///
    /// ```
    /// use s3presign::s3::types::S3Object;
    ///
    /// let object = S3Object::new("johnsmith", "photos/puppy.jpg");
    /// assert!(!object.info().is_valid());
    /// assert!(object.file().is_none());
    /// ```
    pub fn new(bucket: impl Into<String>, object: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            object: object.into(),
            state: CachedObjectState::default(),
        }
    }

    /// Returns a reference to the bucket listing of `bucket`.
    pub fn directory(bucket: impl Into<String>) -> Self {
        Self::new(bucket, "")
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    pub fn object(&self) -> &str {
        &self.object
    }

    /// Changes the bucket and drops any cached state.
    pub fn set_bucket(&mut self, bucket: impl Into<String>) {
        self.bucket = bucket.into();
        self.state.clear();
    }

    /// Changes the object id and drops any cached state.
    pub fn set_object(&mut self, object: impl Into<String>) {
        self.object = object.into();
        self.state.clear();
    }

    /// Info from the last HEAD or PUT, or the empty sentinel.
    pub fn info(&self) -> &ObjectInfo {
        &self.state.info
    }

    /// The last successfully verified local file.
    pub fn file(&self) -> Option<&Path> {
        self.state.file.as_deref()
    }

    pub fn state(&self) -> &CachedObjectState {
        &self.state
    }

    /// True if the object id addresses a sub-resource such as `?acl`.
    pub fn has_sub_resource(&self) -> bool {
        self.object.contains('?')
    }

    /// True if the object id is empty, i.e. the reference denotes the
    /// bucket listing.
    pub fn is_directory(&self) -> bool {
        self.object.is_empty()
    }

    pub(crate) fn clear_state(&mut self) {
        self.state.clear();
    }

    pub(crate) fn set_info(&mut self, info: ObjectInfo) {
        self.state.info = info;
    }

    pub(crate) fn set_file(&mut self, file: PathBuf) {
        self.state.file = Some(file);
    }
}

impl fmt::Display for S3Object {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.bucket, self.object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cached_object() -> S3Object {
        let mut object = S3Object::new("bucket", "key");
        object.set_info(ObjectInfo::parse("HTTP/1.1 200 OK\r\nContent-Length: 3\r\n"));
        object.set_file(PathBuf::from("/tmp/key"));
        object
    }

    #[test]
    fn test_new_has_empty_state() {
        let object = S3Object::new("bucket", "key");
        assert_eq!(object.bucket(), "bucket");
        assert_eq!(object.object(), "key");
        assert_eq!(object.info(), &ObjectInfo::empty());
        assert!(object.file().is_none());
    }

    #[test]
    fn test_set_object_clears_state() {
        let mut object = cached_object();
        assert!(object.info().is_success());
        object.set_object("other");
        assert_eq!(object.object(), "other");
        assert!(!object.info().is_valid());
        assert!(object.file().is_none());
    }

    #[test]
    fn test_set_bucket_clears_state() {
        let mut object = cached_object();
        object.set_bucket("other-bucket");
        assert_eq!(object.bucket(), "other-bucket");
        assert_eq!(object.state(), &CachedObjectState::default());
    }

    #[test]
    fn test_sub_resource_and_directory() {
        assert!(S3Object::new("b", "key?acl").has_sub_resource());
        assert!(!S3Object::new("b", "key").has_sub_resource());
        assert!(S3Object::directory("b").is_directory());
        assert!(!S3Object::new("b", "key").is_directory());
        assert_eq!(S3Object::new("b", "k").to_string(), "b/k");
    }
}

// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use std::fmt::{Debug, Formatter};

use cldsign_core::utils::Redact;
use serde_json::{Map, Value};

use crate::constants::*;
use crate::value::as_string;

/// Per-call options that take precedence over [`Config`](crate::Config).
///
/// Every field is optional; an empty string counts as absent.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    cloud_name: Option<String>,
    upload_prefix: Option<String>,
    resource_type: Option<String>,
    api_key: Option<String>,
    api_secret: Option<String>,
    attachment: Option<String>,
    r#type: Option<String>,
}

fn non_empty(v: Option<String>) -> Option<String> {
    v.filter(|v| !v.is_empty())
}

impl RequestOptions {
    /// Create empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build options from a loosely typed JSON object.
    ///
    /// Values are coerced to strings, so `"attachment": true` becomes `"true"`.
    /// Unknown keys are ignored.
    pub fn from_json(map: &Map<String, Value>) -> Self {
        Self {
            cloud_name: non_empty(as_string(map.get(CLOUD_NAME))),
            upload_prefix: non_empty(as_string(map.get(UPLOAD_PREFIX))),
            resource_type: non_empty(as_string(map.get(RESOURCE_TYPE))),
            api_key: non_empty(as_string(map.get(API_KEY))),
            api_secret: non_empty(as_string(map.get(API_SECRET))),
            attachment: non_empty(as_string(map.get(ATTACHMENT))),
            r#type: non_empty(as_string(map.get(TYPE))),
        }
    }

    /// Override the cloud name of the config.
    pub fn with_cloud_name(mut self, v: impl Into<String>) -> Self {
        self.cloud_name = non_empty(Some(v.into()));
        self
    }

    /// Override the API origin of the config.
    pub fn with_upload_prefix(mut self, v: impl Into<String>) -> Self {
        self.upload_prefix = non_empty(Some(v.into()));
        self
    }

    /// Set the resource type, `image` if not set.
    pub fn with_resource_type(mut self, v: impl Into<String>) -> Self {
        self.resource_type = non_empty(Some(v.into()));
        self
    }

    /// Override the api key of the config.
    pub fn with_api_key(mut self, v: impl Into<String>) -> Self {
        self.api_key = non_empty(Some(v.into()));
        self
    }

    /// Override the api secret of the config.
    pub fn with_api_secret(mut self, v: impl Into<String>) -> Self {
        self.api_secret = non_empty(Some(v.into()));
        self
    }

    /// Set the `attachment` parameter of a download.
    pub fn with_attachment(mut self, v: impl Into<String>) -> Self {
        self.attachment = non_empty(Some(v.into()));
        self
    }

    /// Set the delivery `type` of a download, for example `private`.
    pub fn with_type(mut self, v: impl Into<String>) -> Self {
        self.r#type = non_empty(Some(v.into()));
        self
    }

    /// Cloud name overriding the config.
    pub fn cloud_name(&self) -> Option<&str> {
        self.cloud_name.as_deref()
    }

    /// API origin overriding the config.
    pub fn upload_prefix(&self) -> Option<&str> {
        self.upload_prefix.as_deref()
    }

    /// Resource type of the request, `image` when absent.
    pub fn resource_type(&self) -> Option<&str> {
        self.resource_type.as_deref()
    }

    /// Api key overriding the config.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// Api secret overriding the config.
    pub fn api_secret(&self) -> Option<&str> {
        self.api_secret.as_deref()
    }

    /// The `attachment` parameter of a download.
    pub fn attachment(&self) -> Option<&str> {
        self.attachment.as_deref()
    }

    /// Delivery type of a download.
    pub fn r#type(&self) -> Option<&str> {
        self.r#type.as_deref()
    }
}

impl Debug for RequestOptions {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestOptions")
            .field("cloud_name", &self.cloud_name)
            .field("upload_prefix", &self.upload_prefix)
            .field("resource_type", &self.resource_type)
            .field("api_key", &Redact::from(&self.api_key))
            .field("api_secret", &Redact::from(&self.api_secret))
            .field("attachment", &self.attachment)
            .field("type", &self.r#type)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_from_json() {
        let Value::Object(map) = json!({
            "cloud_name": "demo",
            "resource_type": "raw",
            "api_key": 123456789012345u64,
            "attachment": true,
            "type": "",
            "unknown": "ignored",
        }) else {
            unreachable!()
        };

        let options = RequestOptions::from_json(&map);
        assert_eq!(
            options,
            RequestOptions::new()
                .with_cloud_name("demo")
                .with_resource_type("raw")
                .with_api_key("123456789012345")
                .with_attachment("true")
        );
        assert_eq!(options.r#type(), None);
        assert_eq!(options.upload_prefix(), None);
    }

    #[test]
    fn test_accessors() {
        let options = RequestOptions::new()
            .with_cloud_name("demo")
            .with_upload_prefix("https://api.example.com")
            .with_resource_type("video")
            .with_api_key("key")
            .with_api_secret("secret")
            .with_attachment("true")
            .with_type("private");

        assert_eq!(options.cloud_name(), Some("demo"));
        assert_eq!(options.upload_prefix(), Some("https://api.example.com"));
        assert_eq!(options.resource_type(), Some("video"));
        assert_eq!(options.api_key(), Some("key"));
        assert_eq!(options.api_secret(), Some("secret"));
        assert_eq!(options.attachment(), Some("true"));
        assert_eq!(options.r#type(), Some("private"));
        assert_eq!(RequestOptions::new().cloud_name(), None);
    }
}

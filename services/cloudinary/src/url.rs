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

use std::fmt::Write;

use cldsign_core::time::{format_unix_timestamp, now, DateTime};
use cldsign_core::utils::redact_query;
use cldsign_core::{Error, Result};
use log::debug;
use percent_encoding::utf8_percent_encode;
use serde_json::Value;

use crate::constants::*;
use crate::public_id;
use crate::sign_request::{sign, SigningParams};
use crate::value::as_string;
use crate::{Config, Credential, RequestOptions};

/// UrlBuilder composes API and signed download urls for a [`Config`].
///
/// Building a url never touches the network.
#[derive(Debug, Clone)]
pub struct UrlBuilder {
    config: Config,
    time: Option<DateTime>,
}

impl UrlBuilder {
    /// Create a new url builder.
    pub fn new(config: Config) -> Self {
        Self { config, time: None }
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }

    /// The config urls are built from.
    pub fn config(&self) -> &Config {
        &self.config
    }

    fn get_time(&self) -> DateTime {
        self.time.unwrap_or_else(now)
    }

    /// Build the url of an API action.
    ///
    /// The result looks like `https://api.cloudinary.com/v1_1/demo/image/upload`.
    pub fn api_url(&self, action: &str, options: &RequestOptions) -> Result<String> {
        let prefix = options
            .upload_prefix()
            .or(self.config.upload_prefix())
            .unwrap_or(DEFAULT_UPLOAD_PREFIX);
        let cloud_name = options
            .cloud_name()
            .or(self.config.cloud_name())
            .ok_or_else(|| {
                Error::cloud_name_missing("must supply cloud_name in options or in config")
            })?;
        let resource_type = options.resource_type().unwrap_or(DEFAULT_RESOURCE_TYPE);

        Ok([prefix, API_VERSION, cloud_name, resource_type, action].join("/"))
    }

    /// Build a signed url that downloads a private asset.
    ///
    /// `format`, `attachment` and `type` are only sent when they are not empty.
    /// The url carries `timestamp`, `signature` and `api_key`, so the service can
    /// verify it without any extra round trip.
    pub fn private_download_url(
        &self,
        public_id: &str,
        format: &str,
        options: &RequestOptions,
    ) -> Result<String> {
        let cred = Credential::resolve(options, &self.config)?;

        let mut params = [
            (PUBLIC_ID, Some(public_id)),
            (FORMAT, Some(format)),
            (ATTACHMENT, options.attachment()),
            (TYPE, options.r#type()),
        ]
        .into_iter()
        .filter_map(|(k, v)| v.filter(|v| !v.is_empty()).map(|v| (k, v)))
        .collect::<SigningParams>();

        params.insert(TIMESTAMP, format_unix_timestamp(self.get_time()));
        let signature = sign(&params, &cred.api_secret);
        params.insert(SIGNATURE, signature);
        params.insert(API_KEY, cred.api_key);

        let mut url = self.api_url("download", options)?;
        append_query(&mut url, &params)?;

        debug!(
            "built private download url: {}",
            redact_query(&url, &[SIGNATURE, API_KEY])
        );
        Ok(url)
    }

    /// Generate a random public id, see [`random_public_id`](crate::random_public_id).
    pub fn random_public_id(&self) -> String {
        public_id::random_public_id()
    }

    /// Render an upload result as a signed preloaded image identifier.
    ///
    /// The output looks like `image/upload/v1315060510/sample.jpg#<signature>`.
    /// `resource_type`, `version`, `public_id` and `signature` are required,
    /// `format` is optional.
    pub fn signed_preloaded_image(&self, result: &Value) -> Result<String> {
        let Value::Object(result) = result else {
            return Err(Error::request_invalid("upload result must be an object"));
        };
        let required = |key: &str| {
            as_string(result.get(key))
                .ok_or_else(|| Error::request_invalid(format!("upload result misses {key}")))
        };

        let mut s = format!(
            "{}/upload/v{}/{}",
            required(RESOURCE_TYPE)?,
            required(VERSION)?,
            required(PUBLIC_ID)?
        );
        if let Some(format) = as_string(result.get(FORMAT)) {
            write!(&mut s, ".{format}")?;
        }
        write!(&mut s, "#{}", required(SIGNATURE)?)?;

        Ok(s)
    }
}

fn append_query(url: &mut String, params: &SigningParams) -> Result<()> {
    for (idx, (k, v)) in params.iter().enumerate() {
        let v = v.to_canonical();
        write!(
            url,
            "{}{}={}",
            if idx == 0 { '?' } else { '&' },
            utf8_percent_encode(k, &QUERY_ENCODE_SET),
            utf8_percent_encode(&v, &QUERY_ENCODE_SET)
        )?;
    }

    Ok(())
}

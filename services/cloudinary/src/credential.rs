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
use cldsign_core::{Error, Result};

use crate::{Config, RequestOptions};

/// Credential used to sign privileged requests.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    /// Api key sent along with the signature.
    pub api_key: String,
    /// Api secret, never sent over the wire.
    pub api_secret: String,
}

impl Credential {
    /// Create a new credential.
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
        }
    }

    /// Resolve the credential of a request.
    ///
    /// Options take precedence over config. Both the key and the secret must be
    /// found, otherwise a credential missing error is returned.
    pub fn resolve(options: &RequestOptions, config: &Config) -> Result<Self> {
        let api_key = options
            .api_key()
            .or(config.api_key())
            .ok_or_else(|| Error::credential_missing("must supply api_key"))?;
        let api_secret = options
            .api_secret()
            .or(config.api_secret())
            .ok_or_else(|| Error::credential_missing("must supply api_secret"))?;

        Ok(Self::new(api_key, api_secret))
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("api_key", &Redact::from(&self.api_key))
            .field("api_secret", &Redact::from(&self.api_secret))
            .finish()
    }
}

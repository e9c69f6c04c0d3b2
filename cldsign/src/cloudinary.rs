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

//! Cloudinary service support with convenience APIs
//!
//! This module re-exports the Cloudinary signer along with a helper that
//! resolves its configuration from the process environment.

pub use cldsign_cloudinary::*;

use cldsign_core::{Context, OsEnv, Result};
use log::debug;

/// Create a url builder configured from `CLOUDINARY_URL`.
///
/// An unset variable yields an empty config, so cloud name and credentials
/// must then be passed through [`RequestOptions`] on every call.
pub fn default_url_builder() -> Result<UrlBuilder> {
    let ctx = Context::new().with_env(OsEnv);

    let config = match Config::from_env(&ctx)? {
        Some(config) => config,
        None => {
            debug!("{CLOUDINARY_URL} is not set, using an empty config");
            Config::new()
        }
    };

    Ok(UrlBuilder::new(config))
}

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

use percent_encoding::AsciiSet;
use percent_encoding::NON_ALPHANUMERIC;

// Env values used in cloudinary services.
pub const CLOUDINARY_URL: &str = "CLOUDINARY_URL";

// Default values used when neither options nor config supply one.
pub const DEFAULT_UPLOAD_PREFIX: &str = "https://api.cloudinary.com";
pub const DEFAULT_RESOURCE_TYPE: &str = "image";
pub const API_VERSION: &str = "v1_1";

// Keys used in override maps and connection string queries.
pub const CLOUD_NAME: &str = "cloud_name";
pub const API_KEY: &str = "api_key";
pub const API_SECRET: &str = "api_secret";
pub const SECURE_DISTRIBUTION: &str = "secure_distribution";
pub const CNAME: &str = "cname";
pub const UPLOAD_PREFIX: &str = "upload_prefix";
pub const SECURE: &str = "secure";
pub const PRIVATE_CDN: &str = "private_cdn";
pub const CDN_SUBDOMAIN: &str = "cdn_subdomain";
pub const SHORTEN: &str = "shorten";
pub const RESOURCE_TYPE: &str = "resource_type";

// Parameters of a signed download.
pub const PUBLIC_ID: &str = "public_id";
pub const FORMAT: &str = "format";
pub const ATTACHMENT: &str = "attachment";
pub const TYPE: &str = "type";
pub const TIMESTAMP: &str = "timestamp";
pub const SIGNATURE: &str = "signature";
pub const VERSION: &str = "version";

/// AsciiSet for query parameters of generated urls.
///
/// - Encode every byte except the unreserved characters: 'A'-'Z', 'a'-'z', '0'-'9', '-', '.', '_', and '~'.
pub static QUERY_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

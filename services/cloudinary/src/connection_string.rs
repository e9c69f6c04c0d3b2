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

use cldsign_core::{Error, Result};
use log::warn;
use percent_encoding::percent_decode_str;
use serde_json::Value;

use crate::constants::*;
use crate::value::as_bool;
use crate::Config;

/// Parses a connection string of the form
/// `scheme://[api_key:api_secret@]cloud_name[/secure_distribution][?query]`.
pub(crate) fn parse(conn_str: &str) -> Result<Config> {
    let conn_str = conn_str.trim();

    let (scheme, rest) = conn_str.split_once("://").ok_or_else(|| {
        Error::config_invalid("invalid connection string, expected `scheme://` prefix")
    })?;
    if !is_valid_scheme(scheme) {
        return Err(Error::config_invalid(format!(
            "invalid connection string scheme: {scheme}"
        )));
    }

    // Fragments carry nothing for us.
    let rest = rest.split_once('#').map_or(rest, |(v, _)| v);
    let (rest, query) = match rest.split_once('?') {
        Some((rest, query)) => (rest, Some(query)),
        None => (rest, None),
    };
    let (authority, path) = match rest.find('/') {
        Some(idx) => (&rest[..idx], &rest[idx + 1..]),
        None => (rest, ""),
    };
    let (user_info, host) = match authority.rsplit_once('@') {
        Some((user_info, host)) => (Some(user_info), host),
        None => (None, authority),
    };

    if host.contains(':') {
        return Err(Error::config_invalid(format!(
            "invalid connection string, unexpected port in cloud name: {host}"
        )));
    }

    let mut config = Config::new().with_cloud_name_opt(Some(decode(host)?));

    if let Some(user_info) = user_info {
        let (key, secret) = user_info.split_once(':').ok_or_else(|| {
            Error::config_invalid(
                "invalid connection string, expected `api_key:api_secret` before `@`",
            )
        })?;
        config = config
            .with_api_key_opt(Some(decode(key)?))
            .with_api_secret_opt(Some(decode(secret)?));
    }

    let secure_distribution = decode(path)?;
    if !secure_distribution.is_empty() {
        config = config
            .with_private_cdn(true)
            .with_secure_distribution(secure_distribution);
    }

    for (key, value) in parse_query(query.unwrap_or_default())? {
        config = match key.as_str() {
            CNAME => config.with_cname_opt(Some(value)),
            UPLOAD_PREFIX => config.with_upload_prefix_opt(Some(value)),
            SECURE => config.with_secure(parse_flag(value)),
            CDN_SUBDOMAIN => config.with_cdn_subdomain(parse_flag(value)),
            SHORTEN => config.with_shorten(parse_flag(value)),
            _ => {
                warn!("ignoring unknown connection string parameter: {key}");
                config
            }
        };
    }

    Ok(config)
}

fn parse_flag(value: String) -> bool {
    as_bool(Some(&Value::String(value)), false)
}

fn is_valid_scheme(scheme: &str) -> bool {
    let mut chars = scheme.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        _ => false,
    }
}

fn parse_query(query: &str) -> Result<Vec<(String, String)>> {
    check_percent_encoding(query)?;

    form_urlencoded::parse(query.as_bytes())
        .map(|(key, value)| {
            Ok((
                ensure_ascii(key.into_owned())?,
                ensure_ascii(value.into_owned())?,
            ))
        })
        .collect()
}

/// Percent-decodes user info and path components.
///
/// `+` is kept as is outside of the query.
fn decode(input: &str) -> Result<String> {
    check_percent_encoding(input)?;

    let decoded = percent_decode_str(input).decode_utf8().map_err(|e| {
        Error::config_invalid("connection string must only contain ascii characters")
            .with_source(e)
    })?;

    ensure_ascii(decoded.into_owned())
}

/// Every `%` must start a `%XX` escape; both decoders pass malformed escapes
/// through verbatim.
fn check_percent_encoding(input: &str) -> Result<()> {
    for (idx, _) in input.match_indices('%') {
        let valid = input
            .as_bytes()
            .get(idx + 1..idx + 3)
            .is_some_and(|digits| digits.iter().all(u8::is_ascii_hexdigit));
        if !valid {
            return Err(Error::config_invalid(format!(
                "invalid percent encoding in connection string at byte {idx}"
            )));
        }
    }

    Ok(())
}

fn ensure_ascii(v: String) -> Result<String> {
    if !v.is_ascii() {
        return Err(Error::config_invalid(
            "connection string must only contain ascii characters",
        ));
    }

    Ok(v)
}

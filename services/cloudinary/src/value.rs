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

//! Coercions for loosely typed option values.
//!
//! Override maps and upload options come from JSON-like sources where a flag may be
//! a real boolean or the string `"true"`, and a tag list may be a single string.
//! These helpers apply one set of rules everywhere so that every construction path
//! agrees on what a value means.

use cldsign_core::{Error, Result};
use serde_json::{Map, Value};

/// Coerce value into a boolean.
///
/// - absent or `null` returns `default`
/// - a JSON boolean passes through
/// - anything else is `true` only if its string form equals `"true"`
pub fn as_bool(value: Option<&Value>, default: bool) -> bool {
    match value {
        None | Some(Value::Null) => default,
        Some(Value::Bool(v)) => *v,
        Some(Value::String(v)) => v == "true",
        Some(_) => false,
    }
}

/// Coerce value into a string.
///
/// Strings are returned without JSON quoting, other scalars use their JSON text
/// (`true`, `12`, `1.5`).
pub fn as_string(value: Option<&Value>) -> Option<String> {
    match value {
        None | Some(Value::Null) => None,
        Some(Value::String(v)) => Some(v.clone()),
        Some(v) => Some(v.to_string()),
    }
}

/// Coerce value into a list.
///
/// `null` becomes an empty list and a scalar becomes a list of one.
pub fn as_array(value: Option<&Value>) -> Vec<Value> {
    match value {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(vs)) => vs.clone(),
        Some(v) => vec![v.clone()],
    }
}

/// Encode an object as `key=value` pairs joined by `|`.
///
/// Pairs are sorted by key so the encoding is stable. Non-object values fall back
/// to [`as_string`].
pub fn encode_map(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::Object(map)) => {
            let mut pairs = map
                .iter()
                .map(|(k, v)| format!("{}={}", k, as_string(Some(v)).unwrap_or_default()))
                .collect::<Vec<_>>();
            pairs.sort();
            Some(pairs.join("|"))
        }
        v => as_string(v),
    }
}

/// Coerce value into a float.
///
/// Numbers pass through, other scalars are parsed from their string form.
/// A value that is not a number is rejected instead of defaulted.
pub fn as_float(value: Option<&Value>) -> Result<Option<f64>> {
    let v = match value {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::Number(n)) => n.as_f64(),
        Some(v) => as_string(Some(v)).and_then(|v| v.trim().parse().ok()),
    };

    v.map(Some)
        .ok_or_else(|| Error::request_invalid(format!("expected a number, got {value:?}")))
}

/// Build an object from `(key, value)` pairs.
///
/// A later pair replaces an earlier one with the same key.
pub fn as_map<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Map<String, Value>
where
    K: Into<String>,
    V: Into<Value>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

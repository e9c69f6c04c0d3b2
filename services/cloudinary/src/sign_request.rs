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

use std::collections::btree_map;
use std::collections::BTreeMap;

use cldsign_core::hash::hex_sha1;
use log::debug;
use serde_json::{Map, Value};

use crate::value::{as_array, as_string, encode_map};

/// Value of a signing parameter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParamValue {
    /// A single string value.
    Single(String),
    /// An ordered list of values, joined with `,` when signed.
    List(Vec<String>),
}

impl ParamValue {
    /// Returns true if this value is dropped from the canonical string.
    pub fn is_empty(&self) -> bool {
        match self {
            ParamValue::Single(v) => v.is_empty(),
            ParamValue::List(vs) => vs.is_empty(),
        }
    }

    /// Render the value the way it appears in the canonical string.
    pub fn to_canonical(&self) -> String {
        match self {
            ParamValue::Single(v) => v.clone(),
            ParamValue::List(vs) => vs.join(","),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        ParamValue::Single(v.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(v: String) -> Self {
        ParamValue::Single(v)
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(vs: Vec<String>) -> Self {
        ParamValue::List(vs)
    }
}

impl From<Vec<&str>> for ParamValue {
    fn from(vs: Vec<&str>) -> Self {
        ParamValue::List(vs.into_iter().map(String::from).collect())
    }
}

/// SigningParams is the set of parameters covered by a signature.
///
/// Parameter names are unique; inserting an existing name replaces its value.
/// Iteration yields parameters in byte-wise key order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SigningParams {
    params: BTreeMap<String, ParamValue>,
}

impl SigningParams {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build parameters from a loosely typed JSON object.
    ///
    /// `null` entries are skipped, arrays become lists, objects are encoded as
    /// `key=value` pairs joined by `|`, and other scalars use their string form.
    pub fn from_json(map: &Map<String, Value>) -> Self {
        map.iter()
            .filter_map(|(k, v)| {
                let value = match v {
                    Value::Null => return None,
                    Value::Array(_) => ParamValue::List(
                        as_array(Some(v))
                            .iter()
                            .filter_map(|v| as_string(Some(v)))
                            .collect(),
                    ),
                    Value::Object(_) => ParamValue::Single(encode_map(Some(v))?),
                    _ => ParamValue::Single(as_string(Some(v))?),
                };
                Some((k.clone(), value))
            })
            .collect()
    }

    /// Insert a parameter, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        self.params.insert(key.into(), value.into());
    }

    /// Insert a parameter and return self.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Get the value of a parameter.
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.params.get(key)
    }

    /// Remove a parameter, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<ParamValue> {
        self.params.remove(key)
    }

    /// Number of parameters, including empty ones.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Returns true if there are no parameters.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Iterate parameters in key order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, ParamValue> {
        self.params.iter()
    }

    /// Build the canonical string to sign.
    ///
    /// Empty values are dropped, lists are joined with `,` in their given order,
    /// and the remaining `key=value` pairs are sorted by key and joined with `&`.
    pub fn canonical_string(&self) -> String {
        let mut pairs = self
            .params
            .iter()
            .filter(|(_, v)| !v.is_empty())
            .map(|(k, v)| (k.as_str(), v.to_canonical()))
            .collect::<Vec<_>>();
        // Already ordered by the map, but the canonical form must not depend on it.
        pairs.sort_by(|a, b| a.0.as_bytes().cmp(b.0.as_bytes()));

        pairs
            .into_iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl<K, V> FromIterator<(K, V)> for SigningParams
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut params = SigningParams::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

impl<'a> IntoIterator for &'a SigningParams {
    type Item = (&'a String, &'a ParamValue);
    type IntoIter = btree_map::Iter<'a, String, ParamValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Sign parameters with the api secret.
///
/// The signature is the lowercase hex SHA-1 of the canonical string immediately
/// followed by the secret. The remote service recomputes it the same way, so the
/// concatenation order and the missing separator must be kept as is.
pub fn sign(params: &SigningParams, api_secret: &str) -> String {
    let canonical = params.canonical_string();
    debug!("calculated canonical string: {canonical}");

    let string_to_sign = format!("{canonical}{api_secret}");
    hex_sha1(string_to_sign.as_bytes())
}

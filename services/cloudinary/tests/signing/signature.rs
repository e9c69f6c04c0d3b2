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

use cldsign_cloudinary::{sign, SigningParams};
use cldsign_core::hash::hex_sha1;
use pretty_assertions::assert_eq;

#[test]
fn test_signature_matches_manual_digest() {
    let params = SigningParams::new()
        .with("public_id", "sample")
        .with("version", "1")
        .with("timestamp", "1315060510");

    let canonical = "public_id=sample&timestamp=1315060510&version=1";
    assert_eq!(params.canonical_string(), canonical);
    assert_eq!(
        sign(&params, "abcd"),
        hex_sha1(format!("{canonical}abcd").as_bytes())
    );
    assert_eq!(
        sign(&params, "abcd"),
        "9d5a728df57cd985d657859c7628ab137e47ba99"
    );
}

#[test]
fn test_signature_depends_on_secret() {
    let params = SigningParams::new().with("public_id", "sample");
    assert_ne!(sign(&params, "abcd"), sign(&params, "abce"));
}

#[test]
fn test_signature_ignores_insertion_order_and_empty_values() {
    let a = [
        ("tags", vec!["a", "b", "c"]),
        ("context", vec![]),
        ("public_id", vec!["sample"]),
    ]
    .into_iter()
    .collect::<SigningParams>();
    let b = [("public_id", "sample"), ("tags", "a,b,c"), ("format", "")]
        .into_iter()
        .collect::<SigningParams>();

    assert_eq!(a.canonical_string(), "public_id=sample&tags=a,b,c");
    assert_eq!(sign(&a, "secret"), sign(&b, "secret"));
}

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

//! Signing media API requests and download URLs without a network round trip.
//!
//! Service support is gated behind cargo features:
//!
//! - `cloudinary` (default): [`cloudinary`] configuration, request signing and urls.

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub use cldsign_core::*;

#[cfg(feature = "cloudinary")]
pub mod cloudinary;

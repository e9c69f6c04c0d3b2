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

//! Core components for signing media API requests.
//!
//! This crate provides the foundational types shared by every service crate in the
//! cldsign workspace. Nothing in here talks to the network: signing a request or
//! building a download URL is a pure, synchronous computation.
//!
//! ## Overview
//!
//! - **Context**: A container holding the environment implementation used to look up
//!   configuration such as connection strings.
//! - **Error**: The error type shared by all crates, classified by [`ErrorKind`].
//!
//! ## Example
//!
//! ```
//! use cldsign_core::{Context, StaticEnv};
//! use std::collections::HashMap;
//!
//! let ctx = Context::new().with_env(StaticEnv {
//!     envs: HashMap::from([("CLOUDINARY_URL".to_string(), "cloudinary://demo".to_string())]),
//! });
//!
//! assert_eq!(ctx.env_var("CLOUDINARY_URL").as_deref(), Some("cloudinary://demo"));
//! ```
//!
//! ## Utilities
//!
//! - [`hash`]: Cryptographic hashing utilities
//! - [`time`]: Time manipulation utilities
//! - [`utils`]: General utilities including data redaction

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod context;
pub use context::Context;
pub use context::Env;
pub use context::NoopEnv;
pub use context::OsEnv;
pub use context::StaticEnv;

mod error;
pub use error::{Error, ErrorKind, Result};

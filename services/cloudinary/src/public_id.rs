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

use rand::thread_rng;
use rand::RngCore;

/// Generate a random public id.
///
/// The id is 8 bytes drawn from the thread-local CSPRNG, hex-encoded into 16
/// lowercase characters. Every thread owns its generator, so concurrent callers
/// never wait on each other.
pub fn random_public_id() -> String {
    let mut bytes = [0u8; 8];
    thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

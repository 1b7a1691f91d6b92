// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

pub const PLUS_SIGN: &'static str = "+";

// The only separator accepted between country code, area code and local
// phone number. Runs of it are rejected.
pub const SEGMENT_SEPARATOR: &'static str = " ";

// Anchored by `RegexFullMatch::full_match`. ASCII only: `\d` would also
// accept other Unicode decimal digits.
pub const ONLY_DIGITS_PATTERN: &'static str = r"[0-9]+";

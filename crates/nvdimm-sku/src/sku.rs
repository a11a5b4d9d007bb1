/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
 * SPDX-License-Identifier: LicenseRef-NvidiaProprietary
 *
 * NVIDIA CORPORATION, its affiliates and licensors retain all intellectual
 * property and proprietary rights in and to this material, related
 * documentation and any modifications thereto. Any use, reproduction,
 * disclosure or distribution of this material and related documentation
 * without an express license agreement from NVIDIA CORPORATION or
 * its affiliates is strictly prohibited.
 */

// src/sku.rs
// SkuInformation wraps the 32-bit SKU word a DIMM reports in its
// identify data. Only a handful of bits carry meaning today, but
// the whole word takes part in SKU comparisons, reserved bits
// included.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

const MEMORY_MODE_ENABLED: u32 = 1 << 0;
const STORAGE_MODE_ENABLED: u32 = 1 << 1;
const APP_DIRECT_MODE_ENABLED: u32 = 1 << 2;
const DIE_SPARING_CAPABLE: u32 = 1 << 3;
const SOFT_PROGRAMMABLE_SKU: u32 = 1 << 16;
const ENCRYPTION_ENABLED: u32 = 1 << 17;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SkuInformation(u32);

impl SkuInformation {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn raw(&self) -> u32 {
        self.0
    }

    pub fn memory_mode_enabled(&self) -> bool {
        self.0 & MEMORY_MODE_ENABLED != 0
    }

    pub fn storage_mode_enabled(&self) -> bool {
        self.0 & STORAGE_MODE_ENABLED != 0
    }

    pub fn app_direct_mode_enabled(&self) -> bool {
        self.0 & APP_DIRECT_MODE_ENABLED != 0
    }

    pub fn die_sparing_capable(&self) -> bool {
        self.0 & DIE_SPARING_CAPABLE != 0
    }

    pub fn soft_programmable_sku(&self) -> bool {
        self.0 & SOFT_PROGRAMMABLE_SKU != 0
    }

    pub fn encryption_enabled(&self) -> bool {
        self.0 & ENCRYPTION_ENABLED != 0
    }

    // parse accepts either a decimal value or a 0x-prefixed
    // hex value, which is how inventory dumps usually carry it.
    pub fn parse(input: &str) -> Result<Self, String> {
        let trimmed = input.trim();
        let parsed = match trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
        {
            Some(hex) => u32::from_str_radix(hex, 16),
            None => trimmed.parse::<u32>(),
        };
        parsed
            .map(Self)
            .map_err(|e| format!("invalid SKU information '{input}': {e}"))
    }
}

impl From<u32> for SkuInformation {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl fmt::Display for SkuInformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08X}", self.0)
    }
}

impl<'de> Deserialize<'de> for SkuInformation {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawSku {
            Number(u32),
            Text(String),
        }

        match RawSku::deserialize(deserializer)? {
            RawSku::Number(raw) => Ok(Self(raw)),
            RawSku::Text(text) => Self::parse(&text).map_err(serde::de::Error::custom),
        }
    }
}

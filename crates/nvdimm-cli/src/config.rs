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

// src/config.rs
// DisplayPreferences are the runtime CLI preferences, read from a
// TOML file. Every field has a default, so an empty file (or no file
// at the default location) is a valid configuration.

use std::path::{Path, PathBuf};

use nvdimm_sku::{NvdimmError, NvdimmResult};
use serde::{Deserialize, Serialize};

use crate::cmd::args::OutputFormat;

pub const DEFAULT_CONFIG_PATH: &str = "/etc/nvdimm/cli.toml";
pub const DEFAULT_INVENTORY_PATH: &str = "/var/lib/nvdimm/inventory.yaml";
pub const DEFAULT_MAX_DIMMS: u32 = 128;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DisplayPreferences {
    // output_format is used unless --output is given.
    pub output_format: OutputFormat,
    // inventory_path is the DIMM inventory snapshot,
    // used unless --inventory is given.
    pub inventory_path: PathBuf,
    // max_dimms bounds how many DIMMs a single inventory
    // may report before retrieval gives up.
    pub max_dimms: u32,
}

impl Default for DisplayPreferences {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::default(),
            inventory_path: PathBuf::from(DEFAULT_INVENTORY_PATH),
            max_dimms: DEFAULT_MAX_DIMMS,
        }
    }
}

impl DisplayPreferences {
    // load reads the preferences from an explicitly given path, or
    // from DEFAULT_CONFIG_PATH. Only a missing default file falls
    // back to the built-in defaults.
    pub fn load(path: Option<&Path>) -> NvdimmResult<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_PATH);
                if default_path.exists() {
                    Self::from_file(default_path)
                } else {
                    tracing::debug!("no display preferences file, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: impl AsRef<Path>) -> NvdimmResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            NvdimmError::NotFound(format!(
                "failed to retrieve display preferences from {}: {e}",
                path.display()
            ))
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(toml_str: &str) -> NvdimmResult<Self> {
        toml::from_str(toml_str).map_err(|e| {
            NvdimmError::NotFound(format!("failed to retrieve display preferences: {e}"))
        })
    }
}

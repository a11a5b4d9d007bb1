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

// src/inventory.rs
// The DIMM inventory is the configuration source the SKU checks read
// from. Retrieval is two-step, count first and then the descriptors,
// and the two have to agree.

use std::path::{Path, PathBuf};

use nvdimm_sku::{
    DimmDescriptor, EvaluationResult, NvdimmError, NvdimmResult, SkuConsistencyEvaluator,
    sku_mismatches,
};
use serde::{Deserialize, Serialize};

// DimmInfoCategory selects which slice of per-DIMM data the
// inventory is asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DimmInfoCategory {
    // PackageSparing carries package sparing capability,
    // SKU information and the SKU violation flag.
    PackageSparing,
}

pub trait DimmInventory {
    // dimm_count returns how many DIMMs are installed.
    fn dimm_count(&self) -> NvdimmResult<u32>;

    // dimms returns up to count descriptors for the category.
    fn dimms(&self, count: u32, category: DimmInfoCategory) -> NvdimmResult<Vec<DimmDescriptor>>;
}

// InventorySnapshot is the on-disk inventory format.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct InventorySnapshot {
    #[serde(default)]
    pub dimms: Vec<DimmDescriptor>,
}

// StaticInventory serves a fixed list of descriptors.
#[derive(Debug, Clone, Default)]
pub struct StaticInventory {
    dimms: Vec<DimmDescriptor>,
}

impl StaticInventory {
    pub fn new(dimms: Vec<DimmDescriptor>) -> Self {
        Self { dimms }
    }
}

impl DimmInventory for StaticInventory {
    fn dimm_count(&self) -> NvdimmResult<u32> {
        u32::try_from(self.dimms.len()).map_err(|_| {
            NvdimmError::ResourceExhausted(format!("{} DIMMs in inventory", self.dimms.len()))
        })
    }

    fn dimms(&self, count: u32, _category: DimmInfoCategory) -> NvdimmResult<Vec<DimmDescriptor>> {
        take_dimms(&self.dimms, count)
    }
}

// FileInventory serves descriptors from a snapshot file. Files
// ending in .json are read as JSON, anything else as YAML.
#[derive(Debug, Clone)]
pub struct FileInventory {
    path: PathBuf,
    snapshot: InventorySnapshot,
}

impl FileInventory {
    pub fn open(path: impl AsRef<Path>) -> NvdimmResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            NvdimmError::Unavailable(format!(
                "failed to open DIMM inventory {}: {e}",
                path.display()
            ))
        })?;
        let snapshot = Self::parse(path, &content)?;
        tracing::debug!(
            path = %path.display(),
            dimm_count = snapshot.dimms.len(),
            "loaded DIMM inventory"
        );
        Ok(Self {
            path: path.to_path_buf(),
            snapshot,
        })
    }

    fn parse(path: &Path, content: &str) -> NvdimmResult<InventorySnapshot> {
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let parsed = if is_json {
            serde_json::from_str(content).map_err(|e| e.to_string())
        } else {
            serde_yaml::from_str(content).map_err(|e| e.to_string())
        };
        parsed.map_err(|e| {
            NvdimmError::Aborted(format!(
                "failed to parse DIMM inventory {}: {e}",
                path.display()
            ))
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DimmInventory for FileInventory {
    fn dimm_count(&self) -> NvdimmResult<u32> {
        u32::try_from(self.snapshot.dimms.len()).map_err(|_| {
            NvdimmError::ResourceExhausted(format!(
                "{} DIMMs in inventory {}",
                self.snapshot.dimms.len(),
                self.path.display()
            ))
        })
    }

    fn dimms(&self, count: u32, category: DimmInfoCategory) -> NvdimmResult<Vec<DimmDescriptor>> {
        tracing::debug!(path = %self.path.display(), count, ?category, "reading DIMMs");
        take_dimms(&self.snapshot.dimms, count)
    }
}

fn take_dimms(dimms: &[DimmDescriptor], count: u32) -> NvdimmResult<Vec<DimmDescriptor>> {
    let count = count as usize;
    if count > dimms.len() {
        return Err(NvdimmError::Aborted(format!(
            "requested {count} DIMMs, inventory holds {}",
            dimms.len()
        )));
    }
    Ok(dimms[..count].to_vec())
}

// fetch_dimms retrieves the package sparing view of every installed
// DIMM. Resource and availability failures from the inventory are
// passed through; anything else going wrong while listing the DIMMs
// aborts the retrieval.
pub fn fetch_dimms(
    inventory: &dyn DimmInventory,
    max_dimms: u32,
) -> NvdimmResult<Vec<DimmDescriptor>> {
    let count = inventory.dimm_count()?;
    if count > max_dimms {
        return Err(NvdimmError::ResourceExhausted(format!(
            "inventory reports {count} DIMMs, at most {max_dimms} are supported"
        )));
    }

    let dimms = inventory
        .dimms(count, DimmInfoCategory::PackageSparing)
        .map_err(|e| {
            tracing::warn!(error = %e, "Failed to retrieve the DIMM inventory");
            match e {
                NvdimmError::ResourceExhausted(_) | NvdimmError::Unavailable(_) => e,
                other => NvdimmError::Aborted(other.to_string()),
            }
        })?;

    if dimms.len() != count as usize {
        tracing::warn!(
            expected = count,
            actual = dimms.len(),
            "Failed to retrieve the DIMM inventory"
        );
        return Err(NvdimmError::Aborted(format!(
            "inventory reported {count} DIMMs but returned {}",
            dimms.len()
        )));
    }
    Ok(dimms)
}

// evaluate_inventory fetches the DIMMs and runs the SKU consistency
// evaluation over them. An empty inventory is rejected by the
// evaluator as an invalid argument.
pub fn evaluate_inventory(
    inventory: &dyn DimmInventory,
    max_dimms: u32,
) -> NvdimmResult<EvaluationResult> {
    let dimms = fetch_dimms(inventory, max_dimms)?;
    for (dimm_id, mismatch) in sku_mismatches(&dimms) {
        tracing::debug!(dimm = dimm_id, %mismatch, "SKU mismatch against first DIMM");
    }
    SkuConsistencyEvaluator::evaluate(&dimms)
}

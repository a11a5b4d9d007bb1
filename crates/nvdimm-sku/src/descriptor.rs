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

use serde::{Deserialize, Serialize};

use crate::sku::SkuInformation;

// DimmId is the handle the configuration source
// assigns to each installed module.
pub type DimmId = u16;

// DimmDescriptor is the package sparing view of a single DIMM, as
// returned by the configuration source. It is read-only input to
// the SKU evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimmDescriptor {
    // dimm_id identifies the module in logs and mismatch reports.
    pub dimm_id: DimmId,
    // package_sparing_capable is whether the module
    // supports package sparing at all.
    pub package_sparing_capable: bool,
    // sku_information is the raw SKU capability word.
    pub sku_information: SkuInformation,
    // sku_violation is precomputed by the configuration source, and
    // set when this module on its own breaks the platform SKU policy.
    #[serde(default)]
    pub sku_violation: bool,
}

impl DimmDescriptor {
    pub fn new(
        dimm_id: DimmId,
        package_sparing_capable: bool,
        sku_information: u32,
        sku_violation: bool,
    ) -> Self {
        Self {
            dimm_id,
            package_sparing_capable,
            sku_information: SkuInformation::new(sku_information),
            sku_violation,
        }
    }
}

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

// descriptor module defines the per-DIMM SKU descriptor.
pub mod descriptor;
// error module defines NvdimmError and NvdimmResult.
pub mod error;
// evaluator module holds the mixed SKU / SKU violation checks.
pub mod evaluator;
// sku module decodes the bit-encoded SKU information word.
pub mod sku;

pub use descriptor::{DimmDescriptor, DimmId};
pub use error::{NvdimmError, NvdimmResult};
pub use evaluator::{
    EvaluationResult, SkuConsistencyEvaluator, SkuMismatch, sku_comparison, sku_mismatches,
};
pub use sku::SkuInformation;

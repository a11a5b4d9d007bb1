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

// src/evaluator.rs
// Mixed SKU and SKU violation detection across the installed DIMMs.
// Every module is compared against the first one in the list, which
// acts as the baseline. This is not a majority vote: when the first
// module is the odd one out, the set is still reported as mixed, but
// every other module shows up as mismatching.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::descriptor::{DimmDescriptor, DimmId};
use crate::error::{NvdimmError, NvdimmResult};
use crate::sku::SkuInformation;

// EvaluationResult is the outcome of a single evaluation,
// owned by the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub is_mixed_sku: bool,
    pub is_sku_violation: bool,
}

// SkuMismatch describes why a module is not SKU compatible
// with the baseline module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkuMismatch {
    PackageSparing {
        baseline: bool,
        other: bool,
    },
    SkuInformation {
        baseline: SkuInformation,
        other: SkuInformation,
    },
}

impl fmt::Display for SkuMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkuMismatch::PackageSparing { baseline, other } => write!(
                f,
                "package sparing capable {other} differs from baseline {baseline}"
            ),
            SkuMismatch::SkuInformation { baseline, other } => write!(
                f,
                "SKU information {other} differs from baseline {baseline}"
            ),
        }
    }
}

// sku_comparison checks whether other is SKU compatible with baseline.
// Both the package sparing capability and the full SKU word have to
// match. A package sparing difference is reported ahead of a SKU word
// difference.
pub fn sku_comparison(baseline: &DimmDescriptor, other: &DimmDescriptor) -> Result<(), SkuMismatch> {
    if baseline.package_sparing_capable != other.package_sparing_capable {
        return Err(SkuMismatch::PackageSparing {
            baseline: baseline.package_sparing_capable,
            other: other.package_sparing_capable,
        });
    }
    if baseline.sku_information != other.sku_information {
        return Err(SkuMismatch::SkuInformation {
            baseline: baseline.sku_information,
            other: other.sku_information,
        });
    }
    Ok(())
}

// sku_mismatches lists every module that is not compatible with the
// first module, in input order. An empty input has no baseline and
// so no mismatches.
pub fn sku_mismatches(dimms: &[DimmDescriptor]) -> Vec<(DimmId, SkuMismatch)> {
    let Some(baseline) = dimms.first() else {
        return Vec::new();
    };
    dimms
        .iter()
        .filter_map(|dimm| {
            sku_comparison(baseline, dimm)
                .err()
                .map(|mismatch| (dimm.dimm_id, mismatch))
        })
        .collect()
}

// SkuConsistencyEvaluator determines whether the installed
// modules are mixed SKU, and whether any of them carries a
// SKU violation.
pub struct SkuConsistencyEvaluator;

impl SkuConsistencyEvaluator {
    /// Evaluates the given modules against the first one.
    ///
    /// Fails with [NvdimmError::InvalidArgument] for an empty list, since
    /// an empty inventory cannot be vouched for as "not mixed". Both flags
    /// are computed over the full list in one pass; nothing short-circuits.
    pub fn evaluate(dimms: &[DimmDescriptor]) -> NvdimmResult<EvaluationResult> {
        let Some(baseline) = dimms.first() else {
            return Err(NvdimmError::InvalidArgument(
                "DIMM list is empty, nothing to evaluate".to_string(),
            ));
        };

        let mut result = EvaluationResult::default();
        for dimm in dimms {
            if dimm.sku_violation {
                result.is_sku_violation = true;
            }
            if let Err(mismatch) = sku_comparison(baseline, dimm) {
                tracing::debug!(
                    baseline_dimm = baseline.dimm_id,
                    dimm = dimm.dimm_id,
                    %mismatch,
                    "DIMM is not SKU compatible with baseline"
                );
                result.is_mixed_sku = true;
            }
        }

        tracing::debug!(
            dimm_count = dimms.len(),
            is_mixed_sku = result.is_mixed_sku,
            is_sku_violation = result.is_sku_violation,
            "evaluated DIMM SKU consistency"
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dimm(id: DimmId, sparing: bool, sku: u32, violation: bool) -> DimmDescriptor {
        DimmDescriptor::new(id, sparing, sku, violation)
    }

    #[test]
    fn test_comparison_is_reflexive() {
        let a = dimm(1, true, 0xA, true);
        assert!(sku_comparison(&a, &a).is_ok());
    }

    #[test]
    fn test_comparison_ignores_violation_and_id() {
        let a = dimm(1, true, 0xA, false);
        let b = dimm(2, true, 0xA, true);
        assert!(sku_comparison(&a, &b).is_ok());
    }

    #[test]
    fn test_comparison_reports_package_sparing_first() {
        let a = dimm(1, true, 0xA, false);
        let b = dimm(2, false, 0xB, false);
        assert_eq!(
            sku_comparison(&a, &b),
            Err(SkuMismatch::PackageSparing {
                baseline: true,
                other: false
            })
        );
    }

    #[test]
    fn test_comparison_reports_sku_word() {
        let a = dimm(1, true, 0xA, false);
        let b = dimm(2, true, 0xB, false);
        assert_eq!(
            sku_comparison(&a, &b),
            Err(SkuMismatch::SkuInformation {
                baseline: SkuInformation::new(0xA),
                other: SkuInformation::new(0xB),
            })
        );
    }

    #[test]
    fn test_mismatches_empty_input() {
        assert!(sku_mismatches(&[]).is_empty());
    }

    #[test]
    fn test_mismatch_display() {
        let mismatch = SkuMismatch::SkuInformation {
            baseline: SkuInformation::new(0xA),
            other: SkuInformation::new(0xB),
        };
        assert_eq!(
            mismatch.to_string(),
            "SKU information 0x0000000B differs from baseline 0x0000000A"
        );
    }
}

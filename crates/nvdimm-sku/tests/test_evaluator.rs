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

use nvdimm_sku::{
    DimmDescriptor, EvaluationResult, NvdimmError, SkuConsistencyEvaluator, SkuMismatch,
    sku_mismatches,
};

fn dimm(id: u16, sparing: bool, sku: u32, violation: bool) -> DimmDescriptor {
    DimmDescriptor::new(id, sparing, sku, violation)
}

fn evaluate(dimms: &[DimmDescriptor]) -> EvaluationResult {
    SkuConsistencyEvaluator::evaluate(dimms).expect("evaluation should succeed")
}

#[test]
fn test_empty_list_is_invalid_argument() {
    let err = SkuConsistencyEvaluator::evaluate(&[]).unwrap_err();
    assert!(matches!(err, NvdimmError::InvalidArgument(_)));
}

#[test]
fn test_single_dimm() {
    let result = evaluate(&[dimm(1, true, 0xA, false)]);
    assert_eq!(
        result,
        EvaluationResult {
            is_mixed_sku: false,
            is_sku_violation: false,
        }
    );
}

#[test]
fn test_uniform_set_with_one_violation() {
    let result = evaluate(&[
        dimm(1, true, 0xA, false),
        dimm(2, true, 0xA, false),
        dimm(3, true, 0xA, true),
    ]);
    assert_eq!(
        result,
        EvaluationResult {
            is_mixed_sku: false,
            is_sku_violation: true,
        }
    );
}

#[test]
fn test_sparing_and_sku_differ() {
    let result = evaluate(&[dimm(1, true, 0xA, false), dimm(2, false, 0xB, false)]);
    assert_eq!(
        result,
        EvaluationResult {
            is_mixed_sku: true,
            is_sku_violation: false,
        }
    );
}

#[test]
fn test_no_violation_flags_means_no_violation() {
    let dimms: Vec<_> = (0..8)
        .map(|id| dimm(id, id % 2 == 0, 0x10 + u32::from(id), false))
        .collect();
    assert!(!evaluate(&dimms).is_sku_violation);
}

#[test]
fn test_violation_detected_at_every_position() {
    for position in 0..6 {
        let dimms: Vec<_> = (0..6)
            .map(|id| dimm(id, true, 0xA, id == position))
            .collect();
        assert!(
            evaluate(&dimms).is_sku_violation,
            "violation at index {position} was missed"
        );
    }
}

#[test]
fn test_identical_descriptors_are_not_mixed() {
    let dimms: Vec<_> = (0..12).map(|id| dimm(id, false, 0x0003_0007, false)).collect();
    assert!(!evaluate(&dimms).is_mixed_sku);
}

#[test]
fn test_package_sparing_difference_alone_is_mixed() {
    let result = evaluate(&[
        dimm(1, true, 0xA, false),
        dimm(2, true, 0xA, false),
        dimm(3, false, 0xA, false),
    ]);
    assert!(result.is_mixed_sku);
}

#[test]
fn test_sku_word_difference_alone_is_mixed() {
    let result = evaluate(&[
        dimm(1, true, 0xA, false),
        dimm(2, true, 0xA | (1 << 17), false),
    ]);
    assert!(result.is_mixed_sku);
}

#[test]
fn test_outlier_at_any_position_is_mixed() {
    for position in 0..5 {
        let dimms: Vec<_> = (0..5)
            .map(|id| {
                let sku = if id == position { 0xB } else { 0xA };
                dimm(id, true, sku, false)
            })
            .collect();
        assert!(
            evaluate(&dimms).is_mixed_sku,
            "outlier at index {position} was missed"
        );
    }
}

// The baseline is always the first module. Moving the outlier into the
// first slot keeps the set mixed and the violation flag unchanged, but
// flips which modules are reported as mismatching.
#[test]
fn test_reordering_changes_baseline_but_not_flags() {
    let outlier = dimm(9, false, 0xB, true);
    let uniform = [
        dimm(1, true, 0xA, false),
        dimm(2, true, 0xA, false),
        dimm(3, true, 0xA, false),
    ];

    let mut outlier_last = uniform.to_vec();
    outlier_last.push(outlier);
    let mut outlier_first = vec![outlier];
    outlier_first.extend_from_slice(&uniform);

    let last = evaluate(&outlier_last);
    let first = evaluate(&outlier_first);
    assert_eq!(last, first);
    assert!(last.is_mixed_sku);
    assert!(last.is_sku_violation);

    let last_ids: Vec<u16> = sku_mismatches(&outlier_last)
        .into_iter()
        .map(|(id, _)| id)
        .collect();
    assert_eq!(last_ids, vec![9]);

    let first_mismatches = sku_mismatches(&outlier_first);
    let first_ids: Vec<u16> = first_mismatches.iter().map(|(id, _)| *id).collect();
    assert_eq!(first_ids, vec![1, 2, 3]);
    assert!(
        first_mismatches
            .iter()
            .all(|(_, m)| *m == SkuMismatch::PackageSparing {
                baseline: false,
                other: true
            })
    );
}

#[test]
fn test_input_is_not_mutated() {
    let dimms = vec![dimm(1, true, 0xA, true), dimm(2, false, 0xC, false)];
    let before = dimms.clone();
    let _ = evaluate(&dimms);
    assert_eq!(dimms, before);
}

#[test]
fn test_inventory_deserializes_hex_sku() {
    let json = r#"[
        {"dimm_id": 1, "package_sparing_capable": true, "sku_information": "0xA"},
        {"dimm_id": 2, "package_sparing_capable": true, "sku_information": 10, "sku_violation": true}
    ]"#;
    let dimms: Vec<DimmDescriptor> = serde_json::from_str(json).unwrap();
    assert_eq!(
        evaluate(&dimms),
        EvaluationResult {
            is_mixed_sku: false,
            is_sku_violation: true,
        }
    );
}

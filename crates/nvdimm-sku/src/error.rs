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

use thiserror::Error;

// NvdimmError is the error type shared by the NVDIMM inventory,
// SKU evaluation and CLI layers. The first five variants mirror the
// status codes the DIMM configuration source reports; the rest wrap
// library errors surfaced unchanged.
#[derive(Error, Debug)]
pub enum NvdimmError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Out of resources: {0}")]
    ResourceExhausted(String),

    #[error("DIMM configuration source unavailable: {0}")]
    Unavailable(String),

    #[error("Operation aborted: {0}")]
    Aborted(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

// NvdimmResult is a result type alias for operations that
// can fail with NvdimmError.
pub type NvdimmResult<T> = Result<T, NvdimmError>;

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

// cmd module contains the command-line interface and command handlers.
pub mod cmd;
// config module loads the CLI display preferences.
pub mod config;
// display module resolves which host server attributes get shown.
pub mod display;
// host module retrieves the host server name and OS details.
pub mod host;
// inventory module defines the DIMM inventory source and retrieval.
pub mod inventory;
// logging module sets up tracing output.
pub mod logging;
// report module builds and renders the host server report.
pub mod report;

pub use nvdimm_sku::{NvdimmError, NvdimmResult};

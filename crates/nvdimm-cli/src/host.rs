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

use nvdimm_sku::{NvdimmError, NvdimmResult};
use serde::{Deserialize, Serialize};

// HostServerInfo is the identity of the machine the DIMMs are
// installed in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostServerInfo {
    pub name: String,
    pub os_name: String,
    pub os_version: String,
}

// HostInfoSource is anything that can describe the host server.
pub trait HostInfoSource {
    fn host_server_info(&self) -> NvdimmResult<HostServerInfo>;
}

// SystemHostInfo describes the machine this process runs on, using
// the host name and the kernel's uname data.
pub struct SystemHostInfo;

impl HostInfoSource for SystemHostInfo {
    fn host_server_info(&self) -> NvdimmResult<HostServerInfo> {
        let name = hostname::get()
            .map_err(|e| NvdimmError::Unavailable(format!("failed to read host name: {e}")))?
            .to_string_lossy()
            .into_owned();
        let info = uname::uname()
            .map_err(|e| NvdimmError::Unavailable(format!("failed to read OS information: {e}")))?;

        Ok(HostServerInfo {
            name,
            os_name: info.sysname,
            os_version: info.release,
        })
    }
}

// A fixed HostServerInfo is its own source, which is handy for
// tests and for callers that already know the host details.
impl HostInfoSource for HostServerInfo {
    fn host_server_info(&self) -> NvdimmResult<HostServerInfo> {
        Ok(self.clone())
    }
}

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

use nvdimm_sku::{EvaluationResult, NvdimmResult};
use serde::Serialize;

use crate::cmd::args::OutputFormat;
use crate::display::{DisplayField, DisplaySelection};
use crate::host::HostServerInfo;

// HostServerReport is everything `show host` can print. It is fully
// built before anything is written, so a failure never leaves
// partial output behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostServerReport {
    pub host: HostServerInfo,
    pub sku: EvaluationResult,
}

// HostServerView is the serialized form of a report, holding
// only the selected attributes.
#[derive(Debug, Default, Serialize)]
pub struct HostServerView {
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "OsName", skip_serializing_if = "Option::is_none")]
    pub os_name: Option<String>,
    #[serde(rename = "OsVersion", skip_serializing_if = "Option::is_none")]
    pub os_version: Option<String>,
    #[serde(rename = "MixedSKU", skip_serializing_if = "Option::is_none")]
    pub mixed_sku: Option<bool>,
    #[serde(rename = "SKUViolation", skip_serializing_if = "Option::is_none")]
    pub sku_violation: Option<bool>,
}

impl HostServerReport {
    pub fn new(host: HostServerInfo, sku: EvaluationResult) -> Self {
        Self { host, sku }
    }

    // field_value returns the text form of an attribute.
    // Flags are shown as 1 or 0.
    pub fn field_value(&self, field: DisplayField) -> String {
        match field {
            DisplayField::Name => self.host.name.clone(),
            DisplayField::OsName => self.host.os_name.clone(),
            DisplayField::OsVersion => self.host.os_version.clone(),
            DisplayField::MixedSku => flag(self.sku.is_mixed_sku).to_string(),
            DisplayField::SkuViolation => flag(self.sku.is_sku_violation).to_string(),
        }
    }

    pub fn view(&self, selection: &DisplaySelection) -> HostServerView {
        let mut view = HostServerView::default();
        for field in selection.fields() {
            match field {
                DisplayField::Name => view.name = Some(self.host.name.clone()),
                DisplayField::OsName => view.os_name = Some(self.host.os_name.clone()),
                DisplayField::OsVersion => view.os_version = Some(self.host.os_version.clone()),
                DisplayField::MixedSku => view.mixed_sku = Some(self.sku.is_mixed_sku),
                DisplayField::SkuViolation => view.sku_violation = Some(self.sku.is_sku_violation),
            }
        }
        view
    }

    pub fn render(&self, selection: &DisplaySelection, format: OutputFormat) -> NvdimmResult<String> {
        match format {
            OutputFormat::Text => Ok(self.to_text(selection)),
            OutputFormat::Json => Ok(format!(
                "{}\n",
                serde_json::to_string_pretty(&self.view(selection))?
            )),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(&self.view(selection))?),
        }
    }

    fn to_text(&self, selection: &DisplaySelection) -> String {
        selection
            .fields()
            .into_iter()
            .map(|field| format!("{}: {}\n", field.label(), self.field_value(field)))
            .collect()
    }
}

fn flag(value: bool) -> &'static str {
    if value { "1" } else { "0" }
}

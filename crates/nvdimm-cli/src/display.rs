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

// src/display.rs
// Resolves the --all / --display options of `show host` into the
// set of attributes to print. Attributes always come out in the
// same order, regardless of the order they were asked for in.

use std::fmt;

use nvdimm_sku::{NvdimmError, NvdimmResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayField {
    Name,
    OsName,
    OsVersion,
    MixedSku,
    SkuViolation,
}

impl DisplayField {
    pub const ALL: [DisplayField; 5] = [
        DisplayField::Name,
        DisplayField::OsName,
        DisplayField::OsVersion,
        DisplayField::MixedSku,
        DisplayField::SkuViolation,
    ];

    // label is the attribute name as shown to, and typed by, the user.
    pub fn label(&self) -> &'static str {
        match self {
            DisplayField::Name => "Name",
            DisplayField::OsName => "OsName",
            DisplayField::OsVersion => "OsVersion",
            DisplayField::MixedSku => "MixedSKU",
            DisplayField::SkuViolation => "SKUViolation",
        }
    }

    // from_label matches an attribute name case-insensitively.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|field| field.label().eq_ignore_ascii_case(label))
    }
}

impl fmt::Display for DisplayField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplaySelection {
    All,
    Fields(Vec<DisplayField>),
}

impl DisplaySelection {
    // from_options applies the show host option rules: --all and
    // --display are mutually exclusive, and giving neither means
    // everything is shown. Unknown --display names are skipped.
    pub fn from_options(all: bool, display: Option<&[String]>) -> NvdimmResult<Self> {
        let Some(values) = display else {
            return Ok(DisplaySelection::All);
        };
        if all {
            tracing::warn!("Options used together");
            return Err(NvdimmError::InvalidArgument(
                "the --all and --display options cannot be used together".to_string(),
            ));
        }

        let mut fields = Vec::new();
        for value in values.iter().filter(|v| !v.trim().is_empty()) {
            match DisplayField::from_label(value) {
                Some(field) if !fields.contains(&field) => fields.push(field),
                Some(_) => {}
                None => tracing::warn!(attribute = %value, "ignoring unknown display attribute"),
            }
        }
        Ok(DisplaySelection::Fields(fields))
    }

    pub fn includes(&self, field: DisplayField) -> bool {
        match self {
            DisplaySelection::All => true,
            DisplaySelection::Fields(fields) => fields.contains(&field),
        }
    }

    // fields returns the selected attributes in display order.
    pub fn fields(&self) -> Vec<DisplayField> {
        DisplayField::ALL
            .into_iter()
            .filter(|field| self.includes(*field))
            .collect()
    }
}

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

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

// Cli is the top-level nvdimm-cli command.
#[derive(Parser, Debug)]
#[command(name = "nvdimm-cli")]
#[command(about = "Inspect persistent memory modules and the host server they are installed in")]
#[command(version)]
pub struct Cli {
    // --config is the display preferences file. When unset, the
    // default path is used if present, and built-in defaults if not.
    #[arg(long, global = true, help = "Path to the display preferences TOML file")]
    pub config: Option<PathBuf>,

    // --inventory overrides the DIMM inventory snapshot path
    // from the display preferences.
    #[arg(
        short,
        long,
        global = true,
        help = "Path to the DIMM inventory snapshot (YAML or JSON)"
    )]
    pub inventory: Option<PathBuf>,

    // --output overrides the output format from the display preferences.
    #[arg(short, long, global = true, value_enum)]
    pub output: Option<OutputFormat>,

    // --verbose enables debug logging on stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

// Commands are the available CLI verbs.
#[derive(Subcommand, Debug)]
pub enum Commands {
    // show displays information about a target.
    Show {
        #[command(subcommand)]
        target: ShowTarget,
    },
}

// ShowTarget are the targets the show verb accepts.
#[derive(Subcommand, Debug)]
pub enum ShowTarget {
    #[command(
        about = "Show basic information about the host server.",
        visible_alias = "system-host"
    )]
    Host(ShowHostArgs),
}

#[derive(Parser, Debug)]
pub struct ShowHostArgs {
    // --all shows every attribute, which is also what happens
    // when neither --all nor --display is given.
    #[arg(short, long, help = "Show all attributes")]
    pub all: bool,

    // --display restricts output to the listed attributes. Using it
    // together with --all is rejected by the command handler, not
    // by clap, so that it surfaces as an invalid argument error.
    #[arg(
        short,
        long,
        value_delimiter = ',',
        help = "Comma separated attributes to show: Name, OsName, OsVersion, MixedSKU, SKUViolation"
    )]
    pub display: Option<Vec<String>>,
}

// OutputFormat are the supported output formats.
#[derive(ValueEnum, Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

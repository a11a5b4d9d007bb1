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

use std::io::Write;
use std::path::PathBuf;

use nvdimm_sku::NvdimmResult;

use crate::cmd::args::{Cli, Commands, OutputFormat, ShowHostArgs, ShowTarget};
use crate::config::DisplayPreferences;
use crate::display::DisplaySelection;
use crate::host::{HostInfoSource, SystemHostInfo};
use crate::inventory::{DimmInventory, FileInventory, evaluate_inventory};
use crate::report::HostServerReport;

// RuntimeOptions are the global CLI options that
// apply to every command handler.
#[derive(Debug, Clone, Default)]
pub struct RuntimeOptions {
    pub config: Option<PathBuf>,
    pub inventory: Option<PathBuf>,
    pub output: Option<OutputFormat>,
}

// run_cli is the main CLI entry point that dispatches to appropriate handlers.
pub fn run_cli(cli: Cli) -> NvdimmResult<()> {
    let Cli {
        config,
        inventory,
        output,
        command,
        ..
    } = cli;
    let options = RuntimeOptions {
        config,
        inventory,
        output,
    };

    match command {
        Commands::Show { target } => match target {
            ShowTarget::Host(args) => {
                let stdout = std::io::stdout();
                let mut out = stdout.lock();
                handle_show_host(&args, &options, &SystemHostInfo, &mut out)?;
            }
        },
    }

    Ok(())
}

// handle_show_host runs `show host`: validate the display options,
// load preferences, open the inventory, then print the report.
pub fn handle_show_host(
    args: &ShowHostArgs,
    options: &RuntimeOptions,
    host_source: &dyn HostInfoSource,
    out: &mut dyn Write,
) -> NvdimmResult<()> {
    tracing::debug!(all = args.all, display = ?args.display, "show host");

    let selection = DisplaySelection::from_options(args.all, args.display.as_deref())?;
    let preferences = DisplayPreferences::load(options.config.as_deref())?;
    let format = options.output.unwrap_or(preferences.output_format);
    let inventory_path = options
        .inventory
        .clone()
        .unwrap_or_else(|| preferences.inventory_path.clone());

    let inventory = FileInventory::open(&inventory_path)?;
    let report = show_host(&inventory, host_source, preferences.max_dimms)?;

    out.write_all(report.render(&selection, format)?.as_bytes())?;
    Ok(())
}

// show_host gathers the host details and the SKU evaluation.
pub fn show_host(
    inventory: &dyn DimmInventory,
    host_source: &dyn HostInfoSource,
    max_dimms: u32,
) -> NvdimmResult<HostServerReport> {
    let host = host_source.host_server_info()?;
    let sku = evaluate_inventory(inventory, max_dimms)?;
    Ok(HostServerReport::new(host, sku))
}

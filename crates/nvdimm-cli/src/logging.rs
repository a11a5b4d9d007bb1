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

use std::sync::Once;

use tracing::metadata::LevelFilter;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::util::SubscriberInitExt;

static LOG_SETUP: Once = Once::new();

/// Initialize global logging output to STDERR, keeping STDOUT for the
/// command output itself. Warnings and errors are shown by default,
/// `verbose` raises that to debug. `RUST_LOG` overrides both.
pub fn init_logging(verbose: bool) {
    LOG_SETUP.call_once(|| {
        if let Err(e) = subscriber(verbose).try_init() {
            eprintln!("tracing_subscriber setup failed: {e}");
        }
    });
}

// A logging subscriber for use on the current thread.
// Usually you want `init_logging()` instead.
pub fn subscriber(verbose: bool) -> impl SubscriberInitExt {
    let default_level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    let env_filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();
    let stderr_formatter = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);
    tracing_subscriber::registry().with(stderr_formatter.with_filter(env_filter))
}

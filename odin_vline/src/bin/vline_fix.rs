/*
 * Copyright © 2024, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

use std::process::exit;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use odin_vline::{repair_file, ConfigError, GdalRasterIo, RepairConfig};
use odin_vline::config::usage;

// vline_fix -o out.tif [-lowerBound f] [-upperBound f] [-of fmt] [-co opt]* (-lineDef col width)* in.tif
// use RUST_LOG to set the log level (default is info)

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter( EnvFilter::try_from_default_env().unwrap_or_else( |_| EnvFilter::new("info")))
        .with_writer( std::io::stderr)
        .init();

    let config = match RepairConfig::from_args( std::env::args()) {
        Ok(config) => config,
        Err(ConfigError::Help(text)) => {
            println!("{text}");
            return
        }
        Err(e) => {
            let code = e.exit_code();
            eprintln!("{e}. Exit({code})\n\n{}", usage());
            exit(code)
        }
    };

    let io = GdalRasterIo::new();
    match repair_file( &io, &config) {
        Ok(report) => {
            info!("repaired {} rows in {} column range(s) of {}x{} raster",
                  report.rows_repaired(), report.stats.len(), report.cols, report.rows);
        }
        Err(e) => {
            error!("{e}");
            exit( e.exit_code())
        }
    }
}

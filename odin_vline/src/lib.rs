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

//! repair vertical stripe artifacts (e.g. from disagreeing regridding boundaries) in single band rasters.
//!
//! Each configured column range is replaced row by row with a linear interpolation between the column
//! left of it and the column right of it, provided both of these anchor values are within a validity window.

pub mod errors;
pub mod raster;
pub mod lines;
pub mod interp;
pub mod interpolator;
pub mod raster_io;
pub mod config;

use tracing::{info, warn};

pub use crate::errors::{Result, OdinVlineError, ConfigError};
pub use crate::raster::{Raster, GeoReference};
pub use crate::lines::{ColumnRange, ValidityWindow};
pub use crate::interp::{Interpolation, LinearInterpolation, nan_positions};
pub use crate::interpolator::{interpolate, interpolate_with, interpolate_with_stats, check_column_bounds, RepairStats};
pub use crate::raster_io::{RasterIo, GdalRasterIo};
pub use crate::config::{RepairConfig, RepairConfigFile};

/// summary of a `repair_file` run
#[derive(Debug,Clone,PartialEq)]
pub struct RepairReport {
    pub rows: usize,
    pub cols: usize,
    pub stats: Vec<RepairStats>
}

impl RepairReport {
    pub fn rows_repaired (&self)->usize {
        self.stats.iter().map( |s| s.rows_repaired).sum()
    }
}

/// read the input raster, interpolate all configured column ranges and write the result.
/// Nothing is written if the ranges do not fit the raster or the interpolation fails
pub fn repair_file<IO: RasterIo> (io: &IO, config: &RepairConfig)->Result<RepairReport> {
    info!("reading {:?}", config.input);
    let raster = io.read_raster( &config.input)?;
    check_column_bounds( raster.cols(), &config.ranges)?;

    if let Some(driver_name) = odin_gdal::get_driver_name_from_filename( &config.output) {
        if !driver_name.eq_ignore_ascii_case( &config.format) {
            warn!("output extension of {:?} suggests {driver_name} but writing {}", config.output, config.format);
        }
    }

    let (output, stats) = interpolate_with_stats( &LinearInterpolation, &raster, &config.ranges, config.window)?;
    for s in &stats {
        info!("column range {}: {} of {} rows repaired", s.range, s.rows_repaired, s.rows_repaired + s.rows_skipped);
        if s.nan_cells_kept > 0 {
            warn!("column range {}: {} NaN cells without valid anchors left", s.range, s.nan_cells_kept);
        }
    }

    info!("writing {:?} ({})", config.output, config.format);
    io.write_raster( &output, &config.output, &config.format, &config.create_options)?;

    Ok( RepairReport { rows: raster.rows(), cols: raster.cols(), stats } )
}

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

use ndarray::{s, ArrayView1};
use tracing::debug;

use crate::errors::Result;
use crate::interp::{nan_positions, Interpolation, LinearInterpolation};
use crate::lines::{ColumnRange, ValidityWindow};
use crate::raster::Raster;

/// what happened to a single ColumnRange
#[derive(Debug,Clone,PartialEq)]
pub struct RepairStats {
    pub range: ColumnRange,
    pub rows_repaired: usize,
    pub rows_skipped: usize,
    /// NaN cells left in target columns of skipped rows
    pub nan_cells_kept: usize,
}

impl RepairStats {
    fn new (range: ColumnRange)->Self {
        RepairStats { range, rows_repaired: 0, rows_skipped: 0, nan_cells_kept: 0 }
    }
}

/// check all ranges against the raster width before we touch any data
pub fn check_column_bounds (cols: usize, ranges: &[ColumnRange])->Result<()> {
    ranges.iter().try_for_each( |r| r.check_bounds( cols))
}

/// replace the columns of each range by a row-wise linear interpolation between the columns left and right of it
pub fn interpolate (raster: &Raster, ranges: &[ColumnRange], window: ValidityWindow)->Result<Raster> {
    interpolate_with( &LinearInterpolation, raster, ranges, window)
}

pub fn interpolate_with<I: Interpolation> (interpolation: &I, raster: &Raster, ranges: &[ColumnRange], window: ValidityWindow)->Result<Raster> {
    interpolate_with_stats( interpolation, raster, ranges, window).map( |(output,_)| output)
}

/// the workhorse. Anchors are always read from the input raster, ranges are processed in order so that
/// later ranges overwrite earlier results in overlapping columns. Rows for which one of the anchors is
/// outside of `window` keep their input values, empty ranges do not change anything.
/// Returns an error without computing anything if any range (or its anchors) is outside of the raster
pub fn interpolate_with_stats<I: Interpolation> (interpolation: &I, raster: &Raster, ranges: &[ColumnRange], window: ValidityWindow)
    -> Result<(Raster,Vec<RepairStats>)>
{
    check_column_bounds( raster.cols(), ranges)?;

    let input = &raster.data;
    let mut output = input.clone();
    let mut all_stats: Vec<RepairStats> = Vec::with_capacity( ranges.len());

    for range in ranges {
        if range.is_empty() {
            debug!("range {range} is empty, skipped");
            all_stats.push( RepairStats::new( *range));
            continue
        }

        let (left, right) = range.anchor_columns();
        let xp = [left as f64, right as f64];
        let mut values: Vec<f64> = vec![0.0; range.width()];
        let mut stats = RepairStats::new( *range);

        for (r, row) in input.outer_iter().enumerate() {
            let before = row[left];
            let after = row[right];

            if window.contains( before) && window.contains( after) {
                interpolation.interp_into( range.columns().map( |c| c as f64), &xp, &[before, after], &mut values);
                output.slice_mut( s![r, range.columns()]).assign( &ArrayView1::from( &values));
                stats.rows_repaired += 1;

            } else {
                stats.rows_skipped += 1;
                let kept = row.slice( s![range.columns()]).to_vec();
                stats.nan_cells_kept += nan_positions( &kept).len();
            }
        }

        debug!("range {range}: {} rows repaired, {} rows skipped", stats.rows_repaired, stats.rows_skipped);
        all_stats.push( stats);
    }

    Ok( (raster.with_data( output)?, all_stats) )
}

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

use std::{fmt, ops::Range};
use crate::errors::{Result, OdinVlineError};

/// half open interval [start, start+width) of raster columns to repair
#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub struct ColumnRange {
    start: usize,
    width: usize
}

impl ColumnRange {
    pub fn new (start: usize, width: usize)->Self {
        ColumnRange { start, width }
    }

    #[inline] pub fn start (&self)->usize { self.start }

    #[inline] pub fn width (&self)->usize { self.width }

    #[inline] pub fn is_empty (&self)->bool { self.width == 0 }

    /// the columns to replace
    #[inline] pub fn columns (&self)->Range<usize> { self.start..self.start + self.width }

    /// (left,right) column indices of the interpolation anchors. Only valid after `check_bounds`
    #[inline] pub fn anchor_columns (&self)->(usize,usize) { (self.start - 1, self.start + self.width) }

    /// make sure both anchor columns are inside a raster with `cols` columns. Empty ranges are
    /// valid (and do nothing) as long as their anchors are inside
    pub fn check_bounds (&self, cols: usize)->Result<()> {
        let in_bounds = self.start >= 1 && self.start.checked_add( self.width).is_some_and( |end| end < cols);
        if in_bounds {
            Ok(())
        } else {
            Err( OdinVlineError::ColumnBounds{ start: self.start, width: self.width, cols })
        }
    }
}

impl fmt::Display for ColumnRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.start, self.width)
    }
}

impl From<(usize,usize)> for ColumnRange {
    fn from (v: (usize,usize))->Self { ColumnRange::new( v.0, v.1) }
}

/// open interval (lower,upper) of anchor values we trust as real data.
/// Since comparisons with NaN are always false, NaN anchors are never valid
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct ValidityWindow {
    pub lower: f64,
    pub upper: f64
}

impl ValidityWindow {
    pub const DEFAULT_LOWER: f64 = 0.0;
    pub const DEFAULT_UPPER: f64 = 10.0;

    pub fn new (lower: f64, upper: f64)->Self {
        ValidityWindow { lower, upper }
    }

    #[inline] pub fn contains (&self, v: f64)->bool {
        v > self.lower && v < self.upper
    }

    pub fn is_empty (&self)->bool {
        !(self.lower < self.upper)
    }
}

impl Default for ValidityWindow {
    fn default()->Self { ValidityWindow::new( Self::DEFAULT_LOWER, Self::DEFAULT_UPPER) }
}

impl fmt::Display for ValidityWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.lower, self.upper)
    }
}

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

use ndarray::Array2;
use crate::errors::{Result, op_failed};

/// projection (WKT) and affine pixel/line -> world transform of a raster.
/// Datasets without geotransform have `geo_transform: None`
#[derive(Debug,Clone,PartialEq,Default)]
pub struct GeoReference {
    pub projection: String,
    pub geo_transform: Option<[f64;6]>
}

/// a single band raster held in memory as row-major (rows × cols) grid
#[derive(Debug,Clone,PartialEq)]
pub struct Raster {
    pub data: Array2<f64>,
    pub georef: GeoReference
}

impl Raster {
    pub fn new (data: Array2<f64>, georef: GeoReference)->Self {
        Raster { data, georef }
    }

    #[inline] pub fn rows (&self)->usize { self.data.nrows() }

    #[inline] pub fn cols (&self)->usize { self.data.ncols() }

    /// a new raster with the same georeference. `data` has to have our dimensions
    pub fn with_data (&self, data: Array2<f64>)->Result<Self> {
        if data.dim() != self.data.dim() {
            return Err( op_failed( format!("raster dimensions {:?} differ from {:?}", data.dim(), self.data.dim())))
        }
        Ok( Raster { data, georef: self.georef.clone() } )
    }

    /// the data narrowed to the Float32 sample type we write
    pub fn to_f32 (&self)->Array2<f32> {
        self.data.mapv( |v| v as f32)
    }
}

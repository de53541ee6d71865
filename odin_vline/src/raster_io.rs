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

use std::path::Path;
use tracing::debug;

use odin_gdal::{create_float32_dataset, open_single_band, read_band_array, set_georeference, write_band_array};
use crate::errors::Result;
use crate::raster::{GeoReference, Raster};

/// the storage abstraction used by `repair_file`
pub trait RasterIo {
    /// read the first band of the raster at `path` together with its georeference
    fn read_raster (&self, path: &Path)->Result<Raster>;

    /// write `raster` as a single Float32 band with the given driver short name and
    /// verbatim driver specific creation options
    fn write_raster (&self, raster: &Raster, path: &Path, format: &str, create_options: &[String])->Result<()>;
}

/// GDAL backed RasterIo
#[derive(Debug,Default)]
pub struct GdalRasterIo;

impl GdalRasterIo {
    pub fn new()->Self {
        odin_gdal::init_error_handler();
        GdalRasterIo
    }
}

impl RasterIo for GdalRasterIo {
    fn read_raster (&self, path: &Path)->Result<Raster> {
        let ds = open_single_band( path)?;
        let data = read_band_array::<f64>( &ds, 1)?;
        let georef = GeoReference {
            projection: ds.projection(),
            geo_transform: ds.geo_transform().ok()
        };
        debug!("read {path:?}: {} rows x {} cols", data.nrows(), data.ncols());

        Ok( Raster::new( data, georef))
    }

    fn write_raster (&self, raster: &Raster, path: &Path, format: &str, create_options: &[String])->Result<()> {
        let mut ds = create_float32_dataset( format, path, raster.cols(), raster.rows(), create_options)?;
        write_band_array( &mut ds, 1, &raster.to_f32())?;
        set_georeference( &mut ds, &raster.georef.projection, raster.georef.geo_transform.as_ref())?;
        debug!("wrote {path:?} as {format}");

        Ok(()) // dataset gets closed when dropped
    }
}

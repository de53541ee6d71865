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

pub mod errors;

use std::{collections::HashMap, path::Path, sync::Once};
use gdal::errors::CplErrType;
use lazy_static::lazy_static;
use ndarray::Array2;

// we re-export these so that other crates don't have to use a direct gdal depedency to import.
use gdal::{DriverManager, raster::Buffer};

pub use gdal::{Driver, Dataset, errors::GdalError, GeoTransform, cpl::CslStringList};
pub use gdal::raster::GdalType;

use crate::errors::{Result, OdinGdalError, misc_error, unsupported_raster};


lazy_static! {
    // note that we can't automatically populate this by iterating over DriverManager since some
    // drivers use the same file extension
    static ref EXT_MAP: HashMap<&'static str, &'static str> = HashMap::from( [ // file extension -> driver short name
        ("tif", "GTiff"),
        ("tiff", "GTiff"),
        ("png", "PNG"),
        ("webp", "WEBP"),
        ("jpg", "JPEG"),
        ("jpeg", "JPEG"),
        ("nc", "netCDF"),
        ("grib2", "GRIB"),
        ("img", "HFE"),
        ("vrt", "VRT"),
        ("asc", "AAIGrid"),
        ("bil", "EHdr"),
        //... and many more (see http://gdal.org/drivers)
    ]);
}

static INIT_ERROR_HANDLER: Once = Once::new();

/// route GDAL (CPL) error and warning output into our tracing subscriber instead of stderr.
/// It is safe to call this more than once
pub fn init_error_handler() {
    INIT_ERROR_HANDLER.call_once( || gdal::config::set_error_handler( log_gdal_error));
}

fn log_gdal_error (cpl_et: CplErrType, ec: i32, msg: &str) {
    match cpl_et {
        CplErrType::None => {}
        CplErrType::Debug => tracing::debug!("GDAL [{ec}]: {msg}"),
        CplErrType::Warning => tracing::warn!("GDAL [{ec}]: {msg}"),
        CplErrType::Failure | CplErrType::Fatal => tracing::error!("GDAL [{ec}]: {msg}"),
    }
}

/// the filename extension is matched case-insensitive
pub fn get_driver_name_from_filename<P: AsRef<Path>> (path: P) -> Option<&'static str> {
    path.as_ref().extension()
        .and_then( |ext| ext.to_str())
        .and_then( |ext| get_driver_name_for_extension( &ext.to_lowercase()))
}

/// Note that filename extension has to be lowercase
pub fn get_driver_name_for_extension (ext: &str) -> Option<&'static str> {
    EXT_MAP.get( ext).map(|v| &**v)
}

pub fn get_driver (driver_name: &str) -> Result<Driver> {
    DriverManager::get_driver_by_name( driver_name).map_err( |_| OdinGdalError::UnknownDriver( driver_name.to_string()))
}

/// turn a list of raw "KEY=VALUE" strings into a CslStringList, preserving order. Entries are passed through
/// verbatim, i.e. repeated keys are not merged
pub fn to_csl_string_list (strings: &[String]) -> Result<Option<CslStringList>> {
    if ! strings.is_empty() { // don't allocate if there is nothing to convert
        let mut co_list =  CslStringList::new();
        for s in strings {
            co_list.add_string(s.as_str())?;
        }
        Ok(Some(co_list))
    } else {
        Ok(None)
    }
}

/* #region single band raster access *********************************************************************************/

/// open a dataset read-only and make sure it has at least one rasterband. Datasets with more than one
/// band are accepted but only the first one is supposed to be used
pub fn open_single_band<P: AsRef<Path>> (path: P) -> Result<Dataset> {
    let path = path.as_ref();
    let ds = Dataset::open( path)?;

    match ds.raster_count() {
        0 => Err( unsupported_raster( format!("{path:?} has no rasterbands"))),
        1 => Ok(ds),
        n => {
            tracing::warn!("{path:?} has {n} rasterbands, only using band 1");
            Ok(ds)
        }
    }
}

/// read the whole rasterband into a row-major (rows × cols) array. GDAL converts the band type into `T`
pub fn read_band_array<T> (ds: &Dataset, band_index: usize) -> Result<Array2<T>>
    where T: Copy + Default + GdalType
{
    let band = ds.rasterband( band_index)?;
    let (cols, rows) = band.size();
    let mut values: Vec<T> = vec![T::default(); cols * rows];

    band.read_into_slice( (0,0), (cols,rows), (cols,rows), &mut values, None)?;

    Array2::from_shape_vec( (rows,cols), values).map_err( |e| misc_error( format!("band {band_index} shape mismatch: {e}")))
}

/// create a new dataset with a single Float32 band. `create_opts` are driver specific "KEY=VALUE" strings
pub fn create_float32_dataset<P: AsRef<Path>> (driver_name: &str, path: P, width: usize, height: usize, create_opts: &[String]) -> Result<Dataset> {
    let driver = get_driver( driver_name)?;

    if let Some(co) = to_csl_string_list( create_opts)? {
        Ok( driver.create_with_band_type_with_options::<f32,P>( path, width, height, 1, &co)? )
    } else {
        Ok( driver.create_with_band_type::<f32,P>( path, width, height, 1)? )
    }
}

/// write a row-major (rows × cols) array into the given band, which has to have the same dimensions
pub fn write_band_array<T> (ds: &mut Dataset, band_index: usize, data: &Array2<T>) -> Result<()>
    where T: Copy + GdalType
{
    let mut band = ds.rasterband( band_index)?;
    let (cols, rows) = band.size();
    let (data_rows, data_cols) = data.dim();

    if cols != data_cols || rows != data_rows {
        return Err( misc_error( format!("band size {cols}x{rows} does not match data size {data_cols}x{data_rows}")))
    }

    let mut buf: Buffer<T> = Buffer::new( (cols,rows), data.iter().copied().collect());
    band.write( (0,0), (cols,rows), &mut buf)?;
    Ok(())
}

/// copy projection and geotransform into the target dataset. An empty projection or a missing geotransform are skipped
pub fn set_georeference (ds: &mut Dataset, projection: &str, geo_transform: Option<&GeoTransform>) -> Result<()> {
    if !projection.is_empty() {
        ds.set_projection( projection)?;
    }
    if let Some(geo_transform) = geo_transform {
        ds.set_geo_transform( geo_transform)?;
    }
    Ok(())
}

/* #endregion single band raster access */

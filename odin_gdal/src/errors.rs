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
use thiserror::Error;
use gdal::errors::GdalError;

pub type Result<T> = std::result::Result<T, OdinGdalError>;

#[derive(Error,Debug)]
pub enum OdinGdalError {

    // pass through for errors reported by the gdal crate
    #[error("GDAL error: {0}")]
    GdalError( #[from] GdalError),

    #[error("unsupported raster: {0}")]
    UnsupportedRaster(String),

    #[error("no GDAL driver for format {0}")]
    UnknownDriver(String),

    // generic self-created error
    #[error("GDAL operation failed: {0}")]
    MiscError(String),
}

pub fn misc_error<S: ToString> (msg: S)->OdinGdalError {
    OdinGdalError::MiscError(msg.to_string())
}

pub fn unsupported_raster<S: ToString> (msg: S)->OdinGdalError {
    OdinGdalError::UnsupportedRaster(msg.to_string())
}


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
use odin_gdal::errors::OdinGdalError;

pub type Result<T> = std::result::Result<T, OdinVlineError>;

/// process exit codes. 1-6 are the historic codes of the command line tool
pub mod exit_code {
    pub const HELP: i32 = 0;
    pub const MISSING_INPUT: i32 = 1;
    pub const MISSING_OUTPUT: i32 = 2;
    pub const MISSING_POSITIONS: i32 = 3;
    pub const MISSING_WIDTHS: i32 = 4;
    pub const MISMATCHED_LINE_DEFS: i32 = 5;
    pub const INPUT_NOT_FOUND: i32 = 6;
    pub const INVALID_ARGUMENT: i32 = 7;
    pub const RASTER_IO: i32 = 8;
    pub const COLUMN_BOUNDS: i32 = 9;
}

/// errors detected while turning command line arguments (and an optional config file) into a RepairConfig.
/// None of these leaves any partial work behind
#[derive(Error,Debug)]
pub enum ConfigError {

    // not really an error - the rendered help text
    #[error("{0}")]
    Help(String),

    #[error("please define an input file name")]
    MissingInput,

    #[error("please define an output file name, use option -o")]
    MissingOutput,

    #[error("missing column position(s), use option -lineDef or -xpos")]
    MissingPositions,

    #[error("missing column width(s), use option -lineDef or -xwidth")]
    MissingWidths,

    #[error("column positions ({n_positions}) and widths ({n_widths}) must have the same length")]
    MismatchedLineDefs { n_positions: usize, n_widths: usize },

    #[error("input file {0} does not exist")]
    InputNotFound(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("invalid config file {path}: {msg}")]
    InvalidConfigFile { path: String, msg: String },
}

impl ConfigError {
    pub fn exit_code (&self)->i32 {
        use ConfigError::*;
        match self {
            Help(_) => exit_code::HELP,
            MissingInput => exit_code::MISSING_INPUT,
            MissingOutput => exit_code::MISSING_OUTPUT,
            MissingPositions => exit_code::MISSING_POSITIONS,
            MissingWidths => exit_code::MISSING_WIDTHS,
            MismatchedLineDefs {..} => exit_code::MISMATCHED_LINE_DEFS,
            InputNotFound(_) => exit_code::INPUT_NOT_FOUND,
            InvalidArgument(_) | InvalidConfigFile {..} => exit_code::INVALID_ARGUMENT,
        }
    }
}

#[derive(Error,Debug)]
pub enum OdinVlineError {

    #[error("configuration error: {0}")]
    ConfigError( #[from] ConfigError),

    #[error("column range ({start},{width}) exceeds raster bounds, anchors need 1 <= start and start+width < {cols}")]
    ColumnBounds { start: usize, width: usize, cols: usize },

    // pass through for OdinGdalErrors
    #[error("raster IO error: {0}")]
    OdinGdalError( #[from] OdinGdalError),

    // generic self-created error
    #[error("raster operation failed: {0}")]
    OpFailedError(String),
}

impl OdinVlineError {
    pub fn exit_code (&self)->i32 {
        use OdinVlineError::*;
        match self {
            ConfigError(e) => e.exit_code(),
            ColumnBounds {..} => exit_code::COLUMN_BOUNDS,
            OdinGdalError(_) | OpFailedError(_) => exit_code::RASTER_IO,
        }
    }
}

pub fn op_failed<S: ToString> (msg: S)->OdinVlineError {
    OdinVlineError::OpFailedError(msg.to_string())
}

pub fn invalid_argument<S: ToString> (msg: S)->ConfigError {
    ConfigError::InvalidArgument(msg.to_string())
}

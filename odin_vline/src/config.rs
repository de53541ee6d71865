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

//! command line and config file handling for vline_fix.
//!
//! The tool keeps its historic GDAL utility style options (`-lineDef 639 2`, `-lowerBound -1.5`, option names
//! are not case sensitive). We map those to regular clap long options before parsing so that both forms work.

use std::path::{Path, PathBuf};
use clap::{ArgAction, CommandFactory, Parser, error::ErrorKind};
use serde::{Serialize, Deserialize};
use tracing::warn;

use crate::errors::{ConfigError, invalid_argument};
use crate::lines::{ColumnRange, ValidityWindow};

pub const DEFAULT_FORMAT: &str = "GTiff";

const SYNOPSIS: &str = "\
SYNOPSIS:
    vline_fix -o outFile [-lowerBound float] [-upperBound float] [-of outformat] [-co formatOption]* (-lineDef int int)* infile

    -lineDef int int: the position (column) and width (in pixels) of the line to reprocess";

#[derive(Parser, Debug)]
#[command(name = "vline_fix", version, allow_negative_numbers = true, after_help = SYNOPSIS,
    about = "interpolate vertical lines in images due to map regridding boundary disagreements")]
pub struct CliArgs {
    #[arg(short = 'o', value_name = "OUT_FILE", help = "output file")]
    pub output: Option<PathBuf>,

    #[arg(long = "lower-bound", value_name = "FLOAT", help = "exclusive lower bound of valid anchor values [default: 0]")]
    pub lower_bound: Option<f64>,

    #[arg(long = "upper-bound", value_name = "FLOAT", help = "exclusive upper bound of valid anchor values [default: 10]")]
    pub upper_bound: Option<f64>,

    #[arg(long = "of", value_name = "FORMAT", help = "GDAL output driver short name [default: GTiff]")]
    pub format: Option<String>,

    #[arg(long = "co", value_name = "NAME=VALUE", action = ArgAction::Append, help = "driver specific creation option (repeatable)")]
    pub create_options: Vec<String>,

    #[arg(long = "line-def", num_args = 2, value_names = ["COL", "WIDTH"], action = ArgAction::Append,
          help = "first column and width of a column range to repair (repeatable)")]
    pub line_defs: Vec<usize>,

    #[arg(long = "xpos", value_name = "COL", action = ArgAction::Append, help = "first column of a range to repair (repeatable)")]
    pub xpos: Vec<usize>,

    #[arg(long = "xwidth", value_name = "WIDTH", action = ArgAction::Append, help = "width of a range to repair (repeatable)")]
    pub xwidth: Vec<usize>,

    #[arg(long = "config", value_name = "RON_FILE", help = "RON file with default settings and column ranges")]
    pub config: Option<PathBuf>,

    #[arg(value_name = "IN_FILE", help = "input raster file")]
    pub input: Option<PathBuf>,
}

// normalized option name -> clap option
const OPTION_NAMES: &[(&str,&str)] = &[
    ("o", "-o"),
    ("lowerbound", "--lower-bound"),
    ("upperbound", "--upper-bound"),
    ("of", "--of"),
    ("co", "--co"),
    ("linedef", "--line-def"),
    ("xpos", "--xpos"),
    ("xwidth", "--xwidth"),
    ("config", "--config"),
];

/// map GDAL style single dash options (any case) to their clap counterparts. The first element
/// is the program name and is passed through. Negative numbers are values, not options
pub fn normalize_args<I,S> (args: I)->Vec<String> where I: IntoIterator<Item=S>, S: Into<String> {
    args.into_iter()
        .map( Into::into)
        .enumerate()
        .map( |(i,arg)| if i == 0 { arg } else { normalize_option( arg) })
        .collect()
}

fn normalize_option (arg: String)->String {
    if !arg.starts_with('-') || arg.parse::<f64>().is_ok() { return arg }

    let key: String = arg.trim_start_matches('-')
        .chars()
        .filter( |c| *c != '-' && *c != '_')
        .collect::<String>()
        .to_lowercase();

    match OPTION_NAMES.iter().find( |(k,_)| *k == key) {
        Some((_,opt)) => opt.to_string(),
        None => arg
    }
}

/// the rendered help text
pub fn usage()->String {
    CliArgs::command().render_help().to_string()
}

/// optional RON file with defaults. Scalar command line options override these values,
/// list options (create options, column ranges) are appended to them
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
pub struct RepairConfigFile {
    pub lower_bound: Option<f64>,
    pub upper_bound: Option<f64>,
    pub format: Option<String>,
    pub create_options: Vec<String>,
    pub lines: Vec<(usize,usize)>,
}

impl RepairConfigFile {
    pub fn load<P: AsRef<Path>> (path: P)->Result<Self,ConfigError> {
        let path = path.as_ref();
        let config_error = |msg: String| ConfigError::InvalidConfigFile{ path: path.display().to_string(), msg };

        let contents = std::fs::read_to_string( path).map_err( |e| config_error( e.to_string()))?;
        ron::from_str( &contents).map_err( |e| config_error( e.to_string()))
    }
}

/// validated settings for one repair run
#[derive(Debug, Clone, PartialEq)]
pub struct RepairConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub window: ValidityWindow,
    pub format: String,
    pub create_options: Vec<String>,
    pub ranges: Vec<ColumnRange>,
}

impl RepairConfig {
    /// parse and validate the full argument list (including the program name).
    /// Help requests are returned as `ConfigError::Help`
    pub fn from_args<I,S> (args: I)->Result<Self,ConfigError> where I: IntoIterator<Item=S>, S: Into<String> {
        let args = normalize_args( args);

        let cli = CliArgs::try_parse_from( &args).map_err( |e| match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ConfigError::Help( e.to_string()),
            _ => {
                let msg = e.to_string();
                invalid_argument( msg.lines().next().unwrap_or_default().trim_start_matches("error: "))
            }
        })?;

        Self::from_cli( cli)
    }

    /// the checks are done in the order of the historic exit codes
    pub fn from_cli (cli: CliArgs)->Result<Self,ConfigError> {
        let input = cli.input.ok_or( ConfigError::MissingInput)?;
        let output = cli.output.ok_or( ConfigError::MissingOutput)?;

        let file_config = match &cli.config {
            Some(path) => RepairConfigFile::load( path)?,
            None => RepairConfigFile::default()
        };

        let mut positions: Vec<usize> = file_config.lines.iter().map( |l| l.0).collect();
        let mut widths: Vec<usize> = file_config.lines.iter().map( |l| l.1).collect();
        for pair in cli.line_defs.chunks(2) {
            positions.push( pair[0]);
            if let Some(width) = pair.get(1) { widths.push( *width) }
        }
        positions.extend( &cli.xpos);
        widths.extend( &cli.xwidth);

        if positions.is_empty() { return Err( ConfigError::MissingPositions) }
        if widths.is_empty() { return Err( ConfigError::MissingWidths) }
        if positions.len() != widths.len() {
            return Err( ConfigError::MismatchedLineDefs{ n_positions: positions.len(), n_widths: widths.len() })
        }

        if !input.exists() { return Err( ConfigError::InputNotFound( input.display().to_string())) }

        let ranges: Vec<ColumnRange> = positions.into_iter().zip( widths).map( ColumnRange::from).collect();

        let window = ValidityWindow::new(
            cli.lower_bound.or( file_config.lower_bound).unwrap_or( ValidityWindow::DEFAULT_LOWER),
            cli.upper_bound.or( file_config.upper_bound).unwrap_or( ValidityWindow::DEFAULT_UPPER)
        );
        if window.is_empty() {
            warn!("empty validity window {window}, no column will be repaired");
        }

        let format = cli.format.or( file_config.format).unwrap_or_else( || DEFAULT_FORMAT.to_string());

        let mut create_options = file_config.create_options;
        create_options.extend( cli.create_options);

        Ok( RepairConfig { input, output, window, format, create_options, ranges } )
    }
}

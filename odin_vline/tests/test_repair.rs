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

use std::{cell::RefCell, collections::HashMap, path::{Path, PathBuf}};
use ndarray::Array2;
use odin_vline::{
    repair_file, ColumnRange, GdalRasterIo, GeoReference, OdinVlineError, Raster, RasterIo, RepairConfig, Result, ValidityWindow
};
use odin_vline::errors::op_failed;

// run with "cargo test test_xx -- --nocapture"

const WKT_4326: &str = r#"GEOGCS["WGS 84",DATUM["WGS_1984",SPHEROID["WGS 84",6378137,298.257223563]],PRIMEM["Greenwich",0],UNIT["degree",0.0174532925199433]]"#;

struct Written {
    path: PathBuf,
    format: String,
    create_options: Vec<String>,
    raster: Raster
}

/// keeps rasters in memory so that we can test repair_file without touching the file system
#[derive(Default)]
struct MemRasterIo {
    inputs: HashMap<PathBuf,Raster>,
    written: RefCell<Vec<Written>>
}

impl RasterIo for MemRasterIo {
    fn read_raster (&self, path: &Path)->Result<Raster> {
        self.inputs.get( path).cloned().ok_or_else( || op_failed( format!("no raster {path:?}")))
    }

    fn write_raster (&self, raster: &Raster, path: &Path, format: &str, create_options: &[String])->Result<()> {
        self.written.borrow_mut().push( Written {
            path: path.to_path_buf(),
            format: format.to_string(),
            create_options: create_options.to_vec(),
            raster: raster.clone()
        });
        Ok(())
    }
}

fn input_raster()->Raster {
    let data = Array2::from_shape_fn( (6,12), |(r,c)| if c == 5 { f64::NAN } else { 2.0 + 0.5 * c as f64 + 0.01 * r as f64 });
    Raster::new( data, GeoReference { projection: "LOCAL_CS[\"test\"]".to_string(), geo_transform: Some([0.0, 1.0, 0.0, 6.0, 0.0, -1.0]) })
}

fn config (ranges: Vec<ColumnRange>)->RepairConfig {
    RepairConfig {
        input: PathBuf::from("in.tif"),
        output: PathBuf::from("out.tif"),
        window: ValidityWindow::default(),
        format: "GTiff".to_string(),
        create_options: vec!["COMPRESS=LZW".to_string(), "COMPRESS=DEFLATE".to_string()],
        ranges
    }
}

fn mem_io()->MemRasterIo {
    let mut io = MemRasterIo::default();
    io.inputs.insert( PathBuf::from("in.tif"), input_raster());
    io
}

#[test]
fn test_repair_mem() {
    let io = mem_io();
    let report = repair_file( &io, &config( vec![ColumnRange::new(5,1)])).unwrap();

    assert_eq!( (report.rows, report.cols), (6,12));
    assert_eq!( report.rows_repaired(), 6);

    let written = io.written.borrow();
    assert_eq!( written.len(), 1);
    let w = &written[0];
    assert_eq!( w.path, PathBuf::from("out.tif"));
    assert_eq!( w.format, "GTiff");
    assert_eq!( w.create_options, vec!["COMPRESS=LZW", "COMPRESS=DEFLATE"]); // passed through verbatim
    assert_eq!( w.raster.georef, input_raster().georef);

    for r in 0..6 {
        let expected = 2.0 + 0.5 * 5.0 + 0.01 * r as f64;
        assert!( (w.raster.data[[r,5]] - expected).abs() < 1e-5);
    }
}

#[test]
fn test_no_output_on_bounds_error() {
    let io = mem_io();
    let res = repair_file( &io, &config( vec![ColumnRange::new(5,1), ColumnRange::new(10,2)]));

    match res {
        Err(e @ OdinVlineError::ColumnBounds{..}) => assert_eq!( e.exit_code(), 9),
        other => panic!("expected bounds error, got {other:?}")
    }
    assert!( io.written.borrow().is_empty());
}

#[test]
fn test_read_error() {
    let io = MemRasterIo::default();
    let res = repair_file( &io, &config( vec![ColumnRange::new(5,1)]));

    let e = res.unwrap_err();
    assert_eq!( e.exit_code(), 8);
    assert!( io.written.borrow().is_empty());
}

#[test]
fn test_repair_gdal() {
    let dir = std::env::temp_dir();
    let pid = std::process::id();
    let input = dir.join( format!("odin_vline_{pid}_in.tif"));
    let output = dir.join( format!("odin_vline_{pid}_out.tif"));

    // create a Float32 input with a stripe of no-data in column 5
    let mut src = input_raster();
    src.georef.projection = WKT_4326.to_string();
    let gdal_io = GdalRasterIo::new();
    gdal_io.write_raster( &src, &input, "GTiff", &[]).unwrap();

    let mut cfg = config( vec![ColumnRange::new(5,1)]);
    cfg.input = input.clone();
    cfg.output = output.clone();
    cfg.create_options = vec!["COMPRESS=DEFLATE".to_string()];

    let report = repair_file( &gdal_io, &cfg).unwrap();
    assert_eq!( report.rows_repaired(), 6);

    let result = gdal_io.read_raster( &output).unwrap();
    assert_eq!( result.data.dim(), (6,12));
    assert_eq!( result.georef.geo_transform, src.georef.geo_transform);
    assert!( result.georef.projection.contains("WGS"), "projection lost: {}", result.georef.projection);

    for r in 0..6 {
        let expected = 2.0 + 0.5 * 5.0 + 0.01 * r as f64;
        assert!( (result.data[[r,5]] - expected).abs() < 1e-5, "row {r}: {}", result.data[[r,5]]);
        assert!( (result.data[[r,4]] - src.data[[r,4]]).abs() < 1e-5);
    }

    let _ = std::fs::remove_file( &input);
    let _ = std::fs::remove_file( &output);
}

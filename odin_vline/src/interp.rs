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

/// one dimensional interpolation through the sample points (xp[i],fp[i]).
/// `xp` has to be increasing and of the same length as `fp`
pub trait Interpolation {
    fn interp (&self, x: f64, xp: &[f64], fp: &[f64])->f64;

    /// evaluate at every position of `xs`, storing the results in `out`
    fn interp_into (&self, xs: impl Iterator<Item=f64>, xp: &[f64], fp: &[f64], out: &mut [f64]) {
        for (x,o) in xs.zip( out.iter_mut()) {
            *o = self.interp( x, xp, fp);
        }
    }
}

/// piecewise linear interpolation. Positions outside of [xp[0],xp[n-1]] are clamped to fp[0] and fp[n-1],
/// an empty `xp` yields NaN
#[derive(Debug,Clone,Copy,Default)]
pub struct LinearInterpolation;

impl Interpolation for LinearInterpolation {
    fn interp (&self, x: f64, xp: &[f64], fp: &[f64])->f64 {
        let n = xp.len().min( fp.len());
        if n == 0 || x.is_nan() { return f64::NAN }

        if x <= xp[0] { return fp[0] }
        if x >= xp[n-1] { return fp[n-1] }

        // index of the last sample point <= x (there always is one since x > xp[0])
        let j = xp[..n].partition_point( |&v| v <= x) - 1;
        if xp[j] == x { return fp[j] }

        let slope = (fp[j+1] - fp[j]) / (xp[j+1] - xp[j]);
        slope * (x - xp[j]) + fp[j]
    }
}

/// indices of all NaN elements
pub fn nan_positions (values: &[f64])->Vec<usize> {
    values.iter().enumerate().filter_map( |(i,v)| if v.is_nan() { Some(i) } else { None }).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_points() {
        let xp = [9.0, 12.0];
        let fp = [5.0, 8.0];
        let li = LinearInterpolation;

        assert!( (li.interp( 10.0, &xp, &fp) - 6.0).abs() < 1e-12);
        assert!( (li.interp( 11.0, &xp, &fp) - 7.0).abs() < 1e-12);
        assert_eq!( li.interp( 9.0, &xp, &fp), 5.0);
        assert_eq!( li.interp( 12.0, &xp, &fp), 8.0);
    }

    #[test]
    fn test_clamping() {
        let xp = [1.0, 2.0, 4.0];
        let fp = [10.0, 20.0, 0.0];
        let li = LinearInterpolation;

        assert_eq!( li.interp( -3.0, &xp, &fp), 10.0);
        assert_eq!( li.interp( 7.0, &xp, &fp), 0.0);
        assert_eq!( li.interp( 2.0, &xp, &fp), 20.0);
        assert!( (li.interp( 3.0, &xp, &fp) - 10.0).abs() < 1e-12);
        assert!( li.interp( 1.0, &[], &[]).is_nan());
    }

    #[test]
    fn test_interp_into() {
        let mut out = [0.0; 3];
        LinearInterpolation.interp_into( (1..4).map( |c| c as f64), &[0.0, 4.0], &[0.0, 2.0], &mut out);
        assert_eq!( out, [0.5, 1.0, 1.5]);
    }

    #[test]
    fn test_nan_positions() {
        assert_eq!( nan_positions( &[1.0, f64::NAN, 2.0, f64::NAN]), vec![1,3]);
        assert!( nan_positions( &[1.0, 2.0]).is_empty());
    }
}

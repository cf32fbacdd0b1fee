//! Plans built from configured grids.

use quench_core::{Axis, Complex64};
use quench_device::{full_plan, generate_plan_other3d, Device, TransformDirection, TransformResult};
use quench_test_utils::assert_complex_close;
use quench_test_utils::fixtures::{small_planar_grid, small_volume_grid};

#[test]
fn axis_plans_match_volume_extents() {
    let grid = small_volume_grid();
    for axis in Axis::ALL {
        let plan = generate_plan_other3d(&grid, axis).unwrap();
        let l = plan.layout();
        assert_eq!(l.n, grid.extents().unwrap().along(axis));
        assert_eq!(l.line_count() * l.n, 8 * 4 * 4);
    }
}

#[test]
fn axis_plans_have_distinct_handles() {
    let grid = small_volume_grid();
    let mut handles: Vec<_> = Axis::ALL
        .into_iter()
        .map(|axis| generate_plan_other3d(&grid, axis).unwrap().handle())
        .collect();
    handles.sort();
    handles.dedup();
    assert_eq!(handles.len(), 3);
}

#[test]
fn full_transform_of_device_buffer_is_invertible() {
    let grid = small_planar_grid();
    let full = full_plan(&grid).unwrap();
    let original: Vec<Complex64> = (0..64u32)
        .map(|n| Complex64::new(f64::from(n).sin(), f64::from(n).cos()))
        .collect();

    let mut device = Device::new();
    let buf = device.upload_complex(&original).unwrap();
    let data = device.complex_mut(buf).unwrap();
    assert_eq!(full.execute(data, TransformDirection::Forward), TransformResult::Success);
    assert_eq!(full.execute(data, TransformDirection::Inverse), TransformResult::Success);
    assert_complex_close(device.complex(buf).unwrap(), &original, 1e-10);
}

#[test]
fn separable_transform_matches_direct_2d_dft() {
    let grid = small_planar_grid();
    let full = full_plan(&grid).unwrap();
    let mut data = vec![Complex64::new(0.0, 0.0); 64];
    // Single excitation at (1, 2) transforms to a plane wave.
    data[1 + 8 * 2] = Complex64::new(1.0, 0.0);
    full.execute(&mut data, TransformDirection::Forward);

    let tau = 2.0 * std::f64::consts::PI;
    let expected: Vec<Complex64> = (0..64)
        .map(|idx| {
            let (kx, ky) = ((idx % 8) as f64, (idx / 8) as f64);
            Complex64::from_polar(1.0, -tau * (kx * 1.0 + ky * 2.0) / 8.0)
        })
        .collect();
    assert_complex_close(&data, &expected, 1e-12);
}

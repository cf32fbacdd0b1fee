//! Files written by the data layer read back to the same values.

use proptest::prelude::*;
use quench_core::Complex64;
use quench_grid::Grid;
use quench_io::{read_complex, read_real, DataWriter, ParamFile, Quantity};
use quench_test_utils::fixtures::small_planar_grid;

#[test]
fn complex_array_at_step_zero() {
    let dir = tempfile::tempdir().unwrap();
    let w = DataWriter::new(dir.path()).unwrap();
    let data = [
        Complex64::new(1.0, -1.0),
        Complex64::new(0.1, 0.2),
        Complex64::new(-3.5e-12, 7.25e20),
        Complex64::new(0.0, 0.0),
    ];
    let (re, im) = w.write_complex("wfc", &data, 0).unwrap();
    assert_eq!(re, dir.path().join("wfc_0"));
    assert_eq!(im, dir.path().join("wfci_0"));
    assert_eq!(read_complex(&re, &im, 4).unwrap(), data);
}

#[test]
fn params_ini_lists_stored_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("params.ini");
    let mut grid = Grid::new();
    grid.store_int("xDim", 256);
    grid.store_double("dx", 0.1);
    grid.write(&path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.lines().any(|l| l == "xDim = 256"));
    assert!(text.lines().any(|l| l == "dx = 0.1"));

    let parsed = ParamFile::read(&path).unwrap();
    assert_eq!(parsed.ints["xDim"], 256);
    assert_eq!(parsed.doubles["dx"], 0.1);
}

#[test]
fn string_values_keep_newlines_and_padding() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("params.ini");
    let mut grid = Grid::new();
    grid.store_string("title", "line one\nline two");
    grid.store_string("label", "  padded  ");
    grid.store_string("dir", "C:\\runs\\a");
    grid.write(&path).unwrap();

    let mut restored = Grid::new();
    ParamFile::read(&path).unwrap().apply(&mut restored);
    assert_eq!(restored.sval("title").unwrap(), "line one\nline two");
    assert_eq!(restored.sval("label").unwrap(), "  padded  ");
    assert_eq!(restored.sval("dir").unwrap(), "C:\\runs\\a");
}

#[test]
fn params_dat_restores_a_built_grid() {
    let dir = tempfile::tempdir().unwrap();
    let w = DataWriter::new(dir.path()).unwrap();
    let mut grid = small_planar_grid();
    grid.selection_mut().potential = "torus_V".into();
    let path = w.write_params(&grid).unwrap();
    assert!(path.ends_with("Params.dat"));

    let mut restored = Grid::new();
    ParamFile::read(&path).unwrap().apply(&mut restored);
    for (key, value) in grid.iter() {
        if grid.is_array(key) || grid.is_complex_array(key) {
            continue;
        }
        assert_eq!(restored.kind(key), Some(value.kind()), "{key}");
    }
    assert_eq!(restored.dval("mass").unwrap(), grid.dval("mass").unwrap());
    assert_eq!(restored.dval("Rxy").unwrap(), grid.dval("Rxy").unwrap());
    assert_eq!(restored.selection(), grid.selection());
}

#[test]
fn coordinates_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let w = DataWriter::new(dir.path()).unwrap();
    let grid = small_planar_grid();
    w.write_coords(&grid).unwrap();
    let x = read_real(dir.path().join("x_0"), 8).unwrap();
    assert_eq!(x, grid.coords().x);
}

proptest! {
    #[test]
    fn real_values_survive_text(values in proptest::collection::vec(any::<f64>().prop_filter("finite", |v| v.is_finite()), 1..32)) {
        let dir = tempfile::tempdir().unwrap();
        let w = DataWriter::new(dir.path()).unwrap();
        let path = w.write_quantity(Quantity::V, &values, 1).unwrap();
        let back = read_real(&path, values.len()).unwrap();
        let same = back.iter().zip(&values).all(|(a, b)| a.to_bits() == b.to_bits());
        prop_assert!(same);
    }
}

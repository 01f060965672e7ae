//! Integration tests for loading and querying the Te grid from disk.

use std::fs;
use std::path::Path;

use te_model::{GridVariant, TeModel, TeModelError};

/// Write a synthetic xyz file for a variant: cell centers in raster order,
/// values from `value_of(row, col)`.
fn write_grid(
    path: &Path,
    variant: GridVariant,
    value_of: impl Fn(usize, usize) -> String,
) {
    let (rows, cols) = (variant.rows(), variant.cols());
    let (dlat, dlon) = (variant.cell_height(), variant.cell_width());
    let mut text = String::new();
    for row in 0..rows {
        for col in 0..cols {
            let lon = -180.0 + dlon * (col as f64 + 0.5);
            let lat = 90.0 - dlat * (row as f64 + 0.5);
            text.push_str(&format!("{} {} {}\n", lon, lat, value_of(row, col)));
        }
    }
    fs::write(path, text).unwrap();
}

#[test]
fn test_load_from_directory_by_variant() {
    let dir = tempfile::tempdir().unwrap();
    write_grid(
        &dir.path().join(GridVariant::Coarse.file_name()),
        GridVariant::Coarse,
        |row, col| format!("{}", row * 1000 + col),
    );

    let model = TeModel::from_dir(dir.path(), GridVariant::Coarse).unwrap();
    assert_eq!(model.variant(), GridVariant::Coarse);
    assert_eq!(model.raster().rows(), 90);
    assert_eq!(model.raster().cols(), 180);
}

#[test]
fn test_point_query_scenario() {
    // Row 0 holds the northernmost band; the cell centered on lat 89.5,
    // lon -179.5 carries 42.0 and must come back from a query at its center.
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("te.xyz");
    write_grid(&path, GridVariant::Fine, |row, col| {
        if row == 0 && col == 0 {
            "42.0".to_string()
        } else {
            "7.5".to_string()
        }
    });

    let model = TeModel::from_file(&path, GridVariant::Fine).unwrap();
    assert_eq!(model.get_value(89.5, -179.5).unwrap(), 42.0);
    assert_eq!(model.get_value(89.5, -178.5).unwrap(), 7.5);

    // The same cell through the single-step wraparound.
    assert_eq!(model.get_value(89.5, 180.5).unwrap(), 42.0);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = TeModel::from_dir(dir.path(), GridVariant::Coarse).unwrap_err();
    match err {
        TeModelError::Io { path, .. } => {
            assert!(path.ends_with("te_global.xyz"));
        }
        other => panic!("expected Io, got {:?}", other),
    }
}

#[test]
fn test_truncated_file_leaves_no_model() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("truncated.xyz");
    fs::write(&path, "0.5 0.5 1.0\n1.5 0.5 2.0\n").unwrap();

    let err = TeModel::from_file(&path, GridVariant::Coarse).unwrap_err();
    assert!(matches!(err, TeModelError::ShapeMismatch { found: 2, .. }));
}

#[test]
fn test_masked_variant_yields_nan_where_unmasked_is_finite() {
    let dir = tempfile::tempdir().unwrap();

    // Identical grids except the masked variant NaNs out one biased cell.
    write_grid(
        &dir.path().join(GridVariant::Fine.file_name()),
        GridVariant::Fine,
        |row, col| {
            if row == 100 && col == 200 {
                "31.0".to_string()
            } else {
                "12.0".to_string()
            }
        },
    );
    write_grid(
        &dir.path().join(GridVariant::FineMasked.file_name()),
        GridVariant::FineMasked,
        |row, col| {
            if row == 100 && col == 200 {
                "NaN".to_string()
            } else {
                "12.0".to_string()
            }
        },
    );

    let unmasked = TeModel::from_dir(dir.path(), GridVariant::Fine).unwrap();
    let masked = TeModel::from_dir(dir.path(), GridVariant::FineMasked).unwrap();

    // Cell (100, 200) centers on lat -10.5, lon 20.5.
    let (lat, lon) = (-10.5, 20.5);
    assert_eq!(unmasked.resolve_index(lat, lon), (100, 200));
    assert_eq!(unmasked.get_value(lat, lon).unwrap(), 31.0);
    assert!(masked.get_value(lat, lon).unwrap().is_nan());
}

#[test]
fn test_concurrent_queries() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("te.xyz");
    write_grid(&path, GridVariant::Coarse, |row, col| {
        format!("{}", row + col)
    });
    let model = TeModel::from_file(&path, GridVariant::Coarse).unwrap();

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for i in 0..500 {
                    let lat = -89.0 + (i % 179) as f64;
                    let lon = -179.0 + (i % 359) as f64;
                    model.get_value(lat, lon).unwrap();
                }
            });
        }
    });
}

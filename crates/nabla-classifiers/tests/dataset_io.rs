//! Integration tests for dataset handling and the CSV image reader.

use std::io::Write;

use ndarray::{Array1, Array4};

use nabla_classifiers::dataset::{synthetic, ImageDataset};
use nabla_classifiers::error::DatasetError;
use nabla_classifiers::io::{load_dataset_csv, read_image_csv, CsvImageConfig};

fn small_config() -> CsvImageConfig {
    CsvImageConfig {
        delimiter: b',',
        has_headers: false,
        image_side: 2,
        channels: 1,
    }
}

fn write_file(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    write!(file, "{}", contents).unwrap();
    path
}

// ---------------------------------------------------------------------------
// read_image_csv
// ---------------------------------------------------------------------------

#[test]
fn read_small_csv_dataset() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "train.csv", "1,10,20,30,40\n0,50,60,70,80\n");

    let (images, labels) = read_image_csv(&path, &small_config()).unwrap();
    assert_eq!(images.dim(), (2, 2, 2, 1));
    assert_eq!(labels.to_vec(), vec![1, 0]);
    assert_eq!(images[[0, 0, 0, 0]], 10);
    assert_eq!(images[[0, 1, 1, 0]], 40);
    assert_eq!(images[[1, 0, 1, 0]], 60);
}

#[test]
fn read_rejects_label_out_of_range() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "bad_label.csv", "2,10,20,30,40\n");

    let err = read_image_csv(&path, &small_config()).unwrap_err();
    assert!(
        matches!(
            err.downcast_ref::<DatasetError>(),
            Some(DatasetError::LabelOutOfRange { row: 1, value: 2 })
        ),
        "unexpected error: {:#}",
        err
    );
}

#[test]
fn read_rejects_wrong_pixel_count() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "short_row.csv", "1,10,20,30\n");

    let err = read_image_csv(&path, &small_config()).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<DatasetError>(),
        Some(DatasetError::PixelCountMismatch {
            row: 1,
            expected: 4,
            found: 3
        })
    ));
}

#[test]
fn read_rejects_empty_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "empty.csv", "");

    let err = read_image_csv(&path, &small_config()).unwrap_err();
    assert!(err.to_string().contains("No examples"));
}

#[test]
fn read_rejects_non_numeric_pixel() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "nan.csv", "1,10,abc,30,40\n");

    let err = read_image_csv(&path, &small_config()).unwrap_err();
    assert!(err.to_string().contains("Invalid pixel value"));
}

#[test]
fn read_supports_tab_delimiter() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "train.tsv", "0\t1\t2\t3\t4\n");

    let config = CsvImageConfig {
        delimiter: b'\t',
        ..small_config()
    };
    let (images, labels) = read_image_csv(&path, &config).unwrap();
    assert_eq!(images.dim(), (1, 2, 2, 1));
    assert_eq!(labels.to_vec(), vec![0]);
}

// ---------------------------------------------------------------------------
// load_dataset_csv / ImageDataset
// ---------------------------------------------------------------------------

#[test]
fn load_dataset_round_trips_to_matrices() {
    let dir = tempfile::tempdir().unwrap();
    let train = write_file(&dir, "train.csv", "1,255,0,255,0\n0,0,255,0,255\n");
    let test = write_file(&dir, "test.csv", "1,255,255,255,255\n");

    let dataset = load_dataset_csv(
        &train,
        &test,
        &small_config(),
        vec!["negative".into(), "positive".into()],
    )
    .unwrap();

    assert_eq!(dataset.num_px(), 2);
    let data = dataset.to_matrices();
    assert_eq!(data.train_x.dim(), (4, 2));
    assert_eq!(data.test_x.dim(), (4, 1));
    assert_eq!(data.train_y.to_vec(), vec![1.0, 0.0]);
    // pixels scaled into [0, 1]
    assert_eq!(data.train_x[[0, 0]], 1.0);
    assert_eq!(data.train_x[[1, 0]], 0.0);
    assert_eq!(data.test_x[[3, 0]], 1.0);
}

#[test]
fn dataset_new_rejects_length_mismatch() {
    let images = Array4::<u8>::zeros((3, 2, 2, 1));
    let labels = Array1::from_vec(vec![0u8, 1]);
    let err = ImageDataset::new(
        images.clone(),
        labels,
        images,
        Array1::from_vec(vec![0, 1, 0]),
        vec![],
    );
    assert!(matches!(
        err,
        Err(DatasetError::LengthMismatch {
            images: 3,
            labels: 2
        })
    ));
}

// ---------------------------------------------------------------------------
// synthetic generator
// ---------------------------------------------------------------------------

#[test]
fn synthetic_dataset_is_linearly_separable_by_brightness() {
    let ds = synthetic(20, 10, 4, 1, 42);
    // class means are far apart, so per-image pixel means should split cleanly
    for (image, &label) in ds.train_x.outer_iter().zip(ds.train_y.iter()) {
        let mean: f32 =
            image.iter().map(|&v| v as f32).sum::<f32>() / image.len() as f32;
        if label == 1 {
            assert!(mean > 125.0, "positive image too dark: mean {}", mean);
        } else {
            assert!(mean < 125.0, "negative image too bright: mean {}", mean);
        }
    }
}

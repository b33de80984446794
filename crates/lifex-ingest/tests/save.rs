//! Tests for the CSV saver.

use lifex_ingest::save_observations;
use lifex_model::Observation;

fn observation(region: &str, year: i32, value: f64) -> Observation {
    Observation {
        unit: "YR".to_string(),
        sex: "F".to_string(),
        age: "Y_GE85".to_string(),
        region: region.to_string(),
        year,
        value,
    }
}

#[test]
fn writes_header_and_rows_without_an_index_column() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("clean.csv");

    let observations = vec![observation("PT", 2019, 81.2), observation("PT", 2020, 81.5)];
    save_observations(&observations, &path).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert_eq!(
        contents,
        "unit,sex,age,region,year,value\n\
         YR,F,Y_GE85,PT,2019,81.2\n\
         YR,F,Y_GE85,PT,2020,81.5\n"
    );
}

#[test]
fn an_empty_table_still_gets_a_header() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("clean.csv");

    save_observations(&[], &path).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert_eq!(contents, "unit,sex,age,region,year,value\n");
}

#[test]
fn overwrites_an_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("clean.csv");
    std::fs::write(&path, "stale contents\n").unwrap();

    save_observations(&[observation("PT", 2020, 80.0)], &path).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.starts_with("unit,sex,age,region,year,value\n"));
    assert!(!contents.contains("stale"));
}

#[test]
fn an_invalid_target_path_is_a_typed_error_not_a_panic() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no-such-dir").join("clean.csv");

    let error = save_observations(&[observation("PT", 2020, 80.0)], &path).unwrap_err();

    assert_eq!(error.path, path);
    assert!(!error.message.is_empty());
}

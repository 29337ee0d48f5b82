use std::io::Write;
use std::path::Path;

use carsales_core::Value;
use tempfile::{NamedTempFile, TempDir};

use super::MockStore;
use crate::error::ServiceError;
use crate::ingest::{load_csv, read_csv};

fn csv_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn columns(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| (*n).to_owned()).collect()
}

#[tokio::test]
async fn test_load_appends_once_with_supplied_columns() {
    let file = csv_file("make,model,year,sales\nToyota,Camry,2021,100\nHonda,Civic,2022,150\n");
    let cols = columns(&["Make", "Model", "Year", "Sales_Volume"]);
    let store = MockStore::default();

    let inserted = load_csv(file.path(), &store, "consumer_data", &cols).await.unwrap();

    assert_eq!(inserted, 2);
    let appends = store.appends();
    assert_eq!(appends.len(), 1);
    let (table, data) = &appends[0];
    assert_eq!(table, "consumer_data");
    assert_eq!(data.columns(), cols.as_slice());
    assert_eq!(data.len(), 2);
    assert_eq!(
        data.rows()[0],
        vec![Value::from("Toyota"), Value::from("Camry"), Value::Integer(2021), Value::Integer(100)]
    );
}

#[tokio::test]
async fn test_header_only_file_is_empty_input() {
    let file = csv_file("Make,Model,Year,Sales_Volume\n");
    let store = MockStore::default();

    let err = load_csv(file.path(), &store, "consumer_data", &columns(&["Make", "Model", "Year", "Sales_Volume"]))
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::EmptyInput { .. }));
    assert!(err.to_string().contains("is empty"));
    assert!(store.appends().is_empty());
}

#[tokio::test]
async fn test_zero_byte_file_is_empty_input() {
    let file = csv_file("");
    let store = MockStore::default();

    let err = load_csv(file.path(), &store, "car_data", &columns(&["Make"])).await.unwrap_err();

    assert!(matches!(err, ServiceError::EmptyInput { .. }));
    assert!(store.appends().is_empty());
}

#[tokio::test]
async fn test_missing_file_is_not_found() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.csv");
    let store = MockStore::default();

    let err = load_csv(&path, &store, "car_data", &columns(&["Make"])).await.unwrap_err();

    match err {
        ServiceError::FileNotFound { path: reported } => assert_eq!(reported, path),
        other => panic!("expected FileNotFound, got {other:?}"),
    }
    assert!(store.appends().is_empty());
}

#[tokio::test]
async fn test_loading_twice_duplicates_rows() {
    let file = csv_file("h1,h2\na,1\n");
    let cols = columns(&["Make", "Year"]);
    let store = MockStore::default();

    load_csv(file.path(), &store, "car_data", &cols).await.unwrap();
    load_csv(file.path(), &store, "car_data", &cols).await.unwrap();

    assert_eq!(store.appends().len(), 2);
}

#[test]
fn test_first_line_is_discarded_even_if_it_looks_like_data() {
    let file = csv_file("Ford,F150,2020\nToyota,Camry,2021\n");

    let data = read_csv(file.path(), &columns(&["Make", "Model", "Year"])).unwrap();

    assert_eq!(data.len(), 1);
    assert_eq!(data.rows()[0][0], Value::from("Toyota"));
}

#[test]
fn test_ragged_row_is_rejected() {
    let file = csv_file("a,b,c\nToyota,Camry\n");

    let err = read_csv(file.path(), &columns(&["Make", "Model", "Year"])).unwrap_err();

    assert!(matches!(
        err,
        ServiceError::InvalidInput(ref msg) if msg.contains("line 2: 2 fields, expected 3")
    ));
}

#[test]
fn test_text_whitespace_is_kept() {
    let file = csv_file("make,model,year
 Toyota,Camry ,  2021
");

    let data = read_csv(file.path(), &columns(&["Make", "Model", "Year"])).unwrap();

    assert_eq!(data.rows()[0][0], Value::from(" Toyota"));
    assert_eq!(data.rows()[0][1], Value::from("Camry "));
    assert_eq!(data.rows()[0][2], Value::Integer(2021));
}

#[test]
fn test_types_are_inferred_per_column() {
    let file = csv_file(
        "Country,Make,Model,Year,Review_Score,Sales_Volume\n\
         USA,Ford,F150,2021,4,300\n\
         Japan,Toyota,Camry,2022,4.5,\n",
    );
    let cols = columns(&["Country", "Make", "Model", "Year", "Review_Score", "Sales_Volume"]);

    let data = read_csv(file.path(), &cols).unwrap();

    assert_eq!(data.rows()[0][4], Value::Float(4.0));
    assert_eq!(data.rows()[1][4], Value::Float(4.5));
    assert_eq!(data.rows()[0][5], Value::Integer(300));
    assert_eq!(data.rows()[1][5], Value::Null);
}

#[test]
fn test_duplicate_columns_rejected_before_reading() {
    let err = read_csv(Path::new("/nonexistent.csv"), &columns(&["Make", "Make"])).unwrap_err();
    assert!(matches!(err, ServiceError::InvalidInput(_)));
}

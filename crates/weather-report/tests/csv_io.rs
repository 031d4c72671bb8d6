// File: crates/weather-report/tests/csv_io.rs
// Purpose: CSV column loading and fitted-line export round trip through temp files.

use std::path::PathBuf;

use weather_report::export::write_fitted_csv;
use weather_report::{load_series_csv, series_report, ColumnSelection};

fn write_input(dir: &tempfile::TempDir, body: &str) -> PathBuf {
    let path = dir.path().join("input.csv");
    std::fs::write(&path, body).expect("write input");
    path
}

#[test]
fn loads_labelled_column() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_input(&dir, "Year, Days\n2010,10\n2011,20\n2012,n/a\n2013,30\n");
    let cols = ColumnSelection { value: None, label: Some("year".into()) };
    let s = load_series_csv(&path, &cols).expect("load");
    assert_eq!(s.label, "days");
    assert_eq!(s.values, vec![10.0, 20.0, 30.0]);
    assert_eq!(s.categories, vec!["2010", "2011", "2013"]);
    assert_eq!(s.slope().expect("slope"), 10.0);
}

#[test]
fn explicit_column_without_labels() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_input(&dir, "year,days,rain\n2010,1,5\n2011,2,5\n2012,3,5\n");
    let cols = ColumnSelection { value: Some("RAIN".into()), label: None };
    let s = load_series_csv(&path, &cols).expect("load");
    assert_eq!(s.values, vec![5.0, 5.0, 5.0]);
    assert!(s.categories.is_empty());
    assert_eq!(s.category(1), "1");
    assert_eq!(s.slope().expect("slope"), 0.0);
}

#[test]
fn missing_column_is_reported() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_input(&dir, "year,days\n2010,1\n");
    let cols = ColumnSelection { value: Some("wind".into()), label: None };
    let err = load_series_csv(&path, &cols).unwrap_err();
    assert!(err.to_string().contains("column 'wind' not found"), "{err}");
}

#[test]
fn too_few_rows_fail_at_the_trend() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_input(&dir, "days\n7\n");
    let s = load_series_csv(&path, &ColumnSelection::default()).expect("load");
    assert_eq!(s.len(), 1);
    assert!(series_report(&s).is_err());
}

#[test]
fn fitted_csv_round_trip() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_input(&dir, "month,mm\nJan,50\nFeb,70\nMar,60\n");
    let cols = ColumnSelection { value: Some("mm".into()), label: Some("month".into()) };
    let s = load_series_csv(&path, &cols).expect("load");

    let out = dir.path().join("out/fitted.csv");
    write_fitted_csv(&s, &out).expect("export");

    let mut rdr = csv::Reader::from_path(&out).expect("open export");
    let headers = rdr.headers().expect("headers").clone();
    assert_eq!(headers.iter().collect::<Vec<_>>(), vec!["category", "value", "fitted"]);
    let rows: Vec<csv::StringRecord> = rdr.records().collect::<Result<_, _>>().expect("rows");
    assert_eq!(rows.len(), 3);
    // slope is 5: (-1 * -10 + 0 + 1 * 0) / 2
    assert_eq!(rows[0].iter().collect::<Vec<_>>(), vec!["Jan", "50", "50"]);
    assert_eq!(rows[2].iter().collect::<Vec<_>>(), vec!["Mar", "60", "60"]);
    assert_eq!(&rows[1][2], "55");
}

#[test]
fn non_finite_cells_are_skipped() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_input(&dir, "year,days\n2010,10\n2011,NaN\n2012,30\n2013,inf\n2014,-inf\n2015,20\n");
    let cols = ColumnSelection { value: Some("days".into()), label: Some("year".into()) };
    let s = load_series_csv(&path, &cols).expect("load");
    assert_eq!(s.values, vec![10.0, 30.0, 20.0]);
    assert_eq!(s.categories, vec!["2010", "2012", "2015"]);
    assert!(s.values.iter().all(|v| v.is_finite()));

    let text = series_report(&s).expect("report").to_string();
    assert!(!text.contains("NaN"), "{text}");
    assert!(text.contains("Slope: +5.0000 per step"), "{text}");
}

#[test]
fn year_column_is_not_auto_selected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_input(&dir, "Year,Days\n2010,89\n2011,98\n2012,112\n2013,108\n");
    let s = load_series_csv(&path, &ColumnSelection::default()).expect("load");
    assert_eq!(s.label, "days");
    assert_eq!(s.values, vec![89.0, 98.0, 112.0, 108.0]);
}

#[test]
fn index_like_column_is_used_when_it_is_the_only_one() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_input(&dir, "name,count\na,1\nb,2\nc,3\n");
    let s = load_series_csv(&path, &ColumnSelection::default()).expect("load");
    assert_eq!(s.label, "count");
    assert_eq!(s.slope().expect("slope"), 1.0);
}

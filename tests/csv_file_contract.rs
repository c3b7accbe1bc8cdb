//! File-level contract tests for the CSV reader/writer pair.

use kitbag::{CsvReader, CsvWriter, HeaderSet};

#[test]
fn test_export_then_import_round_trips_cells() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("widgets.csv");

    let mut writer = CsvWriter::new(HeaderSet::from(&["Id", "Item", "Price"][..]));
    let row = writer.add_row();
    row.set_index(0, 145678).unwrap();
    row.set("item", "This is a widget").unwrap();
    row.set("Price", 15.21).unwrap();
    let row = writer.add_row();
    row.set("Id", 2).unwrap();
    row.set("Item", "comma, inside").unwrap();

    let written = writer.export(&path).unwrap();
    assert_eq!(written, 2);

    let rows = CsvReader::new().import(&path).unwrap();
    assert_eq!(rows.len(), 2);

    let first = rows.get_row(0).unwrap();
    assert_eq!(first.get("ID").unwrap(), Some("145678"));
    assert_eq!(first.get_index(1).unwrap(), Some("This is a widget"));
    assert_eq!(first.get("price").unwrap(), Some("15.21"));

    let second = rows.get_row(1).unwrap();
    assert_eq!(second.get("Item").unwrap(), Some("comma, inside"));
    assert_eq!(second.get("Price").unwrap(), None);
}

#[test]
fn test_exported_file_quotes_every_field() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.csv");

    let mut writer = CsvWriter::new(HeaderSet::from(&["A", "B"][..]));
    let row = writer.add_row();
    row.set("A", "plain").unwrap();
    row.set("B", "say \"hi\"").unwrap();
    writer.export(&path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let mut lines = content.lines();
    assert_eq!(lines.next().unwrap(), "\"A\",\"B\"");
    assert_eq!(lines.next().unwrap(), "\"plain\",\"say \"\"hi\"\"\"");
}

#[test]
fn test_embedded_quotes_round_trip_through_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("quotes.csv");

    let mut writer = CsvWriter::new(HeaderSet::from(&["Note"][..]));
    writer.add_row().set("Note", "she said \"yes, now\"").unwrap();
    writer.export(&path).unwrap();

    let rows = CsvReader::new().import(&path).unwrap();
    assert_eq!(
        rows.get_row(0).unwrap().get("Note").unwrap(),
        Some("she said \"yes, now\"")
    );
}

#[test]
fn test_semicolon_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("semi.csv");

    let mut writer = CsvWriter::new(HeaderSet::from(&["X", "Y"][..]));
    let row = writer.add_row();
    row.set("X", "a;b").unwrap();
    row.set("Y", 9).unwrap();
    writer.export_with_delimiter(&path, b';').unwrap();

    let rows = CsvReader::new()
        .import_with_delimiter(&path, b';')
        .unwrap();
    let row = rows.get_row(0).unwrap();
    assert_eq!(row.get("X").unwrap(), Some("a;b"));
    assert_eq!(row.get("Y").unwrap(), Some("9"));
}

#[test]
fn test_auto_detect_import_on_semicolon_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("auto.csv");
    std::fs::write(&path, "id;name\n1;Alice\n2;Bob\n").unwrap();

    let rows = CsvReader::new().import_auto(&path).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows.get_row(1).unwrap().get("name").unwrap(), Some("Bob"));
}

#[test]
fn test_import_supplied_headers_from_headerless_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("raw.csv");
    std::fs::write(&path, "1,Alice\n2,Bob\n").unwrap();

    let reader = CsvReader::new().with_headers(vec!["Id".into(), "Name".into()]);
    let rows = reader.import(&path).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows.get_row(0).unwrap().get("NAME").unwrap(), Some("Alice"));
}

#[test]
fn test_import_non_utf8_content_is_lossy_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("latin1.csv");
    // "Name\nCafé" with a Latin-1 é byte
    std::fs::write(&path, b"Name\nCaf\xe9\n").unwrap();

    let rows = CsvReader::new().import(&path).unwrap();
    assert_eq!(rows.len(), 1);
    let cell = rows.get_row(0).unwrap().get("Name").unwrap().unwrap();
    assert!(cell.starts_with("Caf"));
}

#[test]
fn test_import_empty_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.csv");
    std::fs::write(&path, "").unwrap();

    let rows = CsvReader::new().import(&path).unwrap();
    assert!(rows.is_empty());
}

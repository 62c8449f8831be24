use har2xlsx::commands::{execute_convert, ConvertArgs};
use har2xlsx::output::write_workbook;
use har2xlsx::projector::OutputRow;
use har2xlsx::utils::config::HEADERS;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::fs::{self, File};
use std::io::Read;
use std::path::Path;
use zip::ZipArchive;

#[derive(Debug, PartialEq)]
enum Cell {
    Text(String),
    Number(f64),
}

/// (reference, value, has a cell style)
type SheetCell = (String, Cell, bool);

fn read_part(path: &Path, name: &str) -> String {
    let mut archive = ZipArchive::new(File::open(path).unwrap()).unwrap();
    let mut xml = String::new();
    archive.by_name(name).unwrap().read_to_string(&mut xml).unwrap();
    xml
}

fn shared_strings(xml: &str) -> Vec<String> {
    xml.split("<si>")
        .skip(1)
        .map(|si| {
            let start = si.find('>').unwrap() + 1;
            let end = si.find("</t>").unwrap();
            si[start..end].to_string()
        })
        .collect()
}

fn sheet_cells(path: &Path) -> Vec<SheetCell> {
    let strings = shared_strings(&read_part(path, "xl/sharedStrings.xml"));
    let sheet = read_part(path, "xl/worksheets/sheet1.xml");

    sheet
        .split("<c r=\"")
        .skip(1)
        .map(|c| {
            let reference = c[..c.find('"').unwrap()].to_string();
            let attrs = &c[..c.find('>').unwrap()];
            let raw = &c[c.find("<v>").unwrap() + 3..c.find("</v>").unwrap()];
            let value = if attrs.contains("t=\"s\"") {
                Cell::Text(strings[raw.parse::<usize>().unwrap()].clone())
            } else {
                Cell::Number(raw.parse().unwrap())
            };
            (reference, value, attrs.contains(" s=\""))
        })
        .collect()
}

fn text(reference: &str, value: &str) -> SheetCell {
    (reference.to_string(), Cell::Text(value.to_string()), false)
}

fn header_cells() -> Vec<SheetCell> {
    ["A", "B", "C", "D", "E", "F", "G", "H"]
        .iter()
        .zip(HEADERS)
        .map(|(col, title)| (format!("{}1", col), Cell::Text(title.to_string()), true))
        .collect()
}

fn row(started_at: &str, url: &str, total: &str, status: i64) -> OutputRow {
    OutputRow {
        started_at: started_at.to_string(),
        method: "POST".to_string(),
        url: url.to_string(),
        total_time: total.to_string(),
        post_data_text: "name=demo".to_string(),
        status,
        status_text: "Created".to_string(),
        content_text: "done".to_string(),
    }
}

#[test]
fn test_workbook_layout_and_cell_types() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.xlsx");
    let rows = vec![
        row("2024-01-01T09:00:00+09:00", "https://example.com/a", "19.50", 201),
        row("2024-01-01T09:00:05+09:00", "https://example.com/b", "0.25", 404),
    ];

    write_workbook(&rows, &path).unwrap();

    let mut expected = header_cells();
    expected.extend([
        text("A2", "2024-01-01T09:00:00+09:00"),
        text("B2", "POST"),
        text("C2", "https://example.com/a"),
        text("D2", "19.50"),
        text("E2", "name=demo"),
        ("F2".to_string(), Cell::Number(201.0), false),
        text("G2", "Created"),
        text("H2", "done"),
        text("A3", "2024-01-01T09:00:05+09:00"),
        text("B3", "POST"),
        text("C3", "https://example.com/b"),
        text("D3", "0.25"),
        text("E3", "name=demo"),
        ("F3".to_string(), Cell::Number(404.0), false),
        text("G3", "Created"),
        text("H3", "done"),
    ]);
    assert_eq!(sheet_cells(&path), expected);
}

#[test]
fn test_workbook_single_named_sheet_with_bold_header() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.xlsx");

    write_workbook(&[], &path).unwrap();

    let workbook = read_part(&path, "xl/workbook.xml");
    assert_eq!(workbook.matches("<sheet ").count(), 1);
    assert!(workbook.contains("<sheet name=\"HAR Data\""));
    assert!(read_part(&path, "xl/styles.xml").contains("<b/>"));
    assert_eq!(sheet_cells(&path), header_cells());
}

#[test]
fn test_skipped_entry_leaves_no_gap() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("capture.har");
    let har = json!({
        "log": {
            "entries": [
                { "startedDateTime": "2024-01-01T00:00:00Z", "request": { "method": "GET", "url": "https://a" } },
                { "startedDateTime": "2024-01-01 00:00:01Z", "request": { "method": "GET", "url": "https://b" } },
                { "startedDateTime": "2024-01-01T00:00:02Z", "request": { "method": "GET", "url": "https://c" } }
            ]
        }
    });
    fs::write(&input, har.to_string()).unwrap();
    let args = ConvertArgs {
        input,
        output: dir.path().join("report.xlsx"),
        print_summary: false,
    };

    let report = execute_convert(&args).unwrap();
    assert_eq!(report.skipped, 1);

    let urls: Vec<SheetCell> = sheet_cells(&args.output)
        .into_iter()
        .filter(|(reference, _, _)| reference.starts_with('C') && reference != "C1")
        .collect();
    assert_eq!(urls, vec![text("C2", "https://a"), text("C3", "https://c")]);
}

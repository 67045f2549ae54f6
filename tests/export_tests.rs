use predicates::str::contains;
use std::fs;

mod common;
use common::{Sandbox, xlsx_part};

#[test]
fn test_export_csv_with_trailers() {
    let sb = Sandbox::new();
    sb.add_workday("2025-09-01");
    let out = sb.out("hours.csv");

    sb.cmd()
        .args(["export", "--format", "csv", "--file", &out])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read exported csv");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 1 + 3 + 3);
    assert_eq!(lines[0], "owner,date,project,category,start,end,hours");
    assert_eq!(lines[2], ",2025-09-01,General,Break,12:00,12:30,0.50");
    assert_eq!(lines[4], ",,,,,Total work,8.00");
    assert_eq!(lines[5], ",,,,,Total break,0.50");
    assert_eq!(lines[6], ",,,,,Overtime,0.00");
}

#[test]
fn test_export_json() {
    let sb = Sandbox::new();
    sb.add_workday("2025-09-01");
    let out = sb.out("hours.json");

    sb.cmd()
        .args(["export", "--format", "json", "--file", &out])
        .assert()
        .success();

    let v: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out).expect("read exported json"))
            .expect("valid json");
    assert_eq!(v["entries"].as_array().map(Vec::len), Some(3));
    assert_eq!(v["summary"]["work_minutes"], 480);
    assert_eq!(v["summary"]["break_minutes"], 30);
    assert_eq!(v["summary"]["overtime_hours"], 0.0);
}

#[test]
fn test_export_xlsx_is_default_format() {
    let sb = Sandbox::new();
    sb.add_workday("2025-09-01");
    let out = sb.out("hours.xlsx");

    sb.cmd()
        .args(["export", "--file", &out])
        .assert()
        .success()
        .stdout(contains("XLSX export completed"));

    let path = std::path::Path::new(&out);
    assert!(xlsx_part(path, "xl/workbook.xml").contains("name=\"Work hours\""));

    let strings = xlsx_part(path, "xl/sharedStrings.xml");
    for label in ["owner", "hours", "Total work", "Total break", "Overtime"] {
        assert!(strings.contains(&format!(">{label}</t>")), "missing {label}");
    }

    // 2025-09-01 as an Excel date serial, 09:00 as a day fraction
    let sheet = xlsx_part(path, "xl/worksheets/sheet1.xml");
    assert!(sheet.contains("<v>45901</v>"));
    assert!(sheet.contains("<v>0.375</v>"));
}

#[test]
fn test_export_empty_ledger_writes_nothing() {
    let sb = Sandbox::new();
    let out = sb.out("empty.xlsx");

    sb.cmd()
        .args(["export", "--file", &out])
        .assert()
        .success()
        .stdout(contains("No entries to export."));

    assert!(!std::path::Path::new(&out).exists());
}

#[test]
fn test_export_existing_file_needs_confirmation() {
    let sb = Sandbox::new();
    sb.add_workday("2025-09-01");
    let out = sb.out("hours.csv");
    fs::write(&out, "keep me").expect("seed file");

    sb.cmd()
        .args(["export", "--format", "csv", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("export cancelled"));
    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");

    sb.cmd()
        .args(["export", "--format", "csv", "--file", &out])
        .write_stdin("y\n")
        .assert()
        .success();
    assert!(fs::read_to_string(&out).unwrap().starts_with("owner,"));

    fs::write(&out, "again").expect("seed file");
    sb.cmd()
        .args(["export", "--format", "csv", "--file", &out, "--force"])
        .assert()
        .success();
    assert!(fs::read_to_string(&out).unwrap().contains("Total work"));
}

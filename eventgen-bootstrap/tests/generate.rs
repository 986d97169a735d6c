use std::collections::BTreeMap;
use std::fs::File;
use std::io::{Cursor, Read};
use std::path::Path;

use chrono::NaiveDate;
use zip::ZipArchive;

use eventgen_application::CancelFlag;
use eventgen_bootstrap::{run_with_cancel, GeneratorContext, RunOptions};
use eventgen_domain::{Event, EventType};

fn options(dir: &Path, count: u32, start_date: &str, seed: u64) -> RunOptions {
    RunOptions {
        count,
        output_dir: Some(dir.to_string_lossy().to_string()),
        start_date: Some(start_date.to_string()),
        seed: Some(seed),
        config: None,
    }
}

async fn generate(options: RunOptions) -> anyhow::Result<eventgen_application::RunSummary> {
    let context = GeneratorContext::new(&options).await?;
    run_with_cancel(context, CancelFlag::default()).await
}

fn read_entries<R: Read + std::io::Seek>(mut archive: ZipArchive<R>) -> Vec<(String, Vec<u8>)> {
    (0..archive.len())
        .map(|index| {
            let mut file = archive.by_index(index).expect("entry");
            let mut bytes = Vec::new();
            file.read_to_end(&mut bytes).expect("read entry");
            (file.name().to_string(), bytes)
        })
        .collect()
}

/// Weekly archive path -> day name -> part name -> part JSON text.
fn unpack(path: &Path) -> BTreeMap<String, Vec<(String, String)>> {
    let weekly = ZipArchive::new(File::open(path).expect("open weekly")).expect("weekly zip");
    read_entries(weekly)
        .into_iter()
        .map(|(day, bytes)| {
            let daily = ZipArchive::new(Cursor::new(bytes)).expect("daily zip");
            let parts = read_entries(daily)
                .into_iter()
                .map(|(part, json)| (part, String::from_utf8(json).expect("utf-8 part")))
                .collect();
            (day, parts)
        })
        .collect()
}

#[tokio::test]
async fn one_week_from_reference_date_has_nested_layout() {
    let dir = tempfile::tempdir().expect("tempdir");
    let summary = generate(options(dir.path(), 1, "2023-10-23", 7))
        .await
        .expect("generate");

    let path = dir.path().join("events_week_43.zip");
    assert_eq!(summary.archives.len(), 1);
    assert_eq!(summary.archives[0].path, path);
    assert_eq!(
        summary.archives[0].size_bytes,
        std::fs::metadata(&path).expect("metadata").len()
    );

    let weekly = ZipArchive::new(File::open(&path).expect("open")).expect("zip");
    let day_names: Vec<&str> = weekly.file_names().collect();
    assert_eq!(day_names.len(), 7);

    let days = unpack(&path);
    let expected_days: Vec<String> = (23..=29)
        .map(|day| format!("events_2023-10-{}.zip", day))
        .collect();
    assert_eq!(days.keys().cloned().collect::<Vec<_>>(), expected_days);

    for (day_name, parts) in &days {
        let date = NaiveDate::parse_from_str(&day_name[7..17], "%Y-%m-%d").expect("date in name");
        let part_names: Vec<&str> = parts.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(
            part_names,
            ["part-001.json", "part-002.json", "part-003.json", "part-004.json", "part-005.json"]
        );

        let mut previous = date.and_hms_opt(0, 0, 0).expect("midnight");
        for (_, json) in parts {
            assert!(json.starts_with("[\n  {"), "part is not 2-space indented");
            let raw: Vec<serde_json::Value> = serde_json::from_str(json).expect("json array");
            assert_eq!(raw.len(), 100);
            for value in &raw {
                let object = value.as_object().expect("event object");
                let keys: Vec<&str> = object.keys().map(String::as_str).collect();
                let event: Event = serde_json::from_value(value.clone()).expect("event schema");
                match event.event_type {
                    EventType::Purchase => {
                        assert!(keys.contains(&"quantity"));
                        assert!((1..=3).contains(&event.quantity.expect("quantity")));
                    }
                    _ => assert!(!keys.contains(&"quantity")),
                }
                assert!(event.timestamp > previous, "timestamps must strictly increase");
                assert_eq!(event.timestamp.date(), date);
                previous = event.timestamp;
            }
        }
    }
}

#[tokio::test]
async fn weeks_spanning_new_year_use_iso_week_numbers() {
    let dir = tempfile::tempdir().expect("tempdir");
    let summary = generate(options(dir.path(), 2, "2023-12-28", 11))
        .await
        .expect("generate");

    let numbers: Vec<u32> = summary.archives.iter().map(|a| a.week_number).collect();
    assert_eq!(numbers, [52, 1]);
    assert!(dir.path().join("events_week_52.zip").exists());
    assert!(dir.path().join("events_week_1.zip").exists());

    let second = unpack(&dir.path().join("events_week_1.zip"));
    assert!(second.contains_key("events_2024-01-04.zip"));
    assert!(second.contains_key("events_2024-01-10.zip"));
}

#[tokio::test]
async fn invalid_start_date_writes_nothing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = dir.path().join("data");

    let err = generate(options(&output, 1, "2023-13-40", 1))
        .await
        .expect_err("config error");
    assert!(format!("{:#}", err).contains("invalid configuration"));
    assert!(!output.exists());
}

#[tokio::test]
async fn zero_weeks_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = dir.path().join("data");

    assert!(generate(options(&output, 0, "2023-10-23", 1)).await.is_err());
    assert!(!output.exists());
}

#[tokio::test]
async fn same_seed_reproduces_names_and_content() {
    let first = tempfile::tempdir().expect("tempdir");
    let second = tempfile::tempdir().expect("tempdir");
    generate(options(first.path(), 1, "2023-10-23", 2024))
        .await
        .expect("first run");
    generate(options(second.path(), 1, "2023-10-23", 2024))
        .await
        .expect("second run");

    let name = "events_week_43.zip";
    assert_eq!(unpack(&first.path().join(name)), unpack(&second.path().join(name)));
}

#[tokio::test]
async fn cancelled_run_leaves_no_weekly_archive() {
    let dir = tempfile::tempdir().expect("tempdir");
    let context = GeneratorContext::new(&options(dir.path(), 2, "2023-10-23", 3))
        .await
        .expect("context");
    let cancel = CancelFlag::default();
    cancel.cancel();

    let err = run_with_cancel(context, cancel).await.expect_err("cancelled");
    assert!(err.to_string().contains("cancelled"));
    let written: Vec<_> = std::fs::read_dir(dir.path()).expect("read dir").collect();
    assert!(written.is_empty());
}

//! # Pipeline Integration Tests
//!
//! Extract a directory of pages, pack the books and write the shipment,
//! both through the library and through the `book-packer` binary.

use super::common::test_helpers::{authors, books, data_dir_with_books, fixtures_dir};
use book_packer::config::PackerConfig;
use book_packer::core::{BookSource, ExportFormat, GreedyPacker, ShipmentExporter};
use book_packer::export::ExportService;
use book_packer::extract::BookExtractor;
use pretty_assertions::assert_eq;
use serde_json::Value;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

#[tokio::test]
async fn test_pages_to_json_shipment() {
    let data_dir = data_dir_with_books(&[("Foo", 10.0), ("Bar", 1.0), ("Baz", 5.0)])
        .await
        .unwrap();
    let out_dir = TempDir::new().unwrap();
    let output = out_dir.path().join("data.json");

    let books = BookExtractor::new()
        .unwrap()
        .extract_dir(data_dir.path())
        .await
        .unwrap();
    let boxes = GreedyPacker::default().pack(&books).unwrap();
    let service = ExportService::new();
    let json = service.export_to_json(&boxes).unwrap();
    service.write_output(&output, &json).await.unwrap();

    let written = std::fs::read_to_string(&output).unwrap();
    assert!(written.starts_with("[\n    {\n        \"id\": 1,\n"));

    let shipment: Value = serde_json::from_str(&written).unwrap();
    assert_eq!(shipment.as_array().unwrap().len(), 2);
    assert_eq!(shipment[0]["totalWeight"], 10.0);
    assert_eq!(shipment[0]["contents"][0]["author"], "Foo");
    assert_eq!(shipment[0]["contents"][0]["price"], "$10.00");
    assert_eq!(shipment[0]["contents"][0]["packed"], true);
    assert_eq!(shipment[1]["id"], 2);
    assert_eq!(shipment[1]["totalWeight"], 6.0);
    assert_eq!(shipment[1]["contents"][0]["author"], "Baz");
    assert_eq!(shipment[1]["contents"][1]["author"], "Bar");
}

#[tokio::test]
async fn test_fixture_pages_pack_heaviest_alone() {
    let books = BookExtractor::new()
        .unwrap()
        .extract_dir(&fixtures_dir())
        .await
        .unwrap();

    // 5.8 + 5.6 > 10, so Wolfram's 5.6 lb book ships alone while the 1.2 lb
    // book joins the 5.8 lb rental in box one
    let boxes = GreedyPacker::default().pack(&books).unwrap();

    assert_eq!(boxes.len(), 2);
    assert_eq!(authors(&boxes[0].contents), vec!["James Stewart", "Andrew Hunt"]);
    assert_eq!(authors(&boxes[1].contents), vec!["Stephen Wolfram"]);
}

#[tokio::test]
async fn test_markdown_report() {
    let data_dir = data_dir_with_books(&[("Foo", 6.0), ("Bar", 1.0)]).await.unwrap();
    let books = BookExtractor::new()
        .unwrap()
        .extract_dir(data_dir.path())
        .await
        .unwrap();
    let boxes = GreedyPacker::default().pack(&books).unwrap();

    let report = ExportService::new()
        .export(&boxes, ExportFormat::Markdown)
        .unwrap();

    assert!(report.starts_with("# Shipment Packing Report"));
    assert!(report.contains("## Box 1 (7 lbs, 2 books)"));
    assert!(report.contains("| 1 | Book 1 | Foo | $10.00 | 6 | 0000000001 |"));
}

#[tokio::test]
async fn test_config_file_drives_capacity() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("packer.toml");
    std::fs::write(&path, "[packing]\ncapacity = 4.0\n").unwrap();

    let config = PackerConfig::load(&path).await.unwrap();
    let books = books(&[("a", 1.0), ("b", 2.0), ("c", 3.0), ("d", 4.0)]);
    let boxes = GreedyPacker::new(config.packing.capacity).pack(&books).unwrap();

    let totals: Vec<f64> = boxes.iter().map(|c| c.total_weight).collect();
    assert_eq!(totals, vec![4.0, 4.0, 2.0]);
}

fn run_cli(cwd: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_book-packer"))
        .args(args)
        .current_dir(cwd)
        .env("BOOK_PACKER_CONFIG_DIR", cwd.join("no-global-config"))
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[tokio::test]
async fn test_cli_pack_writes_default_output() {
    let work_dir = TempDir::new().unwrap();
    let data_dir = data_dir_with_books(&[("Foo", 10.0), ("Bar", 1.0), ("Baz", 5.0)])
        .await
        .unwrap();

    let output = run_cli(
        work_dir.path(),
        &["pack", "--data-dir", data_dir.path().to_str().unwrap()],
    );
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let written = std::fs::read_to_string(work_dir.path().join("data.json")).unwrap();
    let shipment: Value = serde_json::from_str(&written).unwrap();
    assert_eq!(shipment[1]["totalWeight"], 6.0);
}

#[tokio::test]
async fn test_cli_rejects_oversized_book() {
    let work_dir = TempDir::new().unwrap();
    let data_dir = data_dir_with_books(&[("Foo", 3.0), ("Anvil", 12.0)]).await.unwrap();

    let output = run_cli(
        work_dir.path(),
        &["pack", "--stdout", "--data-dir", data_dir.path().to_str().unwrap()],
    );

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Anvil"), "{stderr}");
    assert!(!work_dir.path().join("data.json").exists());
}

#[test]
fn test_cli_config_init_and_set() {
    let work_dir = TempDir::new().unwrap();

    assert!(run_cli(work_dir.path(), &["config", "init"]).status.success());
    assert!(!run_cli(work_dir.path(), &["config", "init"]).status.success());
    assert!(run_cli(work_dir.path(), &["config", "set", "packing.capacity", "20"])
        .status
        .success());
    assert!(!run_cli(work_dir.path(), &["config", "set", "packing.capacity", "0"])
        .status
        .success());

    let content = std::fs::read_to_string(work_dir.path().join(".book-packer.toml")).unwrap();
    let config = PackerConfig::from_toml(&content, Path::new(".book-packer.toml")).unwrap();
    assert_eq!(config.packing.capacity, 20.0);
}

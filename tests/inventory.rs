use ringlog::{RotatingFileWriter, format_size, inventory, parse_size};
use std::fs;
use tempfile::TempDir;

#[test]
fn scan_lists_only_matching_files() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("app-0.log"), "zero").unwrap();
    fs::write(tmp.path().join("app-10.log"), "ten!!").unwrap();
    fs::write(tmp.path().join("app-2.log"), "2").unwrap();
    fs::write(tmp.path().join("app-x.log"), "no").unwrap();
    fs::write(tmp.path().join("other-1.log"), "no").unwrap();
    fs::write(tmp.path().join("app-1.txt"), "no").unwrap();

    let set = inventory::scan(tmp.path(), "app").unwrap();
    let indices: Vec<usize> = set.files.iter().map(|f| f.index).collect();

    assert_eq!(indices, vec![0, 2, 10]);
    assert_eq!(set.total_size(), 10);
    assert_eq!(set.get(10).unwrap().size, 5);
    assert!(set.get(1).is_none());
}

#[test]
fn scan_of_missing_directory_is_empty() {
    let tmp = TempDir::new().unwrap();
    let set = inventory::scan(&tmp.path().join("nope"), "app").unwrap();
    assert_eq!(set.count(), 0);
    assert!(set.newest().is_none());
}

#[test]
fn scan_sees_writer_output() {
    let tmp = TempDir::new().unwrap();
    let writer =
        RotatingFileWriter::open(&tmp.path().to_string_lossy(), "w", 8, 4, false).unwrap();
    for _ in 0..3 {
        writer.write_bytes(b"1234567\n").unwrap();
    }

    let set = inventory::scan(tmp.path(), "w").unwrap();
    assert_eq!(set.count(), 3);
    assert_eq!(set.total_size(), 24);
    assert!(set.to_string().contains("Files:      3"));
}

#[test]
fn sizes_parse_with_suffixes() {
    assert_eq!(parse_size("512"), Some(512));
    assert_eq!(parse_size("4K"), Some(4 * 1024));
    assert_eq!(parse_size("10M"), Some(10 * 1024 * 1024));
    assert_eq!(parse_size("2g"), Some(2 * 1024 * 1024 * 1024));
    assert_eq!(parse_size(""), None);
    assert_eq!(parse_size("M"), None);
    assert_eq!(parse_size("ten"), None);
}

#[test]
fn sizes_format_in_largest_unit() {
    assert_eq!(format_size(100), "100 B");
    assert_eq!(format_size(1536), "1.50 KB");
    assert_eq!(format_size(10 * 1024 * 1024), "10.00 MB");
}

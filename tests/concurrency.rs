use ringlog::{HeaderMask, Logger, Priority, inventory};
use std::fs;
use std::sync::Arc;
use std::thread;
use tempfile::TempDir;

#[test]
fn rotation_under_contention_loses_no_record() {
    let tmp = TempDir::new().unwrap();
    let logger = Arc::new(
        Logger::builder()
            .header(HeaderMask::THREAD | HeaderMask::PRIORITY)
            .threshold(Priority::Debug)
            .file()
            .dir(tmp.path().to_string_lossy())
            .name("busy")
            .max_file_size(1024)
            .max_file_count(1000)
            .append(false)
            .done()
            .build()
            .unwrap(),
    );

    let workers: Vec<_> = (0..4)
        .map(|t| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for i in 0..250 {
                    logger.debug(&format!("worker {t} item {i:03}")).unwrap();
                }
            })
        })
        .collect();
    for worker in workers {
        worker.join().unwrap();
    }

    let set = inventory::scan(tmp.path(), "busy").unwrap();
    assert!(set.count() > 1);

    let mut total = 0;
    for file in &set.files {
        assert!(file.size <= 1024);
        let text = fs::read_to_string(&file.path).unwrap();
        for line in text.lines() {
            let (_thread, rest) = line.split_once(' ').unwrap();
            assert!(rest.starts_with("[DEBUG]  worker "));
            total += 1;
        }
    }
    assert_eq!(total, 1000);
}

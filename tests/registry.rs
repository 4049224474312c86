//! The registry is process-wide, so every test here takes `SERIAL` first.

use ringlog::{Error, HeaderMask, OutputMode, Priority, Settings, registry};
use std::fs;
use std::sync::{Arc, Mutex, MutexGuard};
use tempfile::TempDir;

static SERIAL: Mutex<()> = Mutex::new(());

fn serial() -> MutexGuard<'static, ()> {
    let guard = SERIAL.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    registry::destroy().unwrap();
    guard
}

fn settings(tmp: &TempDir) -> Settings {
    Settings {
        header: HeaderMask::PRIORITY,
        threshold: Priority::Info,
        append: false,
        ..Settings::new(tmp.path().to_string_lossy(), "reg")
    }
}

fn contents(tmp: &TempDir) -> String {
    fs::read_to_string(tmp.path().join("reg-0.log")).unwrap()
}

#[test]
fn emit_before_create_fails() {
    let _guard = serial();

    assert!(!registry::is_created());
    assert!(matches!(
        ringlog::emit!(Priority::Error, "nowhere"),
        Err(Error::NotInitialized)
    ));
    assert!(matches!(registry::flush(), Err(Error::NotInitialized)));
}

#[test]
fn macros_write_through_registry() {
    let _guard = serial();
    let tmp = TempDir::new().unwrap();
    registry::create(&settings(&tmp)).unwrap();

    ringlog::error!("code {}", 7);
    ringlog::info!("plain");
    ringlog::debug!("filtered");
    registry::destroy().unwrap();

    assert_eq!(contents(&tmp), "[ERROR]  code 7\n[INFO]   plain\n");
}

#[test]
fn second_create_keeps_first_logger() {
    let _guard = serial();
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();

    registry::create(&settings(&first)).unwrap();
    registry::create(&settings(&second)).unwrap();
    ringlog::warn!("to first");
    registry::destroy().unwrap();

    assert_eq!(contents(&first), "[WARN]   to first\n");
    assert!(!second.path().join("reg-0.log").exists());
}

#[test]
fn destroy_is_idempotent() {
    let _guard = serial();
    let tmp = TempDir::new().unwrap();

    registry::create(&settings(&tmp)).unwrap();
    registry::destroy().unwrap();
    registry::destroy().unwrap();

    assert!(!registry::is_created());
    assert!(matches!(
        ringlog::emit!(Priority::Info, "gone"),
        Err(Error::NotInitialized)
    ));
}

#[test]
fn recreate_after_destroy_resumes_file() {
    let _guard = serial();
    let tmp = TempDir::new().unwrap();

    registry::create(&settings(&tmp)).unwrap();
    ringlog::info!("one");
    registry::destroy().unwrap();

    registry::create(&Settings {
        append: true,
        ..settings(&tmp)
    })
    .unwrap();
    ringlog::info!("two");
    registry::destroy().unwrap();

    assert_eq!(contents(&tmp), "[INFO]   one\n[INFO]   two\n");
}

#[test]
fn empty_directory_is_rejected() {
    let _guard = serial();

    let result = registry::create(&Settings::new("", "reg"));
    assert!(matches!(result, Err(Error::InvalidConfig(_))));
    assert!(!registry::is_created());
}

#[test]
fn empty_name_is_rejected() {
    let _guard = serial();
    let tmp = TempDir::new().unwrap();

    let result = registry::create(&Settings::new(tmp.path().to_string_lossy(), ""));
    assert!(matches!(result, Err(Error::InvalidConfig(_))));
    assert!(!registry::is_created());
}

#[test]
fn unopenable_directory_installs_nothing() {
    let _guard = serial();
    let tmp = TempDir::new().unwrap();
    let blocker = tmp.path().join("file");
    fs::write(&blocker, "x").unwrap();

    let result = registry::create(&Settings::new(
        blocker.join("sub").to_string_lossy(),
        "reg",
    ));
    assert!(matches!(result, Err(Error::CreateDir { .. })));
    assert!(!registry::is_created());
}

#[test]
fn handler_before_create_is_rejected() {
    let _guard = serial();

    let result = registry::set_external_handler(|_, _, _| Ok(()));
    assert!(matches!(result, Err(Error::NotInitialized)));
}

#[test]
fn external_handler_sees_every_priority() {
    let _guard = serial();
    let tmp = TempDir::new().unwrap();
    registry::create(&Settings {
        threshold: Priority::Error,
        ..settings(&tmp)
    })
    .unwrap();

    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    registry::set_external_handler(move |_, priority, args| {
        sink.lock().unwrap().push(format!("{priority}:{args}"));
        Ok(())
    })
    .unwrap();

    ringlog::debug!("d");
    ringlog::emerg!("e");
    registry::clear_external_handler().unwrap();
    ringlog::crit!("c");
    registry::destroy().unwrap();

    assert_eq!(
        *seen.lock().unwrap(),
        vec!["debug:d".to_string(), "emergency:e".to_string()]
    );
    assert_eq!(contents(&tmp), "[CRITIC] c\n");
}

#[test]
fn handler_goes_away_with_logger() {
    let _guard = serial();
    let tmp = TempDir::new().unwrap();

    registry::create(&settings(&tmp)).unwrap();
    registry::set_external_handler(|_, _, _| Ok(())).unwrap();
    registry::destroy().unwrap();

    registry::create(&settings(&tmp)).unwrap();
    assert!(!registry::logger().unwrap().has_handler());
    registry::destroy().unwrap();
}

#[test]
fn console_only_registry_writes_no_file() {
    let _guard = serial();
    let tmp = TempDir::new().unwrap();

    registry::create(&Settings {
        output: OutputMode::CONSOLE,
        ..settings(&tmp)
    })
    .unwrap();
    ringlog::notice!("stdout only");
    registry::flush().unwrap();
    registry::destroy().unwrap();

    assert!(!tmp.path().join("reg-0.log").exists());
}

#[test]
fn concurrent_emitters_produce_whole_lines() {
    let _guard = serial();
    let tmp = TempDir::new().unwrap();
    registry::create(&settings(&tmp)).unwrap();

    let threads: Vec<_> = (0..8)
        .map(|t| {
            std::thread::spawn(move || {
                for i in 0..200 {
                    ringlog::info!("thread {t} record {i}");
                }
            })
        })
        .collect();
    for handle in threads {
        handle.join().unwrap();
    }
    registry::destroy().unwrap();

    let text = contents(&tmp);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 8 * 200);
    assert!(lines
        .iter()
        .all(|l| l.starts_with("[INFO]   thread ") && l.contains(" record ")));
}

struct Rejecting;

impl ringlog::LogHandler for Rejecting {
    fn handle(
        &self,
        _site: &ringlog::CallSite<'_>,
        _priority: Priority,
        _args: std::fmt::Arguments<'_>,
    ) -> Result<(), Error> {
        Err(Error::Handler("rejected".to_string()))
    }
}

#[test]
fn struct_handler_through_registry() {
    let _guard = serial();
    let tmp = TempDir::new().unwrap();

    assert!(matches!(
        registry::set_external_log_handler(Rejecting),
        Err(Error::NotInitialized)
    ));

    registry::create(&settings(&tmp)).unwrap();
    registry::set_external_log_handler(Rejecting).unwrap();
    assert!(matches!(
        ringlog::emit!(Priority::Info, "refused"),
        Err(Error::Handler(_))
    ));
    registry::destroy().unwrap();

    assert_eq!(contents(&tmp), "");
}

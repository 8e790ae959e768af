use buddyterm::logger::Logger;

#[test]
fn in_memory_logger_returns_newest_first() {
    let logger = Logger::new();
    assert!(!logger.is_enabled());

    logger.log("first".to_string());
    logger.log("second".to_string());

    let logs = logger.get_logs();
    assert_eq!(logs.len(), 2);
    assert!(logs[0].contains("second"));
    assert!(logs[1].contains("first"));

    logger.clear();
    assert!(logger.get_logs().is_empty());
}

#[test]
fn disabled_config_keeps_the_ring_but_no_file_logger() {
    let logger = Logger::from_config(false).unwrap();
    assert!(!logger.is_enabled());

    logger.log("quiet".to_string());
    assert_eq!(logger.get_logs().len(), 1);
}

#[test]
fn enabling_twice_is_idempotent() {
    // The global file logger installs once; a second enabled logger must
    // not fail trying to install it again.
    let first = Logger::from_config(true);
    let second = Logger::from_config(true);
    assert!(first.is_ok());
    assert!(second.is_ok());
}

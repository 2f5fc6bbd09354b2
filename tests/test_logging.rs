#[cfg(test)]
mod tests {
    use buildinfo::build_info::init_build_info;
    use buildinfo::environment::Environment;
    use buildinfo::logging::default_log_filter;
    use logtest::Logger;
    use serial_test::serial;
    use std::sync::Mutex;

    lazy_static::lazy_static! {
        static ref LOGGER: Mutex<Logger> = Mutex::new(Logger::start());
    }

    fn collect_messages() -> Vec<String> {
        let mut logger = LOGGER.lock().unwrap();
        let mut messages = Vec::new();
        while let Some(record) = logger.pop() {
            messages.push(record.args().to_string());
        }
        messages
    }

    #[test]
    #[serial]
    fn test_init_logs_resolved_environment_once() {
        // touch the lazy logger so it is installed before the one-shot init fires
        drop(LOGGER.lock().unwrap());

        init_build_info();
        init_build_info();

        let messages = collect_messages();
        let resolution_logs: Vec<&String> = messages
            .iter()
            .filter(|m| m.contains("resolved to"))
            .collect();
        assert_eq!(
            resolution_logs.len(),
            1,
            "Expected exactly one resolution log, got: {:?}",
            messages
        );
        assert!(resolution_logs[0].contains("0.21.0"));
        assert!(resolution_logs[0].contains("production"));
    }

    #[test]
    #[serial]
    fn test_default_filter_per_environment() {
        assert_eq!(default_log_filter(Environment::Development), "debug");
        assert_eq!(default_log_filter(Environment::Production), "info");
    }

    // TODO: cover init_logging once there is a way to tear down the global
    // logger between tests (env_logger installs it for the whole process)
}

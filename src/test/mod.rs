
/// Routes `log` output through the test harness so rotations show up with `--nocapture`.
pub(crate) fn init_logging() {
    // Every test calls this but only the first one gets to install the logger.
    let _ = simplelog::TestLogger::init(simplelog::LevelFilter::Trace, simplelog::Config::default());
}

mod tests {
    use super::*;

    #[test]
    fn init_logging_is_repeatable() {
        init_logging();
        init_logging();
        log::trace!("logging through the test harness");
    }
}

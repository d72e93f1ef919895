//! Basic usage of the scope binding and the level macros.

use static_logger_system::core::sink;
use static_logger_system::prelude::*;
use static_logger_system::{log_custom, log_debug, log_dev, log_info, log_scope, log_warn};

log_scope!();

mod planner {
    use static_logger_system::{log_debug, log_eval, log_scope, log_trace, LogLevel, ScopeConfig};

    #[allow(dead_code)]
    pub struct Planner;

    // This component keeps debug messages even though the process default
    // cutoff is info.
    const SCOPE: ScopeConfig = ScopeConfig::new(true, LogLevel::DEBUG);
    log_scope!(Planner, SCOPE);

    pub fn plan() {
        log_trace!("suppressed even for this chatty component");
        log_debug!("planning pass {} of {}", 1, 3);
        log_eval!().append("scored ").append(12).append(" candidate routes");
    }
}

fn main() {
    // Colored console output. Configure before the first enabled statement,
    // otherwise the uncolored default claims the process-wide slot.
    sink::configure(WriterConfig::console().with_color(true));

    log_info!("hello from the default scope");
    log_debug!("not printed, the global cutoff is info");

    let mut report = log_info!();
    report.push("a persistent message can be filled over time");
    planner::plan();
    report.push(" and is printed when it goes out of scope");
    drop(report);

    log_custom!(42, "below trace, statically suppressed");
    log_custom!(155, "custom levels above dev always print");
    log_warn!("warnings look like this");
    log_dev!("developer messages survive every named cutoff");
}

//! Routing log output to a file through the string-keyed options map.

use static_logger_system::core::sink;
use static_logger_system::{log_error, log_eval, log_info, log_scope};

log_scope!();

fn main() {
    // The file is truncated at first open and flushed after every message.
    // Omitting "path" would fall back to "marsLOG.txt".
    sink::configure_from_options([("type", "file"), ("path", "demo.log")]);

    log_info!("first line in the file");
    log_eval!("evaluation summary: {:.2}", 0.875);
    log_error!().append("exit code ").append(3);

    println!("wrote demo.log");
}

//! Many worker threads sharing the process-wide writer.
//!
//! Every printed line is complete: the writer serializes whole messages,
//! so output from different workers never interleaves mid-line.

use static_logger_system::{log_custom, log_info, log_scope, log_warn};
use std::thread;
use std::time::Duration;

log_scope!("worker");

fn work(worker: usize) {
    for round in 0..2 {
        log_info!()
            .append("worker ")
            .append(worker)
            .append(" (")
            .append(format_args!("{:?}", thread::current().id()))
            .append(") round ")
            .append(round)
            .append(" reporting ")
            .append(65.78_f32);
        thread::sleep(Duration::from_millis(10));

        log_warn!("worker {worker} round {round} finished");
        drop(log_custom!(155).append("worker ").append(worker).append(" custom payload"));
    }
}

fn main() {
    let handles: Vec<_> = (0..5).map(|worker| thread::spawn(move || work(worker))).collect();
    for handle in handles {
        handle.join().expect("worker thread panicked");
    }
}

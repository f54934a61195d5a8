//! Custom logger

use env_logger::Builder;
use log::LevelFilter;
use std::io::Write;

/// Log to stderr as `<timestamp> [<level>] - <message>`. `RUST_LOG` overrides `level`.
pub fn init_log(level: LevelFilter) {
    let _ = Builder::new()
        .format(|buf, record| {
            let ts = buf.timestamp_seconds();
            writeln!(buf, "{} [{}] - {}", ts, record.level(), record.args())
        })
        .filter(None, level)
        .parse_default_env()
        .try_init();
}

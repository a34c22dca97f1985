/// Logging setup. Writes to the configured log file, or stderr when the file
/// cannot be opened.
use std::io::Write;
use std::path::Path;
use log::LevelFilter;

pub fn init(log_file: &Path) {
    let mut builder = env_logger::Builder::new();

    if let Ok(log_level) = std::env::var("RUST_LOG") {
        builder.parse_filters(&log_level);
    } else {
        builder.filter_level(LevelFilter::Info);
        // window stack is chatty at info
        for module in ["eframe", "egui", "egui_glow", "wgpu", "winit"] {
            builder.filter_module(module, LevelFilter::Warn);
        }
    }

    // [HH:MM:SS LEVEL] target - message
    builder.format(|buf, record| {
        let now = chrono::Local::now().format("%H:%M:%S");
        writeln!(
            buf,
            "[{} {}] {} - {}",
            now,
            record.level(),
            record.target(),
            record.args()
        )
    });

    if let Some(dir) = log_file.parent().filter(|d| !d.as_os_str().is_empty()) {
        let _ = std::fs::create_dir_all(dir);
    }

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file);

    match file {
        Ok(file) => {
            builder.target(env_logger::Target::Pipe(Box::new(file))).init();
            log::info!("Logging to {} ✓", log_file.display());
        }
        Err(e) => {
            builder.target(env_logger::Target::Stderr).init();
            log::warn!("⚠️ Cannot open log file {}: {}, logging to stderr", log_file.display(), e);
        }
    }
}

use color_eyre::eyre::Result;
use log::LevelFilter;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Log to `gitstat.log` under the XDG state directory
pub fn init_logging(debug: bool) -> Result<()> {
    let log_level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let log_dir = get_default_log_dir();
    fs::create_dir_all(&log_dir)?;

    let log_file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("gitstat.log"))?;

    env_logger::Builder::new()
        .filter_level(log_level)
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .format(|buf, record| {
            use std::io::Write;
            writeln!(
                buf,
                "{} [{}] - {}: {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init()?;

    log::info!("Logging initialized with level: {log_level}");
    Ok(())
}

fn get_default_log_dir() -> PathBuf {
    match env::var_os("XDG_STATE_HOME") {
        Some(state_home) => PathBuf::from(state_home).join("gitstat"),
        None => match env::var_os("HOME") {
            Some(home) => PathBuf::from(home).join(".local/state").join("gitstat"),
            None => PathBuf::from("/tmp/gitstat"),
        },
    }
}

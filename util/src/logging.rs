use itertools::Itertools;
use log::{error, info, LevelFilter};
use std::path::PathBuf;

#[derive(Debug)]
pub enum VInitLoggingError {
    HomeDir,
    FernLogFile(PathBuf),
    FernSetLoggerError,
}
impl std::fmt::Display for VInitLoggingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            Self::HomeDir => write!(f, "could not determine home directory for log file"),
            Self::FernLogFile(path_log) => write!(f, "could not open log file {}", path_log.display()),
            Self::FernSetLoggerError => write!(f, "logger already initialized"),
        }
    }
}
impl std::error::Error for VInitLoggingError {}

pub fn log_file_path(str_log_basename: &str) -> Result<PathBuf, VInitLoggingError> {
    Ok(dirs::home_dir()
        .ok_or(VInitLoggingError::HomeDir)?
        .join(format!("{str_log_basename}.log")))
}

/// Routes `log` records to `~/<str_log_basename>.log` and mirrors warnings to stderr.
///
/// Without an explicit level, debug builds log everything and release builds log `Info` and above.
pub fn init_logging(str_log_basename: &str, olevelfilter: Option<LevelFilter>) -> Result<(), VInitLoggingError> {
    let path_log = log_file_path(str_log_basename)?;
    let levelfilter = olevelfilter.unwrap_or(if_dbg_else!({LevelFilter::Trace}{LevelFilter::Info}));
    fern::Dispatch::new()
        .format(|formatcallback, fmtarguments_msg, logrecord| {
            formatcallback.finish(format_args!(
                "[{} {}({:?}) {}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                logrecord.target(),
                std::thread::current().id(),
                logrecord.level(),
                fmtarguments_msg,
            ))
        })
        .chain(fern::Dispatch::new()
            .level(levelfilter)
            .chain(fern::log_file(&path_log)
                .map_err(|_| VInitLoggingError::FernLogFile(path_log.clone()))?
            )
        )
        .chain(fern::Dispatch::new()
            .level(LevelFilter::Warn)
            .chain(std::io::stderr())
        )
        .apply().map_err(|_| VInitLoggingError::FernSetLoggerError)?;
    let fn_panic_handler_original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panicinfo| {
        error!("panic: {}", panicinfo);
        fn_panic_handler_original(panicinfo)
    }));
    info!(
        "Started: {} (log level {})",
        std::env::args().format_with(/*sep*/ " ", |str_arg, formatter| {
            formatter(&format_args!("\"{}\"", str_arg))
        }),
        levelfilter,
    );
    Ok(())
}

#[test]
fn test_log_file_path() {
    if let Ok(path_log) = log_file_path("sheepshead") {
        assert_eq!(path_log.file_name().and_then(|osstr| osstr.to_str()), Some("sheepshead.log"));
    }
}

use colored::{ColoredString, Colorize};
use std::fmt::Display;

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Status {
    Info,
    Success,
    Failure,
    Warning,
    Error,
}

impl Status {
    fn symbol(self) -> ColoredString {
        match self {
            Self::Info => "~".cyan(),
            Self::Success => "+".green(),
            Self::Failure => "-".red(),
            Self::Warning => "!".yellow(),
            Self::Error => "!".red(),
        }
    }

    const fn to_stderr(self) -> bool {
        matches!(self, Self::Failure | Self::Error)
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

pub fn format_status(status: Status, message: &impl Display) -> String {
    format!("[{status}] {message}")
}

pub fn status(status: Status, message: &impl Display) {
    let line = format_status(status, message);
    if status.to_stderr() {
        eprintln!("{line}");
    } else {
        println!("{line}");
    }
}

#[macro_export]
macro_rules! log_status {
    ($status:ident, $($arg:tt)+) => {
        $crate::io::logger::status($crate::io::logger::Status::$status, &format!($($arg)+))
    };
}

#[macro_export]
macro_rules! log_info {
    ($($arg:tt)+) => { $crate::log_status!(Info, $($arg)+) };
}

#[macro_export]
macro_rules! log_success {
    ($($arg:tt)+) => { $crate::log_status!(Success, $($arg)+) };
}

#[macro_export]
macro_rules! log_failure {
    ($($arg:tt)+) => { $crate::log_status!(Failure, $($arg)+) };
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)+) => { $crate::log_status!(Warning, $($arg)+) };
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)+) => { $crate::log_status!(Error, $($arg)+) };
}

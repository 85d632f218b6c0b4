//! log macro's for client and monitor logging

/// Writes a debug! message to the app::client logger
#[macro_export]
macro_rules! client_debug {
    ($($arg:tt)+) => {
        log::debug!(target: "app::client::flight_tracker", $($arg)+)
    };
}

/// Writes an info! message to the app::client logger
#[macro_export]
macro_rules! client_info {
    ($($arg:tt)+) => {
        log::info!(target: "app::client::flight_tracker", $($arg)+)
    };
}

/// Writes an warn! message to the app::client logger
#[macro_export]
macro_rules! client_warn {
    ($($arg:tt)+) => {
        log::warn!(target: "app::client::flight_tracker", $($arg)+)
    };
}

/// Writes an error! message to the app::client logger
#[macro_export]
macro_rules! client_error {
    ($($arg:tt)+) => {
        log::error!(target: "app::client::flight_tracker", $($arg)+)
    };
}

/// Writes a debug! message to the app::monitor logger
#[macro_export]
macro_rules! monitor_debug {
    ($($arg:tt)+) => {
        log::debug!(target: "app::monitor", $($arg)+)
    };
}

/// Writes an info! message to the app::monitor logger
#[macro_export]
macro_rules! monitor_info {
    ($($arg:tt)+) => {
        log::info!(target: "app::monitor", $($arg)+)
    };
}

/// Writes an warn! message to the app::monitor logger
#[macro_export]
macro_rules! monitor_warn {
    ($($arg:tt)+) => {
        log::warn!(target: "app::monitor", $($arg)+)
    };
}

/// Writes an error! message to the app::monitor logger
#[macro_export]
macro_rules! monitor_error {
    ($($arg:tt)+) => {
        log::error!(target: "app::monitor", $($arg)+)
    };
}

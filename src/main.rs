use remote_invoker::config::{self, LoadConfigResult};
use remote_invoker::devices::{AirConditioner, Curtains, DeviceCommand, Door, Light, Television, Thermostat, shared};
use remote_invoker::{Command, CommandInvoker, InvokerConfig, MacroCommand, paths};
use tracing::{info, warn};

fn env_filter() -> tracing_subscriber::EnvFilter {
    // Use env filter to control log levels (default to info, debug for the invoker)
    tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,remote_invoker=debug"))
}

/// Set up file logging for debug builds
#[cfg(debug_assertions)]
fn setup_logging() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    use std::fs::OpenOptions;
    use std::io::Write;
    use tracing_subscriber::prelude::*;

    use remote_invoker::constants::LOG_FILE_NAME;

    let logs_dir = paths::logs_dir();
    if std::fs::create_dir_all(&logs_dir).is_err() {
        eprintln!("Failed to create logs directory");
        return None;
    }

    let log_file_path = logs_dir.join(LOG_FILE_NAME);

    // Append session separator to existing log file
    if let Ok(mut file) = OpenOptions::new().append(true).open(&log_file_path) {
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
        let separator = "=".repeat(80);
        let _ = writeln!(
            file,
            "\n\n{}\n=== New Session Started at {} ===\n{}\n",
            separator, timestamp, separator
        );
    }

    let file_appender = tracing_appender::rolling::never(&logs_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    // No ANSI colors for file output
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stdout)
        .with_ansi(true)
        .with_target(false)
        .with_level(true);

    tracing_subscriber::registry()
        .with(env_filter())
        .with(file_layer)
        .with(stdout_layer)
        .init();

    Some(guard)
}

#[cfg(not(debug_assertions))]
fn setup_logging() -> Option<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_target(false)
        .init();
    None
}

fn load_invoker_config() -> InvokerConfig {
    if let Err(e) = paths::ensure_directories() {
        warn!("Failed to create config directories: {}", e);
    }

    let LoadConfigResult { config, reset_reason } = config::load_config();
    if let Some(reason) = reset_reason {
        warn!("Configuration reset to defaults: {}", reason);
        if let Err(e) = config::save_config(&config, &paths::config_file()) {
            warn!("Failed to rewrite config: {}", e);
        }
    }
    config
}

/// Slots, undo/redo, macros and recording on a smart-home remote
fn remote_control_demo(config: &InvokerConfig) {
    info!("=== Remote control ===");
    let kitchen_light = shared(Light::new("Kitchen"));
    let living_ac = shared(AirConditioner::new("Living Room"));
    let bedroom_curtains = shared(Curtains::new("Bedroom"));

    let mut remote = CommandInvoker::from_config(config);
    let assignments = [
        (0, DeviceCommand::light_on(&kitchen_light)),
        (1, DeviceCommand::ac_temperature(&living_ac, 20)),
        (2, DeviceCommand::curtains_open(&bedroom_curtains)),
        (6, DeviceCommand::ac_temperature(&living_ac, 28)),
    ];
    for (slot, command) in assignments {
        if let Err(e) = remote.set_slot(slot, command) {
            warn!("{}", e);
        }
    }

    info!("--- Single commands ---");
    for slot in [0, 1, 6, 2] {
        info!("{}", remote.press_slot(slot));
    }

    info!("--- Undo ---");
    info!("{}", remote.undo_last());
    info!("{}", remote.undo_last());

    info!("--- Redo ---");
    info!("{}", remote.redo_last());
    info!("{}", remote.redo_last());

    info!("--- Macro ---");
    let mut evening = MacroCommand::new("EveningMode", Vec::new()).with_policy(remote.macro_policy());
    evening.push(DeviceCommand::ac_temperature(&living_ac, 23));
    evening.push(DeviceCommand::curtains_open(&bedroom_curtains));
    evening.push(DeviceCommand::light_on(&kitchen_light));
    if let Err(e) = remote.set_slot(3, evening) {
        warn!("{}", e);
    }
    info!("{}", remote.press_slot(3));
    info!("{}", remote.undo_last());

    info!("--- Empty slot ---");
    info!("{}", remote.press_slot(5));

    info!("--- Recording ---");
    info!("{}", remote.press_slot(0));
    info!("{}", remote.press_slot(1));
    if let Some(recorded) = remote.record_macro(2) {
        if let Err(e) = remote.set_slot(4, recorded) {
            warn!("{}", e);
        }
        info!("{}", remote.press_slot(4));
    }

    remote.log_history();
}

/// Bounded history and failure reporting
fn bounded_history_demo() {
    info!("=== Bounded history ===");
    let living_light = shared(Light::new("Living Room"));
    let front_door = shared(Door::new("Front Door"));
    let thermostat = shared(Thermostat::new(22.0));
    let tv = shared(Television::new());

    let mut invoker = CommandInvoker::with_capacity(3);
    invoker.execute(DeviceCommand::light_on(&living_light));
    invoker.execute(DeviceCommand::tv_toggle(&tv));
    invoker.execute(DeviceCommand::door_open(&front_door));
    invoker.execute(DeviceCommand::increase_temp(&thermostat, 1.5));
    invoker.log_history();

    info!("--- Undo last ---");
    info!("{}", invoker.undo_last());

    info!("--- Undo 2 ---");
    for outcome in invoker.undo_last_n(2) {
        info!("{}", outcome);
    }

    info!("--- Undo with empty history ---");
    for outcome in invoker.undo_last_n(2) {
        info!("{}", outcome);
    }

    info!("--- Direct undo of a command that never ran ---");
    let ghost = shared(Light::new("Ghost"));
    let mut never_run = DeviceCommand::light_off(&ghost);
    match never_run.undo() {
        Ok(()) => warn!("undo unexpectedly succeeded"),
        Err(e) => info!("expected error: {}", e),
    }
}

fn main() {
    // Keep the guard alive for the duration of the program
    let _log_guard = setup_logging();

    let config = load_invoker_config();
    remote_control_demo(&config);
    bounded_history_demo();
}

//! CLI smoke entry point.
//!
//! # Responsibility
//! - Load console configuration (optional JSON path argument plus
//!   `ORGDESK_*` overrides) and initialize logging when configured.
//! - Print the first page of every entity kind for quick sanity checks.

use log::{error, info};
use orgdesk_core::model::query::SearchPatch;
use orgdesk_core::model::record::Entity;
use orgdesk_core::{Console, ConsoleConfig, SharedStore};
use std::process::ExitCode;

fn load_config() -> Result<ConsoleConfig, String> {
    let mut config = match std::env::args().nth(1) {
        Some(path) => ConsoleConfig::from_file(&path).map_err(|err| err.to_string())?,
        None => ConsoleConfig::default(),
    };
    config.apply_env_overrides().map_err(|err| err.to_string())?;
    Ok(config)
}

fn print_first_page<E: Entity>(mut store: SharedStore<E>) -> bool {
    let state = store.load(&SearchPatch::new().first_page());
    if let Some(message) = &state.error {
        println!("{}: error={message}", E::RESOURCE);
        error!(
            "event=smoke_page module=cli status=error resource={}",
            E::RESOURCE
        );
        return false;
    }

    println!(
        "{}: page={}/{} total={}",
        E::RESOURCE,
        state.current_page,
        state.total_pages(),
        state.total
    );
    for record in &state.records {
        let status = if record.is_active() { "active" } else { "inactive" };
        println!("  {} [{status}]", record.label());
    }
    info!(
        "event=smoke_page module=cli status=ok resource={} rows={}",
        E::RESOURCE,
        state.records.len()
    );
    true
}

fn main() -> ExitCode {
    println!("orgdesk_core ping={}", orgdesk_core::ping());
    println!("orgdesk_core version={}", orgdesk_core::core_version());

    let config = match load_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("config error: {err}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(err) = orgdesk_core::init_from_config(&config) {
        eprintln!("logging disabled: {err}");
    }

    let console = match Console::from_config(config) {
        Ok(console) => console,
        Err(err) => {
            eprintln!("console error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let results = [
        print_first_page(console.competency_store()),
        print_first_page(console.course_store()),
        print_first_page(console.course_event_store()),
        print_first_page(console.department_store()),
        print_first_page(console.employee_store()),
    ];
    if results.iter().all(|ok| *ok) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

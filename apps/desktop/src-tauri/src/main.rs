//! # Inventory Desktop Entry Point
//!
//! The actual setup lives in `lib.rs` so the form logic stays testable.

// Prevents an additional console window on Windows in release
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]

fn main() {
    if let Err(e) = inventory_desktop_lib::run() {
        eprintln!("inventory-desktop failed to start: {e}");
        std::process::exit(1);
    }
}

fn main() {
    // Generates the Tauri context only when the window is being built
    #[cfg(feature = "gui")]
    tauri_build::build();
}

//! # Tauri Commands Module
//!
//! Commands exposed to the window's frontend (`apps/desktop/dist`).
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Tauri Command Flow                                   │
//! │                                                                         │
//! │  Frontend                                                               │
//! │  ────────                                                               │
//! │  const text = await invoke('create_product', {                          │
//! │    form: { id: '1', name: 'Widget', quantity: '10', price: '2.50' }     │
//! │  });                                                                    │
//! │         │                                                               │
//! │         │ (IPC via WebView)                                             │
//! │         ▼                                                               │
//! │  Rust Backend                                                           │
//! │  ────────────                                                           │
//! │  #[tauri::command]                                                      │
//! │  async fn create_product(                                               │
//! │      db: State<'_, DbState>,  ◄── Injected by Tauri                    │
//! │      form: InventoryForm,     ◄── From invoke params                   │
//! │  ) -> Result<String, ()>                                                │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Frontend writes the text into the output region                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod product;

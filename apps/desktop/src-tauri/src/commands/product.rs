//! # Product Commands
//!
//! One command per form button. Each returns the text for the output
//! region; store failures are part of that text, so the `Err` side is
//! never produced.

use tauri::State;
use tracing::info;

use crate::form::{FormAction, InventoryForm};
use crate::state::DbState;

async fn run(db: &DbState, form: &InventoryForm, action: FormAction) -> String {
    let output = form.submit(action, db.store()).await;
    info!(?action, %output, "Form action completed");
    output
}

/// "Create" button.
#[tauri::command]
pub async fn create_product(db: State<'_, DbState>, form: InventoryForm) -> Result<String, ()> {
    Ok(run(&db, &form, FormAction::Create).await)
}

/// "View All" button. Ignores the input fields.
#[tauri::command]
pub async fn view_products(db: State<'_, DbState>) -> Result<String, ()> {
    Ok(run(&db, &InventoryForm::default(), FormAction::ViewAll).await)
}

/// "Update" button.
#[tauri::command]
pub async fn update_product(db: State<'_, DbState>, form: InventoryForm) -> Result<String, ()> {
    Ok(run(&db, &form, FormAction::Update).await)
}

/// "Delete" button. Only the id field is read.
#[tauri::command]
pub async fn delete_product(db: State<'_, DbState>, form: InventoryForm) -> Result<String, ()> {
    Ok(run(&db, &form, FormAction::Delete).await)
}

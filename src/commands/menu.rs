use crate::models::{Category, MenuCard, Venue};
use crate::session::SessionExt;
use tauri::AppHandle;

/// Menu cards for `category`, or for the session's current view when omitted.
#[tauri::command]
pub fn get_menu(app: AppHandle, category: Option<Category>) -> Result<Vec<MenuCard>, String> {
    let state = app.session();
    let session = state.session.lock().map_err(|e| e.to_string())?;

    let category = category.unwrap_or_else(|| session.category());

    Ok(session.menu(app.catalog(), category))
}

#[tauri::command]
pub fn get_venue(app: AppHandle) -> Result<Venue, String> {
    let settings = app.settings();

    Ok(Venue {
        restaurant_name: settings.restaurant_name.clone(),
        table_label: settings.table_label.clone(),
    })
}

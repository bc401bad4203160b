use crate::error::SessionError;
use crate::models::{Category, ContactDetails, SessionView};
use crate::session::SessionExt;
use tauri::AppHandle;

#[tauri::command]
pub fn get_session(app: AppHandle) -> Result<SessionView, String> {
    let state = app.session();
    let session = state.session.lock().map_err(|e| e.to_string())?;

    Ok(session.view(None))
}

#[tauri::command]
#[allow(non_snake_case)]
pub fn select_item(app: AppHandle, itemId: i64) -> Result<SessionView, String> {
    let item_id = itemId;
    let item = app
        .catalog()
        .get(item_id)
        .ok_or_else(|| SessionError::UnknownItem(item_id).to_string())?;

    let state = app.session();
    let mut session = state.session.lock().map_err(|e| e.to_string())?;

    let notice = session.select(item).err().map(|r| r.to_string());

    Ok(session.view(notice))
}

#[tauri::command]
#[allow(non_snake_case)]
pub fn deselect_item(app: AppHandle, itemId: i64) -> Result<SessionView, String> {
    let item_id = itemId;
    if app.catalog().get(item_id).is_none() {
        return Err(SessionError::UnknownItem(item_id).to_string());
    }

    let state = app.session();
    let mut session = state.session.lock().map_err(|e| e.to_string())?;

    let notice = session.deselect(item_id).err().map(|r| r.to_string());

    Ok(session.view(notice))
}

#[tauri::command]
pub fn switch_category(app: AppHandle, category: Category) -> Result<SessionView, String> {
    let state = app.session();
    let mut session = state.session.lock().map_err(|e| e.to_string())?;

    session.switch_category(category);

    Ok(session.view(None))
}

#[tauri::command]
pub fn open_summary(app: AppHandle) -> Result<SessionView, String> {
    let state = app.session();
    let mut session = state.session.lock().map_err(|e| e.to_string())?;

    let notice = session.open_summary().err().map(|r| r.to_string());

    Ok(session.view(notice))
}

#[tauri::command]
pub fn close_summary(app: AppHandle) -> Result<SessionView, String> {
    let state = app.session();
    let mut session = state.session.lock().map_err(|e| e.to_string())?;

    session.close_summary();

    Ok(session.view(None))
}

#[tauri::command]
pub fn update_contact(app: AppHandle, contact: ContactDetails) -> Result<SessionView, String> {
    let state = app.session();
    let mut session = state.session.lock().map_err(|e| e.to_string())?;

    session.update_contact(contact);

    Ok(session.view(None))
}

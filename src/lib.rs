mod catalog;
mod commands;
mod config;
mod db;
mod error;
mod ledger;
mod lifecycle;
mod models;
mod session;
mod summary;


use catalog::MenuCatalog;
use commands::{menu, orders, selection};
use config::SessionConfig;
use db::Database;
use session::{OrderSession, SessionState};
use tauri::Manager;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("table_order_lib=info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    init_tracing();

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .setup(|app| {
            let config = SessionConfig::load(&app.path().app_config_dir()?)?;

            // Menu source and order history, gone when the window closes
            let db = Database::open_in_memory()?;
            db.initialize()?;
            let catalog = {
                let conn = db.conn.lock().unwrap_or_else(|e| e.into_inner());
                MenuCatalog::load(&conn)?
            };

            info!(
                items = catalog.len(),
                table = %config.table_label,
                preparation_secs = config.preparation_secs,
                "ordering session ready"
            );

            app.manage(SessionState::new(OrderSession::new(config.pending_label.clone())));
            app.manage(catalog);
            app.manage(config);
            app.manage(db);

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Menu
            menu::get_menu,
            menu::get_venue,
            // Selection
            selection::get_session,
            selection::select_item,
            selection::deselect_item,
            selection::switch_category,
            selection::open_summary,
            selection::close_summary,
            selection::update_contact,
            // Orders
            orders::submit_order,
            orders::get_order_history,
            orders::open_review_page,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}

use crate::config::SessionConfig;
use crate::db::{self, Database, DatabaseExt};
use crate::lifecycle;
use crate::models::{OrderReceipt, SessionView};
use crate::session::{OrderSession, PreparationTicket, SessionExt};
use std::sync::Mutex;
use std::time::Duration;
use tauri::{AppHandle, Emitter};
use tauri_plugin_opener::OpenerExt;
use tracing::{error, warn};

pub const ORDER_READY_EVENT: &str = "order-ready";

/// Outcome of a submission attempt.
#[derive(Debug)]
pub enum Placement {
    /// The session went Pending; the caller must start the timer for `ticket`.
    Placed {
        ticket: PreparationTicket,
        view: SessionView,
    },
    Rejected(SessionView),
}

/// Submits the session, then records the order. The history write happens
/// after the session lock is released, and its failure never undoes Pending.
pub fn place_order(
    session: &Mutex<OrderSession>,
    database: &Database,
    settings: &SessionConfig,
) -> Result<Placement, String> {
    let mut session = session.lock().map_err(|e| e.to_string())?;

    let submission = match session.submit() {
        Ok(submission) => submission,
        Err(rejection) => {
            return Ok(Placement::Rejected(session.view(Some(rejection.to_string()))));
        }
    };
    let view = session.view(None);

    // Release the session before touching the database
    drop(session);

    match database.conn.lock() {
        Ok(conn) => {
            if let Err(e) = db::record_order(
                &conn,
                &settings.table_label,
                &submission.entries,
                submission.estimated_minutes,
            ) {
                error!(error = %e, "failed to record submitted order");
            }
        }
        Err(e) => error!(error = %e, "order history unavailable"),
    }

    Ok(Placement::Placed {
        ticket: submission.ticket,
        view,
    })
}

#[tauri::command]
pub fn submit_order(app: AppHandle) -> Result<SessionView, String> {
    let settings = app.settings();

    match place_order(&app.session().session, app.db(), settings)? {
        Placement::Placed { ticket, view } => {
            schedule_ready(&app, ticket, settings.preparation_delay());
            Ok(view)
        }
        Placement::Rejected(view) => Ok(view),
    }
}

fn schedule_ready(app: &AppHandle, ticket: PreparationTicket, delay: Duration) {
    let app = app.clone();

    tauri::async_runtime::spawn(async move {
        let state = app.session();
        let Some(view) = lifecycle::ready_view(&state.session, ticket, delay).await else {
            return;
        };

        if let Err(e) = app.emit(ORDER_READY_EVENT, view) {
            warn!(error = %e, "failed to notify window that the order is ready");
        }
    });
}

#[tauri::command]
pub fn get_order_history(app: AppHandle) -> Result<Vec<OrderReceipt>, String> {
    let db = app.db();
    let conn = db.conn.lock().map_err(|e| e.to_string())?;

    db::order_history(&conn).map_err(|e| e.to_string())
}

#[tauri::command]
pub fn open_review_page(app: AppHandle) -> Result<(), String> {
    let url = app.settings().review_url.clone();

    app.opener()
        .open_url(url, None::<&str>)
        .map_err(|e| e.to_string())
}

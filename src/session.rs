use crate::catalog::MenuCatalog;
use crate::config::SessionConfig;
use crate::error::Rejection;
use crate::ledger::SelectionLedger;
use crate::models::{Category, ContactDetails, MenuCard, MenuItem, SelectionEntry, SessionView};
use crate::summary;
use std::sync::Mutex;
use tauri::{AppHandle, Manager};
use tracing::{debug, info, warn};

/// Identifies one submission. Only the timer holding the current ticket may
/// end the pending window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreparationTicket(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Idle,
    Pending(PreparationTicket),
}

#[derive(Debug, Clone)]
pub struct Submission {
    pub ticket: PreparationTicket,
    pub entries: Vec<SelectionEntry>,
    pub estimated_minutes: u32,
}

/// All mutable state for one customer's visit.
#[derive(Debug)]
pub struct OrderSession {
    ledger: SelectionLedger,
    lifecycle: Lifecycle,
    panel_open: bool,
    category: Category,
    contact: ContactDetails,
    pending_label: String,
    issued: u64,
}

impl OrderSession {
    pub fn new(pending_label: impl Into<String>) -> Self {
        Self {
            ledger: SelectionLedger::new(),
            lifecycle: Lifecycle::Idle,
            panel_open: false,
            category: Category::Unfiltered,
            contact: ContactDetails::default(),
            pending_label: pending_label.into(),
            issued: 0,
        }
    }

    pub fn select(&mut self, item: &MenuItem) -> Result<u32, Rejection> {
        if self.is_pending() {
            warn!(item = item.id, "selection rejected, order still processing");
            return Err(Rejection::OrderInProgress);
        }
        if !item.is_available() {
            warn!(item = item.id, "selection rejected, item unavailable");
            return Err(Rejection::ItemUnavailable(item.name.clone()));
        }

        let quantity = self.ledger.add(item);
        debug!(item = item.id, quantity, "item selected");
        Ok(quantity)
    }

    /// Drops one unit of the item. Deselecting something that was never
    /// selected is a no-op and yields `None`.
    pub fn deselect(&mut self, item_id: i64) -> Result<Option<u32>, Rejection> {
        if self.is_pending() {
            warn!(item = item_id, "deselection rejected, order still processing");
            return Err(Rejection::OrderInProgress);
        }

        let remaining = self.ledger.remove(item_id);
        if let Some(quantity) = remaining {
            debug!(item = item_id, quantity, "item deselected");
        }
        if self.ledger.is_empty() {
            self.panel_open = false;
        }

        Ok(remaining)
    }

    pub fn is_selected(&self, item_id: i64) -> bool {
        self.ledger.is_selected(item_id)
    }

    pub fn open_summary(&mut self) -> Result<(), Rejection> {
        if self.is_pending() {
            return Err(Rejection::OrderInProgress);
        }
        if self.ledger.is_empty() {
            return Err(Rejection::EmptyOrder);
        }
        self.panel_open = true;
        Ok(())
    }

    pub fn close_summary(&mut self) {
        self.panel_open = false;
    }

    pub fn switch_category(&mut self, category: Category) {
        debug!(category = category.as_str(), "category view switched");
        self.category = category;
    }

    /// Free text only. Nothing checks or forwards these fields.
    pub fn update_contact(&mut self, contact: ContactDetails) {
        self.contact = contact;
    }

    /// Moves Idle to Pending: the ledger is emptied, the panel closed and a
    /// fresh ticket issued, all under the same `&mut self`.
    pub fn submit(&mut self) -> Result<Submission, Rejection> {
        if self.is_pending() {
            warn!("submission rejected, order still processing");
            return Err(Rejection::OrderInProgress);
        }
        if self.ledger.is_empty() {
            return Err(Rejection::EmptyOrder);
        }

        let entries = self.ledger.entries().to_vec();
        let estimated_minutes = summary::estimated_minutes(&self.ledger);

        self.ledger.clear();
        self.panel_open = false;
        self.issued += 1;
        let ticket = PreparationTicket(self.issued);
        self.lifecycle = Lifecycle::Pending(ticket);

        info!(
            ticket = self.issued,
            items = entries.len(),
            estimated_minutes,
            "order submitted"
        );

        Ok(Submission {
            ticket,
            entries,
            estimated_minutes,
        })
    }

    /// Returns the session to Idle if `ticket` is the one currently pending.
    pub fn finish_preparation(&mut self, ticket: PreparationTicket) -> bool {
        if self.lifecycle != Lifecycle::Pending(ticket) {
            debug!(ticket = ticket.0, "stale preparation timer ignored");
            return false;
        }

        self.lifecycle = Lifecycle::Idle;
        info!(ticket = ticket.0, "order ready, selection reopened");
        true
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.lifecycle, Lifecycle::Pending(_))
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn ledger(&self) -> &SelectionLedger {
        &self.ledger
    }

    pub fn panel_open(&self) -> bool {
        self.panel_open
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn contact(&self) -> &ContactDetails {
        &self.contact
    }

    pub fn summary(&self) -> String {
        summary::summary_text(&self.ledger, self.is_pending(), &self.pending_label)
    }

    pub fn menu(&self, catalog: &MenuCatalog, category: Category) -> Vec<MenuCard> {
        catalog
            .filter(category)
            .into_iter()
            .map(|item| MenuCard {
                item: item.clone(),
                selected: self.is_selected(item.id),
                quantity: self.ledger.quantity_of(item.id),
            })
            .collect()
    }

    pub fn view(&self, notice: Option<String>) -> SessionView {
        SessionView {
            summary: self.summary(),
            pending: self.is_pending(),
            panel_open: self.panel_open,
            entries: self.ledger.entries().to_vec(),
            distinct_items: self.ledger.len(),
            total_quantity: self.ledger.total_quantity(),
            estimated_minutes: summary::estimated_minutes(&self.ledger),
            category: self.category,
            contact: self.contact.clone(),
            notice,
        }
    }
}

pub struct SessionState {
    pub session: Mutex<OrderSession>,
}

impl SessionState {
    pub fn new(session: OrderSession) -> Self {
        Self {
            session: Mutex::new(session),
        }
    }
}

pub trait SessionExt {
    fn session(&self) -> &SessionState;
    fn catalog(&self) -> &MenuCatalog;
    fn settings(&self) -> &SessionConfig;
}

impl SessionExt for AppHandle {
    fn session(&self) -> &SessionState {
        self.state::<SessionState>().inner()
    }

    fn catalog(&self) -> &MenuCatalog {
        self.state::<MenuCatalog>().inner()
    }

    fn settings(&self) -> &SessionConfig {
        self.state::<SessionConfig>().inner()
    }
}

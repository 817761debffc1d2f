//! The form's whole mutable state in one place: store, filter, visible rows,
//! edit mode, input fields and the recency highlighter. Every UI handler
//! receives this object instead of reaching for globals.

use crate::core::edit_state::EditState;
use crate::core::highlighter::{RecencyHighlighter, Tick};
use crate::core::length::{format_length, parse_length};
use crate::core::record_list::RecordListController;
use crate::db::RecordStore;
use crate::errors::{AppError, AppResult};
use crate::models::{BufferType, GroupFilter, Record};
use chrono::{DateTime, Utc};
use std::time::Duration;

/// Current contents of the input widgets.
#[derive(Debug, Clone, PartialEq)]
pub struct FormFields {
    pub length: String,
    /// Free text; the selector only offers [`BufferType`] labels but an
    /// edited record keeps whatever label it was stored with.
    pub buffer_type: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created(i64),
    Updated(i64),
}

pub struct FormSession<S: RecordStore> {
    store: S,
    list: RecordListController,
    edit: EditState,
    highlighter: RecencyHighlighter,
    tick_requested: bool,
    pub fields: FormFields,
}

impl<S: RecordStore> FormSession<S> {
    pub fn new(store: S, default_buffer: BufferType, blink_interval: Duration) -> Self {
        Self {
            store,
            list: RecordListController::default(),
            edit: EditState::Idle,
            highlighter: RecencyHighlighter::new(blink_interval),
            tick_requested: false,
            fields: FormFields {
                length: String::new(),
                buffer_type: default_buffer.as_str().to_string(),
            },
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn visible(&self) -> &[Record] {
        self.list.visible()
    }

    pub fn filter(&self) -> GroupFilter {
        self.list.filter()
    }

    pub fn edit_state(&self) -> EditState {
        self.edit
    }

    pub fn highlighter(&self) -> &RecencyHighlighter {
        &self.highlighter
    }

    /// True once after a refresh found recent rows while the blink loop
    /// was idle: the caller must schedule the first tick.
    pub fn take_tick_request(&mut self) -> bool {
        std::mem::take(&mut self.tick_requested)
    }

    pub fn tick(&mut self, now: DateTime<Utc>) -> Tick {
        self.highlighter.tick(now)
    }

    /// Reload from the store, re-apply the filter and feed the highlighter.
    pub fn refresh(&mut self, now: DateTime<Utc>) -> AppResult<()> {
        let records = self.store.list()?;
        let recent = self.list.refresh(records, now);
        if self.highlighter.sync(recent) {
            self.tick_requested = true;
        }
        Ok(())
    }

    pub fn set_filter(&mut self, filter: GroupFilter, now: DateTime<Utc>) -> AppResult<()> {
        self.list.set_filter(filter);
        self.refresh(now)
    }

    /// Select a record for editing and load its values into the fields.
    pub fn begin_edit(&mut self, id: i64) -> AppResult<()> {
        let record = match self.list.find(id) {
            Some(r) => r.clone(),
            None => self.store.get(id)?.ok_or(AppError::RecordNotFound(id))?,
        };

        self.fields.length = format_length(record.length);
        self.fields.buffer_type = record.buffer_type;
        self.edit.begin(id);
        Ok(())
    }

    /// Leave edit mode and clear the length input.
    pub fn cancel_edit(&mut self) {
        self.edit.reset();
        self.fields.length.clear();
    }

    /// Interaction outside any record. Only meaningful while editing;
    /// returns true when it cancelled an edit.
    pub fn dismiss(&mut self) -> bool {
        if self.edit.is_editing() {
            self.cancel_edit();
            true
        } else {
            false
        }
    }

    /// Create or update depending on the edit state.
    ///
    /// Invalid input leaves everything untouched. A failed update still
    /// drops back to `Idle` before the error is returned.
    pub fn submit(&mut self, now: DateTime<Utc>) -> AppResult<SubmitOutcome> {
        let length = parse_length(&self.fields.length)?;
        let buffer_type = self.fields.buffer_type.clone();

        let outcome = match self.edit.target() {
            None => SubmitOutcome::Created(self.store.create_at(length, &buffer_type, now)?),
            Some(id) => {
                let res = self.store.update(id, length, &buffer_type);
                self.cancel_edit();
                if let Err(e) = res {
                    self.refresh(now).ok();
                    return Err(e);
                }
                SubmitOutcome::Updated(id)
            }
        };

        self.fields.length.clear();
        self.refresh(now)?;
        Ok(outcome)
    }

    /// Delete an already confirmed record. Deleting the record under edit
    /// returns to `Idle`; an unknown id is an error and changes nothing.
    pub fn delete(&mut self, id: i64, now: DateTime<Utc>) -> AppResult<()> {
        self.store.delete(id)?;
        if self.edit.on_deleted(id) {
            self.fields.length.clear();
        }
        self.refresh(now)
    }
}

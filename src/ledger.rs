//! The ledger: entry bookkeeping on top of a worksheet store.
//!
//! Every operation reads the whole worksheet, and every change rewrites
//! it. Rows the tracker cannot interpret are skipped by all reads and left
//! untouched by all writes. Read-modify-write cycles are serialized by a
//! mutex so concurrent requests cannot lose each other's rows.

use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{Datelike, NaiveDate, NaiveTime};
use tracing::{debug, info, warn};

use crate::calculation::{
    build_events, daily_balances, find_overlap, format_clock, format_display_date,
    format_signed_hours, month_grid, summarize, target_hours,
};
use crate::config::{ConfigLoader, FormConfig};
use crate::error::{TrackerError, TrackerResult};
use crate::models::{
    BalanceSummary, CalendarView, Entry, EntryKind, EntryUpdate, FormDefaults, NewEntry,
    TargetPolicy, TimeInterval,
};
use crate::store::{SheetRow, SheetStore};

/// Entry bookkeeping over a [`SheetStore`].
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use hours_tracker::config::FormConfig;
/// use hours_tracker::ledger::Ledger;
/// use hours_tracker::models::{EntryKind, NewEntry, TargetPolicy};
/// use hours_tracker::store::MemorySheetStore;
/// use chrono::{NaiveDate, NaiveTime};
///
/// let ledger = Ledger::new(
///     Arc::new(MemorySheetStore::new()),
///     TargetPolicy::default(),
///     FormConfig::default(),
/// );
/// let date = NaiveDate::from_ymd_opt(2026, 1, 13).unwrap();
/// let entry = ledger.add_entry(NewEntry {
///     date,
///     kind: EntryKind::Work,
///     start: NaiveTime::from_hms_opt(7, 0, 0),
///     end: NaiveTime::from_hms_opt(16, 30, 0),
///     notes: String::new(),
/// }).unwrap();
///
/// let summary = ledger.summary(date).unwrap();
/// assert_eq!(entry.id, 0);
/// assert_eq!(summary.week.balance_display, "0:30");
/// ```
pub struct Ledger {
    store: Arc<dyn SheetStore>,
    policy: TargetPolicy,
    form: FormConfig,
    write_lock: Mutex<()>,
}

impl Ledger {
    /// Creates a ledger over `store`.
    pub fn new(store: Arc<dyn SheetStore>, policy: TargetPolicy, form: FormConfig) -> Self {
        Self {
            store,
            policy,
            form,
            write_lock: Mutex::new(()),
        }
    }

    /// Creates a ledger using the policy and form defaults of `config`.
    pub fn from_config(config: &ConfigLoader, store: Arc<dyn SheetStore>) -> Self {
        Self::new(store, config.policy().clone(), config.form().clone())
    }

    /// Returns the target-hours policy.
    pub fn policy(&self) -> &TargetPolicy {
        &self.policy
    }

    /// All readable entries, in sheet order.
    pub fn entries(&self) -> TrackerResult<Vec<Entry>> {
        Ok(self.load()?.1)
    }

    /// Readable entries logged on `date`, in sheet order.
    pub fn entries_on(&self, date: NaiveDate) -> TrackerResult<Vec<Entry>> {
        let mut entries = self.entries()?;
        entries.retain(|e| e.date == date);
        Ok(entries)
    }

    /// Distinct logged dates, newest first.
    pub fn dates(&self) -> TrackerResult<Vec<NaiveDate>> {
        let mut dates: Vec<NaiveDate> = self.entries()?.iter().map(|e| e.date).collect();
        dates.sort_unstable_by(|a, b| b.cmp(a));
        dates.dedup();
        Ok(dates)
    }

    /// Looks up one entry by row id.
    pub fn entry(&self, id: usize) -> TrackerResult<Entry> {
        let rows = self.store.read_rows()?;
        let row = rows.get(id).ok_or(TrackerError::EntryNotFound { id })?;
        Entry::from_row(id, row)
    }

    /// Validates and appends a new entry.
    ///
    /// # Errors
    ///
    /// - [`TrackerError::InvalidEntry`] when a work entry lacks a time or
    ///   ends at or before it starts
    /// - [`TrackerError::OverlappingEntry`] when a work entry overlaps
    ///   another work entry on the same date
    pub fn add_entry(&self, new: NewEntry) -> TrackerResult<Entry> {
        let _guard = self.lock()?;
        let (mut rows, entries) = self.load()?;

        let interval = build_interval(new.kind, new.start, new.end)?;
        if let Some(interval) = &interval {
            check_overlap(&entries, new.date, interval, None)?;
        }

        let entry = Entry {
            id: rows.len(),
            date: new.date,
            kind: new.kind,
            interval,
            notes: new.notes.trim().to_string(),
        };
        rows.push(entry.to_row());
        self.store.write_rows(&rows)?;

        info!(
            id = entry.id,
            date = %entry.date,
            kind = %entry.kind,
            worked_hours = %entry.worked_hours(),
            "Entry added"
        );
        Ok(entry)
    }

    /// Applies `update` to the entry with row id `id`.
    ///
    /// Switching to a leave kind clears the times; switching to work needs
    /// both times, either kept from the entry or supplied in `update`.
    pub fn update_entry(&self, id: usize, update: EntryUpdate) -> TrackerResult<Entry> {
        let _guard = self.lock()?;
        let (mut rows, entries) = self.load()?;

        let row = rows.get(id).ok_or(TrackerError::EntryNotFound { id })?;
        let current = Entry::from_row(id, row)?;

        let kind = update.kind.unwrap_or(current.kind);
        let start = update.start.or(current.interval.map(|i| i.start));
        let end = update.end.or(current.interval.map(|i| i.end));
        let interval = build_interval(kind, start, end)?;
        if let Some(interval) = &interval {
            check_overlap(&entries, current.date, interval, Some(id))?;
        }

        let entry = Entry {
            kind,
            interval,
            notes: update
                .notes
                .map(|n| n.trim().to_string())
                .unwrap_or(current.notes),
            ..current
        };
        rows[id] = entry.to_row();
        self.store.write_rows(&rows)?;

        info!(id, date = %entry.date, kind = %entry.kind, "Entry updated");
        Ok(entry)
    }

    /// Removes the row with id `id` and returns it.
    ///
    /// Unreadable rows can be deleted too. Later rows shift down by one id.
    pub fn delete_entry(&self, id: usize) -> TrackerResult<SheetRow> {
        let _guard = self.lock()?;
        let mut rows = self.store.read_rows()?;
        if id >= rows.len() {
            return Err(TrackerError::EntryNotFound { id });
        }

        let removed = rows.remove(id);
        self.store.write_rows(&rows)?;

        info!(id, date = %removed.date, "Entry deleted");
        Ok(removed)
    }

    /// Weekly and monthly balances around `reference`.
    pub fn summary(&self, reference: NaiveDate) -> TrackerResult<BalanceSummary> {
        let entries = self.entries()?;
        let days = daily_balances(&entries, &self.policy);
        let summary = summarize(&days, reference, self.policy.week_start)?;
        debug!(
            reference = %reference,
            week = %summary.week.balance_display,
            month = %summary.month.balance_display,
            "Summary computed"
        );
        Ok(summary)
    }

    /// Calendar events and month grid for `year`-`month`.
    pub fn calendar(&self, year: i32, month: u32) -> TrackerResult<CalendarView> {
        let entries = self.entries()?;
        let days = daily_balances(&entries, &self.policy);
        let grid = month_grid(year, month, self.policy.week_start, &days)?;

        let in_month: Vec<Entry> = entries
            .into_iter()
            .filter(|e| e.date.year() == year && e.date.month() == month)
            .collect();
        let events = build_events(&in_month, &days);

        Ok(CalendarView { events, grid })
    }

    /// Pre-filled form values for `date`.
    pub fn form_defaults(&self, date: NaiveDate) -> FormDefaults {
        let target = target_hours(date, &self.policy);
        FormDefaults {
            date,
            display_date: format_display_date(date),
            target_hours: target,
            target_display: format_signed_hours(target),
            default_start: format_clock(self.form.default_start),
            default_end: format_clock(self.form.default_end),
            kinds: EntryKind::ALL.to_vec(),
        }
    }

    fn lock(&self) -> TrackerResult<MutexGuard<'_, ()>> {
        self.write_lock
            .lock()
            .map_err(|_| TrackerError::StorageError {
                path: self.store.location(),
                message: "ledger lock poisoned".to_string(),
            })
    }

    /// Reads the sheet, returning the raw rows and the readable entries.
    fn load(&self) -> TrackerResult<(Vec<SheetRow>, Vec<Entry>)> {
        let rows = self.store.read_rows()?;
        let entries = rows
            .iter()
            .enumerate()
            .filter_map(|(id, row)| match Entry::from_row(id, row) {
                Ok(entry) => Some(entry),
                Err(err) => {
                    warn!(row = id, error = %err, "Skipping unreadable sheet row");
                    None
                }
            })
            .collect();
        Ok((rows, entries))
    }
}

/// Checks the times of a work entry; leave kinds carry no interval.
fn build_interval(
    kind: EntryKind,
    start: Option<NaiveTime>,
    end: Option<NaiveTime>,
) -> TrackerResult<Option<TimeInterval>> {
    if !kind.is_work() {
        return Ok(None);
    }

    let missing = |field: &str| TrackerError::InvalidEntry {
        field: field.to_string(),
        message: "required for work entries".to_string(),
    };
    let start = start.ok_or_else(|| missing("start_time"))?;
    let end = end.ok_or_else(|| missing("end_time"))?;
    TimeInterval::new(start, end).map(Some)
}

fn check_overlap(
    entries: &[Entry],
    date: NaiveDate,
    interval: &TimeInterval,
    exclude: Option<usize>,
) -> TrackerResult<()> {
    match find_overlap(entries, date, interval, exclude) {
        Some(existing) => {
            warn!(
                date = %date,
                existing_id = existing.id,
                "Rejected overlapping work entry"
            );
            Err(TrackerError::OverlappingEntry {
                date,
                start: interval.start,
                end: interval.end,
                existing_id: existing.id,
            })
        }
        None => Ok(()),
    }
}

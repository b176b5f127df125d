//! Event store implementation
//!
//! The store is the single owner of event records and of the registration
//! relation. Each record sits behind its own mutex so writers touching the
//! same event serialize while writers on different events run in parallel.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;
use crate::models::event::{Event, EventId};
use crate::models::registration::Registration;
use crate::models::user::UserId;
use crate::utils::errors::{CampusError, Result};

/// An event together with the users holding a place in it
#[derive(Debug, Clone, PartialEq)]
pub struct EventRecord {
    pub event: Event,
    /// Ordered by registration time, at most one entry per user
    registrations: Vec<Registration>,
}

impl EventRecord {
    pub fn new(event: Event) -> Self {
        Self {
            event,
            registrations: Vec::new(),
        }
    }

    pub fn registrations(&self) -> &[Registration] {
        &self.registrations
    }

    pub fn is_registered(&self, user_id: &UserId) -> bool {
        self.registrations.iter().any(|r| &r.user_id == user_id)
    }

    /// Record the relation without touching the count. Callers adjust
    /// `event.registrations` themselves in the same mutation.
    pub(crate) fn add_registration(&mut self, user_id: UserId) -> Result<()> {
        if self.is_registered(&user_id) {
            return Err(CampusError::AlreadyRegistered {
                user_id,
                event_id: self.event.id.clone(),
            });
        }
        self.registrations.push(Registration::new(user_id, self.event.id.clone()));
        self.check_relation_count()
    }

    pub(crate) fn remove_registration(&mut self, user_id: &UserId) -> Result<Registration> {
        let position = self
            .registrations
            .iter()
            .position(|r| &r.user_id == user_id)
            .ok_or_else(|| CampusError::NotRegistered {
                user_id: user_id.clone(),
                event_id: self.event.id.clone(),
            })?;
        Ok(self.registrations.remove(position))
    }

    /// Apply `delta` to the registration count, enforcing
    /// `relations <= registrations <= max_capacity`.
    pub(crate) fn apply_delta(&mut self, delta: i64) -> Result<()> {
        let requested = i64::from(self.event.registrations) + delta;
        if requested > i64::from(self.event.max_capacity) {
            return Err(CampusError::CapacityExceeded {
                event_id: self.event.id.clone(),
                capacity: self.event.max_capacity,
                requested,
            });
        }
        if requested < 0 {
            return Err(CampusError::InvalidState(format!(
                "event {} registration count would drop to {}",
                self.event.id, requested
            )));
        }
        // the bounds above keep `requested` within 0..=u32::MAX
        self.event.registrations = u32::try_from(requested)
            .map_err(|_| CampusError::InvalidState(format!("registration count {requested} out of range")))?;
        self.check_relation_count()
    }

    fn check_relation_count(&self) -> Result<()> {
        if self.registrations.len() > self.event.registrations as usize {
            return Err(CampusError::InvalidState(format!(
                "event {} has {} registered users but a count of {}",
                self.event.id,
                self.registrations.len(),
                self.event.registrations
            )));
        }
        Ok(())
    }
}

#[derive(Default)]
struct StoreInner {
    order: RwLock<Vec<EventId>>,
    records: RwLock<HashMap<EventId, Arc<Mutex<EventRecord>>>>,
}

/// In-memory event store shared by all services
#[derive(Clone, Default)]
pub struct EventStore {
    inner: Arc<StoreInner>,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an event. Fails if the id is taken or the event breaks the
    /// capacity invariant.
    pub fn insert(&self, event: Event) -> Result<Event> {
        event.validate().map_err(CampusError::InvalidInput)?;

        let mut records = write(&self.inner.records);
        if records.contains_key(&event.id) {
            return Err(CampusError::InvalidInput(format!("event {} already exists", event.id)));
        }
        let id = event.id.clone();
        records.insert(id.clone(), Arc::new(Mutex::new(EventRecord::new(event.clone()))));
        write(&self.inner.order).push(id);
        drop(records);

        debug!(event_id = %event.id, capacity = event.max_capacity, "Event added to store");
        Ok(event)
    }

    /// Find event by ID
    pub fn get(&self, event_id: &EventId) -> Result<Event> {
        Ok(self.record(event_id)?.event)
    }

    /// Consistent copy of an event and its registrations
    pub fn record(&self, event_id: &EventId) -> Result<EventRecord> {
        let slot = self.slot(event_id)?;
        let record = lock(&slot).clone();
        Ok(record)
    }

    /// All events in insertion order
    pub fn list(&self) -> Vec<Event> {
        self.records().into_iter().map(|r| r.event).collect()
    }

    /// All records in insertion order. Each record is a committed state;
    /// records are not captured atomically with respect to each other.
    pub fn records(&self) -> Vec<EventRecord> {
        let ids = read(&self.inner.order).clone();
        let slots: Vec<Arc<Mutex<EventRecord>>> = {
            let records = read(&self.inner.records);
            ids.iter().filter_map(|id| records.get(id).cloned()).collect()
        };
        slots.iter().map(|slot| lock(slot).clone()).collect()
    }

    pub fn len(&self) -> usize {
        read(&self.inner.order).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Low-level count adjustment. The registration service keeps the
    /// relation and the count in step; calling this directly is meant for
    /// data corrections only.
    pub fn set_registration_count(&self, event_id: &EventId, delta: i64) -> Result<Event> {
        self.update(event_id, |record| {
            record.apply_delta(delta)?;
            Ok(record.event.clone())
        })
    }

    /// Run `mutation` against a copy of the record while holding the
    /// record's lock, committing the copy only if the mutation succeeds.
    pub fn update<T, F>(&self, event_id: &EventId, mutation: F) -> Result<T>
    where
        F: FnOnce(&mut EventRecord) -> Result<T>,
    {
        let slot = self.slot(event_id)?;
        let mut guard = lock(&slot);
        let mut draft = guard.clone();
        let output = mutation(&mut draft)?;
        *guard = draft;
        Ok(output)
    }

    /// Events the user currently holds a place in, in store order
    pub fn registered_events(&self, user_id: &UserId) -> Vec<Event> {
        self.records()
            .into_iter()
            .filter(|r| r.is_registered(user_id))
            .map(|r| r.event)
            .collect()
    }

    fn slot(&self, event_id: &EventId) -> Result<Arc<Mutex<EventRecord>>> {
        read(&self.inner.records)
            .get(event_id)
            .cloned()
            .ok_or_else(|| CampusError::EventNotFound { event_id: event_id.clone() })
    }
}

// A panic while holding a guard can only happen before a draft is committed,
// so the protected data is still a committed state and safe to reuse.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

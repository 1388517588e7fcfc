//! In-memory fakes for the sync coordinator's ports.
//!
//! Each fake stores fixed responses and records calls so coordinator tests
//! can assert on ordering, cancellation, and cache behaviour without I/O.
//! Network stubs take an optional artificial delay for latency and
//! cancellation tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use evergreen_core::calendar::ports::{
    CalendarEventSource, CalendarViewSink, IntegrationsGateway, LocalCacheStore, SessionSource,
};
use evergreen_core::LoadUpdate;
use evergreen_domain::{
    CacheEntry, ConnectionStatus, DateWindow, EvergreenError, Result, Session, SessionStatus,
    SyncReport, SyncedCalendarEvent,
};

/// Sink that records every emission with its arrival instant.
#[derive(Default)]
pub struct RecordingSink {
    updates: Mutex<Vec<(LoadUpdate, Instant)>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn updates(&self) -> Vec<LoadUpdate> {
        self.updates.lock().unwrap().iter().map(|(u, _)| u.clone()).collect()
    }

    pub fn last(&self) -> Option<LoadUpdate> {
        self.updates.lock().unwrap().last().map(|(u, _)| u.clone())
    }

    pub fn first_arrival(&self) -> Option<Instant> {
        self.updates.lock().unwrap().first().map(|(_, at)| *at)
    }
}

impl CalendarViewSink for RecordingSink {
    fn emit(&self, update: LoadUpdate) {
        self.updates.lock().unwrap().push((update, Instant::now()));
    }
}

/// In-memory window-keyed cache with the monotonic `fetched_at` guard.
#[derive(Default)]
pub struct MemoryCacheStore {
    entries: Mutex<HashMap<String, CacheEntry>>,
}

impl MemoryCacheStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(&self, window: &DateWindow, entry: CacheEntry) {
        self.entries.lock().unwrap().insert(window.cache_key(), entry);
    }

    pub fn entry(&self, window: &DateWindow) -> Option<CacheEntry> {
        self.entries.lock().unwrap().get(&window.cache_key()).cloned()
    }
}

impl LocalCacheStore for MemoryCacheStore {
    fn get(&self, window: &DateWindow) -> Option<CacheEntry> {
        self.entries.lock().unwrap().get(&window.cache_key()).cloned()
    }

    fn put(&self, window: &DateWindow, entry: CacheEntry) -> bool {
        let mut entries = self.entries.lock().unwrap();
        let key = window.cache_key();
        if let Some(existing) = entries.get(&key) {
            if entry.fetched_at < existing.fetched_at {
                return false;
            }
        }
        entries.insert(key, entry);
        true
    }
}

/// Session source with a fixed response set, optional delay, and optional
/// injected failure.
pub struct StubSessionSource {
    sessions: Vec<Session>,
    delay: Option<Duration>,
    failure: Option<EvergreenError>,
    calls: AtomicUsize,
    windows: Mutex<Vec<DateWindow>>,
}

impl StubSessionSource {
    pub fn new(sessions: Vec<Session>) -> Self {
        Self {
            sessions,
            delay: None,
            failure: None,
            calls: AtomicUsize::new(0),
            windows: Mutex::new(Vec::new()),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn with_failure(mut self, failure: EvergreenError) -> Self {
        self.failure = Some(failure);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requested_windows(&self) -> Vec<DateWindow> {
        self.windows.lock().unwrap().clone()
    }
}

#[async_trait]
impl SessionSource for StubSessionSource {
    async fn get_sessions(&self, window: &DateWindow) -> Result<Vec<Session>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.windows.lock().unwrap().push(*window);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(self.sessions.clone()),
        }
    }

    async fn update_session_status(&self, id: &str, status: SessionStatus) -> Result<Session> {
        let mut session = self
            .sessions
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or_else(|| EvergreenError::NotFound(format!("session {id}")))?;
        session.status = status;
        Ok(session)
    }
}

/// Calendar source with a fixed response set, optional delay, and optional
/// injected failure.
pub struct StubCalendarSource {
    events: Vec<SyncedCalendarEvent>,
    delay: Option<Duration>,
    failure: Option<EvergreenError>,
    fetch_calls: AtomicUsize,
    sync_calls: AtomicUsize,
}

impl StubCalendarSource {
    pub fn new(events: Vec<SyncedCalendarEvent>) -> Self {
        Self {
            events,
            delay: None,
            failure: None,
            fetch_calls: AtomicUsize::new(0),
            sync_calls: AtomicUsize::new(0),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn with_failure(mut self, failure: EvergreenError) -> Self {
        self.failure = Some(failure);
        self
    }

    pub fn fetch_count(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }

    pub fn sync_count(&self) -> usize {
        self.sync_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CalendarEventSource for StubCalendarSource {
    async fn get_events(&self, _window: &DateWindow) -> Result<Vec<SyncedCalendarEvent>> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(self.events.clone()),
        }
    }

    async fn sync_calendar(&self, _window: &DateWindow) -> Result<SyncReport> {
        self.sync_calls.fetch_add(1, Ordering::SeqCst);
        Ok(SyncReport { count: self.events.len(), message: "synced".into() })
    }
}

/// Integrations gateway with a fixed connection state and optional delay.
pub struct StubIntegrations {
    connected: bool,
    sync_enabled: bool,
    delay: Option<Duration>,
}

impl StubIntegrations {
    pub fn connected() -> Self {
        Self { connected: true, sync_enabled: false, delay: None }
    }

    pub fn disconnected() -> Self {
        Self { connected: false, sync_enabled: false, delay: None }
    }

    pub fn with_sync_enabled(mut self) -> Self {
        self.sync_enabled = true;
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

#[async_trait]
impl IntegrationsGateway for StubIntegrations {
    async fn connection_status(&self) -> Result<ConnectionStatus> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        Ok(ConnectionStatus {
            connected: self.connected,
            sync_enabled: self.sync_enabled,
            email: None,
            last_sync: None,
        })
    }
}

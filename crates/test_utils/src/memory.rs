//! In-Memory Port Adapters
//!
//! Adapters that keep review schedules and published events in memory, for
//! exercising the review schedule service without a database or queue.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use core_kernel::{DomainPort, PortError, PrisonNumber};
use domain_review::{
    ReviewEventPublisher, ReviewSchedule, ReviewScheduleEvent, ReviewSchedulePort,
    ReviewScheduleStatusUpdate,
};

/// In-memory implementation of [`ReviewSchedulePort`]
///
/// Schedules are kept in insertion order; history is never deleted.
#[derive(Debug, Default, Clone)]
pub struct InMemoryReviewSchedulePort {
    schedules: Arc<RwLock<Vec<ReviewSchedule>>>,
    reject_creates: Arc<AtomicBool>,
}

impl InMemoryReviewSchedulePort {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populates with schedules
    pub async fn with_schedules(schedules: Vec<ReviewSchedule>) -> Self {
        let port = Self::new();
        port.schedules.write().await.extend(schedules);
        port
    }

    /// Makes every later `create_review_schedule` call fail with a connection
    /// error; updates keep working
    pub fn reject_creates(&self) {
        self.reject_creates.store(true, Ordering::SeqCst);
    }

    /// All schedules for a prisoner, oldest first
    pub async fn schedules_for(&self, prison_number: &PrisonNumber) -> Vec<ReviewSchedule> {
        self.schedules
            .read()
            .await
            .iter()
            .filter(|s| &s.prison_number == prison_number)
            .cloned()
            .collect()
    }

    pub async fn len(&self) -> usize {
        self.schedules.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.schedules.read().await.is_empty()
    }
}

impl DomainPort for InMemoryReviewSchedulePort {}

#[async_trait]
impl ReviewSchedulePort for InMemoryReviewSchedulePort {
    async fn get_active_review_schedule(
        &self,
        prison_number: &PrisonNumber,
    ) -> Result<Option<ReviewSchedule>, PortError> {
        Ok(self
            .schedules
            .read()
            .await
            .iter()
            .rev()
            .find(|s| &s.prison_number == prison_number && s.is_active())
            .cloned())
    }

    async fn create_review_schedule(&self, schedule: &ReviewSchedule) -> Result<(), PortError> {
        if self.reject_creates.load(Ordering::SeqCst) {
            return Err(PortError::connection("review schedule store unavailable"));
        }
        let mut schedules = self.schedules.write().await;
        if schedules.iter().any(|s| s.reference == schedule.reference) {
            return Err(PortError::conflict(format!(
                "Review schedule {} already exists",
                schedule.reference
            )));
        }
        schedules.push(schedule.clone());
        Ok(())
    }

    async fn update_review_schedule(&self, schedule: &ReviewSchedule) -> Result<(), PortError> {
        let mut schedules = self.schedules.write().await;
        let existing = schedules
            .iter_mut()
            .find(|s| s.reference == schedule.reference)
            .ok_or_else(|| PortError::not_found("ReviewSchedule", schedule.reference))?;
        *existing = schedule.clone();
        Ok(())
    }

    async fn update_review_schedule_status(
        &self,
        update: &ReviewScheduleStatusUpdate,
    ) -> Result<ReviewSchedule, PortError> {
        let mut schedules = self.schedules.write().await;
        let existing = schedules
            .iter_mut()
            .find(|s| s.reference == update.reference)
            .ok_or_else(|| PortError::not_found("ReviewSchedule", update.reference))?;

        existing.schedule_status = update.status;
        existing.exemption_reason = update.exemption_reason.clone();
        existing.earliest_review_date = update.earliest_review_date;
        existing.latest_review_date = update.latest_review_date;
        existing.updated_at = Utc::now();
        Ok(existing.clone())
    }
}

/// Event publisher that records every event it is given
#[derive(Debug, Default, Clone)]
pub struct RecordingEventPublisher {
    events: Arc<RwLock<Vec<ReviewScheduleEvent>>>,
}

impl RecordingEventPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events published so far, in order
    pub async fn events(&self) -> Vec<ReviewScheduleEvent> {
        self.events.read().await.clone()
    }

    /// Names of the events published so far, in order
    pub async fn event_types(&self) -> Vec<&'static str> {
        self.events
            .read()
            .await
            .iter()
            .map(ReviewScheduleEvent::event_type)
            .collect()
    }
}

impl DomainPort for RecordingEventPublisher {}

#[async_trait]
impl ReviewEventPublisher for RecordingEventPublisher {
    async fn publish(&self, event: &ReviewScheduleEvent) -> Result<(), PortError> {
        self.events.write().await.push(event.clone());
        Ok(())
    }
}

/// Event publisher whose queue is always unreachable
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableEventPublisher;

impl DomainPort for UnavailableEventPublisher {}

#[async_trait]
impl ReviewEventPublisher for UnavailableEventPublisher {
    async fn publish(&self, _event: &ReviewScheduleEvent) -> Result<(), PortError> {
        Err(PortError::connection("event queue unavailable"))
    }
}

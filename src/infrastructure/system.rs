// src/infrastructure/system.rs
use crate::application::ports::{ids::IdGenerator, time::Clock};
use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Default, Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Random (v4) identifiers.
#[derive(Default, Clone)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn new_id(&self) -> Uuid {
        Uuid::new_v4()
    }
}

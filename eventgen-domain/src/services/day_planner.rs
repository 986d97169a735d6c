// Day planner
// Lays out one day of events across its part files

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use rand::Rng;

use crate::entities::{part_file_name, Event, GenerationSettings, MAX_STEP_SECONDS};
use crate::services::EventFactory;

#[derive(Debug, Clone, PartialEq)]
pub struct DayPart {
    pub number: u32,
    pub events: Vec<Event>,
}

impl DayPart {
    pub fn file_name(&self) -> String {
        part_file_name(self.number)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DayPlanner {
    parts_per_day: u32,
    events_per_part: u32,
}

impl DayPlanner {
    pub fn new(settings: &GenerationSettings) -> Self {
        Self {
            parts_per_day: settings.parts_per_day,
            events_per_part: settings.events_per_part,
        }
    }

    /// The timestamp cursor starts at midnight and keeps advancing across
    /// part boundaries; every event is 1..=60 seconds after the previous one.
    pub fn plan<R: Rng + ?Sized>(
        &self,
        factory: &EventFactory,
        rng: &mut R,
        date: NaiveDate,
    ) -> Vec<DayPart> {
        let mut cursor: NaiveDateTime = date.and_time(NaiveTime::MIN);
        let mut parts = Vec::with_capacity(self.parts_per_day as usize);

        for number in 1..=self.parts_per_day {
            let mut events = Vec::with_capacity(self.events_per_part as usize);
            for _ in 0..self.events_per_part {
                let step = rng.random_range(1..=MAX_STEP_SECONDS as i64);
                cursor += TimeDelta::seconds(step);
                events.push(factory.create_event(rng, cursor));
            }
            parts.push(DayPart { number, events });
        }

        parts
    }
}

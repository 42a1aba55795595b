//! Shared fixtures for core integration tests.
#![allow(dead_code)]

use chrono::Utc;
use pacer_core::derivation::ingest;
use pacer_core::query::Row;
use pacer_model::{NewRunner, RunnerID, RunnerRecord};

/// Builder for runner records with sensible defaults.
pub struct RunnerFixture {
    submission: NewRunner,
}

impl RunnerFixture {
    pub fn new(name: &str) -> Self {
        Self {
            submission: NewRunner {
                name: name.to_string(),
                bib_number: format!("BIB-{}", name.to_uppercase()),
                city: "Pune".to_string(),
                start_time: "08:00".to_string(),
                end_time: "09:00".to_string(),
                did_finish: true,
                ..Default::default()
            },
        }
    }

    pub fn city(mut self, city: &str) -> Self {
        self.submission.city = city.to_string();
        self
    }

    pub fn categories(mut self, categories: &[&str]) -> Self {
        self.submission.categories = to_strings(categories);
        self
    }

    pub fn times(mut self, start: &str, end: &str) -> Self {
        self.submission.start_time = start.to_string();
        self.submission.end_time = end.to_string();
        self
    }

    pub fn did_not_finish(mut self) -> Self {
        self.submission.did_finish = false;
        self
    }

    pub fn medal(mut self) -> Self {
        self.submission.medal_received = true;
        self
    }

    pub fn certificate(mut self) -> Self {
        self.submission.certificate_received = true;
        self
    }

    pub fn sponsors(mut self, sponsors: &[&str]) -> Self {
        self.submission.sponsors = to_strings(sponsors);
        self
    }

    pub fn stalls(mut self, stalls: &[&str]) -> Self {
        self.submission.refreshment_stalls = to_strings(stalls);
        self
    }

    pub fn submission(self) -> NewRunner {
        self.submission
    }

    pub fn build(self) -> RunnerRecord {
        ingest(self.submission, RunnerID::new(), Utc::now()).expect("fixture times parse")
    }
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// Eight runners across four cities and three categories.
///
/// | name   | city    | categories                   | minutes | finished |
/// |--------|---------|------------------------------|---------|----------|
/// | Asha   | Pune    | Half Marathon, 10K           | 100     | yes      |
/// | Bilal  | Mumbai  | Full Marathon                | 245     | yes      |
/// | Chitra | Mumbai  | Half Marathon                | 130     | yes      |
/// | Dev    | Pune    | Full Marathon, Half Marathon | 300     | no       |
/// | Esha   | Delhi   | 10K                          | 60      | yes      |
/// | Farid  | Delhi   | Half Marathon                | 115     | yes      |
/// | Gita   | Chennai | Full Marathon                | 230     | yes      |
/// | Hari   | Chennai | Half Marathon                | 150     | no       |
pub fn race_day() -> Vec<RunnerRecord> {
    vec![
        RunnerFixture::new("Asha")
            .categories(&["Half Marathon", "10K"])
            .times("08:00", "09:40")
            .medal()
            .certificate()
            .sponsors(&["Nike", "Adidas"])
            .stalls(&["Water Point 1"])
            .build(),
        RunnerFixture::new("Bilal")
            .city("Mumbai")
            .categories(&["Full Marathon"])
            .times("06:00", "10:05")
            .medal()
            .sponsors(&["Nike"])
            .stalls(&["Water Point 1", "Energy Hub"])
            .build(),
        RunnerFixture::new("Chitra")
            .city("Mumbai")
            .categories(&["Half Marathon"])
            .times("07:00", "09:10")
            .certificate()
            .sponsors(&["Adidas"])
            .build(),
        RunnerFixture::new("Dev")
            .categories(&["Full Marathon", "Half Marathon"])
            .times("06:00", "11:00")
            .did_not_finish()
            .sponsors(&["Nike"])
            .build(),
        RunnerFixture::new("Esha")
            .city("Delhi")
            .categories(&["10K"])
            .times("08:00", "09:00")
            .sponsors(&["Puma"])
            .build(),
        RunnerFixture::new("Farid")
            .city("Delhi")
            .categories(&["Half Marathon"])
            .times("07:30", "09:25")
            .build(),
        RunnerFixture::new("Gita")
            .city("Chennai")
            .categories(&["Full Marathon"])
            .times("06:00", "09:50")
            .medal()
            .build(),
        RunnerFixture::new("Hari")
            .city("Chennai")
            .categories(&["Half Marathon"])
            .times("08:00", "10:30")
            .did_not_finish()
            .build(),
    ]
}

pub fn field<'a>(rows: &'a [Row], name: &str) -> Vec<&'a serde_json::Value> {
    rows.iter().map(|row| &row[name]).collect()
}

pub fn names(rows: &[Row]) -> Vec<&str> {
    rows.iter()
        .map(|row| row["name"].as_str().unwrap_or_default())
        .collect()
}

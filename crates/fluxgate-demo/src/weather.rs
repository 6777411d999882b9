//! In-memory weather data source serving pages to the grids

use chrono::{Days, Local, NaiveDate};

use crate::paging::{PageRequest, PageResult};

const SUMMARIES: [&str; 10] = [
    "Freezing",
    "Bracing",
    "Chilly",
    "Cool",
    "Mild",
    "Warm",
    "Balmy",
    "Hot",
    "Sweltering",
    "Scorching",
];

/// Rows returned when a request does not say how many it wants
const DEFAULT_COUNT: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherForecast {
    pub date: NaiveDate,
    pub temperature_c: i32,
    pub summary: &'static str,
}

impl WeatherForecast {
    pub fn temperature_f(&self) -> i32 {
        32 + (self.temperature_c as f64 / 0.5556) as i32
    }
}

pub struct WeatherProvider {
    forecasts: Vec<WeatherForecast>,
}

impl WeatherProvider {
    /// Provider with `record_count` daily forecasts starting tomorrow
    pub fn new(record_count: usize) -> Self {
        Self::starting_at(Local::now().date_naive(), record_count)
    }

    /// Forecasts are derived from their index, so the same arguments always
    /// produce the same data
    pub fn starting_at(start: NaiveDate, record_count: usize) -> Self {
        let forecasts = (1..=record_count)
            .map(|index| WeatherForecast {
                date: start
                    .checked_add_days(Days::new(index as u64))
                    .unwrap_or(NaiveDate::MAX),
                temperature_c: (index * 37 % 75) as i32 - 20,
                summary: SUMMARIES[index * 7 % SUMMARIES.len()],
            })
            .collect();

        Self { forecasts }
    }

    pub fn get_items(&self, request: &PageRequest) -> PageResult<WeatherForecast> {
        let items = self
            .forecasts
            .iter()
            .skip(request.start_index)
            .take(request.count.unwrap_or(DEFAULT_COUNT))
            .cloned()
            .collect();

        PageResult {
            items,
            total_item_count: self.forecasts.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn provider(count: usize) -> WeatherProvider {
        WeatherProvider::starting_at(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), count)
    }

    #[test]
    fn test_page_window() {
        let provider = provider(500);
        let page = provider.get_items(&PageRequest::new(20, 10));

        assert_eq!(page.total_item_count, 500);
        assert_eq!(page.items.len(), 10);
        assert_eq!(
            page.items[0].date,
            NaiveDate::from_ymd_opt(2024, 1, 22).unwrap()
        );
    }

    #[test]
    fn test_last_page_is_short() {
        let provider = provider(25);
        let page = provider.get_items(&PageRequest::new(20, 10));

        assert_eq!(page.items.len(), 5);
        assert_eq!(page.total_item_count, 25);
    }

    #[test]
    fn test_default_count() {
        let provider = provider(50);
        let page = provider.get_items(&PageRequest {
            start_index: 0,
            count: None,
        });

        assert_eq!(page.items.len(), DEFAULT_COUNT);
    }

    #[test]
    fn test_data_is_deterministic_and_in_range() {
        let first = provider(100);
        let second = provider(100);
        let request = PageRequest::new(0, 100);

        assert_eq!(first.get_items(&request), second.get_items(&request));
        for forecast in first.get_items(&request).items {
            assert!((-20..55).contains(&forecast.temperature_c));
        }
    }

    #[test]
    fn test_temperature_f() {
        let forecast = WeatherForecast {
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            temperature_c: 20,
            summary: "Mild",
        };
        assert_eq!(forecast.temperature_f(), 67);
    }
}

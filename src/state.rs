// src/state.rs

use crate::domain::availability::{collect_plans, has_availability, HotelPlans};
use crate::domain::calendar::{format_ymd, DateRange, MonthSpan};
use crate::domain::hotel::{normalize_hotels, HotelRecord, RegistryShape};
use crate::domain::vacancy::VacancyTable;
use crate::loader::Documents;
use chrono::NaiveDate;

/// User-initiated changes to the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Select(NaiveDate),
    Step(i64),
    Today,
}

/// Everything one load produced, plus the current selection.
#[derive(Debug, Clone)]
pub struct AppState {
    pub hotels: Vec<HotelRecord>,
    pub shape: RegistryShape,
    pub vacancy: VacancyTable,
    pub range: DateRange,
    selected: NaiveDate,
}

impl AppState {
    pub fn new(docs: Documents, today: NaiveDate, months_ahead: u32) -> Self {
        let normalized = normalize_hotels(&docs.registry);
        let range = DateRange::build(today, months_ahead);

        Self {
            hotels: normalized.hotels,
            shape: normalized.shape,
            vacancy: VacancyTable::new(docs.vacancy),
            selected: range.first(),
            range,
        }
    }

    pub fn selected(&self) -> NaiveDate {
        self.selected
    }

    /// Applies `action`; returns false (and changes nothing) when the
    /// resulting date would fall outside the range.
    pub fn apply(&mut self, action: Action) -> bool {
        let target = match action {
            Action::Select(date) => Some(date).filter(|d| self.range.contains(*d)),
            Action::Step(delta) => self.range.step(self.selected, delta),
            Action::Today => Some(self.range.first()),
        };

        match target {
            Some(date) => {
                self.selected = date;
                true
            }
            None => false,
        }
    }

    pub fn plans_for_selected(&self) -> Vec<HotelPlans> {
        collect_plans(&self.hotels, &self.vacancy, &format_ymd(self.selected))
    }

    /// Read-only view model for the renderer.
    pub fn view(&self) -> DashboardVm {
        let days: Vec<DayColumn> = self
            .range
            .days()
            .iter()
            .map(|&date| DayColumn {
                date,
                ymd: format_ymd(date),
                is_selected: date == self.selected,
            })
            .collect();

        let rows = self
            .hotels
            .iter()
            .map(|hotel| HotelRow {
                hotel: hotel.clone(),
                cells: days
                    .iter()
                    .map(|d| has_availability(&self.vacancy, &hotel.id, &d.ymd))
                    .collect(),
            })
            .collect();

        DashboardVm {
            selected: format_ymd(self.selected),
            prev: self.range.step(self.selected, -1).map(format_ymd),
            next: self.range.step(self.selected, 1).map(format_ymd),
            today: format_ymd(self.range.first()),
            months: self.range.month_spans(),
            days,
            rows,
            plans: self.plans_for_selected(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DayColumn {
    pub date: NaiveDate,
    pub ymd: String,
    pub is_selected: bool,
}

#[derive(Debug, Clone)]
pub struct HotelRow {
    pub hotel: HotelRecord,
    /// One flag per day column, same order.
    pub cells: Vec<bool>,
}

#[derive(Debug, Clone)]
pub struct DashboardVm {
    pub selected: String,
    pub prev: Option<String>,
    pub next: Option<String>,
    pub today: String,
    pub months: Vec<MonthSpan>,
    pub days: Vec<DayColumn>,
    pub rows: Vec<HotelRow>,
    pub plans: Vec<HotelPlans>,
}

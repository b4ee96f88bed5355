// src/domain/availability.rs

use crate::domain::hotel::HotelRecord;
use crate::domain::vacancy::{PlanEntry, VacancyTable};
use serde::Serialize;

pub const UNKNOWN_PLAN_NAME: &str = "(プラン名不明)";

/// One bookable plan, with every default already applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanView {
    pub hotel_id: String,
    pub hotel_name: String,
    pub plan_name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HotelPlans {
    pub hotel: HotelRecord,
    pub plans: Vec<PlanView>,
}

/// True iff at least one plan for the hotel on that day is available.
pub fn has_availability(vacancy: &VacancyTable, hotel_id: &str, ymd: &str) -> bool {
    vacancy
        .entries(hotel_id, ymd)
        .map(|entries| entries.iter().any(|v| PlanEntry::from_value(v).available))
        .unwrap_or(false)
}

/// Bookable plans for `ymd`, grouped per hotel in registry order.
/// Hotels with nothing available that day are left out.
pub fn collect_plans(hotels: &[HotelRecord], vacancy: &VacancyTable, ymd: &str) -> Vec<HotelPlans> {
    hotels
        .iter()
        .filter_map(|hotel| {
            let entries = vacancy.entries(&hotel.id, ymd)?;

            let plans: Vec<PlanView> = entries
                .iter()
                .map(PlanEntry::from_value)
                .filter(|entry| entry.available)
                .map(|entry| PlanView {
                    hotel_id: hotel.id.clone(),
                    hotel_name: entry.hotel_name.unwrap_or(&hotel.display_name).to_string(),
                    plan_name: entry.plan_name.unwrap_or(UNKNOWN_PLAN_NAME).to_string(),
                    url: entry.url.unwrap_or_default().to_string(),
                })
                .collect();

            if plans.is_empty() {
                None
            } else {
                Some(HotelPlans {
                    hotel: hotel.clone(),
                    plans,
                })
            }
        })
        .collect()
}

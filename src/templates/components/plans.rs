use crate::domain::availability::HotelPlans;
use maud::{html, Markup};

pub const NO_VACANCY_MESSAGE: &str = "この日は空室が見つかりませんでした。";

pub fn plans_list(selected: &str, groups: &[HotelPlans]) -> Markup {
    html! {
        section id="plans" class="card" {
            h2 id="plansTitle" { "選択日：" (selected) }
            div id="plansList" {
                @if groups.is_empty() {
                    div class="empty" { (NO_VACANCY_MESSAGE) }
                }
                @for group in groups {
                    section class="hotel-section" {
                        h3 { (group.hotel.display_name) " - " (selected) }
                        div class="plan-scroll" {
                            @for plan in &group.plans {
                                div class="plan-card" {
                                    div class="pn" { (plan.plan_name) }
                                    @if plan.hotel_name != group.hotel.display_name {
                                        div class="hn" { (plan.hotel_name) }
                                    }
                                    div class="actions" {
                                        a class="link" href=(plan.url) target="_blank" rel="noopener" { "楽天で予約" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

use crate::domain::calendar::{is_saturday, is_sunday, weekday_label};
use crate::state::{DashboardVm, DayColumn};
use crate::templates::links::Links;
use chrono::Datelike;
use maud::{html, Markup, PreEscaped};

fn day_classes(day: &DayColumn) -> String {
    let mut classes = Vec::new();
    if is_saturday(day.date) {
        classes.push("weekend-sat");
    }
    if is_sunday(day.date) {
        classes.push("weekend-sun");
    }
    if day.is_selected {
        classes.push("today");
    }
    classes.join(" ")
}

/// Month row, day row, then one row per hotel with a ○ / × cell per day.
pub fn calendar_table(vm: &DashboardVm, links: &Links) -> Markup {
    html! {
        section id="calendar-section" class="card" {
            div class="calendar-wrap" {
                table class="calendar" {
                    thead {
                        tr class="month-row" {
                            th class="sticky first empty" rowspan="2" aria-hidden="true" {}
                            @for month in &vm.months {
                                th class="month-header" colspan=(month.days) { (month.label()) }
                            }
                        }
                        tr class="day-row" {
                            @for day in &vm.days {
                                th class=(day_classes(day)) id=[day.is_selected.then_some("selected-day")] {
                                    (day.date.day()) "(" (weekday_label(day.date)) ")"
                                }
                            }
                        }
                    }
                    tbody id="calBody" {
                        @for row in &vm.rows {
                            tr {
                                th class="first sticky" {
                                    (row.hotel.abbreviation)
                                    small { (row.hotel.display_name) }
                                }
                                @for (day, has) in vm.days.iter().zip(&row.cells) {
                                    @let cell_class = if *has { "cell-btn ok" } else { "cell-btn ng" };
                                    td class=(day_classes(day)) {
                                        a class=(cell_class)
                                            href=(links.day(&day.ymd))
                                            title=(day.ymd)
                                        {
                                            @if *has { "○" } @else { "×" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
            script {
                (PreEscaped("document.getElementById('selected-day')?.scrollIntoView({ inline: 'center', block: 'nearest' });"))
            }
        }
    }
}

use crate::state::DashboardVm;
use crate::templates::components::{calendar_table, plans_list};
use crate::templates::{desktop_layout, links::Links};
use maud::{html, Markup};

pub fn dashboard_page(vm: &DashboardVm, links: &Links) -> Markup {
    desktop_layout(
        &format!("空室カレンダー {}", vm.selected),
        html! {
            main class="container" {
                (day_nav(vm, links))
                (calendar_table(vm, links))
                (plans_list(&vm.selected, &vm.plans))
            }
        },
    )
}

/// Today / previous day / next day; the step buttons vanish at the range edges.
fn day_nav(vm: &DashboardVm, links: &Links) -> Markup {
    html! {
        nav class="day-nav" {
            a id="btnToday" class="btn" href=(links.today()) { "今日" }
            @if vm.prev.is_some() {
                a id="btnPrevDay" class="btn" href=(links.step(&vm.selected, -1)) { "前日" }
            }
            @if vm.next.is_some() {
                a id="btnNextDay" class="btn" href=(links.step(&vm.selected, 1)) { "翌日" }
            }
        }
    }
}

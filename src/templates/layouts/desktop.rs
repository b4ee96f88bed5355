use maud::{html, Markup, DOCTYPE};

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="ja" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="stylesheet" href="/static/calendar.css";
            }
            body {
                header class="site-header" {
                    h1 { "ホテル空室カレンダー" }
                }
                (content)
            }
        }
    }
}

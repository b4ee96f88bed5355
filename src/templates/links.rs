// templates/links.rs
use url::form_urlencoded::Serializer;

/// Builds dashboard URLs that carry the `vacancy=` / `hotels=` overrides forward.
#[derive(Debug, Clone, Default)]
pub struct Links {
    overrides: Vec<(String, String)>,
}

impl Links {
    pub fn new(overrides: Vec<(String, String)>) -> Self {
        Self { overrides }
    }

    fn build(&self, path: &str, extra: &[(&str, String)], fragment: Option<&str>) -> String {
        let mut query = Serializer::new(String::new());
        for (k, v) in &self.overrides {
            query.append_pair(k, v);
        }
        for (k, v) in extra {
            query.append_pair(k, v);
        }
        let query = query.finish();

        let mut href = path.to_string();
        if !query.is_empty() {
            href.push('?');
            href.push_str(&query);
        }
        if let Some(f) = fragment {
            href.push('#');
            href.push_str(f);
        }
        href
    }

    /// The dashboard with the same sources and default selection.
    pub fn reload(&self) -> String {
        self.build("/", &[], None)
    }

    pub fn today(&self) -> String {
        self.build("/", &[("date", "today".to_string())], Some("calendar-section"))
    }

    pub fn day(&self, ymd: &str) -> String {
        self.build("/", &[("date", ymd.to_string())], Some("plans"))
    }

    pub fn step(&self, from_ymd: &str, delta: i64) -> String {
        self.build(
            "/",
            &[("date", from_ymd.to_string()), ("step", delta.to_string())],
            Some("plans"),
        )
    }
}

//! List query state and its URL forms.
//!
//! A list page is addressed by an applied name filter and a 1-based page.
//! Two serializations exist: the fetch query (always carries `page`) and the
//! canonical browser URL query (omits defaults so shared links stay short).

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use url::form_urlencoded;

pub const FIRST_PAGE: u32 = 1;

/// Interpret loosely-typed page text: non-numeric, non-finite or < 1 become
/// 1, fractions round down, whitespace is ignored.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn clamp_page(raw: Option<&str>) -> u32 {
    let Some(value) = raw.and_then(|text| text.trim().parse::<f64>().ok()) else {
        return FIRST_PAGE;
    };
    if !value.is_finite() || value < 1.0 {
        return FIRST_PAGE;
    }
    value.floor().min(f64::from(u32::MAX)) as u32
}

/// Applied filter plus page for one list page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListQuery {
    pub name: String,
    pub page: u32,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self { name: String::new(), page: FIRST_PAGE }
    }
}

impl ListQuery {
    #[must_use]
    pub fn from_params(name: Option<&str>, page: Option<&str>) -> Self {
        Self {
            name: name.unwrap_or_default().to_owned(),
            page: clamp_page(page),
        }
    }

    /// Parse a browser query string (with or without the leading `?`). The
    /// first occurrence of each key wins.
    #[must_use]
    pub fn from_url_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut name = None;
        let mut page = None;
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "name" if name.is_none() => name = Some(value.into_owned()),
                "page" if page.is_none() => page = Some(value.into_owned()),
                _ => {}
            }
        }
        Self::from_params(name.as_deref(), page.as_deref())
    }

    #[must_use]
    pub fn trimmed_name(&self) -> &str {
        self.name.trim()
    }

    /// Whether anything differs from the unfiltered first page.
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.trimmed_name().is_empty() && self.page == FIRST_PAGE
    }

    /// Query sent to the proxy: `name` only when non-blank, `page` always.
    #[must_use]
    pub fn api_query(&self) -> String {
        let mut out = form_urlencoded::Serializer::new(String::new());
        if !self.trimmed_name().is_empty() {
            out.append_pair("name", self.trimmed_name());
        }
        out.append_pair("page", &self.page.to_string());
        out.finish()
    }

    /// Canonical browser query: blank `name` and page 1 are omitted.
    #[must_use]
    pub fn url_query(&self) -> String {
        let mut out = form_urlencoded::Serializer::new(String::new());
        if !self.trimmed_name().is_empty() {
            out.append_pair("name", self.trimmed_name());
        }
        if self.page != FIRST_PAGE {
            out.append_pair("page", &self.page.to_string());
        }
        out.finish()
    }

    /// Route-relative href for this query, e.g. `/characters?name=rick`.
    #[must_use]
    pub fn href(&self, route: &str) -> String {
        let query = self.url_query();
        if query.is_empty() { route.to_owned() } else { format!("{route}?{query}") }
    }
}

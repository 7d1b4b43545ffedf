//! Shared list-page logic: filtering, pagination and confirmed deletion
//!
//! Both list pages describe their filters with the same [`ListFilter`]. The
//! gremio list applies it in memory; the registrado list turns it into query
//! parameters and only applies it locally when the backend returns an
//! unpaginated array.

use std::borrow::Cow;
use std::future::Future;

use crate::api::ApiError;
use crate::types::{Gremio, Page, Registrado};

/// How a filter term compares against a record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Case-insensitive substring.
    Contains,
    /// Case-insensitive equality.
    Exact,
}

/// Records that expose named text fields to a [`ListFilter`].
pub trait Searchable {
    fn field(&self, name: &str) -> Option<Cow<'_, str>>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterTerm {
    /// Query parameter name, also used to address the term.
    pub param: &'static str,
    /// Record fields inspected; the term matches if any of them does.
    pub fields: &'static [&'static str],
    pub mode: MatchMode,
    pub value: String,
}

impl FilterTerm {
    fn needle(&self) -> Option<String> {
        let value = self.value.trim();
        (!value.is_empty()).then(|| value.to_lowercase())
    }

    fn matches<T: Searchable>(&self, record: &T, needle: &str) -> bool {
        self.fields.iter().any(|name| {
            let Some(field) = record.field(name) else {
                return false;
            };
            let haystack = field.to_lowercase();
            match self.mode {
                MatchMode::Contains => haystack.contains(needle),
                MatchMode::Exact => haystack.trim() == needle,
            }
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFilter {
    terms: Vec<FilterTerm>,
}

impl ListFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(self, param: &'static str, fields: &'static [&'static str]) -> Self {
        self.term(param, fields, MatchMode::Contains)
    }

    pub fn exact(self, param: &'static str, fields: &'static [&'static str]) -> Self {
        self.term(param, fields, MatchMode::Exact)
    }

    fn term(mut self, param: &'static str, fields: &'static [&'static str], mode: MatchMode) -> Self {
        self.terms.push(FilterTerm {
            param,
            fields,
            mode,
            value: String::new(),
        });
        self
    }

    /// Set the value of a term. Unknown parameters are ignored.
    pub fn set(&mut self, param: &str, value: impl Into<String>) {
        if let Some(term) = self.terms.iter_mut().find(|t| t.param == param) {
            term.value = value.into();
        } else {
            tracing::debug!(param, "Ignoring unknown filter parameter");
        }
    }

    pub fn with(mut self, param: &str, value: impl Into<String>) -> Self {
        self.set(param, value);
        self
    }

    pub fn value(&self, param: &str) -> &str {
        self.terms
            .iter()
            .find(|t| t.param == param)
            .map(|t| t.value.as_str())
            .unwrap_or_default()
    }

    pub fn clear(&mut self) {
        for term in &mut self.terms {
            term.value.clear();
        }
    }

    pub fn is_active(&self) -> bool {
        self.terms.iter().any(|t| t.needle().is_some())
    }

    pub fn matches<T: Searchable>(&self, record: &T) -> bool {
        self.terms.iter().all(|term| match term.needle() {
            Some(needle) => term.matches(record, &needle),
            None => true,
        })
    }

    pub fn apply<T: Searchable + Clone>(&self, records: &[T]) -> Vec<T> {
        records.iter().filter(|r| self.matches(*r)).cloned().collect()
    }

    /// Query pairs for the active terms, values trimmed.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        self.terms
            .iter()
            .filter_map(|t| {
                let value = t.value.trim();
                (!value.is_empty()).then(|| (t.param, value.to_string()))
            })
            .collect()
    }
}

/// 1-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: u32,
    page_size: u32,
}

impl Pagination {
    pub fn new(page: u32, page_size: u32) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.max(1),
        }
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("page", self.page.to_string()),
            ("pageSize", self.page_size.to_string()),
        ]
    }

    /// Cut one page out of a complete collection.
    pub fn slice<T: Clone>(&self, items: &[T]) -> Page<T> {
        let start = (self.page as usize).saturating_sub(1).saturating_mul(self.page_size as usize);
        let page_items = items
            .iter()
            .skip(start)
            .take(self.page_size as usize)
            .cloned()
            .collect();

        Page {
            items: page_items,
            total: items.len() as u64,
            page: self.page,
            page_size: self.page_size,
        }
    }
}

/// Ask for confirmation, then delete. Returns `Ok(false)` when the operator
/// declined, in which case no request is made.
pub async fn confirm_and_delete<C, F, Fut>(prompt: &str, confirm: C, delete: F) -> Result<bool, ApiError>
where
    C: FnOnce(&str) -> bool,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<(), ApiError>>,
{
    if !confirm(prompt) {
        return Ok(false);
    }
    delete().await?;
    Ok(true)
}

// ============================================================================
// Per-entity filters
// ============================================================================

/// Name and RUT by substring, category exactly.
pub fn gremio_filter() -> ListFilter {
    ListFilter::new()
        .contains("nombre", &["nombre"])
        .contains("rut", &["rut"])
        .exact("rubro", &["rubro"])
}

/// Free text across name, RUT, email and phone; the selects exactly.
pub fn registrado_filter() -> ListFilter {
    ListFilter::new()
        .contains("q", &["nombreCompleto", "rut", "email", "telefono"])
        .exact("region", &["region"])
        .exact("rubro", &["rubro"])
        .exact("tipoEmpresa", &["tipoEmpresa"])
}

impl Searchable for Gremio {
    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        match name {
            "nombre" => Some(Cow::Borrowed(&self.name)),
            "rut" => self.rut.as_deref().map(Cow::Borrowed),
            "rubro" => Some(Cow::Borrowed(&self.category)),
            "region" => Some(Cow::Borrowed(&self.region)),
            _ => None,
        }
    }
}

impl Searchable for Registrado {
    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        match name {
            "nombreCompleto" => Some(Cow::Owned(self.full_name())),
            "rut" => self.rut.as_deref().map(Cow::Borrowed),
            "email" => self.email.as_deref().map(Cow::Borrowed),
            "telefono" => self.phone.as_deref().map(Cow::Borrowed),
            "region" => self.region.as_deref().map(Cow::Borrowed),
            "rubro" => self.category.as_deref().map(Cow::Borrowed),
            "tipoEmpresa" => self.company_type.as_deref().map(Cow::Borrowed),
            _ => None,
        }
    }
}

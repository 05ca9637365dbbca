use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: u32 = 25;
pub const MAX_PAGE_SIZE: u32 = 500;

/// Query params for listing terms
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TermsQuery {
    #[serde(rename = "page[number]")]
    pub page_number: Option<u32>,
    #[serde(rename = "page[size]")]
    pub page_size: Option<u32>,
}

impl TermsQuery {
    #[cfg(test)]
    pub fn page(number: u32, size: u32) -> Self {
        Self {
            page_number: Some(number),
            page_size: Some(size),
        }
    }

    /// Without page params the whole list is returned
    pub fn is_paginated(&self) -> bool {
        self.page_number.is_some() || self.page_size.is_some()
    }

    /// Requested page, starting at 1
    pub fn page_number(&self) -> u32 {
        self.page_number.unwrap_or(1).max(1)
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE)
    }
}

/// Public attributes of a term
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TermAttributes {
    pub term_code: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub academic_year: Option<String>,
    pub financial_aid_year: Option<String>,
    pub housing_start_date: Option<NaiveDate>,
    pub housing_end_date: Option<NaiveDate>,
    pub is_current_term: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct SelfLink {
    #[serde(rename = "self")]
    pub self_link: String,
}

/// A single term resource
#[derive(Debug, Clone, Serialize)]
pub struct TermResource {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub attributes: TermAttributes,
    pub links: SelfLink,
}

/// Response for a single term
#[derive(Debug, Clone, Serialize)]
pub struct TermDocument {
    pub links: SelfLink,
    pub data: TermResource,
}

/// Pagination links
#[derive(Debug, Clone, Serialize)]
pub struct PageLinks {
    #[serde(rename = "self")]
    pub self_link: String,
    pub first: String,
    pub last: String,
    pub prev: Option<String>,
    pub next: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub total_results: usize,
    pub total_pages: u32,
    pub current_page_number: u32,
    pub current_page_size: u32,
}

/// Response for a page of terms
#[derive(Debug, Clone, Serialize)]
pub struct TermsDocument {
    pub links: PageLinks,
    pub data: Vec<TermResource>,
    pub meta: PageMeta,
}

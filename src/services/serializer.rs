//! Shapes term rows into JSON:API documents
//!
//! The repository hands over raw rows, the resolved current term code and
//! the caller's query. Pagination happens here, not in SQL.

use crate::db::models::TermRow;
use crate::models::{
    PageLinks, PageMeta, SelfLink, TermAttributes, TermDocument, TermResource, TermsDocument,
    TermsQuery,
};

const RESOURCE_TYPE: &str = "term";

#[derive(Debug, Clone)]
pub struct TermSerializer {
    base_url: String,
}

impl TermSerializer {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/terms", self.base_url)
    }

    fn page_url(&self, number: u32, size: u32) -> String {
        format!(
            "{}?{}={}&{}={}",
            self.collection_url(),
            urlencoding::encode("page[number]"),
            number,
            urlencoding::encode("page[size]"),
            size
        )
    }

    fn term_url(&self, term_code: &str) -> String {
        format!("{}/{}", self.collection_url(), urlencoding::encode(term_code))
    }

    fn resource(&self, row: TermRow, current_term_code: &str) -> TermResource {
        let is_current_term = row.is_current(current_term_code);
        let self_link = self.term_url(&row.term_code);

        TermResource {
            id: row.term_code.clone(),
            kind: RESOURCE_TYPE.to_string(),
            attributes: TermAttributes {
                term_code: row.term_code,
                description: row.description,
                start_date: row.start_date,
                end_date: row.end_date,
                academic_year: row.academic_year,
                financial_aid_year: row.financial_aid_year,
                housing_start_date: row.housing_start_date,
                housing_end_date: row.housing_end_date,
                is_current_term,
            },
            links: SelfLink { self_link },
        }
    }

    pub fn serialize_term(&self, row: TermRow, current_term_code: &str) -> TermDocument {
        let data = self.resource(row, current_term_code);
        TermDocument {
            links: data.links.clone(),
            data,
        }
    }

    pub fn serialize_terms(
        &self,
        rows: Vec<TermRow>,
        current_term_code: &str,
        query: &TermsQuery,
    ) -> TermsDocument {
        if !query.is_paginated() {
            return self.serialize_all(rows, current_term_code);
        }

        let total_results = rows.len();
        let size = query.page_size();
        let number = query.page_number();
        let total_pages = (total_results.div_ceil(size as usize) as u32).max(1);

        let data: Vec<TermResource> = rows
            .into_iter()
            .skip((number as usize - 1) * size as usize)
            .take(size as usize)
            .map(|row| self.resource(row, current_term_code))
            .collect();

        let links = PageLinks {
            self_link: self.page_url(number, size),
            first: self.page_url(1, size),
            last: self.page_url(total_pages, size),
            prev: (number > 1).then(|| self.page_url((number - 1).min(total_pages), size)),
            next: (number < total_pages).then(|| self.page_url(number + 1, size)),
        };

        TermsDocument {
            links,
            data,
            meta: PageMeta {
                total_results,
                total_pages,
                current_page_number: number,
                current_page_size: size,
            },
        }
    }

    fn serialize_all(&self, rows: Vec<TermRow>, current_term_code: &str) -> TermsDocument {
        let total_results = rows.len();
        let data: Vec<TermResource> = rows
            .into_iter()
            .map(|row| self.resource(row, current_term_code))
            .collect();

        let url = self.collection_url();
        TermsDocument {
            links: PageLinks {
                self_link: url.clone(),
                first: url.clone(),
                last: url,
                prev: None,
                next: None,
            },
            data,
            meta: PageMeta {
                total_results,
                total_pages: 1,
                current_page_number: 1,
                current_page_size: total_results as u32,
            },
        }
    }
}

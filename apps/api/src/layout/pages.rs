//! Renderer-facing view of a finished accumulator.
//!
//! Entries from the native lists and the overflow block are merged back per page and
//! column using the page each entry was placed on.

use serde::Serialize;

use crate::layout::accumulator::{Accumulator, Page1};
use crate::layout::entry::{Column, Entry};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    pub number: u32,
    pub left: Vec<Entry>,
    pub right: Vec<Entry>,
}

impl Page {
    fn empty(number: u32) -> Self {
        Self {
            number,
            left: Vec::new(),
            right: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageList {
    pub pages: Vec<Page>,
}

impl PageList {
    pub fn from_accumulator(acc: &Accumulator) -> Self {
        let page_count = acc.count_l.max(acc.count_r);
        let mut pages: Vec<Page> = (1..=page_count).map(Page::empty).collect();

        for entry in acc.entries() {
            let index = entry.page.saturating_sub(1) as usize;
            let Some(page) = pages.get_mut(index) else {
                continue;
            };
            match entry.column {
                Column::Left => page.left.push(entry.clone()),
                Column::Right => page.right.push(entry.clone()),
            }
        }
        Self { pages }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Rebases every `top` onto its own page, for renderers that draw one canvas per page.
    pub fn page_relative(self, page_height: f64) -> Self {
        self.map_entries(|e| e.rebased(page_height))
    }

    /// Multiplies every coordinate by `factor`.
    pub fn scaled(self, factor: f64) -> Self {
        self.map_entries(|e| e.scaled(factor))
    }

    fn map_entries(self, f: impl Fn(&Entry) -> Entry) -> Self {
        Self {
            pages: self
                .pages
                .into_iter()
                .map(|page| Page {
                    number: page.number,
                    left: page.left.iter().map(&f).collect(),
                    right: page.right.iter().map(&f).collect(),
                })
                .collect(),
        }
    }
}

pub fn scale_page1(page1: Page1, factor: f64) -> Page1 {
    Page1 {
        left: scale_all(&page1.left, factor),
        right: scale_all(&page1.right, factor),
    }
}

fn scale_all(entries: &[Entry], factor: f64) -> Vec<Entry> {
    entries.iter().map(|e| e.scaled(factor)).collect()
}

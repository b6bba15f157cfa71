//! The mutable state threaded through every section packer.
//!
//! One accumulator is created per packing run and discarded once its page list has been
//! built. Columns fill independently; they only interact through the page-counter
//! comparison that routes entries to the overflow block.
//!
//! # Placement
//! Packers never append directly. `place` computes a candidate at the column's running
//! height, and if its bottom edge would cross the column's page threshold, repages first
//! and recomputes the candidate at the new baseline. Only the final candidate is committed,
//! so nothing is ever appended and then taken back.

use serde::Serialize;
use tracing::{debug, warn};

use crate::layout::entry::{Column, Destination, Draft, Entry, Props};
use crate::layout::geometry::{LayoutParams, Rect};
use crate::layout::tables::template_geometry;
use crate::layout::LayoutError;
use crate::models::resume::Template;

/// Entries each column held when it finished page 1. `None` until the column moves on.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Page1Snapshot {
    pub left: Option<Vec<Entry>>,
    pub right: Option<Vec<Entry>>,
}

/// Page-1 contents of both columns, resolved at the end of a run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Page1 {
    pub left: Vec<Entry>,
    pub right: Vec<Entry>,
}

/// Outcome of a committed placement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placed {
    pub top: f64,
    pub page: u32,
    pub destination: Destination,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Accumulator {
    pub left: Vec<Entry>,
    pub right: Vec<Entry>,
    pub block: Vec<Entry>,
    pub left_h: f64,
    pub right_h: f64,
    pub count_l: u32,
    pub count_r: u32,
    pub page1: Page1Snapshot,
    frame: LayoutParams,
    next_seq: u32,
}

impl Accumulator {
    pub fn new(params: &LayoutParams) -> Self {
        let start = params.baseline(1);
        Self {
            left: Vec::new(),
            right: Vec::new(),
            block: Vec::new(),
            left_h: start,
            right_h: start,
            count_l: 1,
            count_r: 1,
            page1: Page1Snapshot::default(),
            frame: *params,
            next_seq: 0,
        }
    }

    pub fn height(&self, column: Column) -> f64 {
        match column {
            Column::Left => self.left_h,
            Column::Right => self.right_h,
        }
    }

    pub fn count(&self, column: Column) -> u32 {
        match column {
            Column::Left => self.count_l,
            Column::Right => self.count_r,
        }
    }

    pub fn entry_count(&self) -> usize {
        self.left.len() + self.right.len() + self.block.len()
    }

    /// Every entry of the run, in emission order.
    pub fn entries(&self) -> Vec<&Entry> {
        let mut all: Vec<&Entry> = self
            .left
            .iter()
            .chain(&self.right)
            .chain(&self.block)
            .collect();
        all.sort_by_key(|entry| entry.seq);
        all
    }

    /// Native column while not ahead of the sibling, overflow block once strictly ahead.
    pub fn destination(&self, column: Column) -> Destination {
        if self.count(column) > self.count(column.opposite()) {
            Destination::Block
        } else {
            Destination::Native
        }
    }

    // ── Primitive operations ────────────────────────────────────────────────

    pub fn append_entry(&mut self, column: Column, entry: Entry) {
        match (self.destination(column), column) {
            (Destination::Block, _) => self.block.push(entry),
            (Destination::Native, Column::Left) => self.left.push(entry),
            (Destination::Native, Column::Right) => self.right.push(entry),
        }
    }

    pub fn advance_height(&mut self, column: Column, delta: f64) {
        match column {
            Column::Left => self.left_h += delta,
            Column::Right => self.right_h += delta,
        }
    }

    /// Lowest allowed bottom edge on the column's current page.
    pub fn threshold(&self, column: Column, template: Template) -> f64 {
        self.frame.page_height * f64::from(self.count(column))
            - template_geometry(template).bottom_reserve
    }

    pub fn check_overflow(&self, column: Column, threshold: f64) -> bool {
        self.height(column) > threshold
    }

    /// Moves the column to its next page and resets its height to that page's baseline.
    pub fn repage(&mut self, column: Column) -> Result<(), LayoutError> {
        let next = self.count(column) + 1;
        if next > self.frame.max_pages {
            return Err(LayoutError::PageLimit {
                column,
                max_pages: self.frame.max_pages,
            });
        }
        if next == 2 {
            self.snapshot_page1(column);
        }
        let baseline = self.frame.baseline(next);
        match column {
            Column::Left => {
                self.count_l = next;
                self.left_h = baseline;
            }
            Column::Right => {
                self.count_r = next;
                self.right_h = baseline;
            }
        }
        debug!(?column, page = next, baseline, "Column moved to next page");
        Ok(())
    }

    /// Freezes the column's native entries as its page-1 contents. First call wins.
    pub fn snapshot_page1(&mut self, column: Column) {
        let snapshot = match column {
            Column::Left => &mut self.page1.left,
            Column::Right => &mut self.page1.right,
        };
        if snapshot.is_none() {
            let entries = match column {
                Column::Left => self.left.clone(),
                Column::Right => self.right.clone(),
            };
            *snapshot = Some(entries);
        }
    }

    /// Page-1 contents; columns still on page 1 contribute their full native list.
    pub fn page1(&self) -> Page1 {
        Page1 {
            left: self.page1.left.clone().unwrap_or_else(|| self.left.clone()),
            right: self.page1.right.clone().unwrap_or_else(|| self.right.clone()),
        }
    }

    // ── Placement ───────────────────────────────────────────────────────────

    /// Repages the column if its running height is already past the threshold.
    pub fn ensure_room(&mut self, column: Column, template: Template) -> Result<(), LayoutError> {
        if self.check_overflow(column, self.threshold(column, template)) {
            self.repage(column)?;
        }
        Ok(())
    }

    /// Places one entry using tentative placement.
    ///
    /// `draft_for` is called with the destination the entry would be routed to, and called
    /// again after a repage since the destination (and with it the height) may change.
    /// A leading gap collapses at the top of a fresh page. An entry taller than an empty
    /// page is placed at the page top rather than repaging forever.
    pub fn place<F>(
        &mut self,
        column: Column,
        template: Template,
        section: &str,
        mut draft_for: F,
    ) -> Result<Placed, LayoutError>
    where
        F: FnMut(Destination) -> Draft,
    {
        let mut draft = checked(section, draft_for(self.destination(column)))?;
        let mut top = self.height(column) + draft.slot.lead;

        if top + draft.slot.height > self.threshold(column, template) {
            let at_page_top = self.height(column) <= self.frame.baseline(self.count(column));
            if !at_page_top {
                self.repage(column)?;
                draft = checked(section, draft_for(self.destination(column)))?;
            }
            top = self.height(column);
            if top + draft.slot.height > self.threshold(column, template) {
                warn!(
                    section,
                    height = draft.slot.height,
                    "Entry is taller than a page, placing it at the page top"
                );
            }
        }

        let placed = Placed {
            top,
            page: self.count(column),
            destination: self.destination(column),
        };
        let entry = self.make_entry(section, column, draft, top);
        let delta = entry.props.rect.bottom() - self.height(column);
        self.append_entry(column, entry);
        self.advance_height(column, delta);
        Ok(placed)
    }

    /// Appends a decoration at an explicit `top` without consuming height.
    pub fn attach(
        &mut self,
        column: Column,
        section: &str,
        top: f64,
        draft: Draft,
    ) -> Result<(), LayoutError> {
        let draft = checked(section, draft)?;
        let entry = self.make_entry(section, column, draft, top);
        self.append_entry(column, entry);
        Ok(())
    }

    fn make_entry(&mut self, section: &str, column: Column, draft: Draft, top: f64) -> Entry {
        let seq = self.next_seq;
        self.next_seq += 1;
        Entry {
            kind: draft.kind,
            id: format!("{section}-{}-{seq}", draft.label),
            column,
            page: self.count(column),
            props: Props {
                rect: Rect::new(top, draft.span, draft.slot.height),
                content: draft.content,
            },
            seq,
        }
    }
}

fn checked(section: &str, draft: Draft) -> Result<Draft, LayoutError> {
    if !draft.slot.is_valid() || !draft.span.x.is_finite() || !draft.span.width.is_finite() {
        return Err(LayoutError::InvalidGeometry {
            section: section.to_string(),
            detail: format!(
                "{:?} '{}' has lead {}, height {}",
                draft.kind, draft.label, draft.slot.lead, draft.slot.height
            ),
        });
    }
    Ok(draft)
}

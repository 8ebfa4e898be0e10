//! The document the terminal scrolls through: sections and content blocks
//! laid out in rows, exposed in page units.

use crate::site::Section;
use crate::viewport::{Region, LINE_HEIGHT};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Hero,
    Services,
    Catalogue,
    Contact,
}

#[derive(Debug, Clone)]
pub struct PageSection {
    pub id: &'static str,
    pub title: &'static str,
    pub kind: SectionKind,
    pub first_row: u16,
    pub rows: u16,
}

/// A card inside a section; revealed independently of its section.
#[derive(Debug, Clone)]
pub struct ContentBlock {
    pub section: usize,
    pub first_row: u16,
    pub rows: u16,
    pub title: &'static str,
    pub body: &'static str,
}

#[derive(Debug, Clone)]
pub struct PageLayout {
    sections: Vec<PageSection>,
    blocks: Vec<ContentBlock>,
    total_rows: u16,
}

const SECTIONS: [(&str, &str, SectionKind, u16); 4] = [
    ("home", "Home", SectionKind::Hero, 14),
    ("services", "Services", SectionKind::Services, 16),
    ("catalogue", "Catalogue", SectionKind::Catalogue, 16),
    ("contact", "Contact", SectionKind::Contact, 14),
];

/// (section index, row offset inside the section, rows, title, body)
const BLOCKS: [(usize, u16, u16, &str, &str); 7] = [
    (0, 9, 3, "15+ years", "150 projects delivered, 98% repeat clients"),
    (1, 3, 4, "Design", "Plans, permits and 3D walkthroughs before a single nail."),
    (1, 7, 4, "Build", "One crew from groundwork to the final coat of paint."),
    (1, 11, 4, "Care", "Ten-year workmanship guarantee and yearly check-ins."),
    (3, 3, 3, "Call", "+1 555 0100, weekdays 8:00-18:00"),
    (3, 6, 3, "Visit", "12 Harbour Street, Portside"),
    (3, 9, 3, "Write", "Press c to open the contact form"),
];

impl Default for PageLayout {
    fn default() -> Self {
        Self::build()
    }
}

impl PageLayout {
    pub fn build() -> Self {
        let mut sections = Vec::with_capacity(SECTIONS.len());
        let mut row = 0u16;
        for (id, title, kind, rows) in SECTIONS {
            sections.push(PageSection {
                id,
                title,
                kind,
                first_row: row,
                rows,
            });
            row += rows;
        }

        let blocks = BLOCKS
            .iter()
            .map(|&(section, offset, rows, title, body)| ContentBlock {
                section,
                first_row: sections[section].first_row + offset,
                rows,
                title,
                body,
            })
            .collect();

        Self {
            sections,
            blocks,
            total_rows: row,
        }
    }

    pub fn sections(&self) -> &[PageSection] {
        &self.sections
    }

    pub fn blocks(&self) -> &[ContentBlock] {
        &self.blocks
    }

    pub fn total_rows(&self) -> u16 {
        self.total_rows
    }

    pub fn height(&self) -> f32 {
        rows_to_units(self.total_rows)
    }

    pub fn section_region(&self, index: usize) -> Option<Region> {
        self.sections
            .get(index)
            .map(|section| Region::new(rows_to_units(section.first_row), rows_to_units(section.rows)))
    }

    pub fn block_region(&self, index: usize) -> Option<Region> {
        self.blocks
            .get(index)
            .map(|block| Region::new(rows_to_units(block.first_row), rows_to_units(block.rows)))
    }

    pub fn catalogue_region(&self) -> Option<Region> {
        let index = self
            .sections
            .iter()
            .position(|section| section.kind == SectionKind::Catalogue)?;
        self.section_region(index)
    }

    /// Sections as the scroll spy sees them.
    pub fn nav_sections(&self) -> Vec<Section> {
        (0..self.sections.len())
            .filter_map(|index| {
                let region = self.section_region(index)?;
                Some(Section::new(self.sections[index].id, region))
            })
            .collect()
    }
}

pub fn rows_to_units(rows: u16) -> f32 {
    f32::from(rows) * LINE_HEIGHT
}

pub fn units_to_rows(units: f32) -> u16 {
    (units.max(0.0) / LINE_HEIGHT).round().min(f32::from(u16::MAX)) as u16
}

use std::fmt;
use thiserror::Error;

/// Look-ahead added to the scroll offset so a section becomes active slightly
/// before its top edge reaches the viewport.
pub const PROBE_LOOKAHEAD: f64 = 100.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Section {
    #[default]
    Home,
    Work,
    About,
    Contact,
}

impl Section {
    /// Document order.
    pub const ALL: [Section; 4] = [Self::Home, Self::Work, Self::About, Self::Contact];

    pub fn name(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Work => "work",
            Self::About => "about",
            Self::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Work => "Work",
            Self::About => "About",
            Self::Contact => "Contact",
        }
    }

    pub fn fragment(self) -> String {
        format!("#{}", self.name())
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum AnchorError {
    #[error("anchor for section `{0}` is not mounted")]
    NotMounted(Section),
    #[error("scroll offset is unavailable")]
    ScrollOffsetUnavailable,
}

/// Top offsets of the four section anchors, measured in one pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnchorOffsets {
    pub home: f64,
    pub work: f64,
    pub about: f64,
    pub contact: f64,
}

impl AnchorOffsets {
    /// Reads every anchor through `top_of`, failing on the first one that is
    /// not available yet.
    pub fn measure<F>(mut top_of: F) -> Result<Self, AnchorError>
    where
        F: FnMut(Section) -> Option<f64>,
    {
        let mut read = |section| top_of(section).ok_or(AnchorError::NotMounted(section));

        Ok(Self {
            home: read(Section::Home)?,
            work: read(Section::Work)?,
            about: read(Section::About)?,
            contact: read(Section::Contact)?,
        })
    }
}

pub fn probe_position(scroll_offset: f64) -> f64 {
    scroll_offset + PROBE_LOOKAHEAD
}

/// Picks the section in focus for a scroll offset. Each threshold is the next
/// section's anchor top; a probe exactly on a top belongs to that section.
pub fn active_section_for(scroll_offset: f64, anchors: &AnchorOffsets) -> Section {
    let probe = probe_position(scroll_offset);

    if probe < anchors.work {
        Section::Home
    } else if probe < anchors.about {
        Section::Work
    } else if probe < anchors.contact {
        Section::About
    } else {
        Section::Contact
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_anchors() -> AnchorOffsets {
        AnchorOffsets {
            home: 0.0,
            work: 800.0,
            about: 1600.0,
            contact: 2400.0,
        }
    }

    #[test]
    fn reference_offsets_select_expected_sections() {
        let anchors = reference_anchors();

        assert_eq!(active_section_for(650.0, &anchors), Section::Home);
        assert_eq!(active_section_for(750.0, &anchors), Section::Work);
        assert_eq!(active_section_for(1550.0, &anchors), Section::About);
        assert_eq!(active_section_for(2500.0, &anchors), Section::Contact);
    }

    #[test]
    fn probe_on_anchor_top_belongs_to_that_section() {
        let anchors = reference_anchors();

        assert_eq!(active_section_for(699.0, &anchors), Section::Home);
        assert_eq!(active_section_for(700.0, &anchors), Section::Work);
        assert_eq!(active_section_for(2300.0, &anchors), Section::Contact);
    }

    #[test]
    fn active_section_never_moves_backwards_while_scrolling_down() {
        let anchors = reference_anchors();
        let mut previous = Section::Home;

        for step in 0..=700 {
            let offset = f64::from(step) * 5.0;
            let current = active_section_for(offset, &anchors);
            assert!(
                current >= previous,
                "offset {offset} moved from {previous} back to {current}"
            );
            previous = current;
        }

        assert_eq!(previous, Section::Contact);
    }

    #[test]
    fn measure_reports_first_missing_anchor() {
        let result = AnchorOffsets::measure(|section| match section {
            Section::About | Section::Contact => None,
            _ => Some(10.0),
        });

        assert_eq!(result, Err(AnchorError::NotMounted(Section::About)));
        assert_eq!(
            AnchorError::NotMounted(Section::About).to_string(),
            "anchor for section `about` is not mounted"
        );
    }

    #[test]
    fn measure_reads_offsets_fresh_each_time() {
        let mut reads = 0;
        let anchors = AnchorOffsets::measure(|section| {
            reads += 1;
            Some(match section {
                Section::Home => 0.0,
                Section::Work => 900.0,
                Section::About => 1800.0,
                Section::Contact => 2700.0,
            })
        })
        .expect("all anchors mounted");

        assert_eq!(reads, 4);
        assert_eq!(anchors.work, 900.0);
        assert_eq!(active_section_for(750.0, &anchors), Section::Home);
    }

    #[test]
    fn fragments_match_section_names() {
        let fragments: Vec<String> = Section::ALL.iter().map(|s| s.fragment()).collect();
        assert_eq!(fragments, ["#home", "#work", "#about", "#contact"]);
    }
}

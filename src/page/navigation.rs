use super::palette::Palette;
use super::sections::Section;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkTreatment {
    Highlighted,
    Default,
}

impl LinkTreatment {
    pub fn for_label(label: &str, active: Section) -> Self {
        if label.to_lowercase() == active.name() {
            Self::Highlighted
        } else {
            Self::Default
        }
    }

    pub fn is_highlighted(self) -> bool {
        matches!(self, Self::Highlighted)
    }

    pub fn style(self, palette: &Palette) -> String {
        match self {
            Self::Highlighted => format!("color: {}; font-weight: 700;", palette.primary),
            Self::Default => format!("color: {}; font-weight: 400;", palette.text),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub section: Section,
    pub label: &'static str,
    pub href: String,
    pub treatment: LinkTreatment,
}

/// The four navigation entries as they should render for `active`.
pub fn nav_links(active: Section) -> Vec<NavLink> {
    Section::ALL
        .into_iter()
        .map(|section| {
            let label = section.label();
            NavLink {
                section,
                label,
                href: format!("#{}", label.to_lowercase()),
                treatment: LinkTreatment::for_label(label, active),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::palette::PALETTE;

    #[test]
    fn only_work_is_highlighted_when_work_is_active() {
        let highlighted: Vec<&str> = nav_links(Section::Work)
            .into_iter()
            .filter(|link| link.treatment.is_highlighted())
            .map(|link| link.label)
            .collect();

        assert_eq!(highlighted, ["Work"]);
    }

    #[test]
    fn every_section_highlights_its_own_label() {
        for section in Section::ALL {
            let links = nav_links(section);
            let highlighted = links
                .iter()
                .find(|link| link.treatment.is_highlighted())
                .expect("one link highlighted");
            assert_eq!(highlighted.label, section.label());
            assert_eq!(highlighted.href, section.fragment());
        }
    }

    #[test]
    fn links_follow_section_order_and_labels() {
        let links = nav_links(Section::Home);
        let labels: Vec<&str> = links.iter().map(|link| link.label).collect();
        let hrefs: Vec<&str> = links.iter().map(|link| link.href.as_str()).collect();

        assert_eq!(labels, Section::ALL.map(Section::label));
        assert_eq!(labels, ["Home", "Work", "About", "Contact"]);
        assert_eq!(hrefs, ["#home", "#work", "#about", "#contact"]);
        assert!(links.iter().zip(Section::ALL).all(|(link, section)| link.section == section));
    }

    #[test]
    fn highlight_compares_labels_case_insensitively() {
        assert_eq!(LinkTreatment::for_label("ABOUT", Section::About), LinkTreatment::Highlighted);
        assert_eq!(LinkTreatment::for_label("about", Section::Work), LinkTreatment::Default);
    }

    #[test]
    fn treatments_use_palette_colors() {
        assert_eq!(
            LinkTreatment::Highlighted.style(&PALETTE),
            "color: #007AFF; font-weight: 700;"
        );
        assert_eq!(
            LinkTreatment::Default.style(&PALETTE),
            "color: #000000; font-weight: 400;"
        );
    }
}

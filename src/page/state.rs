use super::hero::HeroTransform;
use super::menu::MenuState;
use super::sections::{active_section_for, AnchorError, AnchorOffsets, Section};

#[derive(Clone, Debug, PartialEq)]
pub enum PageAction {
    ScrollListenerAttached,
    Scrolled {
        offset: Result<f64, AnchorError>,
        anchors: Result<AnchorOffsets, AnchorError>,
    },
    ToggleMenu,
    LinkSelected(Section),
    ScrollListenerDetached,
}

/// Everything on the page that changes after the first render.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageState {
    pub active: Section,
    pub menu: MenuState,
    pub hero: HeroTransform,
    listening: bool,
}

impl PageState {
    pub fn is_listening(&self) -> bool {
        self.listening
    }

    /// Returns the next state, or `None` when `action` changes nothing.
    pub fn apply(&self, action: PageAction) -> Option<Self> {
        let mut next = self.clone();

        match action {
            PageAction::ScrollListenerAttached => next.listening = true,
            PageAction::ScrollListenerDetached => next.listening = false,
            PageAction::Scrolled { offset, anchors } => {
                if !self.listening {
                    return None;
                }
                let Ok(offset) = offset else {
                    return None;
                };

                next.hero = HeroTransform::at_offset(offset);
                if let Ok(anchors) = anchors {
                    next.active = active_section_for(offset, &anchors);
                }
            }
            PageAction::ToggleMenu => next.menu = self.menu.toggled(),
            PageAction::LinkSelected(_) => next.menu = self.menu.after_link_selected(),
        }

        (next != *self).then_some(next)
    }
}

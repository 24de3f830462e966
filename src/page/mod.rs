//! Page behaviour that does not touch the DOM: section tracking, navigation
//! highlight, the mobile menu, scroll-linked hero styling and entrance timing.

pub mod hero;
pub mod listener;
pub mod menu;
pub mod motion;
pub mod navigation;
pub mod palette;
pub mod sections;
pub mod state;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub primary: &'static str,
    pub background: &'static str,
    pub text: &'static str,
}

pub const PALETTE: Palette = Palette {
    primary: "#007AFF",
    background: "#FFFFFF",
    text: "#000000",
};

impl Palette {
    /// Custom properties published on the document root for the stylesheet.
    pub fn css_variables(&self) -> String {
        format!(
            "--color-primary: {}; --color-background: {}; --color-text: {};",
            self.primary, self.background, self.text
        )
    }
}

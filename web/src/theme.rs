use canvasweeper_core::CellView;
use clap::ValueEnum;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub const ATTR_NAME: &'static str = "data-theme";

    pub(crate) const fn scheme(self) -> &'static str {
        use Theme::*;
        match self {
            Light => "light",
            Dark => "dark",
        }
    }

    pub(crate) const fn palette(self) -> Palette {
        use Theme::*;
        match self {
            Light => Palette::LIGHT,
            Dark => Palette::DARK,
        }
    }

    /// Exposes the scheme to the page stylesheet through `<html data-theme=...>`.
    pub(crate) fn apply(self) {
        use gloo::utils::document;
        let Some(html) = document().document_element() else {
            log::error!("no html element to theme");
            return;
        };
        let scheme = self.scheme();
        log::debug!("theme-scheme: {}", scheme);
        if let Err(err) = html.set_attribute(Self::ATTR_NAME, scheme) {
            log::error!("failed to set theme: {:?}", err);
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::Light
    }
}

/// Canvas colors, as CSS color strings.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct Palette {
    pub background: &'static str,
    pub hidden: &'static str,
    pub revealed: &'static str,
    pub mine: &'static str,
    pub triggered_mine: &'static str,
    pub border: &'static str,
    pub text: &'static str,
}

impl Palette {
    pub const LIGHT: Self = Self {
        background: "#f0f0f0",
        hidden: "#cccccc",
        revealed: "#ffffff",
        mine: "#ff4444",
        triggered_mine: "#cc0000",
        border: "#999999",
        text: "#000000",
    };

    pub const DARK: Self = Self {
        background: "#1e1e1e",
        hidden: "#4a4a4a",
        revealed: "#2b2b2b",
        mine: "#c62828",
        triggered_mine: "#ff5252",
        border: "#6e6e6e",
        text: "#eeeeee",
    };

    pub(crate) const fn cell_fill(&self, cell: CellView) -> &'static str {
        use CellView::*;
        match cell {
            Hidden | Flagged => self.hidden,
            Revealed(_) => self.revealed,
            Mine => self.mine,
            TriggeredMine => self.triggered_mine,
        }
    }
}

/// Text drawn on top of a cell, if any.
pub(crate) fn cell_label(cell: CellView) -> Option<String> {
    use CellView::*;
    match cell {
        Flagged => Some("F".to_string()),
        Mine | TriggeredMine => Some("X".to_string()),
        Revealed(0) | Hidden => None,
        Revealed(count) => Some(count.to_string()),
    }
}

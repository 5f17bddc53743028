/// Viewport width (in CSS pixels or cells) below which the expanding presentation is used.
pub const DEFAULT_BREAKPOINT: u32 = 768;

/// How the filtered view is presented.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Presentation {
    /// Discrete pages with a page selector (wide viewports).
    #[default]
    Paginated,
    /// A window that grows above and below the current page while scrolling (narrow viewports).
    Expanding,
}

impl Presentation {
    pub fn for_width(width: u32, breakpoint: u32) -> Self {
        if width < breakpoint {
            Self::Expanding
        } else {
            Self::Paginated
        }
    }

    pub fn is_expanding(self) -> bool {
        self == Self::Expanding
    }
}

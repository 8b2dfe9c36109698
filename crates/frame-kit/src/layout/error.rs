use std::fmt;

/// Error type for frame geometry planning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// Margins, rails and padding leave no room for the main image
    EmptyContentArea {
        /// Canvas width
        width: u32,
        /// Canvas height
        height: u32,
    },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::EmptyContentArea { width, height } => {
                write!(f, "canvas {}x{} leaves no content area", width, height)
            }
        }
    }
}

impl std::error::Error for LayoutError {}

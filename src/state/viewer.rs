/// Full-image viewer navigation
///
/// Each viewer window owns one `Viewer`. Only its own transition methods
/// mutate the cursor, and the cursor never leaves `[0, len - 1]`.

use crate::error::{GalleryError, Result};

/// Viewer lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewerState {
    #[default]
    Closed,
    Showing(usize),
}

/// Navigation state machine over a gallery of `len` images
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewer {
    len: usize,
    state: ViewerState,
}

impl Viewer {
    /// Create a closed viewer for a gallery of `len` images
    pub fn new(len: usize) -> Self {
        Self {
            len,
            state: ViewerState::Closed,
        }
    }

    pub fn state(&self) -> ViewerState {
        self.state
    }

    /// Index currently on screen, if any
    pub fn current(&self) -> Option<usize> {
        match self.state {
            ViewerState::Showing(index) => Some(index),
            ViewerState::Closed => None,
        }
    }

    /// Show `index`, replacing whatever was shown before
    pub fn open(&mut self, index: usize) -> Result<()> {
        if index >= self.len {
            return Err(GalleryError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        self.state = ViewerState::Showing(index);
        Ok(())
    }

    /// Step back one image. Returns false (and changes nothing) at the start.
    pub fn previous(&mut self) -> bool {
        match self.state {
            ViewerState::Showing(index) if index > 0 => {
                self.state = ViewerState::Showing(index - 1);
                true
            }
            _ => false,
        }
    }

    /// Step forward one image. Returns false (and changes nothing) at the end.
    pub fn next(&mut self) -> bool {
        match self.state {
            ViewerState::Showing(index) if index + 1 < self.len => {
                self.state = ViewerState::Showing(index + 1);
                true
            }
            _ => false,
        }
    }

    pub fn close(&mut self) {
        self.state = ViewerState::Closed;
    }

    /// Whether the "previous" control should be visible
    pub fn shows_previous(&self) -> bool {
        matches!(self.state, ViewerState::Showing(index) if index > 0)
    }

    /// Whether the "next" control should be visible
    pub fn shows_next(&self) -> bool {
        matches!(self.state, ViewerState::Showing(index) if index + 1 < self.len)
    }
}

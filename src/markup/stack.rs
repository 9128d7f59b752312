use crate::codes::{Code, Effect, Rgb};

/// An open style region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Color(Rgb),
    Style(Effect),
    /// Opened by a reset; carries no style of its own.
    Neutral,
}

/// Result of applying one code to a [`StyleStack`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// Regions closed before opening the new one, innermost first.
    pub closed: usize,
    pub opened: Region,
}

/// The style regions currently open, outermost first.
///
/// Colors and effects nest. A reset closes every open region and opens a
/// single neutral one, whatever the depth.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleStack {
    regions: Vec<Region>,
}

impl StyleStack {
    pub const fn new() -> Self {
        Self {
            regions: Vec::new(),
        }
    }

    pub fn apply(&mut self, code: Code) -> Transition {
        match code {
            Code::Color(entry) => self.open(Region::Color(entry.hex)),
            Code::Style(effect) => self.open(Region::Style(effect)),
            Code::Reset => {
                let closed = self.close_all();
                self.regions.push(Region::Neutral);
                Transition {
                    closed,
                    opened: Region::Neutral,
                }
            }
        }
    }

    /// Pop every region; returns how many were open.
    pub fn close_all(&mut self) -> usize {
        let closed = self.regions.len();
        self.regions.clear();
        closed
    }

    pub fn depth(&self) -> usize {
        self.regions.len()
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    fn open(&mut self, region: Region) -> Transition {
        self.regions.push(region);
        Transition {
            closed: 0,
            opened: region,
        }
    }
}

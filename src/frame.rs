/// Frame metadata - carries the frame number
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct FrameInfo {
    pub number: u64,
}

impl FrameInfo {
    pub fn new(number: u64) -> Self {
        Self { number }
    }
}

/// Infinite iterator that yields frame information
/// Use this in a loop: `for frame in frames { ... }`
#[derive(Debug, Default)]
pub struct FrameIterator {
    frame_number: u64,
}

impl FrameIterator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frame_number(&self) -> u64 {
        self.frame_number
    }
}

impl Iterator for FrameIterator {
    type Item = FrameInfo;

    fn next(&mut self) -> Option<FrameInfo> {
        let info = FrameInfo::new(self.frame_number);
        self.frame_number += 1;
        Some(info)
    }
}

/// Progressive reveal of a mesh over a frame range.
///
/// Faces appear in the order they were built, the first one on
/// `frame_start` and the rest spread evenly over `frame_duration` frames.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct BuildOrder {
    pub frame_start: u32,
    pub frame_duration: u32,
}

impl BuildOrder {
    pub fn new(frame_start: u32, frame_duration: u32) -> BuildOrder {
        BuildOrder { frame_start, frame_duration }
    }

    /// One frame per sample, plus one so the last face is visible before the range ends.
    pub fn for_samples(sample_count: usize) -> BuildOrder {
        let frame_duration = u32::try_from(sample_count).unwrap_or(u32::MAX - 1) + 1;
        BuildOrder { frame_start: 1, frame_duration }
    }

    pub fn frame_end(&self) -> u32 {
        self.frame_start.saturating_add(self.frame_duration)
    }

    pub fn face_frame(&self, face_index: usize, face_count: usize) -> u32 {
        if face_count == 0 {
            return self.frame_start;
        }
        let offset = face_index as u64 * self.frame_duration as u64 / face_count as u64;
        self.frame_start.saturating_add(offset as u32)
    }
}

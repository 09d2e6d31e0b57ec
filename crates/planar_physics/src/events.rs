//! Contact events recorded during a step

/// Which collision routine resolved a contact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactKind {
    CircleCircle,
    CircleLine,
    CircleRectangle,
}

/// A contact resolved between two entities
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactEvent {
    /// Lower entity index, after culling
    pub first: usize,
    /// Higher entity index, after culling
    pub second: usize,
    /// Routine that resolved it
    pub kind: ContactKind,
}

impl ContactEvent {
    /// Check whether an entity took part in this contact
    pub fn involves(&self, index: usize) -> bool {
        self.first == index || self.second == index
    }
}

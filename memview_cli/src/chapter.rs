use std::fmt::Display;

/// The steps of the walkthrough, in the order they run
#[derive(Debug, Copy, Clone, PartialEq, Display)]
pub enum Chapter {
    EmptyView,
    FullBuffer,
    DroppedView,
    Reattached,
    SubRange,
    ReleasedOwner,
    Collect,
    Pinned,
}

impl Chapter {
    pub const ALL: [Chapter; 8] = [
        Chapter::EmptyView,
        Chapter::FullBuffer,
        Chapter::DroppedView,
        Chapter::Reattached,
        Chapter::SubRange,
        Chapter::ReleasedOwner,
        Chapter::Collect,
        Chapter::Pinned,
    ];
}

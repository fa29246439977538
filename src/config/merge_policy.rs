/// Variant policies for a merge in which some feature contradicts the phoneme merged into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, clap::ValueEnum)]
pub enum MergePolicy {
    /// Skip the contradicting features, and apply the remaining features.
    Skip = 0,

    /// Apply nothing.
    Strict,
}

impl std::fmt::Display for MergePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Skip => write!(f, "Skip"),
            Self::Strict => write!(f, "Strict"),
        }
    }
}

impl MergePolicy {
    /// The minimum MergePolicy type.
    pub const MIN: MergePolicy = MergePolicy::Skip;

    /// The maximum MergePolicy type.
    pub const MAX: MergePolicy = MergePolicy::Strict;
}

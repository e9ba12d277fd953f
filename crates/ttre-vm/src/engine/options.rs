//! Match option flags.

bitflags::bitflags! {
    /// Flags controlling one match call. Bit values are part of the public
    /// interface and never change.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct MatchOptions: u32 {
        /// Find a match starting anywhere at or after the start offset.
        /// Without it, the match must start at the offset and reach the end
        /// of the text.
        const SEARCH = 0x01;
        /// `^` matches only at the start of the text, not after a newline.
        const SINGLE = 0x02;
        /// ASCII case-insensitive comparison.
        const NOCASE = 0x04;
        /// Disable the memo table: classical backtracking.
        const NORMAL = 0x08;
    }
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self::empty()
    }
}

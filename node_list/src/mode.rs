//! Capacity modes of a [`NodeList`](crate::NodeList).

/// The pair of flags that gate mutation.
///
/// | mode | add / insert / remove | indexed set |
/// |---|---|---|
/// | mutable | allowed | allowed |
/// | fixed-size | ignored | allowed |
/// | read-only | ignored | ignored |
/// | fixed-size + read-only | ignored | ignored |
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ListMode {
    read_only: bool,
    fixed_size: bool,
}

impl ListMode {
    /// Fully mutable.
    pub const MUTABLE: Self = Self {
        read_only: false,
        fixed_size: false,
    };

    pub const fn new(read_only: bool, fixed_size: bool) -> Self {
        Self {
            read_only,
            fixed_size,
        }
    }

    #[inline]
    pub const fn is_read_only(self) -> bool {
        self.read_only
    }

    #[inline]
    pub const fn is_fixed_size(self) -> bool {
        self.fixed_size
    }

    /// `true` if add, insert and remove must be dropped.
    #[inline]
    pub const fn blocks_structure(self) -> bool {
        self.read_only || self.fixed_size
    }

    /// `true` if indexed assignment must be dropped.
    #[inline]
    pub const fn blocks_values(self) -> bool {
        self.read_only
    }

    pub(crate) fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    pub(crate) fn set_fixed_size(&mut self, fixed_size: bool) {
        self.fixed_size = fixed_size;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_mutable() {
        assert_eq!(ListMode::default(), ListMode::MUTABLE);
        assert!(!ListMode::MUTABLE.blocks_structure());
        assert!(!ListMode::MUTABLE.blocks_values());
    }

    #[test]
    fn gating_table() {
        let fixed = ListMode::new(false, true);
        assert!(fixed.blocks_structure());
        assert!(!fixed.blocks_values());

        let read_only = ListMode::new(true, false);
        assert!(read_only.blocks_structure());
        assert!(read_only.blocks_values());

        let both = ListMode::new(true, true);
        assert!(both.blocks_structure());
        assert!(both.blocks_values());
    }
}

use std::fmt::{Debug, Formatter};

/// An owned, opaque run of bytes.
///
/// A `Block` is never empty: the zero-length "no block" case is expressed with `Option::None`
/// everywhere in this crate.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Block {
    data: Box<[u8]>,
}

impl Block {
    /// Takes ownership of `data`.
    ///
    /// Panics if `data` is empty.
    pub fn new(data: Box<[u8]>) -> Block {
        assert!(!data.is_empty(), "a block must hold at least one byte");
        Block { data }
    }

    /// Copies `bytes` into a new block, reporting allocation failure as `None`.
    ///
    /// Panics if `bytes` is empty.
    pub fn try_copy_from(bytes: &[u8]) -> Option<Block> {
        assert!(!bytes.is_empty(), "a block must hold at least one byte");
        let mut data = Vec::new();
        data.try_reserve_exact(bytes.len()).ok()?;
        data.extend_from_slice(bytes);
        Some(Block { data: data.into_boxed_slice() })
    }

    #[inline(always)]
    pub fn size(&self) -> usize {
        self.data.len()
    }

    #[inline(always)]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Mutable access to an owned block, such as a copy returned by `item_copy`.
    #[inline(always)]
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn into_boxed_bytes(self) -> Box<[u8]> {
        self.data
    }
}

impl From<&[u8]> for Block {
    fn from(bytes: &[u8]) -> Self {
        Block::new(bytes.into())
    }
}

impl From<&str> for Block {
    fn from(s: &str) -> Self {
        Block::from(s.as_bytes())
    }
}

impl From<Vec<u8>> for Block {
    fn from(bytes: Vec<u8>) -> Self {
        Block::new(bytes.into_boxed_slice())
    }
}

impl AsRef<[u8]> for Block {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl Debug for Block {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Block({} bytes)", self.data.len())
    }
}

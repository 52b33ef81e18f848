/// One FAQ group. At most one item is open at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accordion {
    len: usize,
    open: Option<usize>,
}

impl Accordion {
    pub fn new(len: usize) -> Self {
        Self { len, open: None }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn open_item(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, item: usize) -> bool {
        self.open == Some(item)
    }

    /// Click on an item's question: close the others, toggle this one.
    ///
    /// Returns `false` for an index outside the group.
    pub fn click(&mut self, item: usize) -> bool {
        if item >= self.len {
            return false;
        }
        self.open = if self.open == Some(item) { None } else { Some(item) };
        true
    }
}

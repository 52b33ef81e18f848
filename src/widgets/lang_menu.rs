/// Open/closed state of every language menu on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageMenus {
    open: Vec<bool>,
}

impl LanguageMenus {
    pub fn new(count: usize) -> Self {
        Self {
            open: vec![false; count],
        }
    }

    pub fn len(&self) -> usize {
        self.open.len()
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    pub fn is_open(&self, menu: usize) -> bool {
        self.open.get(menu).copied().unwrap_or(false)
    }

    /// Flip one menu. The click stops there, so other menus keep their state.
    ///
    /// Returns the new state, or `None` for an unknown menu.
    pub fn toggle(&mut self, menu: usize) -> Option<bool> {
        let slot = self.open.get_mut(menu)?;
        *slot = !*slot;
        Some(*slot)
    }

    /// A click anywhere else on the document closes every menu.
    ///
    /// Returns the indices that were open.
    pub fn document_click(&mut self) -> Vec<usize> {
        let closed = self
            .open
            .iter()
            .enumerate()
            .filter_map(|(i, open)| open.then_some(i))
            .collect();
        self.open.iter_mut().for_each(|open| *open = false);
        closed
    }
}

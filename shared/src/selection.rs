/// Ordered list of the files a user picked for a tool
///
/// Index `i` always refers to the i-th file currently displayed, there is no stable id
#[derive(Debug, Clone, PartialEq)]
pub struct Selection<F> {
    files: Vec<F>,
}

impl<F> Selection<F> {
    pub fn new() -> Self {
        Self { files: Vec::new() }
    }

    pub fn add(&mut self, files: impl IntoIterator<Item = F>) {
        self.files.extend(files);
    }

    /// Out of range indexes are ignored
    pub fn remove_at(&mut self, index: usize) -> Option<F> {
        if index >= self.files.len() {
            return None;
        }

        Some(self.files.remove(index))
    }

    pub fn clear(&mut self) {
        self.files.clear();
    }

    pub fn replace(&mut self, files: impl IntoIterator<Item = F>) {
        self.files = files.into_iter().collect();
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&F> {
        self.files.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, F> {
        self.files.iter()
    }

    pub fn as_slice(&self) -> &[F] {
        &self.files
    }
}

impl<F> Default for Selection<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F> FromIterator<F> for Selection<F> {
    fn from_iter<T: IntoIterator<Item = F>>(iter: T) -> Self {
        Self {
            files: iter.into_iter().collect(),
        }
    }
}

impl<'a, F> IntoIterator for &'a Selection<F> {
    type Item = &'a F;
    type IntoIter = std::slice::Iter<'a, F>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.iter()
    }
}

#[cfg(test)]
mod tests {
    use {super::Selection, pretty_assertions::assert_eq};

    fn names(selection: &Selection<&'static str>) -> Vec<&'static str> {
        selection.iter().copied().collect()
    }

    #[test]
    fn add_keeps_arrival_order_and_duplicates() {
        let mut selection = Selection::new();
        selection.add(["b.pdf", "a.pdf"]);
        selection.add(["b.pdf"]);

        assert_eq!(names(&selection), vec!["b.pdf", "a.pdf", "b.pdf"]);
    }

    #[test]
    fn remove_at_shifts_later_files() {
        let mut selection = Selection::from_iter(["a", "b", "c", "d"]);

        assert_eq!(selection.remove_at(1), Some("b"));
        assert_eq!(names(&selection), vec!["a", "c", "d"]);

        // Index 1 now points at the next file
        assert_eq!(selection.remove_at(1), Some("c"));
        assert_eq!(names(&selection), vec!["a", "d"]);
    }

    #[test]
    fn remove_out_of_range_is_a_noop() {
        let mut selection = Selection::from_iter(["a", "b"]);

        assert_eq!(selection.remove_at(2), None);
        assert_eq!(selection.remove_at(usize::MAX), None);
        assert_eq!(names(&selection), vec!["a", "b"]);

        let mut empty = Selection::<&str>::new();
        assert_eq!(empty.remove_at(0), None);
        assert!(empty.is_empty());
    }

    #[test]
    fn clear_and_replace() {
        let mut selection = Selection::from_iter(["a", "b"]);
        selection.replace(["c"]);
        assert_eq!(names(&selection), vec!["c"]);

        selection.clear();
        assert_eq!(selection.len(), 0);
    }

    #[test]
    fn length_follows_operation_sequence() {
        enum Op {
            Add(usize),
            Remove(usize),
            Clear,
        }

        let ops = [
            Op::Add(3),
            Op::Remove(0),
            Op::Remove(7),
            Op::Add(2),
            Op::Clear,
            Op::Remove(0),
            Op::Add(1),
            Op::Remove(0),
            Op::Add(4),
            Op::Remove(3),
        ];

        let mut selection = Selection::new();
        let mut expected = 0usize;

        for op in ops {
            match op {
                Op::Add(n) => {
                    selection.add(std::iter::repeat("file").take(n));
                    expected += n;
                }
                Op::Remove(index) => {
                    if selection.remove_at(index).is_some() {
                        expected -= 1;
                    }
                }
                Op::Clear => {
                    selection.clear();
                    expected = 0;
                }
            }
            assert_eq!(selection.len(), expected);
        }

        assert_eq!(expected, 3);
    }
}

/// Iterator over all C(7,5) = 21 five-card subsets of seven cards.
///
/// Subsets are produced by choosing the pair of indices to leave out,
/// `(i, j)` with `i < j`, in lexicographic order of that pair. Each item holds
/// the five kept indices in ascending order.
pub struct Combinations7Choose5 {
    skip: (usize, usize),
    done: bool,
}

impl Combinations7Choose5 {
    pub fn new() -> Self {
        Self { skip: (0, 1), done: false }
    }
}

impl Default for Combinations7Choose5 {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Combinations7Choose5 {
    type Item = [usize; 5];

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let (i, j) = self.skip;
        let mut kept = [0usize; 5];
        let mut n = 0;
        for idx in (0..7).filter(|&idx| idx != i && idx != j) {
            kept[n] = idx;
            n += 1;
        }

        // Advance the excluded pair
        if j < 6 {
            self.skip.1 += 1;
        } else if i < 5 {
            self.skip = (i + 1, i + 2);
        } else {
            self.done = true;
        }

        Some(kept)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            (0, Some(0))
        } else {
            (1, Some(21))
        }
    }
}

//! # Expansion State
//!
//! Tracks which container nodes are shown expanded. Nodes have no identity
//! beyond their path, so any structural change to an array has to renumber
//! the entries that live under the affected indices.
//!
//! ## Renumbering
//!
//! ```text
//! remove items[1] from [a, b, c, d]
//!
//!   prune    items[1], items[1].*          (b's subtree is gone)
//!   shift    items[2] → items[1]           (c)
//!            items[3] → items[2]           (d)
//!
//! move items[1] → items[3] in [a, b, c, d, e]
//!
//!   remap    items[1] → items[3]           (b)
//!            items[2] → items[1]           (c)
//!            items[3] → items[2]           (d)
//! ```
//!
//! All renumbering runs against the pre-mutation indices, so it must be
//! called before the array itself is spliced. Entries are kept as parsed
//! paths; prefix tests compare segments, never strings, so `items[1]` is
//! not mistaken for a prefix of `items[10]`.

use jsontree_common::{Path, Segment};
use std::collections::BTreeSet;
use tracing::debug;

/// Set of expanded container paths for one editing session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionSet {
    paths: BTreeSet<Path>,
}

impl ExpansionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self, path: &Path) -> bool {
        self.paths.contains(path)
    }

    /// Mark `path` expanded. Returns `false` if it already was.
    pub fn expand(&mut self, path: Path) -> bool {
        self.paths.insert(path)
    }

    /// Mark `path` collapsed. Returns `false` if it was not expanded.
    pub fn collapse(&mut self, path: &Path) -> bool {
        self.paths.remove(path)
    }

    /// Flip the state of `path` and return the new state.
    pub fn toggle(&mut self, path: Path) -> bool {
        if self.paths.remove(&path) {
            false
        } else {
            self.paths.insert(path);
            true
        }
    }

    /// Mark every path in `paths` expanded, keeping existing entries.
    pub fn expand_all<I: IntoIterator<Item = Path>>(&mut self, paths: I) {
        self.paths.extend(paths);
    }

    pub fn collapse_all(&mut self) {
        self.paths.clear();
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Expanded paths in a stable order.
    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.paths.iter()
    }

    /// Canonical strings of the expanded paths, for the rendering boundary.
    pub fn to_strings(&self) -> Vec<String> {
        self.paths.iter().map(Path::to_string).collect()
    }

    /// Drop `removed` and everything beneath it. Returns the number of
    /// entries removed.
    pub fn prune_subtree(&mut self, removed: &Path) -> usize {
        let before = self.paths.len();
        self.paths.retain(|p| !removed.is_prefix_of(p));
        let pruned = before - self.paths.len();

        if pruned > 0 {
            debug!(path = %removed, pruned, "Pruned expanded subtree");
        }
        pruned
    }

    /// Renumber entries after `array_path[removed_index]` is removed from
    /// an array that had `original_length` elements.
    ///
    /// Every entry rooted at `array_path[i]` for `removed_index < i <
    /// original_length` moves to `array_path[i - 1]`. The subtree at
    /// `removed_index` must already be pruned. Returns the number of
    /// entries renamed.
    pub fn shift_after_removal(
        &mut self,
        array_path: &Path,
        removed_index: usize,
        original_length: usize,
    ) -> usize {
        let renames = self.collect_renames(array_path, |i| {
            (i > removed_index && i < original_length).then(|| i - 1)
        });

        let count = renames.len();
        self.apply_renames(renames);

        if count > 0 {
            debug!(array = %array_path, removed_index, renamed = count, "Shifted expanded paths");
        }
        count
    }

    /// Renumber entries for moving `array_path[from]` to position `to` in an
    /// array of `length` elements, using splice semantics: the moved element
    /// lands on `to` and every index in between shifts one step toward
    /// `from`'s old slot.
    ///
    /// Must run before the array is spliced. Out-of-range indices or
    /// `from == to` leave the set unchanged. Returns the number of entries
    /// remapped.
    pub fn remap_after_move(
        &mut self,
        array_path: &Path,
        from: usize,
        to: usize,
        length: usize,
    ) -> usize {
        if from == to || from >= length || to >= length {
            return 0;
        }

        let renames = self.collect_renames(array_path, |i| {
            if i == from {
                Some(to)
            } else if from < to && i > from && i <= to {
                Some(i - 1)
            } else if from > to && i >= to && i < from {
                Some(i + 1)
            } else {
                None
            }
        });

        let count = renames.len();
        self.apply_renames(renames);

        if count > 0 {
            debug!(array = %array_path, from, to, remapped = count, "Remapped expanded paths");
        }
        count
    }

    /// Pair each entry rooted at `array_path[i]` with its new path, for
    /// every `i` that `new_index` maps.
    fn collect_renames<F>(&self, array_path: &Path, new_index: F) -> Vec<(Path, Path)>
    where
        F: Fn(usize) -> Option<usize>,
    {
        self.paths
            .iter()
            .filter_map(|entry| {
                let (first, suffix) = entry.strip_prefix(array_path)?.split_first()?;
                let target = new_index(first.as_index()?)?;

                let mut renamed = array_path.clone();
                renamed.push(Segment::Index(target));
                Some((entry.clone(), renamed.join(suffix)))
            })
            .collect()
    }

    /// Remove every old path before inserting any new one, so a rename
    /// never lands on an entry that is itself about to move.
    fn apply_renames(&mut self, renames: Vec<(Path, Path)>) {
        for (old, _) in &renames {
            self.paths.remove(old);
        }
        self.paths.extend(renames.into_iter().map(|(_, new)| new));
    }
}

//! Single-element relocation.

/// Remove the element at `from` and reinsert it at `to`.
///
/// Both indices address the sequence as it is before the move, so `to` must
/// be `< len`. Returns `false` and leaves `items` untouched otherwise.
pub fn relocate<T>(items: &mut Vec<T>, from: usize, to: usize) -> bool {
    if from >= items.len() || to >= items.len() {
        return false;
    }
    let item = items.remove(from);
    items.insert(to, item);
    true
}

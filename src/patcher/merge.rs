use serde_yaml::Mapping;

/// Shallow-merges `overlay` into `target`.
///
/// Top-level keys from the overlay overwrite or add to the target. Nested
/// values are replaced wholesale on collision, never merged recursively.
/// Existing keys keep their position in the document; new keys are appended.
pub fn shallow_merge(target: &mut Mapping, overlay: Mapping) {
    for (key, value) in overlay {
        target.insert(key, value);
    }
}

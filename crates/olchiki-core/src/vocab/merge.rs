use tracing::{debug, debug_span};

use super::{IdentityKey, Vocabulary, VocabularyEntry};

/// Outcome of a [`merge_vocabulary`] call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeReport {
    pub accepted: usize,
    /// Keys of discarded entries, in input order.
    pub duplicates: Vec<IdentityKey>,
}

impl MergeReport {
    pub fn duplicate_count(&self) -> usize {
        self.duplicates.len()
    }

    /// Fold another report into this one.
    pub fn absorb(&mut self, other: MergeReport) {
        self.accepted += other.accepted;
        self.duplicates.extend(other.duplicates);
    }
}

/// Append `incoming` to `category`, skipping any entry whose identity key
/// already exists anywhere in the vocabulary or earlier in `incoming`.
///
/// Accepted entries keep their input order and are re-tagged with `category`.
pub fn merge_vocabulary(
    existing: Vocabulary,
    category: &str,
    incoming: Vec<VocabularyEntry>,
) -> (Vocabulary, MergeReport) {
    let _span = debug_span!("merge_vocabulary", category, incoming = incoming.len()).entered();

    let mut vocab = existing;
    let policy = vocab.policy();
    let mut seen = vocab.key_set();
    let mut report = MergeReport::default();

    for mut entry in incoming {
        let key = entry.key(policy);
        if seen.contains(&key) {
            debug!(key = %key, "duplicate entry discarded");
            report.duplicates.push(key);
            continue;
        }
        seen.insert(key);
        entry.category = category.to_string();
        vocab.push(category, entry);
        report.accepted += 1;
    }

    debug!(
        accepted = report.accepted,
        duplicates = report.duplicate_count()
    );
    (vocab, report)
}

//! Repository serial-id generation.

use super::{RepoError, RepoResult};

/// Issues serial ids for newly constructed repositories.
///
/// Each sequence is an explicit value owned by whoever builds repositories,
/// so two sequences never influence each other and a sequence can be reset.
#[derive(Debug, Clone, Default)]
pub struct RepositorySequence {
    last: u32,
}

impl RepositorySequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Continue numbering after `last` (e.g., after loading snapshots).
    pub fn starting_after(last: u32) -> Self {
        Self { last }
    }

    /// Next serial id. The first id issued is 1.
    ///
    /// Fails with [`RepoError::SequenceExhausted`] once `u32::MAX` has been
    /// issued; the sequence is left unchanged.
    pub fn next_id(&mut self) -> RepoResult<u32> {
        self.last = self
            .last
            .checked_add(1)
            .ok_or(RepoError::SequenceExhausted { last: self.last })?;
        Ok(self.last)
    }

    /// Last id issued, 0 when none.
    pub fn last_issued(&self) -> u32 {
        self.last
    }

    pub fn reset(&mut self) {
        self.last = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::ExamRepository;

    #[test]
    fn test_ids_increase() {
        let mut sequence = RepositorySequence::new();
        assert_eq!(sequence.next_id().unwrap(), 1);
        assert_eq!(sequence.next_id().unwrap(), 2);
        assert_eq!(sequence.last_issued(), 2);
    }

    #[test]
    fn test_sequences_are_independent() {
        let mut a = RepositorySequence::new();
        let mut b = RepositorySequence::new();
        a.next_id().unwrap();
        a.next_id().unwrap();
        assert_eq!(b.next_id().unwrap(), 1);
    }

    #[test]
    fn test_reset() {
        let mut sequence = RepositorySequence::starting_after(10);
        assert_eq!(sequence.next_id().unwrap(), 11);
        sequence.reset();
        assert_eq!(sequence.next_id().unwrap(), 1);
    }

    #[test]
    fn test_repositories_numbered_by_sequence() {
        let mut sequence = RepositorySequence::new();
        let first = ExamRepository::new(&mut sequence).unwrap();
        let second = ExamRepository::new(&mut sequence).unwrap();
        assert_eq!(first.repository_id(), 1);
        assert_eq!(second.repository_id(), 2);
    }

    #[test]
    fn test_exhausted_sequence() {
        let mut sequence = RepositorySequence::starting_after(u32::MAX - 1);
        assert_eq!(sequence.next_id().unwrap(), u32::MAX);

        let err = sequence.next_id().unwrap_err();
        assert!(matches!(err, RepoError::SequenceExhausted { last: u32::MAX }));
        assert_eq!(sequence.last_issued(), u32::MAX);

        assert!(ExamRepository::new(&mut sequence).is_err());
    }
}

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::models::{DuplicateCheckResult, SubmissionRecord, UserRecord};
use crate::registrar::{Registrar, SubmissionError, SubmitOutcome};

/// In-memory Registrar for tests and offline previews.
///
/// Behaves like the spreadsheet webhook: one row per person (matched by email
/// or phone), later submissions replace earlier ones.
#[derive(Clone, Debug, Default)]
pub struct MemoryRegistrar {
    rows: Arc<Mutex<Vec<SubmissionRecord>>>,
    rejection: Arc<Mutex<Option<String>>>,
    duplicate_checks: Arc<AtomicUsize>,
    submissions: Arc<AtomicUsize>,
}

impl MemoryRegistrar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a row directly, as if submitted earlier.
    pub fn seed(&self, row: SubmissionRecord) {
        upsert(&mut lock(&self.rows), row);
    }

    /// Make every following submission fail with `message`.
    pub fn reject_with(&self, message: impl Into<String>) {
        *lock(&self.rejection) = Some(message.into());
    }

    pub fn accept(&self) {
        *lock(&self.rejection) = None;
    }

    pub fn rows(&self) -> Vec<SubmissionRecord> {
        lock(&self.rows).clone()
    }

    pub fn duplicate_check_count(&self) -> usize {
        self.duplicate_checks.load(Ordering::SeqCst)
    }

    /// Number of submit calls, including rejected ones.
    pub fn submission_count(&self) -> usize {
        self.submissions.load(Ordering::SeqCst)
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Replace the row for the same person or append. Returns whether a row was replaced.
fn upsert(rows: &mut Vec<SubmissionRecord>, row: SubmissionRecord) -> bool {
    match rows.iter_mut().find(|r| r.user.matches(&row.user)) {
        Some(existing) => {
            *existing = row;
            true
        }
        None => {
            rows.push(row);
            false
        }
    }
}

impl Registrar for MemoryRegistrar {
    async fn check_duplicate(&self, email: &str, phone: &str) -> DuplicateCheckResult {
        self.duplicate_checks.fetch_add(1, Ordering::SeqCst);
        let key = UserRecord::new("", phone, email);
        lock(&self.rows)
            .iter()
            .find(|r| r.user.matches(&key))
            .map(|r| DuplicateCheckResult::found(r.category, r.user.name.clone()))
            .unwrap_or_else(DuplicateCheckResult::none)
    }

    async fn submit(&self, submission: &SubmissionRecord) -> Result<SubmitOutcome, SubmissionError> {
        self.submissions.fetch_add(1, Ordering::SeqCst);
        if let Some(message) = lock(&self.rejection).clone() {
            return Err(SubmissionError::Rejected(message));
        }
        let updated = upsert(&mut lock(&self.rows), submission.clone());
        Ok(SubmitOutcome::Confirmed { updated })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    fn row(name: &str, phone: &str, email: &str, category: Category) -> SubmissionRecord {
        SubmissionRecord::new(UserRecord::new(name, phone, email), category, None)
    }

    #[tokio::test]
    async fn test_empty_store_has_no_duplicates() {
        let registrar = MemoryRegistrar::new();
        let result = registrar
            .check_duplicate("a@example.com", "010-1111-1111")
            .await;
        assert_eq!(result, DuplicateCheckResult::none());
        assert_eq!(registrar.duplicate_check_count(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_found_by_email_or_phone() {
        let registrar = MemoryRegistrar::new();
        registrar.seed(row("Lee", "010-1111-1111", "lee@example.com", Category::Interest));

        let by_email = registrar
            .check_duplicate("lee@example.com", "010-9999-9999")
            .await;
        assert_eq!(by_email, DuplicateCheckResult::found(Category::Interest, "Lee"));

        let by_phone = registrar
            .check_duplicate("other@example.com", "010-1111-1111")
            .await;
        assert!(by_phone.exists);

        let neither = registrar
            .check_duplicate("other@example.com", "010-2222-2222")
            .await;
        assert!(!neither.exists);
    }

    #[tokio::test]
    async fn test_submit_appends_then_replaces() {
        let registrar = MemoryRegistrar::new();

        let first = registrar
            .submit(&row("Lee", "010-1111-1111", "lee@example.com", Category::Interest))
            .await
            .unwrap();
        assert_eq!(first, SubmitOutcome::Confirmed { updated: false });

        let second = registrar
            .submit(&row("Lee", "010-1111-1111", "lee@example.com", Category::Join))
            .await
            .unwrap();
        assert_eq!(second, SubmitOutcome::Confirmed { updated: true });

        let rows = registrar.rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].category, Category::Join);
    }

    #[tokio::test]
    async fn test_scripted_rejection() {
        let registrar = MemoryRegistrar::new();
        registrar.reject_with("sheet is full");

        let err = registrar
            .submit(&row("Lee", "010-1111-1111", "lee@example.com", Category::Join))
            .await
            .unwrap_err();
        assert_eq!(err, SubmissionError::Rejected("sheet is full".to_string()));
        assert_eq!(err.to_string(), "sheet is full");
        assert!(registrar.rows().is_empty());
        assert_eq!(registrar.submission_count(), 1);

        registrar.accept();
        assert!(registrar
            .submit(&row("Lee", "010-1111-1111", "lee@example.com", Category::Join))
            .await
            .is_ok());
    }
}

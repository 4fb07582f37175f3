use crate::domain::model::{
    AvatarSource, DeployReceipt, Notification, PortfolioDraft, ValidationReport,
};
use crate::domain::ports::{Deployer, Notifier};
use crate::utils::validation::validate_draft;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Idle,
    Submitting,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The draft failed schema validation; no deployment was attempted.
    Invalid,
    Deployed(DeployReceipt),
    Failed,
}

/// Owns the draft, the schema errors, and the single-submission state
/// machine: Idle -> Validating -> (Invalid -> Idle) | (Submitting ->
/// Succeeded/Failed -> Idle). The exclusive borrow on `submit` means a
/// second submission cannot start while one is in flight.
pub struct PortfolioForm<D: Deployer, N: Notifier> {
    draft: PortfolioDraft,
    errors: ValidationReport,
    phase: FormPhase,
    deployer: D,
    notifier: N,
}

impl<D: Deployer, N: Notifier> PortfolioForm<D, N> {
    pub fn new(deployer: D, notifier: N) -> Self {
        Self::with_draft(deployer, notifier, PortfolioDraft::default())
    }

    pub fn with_draft(deployer: D, notifier: N, draft: PortfolioDraft) -> Self {
        Self {
            draft,
            errors: ValidationReport::default(),
            phase: FormPhase::Idle,
            deployer,
            notifier,
        }
    }

    pub fn draft(&self) -> &PortfolioDraft {
        &self.draft
    }

    pub fn errors(&self) -> &ValidationReport {
        &self.errors
    }

    /// True while the deployment collaborator is running; the submit control
    /// must be rendered disabled for the duration.
    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.draft.name = value.into();
    }

    pub fn set_role(&mut self, value: impl Into<String>) {
        self.draft.role = value.into();
    }

    pub fn set_about(&mut self, value: impl Into<String>) {
        self.draft.about = value.into();
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.draft.email = value.into();
    }

    pub fn add_skill(&mut self, skill: impl Into<String>) {
        self.draft.skills.push(skill.into());
    }

    pub fn remove_skill(&mut self, skill: &str) {
        self.draft.skills.retain(|s| s != skill);
    }

    pub fn set_avatar(&mut self, avatar: Option<AvatarSource>) {
        self.draft.avatar = avatar;
    }

    /// Recomputes the schema errors. Callers wanting per-change validation
    /// invoke this after each setter; `submit` always re-runs it.
    pub fn validate(&mut self) -> bool {
        self.errors = validate_draft(&self.draft);
        self.errors.is_empty()
    }

    /// Validates and, when the draft is clean, runs the deployment sequence
    /// once. Both terminal outcomes notify the user, leave the draft intact,
    /// and return the phase to Idle.
    pub async fn submit(&mut self) -> SubmitOutcome {
        if !self.validate() {
            tracing::debug!("draft failed validation with {} errors", self.errors.len());
            return SubmitOutcome::Invalid;
        }

        self.phase = FormPhase::Submitting;
        let result = self.deployer.deploy(&self.draft).await;

        let outcome = match result {
            Ok(receipt) => {
                tracing::info!("portfolio deployed to {}", receipt.deployment_url);
                self.notifier.notify(Notification::normal(
                    "Success!",
                    "Your portfolio has been deployed successfully.",
                ));
                SubmitOutcome::Deployed(receipt)
            }
            Err(e) => {
                tracing::error!("deployment failed: {}", e);
                self.notifier.notify(Notification::destructive(
                    "Error",
                    "Failed to deploy portfolio. Please try again.",
                ));
                SubmitOutcome::Failed
            }
        };

        // Re-enable the submit control on success and failure alike.
        self.phase = FormPhase::Idle;
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::{ForgeError, Result};
    use async_trait::async_trait;
    use chrono::Utc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    struct StubDeployer {
        calls: Arc<AtomicUsize>,
        fail: bool,
    }

    impl StubDeployer {
        fn succeeding(calls: Arc<AtomicUsize>) -> Self {
            Self { calls, fail: false }
        }

        fn failing(calls: Arc<AtomicUsize>) -> Self {
            Self { calls, fail: true }
        }
    }

    #[async_trait]
    impl Deployer for StubDeployer {
        async fn deploy(&self, _draft: &PortfolioDraft) -> Result<DeployReceipt> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(ForgeError::DeployError {
                    message: "stubbed failure".to_string(),
                });
            }
            Ok(DeployReceipt {
                repo_url: "https://github.com/example/portfolio".to_string(),
                deployment_url: "https://portfolio.vercel.app".to_string(),
                deployed_at: Utc::now(),
            })
        }
    }

    #[derive(Clone, Default)]
    struct RecordingNotifier {
        shown: Arc<Mutex<Vec<Notification>>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&mut self, notification: Notification) {
            self.shown.lock().unwrap().push(notification);
        }
    }

    fn fill_valid(form: &mut PortfolioForm<StubDeployer, RecordingNotifier>) {
        form.set_name("Ada Lovelace");
        form.set_role("Software Engineer");
        form.set_about(
            "I build analytical engines and write programs for machines that do not exist yet.",
        );
        form.set_email("ada@example.com");
        form.add_skill("mathematics");
    }

    #[tokio::test]
    async fn test_invalid_draft_never_reaches_the_deployer() {
        let calls = Arc::new(AtomicUsize::new(0));
        let notifier = RecordingNotifier::default();
        let mut form = PortfolioForm::new(
            StubDeployer::succeeding(Arc::clone(&calls)),
            notifier.clone(),
        );
        fill_valid(&mut form);
        form.remove_skill("mathematics");

        let outcome = form.submit().await;

        assert_eq!(outcome, SubmitOutcome::Invalid);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(form.errors().error("skills"), Some("Add at least one skill"));
        assert!(notifier.shown.lock().unwrap().is_empty());
        // Entered data stays intact.
        assert_eq!(form.draft().name, "Ada Lovelace");
    }

    #[tokio::test]
    async fn test_successful_submission_notifies_and_reenables() {
        let calls = Arc::new(AtomicUsize::new(0));
        let notifier = RecordingNotifier::default();
        let mut form = PortfolioForm::new(
            StubDeployer::succeeding(Arc::clone(&calls)),
            notifier.clone(),
        );
        fill_valid(&mut form);

        let outcome = form.submit().await;

        assert!(matches!(outcome, SubmitOutcome::Deployed(_)));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(!form.is_submitting());

        let shown = notifier.shown.lock().unwrap();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].kind, crate::domain::model::NotificationKind::Normal);
        assert_eq!(shown[0].title, "Success!");
    }

    #[tokio::test]
    async fn test_failed_submission_keeps_draft_and_reenables() {
        let calls = Arc::new(AtomicUsize::new(0));
        let notifier = RecordingNotifier::default();
        let mut form =
            PortfolioForm::new(StubDeployer::failing(Arc::clone(&calls)), notifier.clone());
        fill_valid(&mut form);
        let before = form.draft().clone();

        let outcome = form.submit().await;

        assert_eq!(outcome, SubmitOutcome::Failed);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(!form.is_submitting());
        assert_eq!(form.draft(), &before);

        let shown = notifier.shown.lock().unwrap();
        assert_eq!(shown.len(), 1);
        assert_eq!(
            shown[0].kind,
            crate::domain::model::NotificationKind::Destructive
        );
    }

    #[tokio::test]
    async fn test_setters_touch_exactly_one_field() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut form = PortfolioForm::new(
            StubDeployer::succeeding(calls),
            RecordingNotifier::default(),
        );
        fill_valid(&mut form);

        form.set_role("Data Engineer");

        assert_eq!(form.draft().role, "Data Engineer");
        assert_eq!(form.draft().name, "Ada Lovelace");
        assert_eq!(form.draft().skills, vec!["mathematics".to_string()]);
    }

    #[tokio::test]
    async fn test_validation_errors_clear_after_fixing_the_field() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut form = PortfolioForm::new(
            StubDeployer::succeeding(calls),
            RecordingNotifier::default(),
        );
        fill_valid(&mut form);
        form.set_email("not-an-email");

        assert!(!form.validate());
        assert!(form.errors().error("email").is_some());

        form.set_email("ada@example.com");
        assert!(form.validate());
        assert!(form.errors().is_empty());
    }
}

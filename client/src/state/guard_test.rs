use std::cell::RefCell;
use std::sync::Arc;

use futures::executor::block_on;
use leptos::prelude::Owner;

use super::*;
use crate::state::session::MemorySessionStore;

/// Scripted validator that records every token it is asked about.
struct FakeValidator {
    result: Result<UserInfo, ApiError>,
    seen: RefCell<Vec<String>>,
    cancel_on_call: Option<MountLifetime>,
}

impl FakeValidator {
    fn new(result: Result<UserInfo, ApiError>) -> Self {
        Self { result, seen: RefCell::new(Vec::new()), cancel_on_call: None }
    }

    fn ok(name: &str) -> Self {
        Self::new(Ok(UserInfo { name: name.to_owned() }))
    }

    fn calls(&self) -> Vec<String> {
        self.seen.borrow().clone()
    }
}

impl Validator for FakeValidator {
    fn validate(&self, token: &str) -> impl Future<Output = Result<UserInfo, ApiError>> {
        self.seen.borrow_mut().push(token.to_owned());
        if let Some(lifetime) = &self.cancel_on_call {
            lifetime.cancel();
        }
        std::future::ready(self.result.clone())
    }
}

fn session_with(token: Option<&str>) -> SessionState {
    let store = match token {
        Some(token) => MemorySessionStore::with_token(token),
        None => MemorySessionStore::new(),
    };
    SessionState::new(Arc::new(store))
}

fn run(session: SessionState, validator: &FakeValidator, lifetime: &MountLifetime) -> (GuardOutcome, Vec<GuardPhase>) {
    let mut phases = Vec::new();
    let outcome = block_on(run_guard(session, validator, lifetime, |p| phases.push(p.clone())));
    (outcome, phases)
}

// =============================================================
// GuardPhase transitions
// =============================================================

#[test]
fn checking_without_token_redirects() {
    assert_eq!(GuardPhase::CheckingToken.on(GuardEvent::TokenMissing), GuardPhase::Redirecting);
}

#[test]
fn checking_with_token_validates() {
    assert_eq!(GuardPhase::CheckingToken.on(GuardEvent::TokenFound), GuardPhase::Validating);
}

#[test]
fn validating_success_and_failure() {
    let user = UserInfo { name: "Ana".to_owned() };
    assert_eq!(
        GuardPhase::Validating.on(GuardEvent::ValidationSucceeded(user.clone())),
        GuardPhase::Validated(user)
    );
    assert_eq!(GuardPhase::Validating.on(GuardEvent::ValidationFailed), GuardPhase::Redirecting);
}

#[test]
fn terminal_phases_ignore_events() {
    let validated = GuardPhase::Validated(UserInfo { name: "Ana".to_owned() });
    assert_eq!(validated.clone().on(GuardEvent::ValidationFailed), validated);
    assert_eq!(GuardPhase::Redirecting.on(GuardEvent::TokenFound), GuardPhase::Redirecting);
}

#[test]
fn out_of_order_success_does_not_skip_validation() {
    let user = UserInfo { name: "Ana".to_owned() };
    assert_eq!(
        GuardPhase::CheckingToken.on(GuardEvent::ValidationSucceeded(user)),
        GuardPhase::CheckingToken
    );
}

#[test]
fn only_validated_exposes_user() {
    assert!(GuardPhase::CheckingToken.user().is_none());
    assert!(GuardPhase::Validating.user().is_none());
    assert!(GuardPhase::Redirecting.user().is_none());
    let phase = GuardPhase::Validated(UserInfo { name: "Ana".to_owned() });
    assert_eq!(phase.user().map(|u| u.name.as_str()), Some("Ana"));
}

#[test]
fn loading_until_settled() {
    assert!(GuardPhase::CheckingToken.is_loading());
    assert!(GuardPhase::Validating.is_loading());
    assert!(!GuardPhase::Redirecting.is_loading());
    assert!(!GuardPhase::Validated(UserInfo { name: "Ana".to_owned() }).is_loading());
}

// =============================================================
// run_guard
// =============================================================

#[test]
fn no_token_redirects_without_request() {
    Owner::new().with(|| {
        let validator = FakeValidator::ok("Ana");
        let (outcome, phases) = run(session_with(None), &validator, &MountLifetime::new());
        assert_eq!(outcome, GuardOutcome::Redirect);
        assert!(validator.calls().is_empty());
        assert_eq!(phases, vec![GuardPhase::CheckingToken, GuardPhase::Redirecting]);
    });
}

#[test]
fn valid_token_renders_name_after_one_request() {
    Owner::new().with(|| {
        let session = session_with(Some("jwt-ok"));
        let validator = FakeValidator::ok("Ana");
        let (outcome, phases) = run(session, &validator, &MountLifetime::new());
        let user = UserInfo { name: "Ana".to_owned() };
        assert_eq!(outcome, GuardOutcome::Render(user.clone()));
        assert_eq!(validator.calls(), vec!["jwt-ok".to_owned()]);
        assert_eq!(
            phases,
            vec![GuardPhase::CheckingToken, GuardPhase::Validating, GuardPhase::Validated(user)]
        );
        assert_eq!(session.token_untracked().as_deref(), Some("jwt-ok"));
    });
}

#[test]
fn rejected_token_is_cleared_and_redirects() {
    Owner::new().with(|| {
        let session = session_with(Some("jwt-expired"));
        let validator = FakeValidator::new(Err(ApiError::rejected(401, None)));
        let (outcome, phases) = run(session, &validator, &MountLifetime::new());
        assert_eq!(outcome, GuardOutcome::Redirect);
        assert_eq!(session.token_untracked(), None);
        assert_eq!(phases.last(), Some(&GuardPhase::Redirecting));
        assert_eq!(validator.calls().len(), 1);
    });
}

#[test]
fn transport_failure_behaves_like_rejection() {
    Owner::new().with(|| {
        let session = session_with(Some("jwt"));
        let validator = FakeValidator::new(Err(ApiError::Transport("offline".to_owned())));
        let (outcome, phases) = run(session, &validator, &MountLifetime::new());
        assert_eq!(outcome, GuardOutcome::Redirect);
        assert_eq!(session.token_untracked(), None);
        assert_eq!(phases.last(), Some(&GuardPhase::Redirecting));
    });
}

#[test]
fn undecodable_success_body_redirects() {
    Owner::new().with(|| {
        let session = session_with(Some("jwt"));
        let validator = FakeValidator::new(Err(ApiError::Decode("missing field `name`".to_owned())));
        let (outcome, _) = run(session, &validator, &MountLifetime::new());
        assert_eq!(outcome, GuardOutcome::Redirect);
        assert_eq!(session.token_untracked(), None);
    });
}

#[test]
fn unmount_during_validation_discards_result() {
    Owner::new().with(|| {
        let session = session_with(Some("jwt"));
        let lifetime = MountLifetime::new();
        let mut validator = FakeValidator::new(Err(ApiError::rejected(401, None)));
        validator.cancel_on_call = Some(lifetime.clone());
        let (outcome, phases) = run(session, &validator, &lifetime);
        assert_eq!(outcome, GuardOutcome::Cancelled);
        assert_eq!(session.token_untracked().as_deref(), Some("jwt"));
        assert_eq!(phases, vec![GuardPhase::CheckingToken, GuardPhase::Validating]);
    });
}

#[test]
fn each_mount_validates_again() {
    Owner::new().with(|| {
        let session = session_with(Some("jwt"));
        let validator = FakeValidator::ok("Ana");
        run(session, &validator, &MountLifetime::new());
        run(session, &validator, &MountLifetime::new());
        assert_eq!(validator.calls().len(), 2);
    });
}

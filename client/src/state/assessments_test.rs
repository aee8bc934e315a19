use super::*;
use crate::net::mock;

#[test]
fn drafts_and_submitted_partition_items() {
    let state = AssessmentsState { items: mock::assessments(), loading: false };
    let drafts = state.drafts();
    let submitted = state.submitted();
    assert_eq!(drafts.len() + submitted.len(), state.items.len());
    assert!(drafts.iter().all(|a| a.status == AssessmentStatus::Draft));
    assert!(submitted.iter().all(|a| a.status == AssessmentStatus::Submitted));
}

#[test]
fn empty_state_has_no_drafts_or_submissions() {
    let state = AssessmentsState::default();
    assert!(state.drafts().is_empty());
    assert!(state.submitted().is_empty());
}

#[test]
fn continue_path_targets_badge() {
    let draft = &mock::assessments()[0];
    assert_eq!(continue_path(draft), "/industry/assessment/1");
}

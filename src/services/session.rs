use crate::domain::answers::{
    Answers, CompanySize, DesignTeamSize, ModelId, OpsStructure, OrgComplexity,
};
use crate::services::engine::recommend;

/// Where an advisor session currently is. Mirrors the questionnaire flow:
/// collect answers, show the recommendation, optionally drill into the
/// org-chart detail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdvisorState {
    CollectingAnswers,
    ShowingRecommendation,
    ShowingDetail,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    Submit,
    ViewDetail,
    GoBack,
    StartOver,
}

/// Partially filled questionnaire. Submission is gated on all four fields
/// being present; the gate lives here, not in the engine.
#[derive(Clone, Copy, Debug, Default)]
pub struct AnswerDraft {
    pub company_size: Option<CompanySize>,
    pub design_team_size: Option<DesignTeamSize>,
    pub existing_ops_structure: Option<OpsStructure>,
    pub organization_complexity: Option<OrgComplexity>,
}

impl AnswerDraft {
    pub fn is_complete(&self) -> bool {
        self.complete().is_some()
    }

    pub fn complete(&self) -> Option<Answers> {
        Some(Answers {
            company_size: self.company_size?,
            design_team_size: self.design_team_size?,
            existing_ops_structure: self.existing_ops_structure?,
            organization_complexity: self.organization_complexity?,
        })
    }
}

#[derive(Debug, Default)]
pub struct Session {
    state: AdvisorState,
    pub draft: AnswerDraft,
    recommendation: Option<ModelId>,
}

impl Default for AdvisorState {
    fn default() -> Self {
        AdvisorState::CollectingAnswers
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> AdvisorState {
        self.state
    }

    pub fn recommendation(&self) -> Option<ModelId> {
        self.recommendation
    }

    /// Applies one transition. Invalid transitions are rejected rather than
    /// silently ignored so a driving UI can surface them.
    pub fn apply(&mut self, event: SessionEvent) -> anyhow::Result<()> {
        match (self.state, event) {
            (AdvisorState::CollectingAnswers, SessionEvent::Submit) => {
                let answers = self
                    .draft
                    .complete()
                    .ok_or_else(|| anyhow::anyhow!("all four answers are required before submit"))?;
                self.recommendation = Some(recommend(&answers));
                self.state = AdvisorState::ShowingRecommendation;
                Ok(())
            }
            (AdvisorState::ShowingRecommendation, SessionEvent::ViewDetail) => {
                self.state = AdvisorState::ShowingDetail;
                Ok(())
            }
            (AdvisorState::ShowingDetail, SessionEvent::GoBack) => {
                self.state = AdvisorState::ShowingRecommendation;
                Ok(())
            }
            (_, SessionEvent::StartOver) => {
                *self = Session::new();
                Ok(())
            }
            (state, event) => {
                anyhow::bail!("cannot apply {:?} while {:?}", event, state)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_session() -> Session {
        let mut s = Session::new();
        s.draft.company_size = Some(CompanySize::Startup);
        s.draft.design_team_size = Some(DesignTeamSize::TenToTwentyFour);
        s.draft.existing_ops_structure = Some(OpsStructure::None);
        s.draft.organization_complexity = Some(OrgComplexity::SingleProduct);
        s
    }

    #[test]
    fn submit_requires_a_complete_draft() {
        let mut s = Session::new();
        s.draft.company_size = Some(CompanySize::Startup);
        assert!(s.apply(SessionEvent::Submit).is_err());
        assert_eq!(s.state(), AdvisorState::CollectingAnswers);
        assert!(s.recommendation().is_none());
    }

    #[test]
    fn full_flow_submit_detail_back() {
        let mut s = filled_session();
        s.apply(SessionEvent::Submit).unwrap();
        assert_eq!(s.state(), AdvisorState::ShowingRecommendation);
        assert_eq!(s.recommendation(), Some(ModelId::Unified));

        s.apply(SessionEvent::ViewDetail).unwrap();
        assert_eq!(s.state(), AdvisorState::ShowingDetail);

        s.apply(SessionEvent::GoBack).unwrap();
        assert_eq!(s.state(), AdvisorState::ShowingRecommendation);
    }

    #[test]
    fn start_over_resets_from_any_state() {
        let mut s = filled_session();
        s.apply(SessionEvent::Submit).unwrap();
        s.apply(SessionEvent::ViewDetail).unwrap();
        s.apply(SessionEvent::StartOver).unwrap();
        assert_eq!(s.state(), AdvisorState::CollectingAnswers);
        assert!(s.recommendation().is_none());
        assert!(!s.draft.is_complete());
    }

    #[test]
    fn out_of_order_events_are_rejected() {
        let mut s = filled_session();
        assert!(s.apply(SessionEvent::ViewDetail).is_err());
        assert!(s.apply(SessionEvent::GoBack).is_err());

        s.apply(SessionEvent::Submit).unwrap();
        assert!(s.apply(SessionEvent::Submit).is_err());
    }
}

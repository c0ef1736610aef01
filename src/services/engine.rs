use crate::domain::answers::{Answers, CompanySize, ModelId, OpsStructure, OrgComplexity};

/// Design orgs below this headcount never get a dedicated ops recommendation.
const DEDICATED_OPS_FLOOR: u32 = 10;

/// Minimum headcount before a design-led structure earns `design-centered`.
const DESIGN_CENTERED_FLOOR: u32 = 25;

/// Headcount at which a centralized enterprise qualifies for
/// `centralized-operations`.
const CENTRALIZED_OPS_FLOOR: u32 = 200;

/// Maps one completed questionnaire to an operations model.
///
/// Evaluated as an ordered decision list; the first matching rule wins. The
/// team-size gate overrides everything else: below ten designers no other
/// field is consulted. Pure and total over the closed answer enums, so this
/// never fails and never touches I/O.
pub fn recommend(answers: &Answers) -> ModelId {
    let team = answers.design_team_size.midpoint();

    if team < DEDICATED_OPS_FLOOR {
        return ModelId::NoDedicatedOps;
    }

    match answers.company_size {
        CompanySize::Startup => ModelId::Unified,
        CompanySize::Growth => {
            if answers.existing_ops_structure == OpsStructure::DesignLed
                && team >= DESIGN_CENTERED_FLOOR
            {
                ModelId::DesignCentered
            } else {
                ModelId::Unified
            }
        }
        CompanySize::Scale => {
            if answers.existing_ops_structure == OpsStructure::MultipleFunctions
                || answers.organization_complexity == OrgComplexity::MultipleBusinessUnits
            {
                ModelId::Hybrid
            } else if answers.existing_ops_structure == OpsStructure::DesignLed
                && team >= DESIGN_CENTERED_FLOOR
            {
                ModelId::DesignCentered
            } else {
                // Default for the scale bracket.
                ModelId::Hybrid
            }
        }
        CompanySize::Enterprise => {
            if team >= CENTRALIZED_OPS_FLOOR
                && answers.existing_ops_structure == OpsStructure::Centralized
            {
                ModelId::CentralizedOperations
            } else if matches!(
                answers.organization_complexity,
                OrgComplexity::ComplexEcosystem | OrgComplexity::MultipleBusinessUnits
            ) {
                ModelId::DistributedEnterprise
            } else if matches!(
                answers.existing_ops_structure,
                OpsStructure::Centralized | OpsStructure::MultipleFunctions
            ) {
                ModelId::DistributedWithCentral
            } else {
                // single-function and none, plus the residual fallback.
                ModelId::Distributed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::answers::DesignTeamSize;
    use crate::services::catalog::Catalog;

    fn answers(
        company_size: CompanySize,
        design_team_size: DesignTeamSize,
        existing_ops_structure: OpsStructure,
        organization_complexity: OrgComplexity,
    ) -> Answers {
        Answers {
            company_size,
            design_team_size,
            existing_ops_structure,
            organization_complexity,
        }
    }

    fn every_combination() -> impl Iterator<Item = Answers> {
        CompanySize::ALL.into_iter().flat_map(|size| {
            DesignTeamSize::ALL.into_iter().flat_map(move |team| {
                OpsStructure::ALL.into_iter().flat_map(move |structure| {
                    OrgComplexity::ALL
                        .into_iter()
                        .map(move |complexity| answers(size, team, structure, complexity))
                })
            })
        })
    }

    #[test]
    fn total_over_the_full_answer_domain() {
        let catalog = Catalog::new();
        let mut count = 0;
        for a in every_combination() {
            let model = recommend(&a);
            assert!(catalog.model(model).is_ok(), "{model} missing record");
            assert!(catalog.org_chart(model).is_ok(), "{model} missing chart");
            count += 1;
        }
        assert_eq!(count, 4 * 8 * 5 * 4);
    }

    #[test]
    fn small_team_gate_overrides_every_other_field() {
        for team in [
            DesignTeamSize::One,
            DesignTeamSize::TwoToFour,
            DesignTeamSize::FiveToNine,
        ] {
            for size in CompanySize::ALL {
                for structure in OpsStructure::ALL {
                    for complexity in OrgComplexity::ALL {
                        let a = answers(size, team, structure, complexity);
                        assert_eq!(recommend(&a), ModelId::NoDedicatedOps);
                    }
                }
            }
        }
    }

    #[test]
    fn startup_with_real_team_is_always_unified() {
        for team in [
            DesignTeamSize::TenToTwentyFour,
            DesignTeamSize::TwentyFiveToFortyNine,
            DesignTeamSize::TwoHundredPlus,
        ] {
            for structure in OpsStructure::ALL {
                for complexity in OrgComplexity::ALL {
                    let a = answers(CompanySize::Startup, team, structure, complexity);
                    assert_eq!(recommend(&a), ModelId::Unified);
                }
            }
        }
    }

    #[test]
    fn growth_design_led_needs_twenty_five_designers() {
        let design_led = answers(
            CompanySize::Growth,
            DesignTeamSize::TwentyFiveToFortyNine,
            OpsStructure::DesignLed,
            OrgComplexity::ProductSuite,
        );
        assert_eq!(recommend(&design_led), ModelId::DesignCentered);

        // Same bracket without the design-led structure falls back to unified.
        for structure in OpsStructure::ALL {
            if structure == OpsStructure::DesignLed {
                continue;
            }
            let a = Answers {
                existing_ops_structure: structure,
                ..design_led
            };
            assert_eq!(recommend(&a), ModelId::Unified);
        }

        // Design-led but only 10-24 people: still unified.
        let too_small = Answers {
            design_team_size: DesignTeamSize::TenToTwentyFour,
            ..design_led
        };
        assert_eq!(recommend(&too_small), ModelId::Unified);
    }

    #[test]
    fn scale_defaults_to_hybrid() {
        let a = answers(
            CompanySize::Scale,
            DesignTeamSize::TenToTwentyFour,
            OpsStructure::None,
            OrgComplexity::SingleProduct,
        );
        assert_eq!(recommend(&a), ModelId::Hybrid);

        let multi = Answers {
            organization_complexity: OrgComplexity::MultipleBusinessUnits,
            ..a
        };
        assert_eq!(recommend(&multi), ModelId::Hybrid);

        let design_led = answers(
            CompanySize::Scale,
            DesignTeamSize::TwentyFiveToFortyNine,
            OpsStructure::DesignLed,
            OrgComplexity::SingleProduct,
        );
        assert_eq!(recommend(&design_led), ModelId::DesignCentered);
    }

    #[test]
    fn centralized_enterprise_rule_outranks_complexity() {
        let base = answers(
            CompanySize::Enterprise,
            DesignTeamSize::TwoHundredPlus,
            OpsStructure::Centralized,
            OrgComplexity::SingleProduct,
        );
        assert_eq!(recommend(&base), ModelId::CentralizedOperations);

        // A complex ecosystem would match the distributed-enterprise rule,
        // but the centralized rule has priority.
        let complex = Answers {
            organization_complexity: OrgComplexity::ComplexEcosystem,
            ..base
        };
        assert_eq!(recommend(&complex), ModelId::CentralizedOperations);

        // Below 200 designers the centralized rule no longer applies.
        let smaller = Answers {
            design_team_size: DesignTeamSize::HundredToOneNinetyNine,
            ..complex
        };
        assert_eq!(recommend(&smaller), ModelId::DistributedEnterprise);
    }

    #[test]
    fn enterprise_branch_ordering() {
        let base = answers(
            CompanySize::Enterprise,
            DesignTeamSize::TenToTwentyFour,
            OpsStructure::None,
            OrgComplexity::SingleProduct,
        );

        // Falls through every higher-priority rule to pure distributed.
        assert_eq!(recommend(&base), ModelId::Distributed);

        let single = Answers {
            existing_ops_structure: OpsStructure::SingleFunction,
            ..base
        };
        assert_eq!(recommend(&single), ModelId::Distributed);

        let central = Answers {
            existing_ops_structure: OpsStructure::Centralized,
            ..base
        };
        assert_eq!(recommend(&central), ModelId::DistributedWithCentral);

        let multi_fn = Answers {
            existing_ops_structure: OpsStructure::MultipleFunctions,
            ..base
        };
        assert_eq!(recommend(&multi_fn), ModelId::DistributedWithCentral);

        let units = Answers {
            organization_complexity: OrgComplexity::MultipleBusinessUnits,
            existing_ops_structure: OpsStructure::Centralized,
            ..base
        };
        assert_eq!(recommend(&units), ModelId::DistributedEnterprise);
    }

    #[test]
    fn identical_answers_give_identical_results() {
        for a in every_combination() {
            assert_eq!(recommend(&a), recommend(&a));
        }
    }
}

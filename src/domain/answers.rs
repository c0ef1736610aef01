use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(thiserror::Error, Debug)]
pub enum AdvisorError {
    #[error("invalid answer for {field}: {value}")]
    InvalidAnswer { field: &'static str, value: String },
    #[error("model not in catalog: {0}")]
    UnknownModelId(String),
}

/// Identifier for a recommended operations model. The engine's range is a
/// subset of the catalog's domain, so every id produced here has a record
/// and an org chart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ModelId {
    NoDedicatedOps,
    Unified,
    DesignCentered,
    Hybrid,
    Distributed,
    DistributedWithCentral,
    DistributedEnterprise,
    CentralizedOperations,
}

impl ModelId {
    pub const ALL: [ModelId; 8] = [
        ModelId::NoDedicatedOps,
        ModelId::Unified,
        ModelId::DesignCentered,
        ModelId::Hybrid,
        ModelId::Distributed,
        ModelId::DistributedWithCentral,
        ModelId::DistributedEnterprise,
        ModelId::CentralizedOperations,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ModelId::NoDedicatedOps => "no-dedicated-ops",
            ModelId::Unified => "unified",
            ModelId::DesignCentered => "design-centered",
            ModelId::Hybrid => "hybrid",
            ModelId::Distributed => "distributed",
            ModelId::DistributedWithCentral => "distributed-with-central",
            ModelId::DistributedEnterprise => "distributed-enterprise",
            ModelId::CentralizedOperations => "centralized-operations",
        }
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum CompanySize {
    Startup,
    Growth,
    Scale,
    Enterprise,
}

impl CompanySize {
    pub const ALL: [CompanySize; 4] = [
        CompanySize::Startup,
        CompanySize::Growth,
        CompanySize::Scale,
        CompanySize::Enterprise,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CompanySize::Startup => "startup",
            CompanySize::Growth => "growth",
            CompanySize::Scale => "scale",
            CompanySize::Enterprise => "enterprise",
        }
    }
}

impl fmt::Display for CompanySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CompanySize {
    type Err = AdvisorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CompanySize::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| AdvisorError::InvalidAnswer {
                field: "companySize",
                value: s.to_string(),
            })
    }
}

/// Survey-style size brackets. The engine works off the numeric midpoint of
/// the chosen bracket, never the label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ValueEnum)]
pub enum DesignTeamSize {
    #[value(name = "1")]
    #[serde(rename = "1")]
    One,
    #[value(name = "2-4")]
    #[serde(rename = "2-4")]
    TwoToFour,
    #[value(name = "5-9")]
    #[serde(rename = "5-9")]
    FiveToNine,
    #[value(name = "10-24")]
    #[serde(rename = "10-24")]
    TenToTwentyFour,
    #[value(name = "25-49")]
    #[serde(rename = "25-49")]
    TwentyFiveToFortyNine,
    #[value(name = "50-99")]
    #[serde(rename = "50-99")]
    FiftyToNinetyNine,
    #[value(name = "100-199")]
    #[serde(rename = "100-199")]
    HundredToOneNinetyNine,
    #[value(name = "200+")]
    #[serde(rename = "200+")]
    TwoHundredPlus,
}

impl DesignTeamSize {
    pub const ALL: [DesignTeamSize; 8] = [
        DesignTeamSize::One,
        DesignTeamSize::TwoToFour,
        DesignTeamSize::FiveToNine,
        DesignTeamSize::TenToTwentyFour,
        DesignTeamSize::TwentyFiveToFortyNine,
        DesignTeamSize::FiftyToNinetyNine,
        DesignTeamSize::HundredToOneNinetyNine,
        DesignTeamSize::TwoHundredPlus,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DesignTeamSize::One => "1",
            DesignTeamSize::TwoToFour => "2-4",
            DesignTeamSize::FiveToNine => "5-9",
            DesignTeamSize::TenToTwentyFour => "10-24",
            DesignTeamSize::TwentyFiveToFortyNine => "25-49",
            DesignTeamSize::FiftyToNinetyNine => "50-99",
            DesignTeamSize::HundredToOneNinetyNine => "100-199",
            DesignTeamSize::TwoHundredPlus => "200+",
        }
    }

    /// Representative headcount for the bracket, used by every threshold in
    /// the decision table.
    pub fn midpoint(&self) -> u32 {
        match self {
            DesignTeamSize::One => 1,
            DesignTeamSize::TwoToFour => 3,
            DesignTeamSize::FiveToNine => 7,
            DesignTeamSize::TenToTwentyFour => 17,
            DesignTeamSize::TwentyFiveToFortyNine => 37,
            DesignTeamSize::FiftyToNinetyNine => 75,
            DesignTeamSize::HundredToOneNinetyNine => 150,
            DesignTeamSize::TwoHundredPlus => 200,
        }
    }
}

impl fmt::Display for DesignTeamSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DesignTeamSize {
    type Err = AdvisorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DesignTeamSize::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| AdvisorError::InvalidAnswer {
                field: "designTeamSize",
                value: s.to_string(),
            })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum OpsStructure {
    None,
    SingleFunction,
    DesignLed,
    MultipleFunctions,
    Centralized,
}

impl OpsStructure {
    pub const ALL: [OpsStructure; 5] = [
        OpsStructure::None,
        OpsStructure::SingleFunction,
        OpsStructure::DesignLed,
        OpsStructure::MultipleFunctions,
        OpsStructure::Centralized,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OpsStructure::None => "none",
            OpsStructure::SingleFunction => "single-function",
            OpsStructure::DesignLed => "design-led",
            OpsStructure::MultipleFunctions => "multiple-functions",
            OpsStructure::Centralized => "centralized",
        }
    }
}

impl fmt::Display for OpsStructure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OpsStructure {
    type Err = AdvisorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OpsStructure::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| AdvisorError::InvalidAnswer {
                field: "existingOpsStructure",
                value: s.to_string(),
            })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum OrgComplexity {
    SingleProduct,
    ProductSuite,
    MultipleBusinessUnits,
    ComplexEcosystem,
}

impl OrgComplexity {
    pub const ALL: [OrgComplexity; 4] = [
        OrgComplexity::SingleProduct,
        OrgComplexity::ProductSuite,
        OrgComplexity::MultipleBusinessUnits,
        OrgComplexity::ComplexEcosystem,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrgComplexity::SingleProduct => "single-product",
            OrgComplexity::ProductSuite => "product-suite",
            OrgComplexity::MultipleBusinessUnits => "multiple-business-units",
            OrgComplexity::ComplexEcosystem => "complex-ecosystem",
        }
    }
}

impl fmt::Display for OrgComplexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrgComplexity {
    type Err = AdvisorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrgComplexity::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| AdvisorError::InvalidAnswer {
                field: "organizationComplexity",
                value: s.to_string(),
            })
    }
}

/// One completed questionnaire. All four fields are required; partial input
/// lives in [`crate::services::session::AnswerDraft`] until submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answers {
    pub company_size: CompanySize,
    pub design_team_size: DesignTeamSize,
    pub existing_ops_structure: OpsStructure,
    pub organization_complexity: OrgComplexity,
}

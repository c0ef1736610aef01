use crate::domain::answers::{Answers, CompanySize, ModelId};
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// Descriptive record for one operations model. Authored once at catalog
/// construction, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelRecord {
    pub id: ModelId,
    pub name: String,
    pub structure_summary: String,
    pub best_for: String,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
}

/// Display category of an org-chart node. Drives color/size in a rendering
/// layer only; the engine never reads it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeCategory {
    Leadership,
    OpsLeadership,
    DesignLeadership,
    OpsFunction,
    DesignTeam,
    BusinessUnit,
}

impl NodeCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeCategory::Leadership => "leadership",
            NodeCategory::OpsLeadership => "ops-leadership",
            NodeCategory::DesignLeadership => "design-leadership",
            NodeCategory::OpsFunction => "ops-function",
            NodeCategory::DesignTeam => "design-team",
            NodeCategory::BusinessUnit => "business-unit",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrgNode {
    pub id: String,
    pub title: String,
    /// 0 = top of the reporting hierarchy.
    pub hierarchy_level: u8,
    /// Presentation-only layout coordinates; carried as data, never drawn here.
    pub x: i32,
    pub y: i32,
    pub category: NodeCategory,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub responsibilities: Vec<String>,
}

/// Directed reporting edge. Both endpoints must name nodes in the same chart;
/// a dangling endpoint is a data-authoring defect caught by `validate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrgEdge {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrgChart {
    pub model: ModelId,
    pub display_name: String,
    pub nodes: Vec<OrgNode>,
    pub edges: Vec<OrgEdge>,
}

/// Survey reference statistic shown alongside a recommendation. Advisory
/// only; not an engine input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkEntry {
    pub company_size: CompanySize,
    pub percentage_of_survey: f64,
    pub typical_design_team_range: String,
}

#[derive(Serialize)]
pub struct RecommendationReport {
    pub model: ModelId,
    pub name: String,
    pub structure_summary: String,
    pub best_for: String,
    pub answers: Answers,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub benchmark: Option<BenchmarkEntry>,
}

#[derive(Serialize, Clone)]
pub struct ModelListItem {
    pub id: ModelId,
    pub name: String,
    pub best_for: String,
}

#[derive(Serialize)]
pub struct ValidateReport {
    pub models: usize,
    pub charts: usize,
    pub status: String,
}

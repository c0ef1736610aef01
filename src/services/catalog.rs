use crate::domain::answers::{AdvisorError, CompanySize, ModelId};
use crate::domain::models::{
    BenchmarkEntry, ModelRecord, NodeCategory, OrgChart, OrgEdge, OrgNode,
};
use std::collections::{BTreeMap, HashSet};

/// Static lookup tables for model records, org charts and survey benchmarks.
/// Built once at startup and shared read-only by every command handler.
pub struct Catalog {
    models: BTreeMap<ModelId, ModelRecord>,
    charts: BTreeMap<ModelId, OrgChart>,
    benchmarks: BTreeMap<CompanySize, BenchmarkEntry>,
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            models: model_records(),
            charts: org_charts(),
            benchmarks: benchmarks(),
        }
    }

    /// A miss here means the engine produced an id the catalog does not
    /// carry, which is a data-authoring defect rather than user error.
    pub fn model(&self, id: ModelId) -> Result<&ModelRecord, AdvisorError> {
        self.models
            .get(&id)
            .ok_or_else(|| AdvisorError::UnknownModelId(id.to_string()))
    }

    pub fn org_chart(&self, id: ModelId) -> Result<&OrgChart, AdvisorError> {
        self.charts
            .get(&id)
            .ok_or_else(|| AdvisorError::UnknownModelId(id.to_string()))
    }

    /// Absence is an expected outcome, not an error; callers render an
    /// omitted benchmark section.
    pub fn benchmark(&self, size: CompanySize) -> Option<&BenchmarkEntry> {
        self.benchmarks.get(&size)
    }

    pub fn models(&self) -> impl Iterator<Item = &ModelRecord> {
        self.models.values()
    }

    pub fn model_count(&self) -> usize {
        self.models.len()
    }

    pub fn chart_count(&self) -> usize {
        self.charts.len()
    }

    /// Audits the authored data: every model id has a record and a chart,
    /// pros/cons are non-empty, node ids are unique per chart and every edge
    /// endpoint resolves.
    pub fn validate(&self) -> anyhow::Result<()> {
        for id in ModelId::ALL {
            let record = self.model(id)?;
            if record.pros.is_empty() || record.cons.is_empty() {
                anyhow::bail!("model {} has empty pros or cons", id);
            }
            let chart = self.org_chart(id)?;
            let mut ids = HashSet::new();
            for node in &chart.nodes {
                if !ids.insert(node.id.as_str()) {
                    anyhow::bail!("chart {} has duplicate node id {}", id, node.id);
                }
            }
            for edge in &chart.edges {
                for endpoint in [&edge.from, &edge.to] {
                    if !ids.contains(endpoint.as_str()) {
                        anyhow::bail!(
                            "chart {} edge references unknown node {}",
                            id,
                            endpoint
                        );
                    }
                }
            }
        }
        Ok(())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

fn record(
    id: ModelId,
    name: &str,
    structure_summary: &str,
    best_for: &str,
    pros: &[&str],
    cons: &[&str],
) -> (ModelId, ModelRecord) {
    (
        id,
        ModelRecord {
            id,
            name: name.to_string(),
            structure_summary: structure_summary.to_string(),
            best_for: best_for.to_string(),
            pros: pros.iter().map(|s| s.to_string()).collect(),
            cons: cons.iter().map(|s| s.to_string()).collect(),
        },
    )
}

fn node(
    id: &str,
    title: &str,
    hierarchy_level: u8,
    x: i32,
    y: i32,
    category: NodeCategory,
) -> OrgNode {
    OrgNode {
        id: id.to_string(),
        title: title.to_string(),
        hierarchy_level,
        x,
        y,
        category,
        responsibilities: Vec::new(),
    }
}

fn node_with(
    id: &str,
    title: &str,
    hierarchy_level: u8,
    x: i32,
    y: i32,
    category: NodeCategory,
    responsibilities: &[&str],
) -> OrgNode {
    OrgNode {
        responsibilities: responsibilities.iter().map(|s| s.to_string()).collect(),
        ..node(id, title, hierarchy_level, x, y, category)
    }
}

fn edge(from: &str, to: &str) -> OrgEdge {
    OrgEdge {
        from: from.to_string(),
        to: to.to_string(),
    }
}

fn chart(
    model: ModelId,
    display_name: &str,
    nodes: Vec<OrgNode>,
    edges: Vec<OrgEdge>,
) -> (ModelId, OrgChart) {
    (
        model,
        OrgChart {
            model,
            display_name: display_name.to_string(),
            nodes,
            edges,
        },
    )
}

fn model_records() -> BTreeMap<ModelId, ModelRecord> {
    BTreeMap::from([
        record(
            ModelId::NoDedicatedOps,
            "No Dedicated DesignOps Needed",
            "Unified Operations with Design responsibilities distributed among designers and design managers",
            "Small design teams (under 10 people) where dedicated ops roles would be overhead",
            &[
                "No additional overhead or specialized roles needed",
                "Designers stay connected to operational realities",
                "Unified ops can handle design tools and basic processes",
                "Design managers can handle team-specific operational needs",
                "Cost-effective approach for smaller teams",
            ],
            &[
                "Design-specific expertise may be limited in unified ops",
                "Designers spend time on ops tasks instead of design work",
                "May struggle with design system governance at scale",
                "Less specialized knowledge of design tools and processes",
                "Risk of design needs being deprioritized in unified ops",
            ],
        ),
        record(
            ModelId::Unified,
            "Unified Product Operations",
            "Design Ops + Product Ops + Research Ops + Content Ops under single Product Operations leader",
            "Teams with 10+ designers in small to mid-size companies with centralized product development",
            &[
                "Holistic product development view across all functions",
                "Streamlined tool procurement and vendor management",
                "Efficient resource allocation and capacity shifting",
                "Reduced coordination overhead with single point of contact",
                "Cross-functional process optimization",
            ],
            &[
                "Potential loss of specialized domain expertise",
                "Risk of competing priorities between functions",
                "Less clear career advancement paths for specialists",
                "Possible cultural misalignment between functions",
                "May prioritize efficiency over craft quality",
            ],
        ),
        record(
            ModelId::DesignCentered,
            "Design-Centered Operations",
            "Design Ops + Research Ops + Content Ops under Design Leadership",
            "Design-forward companies with mature design organizations (25+ designers)",
            &[
                "Strong user-experience alignment across functions",
                "Preserves design thinking and creative processes",
                "Maintains specialized domain expertise",
                "Natural collaboration between related functions",
                "Quality-focused approach over pure efficiency",
            ],
            &[
                "Limited organizational influence outside design",
                "Potential resource competition with other departments",
                "Requires coordination with separate product/engineering ops",
                "May face scaling challenges during rapid growth",
                "Risk of disconnect from broader business operations",
            ],
        ),
        record(
            ModelId::Hybrid,
            "Hybrid Embedded Model",
            "Mix of centralized shared services and embedded discipline-specific functions",
            "Mid-size organizations balancing efficiency and specialization",
            &[
                "Balanced approach combining efficiency and expertise",
                "Centralized functions achieve economies of scale",
                "Embedded functions provide specialized support",
                "Flexible adaptation based on organizational needs",
                "Best-of-both-worlds for complex organizations",
            ],
            &[
                "Role confusion between centralized and embedded functions",
                "Complex coordination across multiple models",
                "Inconsistent experience across different teams",
                "More challenging to reorganize as company evolves",
                "Potential conflicts between efficiency and advocacy",
            ],
        ),
        record(
            ModelId::Distributed,
            "Distributed Specialist Model",
            "Each ops function reports to respective discipline leadership",
            "Large organizations (100+ designers) with strong functional leadership",
            &[
                "Deep domain expertise within each function",
                "Direct advocacy for discipline-specific needs",
                "Cultural alignment with discipline values",
                "Clear specialist career advancement paths",
                "Maximum flexibility for each function",
            ],
            &[
                "High coordination overhead across functions",
                "Tool fragmentation and increased costs",
                "Potential resource duplication and inefficiency",
                "Organizational complexity with multiple reporting lines",
                "Risk of local optimization over global alignment",
            ],
        ),
        record(
            ModelId::DistributedWithCentral,
            "Distributed Model with Central Coordination",
            "Specialized ops functions embedded in disciplines with central standards and coordination",
            "Large organizations (100+ designers) that already have some centralized operations infrastructure",
            &[
                "Deep domain expertise within each specialized function",
                "Central coordination ensures consistency and best practice sharing",
                "Economies of scale through shared standards and tools",
                "Clear governance while maintaining functional autonomy",
                "Leverages existing central operations investment",
            ],
            &[
                "More complex coordination between central and distributed functions",
                "Potential tension between central standards and functional needs",
                "Requires strong communication and alignment processes",
                "May slow decision-making due to coordination overhead",
                "Risk of bureaucracy if central coordination becomes too heavy",
            ],
        ),
        record(
            ModelId::DistributedEnterprise,
            "Distributed Enterprise Model",
            "Independent business units each with their own operations structure suited to their needs",
            "Very large enterprises (150+ designers) with multiple distinct business units or complex ecosystems",
            &[
                "Each business unit can optimize for their specific context",
                "Autonomy allows for innovation and experimentation",
                "Business units can act like independent organizations",
                "Faster decision-making within each unit",
                "Better alignment with diverse business needs and markets",
            ],
            &[
                "Potential inconsistency across the enterprise",
                "Difficulty sharing learnings and best practices",
                "Higher overall costs due to duplication",
                "Complex coordination for enterprise-wide initiatives",
                "Risk of fragmented brand and user experience",
            ],
        ),
        record(
            ModelId::CentralizedOperations,
            "Centralized Operations",
            "Enterprise-level centralized operations with balanced ops squads supporting individual business units",
            "Very large enterprises (200+ designers) with existing centralized operations infrastructure and complex multi-business unit structure",
            &[
                "Maximum operational efficiency and standardization across the enterprise",
                "Balanced ops squads provide comprehensive support to each business unit",
                "Centralized governance ensures consistency while maintaining business unit focus",
                "Economies of scale across all operational functions (Product, Design, Research, Content, People, IT)",
                "Clear escalation paths and enterprise-wide coordination",
                "Optimal resource allocation and capacity management across business units",
                "Unified tooling, processes, and best practices across the organization",
            ],
            &[
                "Requires significant organizational maturity and investment",
                "Risk of bureaucracy and slower response to individual business unit needs",
                "Complex coordination overhead between central ops and business units",
                "Potential for over-standardization reducing business unit agility",
                "Requires strong change management and cultural alignment",
                "May struggle with highly specialized or unique business unit requirements",
                "Single point of failure for enterprise-wide operations support",
            ],
        ),
    ])
}

fn org_charts() -> BTreeMap<ModelId, OrgChart> {
    use NodeCategory::*;

    BTreeMap::from([
        chart(
            ModelId::NoDedicatedOps,
            "No Dedicated DesignOps",
            vec![
                node("cpo", "CPO / Head of Product", 0, 300, 50, Leadership),
                node_with(
                    "unified-ops",
                    "Unified Operations",
                    1,
                    300,
                    150,
                    OpsLeadership,
                    &[
                        "Tool management",
                        "Basic design processes",
                        "Vendor coordination",
                        "General operations",
                    ],
                ),
                node_with(
                    "design-manager",
                    "Design Manager",
                    1,
                    500,
                    150,
                    DesignLeadership,
                    &[
                        "Team management",
                        "Design process oversight",
                        "Design system coordination",
                        "Designer enablement",
                    ],
                ),
                node_with(
                    "designers",
                    "Designers",
                    2,
                    500,
                    250,
                    DesignTeam,
                    &[
                        "Design work",
                        "Some ops tasks",
                        "Design system contributions",
                        "Process feedback",
                    ],
                ),
            ],
            vec![
                edge("cpo", "unified-ops"),
                edge("cpo", "design-manager"),
                edge("design-manager", "designers"),
            ],
        ),
        chart(
            ModelId::Unified,
            "Unified Product Operations",
            vec![
                node("cpo", "CPO / Head of Product", 0, 400, 50, Leadership),
                node(
                    "product-ops-lead",
                    "Head of Product Operations",
                    1,
                    400,
                    150,
                    OpsLeadership,
                ),
                node_with(
                    "design-ops",
                    "Design Operations",
                    2,
                    200,
                    250,
                    OpsFunction,
                    &[
                        "Design system governance",
                        "Tool management",
                        "Process optimization",
                        "Team enablement",
                    ],
                ),
                node_with(
                    "product-ops",
                    "Product Operations",
                    2,
                    400,
                    250,
                    OpsFunction,
                    &[
                        "Product analytics",
                        "Market research",
                        "Roadmap support",
                        "Product tools",
                    ],
                ),
                node_with(
                    "research-ops",
                    "Research Operations (Existing or Future)",
                    2,
                    600,
                    250,
                    OpsFunction,
                    &[
                        "Research infrastructure",
                        "Methodology",
                        "Participant management",
                        "Research tools",
                        "Note: May already exist or be added in future",
                    ],
                ),
                node_with(
                    "content-ops",
                    "Content Operations (Existing or Future)",
                    2,
                    750,
                    250,
                    OpsFunction,
                    &[
                        "Content strategy",
                        "Content tools",
                        "Editorial processes",
                        "Content governance",
                        "Note: May already exist or be added in future",
                    ],
                ),
            ],
            vec![
                edge("cpo", "product-ops-lead"),
                edge("product-ops-lead", "design-ops"),
                edge("product-ops-lead", "product-ops"),
                edge("product-ops-lead", "research-ops"),
                edge("product-ops-lead", "content-ops"),
            ],
        ),
        chart(
            ModelId::DesignCentered,
            "Design-Centered Operations",
            vec![
                node("cpo", "CPO / Head of Product", 0, 400, 50, Leadership),
                node("head-design", "Head of Design", 1, 400, 130, DesignLeadership),
                node_with(
                    "head-experience-ops",
                    "Head of Experience Operations",
                    2,
                    400,
                    210,
                    OpsLeadership,
                    &[
                        "Experience operations strategy",
                        "Cross-functional coordination",
                        "Experience standards",
                        "Operations team leadership",
                    ],
                ),
                node_with(
                    "design-ops",
                    "Design Operations",
                    3,
                    250,
                    290,
                    OpsFunction,
                    &[
                        "Design systems",
                        "Design tools",
                        "Process optimization",
                        "Team enablement",
                    ],
                ),
                node_with(
                    "research-ops",
                    "Research Operations",
                    3,
                    400,
                    290,
                    OpsFunction,
                    &[
                        "Research infrastructure",
                        "Methodology",
                        "Participant management",
                        "Research tools",
                    ],
                ),
                node_with(
                    "content-ops",
                    "Content Operations",
                    3,
                    550,
                    290,
                    OpsFunction,
                    &[
                        "Content strategy",
                        "Content tools",
                        "Editorial processes",
                        "Content governance",
                    ],
                ),
            ],
            vec![
                edge("cpo", "head-design"),
                edge("head-design", "head-experience-ops"),
                edge("head-experience-ops", "design-ops"),
                edge("head-experience-ops", "research-ops"),
                edge("head-experience-ops", "content-ops"),
            ],
        ),
        chart(
            ModelId::Hybrid,
            "Hybrid Embedded Model",
            vec![
                node("cpo", "CPO / Head of Product", 0, 400, 50, Leadership),
                node_with(
                    "shared-services",
                    "Shared Services",
                    1,
                    200,
                    150,
                    OpsLeadership,
                    &[
                        "Tool procurement",
                        "Vendor management",
                        "Cross-team standards",
                        "Shared infrastructure",
                    ],
                ),
                node("product-team-1", "Product Team A", 1, 400, 150, BusinessUnit),
                node("product-team-2", "Product Team B", 1, 600, 150, BusinessUnit),
                node_with(
                    "embedded-ops-1",
                    "Embedded Ops A",
                    2,
                    400,
                    250,
                    OpsFunction,
                    &[
                        "Team-specific processes",
                        "Local optimization",
                        "Direct team support",
                        "Specialized workflows",
                    ],
                ),
                node_with(
                    "embedded-ops-2",
                    "Embedded Ops B",
                    2,
                    600,
                    250,
                    OpsFunction,
                    &[
                        "Team-specific processes",
                        "Local optimization",
                        "Direct team support",
                        "Specialized workflows",
                    ],
                ),
            ],
            vec![
                edge("cpo", "shared-services"),
                edge("cpo", "product-team-1"),
                edge("cpo", "product-team-2"),
                edge("product-team-1", "embedded-ops-1"),
                edge("product-team-2", "embedded-ops-2"),
                edge("shared-services", "embedded-ops-1"),
                edge("shared-services", "embedded-ops-2"),
            ],
        ),
        chart(
            ModelId::Distributed,
            "Distributed Specialist Model",
            vec![
                node("cpo", "CPO", 1, 150, 100, Leadership),
                node("head-design", "Head of Design", 1, 350, 100, DesignLeadership),
                node("head-research", "Head of Research", 1, 550, 100, Leadership),
                node("cto", "CTO", 1, 750, 100, Leadership),
                node_with(
                    "product-ops",
                    "Product Operations",
                    2,
                    150,
                    200,
                    OpsFunction,
                    &[
                        "Product analytics",
                        "Market research",
                        "Roadmap support",
                        "Reports to CPO",
                    ],
                ),
                node_with(
                    "design-ops",
                    "Design Operations",
                    2,
                    350,
                    200,
                    OpsFunction,
                    &[
                        "Design systems",
                        "Design processes",
                        "Reports to Head of Design",
                    ],
                ),
                node_with(
                    "research-ops",
                    "Research Operations",
                    2,
                    550,
                    200,
                    OpsFunction,
                    &[
                        "Research infrastructure",
                        "Methodology",
                        "Reports to Head of Research",
                    ],
                ),
                node_with(
                    "eng-ops",
                    "Engineering Operations",
                    2,
                    750,
                    200,
                    OpsFunction,
                    &["Developer tooling", "CI/CD", "Reports to CTO"],
                ),
            ],
            vec![
                edge("cpo", "product-ops"),
                edge("head-design", "design-ops"),
                edge("head-research", "research-ops"),
                edge("cto", "eng-ops"),
            ],
        ),
        chart(
            ModelId::DistributedWithCentral,
            "Distributed with Central Coordination",
            vec![
                node("coo", "COO / Head of Operations", 0, 450, 50, Leadership),
                node_with(
                    "central-ops",
                    "Central Ops Standards",
                    1,
                    450,
                    130,
                    OpsLeadership,
                    &[
                        "Cross-functional standards",
                        "Tool governance",
                        "Best practice sharing",
                        "Ops strategy coordination",
                    ],
                ),
                node("cpo", "CPO", 1, 150, 200, Leadership),
                node("head-design", "Head of Design", 1, 350, 200, DesignLeadership),
                node("head-research", "Head of Research", 1, 550, 200, Leadership),
                node("cto", "CTO", 1, 750, 200, Leadership),
                node_with(
                    "product-ops",
                    "Product Operations",
                    2,
                    150,
                    300,
                    OpsFunction,
                    &[
                        "Product analytics",
                        "Reports to CPO",
                        "Coordinates with Central Standards",
                    ],
                ),
                node_with(
                    "design-ops",
                    "Design Operations",
                    2,
                    350,
                    300,
                    OpsFunction,
                    &[
                        "Design systems",
                        "Reports to Head of Design",
                        "Coordinates with Central Standards",
                    ],
                ),
                node_with(
                    "research-ops",
                    "Research Operations",
                    2,
                    550,
                    300,
                    OpsFunction,
                    &[
                        "Research infrastructure",
                        "Reports to Head of Research",
                        "Coordinates with Central Standards",
                    ],
                ),
                node_with(
                    "eng-ops",
                    "Engineering Operations",
                    2,
                    750,
                    300,
                    OpsFunction,
                    &[
                        "Developer tooling",
                        "Reports to CTO",
                        "Coordinates with Central Standards",
                    ],
                ),
            ],
            vec![
                edge("coo", "central-ops"),
                edge("central-ops", "cpo"),
                edge("central-ops", "head-design"),
                edge("central-ops", "head-research"),
                edge("central-ops", "cto"),
                edge("cpo", "product-ops"),
                edge("head-design", "design-ops"),
                edge("head-research", "research-ops"),
                edge("cto", "eng-ops"),
            ],
        ),
        chart(
            ModelId::DistributedEnterprise,
            "Distributed Enterprise Model",
            vec![
                node("ceo", "CEO / Executive Team", 0, 400, 50, Leadership),
                node_with(
                    "bu1",
                    "Business Unit A",
                    1,
                    200,
                    150,
                    BusinessUnit,
                    &[
                        "Independent ops structure",
                        "Unit-specific processes",
                        "Autonomous decisions",
                    ],
                ),
                node_with(
                    "bu2",
                    "Business Unit B",
                    1,
                    400,
                    150,
                    BusinessUnit,
                    &[
                        "Independent ops structure",
                        "Unit-specific processes",
                        "Autonomous decisions",
                    ],
                ),
                node_with(
                    "bu3",
                    "Business Unit C",
                    1,
                    600,
                    150,
                    BusinessUnit,
                    &[
                        "Independent ops structure",
                        "Unit-specific processes",
                        "Autonomous decisions",
                    ],
                ),
                node_with(
                    "bu1-ops",
                    "Unit A Ops Structure",
                    2,
                    200,
                    250,
                    OpsFunction,
                    &[
                        "May use unified, hybrid, or distributed",
                        "Tailored to unit needs",
                        "Independent decision-making",
                    ],
                ),
                node_with(
                    "bu2-ops",
                    "Unit B Ops Structure",
                    2,
                    400,
                    250,
                    OpsFunction,
                    &[
                        "May use unified, hybrid, or distributed",
                        "Tailored to unit needs",
                        "Independent decision-making",
                    ],
                ),
                node_with(
                    "bu3-ops",
                    "Unit C Ops Structure",
                    2,
                    600,
                    250,
                    OpsFunction,
                    &[
                        "May use unified, hybrid, or distributed",
                        "Tailored to unit needs",
                        "Independent decision-making",
                    ],
                ),
            ],
            vec![
                edge("ceo", "bu1"),
                edge("ceo", "bu2"),
                edge("ceo", "bu3"),
                edge("bu1", "bu1-ops"),
                edge("bu2", "bu2-ops"),
                edge("bu3", "bu3-ops"),
            ],
        ),
        chart(
            ModelId::CentralizedOperations,
            "Centralized Operations",
            vec![
                node("ceo", "CEO / Executive Team", 0, 400, 40, Leadership),
                node("coo", "COO / Head of Operations", 1, 400, 120, Leadership),
                node_with(
                    "ops-squad-1",
                    "Ops Squad A",
                    2,
                    200,
                    200,
                    OpsLeadership,
                    &[
                        "Product + Design + Research + Content + People + IT Ops",
                        "Supports Business Unit A",
                        "Balanced cross-functional support",
                    ],
                ),
                node_with(
                    "ops-squad-2",
                    "Ops Squad B",
                    2,
                    400,
                    200,
                    OpsLeadership,
                    &[
                        "Product + Design + Research + Content + People + IT Ops",
                        "Supports Business Unit B",
                        "Balanced cross-functional support",
                    ],
                ),
                node_with(
                    "ops-squad-3",
                    "Ops Squad C",
                    2,
                    600,
                    200,
                    OpsLeadership,
                    &[
                        "Product + Design + Research + Content + People + IT Ops",
                        "Supports Business Unit C",
                        "Balanced cross-functional support",
                    ],
                ),
                node_with(
                    "bu1",
                    "Business Unit A",
                    3,
                    200,
                    280,
                    BusinessUnit,
                    &[
                        "Receives comprehensive ops support",
                        "Focus on business objectives",
                        "Streamlined operations",
                    ],
                ),
                node_with(
                    "bu2",
                    "Business Unit B",
                    3,
                    400,
                    280,
                    BusinessUnit,
                    &[
                        "Receives comprehensive ops support",
                        "Focus on business objectives",
                        "Streamlined operations",
                    ],
                ),
                node_with(
                    "bu3",
                    "Business Unit C",
                    3,
                    600,
                    280,
                    BusinessUnit,
                    &[
                        "Receives comprehensive ops support",
                        "Focus on business objectives",
                        "Streamlined operations",
                    ],
                ),
            ],
            vec![
                edge("ceo", "coo"),
                edge("coo", "ops-squad-1"),
                edge("coo", "ops-squad-2"),
                edge("coo", "ops-squad-3"),
                edge("ops-squad-1", "bu1"),
                edge("ops-squad-2", "bu2"),
                edge("ops-squad-3", "bu3"),
            ],
        ),
    ])
}

// DesignOps Benchmarking Survey (anonymized, n=333 responses).
fn benchmarks() -> BTreeMap<CompanySize, BenchmarkEntry> {
    let entry = |company_size, percentage_of_survey, range: &str| {
        (
            company_size,
            BenchmarkEntry {
                company_size,
                percentage_of_survey,
                typical_design_team_range: range.to_string(),
            },
        )
    };
    BTreeMap::from([
        entry(CompanySize::Startup, 8.4, "2-4 people (most common)"),
        entry(CompanySize::Growth, 13.8, "10-24 people (most common)"),
        entry(CompanySize::Scale, 28.5, "10-49 people (most common)"),
        entry(CompanySize::Enterprise, 45.6, "50-199 people (most common)"),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_covers_every_model_id() {
        let catalog = Catalog::new();
        assert_eq!(catalog.model_count(), ModelId::ALL.len());
        assert_eq!(catalog.chart_count(), ModelId::ALL.len());
        for id in ModelId::ALL {
            assert!(catalog.model(id).is_ok());
            assert!(catalog.org_chart(id).is_ok());
        }
    }

    #[test]
    fn authored_data_passes_validation() {
        Catalog::new().validate().expect("catalog data is consistent");
    }

    #[test]
    fn records_carry_five_to_seven_pros_and_cons() {
        let catalog = Catalog::new();
        for id in ModelId::ALL {
            let record = catalog.model(id).unwrap();
            assert!(
                (5..=7).contains(&record.pros.len()),
                "{id} has {} pros",
                record.pros.len()
            );
            assert!(
                (5..=7).contains(&record.cons.len()),
                "{id} has {} cons",
                record.cons.len()
            );
        }
    }

    #[test]
    fn every_company_size_has_a_benchmark() {
        let catalog = Catalog::new();
        for size in CompanySize::ALL {
            let entry = catalog.benchmark(size).expect("benchmark present");
            assert!(entry.percentage_of_survey > 0.0);
            assert!(!entry.typical_design_team_range.is_empty());
        }
    }

    #[test]
    fn chart_edges_connect_adjacent_levels_downward() {
        // Charts are authored as trees flowing from level 0 down; an edge
        // going upward would signal a swapped from/to pair.
        let catalog = Catalog::new();
        for id in ModelId::ALL {
            let chart = catalog.org_chart(id).unwrap();
            for e in &chart.edges {
                let from = chart.nodes.iter().find(|n| n.id == e.from).unwrap();
                let to = chart.nodes.iter().find(|n| n.id == e.to).unwrap();
                assert!(
                    from.hierarchy_level <= to.hierarchy_level,
                    "{id}: edge {} -> {} goes up the hierarchy",
                    e.from,
                    e.to
                );
            }
        }
    }
}

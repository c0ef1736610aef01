use crate::domain::answers::{CompanySize, DesignTeamSize, ModelId, OpsStructure, OrgComplexity};
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "opsadvisor", version, about = "DesignOps operations model advisor")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Map one completed questionnaire to an operations model
    Recommend {
        #[arg(long, value_enum)]
        company_size: CompanySize,
        #[arg(long, value_enum)]
        team_size: DesignTeamSize,
        #[arg(long, value_enum)]
        ops_structure: OpsStructure,
        #[arg(long, value_enum)]
        complexity: OrgComplexity,
    },
    /// List every operations model in the catalog
    Models,
    /// Show the full catalog record for one model
    Show {
        #[arg(value_enum)]
        model: ModelId,
    },
    /// Print the org-chart definition for one model
    Chart {
        #[arg(value_enum)]
        model: ModelId,
    },
    /// Look up the survey benchmark for a company size bracket
    Benchmark {
        #[arg(value_enum)]
        company_size: CompanySize,
    },
    /// Audit catalog data consistency
    Validate,
    /// Run the questionnaire as a stdin-driven dialog
    Interactive,
}

// ABOUTME: Defines the AdrInputs struct and the fixed transformation-context vocabularies.
// ABOUTME: Context enums carry their display labels and parse from them; unknown labels are input errors.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use thiserror::Error;

/// Errors produced while assembling an input set from untrusted field values.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("unknown {kind} option: {value}")]
    UnknownOption { kind: &'static str, value: String },
}

/// The full set of fields collected from one form interaction.
///
/// NFR values are free-form strings inserted verbatim into rendered output.
/// Inputs live only for the duration of a single generate action; they are
/// never persisted independently of the rendered ADR.
#[derive(Debug, Clone)]
pub struct AdrInputs {
    pub availability: String,
    pub latency_target: String,
    pub cost_cap: String,
    pub review_date: NaiveDate,
    pub application_context: ApplicationContext,
    pub database_context: DatabaseContext,
    pub infrastructure_context: InfrastructureContext,
    /// Ordered selection of matrix dimensions. Order is display-significant:
    /// it determines column order in the trade-off matrix.
    pub tradeoff_dimensions: Vec<TradeoffDimension>,
}

/// Where the application estate currently sits on its transformation path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplicationContext {
    LegacyMonolith,
    SoaWithEsb,
    EarlyMicroservices,
    EventDriven,
    CloudNativeMicroservices,
    ServerlessFirst,
}

impl ApplicationContext {
    /// Every option in presentation order.
    pub const ALL: &'static [ApplicationContext] = &[
        ApplicationContext::LegacyMonolith,
        ApplicationContext::SoaWithEsb,
        ApplicationContext::EarlyMicroservices,
        ApplicationContext::EventDriven,
        ApplicationContext::CloudNativeMicroservices,
        ApplicationContext::ServerlessFirst,
    ];

    /// The display label, exactly as shown in the form.
    pub fn label(&self) -> &'static str {
        match self {
            ApplicationContext::LegacyMonolith => "Legacy Monolith (Java EE, .NET, COBOL)",
            ApplicationContext::SoaWithEsb => "SOA with ESB (point-to-point, SOAP/XML)",
            ApplicationContext::EarlyMicroservices => {
                "Early Microservices (REST APIs, limited governance)"
            }
            ApplicationContext::EventDriven => "Event-Driven Architecture (Kafka, RabbitMQ)",
            ApplicationContext::CloudNativeMicroservices => {
                "Cloud-Native Microservices (12-Factor, CI/CD, containers)"
            }
            ApplicationContext::ServerlessFirst => {
                "Serverless-First (Lambda/Functions, API Gateway)"
            }
        }
    }
}

impl fmt::Display for ApplicationContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ApplicationContext {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|v| v.label() == s)
            .copied()
            .ok_or_else(|| InputError::UnknownOption {
                kind: "application transformation",
                value: s.to_string(),
            })
    }
}

/// Where the data estate currently sits on its transformation path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseContext {
    OracleSqlServerOnPrem,
    MainframeDb2,
    SelfManagedPostgresMysql,
    ManagedCloudDb,
    DistributedNoSql,
    PolyglotPersistence,
}

impl DatabaseContext {
    /// Every option in presentation order.
    pub const ALL: &'static [DatabaseContext] = &[
        DatabaseContext::OracleSqlServerOnPrem,
        DatabaseContext::MainframeDb2,
        DatabaseContext::SelfManagedPostgresMysql,
        DatabaseContext::ManagedCloudDb,
        DatabaseContext::DistributedNoSql,
        DatabaseContext::PolyglotPersistence,
    ];

    /// The display label, exactly as shown in the form.
    pub fn label(&self) -> &'static str {
        match self {
            DatabaseContext::OracleSqlServerOnPrem => {
                "Oracle / SQL Server on-prem (high licensing costs)"
            }
            DatabaseContext::MainframeDb2 => "Mainframe DB2 (batch-driven)",
            DatabaseContext::SelfManagedPostgresMysql => {
                "Self-managed PostgreSQL / MySQL (on VMs)"
            }
            DatabaseContext::ManagedCloudDb => "Managed Cloud DB (Aurora, Cloud SQL, CosmosDB)",
            DatabaseContext::DistributedNoSql => {
                "Distributed NoSQL (Cassandra, DynamoDB, MongoDB)"
            }
            DatabaseContext::PolyglotPersistence => {
                "Polyglot Persistence (mix of SQL + NoSQL + Streams)"
            }
        }
    }
}

impl fmt::Display for DatabaseContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DatabaseContext {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|v| v.label() == s)
            .copied()
            .ok_or_else(|| InputError::UnknownOption {
                kind: "database transformation",
                value: s.to_string(),
            })
    }
}

/// Where the infrastructure estate currently sits on its transformation path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfrastructureContext {
    OnPremDataCenter,
    PrivateCloud,
    IaasLiftAndShift,
    ContainerizedWorkloads,
    HybridCloud,
    MultiCloud,
    ServerlessInfrastructure,
}

impl InfrastructureContext {
    /// Every option in presentation order.
    pub const ALL: &'static [InfrastructureContext] = &[
        InfrastructureContext::OnPremDataCenter,
        InfrastructureContext::PrivateCloud,
        InfrastructureContext::IaasLiftAndShift,
        InfrastructureContext::ContainerizedWorkloads,
        InfrastructureContext::HybridCloud,
        InfrastructureContext::MultiCloud,
        InfrastructureContext::ServerlessInfrastructure,
    ];

    /// The display label, exactly as shown in the form.
    pub fn label(&self) -> &'static str {
        match self {
            InfrastructureContext::OnPremDataCenter => "On-Prem Data Center (VMWare, bare metal)",
            InfrastructureContext::PrivateCloud => "Private Cloud (OpenStack, Hyper-V)",
            InfrastructureContext::IaasLiftAndShift => {
                "IaaS Lift-and-Shift (EC2, Azure VMs, GCP Compute)"
            }
            InfrastructureContext::ContainerizedWorkloads => {
                "Containerized Workloads (Kubernetes, OpenShift)"
            }
            InfrastructureContext::HybridCloud => "Hybrid Cloud (mix of on-prem + cloud workloads)",
            InfrastructureContext::MultiCloud => "Multi-Cloud Strategy (AWS + Azure + GCP)",
            InfrastructureContext::ServerlessInfrastructure => {
                "Serverless Infrastructure (FaaS + managed services)"
            }
        }
    }
}

impl fmt::Display for InfrastructureContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for InfrastructureContext {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|v| v.label() == s)
            .copied()
            .ok_or_else(|| InputError::UnknownOption {
                kind: "infrastructure transformation",
                value: s.to_string(),
            })
    }
}

/// A named axis along which the transformation options are scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TradeoffDimension {
    Cost,
    Complexity,
    Speed,
    Reliability,
    Security,
    Operability,
    SkillFit,
    VendorRisk,
}

impl TradeoffDimension {
    /// Every dimension in presentation order.
    pub const ALL: &'static [TradeoffDimension] = &[
        TradeoffDimension::Cost,
        TradeoffDimension::Complexity,
        TradeoffDimension::Speed,
        TradeoffDimension::Reliability,
        TradeoffDimension::Security,
        TradeoffDimension::Operability,
        TradeoffDimension::SkillFit,
        TradeoffDimension::VendorRisk,
    ];

    /// The display label used in form checkboxes and matrix headers.
    pub fn label(&self) -> &'static str {
        match self {
            TradeoffDimension::Cost => "Cost",
            TradeoffDimension::Complexity => "Complexity",
            TradeoffDimension::Speed => "Speed",
            TradeoffDimension::Reliability => "Reliability",
            TradeoffDimension::Security => "Security",
            TradeoffDimension::Operability => "Operability",
            TradeoffDimension::SkillFit => "Skill Fit",
            TradeoffDimension::VendorRisk => "Vendor Risk",
        }
    }
}

impl fmt::Display for TradeoffDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TradeoffDimension {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|v| v.label() == s)
            .copied()
            .ok_or_else(|| InputError::UnknownOption {
                kind: "trade-off dimension",
                value: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_labels_parse_back_to_themselves() {
        for app in ApplicationContext::ALL {
            assert_eq!(app.label().parse::<ApplicationContext>().unwrap(), *app);
        }
        for db in DatabaseContext::ALL {
            assert_eq!(db.label().parse::<DatabaseContext>().unwrap(), *db);
        }
        for infra in InfrastructureContext::ALL {
            assert_eq!(
                infra.label().parse::<InfrastructureContext>().unwrap(),
                *infra
            );
        }
        for dim in TradeoffDimension::ALL {
            assert_eq!(dim.label().parse::<TradeoffDimension>().unwrap(), *dim);
        }
    }

    #[test]
    fn unknown_label_is_rejected_with_kind() {
        let err = "Quantum Mainframe".parse::<ApplicationContext>().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("application transformation"), "got: {}", msg);
        assert!(msg.contains("Quantum Mainframe"), "got: {}", msg);
    }

    #[test]
    fn vocabulary_sizes_match_the_form() {
        assert_eq!(ApplicationContext::ALL.len(), 6);
        assert_eq!(DatabaseContext::ALL.len(), 6);
        assert_eq!(InfrastructureContext::ALL.len(), 7);
        assert_eq!(TradeoffDimension::ALL.len(), 8);
    }

    #[test]
    fn display_matches_label() {
        assert_eq!(
            TradeoffDimension::SkillFit.to_string(),
            TradeoffDimension::SkillFit.label()
        );
        assert_eq!(TradeoffDimension::Cost.to_string(), "Cost");
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;

/// Legacy system a report is currently served from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceType {
    SapAbap,
    SapBw,
    Databricks,
}

impl SourceType {
    pub const fn ordered() -> [Self; 3] {
        [Self::SapAbap, Self::SapBw, Self::Databricks]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::SapAbap => "SAP ABAP",
            Self::SapBw => "SAP BW",
            Self::Databricks => "Databricks",
        }
    }

    /// Source objects a report of this type typically reads from, most common first.
    pub const fn data_sources(self) -> &'static [&'static str] {
        match self {
            Self::SapAbap => &[
                "ACDOCA",
                "BKPF/BSEG",
                "VBAK/VBAP",
                "EKKO/EKPO",
                "MARA/MARC",
                "PA0001/PA0002",
            ],
            Self::SapBw => &[
                "InfoCube",
                "DSO",
                "CompositeProvider",
                "HANA View",
                "Open ODS",
                "BEx Query",
            ],
            Self::Databricks => &[
                "Delta Lake",
                "Unity Catalog",
                "Feature Store",
                "MLflow Model",
                "Structured Streaming",
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FunctionalArea {
    Finance,
    Sales,
    SupplyChain,
    Hr,
    Manufacturing,
    Procurement,
    CustomerService,
    Marketing,
}

impl FunctionalArea {
    pub const fn ordered() -> [Self; 8] {
        [
            Self::Finance,
            Self::Sales,
            Self::SupplyChain,
            Self::Hr,
            Self::Manufacturing,
            Self::Procurement,
            Self::CustomerService,
            Self::Marketing,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Finance => "Finance",
            Self::Sales => "Sales",
            Self::SupplyChain => "Supply Chain",
            Self::Hr => "HR",
            Self::Manufacturing => "Manufacturing",
            Self::Procurement => "Procurement",
            Self::CustomerService => "Customer Service",
            Self::Marketing => "Marketing",
        }
    }

    /// Headline KPIs; areas without a dedicated list share the operational set.
    pub const fn kpi_examples(self) -> [&'static str; 4] {
        match self {
            Self::Finance => ["Revenue", "EBITDA", "Working Capital", "DSO"],
            Self::Sales => ["Pipeline Value", "Win Rate", "ASP", "Quota Attainment"],
            Self::SupplyChain => ["OTIF", "Inventory Turns", "Lead Time", "Fill Rate"],
            _ => ["Efficiency", "Utilization", "Quality", "Throughput"],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportCategory {
    OperationalDashboard,
    KpiScorecard,
    ManagementReport,
    AnalyticalReport,
    TransactionalReport,
    ComplianceReport,
}

impl ReportCategory {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::OperationalDashboard,
            Self::KpiScorecard,
            Self::ManagementReport,
            Self::AnalyticalReport,
            Self::TransactionalReport,
            Self::ComplianceReport,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::OperationalDashboard => "Operational Dashboard",
            Self::KpiScorecard => "KPI Scorecard",
            Self::ManagementReport => "Management Report",
            Self::AnalyticalReport => "Analytical Report",
            Self::TransactionalReport => "Transactional Report",
            Self::ComplianceReport => "Compliance Report",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BusinessOwner {
    CfoOffice,
    VpSales,
    Coo,
    Chro,
    VpSupplyChain,
    Controller,
    Cmo,
    Cio,
}

impl BusinessOwner {
    pub const fn ordered() -> [Self; 8] {
        [
            Self::CfoOffice,
            Self::VpSales,
            Self::Coo,
            Self::Chro,
            Self::VpSupplyChain,
            Self::Controller,
            Self::Cmo,
            Self::Cio,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::CfoOffice => "CFO Office",
            Self::VpSales => "VP Sales",
            Self::Coo => "COO",
            Self::Chro => "CHRO",
            Self::VpSupplyChain => "VP Supply Chain",
            Self::Controller => "Controller",
            Self::Cmo => "CMO",
            Self::Cio => "CIO",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefreshFrequency {
    RealTime,
    Hourly,
    Daily,
    Weekly,
    Monthly,
}

impl RefreshFrequency {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::RealTime,
            Self::Hourly,
            Self::Daily,
            Self::Weekly,
            Self::Monthly,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::RealTime => "Real-time",
            Self::Hourly => "Hourly",
            Self::Daily => "Daily",
            Self::Weekly => "Weekly",
            Self::Monthly => "Monthly",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Complexity {
    Low,
    Medium,
    High,
}

impl Complexity {
    pub const fn ordered() -> [Self; 3] {
        [Self::Low, Self::Medium, Self::High]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

/// Recommended destination for a legacy report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MigrationPath {
    EmbeddedAnalytics,
    DatasphereBdc,
    DataLake,
    Retain,
    Retire,
}

impl MigrationPath {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::EmbeddedAnalytics,
            Self::DatasphereBdc,
            Self::DataLake,
            Self::Retain,
            Self::Retire,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::EmbeddedAnalytics => "Embedded Analytics",
            Self::DatasphereBdc => "Datasphere/BDC",
            Self::DataLake => "Data Lake",
            Self::Retain => "Retain",
            Self::Retire => "Retire",
        }
    }
}

/// Lifecycle label derived together with the migration path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Needed,
    Redundant,
    Deprecated,
}

impl ReportStatus {
    pub const fn ordered() -> [Self; 3] {
        [Self::Needed, Self::Redundant, Self::Deprecated]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Needed => "Needed",
            Self::Redundant => "Redundant",
            Self::Deprecated => "Deprecated",
        }
    }
}

/// Catalog identifier of the form `RPT-0001`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ReportId(pub String);

impl ReportId {
    /// Builds the identifier for the zero-based position `index` in a generated catalog.
    pub fn for_position(index: usize) -> Self {
        Self(format!("RPT-{:04}", index + 1))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

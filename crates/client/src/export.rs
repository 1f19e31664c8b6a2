use chrono::NaiveDate;

use crate::{ApiClient, ApiError, Transport};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    PlansCsv,
    PlansPdf,
    AuditCsv,
}

impl ExportKind {
    pub fn path(&self) -> &'static str {
        match self {
            ExportKind::PlansCsv => "/export/plans",
            ExportKind::PlansPdf => "/export/plans/pdf",
            ExportKind::AuditCsv => "/export/audit",
        }
    }

    pub fn mime(&self) -> &'static str {
        match self {
            ExportKind::PlansCsv | ExportKind::AuditCsv => "text/csv",
            ExportKind::PlansPdf => "application/pdf",
        }
    }

    fn stem(&self) -> &'static str {
        match self {
            ExportKind::PlansCsv | ExportKind::PlansPdf => "notfallplan_export",
            ExportKind::AuditCsv => "audit_export",
        }
    }

    fn extension(&self) -> &'static str {
        match self {
            ExportKind::PlansCsv | ExportKind::AuditCsv => "csv",
            ExportKind::PlansPdf => "pdf",
        }
    }

    fn is_scoped(&self) -> bool {
        !matches!(self, ExportKind::AuditCsv)
    }
}

/// Optional month/year restriction for plan exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExportScope {
    pub month: Option<u32>,
    pub year: Option<i32>,
}

impl ExportScope {
    fn query(&self) -> [(&'static str, Option<String>); 2] {
        [
            ("month", self.month.map(|m| m.to_string())),
            ("year", self.year.map(|y| y.to_string())),
        ]
    }
}

/// Download name, e.g. `notfallplan_export_2024-06-12_2024-05.pdf`.
pub fn filename(kind: ExportKind, scope: ExportScope, today: NaiveDate) -> String {
    let suffix = match (kind.is_scoped(), scope.year, scope.month) {
        (true, Some(year), Some(month)) => format!("_{year}-{month:02}"),
        (true, Some(year), None) => format!("_{year}"),
        _ => String::new(),
    };
    format!(
        "{}_{}{}.{}",
        kind.stem(),
        today.format("%Y-%m-%d"),
        suffix,
        kind.extension()
    )
}

/// Fetches the export as raw bytes. The body is never parsed.
pub async fn fetch<T: Transport>(
    api: &ApiClient<T>,
    kind: ExportKind,
    scope: ExportScope,
) -> Result<Vec<u8>, ApiError> {
    if kind.is_scoped() {
        api.get_bytes(kind.path(), &scope.query()).await
    } else {
        api.get_bytes(kind.path(), &[]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 12).unwrap()
    }

    #[test]
    fn unscoped_names() {
        let scope = ExportScope::default();
        assert_eq!(
            filename(ExportKind::PlansCsv, scope, today()),
            "notfallplan_export_2024-06-12.csv"
        );
        assert_eq!(
            filename(ExportKind::AuditCsv, scope, today()),
            "audit_export_2024-06-12.csv"
        );
    }

    #[test]
    fn scoped_plan_names() {
        let scope = ExportScope {
            month: Some(5),
            year: Some(2024),
        };
        assert_eq!(
            filename(ExportKind::PlansPdf, scope, today()),
            "notfallplan_export_2024-06-12_2024-05.pdf"
        );
        assert_eq!(
            filename(ExportKind::AuditCsv, scope, today()),
            "audit_export_2024-06-12.csv"
        );

        let year_only = ExportScope {
            month: None,
            year: Some(2023),
        };
        assert_eq!(
            filename(ExportKind::PlansCsv, year_only, today()),
            "notfallplan_export_2024-06-12_2023.csv"
        );
    }
}

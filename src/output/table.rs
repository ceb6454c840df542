//! Column rendering for models

use crate::models::{
    Application, Domain, Organization, Route, ServiceInstance, ServiceOffering, Space,
};

/// A model that can be shown as one table row
pub trait Tabular {
    fn headers() -> &'static [&'static str];

    fn row(&self) -> Vec<String>;
}

/// Render rows under a header line, columns padded to their widest cell.
///
/// An empty slice renders as `No results`.
pub fn render_table<T: Tabular>(items: &[T]) -> String {
    if items.is_empty() {
        return "No results\n".to_string();
    }

    let headers = T::headers();
    let rows: Vec<Vec<String>> = items.iter().map(Tabular::row).collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(width) = widths.get_mut(i) {
                *width = (*width).max(cell.chars().count());
            }
        }
    }

    let mut out = String::new();
    push_line(&mut out, headers.iter().copied(), &widths);
    for row in &rows {
        push_line(&mut out, row.iter().map(String::as_str), &widths);
    }
    out
}

fn push_line<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let line = cells
        .zip(widths.iter().copied())
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("   ");
    out.push_str(line.trim_end());
    out.push('\n');
}

fn join<I, S>(values: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    values
        .into_iter()
        .map(|v| v.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

// ============================================================================
// Model Rows
// ============================================================================

impl Tabular for Organization {
    fn headers() -> &'static [&'static str] {
        &["name", "status", "quota", "spaces", "domains"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.fields.name.clone(),
            self.fields.status.clone(),
            self.fields.quota_definition.name.clone(),
            join(self.spaces.iter().map(|s| &s.name)),
            join(self.domains.iter().map(|d| &d.name)),
        ]
    }
}

impl Tabular for Space {
    fn headers() -> &'static [&'static str] {
        &["name", "org", "apps", "services", "allow ssh"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.fields.name.clone(),
            self.organization.name.clone(),
            join(self.applications.iter().map(|a| &a.name)),
            join(self.service_instances.iter().map(|s| &s.name)),
            self.fields.allow_ssh.to_string(),
        ]
    }
}

impl Tabular for Application {
    fn headers() -> &'static [&'static str] {
        &["name", "requested state", "instances", "memory", "disk", "urls"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.fields.name.clone(),
            self.fields.state.to_lowercase(),
            self.fields.instances.to_string(),
            format!("{}M", self.fields.memory_mb),
            format!("{}M", self.fields.disk_quota_mb),
            join(self.routes.iter().map(Route::url)),
        ]
    }
}

impl Tabular for Domain {
    fn headers() -> &'static [&'static str] {
        &["name", "status", "type"]
    }

    fn row(&self) -> Vec<String> {
        let status = if self.shared { "shared" } else { "owned" };
        vec![
            self.name.clone(),
            status.to_string(),
            self.router_group_type.clone(),
        ]
    }
}

impl Tabular for Route {
    fn headers() -> &'static [&'static str] {
        &["space", "host", "domain", "port", "path", "apps"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.space.name.clone(),
            self.host.clone(),
            self.domain.name.clone(),
            self.port.map(|p| p.to_string()).unwrap_or_default(),
            self.path.clone(),
            join(self.apps.iter().map(|a| &a.name)),
        ]
    }
}

impl Tabular for ServiceOffering {
    fn headers() -> &'static [&'static str] {
        &["service", "plans", "description"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.label.clone(),
            join(self.plans.iter().map(|p| &p.name)),
            self.description.clone(),
        ]
    }
}

impl Tabular for ServiceInstance {
    fn headers() -> &'static [&'static str] {
        &["name", "service", "plan", "bound apps", "last operation"]
    }

    fn row(&self) -> Vec<String> {
        let service = if self.is_user_provided() {
            "user-provided".to_string()
        } else {
            self.service_offering.label.clone()
        };
        let last_operation = &self.fields.last_operation;
        let operation = if last_operation.operation_type.is_empty() {
            String::new()
        } else {
            format!("{} {}", last_operation.operation_type, last_operation.state)
        };

        vec![
            self.fields.name.clone(),
            service,
            self.service_plan.name.clone(),
            self.service_bindings.len().to_string(),
            operation,
        ]
    }
}

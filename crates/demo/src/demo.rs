//! The playground demonstrations, collected into printable sections.

use serde::Serialize;

use optionals_core::error::CoreError;
use optionals_core::filter::remove_absent;
use optionals_core::form::{validate_form, FormData};
use optionals_core::guards;

/// Output of one demonstration.
#[derive(Debug, Clone, Serialize)]
pub struct Section {
    pub name: &'static str,
    pub lines: Vec<String>,
}

impl Section {
    fn new(name: &'static str, lines: Vec<String>) -> Self {
        Self { name, lines }
    }
}

/// Run every demonstration in order.
pub fn run_all() -> Vec<Section> {
    let mut sections = vec![unwrap_double(), filter_names()];
    sections.extend(validate_forms());
    sections.push(guard_helpers());
    tracing::debug!(sections = sections.len(), "Demonstrations complete");
    sections
}

fn unwrap_double() -> Section {
    let mut double_value: Option<f64> = None;
    let mut lines = vec![guards::describe_value(double_value)];
    double_value = Some(1.5);
    lines.push(guards::describe_value(double_value));
    Section::new("conditional unwrap", lines)
}

fn filter_names() -> Section {
    let test_data = [
        Some("Heather"),
        None,
        Some("Mike"),
        Some("John"),
        None,
        None,
        Some("Bob"),
    ];
    let names = remove_absent(&test_data);
    Section::new("remove absent", vec![format!("{names:?}")])
}

fn validate_forms() -> Vec<Section> {
    let email = Some("user1@lighthouselabs.ca");
    let forms = [
        ("form: all present", FormData::new(Some("user1"), Some("password123"), email)),
        ("form: missing password", FormData::new(Some("user1"), None, email)),
        ("form: missing username", FormData::new(None, None, email)),
    ];

    forms
        .iter()
        .map(|(name, form)| Section::new(*name, validate_form(form).lines()))
        .collect()
}

fn guard_helpers() -> Section {
    let lines = vec![
        guards::sign_label(10).to_string(),
        guards::check_value(None).to_string(),
        guards::describe_number(Some(10)),
        guards::divide(10.0, 0.0).to_string(),
        guards::sum(&[]).to_string(),
        guards::sum(&[3, 2, 5, 7, 1, 9]).to_string(),
    ];
    Section::new("guards", lines)
}

pub fn render_text(sections: &[Section]) -> String {
    let mut out = String::new();
    for section in sections {
        out.push_str(&format!("== {} ==\n", section.name));
        for line in &section.lines {
            out.push_str(line);
            out.push('\n');
        }
    }
    out
}

pub fn render_json(sections: &[Section]) -> Result<String, CoreError> {
    let mut json =
        serde_json::to_string_pretty(sections).map_err(|e| CoreError::Internal(e.to_string()))?;
    json.push('\n');
    Ok(json)
}

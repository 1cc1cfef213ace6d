//! HTML pages. Every interpolated value goes through `utils::html::escape`.

use crate::core::format::{CAFE_HEADINGS, FormattedCafe};
use crate::forms::{CafeFormData, FIELDS, FieldKind, FieldSpec, FormErrors, validators};
use crate::utils::html::escape;
use axum::http::StatusCode;
use std::fmt::Write;

const BOOTSTRAP_CSS: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css";

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<link rel="stylesheet" href="{BOOTSTRAP_CSS}">
</head>
<body>
<nav class="navbar navbar-dark bg-dark mb-4">
  <div class="container">
    <a class="navbar-brand" href="/">Cafe &amp; Wifi</a>
    <div>
      <a class="btn btn-outline-light btn-sm" href="/cafes">All cafes</a>
      <a class="btn btn-outline-light btn-sm" href="/add">Add a cafe</a>
    </div>
  </div>
</nav>
<main class="container">
{body}
</main>
</body>
</html>
"#,
        title = escape(title),
    )
}

pub fn index_page() -> String {
    layout(
        "Cafe & Wifi",
        r#"<div class="p-5 bg-light rounded-3">
  <h1 class="display-5">Cafe &amp; Wifi</h1>
  <p class="lead">Want to work in a cafe but need power and wifi? Find one that fits.</p>
  <a class="btn btn-primary btn-lg" href="/cafes">Show me!</a>
</div>"#,
    )
}

fn field_errors(errors: &FormErrors, field: &str) -> String {
    errors
        .get(field)
        .iter()
        .map(|m| format!(r#"<div class="invalid-feedback d-block">{}</div>"#, escape(m)))
        .collect()
}

fn text_input(out: &mut String, field: &FieldSpec, data: &CafeFormData, errors: &FormErrors) {
    let input_type = if field.kind == FieldKind::Url { "url" } else { "text" };
    let invalid = if errors.get(field.name).is_empty() { "" } else { " is-invalid" };

    let _ = write!(
        out,
        r#"<div class="mb-3">
  <label class="form-label" for="{name}">{label}</label>
  <input class="form-control{invalid}" type="{input_type}" id="{name}" name="{name}" value="{value}">
  {errs}
</div>
"#,
        name = field.name,
        label = escape(field.label),
        value = escape(data.value(field.name)),
        errs = field_errors(errors, field.name),
    );
}

fn checkbox(out: &mut String, field: &FieldSpec, data: &CafeFormData, errors: &FormErrors) {
    let checked = validators::is_checked(data.value(field.name));

    let _ = write!(
        out,
        r#"<div class="form-check mb-2">
  <input class="form-check-input" type="checkbox" id="{name}" name="{name}" value="y"{checked}>
  <label class="form-check-label" for="{name}">{label}</label>
  {errs}
</div>
"#,
        name = field.name,
        label = escape(field.label),
        checked = if checked { " checked" } else { "" },
        errs = field_errors(errors, field.name),
    );
}

/// Tri-state select used by the edit form: empty keeps the stored value.
fn flag_select(out: &mut String, field: &FieldSpec, data: &CafeFormData, errors: &FormErrors) {
    let current = validators::parse_flag(Some(data.value(field.name)))
        .ok()
        .flatten();
    let selected = |v: Option<bool>| if current == v { " selected" } else { "" };

    let _ = write!(
        out,
        r#"<div class="mb-3">
  <label class="form-label" for="{name}">{label}</label>
  <select class="form-select" id="{name}" name="{name}">
    <option value=""{keep}>(unchanged)</option>
    <option value="y"{yes}>Yes</option>
    <option value="n"{no}>No</option>
  </select>
  {errs}
</div>
"#,
        name = field.name,
        label = escape(field.label),
        keep = selected(None),
        yes = selected(Some(true)),
        no = selected(Some(false)),
        errs = field_errors(errors, field.name),
    );
}

fn cafe_form(action: &str, data: &CafeFormData, errors: &FormErrors, edit: bool) -> String {
    let mut out = format!(r#"<form method="post" action="{}" novalidate>"#, escape(action));
    out.push('\n');

    for field in &FIELDS {
        match (field.kind, edit) {
            (FieldKind::Flag, false) => checkbox(&mut out, field, data, errors),
            (FieldKind::Flag, true) => flag_select(&mut out, field, data, errors),
            _ => text_input(&mut out, field, data, errors),
        }
    }

    out.push_str(r#"<button class="btn btn-primary" type="submit">Submit</button>"#);
    out.push_str("\n</form>");
    out
}

pub fn add_page(data: &CafeFormData, errors: &FormErrors) -> String {
    let body = format!(
        "<h1>Add a new cafe</h1>\n{}",
        cafe_form("/add", data, errors, false)
    );
    layout("Add a cafe", &body)
}

fn header_row() -> String {
    CAFE_HEADINGS
        .iter()
        .map(|h| format!("<th>{}</th>", escape(h)))
        .collect()
}

/// Only http(s) URLs become links; other schemes are shown as text.
fn is_linkable(url: &str) -> bool {
    let lower = url.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

fn cafe_cells(cafe: &FormattedCafe) -> String {
    cafe.columns()
        .iter()
        .enumerate()
        .map(|(i, v)| match i {
            // map_url, img_url
            1 | 2 if is_linkable(v) => format!(r#"<td><a href="{0}">{0}</a></td>"#, escape(v)),
            _ => format!("<td>{}</td>", escape(v)),
        })
        .collect()
}

pub fn cafes_page(cafes: &[FormattedCafe]) -> String {
    let mut rows = String::new();
    for cafe in cafes {
        let _ = writeln!(
            rows,
            r#"<tr id="cafe-{id}">{cells}<td>
  <a class="btn btn-sm btn-outline-secondary" href="/update/{id}">Edit</a>
  <form class="d-inline" method="post" action="/report-closed/{id}">
    <button class="btn btn-sm btn-outline-danger" type="submit">Report closed</button>
  </form>
</td></tr>"#,
            id = cafe.id,
            cells = cafe_cells(cafe),
        );
    }

    let body = format!(
        r#"<h1>All cafes</h1>
<table class="table table-striped">
<thead><tr>{headings}<th></th></tr></thead>
<tbody>
{rows}</tbody>
</table>"#,
        headings = header_row(),
    );
    layout("All cafes", &body)
}

pub fn edit_page(
    cafe_id: i64,
    current: &FormattedCafe,
    data: &CafeFormData,
    errors: &FormErrors,
) -> String {
    let body = format!(
        r#"<h1>Edit {name}</h1>
<table class="table">
<thead><tr>{headings}</tr></thead>
<tbody><tr>{cells}</tr></tbody>
</table>
{form}"#,
        name = escape(&current.name),
        headings = header_row(),
        cells = cafe_cells(current),
        form = cafe_form(&format!("/update/{cafe_id}"), data, errors, true),
    );
    layout("Edit cafe", &body)
}

pub fn error_page(status: StatusCode) -> String {
    let reason = status.canonical_reason().unwrap_or("Error");
    layout(
        reason,
        &format!(
            r#"<h1>{} {}</h1>
<p>Something went wrong while handling your request.</p>
<a href="/cafes">Back to all cafes</a>"#,
            status.as_u16(),
            escape(reason)
        ),
    )
}

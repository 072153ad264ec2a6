//! Server-side HTML rendering.
//!
//! Every piece of text that comes from the data file or a form submission
//! goes through `escape` before it reaches the page.

use std::borrow::Cow;
use std::fmt::Write;

use axum::http::StatusCode;

use crate::catalog::Material;
use crate::compare::ComparisonResult;

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + 16);
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>{title}</title>\n\
         </head>\n\
         <body>\n\
         {body}\
         </body>\n\
         </html>\n",
        title = escape(title),
    )
}

/// Material list with the comparison form.
pub fn index_page(materials: &[Material]) -> String {
    let mut body = String::from("<h1>Materials</h1>\n");

    body.push_str("<table>\n<tr><th>Name</th><th>Electrical conductivity [MS/m]</th></tr>\n");
    for material in materials {
        let _ = writeln!(
            body,
            "<tr><td>{}</td><td>{}</td></tr>",
            escape(material.name()),
            material.electrical_conductivity()
        );
    }
    body.push_str("</table>\n");

    let options: String = materials
        .iter()
        .map(|m| {
            let name = escape(m.name());
            format!("<option value=\"{name}\">{name}</option>\n")
        })
        .collect();

    body.push_str("<h2>Compare</h2>\n<form action=\"/compare\" method=\"post\">\n");
    for field in ["material1", "material2"] {
        let _ = write!(body, "<select name=\"{field}\">\n{options}</select>\n");
    }
    body.push_str("<button type=\"submit\">Compare</button>\n</form>\n");

    layout("Materials", &body)
}

/// Side-by-side comparison of two materials.
pub fn comparison_page(material1: &str, material2: &str, result: &ComparisonResult) -> String {
    let first = escape(material1);
    let second = escape(material2);

    let mut body = format!("<h1>{first} vs {second}</h1>\n<table>\n");
    let _ = writeln!(
        body,
        "<tr><th>Property</th><th>{first}</th><th>{second}</th></tr>"
    );
    for entry in result.iter() {
        let _ = writeln!(
            body,
            "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape(entry.label),
            entry.first,
            entry.second
        );
    }
    body.push_str("</table>\n<p><a href=\"/\">Back</a></p>\n");

    layout("Comparison", &body)
}

/// Error page for a failed request.
pub fn error_page(status: StatusCode, message: &str) -> String {
    let body = format!(
        "<h1>{}</h1>\n<p>{}</p>\n<p><a href=\"/\">Back</a></p>\n",
        status,
        escape(message)
    );
    layout(status.canonical_reason().unwrap_or("Error"), &body)
}

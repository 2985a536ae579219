//! Small HTML building blocks. Each returns a fragment; callers concatenate.

use crate::models::TicketStatus;

const STYLESHEET: &str = "\
body{margin:0;font-family:system-ui,sans-serif;background:#fafafa;color:#171717}\
main{max-width:80rem;margin:0 auto;padding:3rem 1.5rem}\
h1{font-size:1.875rem;font-weight:600;margin:0 0 2rem}\
.header{display:flex;align-items:center;justify-content:space-between}\
.card{background:#fff;border:1px solid #e5e5e5;border-radius:.75rem;padding:1.5rem;margin-bottom:2rem}\
.grid{display:grid;gap:1.5rem}.grid-2{grid-template-columns:repeat(2,1fr)}.grid-4{grid-template-columns:repeat(4,1fr)}\
.stat-label{font-size:.875rem;color:#525252}.stat-value{font-size:1.875rem;font-weight:600}\
.ticket{border:1px solid #e5e5e5;border-radius:.5rem;padding:1.5rem;margin-bottom:1rem}\
.muted{color:#525252;font-size:.875rem}.empty{text-align:center;padding:3rem 0}\
.badge{padding:.25rem .75rem;border-radius:9999px;font-size:.875rem;font-weight:500}\
.badge-available{background:#dcfce7;color:#166534}.badge-sold{background:#e5e5e5;color:#262626}\
.badge-resale{background:#dbeafe;color:#1e40af}.badge-cancelled{background:#fee2e2;color:#991b1b}\
.btn{display:inline-block;padding:.5rem 1rem;border-radius:.5rem;border:0;font-weight:500;text-decoration:none;cursor:pointer;margin-top:1rem}\
.btn-primary{background:#171717;color:#fff}.btn-secondary{background:#f5f5f5;color:#171717;border:1px solid #d4d4d4}\
label{display:block;font-size:.875rem;font-weight:500;margin-bottom:.25rem}\
input,textarea{width:100%;box-sizing:border-box;padding:.5rem;border:1px solid #d4d4d4;border-radius:.5rem}\
";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Primary,
    Secondary,
}

impl Variant {
    fn class(&self) -> &'static str {
        match self {
            Variant::Primary => "btn btn-primary",
            Variant::Secondary => "btn btn-secondary",
        }
    }
}

/// Escapes text for use inside element bodies and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
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
    out
}

pub fn page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html><html lang="en"><head><meta charset="utf-8"><title>{title}</title><style>{STYLESHEET}</style></head><body><main>{body}</main></body></html>"#,
        title = escape(title),
    )
}

pub fn card(class: &str, body: &str) -> String {
    format!(r#"<div class="card {class}">{body}</div>"#)
}

pub fn button(label: &str, variant: Variant, kind: &str) -> String {
    format!(
        r#"<button type="{kind}" class="{}">{}</button>"#,
        variant.class(),
        escape(label)
    )
}

pub fn link_button(label: &str, href: &str, variant: Variant) -> String {
    format!(
        r#"<a href="{}" class="{}">{}</a>"#,
        escape(href),
        variant.class(),
        escape(label)
    )
}

pub fn input(label: &str, name: &str, kind: &str, value: &str) -> String {
    format!(
        r#"<div><label for="{name}">{}</label><input id="{name}" name="{name}" type="{kind}" value="{}"></div>"#,
        escape(label),
        escape(value)
    )
}

pub fn status_badge(status: TicketStatus) -> String {
    let class = match status {
        TicketStatus::Available => "badge-available",
        TicketStatus::Sold => "badge-sold",
        TicketStatus::AvailableForResale => "badge-resale",
        TicketStatus::Cancelled => "badge-cancelled",
    };
    format!(r#"<span class="badge {class}">{}</span>"#, status.label())
}

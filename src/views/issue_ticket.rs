use super::components::{button, card, escape, input, link_button, page, Variant};
use super::ISSUE_TICKET_PATH;

/// The ticket-issuing form. `error` is shown above the form after a rejected
/// submission.
pub fn render_issue_ticket(supplier_name: &str, error: Option<&str>) -> String {
    let mut body = format!(
        r#"<div class="header"><h1>Issue New Ticket</h1>{}</div>"#,
        link_button("Back to Dashboard", "/supplier/dashboard", Variant::Secondary)
    );

    if let Some(error) = error {
        body.push_str(&card("error", &format!(r#"<p class="badge-cancelled">{}</p>"#, escape(error))));
    }

    let fields = [
        input("Ticket Name", "ticket_name", "text", ""),
        input("Venue", "venue", "text", ""),
        input("Event Date", "event_date", "date", ""),
        input("Price", "price", "number", ""),
        input("Quantity", "quantity", "number", "1"),
        input("Description", "description", "text", ""),
    ]
    .concat();

    body.push_str(&card(
        "form",
        &format!(
            r#"<p class="muted">Issuing as {}</p><form method="post" action="{ISSUE_TICKET_PATH}"><div class="grid grid-2">{fields}</div>{}</form>"#,
            escape(supplier_name),
            button("Issue Ticket", Variant::Primary, "submit"),
        ),
    ));

    page("Issue New Ticket", &body)
}

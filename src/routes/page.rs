use crate::models::{EmailListRequest, SubmissionOutcome};
use crate::service::submit_email_list;
use crate::validation::DomainChecker;
use actix_web::{HttpResponse, Responder, get, post, web};

const PAGE_HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Email List Checker</title>
<style>
body { font-family: sans-serif; max-width: 48rem; margin: 2rem auto; }
textarea { width: 100%; }
table { border-collapse: collapse; width: 100%; margin-top: 1rem; }
td, th { border: 1px solid #ccc; padding: 0.3rem 0.5rem; text-align: left; }
.valid { color: #1a7f37; }
.invalid { color: #cf222e; }
.error { color: #cf222e; }
</style>
</head>
<body>
<h1>Email List Checker</h1>
"#;

const PAGE_TAIL: &str = "</body>\n</html>\n";

/// Escapes text for use in HTML element content and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Renders the form, prefilled with `input`, followed by the outcome of the
/// last submission when there is one.
pub fn render_page(input: &str, outcome: Option<&SubmissionOutcome>) -> String {
    let mut html = String::from(PAGE_HEAD);

    html.push_str(&format!(
        concat!(
            "<form method=\"post\" action=\"/\">\n",
            "<label for=\"inputText\">One email address per line</label>\n",
            "<textarea id=\"inputText\" name=\"inputText\" rows=\"10\">{}</textarea>\n",
            "<button type=\"submit\">Validate</button>\n",
            "</form>\n"
        ),
        escape_html(input)
    ));

    if let Some(outcome) = outcome {
        if let Some(error) = &outcome.error {
            html.push_str(&format!("<p class=\"error\">{}</p>\n", escape_html(error)));
        }
        if let (Some(results), Some(summary)) = (&outcome.results, outcome.summary()) {
            html.push_str(&format!(
                "<p class=\"summary\">{} checked: {} valid, {} invalid</p>\n",
                summary.total, summary.valid, summary.invalid
            ));
            html.push_str("<table>\n<tr><th>Email</th><th>Status</th><th>Message</th></tr>\n");
            for result in results {
                let (class, status) = if result.is_valid {
                    ("valid", "Valid")
                } else {
                    ("invalid", "Invalid")
                };
                html.push_str(&format!(
                    "<tr class=\"{class}\"><td>{}</td><td>{status}</td><td>{}</td></tr>\n",
                    escape_html(&result.email),
                    escape_html(&result.message)
                ));
            }
            html.push_str("</table>\n");
        }
    }

    html.push_str(PAGE_TAIL);
    html
}

fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body)
}

#[get("/")]
pub async fn index() -> impl Responder {
    html(render_page("", None))
}

/// Form submission. Always answers 200 with the rendered report.
#[post("/")]
pub async fn submit(
    form: web::Form<EmailListRequest>,
    checker: web::Data<dyn DomainChecker>,
) -> impl Responder {
    let outcome = submit_email_list(&form.input_text, checker.get_ref()).await;
    html(render_page(&form.input_text, Some(&outcome)))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(index).service(submit);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AddressResult;
    use crate::server::app_config;
    use crate::validation::mx::testing::StaticDomainChecker;
    use actix_web::App;
    use actix_web::http::StatusCode;
    use actix_web::test::{TestRequest, call_service, init_service, read_body};
    use std::sync::Arc;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">'&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&#39;&amp;&#39;&lt;/a&gt;"
        );
        assert_eq!(escape_html("plain@text.com"), "plain@text.com");
    }

    #[test]
    fn test_render_empty_form() {
        let page = render_page("", None);
        assert!(page.contains("name=\"inputText\""));
        assert!(!page.contains("<table>"));
        assert!(!page.contains("class=\"error\""));
    }

    #[test]
    fn test_render_results_escapes_user_input() {
        let outcome = SubmissionOutcome::checked(vec![
            AddressResult::new("<script>@x.com", true, "Valid domain with MX record"),
            AddressResult::new("bad", false, "Invalid email format"),
        ]);

        let page = render_page("<script>@x.com\nbad", Some(&outcome));

        assert!(!page.contains("<script>"));
        assert!(page.contains("<td>&lt;script&gt;@x.com</td>"));
        assert!(page.contains("2 checked: 1 valid, 1 invalid"));
        assert!(page.contains("<tr class=\"invalid\"><td>bad</td><td>Invalid</td>"));
    }

    #[test]
    fn test_render_error() {
        let outcome = SubmissionOutcome::rejected("Please enter at least one email address.");
        let page = render_page("", Some(&outcome));
        assert!(page.contains("<p class=\"error\">Please enter at least one email address.</p>"));
        assert!(!page.contains("<table>"));
    }

    #[actix_web::test]
    async fn test_get_index() {
        let app = init_service(
            App::new().configure(app_config(Arc::new(StaticDomainChecker::default()))),
        )
        .await;

        let resp = call_service(&app, TestRequest::get().uri("/").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body = read_body(resp).await;
        let body = std::str::from_utf8(&body).unwrap();
        assert!(body.contains("<form method=\"post\" action=\"/\">"));
    }

    #[actix_web::test]
    async fn test_post_form() {
        let app = init_service(App::new().configure(app_config(Arc::new(
            StaticDomainChecker::with(&[("b.com", true)]),
        ))))
        .await;

        let req = TestRequest::post()
            .uri("/")
            .set_form([("inputText", "a@b.com\nbad\na@b.com")])
            .to_request();
        let resp = call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body = read_body(resp).await;
        let body = std::str::from_utf8(&body).unwrap();
        assert!(body.contains("3 checked: 2 valid, 1 invalid"));
        assert_eq!(body.matches("Valid domain with MX record").count(), 2);
        assert!(body.contains("Invalid email format"));
    }

    #[actix_web::test]
    async fn test_post_blank_form() {
        let app = init_service(
            App::new().configure(app_config(Arc::new(StaticDomainChecker::default()))),
        )
        .await;

        let req = TestRequest::post()
            .uri("/")
            .set_form([("inputText", "   ")])
            .to_request();
        let resp = call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body = read_body(resp).await;
        let body = std::str::from_utf8(&body).unwrap();
        assert!(body.contains("Please enter at least one email address."));
        assert!(!body.contains("<table>"));
    }
}

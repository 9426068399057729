#![allow(dead_code)]

use axum::Router;
use std::sync::Arc;
use login_page::application::services::LoginService;
use login_page::domain::entities::Credentials;
use login_page::state::AppState;
use login_page::web::handlers::not_found_handler;
use login_page::web::routes::public_routes;

pub const ADMIN_EMAIL: &str = "admin@gmail.com";
pub const ADMIN_PASSWORD: &str = "123456";

pub fn create_test_state() -> AppState {
    create_state_with(Credentials::new(ADMIN_EMAIL, ADMIN_PASSWORD), "/dashboard")
}

pub fn create_state_with(credentials: Credentials, redirect_path: &str) -> AppState {
    AppState::new(Arc::new(LoginService::new(credentials, redirect_path)))
}

pub fn create_test_app(state: AppState) -> Router {
    public_routes().fallback(not_found_handler).with_state(state)
}

/// Extracts the text of the `<p class="error">` paragraph.
pub fn error_text(html: &str) -> &str {
    let start = html
        .find(r#"<p class="error">"#)
        .expect("error paragraph missing")
        + r#"<p class="error">"#.len();
    let end = html[start..].find("</p>").expect("unterminated error paragraph") + start;
    &html[start..end]
}

/// Returns the decoded `value` attribute of the `<input>` named `name`.
///
/// Inputs are rendered as `<input value="..." name="...">`; the escaped value
/// never contains a raw `"`, so it ends at the next quote.
pub fn input_value(html: &str, name: &str) -> String {
    let marker = r#"<input value=""#;
    let suffix = format!(r#"" name="{name}""#);

    html.match_indices(marker)
        .find_map(|(idx, _)| {
            let start = idx + marker.len();
            let len = html[start..].find('"')?;
            html[start + len..]
                .starts_with(&suffix)
                .then(|| decode_entities(&html[start..start + len]))
        })
        .unwrap_or_else(|| panic!("input {name} missing"))
}

/// Decodes the character references an HTML parser would resolve in an
/// attribute value: numeric (`&#60;`, `&#x3C;`) and the common named ones.
pub fn decode_entities(escaped: &str) -> String {
    let mut out = String::with_capacity(escaped.len());
    let mut rest = escaped;

    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        rest = &rest[amp..];

        let decoded = rest.find(';').and_then(|semi| {
            let entity = &rest[1..semi];
            let ch = match entity {
                "lt" => Some('<'),
                "gt" => Some('>'),
                "amp" => Some('&'),
                "quot" => Some('"'),
                "apos" => Some('\''),
                _ => entity
                    .strip_prefix("#x")
                    .or_else(|| entity.strip_prefix("#X"))
                    .map(|hex| u32::from_str_radix(hex, 16))
                    .or_else(|| entity.strip_prefix('#').map(str::parse::<u32>))
                    .and_then(Result::ok)
                    .and_then(char::from_u32),
            };
            ch.map(|c| (c, semi + 1))
        });

        match decoded {
            Some((ch, consumed)) => {
                out.push(ch);
                rest = &rest[consumed..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

use crate::domain::model::ProxyRenderContext;

/// Renders the front-end page. Every interpolated value is HTML-escaped.
pub fn render(context: &ProxyRenderContext) -> String {
    let mut body = String::new();

    if let Some(message) = &context.message {
        body.push_str(&format!(
            "    <p class=\"message\">{}</p>\n",
            escape_html(message)
        ));
    }
    if let Some(error) = &context.error {
        body.push_str(&format!(
            "    <p class=\"error\">{}</p>\n",
            escape_html(error)
        ));
    }

    format!(
        r#"<!doctype html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <title>Hello World Front-End</title>
  </head>
  <body>
    <h1>Hello World Front-End</h1>
    <p>API endpoint: <code>{endpoint}</code></p>
{body}  </body>
</html>
"#,
        endpoint = escape_html(&context.upstream_endpoint),
        body = body,
    )
}

pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

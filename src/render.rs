use std::collections::HashMap;

/// Build the board page: submission form, echo of the text just posted,
/// then every stored message in the given key order.
pub fn index_page(echo: &str, keys: &[String], messages: &HashMap<String, String>) -> String {
    let mut rows = String::new();

    for key in keys {
        if let Some(text) = messages.get(key) {
            rows.push_str("      <li><b>");
            rows.push_str(&escape(key));
            rows.push_str("</b>: ");
            rows.push_str(&escape(text));
            rows.push_str("</li>\n");
        }
    }

    format!(
        r#"<!DOCTYPE html>
<html>
  <head><title>Echo</title></head>
  <body>
    <h1>Echo</h1>
    <form method="post" action="/">
      <input type="text" name="echotext" autofocus>
      <input type="submit" value="Send">
    </form>
    <p>You said: {}</p>
    <ul>
{}    </ul>
  </body>
</html>
"#,
        escape(echo),
        rows
    )
}

pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());

    for c in input.chars() {
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

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::{escape, index_page};

    #[test]
    fn test_escape() {
        assert_eq!(escape("a & b"), "a &amp; b");
        assert_eq!(escape("<script>"), "&lt;script&gt;");
        assert_eq!(escape("\"quoted\" 'text'"), "&quot;quoted&quot; &#39;text&#39;");
        assert_eq!(escape("plain"), "plain");
        assert_eq!(escape(""), "");
    }

    #[test]
    fn test_messages_follow_key_order() {
        let mut messages = HashMap::new();
        messages.insert("message2".to_string(), "second".to_string());
        messages.insert("message1".to_string(), "first".to_string());

        let keys = vec!["message2".to_string(), "message1".to_string()];
        let page = index_page("", &keys, &messages);

        let second = page.find("second").unwrap();
        let first = page.find("first").unwrap();
        assert!(second < first);
    }

    #[test]
    fn test_echo_is_escaped() {
        let page = index_page("<b>hi</b>", &[], &HashMap::new());

        assert!(page.contains("You said: &lt;b&gt;hi&lt;/b&gt;"));
        assert!(!page.contains("<b>hi</b>"));
    }

    #[test]
    fn test_skips_keys_without_values() {
        let keys = vec!["message1".to_string()];
        let page = index_page("", &keys, &HashMap::new());

        assert!(!page.contains("message1"));
    }
}

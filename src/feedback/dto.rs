use serde::{Deserialize, Serialize};

pub const DEFAULT_KIND: &str = "Обратная связь";

/// Contact form body. Fields are optional so that missing ones get our own
/// validation message rather than a deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct FeedbackRequest {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct FeedbackResponse {
    pub success: bool,
}

/// A validated feedback message ready to be mailed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackMessage {
    pub kind: String,
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FeedbackMessage {
    pub fn subject(&self) -> String {
        format!("Новое сообщение с сайта Calori.AI - {}", self.kind)
    }

    pub fn html(&self) -> String {
        format!(
            "<h2>Новое сообщение с сайта Calori.AI</h2>\n\
             <p><strong>Тип сообщения:</strong> {}</p>\n\
             <p><strong>Имя:</strong> {}</p>\n\
             <p><strong>Email:</strong> {}</p>\n\
             <p><strong>Сообщение:</strong></p>\n\
             <p>{}</p>",
            escape_html(&self.kind),
            escape_html(&self.name),
            escape_html(&self.email),
            escape_html(&self.message),
        )
    }

    pub fn text(&self) -> String {
        format!(
            "Новое сообщение с сайта Calori.AI\n\n\
             Тип сообщения: {}\n\
             Имя: {}\n\
             Email: {}\n\n\
             Сообщение:\n{}",
            self.kind, self.name, self.email, self.message
        )
    }
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
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
    use super::*;

    fn message() -> FeedbackMessage {
        FeedbackMessage {
            kind: "Идея".into(),
            name: "Анна".into(),
            email: "anna@example.com".into(),
            message: "<b>Добавьте</b> клетчатку & сахар".into(),
        }
    }

    #[test]
    fn subject_contains_kind() {
        assert_eq!(message().subject(), "Новое сообщение с сайта Calori.AI - Идея");
    }

    #[test]
    fn html_is_escaped_but_text_is_not() {
        let m = message();
        assert!(m.html().contains("&lt;b&gt;Добавьте&lt;/b&gt; клетчатку &amp; сахар"));
        assert!(m.text().contains("<b>Добавьте</b> клетчатку & сахар"));
        assert!(m.text().contains("Имя: Анна"));
    }

    #[test]
    fn request_reads_type_field() {
        let req: FeedbackRequest =
            serde_json::from_str(r#"{"type":"Ошибка","name":"A","email":"a@b.co","message":"m"}"#)
                .unwrap();
        assert_eq!(req.kind.as_deref(), Some("Ошибка"));
        let req: FeedbackRequest = serde_json::from_str("{}").unwrap();
        assert!(req.name.is_none());
    }
}

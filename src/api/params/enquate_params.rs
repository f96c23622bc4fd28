use serde::Deserialize;

/// Stored in place of a form field the client did not send.
pub const PLACEHOLDER: &str = "-";

/// Raw `POST /enquates` form body; both fields may be absent.
#[derive(Deserialize, Debug, Default)]
pub struct EnquateForm {
    pub topic: Option<String>,
    pub content: Option<String>,
}

#[derive(Debug, PartialEq, Eq)]
pub struct EnquateParams {
    pub topic: String,
    pub content: String,
}

impl EnquateParams {
    pub fn from_form(form: EnquateForm) -> Self {
        EnquateParams {
            topic: form.topic.unwrap_or_else(|| PLACEHOLDER.to_string()),
            content: form.content.unwrap_or_else(|| PLACEHOLDER.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn present_fields_are_kept_verbatim() {
        let params = EnquateParams::from_form(EnquateForm {
            topic: Some("colors".to_string()),
            content: Some("red\nblue".to_string()),
        });
        assert_eq!(params.topic, "colors");
        assert_eq!(params.content, "red\nblue");
    }

    #[test]
    fn missing_fields_become_placeholder() {
        let params = EnquateParams::from_form(EnquateForm::default());
        assert_eq!(params.topic, PLACEHOLDER);
        assert_eq!(params.content, PLACEHOLDER);

        let params = EnquateParams::from_form(EnquateForm {
            topic: None,
            content: Some("text".to_string()),
        });
        assert_eq!(params.topic, "-");
        assert_eq!(params.content, "text");
    }

    #[test]
    fn empty_field_is_not_missing() {
        let params = EnquateParams::from_form(EnquateForm {
            topic: Some(String::new()),
            content: None,
        });
        assert_eq!(params.topic, "");
        assert_eq!(params.content, "-");
    }
}

use poem::{
    web::{Form, Multipart},
    FromRequest, Request, RequestBody, Result,
};

use crate::api::params::enquate_params::EnquateForm;

// Reads urlencoded and multipart bodies; any other body, or none, is an
// empty form so every field falls back to the placeholder.
impl<'a> FromRequest<'a> for EnquateForm {
    async fn from_request(req: &'a Request, body: &mut RequestBody) -> Result<Self> {
        let content_type = req.content_type().unwrap_or_default().to_ascii_lowercase();

        if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(form) = Form::<EnquateForm>::from_request(req, body).await?;
            return Ok(form);
        }

        if content_type.starts_with("multipart/form-data") {
            let multipart = Multipart::from_request(req, body).await?;
            return Ok(EnquateForm::from_multipart(multipart).await);
        }

        Ok(EnquateForm::default())
    }
}

impl EnquateForm {
    async fn from_multipart(mut multipart: Multipart) -> EnquateForm {
        let mut form = EnquateForm::default();

        while let Ok(Some(field)) = multipart.next_field().await {
            let name = field.name().map(str::to_string);

            match name.as_deref() {
                Some("topic") => form.topic = field.text().await.ok(),
                Some("content") => form.content = field.text().await.ok(),
                _ => continue,
            }
        }

        form
    }
}

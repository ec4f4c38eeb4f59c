//! Email template traits for Askama integration

use super::EmailError;

/// Trait for email templates
///
/// Returns a tuple of `(html, text)` bodies where either can be `None`.
pub trait EmailTemplate {
    /// Render the email template
    ///
    /// # Errors
    ///
    /// Returns `EmailError::TemplateError` if the template fails to render
    fn render_email(&self) -> Result<(Option<String>, Option<String>), EmailError>;
}

/// Single-template emails
///
/// The Askama template is the HTML body. Override [`render_text`] to add a
/// plain text alternative.
///
/// [`render_text`]: SimpleEmailTemplate::render_text
pub trait SimpleEmailTemplate: askama::Template {
    /// Render the template as HTML
    ///
    /// # Errors
    ///
    /// Returns `EmailError::TemplateError` if the template fails to render
    fn render_html(&self) -> Result<String, EmailError> {
        Ok(self.render()?)
    }

    /// Render a plain text version, `None` by default
    ///
    /// # Errors
    ///
    /// Returns `EmailError::TemplateError` if the template fails to render
    fn render_text(&self) -> Result<Option<String>, EmailError> {
        Ok(None)
    }
}

impl<T: SimpleEmailTemplate> EmailTemplate for T {
    fn render_email(&self) -> Result<(Option<String>, Option<String>), EmailError> {
        let html = Some(self.render_html()?);
        let text = self.render_text()?;
        Ok((html, text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use askama::Template;

    #[derive(Template)]
    #[template(source = "<p>{{ name }} asked about {{ program }}</p>", ext = "html")]
    struct InquiryTemplate {
        name: String,
        program: String,
    }

    impl SimpleEmailTemplate for InquiryTemplate {}

    #[test]
    fn test_html_only_template() {
        let template = InquiryTemplate {
            name: "Jane".to_string(),
            program: "Speech therapy".to_string(),
        };

        let (html, text) = template.render_email().unwrap();

        assert_eq!(html.unwrap(), "<p>Jane asked about Speech therapy</p>");
        assert!(text.is_none());
    }

    #[test]
    fn test_template_escapes_user_input() {
        let template = InquiryTemplate {
            name: "<script>alert(1)</script>".to_string(),
            program: "Art & Music".to_string(),
        };

        let (html, _) = template.render_email().unwrap();
        let html = html.unwrap();

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("Art &amp; Music"));
    }

    #[derive(Template)]
    #[template(source = "<h1>Thank you, {{ name }}!</h1>", ext = "html")]
    struct ThankYouTemplate {
        name: String,
    }

    impl SimpleEmailTemplate for ThankYouTemplate {
        fn render_text(&self) -> Result<Option<String>, EmailError> {
            Ok(Some(format!("Thank you, {}!", self.name)))
        }
    }

    #[test]
    fn test_template_with_text_alternative() {
        let template = ThankYouTemplate {
            name: "Omar".to_string(),
        };

        let (html, text) = template.render_email().unwrap();

        assert_eq!(html.unwrap(), "<h1>Thank you, Omar!</h1>");
        assert_eq!(text.unwrap(), "Thank you, Omar!");
    }
}

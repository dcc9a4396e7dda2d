use crate::domain::ContactSubmission;

/// The email the studio receives for every genuine inquiry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InquiryNotification {
    pub subject: String,
    pub text: String,
    pub html: String,
}

impl InquiryNotification {
    pub fn compose(submission: &ContactSubmission) -> Self {
        let subject = match submission.package {
            Some(package) => format!("New inquiry — {} — {}", package, submission.name),
            None => format!("New inquiry — {}", submission.name),
        };

        let mut lines = vec![
            format!("Name: {}", submission.name),
            format!("Email: {}", submission.email),
        ];
        if let Some(company) = &submission.company {
            lines.push(format!("Company: {company}"));
        }
        if let Some(package) = submission.package {
            lines.push(format!("Package: {package}"));
        }
        lines.push("Message:".to_string());
        lines.push(submission.message.as_ref().to_string());

        let text = lines.join("\n");
        // Every line carries user input, so every line is escaped before it is wrapped.
        let html = lines
            .iter()
            .map(|l| {
                format!(
                    r#"<p style="margin:0 0 8px">{}</p>"#,
                    htmlescape::encode_minimal(l)
                )
            })
            .collect::<String>();

        Self {
            subject,
            text,
            html,
        }
    }
}

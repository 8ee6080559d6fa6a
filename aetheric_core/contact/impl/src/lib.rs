use std::sync::Arc;

use aetheric_core_contact_contracts::ContactService;
use aetheric_email_contracts::{ContentType, Email, EmailService};
use aetheric_models::{
    email_address::{EmailAddress, EmailAddressWithName},
    inquiry::ContactInquiry,
};
use aetheric_templates_contracts::{InquiryAlertTemplate, InquiryReceivedTemplate, TemplateService};
use tracing::warn;

aetheric_di::build! {
    #[derive(Debug, Clone)]
    pub struct ContactServiceImpl<Email, Template> {
        email: Email,
        template: Template,
        config: ContactServiceConfig,
    }
}

#[derive(Debug, Clone)]
pub struct ContactServiceConfig {
    pub admin_email: Arc<EmailAddressWithName>,
}

impl<EmailS, TemplateS> ContactService for ContactServiceImpl<EmailS, TemplateS>
where
    EmailS: EmailService,
    TemplateS: TemplateService,
{
    async fn submit_inquiry(&self, inquiry: ContactInquiry) -> anyhow::Result<()> {
        // The inquiry email has been validated against a permissive pattern,
        // so it is not guaranteed to be a routable address.
        let submitter = match inquiry.author.email.parse::<EmailAddress>() {
            Ok(address) => Some(address.with_name((*inquiry.author.name).clone())),
            Err(err) => {
                warn!(
                    "Failed to parse submitter address {:?}, skipping acknowledgment: {err}",
                    *inquiry.author.email
                );
                None
            }
        };

        let alert = Email {
            recipient: (*self.config.admin_email).clone(),
            subject: format!("New AI Consulting Inquiry from {}", *inquiry.author.name),
            body: self.template.render(&InquiryAlertTemplate {
                name: (*inquiry.author.name).clone(),
                email: (*inquiry.author.email).clone(),
                company: inquiry.company.as_deref().cloned(),
                service: inquiry.service.label().to_owned(),
                message_lines: inquiry.message.split('\n').map(str::to_owned).collect(),
            })?,
            content_type: ContentType::Html,
            reply_to: submitter.clone(),
        };

        let acknowledgment = match &submitter {
            Some(recipient) => Some(Email {
                recipient: recipient.clone(),
                subject: "Thank You for Your Inquiry - Aetheric AI Consulting".into(),
                body: self.template.render(&InquiryReceivedTemplate {
                    name: (*inquiry.author.name).clone(),
                    service: inquiry.service.label().to_owned(),
                })?,
                content_type: ContentType::Html,
                reply_to: None,
            }),
            None => None,
        };

        futures::join!(self.try_send("inquiry alert", alert), async {
            if let Some(acknowledgment) = acknowledgment {
                self.try_send("acknowledgment", acknowledgment).await;
            }
        });

        Ok(())
    }
}

impl<EmailS, TemplateS> ContactServiceImpl<EmailS, TemplateS>
where
    EmailS: EmailService,
{
    async fn try_send(&self, kind: &str, email: Email) {
        match self.email.send(email).await {
            Ok(true) => {}
            Ok(false) => warn!("The {kind} email was not accepted by the SMTP server"),
            Err(err) => warn!("Failed to send the {kind} email: {err}"),
        }
    }
}

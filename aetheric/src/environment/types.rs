use aetheric_core_contact_impl::ContactServiceImpl;
use aetheric_email_impl::EmailServiceImpl;
use aetheric_templates_impl::TemplateServiceImpl;

// API
pub type RestServer = aetheric_api_rest::RestServer<Contact>;

// Email
pub type Email = EmailServiceImpl;

// Template
pub type Template = TemplateServiceImpl;

// Core
pub type Contact = ContactServiceImpl<Email, Template>;

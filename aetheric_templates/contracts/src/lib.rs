use serde::Serialize;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait TemplateService: Send + Sync + 'static {
    /// Render the given template.
    fn render<T: Template + 'static>(&self, template: &T) -> anyhow::Result<String>;
}

#[cfg(feature = "mock")]
impl MockTemplateService {
    pub fn with_render<T: Template + Send + PartialEq + std::fmt::Debug + 'static>(
        mut self,
        template: T,
        result: String,
    ) -> Self {
        self.expect_render()
            .once()
            .with(mockall::predicate::eq(template))
            .return_once(|_| Ok(result));
        self
    }
}

pub trait Template: Serialize {
    /// Registered name of the template. Must keep the `.html` suffix, which
    /// enables Tera's autoescaping for all interpolated values.
    const NAME: &'static str;
    const TEMPLATE: &'static str;
}

pub const BASE_TEMPLATE: &str = include_str!("../templates/base.html");

macro_rules! templates {
    ($( $ident:ident ( $path:literal ), )* ) => {
        $(
            impl Template for $ident {
                const NAME: &'static str = $path;
                const TEMPLATE: &'static str = include_str!(concat!("../templates/", $path));
            }
        )*

        pub const TEMPLATES: &[(&str, &str)] = &[
            $( ($ident::NAME, $ident::TEMPLATE) ),*
        ];
    };
}

templates! {
    InquiryAlertTemplate("inquiry_alert.html"),
    InquiryReceivedTemplate("inquiry_received.html"),
}

/// Notification sent to the operator, listing all submitted fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InquiryAlertTemplate {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub service: String,
    pub message_lines: Vec<String>,
}

/// Acknowledgment sent back to the submitter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InquiryReceivedTemplate {
    pub name: String,
    pub service: String,
}

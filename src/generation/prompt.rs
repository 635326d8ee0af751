use tera::{Context, Tera};

pub(crate) const DEFAULT_SYSTEM_PROMPT: &str = "You are an expert creative assistant. \
Your task is to generate content based on the user's request. \
The desired style is: {{ style }}. \
Format your response with clear paragraph breaks.";

const TEMPLATE_NAME: &str = "system_prompt";

/// System instruction template. The requested style is available as `style`.
pub(crate) struct SystemPrompt {
    tera: Tera,
}

impl SystemPrompt {
    pub(crate) fn new(template: &str) -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![]);
        tera.add_raw_template(TEMPLATE_NAME, template)?;
        Ok(Self { tera })
    }

    pub(crate) fn render(&self, style: &str) -> Result<String, tera::Error> {
        let mut context = Context::new();
        context.insert("style", style);
        self.tera.render(TEMPLATE_NAME, &context)
    }
}

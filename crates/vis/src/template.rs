use serde::Serialize;
use tinytemplate::TinyTemplate;

use crate::error::Result;

const PAGE_TEMPLATE_NAME: &str = "page";

pub(crate) struct TemplateEngine {
    template: TinyTemplate<'static>,
}

impl TemplateEngine {
    pub fn new() -> Result<TemplateEngine> {
        let mut template = TinyTemplate::new();
        template.add_template(PAGE_TEMPLATE_NAME, include_str!("./template/page.html.tt"))?;

        Ok(Self { template })
    }

    pub fn render_page<C>(&self, context: &C) -> Result<String>
    where
        C: Serialize,
    {
        let text = self.template.render(PAGE_TEMPLATE_NAME, context)?;
        Ok(text)
    }
}

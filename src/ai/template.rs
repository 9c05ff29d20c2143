use std::collections::BTreeMap;

use anyhow::{anyhow, Result};
use tracing::trace;

/// A prompt with `{name}` placeholders.
///
/// Only the variables listed in `input_variables` are substituted, and each of
/// them must be present in the rendering context. Any other braces in the
/// template are left untouched.
#[derive(Debug, Clone, Copy)]
pub struct PromptTemplate {
    pub input_variables: &'static [&'static str],
    pub template: &'static str,
}

impl PromptTemplate {
    pub const fn new(input_variables: &'static [&'static str], template: &'static str) -> Self {
        Self {
            input_variables,
            template,
        }
    }

    /// Substitute declared variables in a single pass over the template.
    ///
    /// Inserted values are copied verbatim and never scanned for placeholders.
    pub fn render(&self, vars: &BTreeMap<String, String>) -> Result<String> {
        if let Some(missing) = self
            .input_variables
            .iter()
            .find(|name| !vars.contains_key(**name))
        {
            return Err(anyhow!("missing template variable `{missing}`"));
        }

        let mut rendered = String::with_capacity(self.template.len());
        let mut rest = self.template;
        while let Some(open) = rest.find('{') {
            rendered.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            let placeholder = after.find('}').and_then(|close| {
                let name = &after[..close];
                self.input_variables
                    .iter()
                    .any(|declared| *declared == name)
                    .then(|| vars.get(name).map(|value| (close, value)))
                    .flatten()
            });
            match placeholder {
                Some((close, value)) => {
                    rendered.push_str(value);
                    rest = &after[close + 1..];
                }
                None => {
                    rendered.push('{');
                    rest = after;
                }
            }
        }
        rendered.push_str(rest);

        trace!(len = rendered.len(), "rendered prompt");
        Ok(rendered)
    }
}

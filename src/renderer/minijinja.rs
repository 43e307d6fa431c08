use super::filters;
use crate::environment;
use crate::error::{Error, Result};
use crate::renderer::interface::TemplateRenderer;
use crate::variables::Variables;
use log::debug;
use minijinja::{path_loader, AutoEscape, Environment, ErrorKind};
use std::path::{Path, PathBuf};

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    /// Environment resolving named templates from `template_dir`
    file_env: Environment<'static>,
    /// Loader-less environment for raw template strings
    string_env: Environment<'static>,
    template_dir: PathBuf,
}

impl MiniJinjaRenderer {
    /// Creates a renderer resolving templates under `template_dir`.
    pub fn new<P: Into<PathBuf>>(template_dir: P) -> Self {
        let template_dir = template_dir.into();

        let mut file_env = base_environment();
        file_env.set_trim_blocks(true);
        file_env.set_lstrip_blocks(true);
        file_env.set_keep_trailing_newline(true);
        file_env.set_loader(path_loader(template_dir.clone()));

        debug!("Template engine rooted at '{}'", template_dir.display());
        Self { file_env, string_env: base_environment(), template_dir }
    }

    /// Creates a renderer for `template_dir`, or for the bundled templates of
    /// `env` when no directory is given.
    pub fn with_environment(
        env: &dyn environment::Environment,
        template_dir: Option<PathBuf>,
    ) -> Self {
        Self::new(template_dir.unwrap_or_else(|| env.bundled_template_dir()))
    }
}

fn base_environment() -> Environment<'static> {
    let mut env = Environment::new();
    env.set_auto_escape_callback(|_| AutoEscape::None);
    filters::register(&mut env);
    env
}

impl TemplateRenderer for MiniJinjaRenderer {
    fn template_dir(&self) -> &Path {
        &self.template_dir
    }

    fn render_template(&self, name: &str, variables: &Variables) -> Result<String> {
        let template = self.file_env.get_template(name).map_err(|e| match e.kind() {
            ErrorKind::TemplateNotFound => Error::TemplateNotFound {
                name: name.to_string(),
                template_dir: self.template_dir.display().to_string(),
            },
            _ => Error::Render(e),
        })?;
        debug!("Rendering '{}' with {} variables", name, variables.len());
        Ok(template.render(variables)?)
    }

    fn render_string(&self, template: &str, variables: &Variables) -> Result<String> {
        Ok(self.string_env.render_str(template, variables)?)
    }
}

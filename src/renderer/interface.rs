use crate::error::Result;
use crate::ioutils::{list_files, write_file};
use crate::variables::Variables;
use log::info;
use std::path::Path;

/// Trait for template rendering engines bound to a single template directory.
pub trait TemplateRenderer {
    /// Directory that named templates are resolved against.
    fn template_dir(&self) -> &Path;

    /// Renders the template `name` from the template directory.
    ///
    /// # Arguments
    /// * `name` - Template path relative to the template directory
    /// * `variables` - Values substituted into the template
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template
    ///
    /// # Errors
    /// * `Error::TemplateNotFound` if the engine cannot resolve `name`
    fn render_template(&self, name: &str, variables: &Variables) -> Result<String>;

    /// Renders `template` as a standalone template. It cannot include or
    /// extend files from the template directory.
    ///
    /// # Arguments
    /// * `template` - Template source
    /// * `variables` - Values substituted into the template
    fn render_string(&self, template: &str, variables: &Variables) -> Result<String>;

    /// Renders `name` and writes the result to `output_path`, overwriting
    /// any existing file. Nothing is written when rendering fails.
    ///
    /// # Arguments
    /// * `name` - Template path relative to the template directory
    /// * `output_path` - Destination file
    /// * `variables` - Values substituted into the template
    /// * `create_dirs` - Create missing parent directories of `output_path`
    fn render_to_file(
        &self,
        name: &str,
        output_path: &Path,
        variables: &Variables,
        create_dirs: bool,
    ) -> Result<()> {
        let content = self.render_template(name, variables)?;
        write_file(&content, output_path, create_dirs)?;
        info!("Rendered '{}' to '{}'", name, output_path.display());
        Ok(())
    }

    /// Every regular file below the template directory, as sorted relative names.
    fn list_templates(&self) -> Vec<String> {
        list_files(self.template_dir(), false)
    }

    /// Plain filesystem check for `template_dir/name`. This does not apply the
    /// engine's own name resolution, so it may disagree with
    /// [`TemplateRenderer::render_template`] for directories or names the
    /// loader refuses.
    fn template_exists(&self, name: &str) -> bool {
        self.template_dir().join(name).exists()
    }
}

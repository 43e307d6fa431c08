use crate::{
    cli::{prompt::confirm, Commands, GenerateArgs, InitArgs, ListArgs, RenderArgs, ShowArgs},
    config::TemplateConfig,
    environment::{Environment, SystemEnvironment},
    error::{Error, Result},
    ioutils::read_to_string,
    locator::TemplateLocator,
    renderer::{MiniJinjaRenderer, TemplateRenderer},
    variables::{merge_variables, Variables},
};
use log::info;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Executes one CLI command against an environment, writing user-facing
/// output to `out`.
pub struct Runner<'a, W: Write> {
    env: &'a dyn Environment,
    out: W,
}

impl<'a, W: Write> Runner<'a, W> {
    pub fn new(env: &'a dyn Environment, out: W) -> Self {
        Self { env, out }
    }

    /// Consumes the runner, handing back the output sink.
    pub fn into_output(self) -> W {
        self.out
    }

    pub fn run(&mut self, command: Commands) -> Result<()> {
        match command {
            Commands::Generate(args) => self.generate(args),
            Commands::List(args) => self.list(args),
            Commands::Init(args) => self.init(args),
            Commands::Show(args) => self.show(args),
            Commands::Render(args) => self.render(args),
        }
    }

    /// Renders a named template to a file
    fn generate(&mut self, args: GenerateArgs) -> Result<()> {
        let variables = collect_variables(args.config.as_deref(), &args.vars)?;
        let engine = MiniJinjaRenderer::with_environment(self.env, args.template_dir);

        engine.render_to_file(&args.template, &args.output, &variables, true)?;

        writeln!(self.out, "✓ Successfully generated: {}", args.output.display())?;
        Ok(())
    }

    /// Lists one template directory, or every search path when none is given
    fn list(&mut self, args: ListArgs) -> Result<()> {
        if let Some(template_dir) = args.template_dir {
            let engine = MiniJinjaRenderer::new(template_dir.clone());
            let templates = engine.list_templates();
            writeln!(self.out, "\nTemplates in {}:", template_dir.display())?;
            if templates.is_empty() {
                writeln!(self.out, "No templates found.")?;
            }
            for template in templates {
                writeln!(self.out, "  - {template}")?;
            }
            return Ok(());
        }

        let locator = TemplateLocator::new(self.env, Vec::<PathBuf>::new());
        let all_templates = locator.list_all_templates();
        if all_templates.is_empty() {
            writeln!(self.out, "No templates found.")?;
            return Ok(());
        }

        for (path, templates) in all_templates {
            writeln!(self.out, "\nTemplates in {}:", path.display())?;
            for template in templates {
                writeln!(self.out, "  - {template}")?;
            }
        }
        Ok(())
    }

    /// Writes a starter configuration file
    fn init(&mut self, args: InitArgs) -> Result<()> {
        let output_file = args.output_file;

        if output_file.exists() {
            let overwrite = confirm(
                args.force,
                format!("{} already exists. Overwrite?", output_file.display()),
            )?;
            if !overwrite {
                writeln!(self.out, "Aborted.")?;
                return Ok(());
            }
        }

        TemplateConfig::create_default(&output_file)?;
        writeln!(self.out, "✓ Created configuration file: {}", output_file.display())?;
        writeln!(self.out, "\nEdit this file to customize your template variables.")?;
        Ok(())
    }

    /// Prints the content of a template found on the search paths
    fn show(&mut self, args: ShowArgs) -> Result<()> {
        let mut locator = TemplateLocator::new(self.env, Vec::<PathBuf>::new());
        if let Some(template_dir) = args.template_dir {
            locator.add_search_path(template_dir);
        }

        let Some(template) = locator.get_template_info(&args.template) else {
            return Err(Error::TemplateNotFound {
                name: args.template,
                template_dir: describe_search_paths(locator.search_paths()),
            });
        };
        info!(
            "Template '{}' at '{}' ({} bytes, modified {})",
            template.name,
            template.path.display(),
            template.size,
            template.modified.format("%Y-%m-%d %H:%M:%S")
        );

        let content = read_to_string(&template.path)?;
        writeln!(self.out, "\n=== {} ===\n", args.template)?;
        writeln!(self.out, "{content}")?;
        Ok(())
    }

    /// Renders a template string and prints the result
    fn render(&mut self, args: RenderArgs) -> Result<()> {
        let variables = collect_variables(args.config.as_deref(), &args.vars)?;
        let engine = MiniJinjaRenderer::with_environment(self.env, None);

        let result = engine.render_string(&args.template_string, &variables)?;

        writeln!(self.out, "{result}")?;
        Ok(())
    }
}

fn collect_variables(config: Option<&Path>, overrides: &[String]) -> Result<Variables> {
    let config = config.map(TemplateConfig::from_file).transpose()?;
    merge_variables(config.as_ref(), overrides)
}

fn describe_search_paths(paths: &[PathBuf]) -> String {
    paths.iter().map(|p| p.display().to_string()).collect::<Vec<_>>().join(", ")
}

/// Main entry point for CLI execution
pub fn run(command: Commands) -> Result<()> {
    let stdout = std::io::stdout();
    let mut runner = Runner::new(&SystemEnvironment, stdout.lock());
    runner.run(command)
}

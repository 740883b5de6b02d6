//! Template environment for the gamesite pages.
//!
//! Templates are embedded into the binary at compile time and compiled
//! once into a shared minijinja `Environment`. `render` is the only entry
//! point handlers need.

use minijinja::Environment;
use once_cell::sync::Lazy;
use thiserror::Error;

/// Shared template environment, compiled on first use
static ENV: Lazy<Environment<'static>> = Lazy::new(|| {
    let mut env = Environment::new();
    env.add_template("index.html", include_str!("../templates/index.html"))
        .expect("embedded index.html template is valid");
    env
});

/// Failure while looking up or rendering a template
#[derive(Debug, Error)]
#[error("template rendering failed: {0}")]
pub struct TemplateError(#[from] minijinja::Error);

/// Render the named template with the given context
pub fn render(name: &str, ctx: minijinja::Value) -> Result<String, TemplateError> {
    let template = ENV.get_template(name)?;
    Ok(template.render(ctx)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use minijinja::context;

    #[test]
    fn index_renders_with_title() {
        let html = render("index.html", context! { title => "Home" }).unwrap();
        assert!(html.contains("<title>Home</title>"));
        assert!(html.contains("Home"));
    }

    #[test]
    fn unknown_template_is_an_error() {
        let err = render("missing.html", context! {}).unwrap_err();
        assert!(err.to_string().contains("template"));
    }
}

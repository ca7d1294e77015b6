//! Rendering a [`ResolverDefinition`] into resolver source.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::debug;

use super::definition::ResolverDefinition;
use super::flags::validate_name;
use crate::fs::{OutputPaths, OutputSink};

/// Renders the resolver function and its default export.
///
/// # Examples
///
/// ```
/// use graphql_alchemist::core::{ResolverDefinition, render};
///
/// let source = render(&ResolverDefinition::named("greet"));
/// assert!(source.starts_with("function greet (_parent, args, context, _info) {"));
/// ```
#[must_use]
pub fn render(definition: &ResolverDefinition) -> String {
    let declaration = if definition.is_async {
        "async function"
    } else {
        "function"
    };
    let name = &definition.name;
    format!(
        "{declaration} {name} ({parent}, args, context, {info}) {{\n  // Your code goes here\n}}\n\nexport default {name}\n",
        parent = definition.parent_param(),
        info = definition.info_param(),
    )
}

/// Writes rendered resolvers under an [`OutputPaths`] base.
#[derive(Debug, Clone)]
pub struct CodeEmitter {
    paths: OutputPaths,
}

impl CodeEmitter {
    /// Creates an emitter writing below the given paths.
    #[must_use]
    pub const fn new(paths: OutputPaths) -> Self {
        Self { paths }
    }

    /// Renders `definition`, hands it to `sink`, and reports to `out`.
    ///
    /// The report is the `<kind> <name>` summary, a blank line, and the path
    /// that was written. Returns that path.
    ///
    /// # Errors
    ///
    /// Fails with [`ParseError::MissingName`] or [`ParseError::InvalidName`]
    /// if the name is empty or not a plain file name, before anything is
    /// written. Otherwise fails if the sink or `out` cannot be written; the
    /// report is only printed once the sink has accepted the file.
    ///
    /// [`ParseError::MissingName`]: crate::error::ParseError::MissingName
    /// [`ParseError::InvalidName`]: crate::error::ParseError::InvalidName
    pub fn emit(
        &self,
        definition: &ResolverDefinition,
        sink: &mut dyn OutputSink,
        out: &mut dyn Write,
    ) -> Result<PathBuf> {
        validate_name(&definition.name)?;

        let path = self.paths.resolver_file(&definition.name);
        let source = render(definition);
        debug!(path = %path.display(), kind = %definition.kind, "emitting resolver");

        sink.write(&path, &source)?;
        writeln!(out, "{}\n\n{}", definition.summary(), path.display())
            .context("Failed to write summary")?;

        Ok(path)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::core::{FieldSpec, Handler};
    use crate::error::ParseError;
    use crate::fs::MemorySink;
    use std::path::Path;

    /// A sink whose every write fails.
    struct FailingSink;

    impl OutputSink for FailingSink {
        fn write(&mut self, _path: &Path, _contents: &str) -> Result<()> {
            anyhow::bail!("disk full")
        }
    }

    fn emitter() -> CodeEmitter {
        CodeEmitter::new(OutputPaths::new(Path::new("/api")))
    }

    #[test]
    fn render_plain_resolver() {
        let source = render(&ResolverDefinition::named("greet"));
        assert_eq!(
            source,
            "function greet (_parent, args, context, _info) {\n  // Your code goes here\n}\n\nexport default greet\n"
        );
    }

    #[test]
    fn render_async_with_parent_and_info() {
        let mut def = ResolverDefinition::named("user");
        def.apply(Handler::Async);
        def.apply(Handler::Parent);
        def.apply(Handler::Info);

        let source = render(&def);

        assert!(source.starts_with("async function user (parent, args, context, info) {\n"));
        assert!(source.ends_with("export default user\n"));
    }

    #[test]
    fn render_parent_only() {
        let mut def = ResolverDefinition::named("posts");
        def.apply(Handler::Parent);
        assert!(render(&def).starts_with("function posts (parent, args, context, _info)"));
    }

    /// Kind and arguments do not change the function shape.
    #[test]
    fn render_ignores_kind_and_arguments() {
        let mut def = ResolverDefinition::named("greet");
        def.apply(Handler::Subscription);
        def.arguments.push(FieldSpec::parse("foo:String"));
        assert_eq!(render(&def), render(&ResolverDefinition::named("greet")));
    }

    #[test]
    fn emit_writes_file_and_reports() {
        let mut def = ResolverDefinition::named("createUser");
        def.apply(Handler::Mutation);
        let mut sink = MemorySink::default();
        let mut out = Vec::new();

        let path = emitter().emit(&def, &mut sink, &mut out).unwrap();

        assert_eq!(path, Path::new("/api/src/resolver/createUser.js"));
        assert_eq!(sink.writes.len(), 1);
        assert_eq!(sink.writes[0].0, path);
        assert_eq!(sink.writes[0].1, render(&def));
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Mutation createUser\n\n/api/src/resolver/createUser.js\n"
        );
    }

    #[test]
    fn emit_without_name_writes_nothing() {
        let mut sink = MemorySink::default();
        let mut out = Vec::new();

        let err = emitter()
            .emit(&ResolverDefinition::default(), &mut sink, &mut out)
            .unwrap_err();

        assert_eq!(
            err.downcast_ref::<ParseError>(),
            Some(&ParseError::MissingName)
        );
        assert!(sink.writes.is_empty());
        assert!(out.is_empty());
    }

    #[test]
    fn emit_rejects_path_like_name() {
        let mut sink = MemorySink::default();
        let mut out = Vec::new();

        let err = emitter()
            .emit(&ResolverDefinition::named("../../escape"), &mut sink, &mut out)
            .unwrap_err();

        assert_eq!(
            err.downcast_ref::<ParseError>(),
            Some(&ParseError::InvalidName("../../escape".to_string()))
        );
        assert!(sink.writes.is_empty());
        assert!(out.is_empty());
    }

    #[test]
    fn failed_write_reports_nothing() {
        let mut out = Vec::new();

        let err = emitter()
            .emit(&ResolverDefinition::named("greet"), &mut FailingSink, &mut out)
            .unwrap_err();

        assert_eq!(err.to_string(), "disk full");
        assert!(out.is_empty());
    }

    #[test]
    fn emit_to_disk() {
        let temp = tempfile::TempDir::new().unwrap();
        let emitter = CodeEmitter::new(OutputPaths::new(temp.path()));
        let mut out = Vec::new();

        let path = emitter
            .emit(
                &ResolverDefinition::named("greet"),
                &mut crate::fs::FileSink,
                &mut out,
            )
            .unwrap();

        assert_eq!(path, temp.path().join("src/resolver/greet.js"));
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            render(&ResolverDefinition::named("greet"))
        );
    }
}

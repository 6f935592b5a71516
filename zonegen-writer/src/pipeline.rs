//! Generation pipeline: load → render → write.
//!
//! Rendering finishes in memory before the output path is touched, so a
//! failing template never leaves a truncated or half-written file behind.

use std::path::PathBuf;

use zonegen_core::{loader, GenerateConfig};
use zonegen_renderer::{GeneratorKind, TemplateContext, TemplateEngine};

use crate::error::GenerateError;
use crate::writer::{atomic_write, WriteResult};

/// Decode the input, load `kind`'s template and render it.
///
/// Returns `(output_path, rendered_content)`. No files are written.
pub fn render_output(
    config: &GenerateConfig,
    kind: GeneratorKind,
) -> Result<(PathBuf, String), GenerateError> {
    let dict = loader::load_zone_dict(&config.input_path())?;
    let engine = TemplateEngine::new(&config.template_dir(), kind)?;
    let ctx = TemplateContext::new(kind, &dict)?;
    Ok(engine.render(&ctx, &config.output_dir)?)
}

/// Run one generator end to end.
pub fn generate(
    config: &GenerateConfig,
    kind: GeneratorKind,
    dry_run: bool,
) -> Result<WriteResult, GenerateError> {
    let (path, content) = render_output(config, kind)?;
    atomic_write(&path, &content, dry_run)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use filetime::FileTime;
    use tempfile::TempDir;
    use zonegen_core::ZoneError;
    use zonegen_renderer::RenderError;

    use super::*;

    const TEMPLATE: &str =
        "{% for zone, conf in ZoneDict %}{% if zone %}{{ zone }}:{{ conf.minthermalrpm }}\n{% endif %}{% endfor %}";

    struct Fixture {
        base: TempDir,
        out: TempDir,
    }

    impl Fixture {
        fn new(yaml: &str, template: &str) -> Self {
            let base = TempDir::new().expect("base");
            let out = TempDir::new().expect("out");
            fs::write(base.path().join("example.yaml"), yaml).expect("yaml");
            fs::write(base.path().join("writezone.cpp.tera"), template).expect("template");
            Fixture { base, out }
        }

        fn config(&self) -> GenerateConfig {
            GenerateConfig::new(self.base.path()).with_output_dir(self.out.path())
        }

        fn output(&self) -> PathBuf {
            self.out.path().join("zoneinfo-gen.cpp")
        }
    }

    #[test]
    fn generate_writes_zoneinfo_into_output_dir() {
        let fx = Fixture::new("1:\n  minthermalrpm: 3000\n", TEMPLATE);
        let result = generate(&fx.config(), GeneratorKind::ZoneInfo, false).expect("generate");

        assert_eq!(result, WriteResult::Written { path: fx.output() });
        assert_eq!(fs::read_to_string(fx.output()).unwrap(), "1:3000\n");
    }

    #[test]
    fn second_run_is_byte_identical_and_untouched() {
        let fx = Fixture::new("1:\n  minthermalrpm: 3000\n2:\n  minthermalrpm: 4000\n", TEMPLATE);
        generate(&fx.config(), GeneratorKind::ZoneInfo, false).expect("first");
        let first = fs::read(fx.output()).unwrap();

        let old = FileTime::from_unix_time(1_000_000_000, 0);
        filetime::set_file_mtime(fx.output(), old).unwrap();

        let result = generate(&fx.config(), GeneratorKind::ZoneInfo, false).expect("second");
        assert!(matches!(result, WriteResult::Unchanged { .. }));
        assert_eq!(fs::read(fx.output()).unwrap(), first);
        let mtime = FileTime::from_last_modification_time(&fs::metadata(fx.output()).unwrap());
        assert_eq!(mtime, old, "unchanged output must not be rewritten");
    }

    #[test]
    fn input_resolves_against_base_dir_not_cwd() {
        let fx = Fixture::new("1:\n  minthermalrpm: 1\n", TEMPLATE);
        fs::create_dir_all(fx.base.path().join("zones")).unwrap();
        fs::write(
            fx.base.path().join("zones").join("board.yaml"),
            "9:\n  minthermalrpm: 900\n",
        )
        .unwrap();

        let config = fx.config().with_zoneinfo_yaml("zones/board.yaml");
        generate(&config, GeneratorKind::ZoneInfo, false).expect("generate");
        assert_eq!(fs::read_to_string(fx.output()).unwrap(), "9:900\n");
    }

    #[test]
    fn separate_template_dir_is_honoured() {
        let fx = Fixture::new("1:\n  minthermalrpm: 1\n", TEMPLATE);
        let templates = fx.base.path().join("templates");
        fs::create_dir_all(&templates).unwrap();
        fs::write(templates.join("writezone.cpp.tera"), "custom {{ ZoneDict | length }}").unwrap();

        let config = fx.config().with_template_dir("templates");
        generate(&config, GeneratorKind::ZoneInfo, false).expect("generate");
        assert_eq!(fs::read_to_string(fx.output()).unwrap(), "custom 1");
    }

    #[test]
    fn render_failure_leaves_previous_output_untouched() {
        let fx = Fixture::new("1:\n  failsafepercent: 75\n", TEMPLATE);
        fs::write(fx.output(), "previous generation").unwrap();

        let err = generate(&fx.config(), GeneratorKind::ZoneInfo, false).unwrap_err();
        assert!(matches!(err, GenerateError::Render(RenderError::Tera(_))));
        assert_eq!(fs::read_to_string(fx.output()).unwrap(), "previous generation");
    }

    #[test]
    fn render_failure_creates_no_output() {
        let fx = Fixture::new("1:\n  failsafepercent: 75\n", TEMPLATE);
        generate(&fx.config(), GeneratorKind::ZoneInfo, false).unwrap_err();
        assert!(fs::read_dir(fx.out.path()).unwrap().next().is_none());
    }

    #[test]
    fn malformed_yaml_is_a_zone_error() {
        let fx = Fixture::new("1: [broken\n", TEMPLATE);
        let err = generate(&fx.config(), GeneratorKind::ZoneInfo, false).unwrap_err();
        assert!(matches!(err, GenerateError::Zone(ZoneError::Parse { .. })));
        assert!(!fx.output().exists());
    }

    #[test]
    fn missing_template_is_a_render_error() {
        let fx = Fixture::new("{}\n", TEMPLATE);
        fs::remove_file(fx.base.path().join("writezone.cpp.tera")).unwrap();
        let err = generate(&fx.config(), GeneratorKind::ZoneInfo, false).unwrap_err();
        assert!(matches!(
            err,
            GenerateError::Render(RenderError::TemplateNotFound { .. })
        ));
    }

    #[test]
    fn dry_run_renders_but_writes_nothing() {
        let fx = Fixture::new("1:\n  minthermalrpm: 3000\n", TEMPLATE);
        let result = generate(&fx.config(), GeneratorKind::ZoneInfo, true).expect("dry run");
        assert_eq!(result, WriteResult::WouldWrite { path: fx.output() });
        assert!(!fx.output().exists());
    }

    #[test]
    fn non_mapping_input_generates_empty_output() {
        let fx = Fixture::new("- not\n- a\n- mapping\n", "[{{ ZoneDict | length }}]");
        generate(&fx.config(), GeneratorKind::ZoneInfo, false).expect("generate");
        assert_eq!(fs::read_to_string(fx.output()).unwrap(), "[0]");
    }
}

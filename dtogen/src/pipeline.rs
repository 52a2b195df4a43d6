//! Wiring config into the converter and the TypeScript generator.

use std::path::PathBuf;

use dtogen_codegen::{
    EntityPerClassOutputWriter, KebabCaseFileNameGenerator, OutputFile, OutputFilesProcessor,
    PrependAutogeneratedNotice, PrependText, SingleFileOutputWriter,
    TypeResolverChain,
};
use dtogen_codegen_typescript::{
    AppendCollectionResponseFileProcessor, COLLECTION_RESPONSE_TYPE, CamelCasePropertyNameGenerator,
    ClassNameTypeResolver, CollectionResponseTypeResolver, DateTimeTypeResolver,
    LiteralOverrideTypeResolver, OptionalPropertyNameGenerator, PropertyNameChain,
    GeneratorOptions, TypeScriptGenerator, TypeScriptImportGenerator,
    TypeScriptTypeResolver,
};
use dtogen_convert::{
    Conversion, ControllerVisitor, Converter, Diagnostic, DtoVisitor, MarkerFilter,
    ResourceOptions, ResourceVisitor, Severity,
};
use dtogen_syntax::{SourceFile, SourceUnit};
use eyre::{Context, Result, bail};
use tracing::{debug, warn};

use crate::config::{Config, WriterKind};

/// Expand the input globs in order. Matches of one pattern are sorted;
/// a path matched twice is kept at its first position.
pub fn input_files(config: &Config) -> Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = Vec::new();

    for pattern in config.input_patterns() {
        let matches = glob::glob(&pattern)
            .wrap_err_with(|| format!("invalid input pattern '{pattern}'"))?;
        let mut found: Vec<PathBuf> = matches
            .collect::<std::result::Result<_, _>>()
            .wrap_err_with(|| format!("failed to expand '{pattern}'"))?;
        found.sort();

        if found.is_empty() {
            warn!(%pattern, "input pattern matched no files");
        }
        for path in found {
            if !files.contains(&path) {
                files.push(path);
            }
        }
    }

    if files.is_empty() {
        bail!("no input files found");
    }
    debug!(count = files.len(), "resolved input files");
    Ok(files)
}

/// Parse every input file into a syntax tree.
pub fn load_units(paths: &[PathBuf]) -> dtogen_syntax::Result<Vec<SourceUnit>> {
    paths
        .iter()
        .map(|path| SourceFile::open(path).map(SourceFile::into_unit))
        .collect()
}

pub fn converter(config: &Config) -> Converter {
    let filter = &config.filter;

    let mut dtos = MarkerFilter::new();
    if let Some(marker) = &filter.dto {
        dtos = dtos.dto(marker);
    }
    let mut endpoints = MarkerFilter::new();
    if let Some(marker) = &filter.endpoint {
        endpoints = endpoints.endpoint(marker);
    }
    // Resources are classes, but they pass through the endpoint predicate
    let mut resources = MarkerFilter::new();
    if let Some(marker) = &filter.resource {
        resources = resources.endpoint(marker);
    }

    let collection_response = config
        .output
        .collection_response
        .then(|| COLLECTION_RESPONSE_TYPE.to_string());

    Converter::new()
        .visitor(DtoVisitor::with_filter(dtos))
        .visitor(ControllerVisitor::new().filter(endpoints))
        .visitor(
            ResourceVisitor::with_options(
                ResourceOptions::default().collection_response(collection_response),
            )
            .filter(resources),
        )
}

/// Normalize units with the configured filters.
pub fn convert(config: &Config, units: &[SourceUnit]) -> Result<Conversion> {
    converter(config)
        .convert(units)
        .wrap_err("failed to normalize source units")
}

/// Diagnostic messages split into warnings and infos.
pub fn diagnostic_messages(conversion: &Conversion) -> (Vec<String>, Vec<String>) {
    let mut warnings = Vec::new();
    let mut infos = Vec::new();

    for diag in conversion.diagnostics() {
        let msg = message(diag);
        match diag.severity {
            Severity::Warning => warnings.push(msg),
            Severity::Info => infos.push(msg),
        }
    }
    (warnings, infos)
}

fn message(diag: &Diagnostic) -> String {
    match &diag.location {
        Some(location) => format!("{}\n  --> {}", diag.message, location),
        None => diag.message.clone(),
    }
}

/// Date-time, literal overrides, collection response, class names.
fn resolver(config: &Config) -> TypeScriptTypeResolver {
    let ts = &config.typescript;
    let mut chain = TypeResolverChain::new();

    if ts.date_time {
        chain.push(DateTimeTypeResolver);
    }
    chain.push(LiteralOverrideTypeResolver::new(ts.overrides.clone()));
    if config.output.collection_response {
        chain.push(CollectionResponseTypeResolver::default());
    }
    chain.push(ClassNameTypeResolver);

    TypeScriptTypeResolver::new(chain)
}

fn processors(config: &Config) -> OutputFilesProcessor {
    let mut processors = OutputFilesProcessor::new();
    if config.output.collection_response {
        processors = processors.with(AppendCollectionResponseFileProcessor);
    }
    if let Some(banner) = &config.output.banner {
        processors = processors.with(PrependText::new(banner));
    }
    // Prepended last, so it ends up above the banner
    if config.output.notice {
        processors = processors.with(PrependAutogeneratedNotice::new("//"));
    }
    processors
}

fn property_names(config: &Config) -> PropertyNameChain {
    let mut chain = PropertyNameChain::new();
    if config.typescript.optional_defaults {
        chain = chain.with(OptionalPropertyNameGenerator);
    }
    if config.typescript.camel_case_properties {
        chain = chain.with(CamelCasePropertyNameGenerator);
    }
    chain
}

pub fn generator(config: &Config) -> TypeScriptGenerator {
    let generator = match config.output.writer {
        WriterKind::SingleFile => TypeScriptGenerator::new(
            SingleFileOutputWriter::new(config.output.file_name.clone(), TypeScriptImportGenerator),
            resolver(config),
        ),
        WriterKind::EntityPerClass => TypeScriptGenerator::new(
            EntityPerClassOutputWriter::new(
                KebabCaseFileNameGenerator::new(".ts"),
                TypeScriptImportGenerator,
            ),
            resolver(config),
        ),
    };
    let options = GeneratorOptions::new()
        .use_types_instead_of_enums(config.typescript.use_types_instead_of_enums)
        .nested_generics_use_template_literal(config.typescript.nested_generics_use_template_literal);

    generator
        .processors(processors(config))
        .property_names(property_names(config))
        .options(options)
}

/// Render a conversion to files without touching the disk.
pub fn render(config: &Config, conversion: &Conversion) -> Result<Vec<OutputFile>> {
    generator(config)
        .generate(conversion.result())
        .wrap_err("failed to generate TypeScript")
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    const USERS: &str = r#"{
  "declarations": [
    {
      "name": "UserOutput",
      "properties": [
        { "name": "id", "type": { "kind": "named", "name": "int" } },
        { "name": "created_at", "type": { "kind": "named", "name": "DateTimeImmutable" } },
        { "name": "balance", "type": { "kind": "named", "name": "Money" } },
        { "name": "nickname", "type": { "kind": "nullable", "name": "string" }, "has_default": true }
      ]
    }
  ]
}"#;

    fn project(config: &str) -> (TempDir, Config) {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("ast")).unwrap();
        fs::write(temp.path().join("ast/users.json"), USERS).unwrap();
        let path = temp.path().join("dtogen.toml");
        fs::write(&path, config).unwrap();
        let config = Config::open(&path).unwrap();
        (temp, config)
    }

    fn generate(config: &Config) -> Vec<OutputFile> {
        let units = load_units(&input_files(config).unwrap()).unwrap();
        let conversion = convert(config, &units).unwrap();
        render(config, &conversion).unwrap()
    }

    #[test]
    fn test_input_files_in_pattern_order() {
        let temp = TempDir::new().unwrap();
        for name in ["b.json", "a.json", "z.json"] {
            fs::write(temp.path().join(name), "{}").unwrap();
        }
        let path = temp.path().join("dtogen.toml");
        fs::write(&path, "[input]\nfiles = [\"z.json\", \"*.json\"]\n").unwrap();

        let config = Config::open(&path).unwrap();
        let names: Vec<String> = input_files(&config)
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["z.json", "a.json", "b.json"]);
    }

    #[test]
    fn test_no_input_files_is_an_error() {
        let (_temp, config) = project("[input]\nfiles = [\"missing/*.json\"]\n");
        let err = input_files(&config).unwrap_err();
        assert_eq!(err.to_string(), "no input files found");
    }

    #[test]
    fn test_single_file_generation() {
        let (_temp, config) = project(
            r#"
[input]
files = ["ast/*.json"]

[output]
banner = "/* eslint-disable */"

[typescript.overrides]
Money = "{ currency: string; amount: number }"
"#,
        );

        let files = generate(&config);
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].path, "generated.ts");
        assert_eq!(
            files[0].content,
            "// THE FILE WAS AUTOGENERATED USING DTOGEN. PLEASE DO NOT EDIT IT!\n\n\
             /* eslint-disable */\n\n\
             export type UserOutput = {\n  \
             id: number;\n  \
             created_at: string;\n  \
             balance: { currency: string; amount: number };\n  \
             nickname?: string | null;\n\
             };\n"
        );
    }

    #[test]
    fn test_disabled_resolvers_leave_types_unsupported() {
        let (_temp, config) = project(
            "[input]\nfiles = [\"ast/*.json\"]\n[typescript]\ndate_time = false\n",
        );
        let units = load_units(&input_files(&config).unwrap()).unwrap();
        let conversion = convert(&config, &units).unwrap();

        let err = render(&config, &conversion).unwrap_err();
        assert_eq!(err.to_string(), "failed to generate TypeScript");
        assert_eq!(
            err.root_cause().to_string(),
            "type DateTimeImmutable is not supported, referenced from UserOutput"
        );
    }

    #[test]
    fn test_property_name_options() {
        let (_temp, config) = project(
            r#"
[input]
files = ["ast/*.json"]

[output]
writer = "entity-per-class"
notice = false

[typescript]
optional_defaults = false
camel_case_properties = true

[typescript.overrides]
Money = "number"
"#,
        );

        let files = generate(&config);
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].path, "user-output.ts");
        assert_eq!(
            files[0].content,
            "export type UserOutput = {\n  \
             id: number;\n  \
             createdAt: string;\n  \
             balance: number;\n  \
             nickname: string | null;\n\
             };\n"
        );
    }

    #[test]
    fn test_dto_filter_applies() {
        let (_temp, config) = project(
            "[input]\nfiles = [\"ast/*.json\"]\n[filter]\ndto = \"Dto\"\n",
        );
        let units = load_units(&input_files(&config).unwrap()).unwrap();
        let conversion = convert(&config, &units).unwrap();
        assert!(conversion.result().dto_list().is_empty());
    }

    #[test]
    fn test_malformed_hint_becomes_a_warning() {
        let temp = TempDir::new().unwrap();
        let unit = r#"{
  "declarations": [
    { "name": "User", "properties": [{ "name": "ids", "type": { "kind": "named", "name": "array" }, "doc": "/** @var Foo<int */" }] }
  ]
}"#;
        fs::write(temp.path().join("user.json"), unit).unwrap();
        let path = temp.path().join("dtogen.toml");
        fs::write(&path, "[input]\nfiles = [\"user.json\"]\n").unwrap();
        let config = Config::open(&path).unwrap();

        let units = load_units(&input_files(&config).unwrap()).unwrap();
        let conversion = convert(&config, &units).unwrap();
        let (warnings, _) = diagnostic_messages(&conversion);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].starts_with("malformed type hint 'Foo<int'"));
        assert!(warnings[0].ends_with("\n  --> User::ids"));
    }

    #[test]
    fn test_input_entities_render_as_iri_templates() {
        let temp = TempDir::new().unwrap();
        let unit = r#"{
  "declarations": [
    {
      "name": "UserCreateInput",
      "properties": [
        { "name": "profile", "type": { "kind": "named", "name": "Profile" } },
        { "name": "money", "type": { "kind": "named", "name": "Money" } }
      ]
    }
  ]
}"#;
        fs::write(temp.path().join("input.json"), unit).unwrap();
        let path = temp.path().join("dtogen.toml");
        fs::write(
            &path,
            "[input]\nfiles = [\"input.json\"]\n[output]\nnotice = false\n\
             [typescript]\nnested_generics_use_template_literal = true\n\
             [typescript.overrides]\nMoney = \"number\"\n",
        )
        .unwrap();
        let config = Config::open(&path).unwrap();

        let files = generate(&config);
        assert_eq!(
            files[0].content,
            "export type UserCreateInput = {\n  \
             profile: `/api/profiles/${string}`;\n  \
             money: number;\n\
             };\n"
        );
    }
}

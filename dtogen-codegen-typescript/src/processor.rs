use dtogen_codegen::{OutputFile, OutputFileProcessor};

/// Name of the synthesized collection wrapper type.
pub const COLLECTION_RESPONSE_TYPE: &str = "CollectionResponse";

const COLLECTION_RESPONSE_BODY: &str = "export type CollectionResponse<Resource> = {
  'hydra:member': Resource[];
  'hydra:totalItems': number;
  'hydra:view'?: {
    '@id': string;
    'hydra:first'?: string;
    'hydra:last'?: string;
    'hydra:next'?: string;
    'hydra:previous'?: string;
  };
};
";

/// Appends the `CollectionResponse<Resource>` helper type to every file
/// that uses it without defining it.
#[derive(Debug, Clone, Copy, Default)]
pub struct AppendCollectionResponseFileProcessor;

impl OutputFileProcessor for AppendCollectionResponseFileProcessor {
    fn process(&self, mut file: OutputFile) -> OutputFile {
        let used = file.content.contains(&format!("{COLLECTION_RESPONSE_TYPE}<"));
        let defined = file
            .content
            .contains(&format!("export type {COLLECTION_RESPONSE_TYPE}"));
        if used && !defined {
            if !file.content.ends_with('\n') {
                file.content.push('\n');
            }
            file.content.push('\n');
            file.content.push_str(COLLECTION_RESPONSE_BODY);
        }
        file
    }
}

//! Form snapshots and their validation.
//!
//! Each form is read out of the DOM into one of these plain structs and
//! validated here, so a missing field is caught before any request is built.
//! File-carrying forms are generic over the file handle to keep them
//! testable without a browser.

use crate::constants::{DEFAULT_CATEGORY, DEFAULT_CSV_CATEGORY, DEFAULT_URL_CATEGORY};
use crate::error::ValidationError;
use crate::models::{NewDocument, NewExample, RagTestRequest, UrlImportRequest};
use crate::utils::or_default;

/// Anything with a user-visible file name.
pub trait NamedFile {
    fn file_name(&self) -> String;
}

impl NamedFile for web_sys::File {
    fn file_name(&self) -> String {
        self.name()
    }
}

fn required(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[derive(Clone, Debug, Default)]
pub struct ExampleForm {
    pub input: String,
    pub output: String,
    pub category: String,
}

impl ExampleForm {
    pub fn validate(&self) -> Result<NewExample, ValidationError> {
        match (required(&self.input), required(&self.output)) {
            (Some(input), Some(output)) => Ok(NewExample {
                input,
                output,
                category: or_default(&self.category, DEFAULT_CATEGORY),
            }),
            _ => Err(ValidationError::ExampleFieldsMissing),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct DocumentForm {
    pub title: String,
    pub content: String,
    pub category: String,
}

impl DocumentForm {
    pub fn validate(&self) -> Result<NewDocument, ValidationError> {
        match (required(&self.title), required(&self.content)) {
            (Some(title), Some(content)) => Ok(NewDocument {
                title,
                content,
                category: or_default(&self.category, DEFAULT_CATEGORY),
            }),
            _ => Err(ValidationError::DocumentFieldsMissing),
        }
    }
}

pub fn validate_query(query: &str) -> Result<RagTestRequest, ValidationError> {
    required(query)
        .map(|query| RagTestRequest { query })
        .ok_or(ValidationError::QueryMissing)
}

#[derive(Clone, Debug)]
pub struct CsvImportForm<F> {
    pub file: Option<F>,
    pub input_column: String,
    pub output_column: String,
    pub category_column: String,
}

/// A validated CSV upload: the file plus the text parts of the multipart
/// body.
#[derive(Clone, Debug)]
pub struct CsvImport<F> {
    pub file: F,
    pub fields: Vec<(&'static str, String)>,
}

impl<F> CsvImportForm<F> {
    pub fn validate(self) -> Result<CsvImport<F>, ValidationError> {
        let file = self.file.ok_or(ValidationError::CsvFileMissing)?;
        Ok(CsvImport {
            file,
            fields: vec![
                ("input_column", or_default(&self.input_column, "input")),
                ("output_column", or_default(&self.output_column, "output")),
                ("category_column", or_default(&self.category_column, "category")),
                ("category_default", DEFAULT_CSV_CATEGORY.to_string()),
            ],
        })
    }
}

#[derive(Clone, Debug)]
pub struct TextImportForm<F> {
    pub file: Option<F>,
    pub title: String,
    pub category: String,
}

#[derive(Clone, Debug)]
pub struct TextImport<F> {
    pub file: F,
    pub fields: Vec<(&'static str, String)>,
}

impl<F: NamedFile> TextImportForm<F> {
    pub fn validate(self) -> Result<TextImport<F>, ValidationError> {
        let file = self.file.ok_or(ValidationError::TextFileMissing)?;
        let title = or_default(&self.title, &file.file_name());
        Ok(TextImport {
            fields: vec![("title", title), ("category", self.category.trim().to_string())],
            file,
        })
    }
}

#[derive(Clone, Debug, Default)]
pub struct UrlImportForm {
    pub url: String,
    pub title: String,
    pub category: String,
}

impl UrlImportForm {
    pub fn validate(&self) -> Result<UrlImportRequest, ValidationError> {
        let url = required(&self.url).ok_or(ValidationError::UrlMissing)?;
        Ok(UrlImportRequest {
            title: or_default(&self.title, &url),
            category: or_default(&self.category, DEFAULT_URL_CATEGORY),
            url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct FakeFile(&'static str);

    impl NamedFile for FakeFile {
        fn file_name(&self) -> String {
            self.0.to_string()
        }
    }

    #[test]
    fn example_requires_input_and_output() {
        let form = ExampleForm { input: "  ".into(), output: "answer".into(), category: String::new() };
        assert_eq!(form.validate(), Err(ValidationError::ExampleFieldsMissing));

        let form = ExampleForm { input: "q".into(), output: String::new(), category: String::new() };
        assert_eq!(form.validate(), Err(ValidationError::ExampleFieldsMissing));
    }

    #[test]
    fn example_category_defaults_to_general() {
        let form = ExampleForm { input: " q ".into(), output: "a".into(), category: " ".into() };
        let example = form.validate().unwrap();
        assert_eq!(example.input, "q");
        assert_eq!(example.category, "general");
    }

    #[test]
    fn document_requires_title_and_content() {
        let form = DocumentForm { title: "Doc".into(), ..DocumentForm::default() };
        assert_eq!(form.validate(), Err(ValidationError::DocumentFieldsMissing));

        let form = DocumentForm { title: "Doc".into(), content: "body".into(), category: "faq".into() };
        assert_eq!(form.validate().unwrap().category, "faq");
    }

    #[test]
    fn blank_query_is_rejected() {
        assert_eq!(validate_query(" \n"), Err(ValidationError::QueryMissing));
        assert_eq!(validate_query(" refunds ").unwrap().query, "refunds");
    }

    #[test]
    fn csv_without_file_is_rejected() {
        let form: CsvImportForm<FakeFile> = CsvImportForm {
            file: None,
            input_column: "q".into(),
            output_column: "a".into(),
            category_column: String::new(),
        };
        assert!(matches!(form.validate(), Err(ValidationError::CsvFileMissing)));
    }

    #[test]
    fn csv_fields_carry_columns_and_default_category() {
        let form = CsvImportForm {
            file: Some(FakeFile("data.csv")),
            input_column: "question".into(),
            output_column: "answer".into(),
            category_column: String::new(),
        };
        let upload = form.validate().unwrap();
        assert_eq!(upload.file, FakeFile("data.csv"));
        assert_eq!(
            upload.fields,
            vec![
                ("input_column", "question".to_string()),
                ("output_column", "answer".to_string()),
                ("category_column", "category".to_string()),
                ("category_default", "imported".to_string()),
            ]
        );
    }

    #[test]
    fn text_title_defaults_to_file_name() {
        let form = TextImportForm { file: Some(FakeFile("notes.txt")), title: String::new(), category: "faq".into() };
        let upload = form.validate().unwrap();
        assert_eq!(upload.fields[0], ("title", "notes.txt".to_string()));
        assert_eq!(upload.fields[1], ("category", "faq".to_string()));

        let missing: TextImportForm<FakeFile> = TextImportForm { file: None, title: "t".into(), category: String::new() };
        assert!(matches!(missing.validate(), Err(ValidationError::TextFileMissing)));
    }

    #[test]
    fn url_import_defaults() {
        let form = UrlImportForm { url: " https://example.com/faq ".into(), ..UrlImportForm::default() };
        let req = form.validate().unwrap();
        assert_eq!(req.url, "https://example.com/faq");
        assert_eq!(req.title, "https://example.com/faq");
        assert_eq!(req.category, "web");

        assert_eq!(UrlImportForm::default().validate(), Err(ValidationError::UrlMissing));
    }
}
